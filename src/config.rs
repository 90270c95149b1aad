//! Page-level configuration constants.

// UI Behavior
pub const DEBOUNCE_MS: u32 = 300;
pub const FLASH_DISMISS_MS: u32 = 5000;
pub const TOAST_DISMISS_MS: u32 = 3000;
pub const DEFAULT_REFRESH_MS: u32 = 30_000;

// Fixed element ids the page markup provides (or that this module creates)
pub const SEARCH_INPUT_ID: &str = "search-input";
pub const SEARCH_RESULTS_ID: &str = "search-results";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

// Default strings
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const SEARCHING_TEXT: &str = "Searching...";

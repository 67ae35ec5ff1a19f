pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod icons;
pub mod list_utils;
pub mod pagination;

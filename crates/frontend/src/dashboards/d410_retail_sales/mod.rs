pub mod api;
pub mod error;
pub mod lifecycle;
pub mod projection;
pub mod state;
pub mod ui;

//! Core types shared across the crate.

pub mod state;
pub mod url;

pub use state::{
    is_healthy, is_serving, is_shutdown, register_server, set_healthy, set_serving,
    setup_shutdown_handler, shutdown_signal,
};
pub use url::UrlPath;

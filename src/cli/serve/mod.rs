//! Development server.
//!
//! Binds before the first build finishes; requests arriving early get a
//! self-refreshing loading page until the pipeline flips the serving flag.

mod lifecycle;
mod path;
mod response;

pub use lifecycle::{BoundServer, bind_server};

//! Command-line interface module.

pub mod args;
pub mod build;
pub mod init;
pub mod routes;
pub mod serve;

pub use args::{BuildArgs, Cli, Commands, RoutesArgs};

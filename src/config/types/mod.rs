//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Type-safe field paths                        |
//! | `handle` | Global configuration handle (thread-safe)    |
//! | `status` | Experimental field reporting                 |

mod error;
mod field;
pub mod handle;
mod status;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, clear_clean_flag, init_config, reload_config};
pub use status::{check_experimental_field, check_experimental_section};

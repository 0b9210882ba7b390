//! Experimental-status reporting for config validation.
//!
//! Called by the generated `validate_field_status` methods when an
//! experimental field or section differs from its default value.

use super::FieldPath;
use crate::config::ConfigDiagnostics;

pub fn check_experimental_field(field_path: &str, diag: &mut ConfigDiagnostics) {
    if diag.allow_experimental {
        return;
    }
    // Generated paths are effectively 'static; leak once per process.
    let path = FieldPath::new(Box::leak(field_path.to_string().into_boxed_str()));
    diag.experimental_hint(path);
}

pub fn check_experimental_section(section: &str, diag: &mut ConfigDiagnostics) {
    if diag.allow_experimental {
        return;
    }
    let path = FieldPath::new(Box::leak(format!("[{section}]").into_boxed_str()));
    diag.experimental_hint(path);
}

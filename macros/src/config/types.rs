//! Type-level helpers for the Config derive.

use quote::quote;
use syn::Type;

/// Canonical string form of a type, whitespace removed.
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Section name from the struct name when `section = "..."` is absent:
/// `BuildSectionConfig` -> `build`, `CatalogConfig` -> `catalog`.
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// TOML rendering of a `default = "..."` attribute value.
///
/// Booleans and numbers pass through bare; everything else (String,
/// PathBuf, IpAddr and friends) is quoted, since their TOML form is a
/// string.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    const BARE: &[&str] = &[
        "bool", "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize", "f32",
        "f64",
    ];
    if BARE.contains(&ty) {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}

//! `#[config(...)]` attribute parsing.

use syn::{Attribute, Lit, Meta};

/// How a field shows up in the generated template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Rendered as a live `key = value` line.
    Normal,
    /// Rendered commented out, with an experimental notice.
    Experimental,
    /// Omitted from the template entirely (still parsed from TOML).
    Hidden,
}

pub fn get_section(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "section")
}

pub fn get_custom_name(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "name")
}

pub fn get_default_value(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "default")
}

pub fn get_inline_doc(attrs: &[Attribute]) -> Option<String> {
    get_string_attr(attrs, "inline_doc")
}

/// String value of `#[config(key = "value")]`.
fn get_string_attr(attrs: &[Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut value = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                let lit: syn::LitStr = meta.value()?.parse()?;
                value = Some(lit.value());
            }
            Ok(())
        });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Presence of a bare flag like `#[config(skip)]`.
pub fn has_attr(attrs: &[Attribute], key: &str) -> bool {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(key) {
                found = true;
            }
            // Consume a trailing `= value` so other keys do not trip us up.
            if meta.input.peek(syn::Token![=]) {
                let _ = meta.value();
                let _: Option<syn::Lit> = meta.input.parse().ok();
            }
            Ok(())
        });
        if found {
            return true;
        }
    }
    false
}

/// `#[config(status = experimental)]` / `#[config(status = hidden)]`.
///
/// The status value is a bare ident, not a string literal. Unknown
/// idents fall back to Normal.
pub fn parse_field_status(attrs: &[Attribute]) -> FieldStatus {
    for attr in attrs {
        if !attr.path().is_ident("config") {
            continue;
        }
        let mut status = FieldStatus::Normal;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("status") {
                let _: syn::Token![=] = meta.input.parse()?;
                let ident: syn::Ident = meta.input.parse()?;
                status = match ident.to_string().as_str() {
                    "experimental" => FieldStatus::Experimental,
                    "hidden" => FieldStatus::Hidden,
                    _ => FieldStatus::Normal,
                };
            } else if meta.input.peek(syn::Token![=]) {
                // Skip other `key = value` pairs (section, default, ...).
                let _: syn::Token![=] = meta.input.parse()?;
                if meta.input.parse::<syn::Ident>().is_err() {
                    let _ = meta.input.parse::<syn::Lit>();
                }
            }
            Ok(())
        });
        if status != FieldStatus::Normal {
            return status;
        }
    }
    FieldStatus::Normal
}

/// Joined text of the `///` doc comment, if any.
pub fn extract_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(nv) = &attr.meta
                && let syn::Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(s) = &expr_lit.lit
            {
                return Some(s.value());
            }
            None
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(docs.join("\n").trim().to_string())
    }
}

//! Per-field view of a config struct, as the generators consume it.

use syn::Type;

use crate::config::attr::{
    extract_doc_comment, get_custom_name, get_default_value, get_inline_doc, has_attr,
    parse_field_status,
};

pub use crate::config::attr::FieldStatus;

/// Everything the FIELDS and template generators need to know about
/// one named field.
pub struct FieldInfo {
    pub name: syn::Ident,
    /// TOML key, which is the field name unless `name = "..."` overrides it.
    pub toml_name: String,
    pub ty: Type,
    pub doc: Option<String>,
    pub inline_doc: Option<String>,
    pub default: Option<String>,
    pub status: FieldStatus,
    /// `#[config(skip)]`: internal field, absent from FIELDS and template.
    pub skip: bool,
    /// `#[config(sub)]`: nested section rendered with its own header.
    pub sub: bool,
}

impl FieldInfo {
    /// None for tuple-struct fields (no ident to key on).
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        Some(Self {
            name: ident.clone(),
            toml_name: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            ty: field.ty.clone(),
            doc: extract_doc_comment(attrs),
            inline_doc: get_inline_doc(attrs),
            default: get_default_value(attrs),
            status: parse_field_status(attrs),
            skip: has_attr(attrs, "skip"),
            sub: has_attr(attrs, "sub"),
        })
    }
}

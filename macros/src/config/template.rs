//! TOML template generation for the Config derive.
//!
//! Each field renders as its doc comment (as `#` lines), then one
//! `key = value` line. Experimental fields render commented out with a
//! notice; hidden and skipped fields never reach this module.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::{FieldInfo, FieldStatus};
use crate::config::types::{format_default_for_type, type_to_string};

const EXPERIMENTAL_NOTICE: &str = "# (experimental) this feature may change or be removed\n";

pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> =
        fields.iter().map(|f| field_template_code(f)).collect();

    quote! {
        #(#field_codes)*
    }
}

/// Template code for a single field.
fn field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let doc_code = if let Some(ref doc) = info.doc {
        let doc_lines: Vec<_> = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        let doc_str = doc_lines.join("");
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    // Nested sections delegate to their own header + template.
    if info.sub {
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            #doc_code
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    let experimental = info.status == FieldStatus::Experimental;
    let notice_code = if experimental {
        quote! { out.push_str(#EXPERIMENTAL_NOTICE); }
    } else {
        quote! {}
    };
    let prefix = if experimental { "# " } else { "" };
    let inline_suffix = match &info.inline_doc {
        Some(comment) => format!("  # {comment}"),
        None => String::new(),
    };

    let ty_str = type_to_string(&info.ty);

    // Optional fields without an explicit default render commented out,
    // as a fill-in placeholder.
    if ty_str.starts_with("Option<") && info.default.is_none() {
        let line = format!("# {toml_name} = \"\"{inline_suffix}\n");
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Explicit default: the whole line is known at macro expansion time.
    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{prefix}{toml_name} = {formatted}{inline_suffix}\n");
        return quote! {
            #doc_code
            #notice_code
            out.push_str(#line);
        };
    }

    // No default attribute: serialize the Default::default() value at
    // runtime through toml::Value.
    quote! {
        #doc_code
        #notice_code
        out.push_str(#prefix);
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#inline_suffix);
        out.push('\n');
    }
}

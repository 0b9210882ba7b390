//! Config derive: FIELDS path accessors, TOML templates, and
//! experimental-field validation, generated from one struct definition.

mod attr;
mod field;
mod template;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{extract_doc_comment, get_section, parse_field_status};
use field::{FieldInfo, FieldStatus};
use template::generate_template_code;
use types::infer_section;

pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let section = get_section(&input.attrs).unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();
    let section_experimental = parse_field_status(&input.attrs) == FieldStatus::Experimental;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields.iter().filter_map(FieldInfo::from_field).collect();

    let full_path = |f: &FieldInfo| {
        if section.is_empty() {
            f.toml_name.clone()
        } else {
            format!("{}.{}", section, f.toml_name)
        }
    };

    // FIELDS: one FieldPath per non-skipped field.
    let fields_for_path: Vec<_> = field_infos.iter().filter(|f| !f.skip).collect();
    let field_defs = fields_for_path.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });
    let field_inits = fields_for_path.iter().map(|f| {
        let name = &f.name;
        let path = full_path(f);
        quote! { #name: crate::config::FieldPath::new(#path), }
    });

    // Template: hidden fields are parseable but never advertised.
    let template_fields: Vec<_> = field_infos
        .iter()
        .filter(|f| !f.skip && f.status != FieldStatus::Hidden)
        .collect();
    let template_code = generate_template_code(&template_fields);

    // Experimental validation: per-field checks, a whole-section check,
    // and recursion into nested sections.
    let own_fields: Vec<_> = field_infos.iter().filter(|f| !f.skip && !f.sub).collect();

    let experimental_checks: Vec<_> = own_fields
        .iter()
        .filter(|f| f.status == FieldStatus::Experimental)
        .map(|f| {
            let field_name = &f.name;
            let path = full_path(f);
            quote! {
                if self.#field_name != default.#field_name {
                    crate::config::types::check_experimental_field(#path, diag);
                }
            }
        })
        .collect();

    let section_check = if section_experimental && !own_fields.is_empty() {
        let differs: Vec<_> = own_fields
            .iter()
            .map(|f| {
                let field_name = &f.name;
                quote! { self.#field_name != default.#field_name }
            })
            .collect();
        quote! {
            if #(#differs)||* {
                crate::config::types::check_experimental_section(#section, diag);
            }
        }
    } else {
        quote! {}
    };

    let nested_calls: Vec<_> = field_infos
        .iter()
        .filter(|f| !f.skip && f.sub)
        .map(|f| {
            let field_name = &f.name;
            quote! { self.#field_name.validate_field_status(diag); }
        })
        .collect();

    let needs_default =
        !experimental_checks.is_empty() || (section_experimental && !own_fields.is_empty());
    let default_def = if needs_default {
        quote! { let default = Self::default(); }
    } else {
        quote! {}
    };

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Section name for TOML output.
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Section documentation.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Generate TOML template for this config section.
            pub fn template() -> String {
                let default = Self::default();
                let mut out = String::new();
                #template_code
                out
            }

            /// Generate TOML template with section header.
            pub fn template_with_header() -> String {
                let mut out = String::new();
                let doc = Self::TEMPLATE_DOC;
                if !doc.is_empty() {
                    for line in doc.lines() {
                        out.push_str("# ");
                        out.push_str(line.trim());
                        out.push('\n');
                    }
                }
                let section = Self::TEMPLATE_SECTION;
                if !section.is_empty() {
                    out.push('[');
                    out.push_str(section);
                    out.push_str("]\n");
                }
                out.push_str(&Self::template());
                out
            }

            /// Report experimental fields or sections the user has set.
            #[allow(unused_variables)]
            pub fn validate_field_status(&self, diag: &mut crate::config::ConfigDiagnostics) {
                #default_def
                #section_check
                #(#experimental_checks)*
                #(#nested_calls)*
            }
        }
    }
}

//! `#[derive(Caused)]` macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Error, Result};
use synstructure::{BindStyle, BindingInfo, Structure};

/// Generates the actual code for `#[derive(Caused)]` macro.
///
/// `vx-camera` errors either wrap a `platform::Error` directly (like
/// `GetUserMediaError::PermissionDenied`) or wrap another camera error (like
/// `StartError::GetUserMedia`). The generated `cause()` digs through such
/// nesting down to the `platform::Error`, so `CameraException` can expose
/// the JS error regardless of which operation failed.
///
/// # Algorithm
///
/// 1. Read the platform error type from `#[cause(error = "...")]`.
/// 2. For every variant, return the nested error's `cause()` if a field is
///    marked with `#[cause]`, or the field of the platform error type if
///    there is one. Variants with neither have no cause.
///
/// # Errors
///
/// If the `#[cause(error = "...")]` attribute is missing or malformed.
#[allow(clippy::needless_pass_by_value)]
pub fn derive(mut s: Structure) -> Result<TokenStream> {
    let error_type = error_type(&s)?;

    let cause_body = s.bind_with(|_| BindStyle::Move).each_variant(|v| {
        let bindings = v.bindings();
        if let Some(nested) = bindings.iter().find(|bi| has_cause_attr(bi)) {
            quote!(return #nested.cause())
        } else if let Some(err) =
            bindings.iter().find(|bi| is_type(bi, &error_type))
        {
            quote!(return Some(#err))
        } else {
            quote!(return None)
        }
    });

    Ok(s.gen_impl(quote! {
        #[automatically_derived]
        gen impl Caused for @Self {
            type Error = #error_type;

            fn cause(self) -> Option<Self::Error> {
                match self { #cause_body }
            }
        }
    }))
}

/// Extracts the path from `#[cause(error = "path::to::Error")]` attribute of
/// the derived type.
fn error_type(s: &Structure) -> Result<syn::Path> {
    let mut found = None;

    for meta in s.ast().attrs.iter().filter_map(|a| a.parse_meta().ok()) {
        if !meta.path().is_ident("cause") {
            continue;
        }
        if found.is_some() {
            return Err(Error::new_spanned(
                meta,
                "Cannot have two #[cause(...)] attributes",
            ));
        }
        let list = match meta {
            syn::Meta::List(list) => list,
            _ => {
                return Err(Error::new_spanned(
                    meta,
                    "#[cause] attribute must take a list in parentheses",
                ))
            }
        };
        let path = match list.nested.first() {
            Some(syn::NestedMeta::Meta(syn::Meta::NameValue(
                syn::MetaNameValue {
                    path,
                    lit: syn::Lit::Str(lit),
                    ..
                },
            ))) if path.is_ident("error") => {
                lit.parse_with(syn::Path::parse_mod_style)?
            }
            _ => {
                return Err(Error::new_spanned(
                    list,
                    "Expected attribute like \
                     #[cause(error = \"path::to::Error\")]",
                ))
            }
        };
        found = Some(path);
    }

    found.ok_or_else(|| {
        Error::new_spanned(
            s.ast(),
            "Cause type wasn't provided, use #[cause(error = \"...\")]",
        )
    })
}

/// Checks whether the field is marked with bare `#[cause]` attribute.
fn has_cause_attr(bi: &BindingInfo<'_>) -> bool {
    bi.ast().attrs.iter().any(|attr| match attr.parse_meta() {
        Ok(syn::Meta::Path(path)) => path.is_ident("cause"),
        _ => false,
    })
}

/// Checks whether the field has exactly the `err` type.
fn is_type(bi: &BindingInfo<'_>, err: &syn::Path) -> bool {
    match &bi.ast().ty {
        syn::Type::Path(syn::TypePath { qself: None, path }) => path == err,
        _ => false,
    }
}

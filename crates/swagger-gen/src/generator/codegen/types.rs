use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::generator::{
  ast::{TypeDescriptor, TypeKind},
  document::ScalarType,
  naming::identifiers::to_rust_type_name,
};

/// Where model types live relative to the module being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModelScope {
  /// Rendering inside `models/`.
  Sibling,
  /// Rendering inside `requests/`.
  Requests,
}

impl ModelScope {
  pub(crate) fn path(self, class: &str) -> TokenStream {
    let ident = format_ident!("{}", to_rust_type_name(class));
    match self {
      Self::Sibling => quote! { super::#ident },
      Self::Requests => quote! { super::super::models::#ident },
    }
  }
}

/// Rust spelling of `ty`. Nullable types become `Option<T>`; model
/// references held directly by a model are boxed so self-referencing models
/// stay sized.
pub(crate) fn type_tokens(ty: &TypeDescriptor, scope: ModelScope) -> TokenStream {
  wrap_nullable(ty, non_null_tokens(ty, scope))
}

/// Like [`type_tokens`], ignoring the nullable flag.
pub(crate) fn non_null_tokens(ty: &TypeDescriptor, scope: ModelScope) -> TokenStream {
  match (&ty.kind, scope) {
    (TypeKind::Reference(name), ModelScope::Sibling) => {
      let path = scope.path(name);
      quote! { Box<#path> }
    }
    _ => plain_tokens(ty, scope),
  }
}

/// Array elements need no boxing since `Vec` already allocates.
fn plain_tokens(ty: &TypeDescriptor, scope: ModelScope) -> TokenStream {
  match &ty.kind {
    TypeKind::Scalar(scalar) => scalar_tokens(*scalar),
    TypeKind::Reference(name) => scope.path(name),
    TypeKind::Array(element) => {
      let element = element_tokens(element, scope);
      quote! { Vec<#element> }
    }
  }
}

/// Spelling of an array element.
pub(crate) fn element_tokens(element: &TypeDescriptor, scope: ModelScope) -> TokenStream {
  wrap_nullable(element, plain_tokens(element, scope))
}

fn wrap_nullable(ty: &TypeDescriptor, inner: TokenStream) -> TokenStream {
  if ty.nullable {
    quote! { Option<#inner> }
  } else {
    inner
  }
}

fn scalar_tokens(scalar: ScalarType) -> TokenStream {
  match scalar {
    ScalarType::Integer => quote! { i64 },
    ScalarType::Number => quote! { f64 },
    ScalarType::String => quote! { String },
    ScalarType::Boolean => quote! { bool },
    ScalarType::Null => quote! { () },
    ScalarType::Object => quote! { serde_json::Value },
    ScalarType::File => quote! { Vec<u8> },
  }
}

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::render_file;
use crate::generator::{
  ast::ClassSet,
  naming::{
    constants::{MODELS_MODULE, REQUESTS_MODULE},
    identifiers::to_module_name,
  },
};

/// Renders the `mod.rs` files that stitch the generated tree together.
pub(crate) struct ModFileGenerator;

impl ModFileGenerator {
  /// An intermediate namespace directory holding one child.
  pub(crate) fn parents(child: &str) -> anyhow::Result<String> {
    let child = format_ident!("{}", child);
    render_file(&quote! { pub mod #child; })
  }

  /// The namespace directory itself.
  pub(crate) fn namespace() -> anyhow::Result<String> {
    let models = format_ident!("{}", MODELS_MODULE);
    let requests = format_ident!("{}", REQUESTS_MODULE);
    render_file(&quote! {
      pub mod #models;
      pub mod #requests;
    })
  }

  /// `models/mod.rs` or `requests/mod.rs`: one module per class, re-exported.
  pub(crate) fn classes(classes: &ClassSet) -> anyhow::Result<String> {
    let modules: Vec<TokenStream> = classes
      .names()
      .map(|name| {
        let module = format_ident!("{}", to_module_name(name));
        quote! {
          pub mod #module;
          pub use self::#module::*;
        }
      })
      .collect();

    render_file(&quote! { #(#modules)* })
  }
}

//! Mapping from the typed document onto [`ClassDefinition`](super::ast::ClassDefinition)s.

mod models;
mod parameters;
mod requests;
mod responses;
pub(crate) mod type_resolver;

#[cfg(test)]
mod tests;

pub(crate) use self::{models::ModelBuilder, requests::RequestBuilder, type_resolver::TypeResolver};

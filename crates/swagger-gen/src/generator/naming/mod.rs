pub mod constants;
pub mod identifiers;
pub mod paths;

#[cfg(test)]
mod tests;

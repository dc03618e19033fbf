mod identifiers;
mod paths;

pub(crate) const GENERATED_BANNER: &str = "** This file was generated automatically, you might want to avoid editing it **";

pub(crate) const DEFAULT_MODEL_BASE: &str = "SwaggerModel";
pub(crate) const DEFAULT_REQUEST_BASE: &str = "SwaggerRequest";
pub(crate) const DEFAULT_CLIENT_BASE: &str = "SwaggerClient";

pub(crate) const MODELS_MODULE: &str = "models";
pub(crate) const REQUESTS_MODULE: &str = "requests";

pub(crate) const URI_CONSTANT: &str = "URI";
pub(crate) const METHOD_CONSTANT: &str = "METHOD";

pub(crate) const PATH_SEPARATOR: char = '/';
pub(crate) const NAMESPACE_SEPARATORS: [&str; 3] = ["::", "\\", "."];

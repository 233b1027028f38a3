use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("as_child expects exactly one child element, found {found}")]
    ChildCount { found: usize },

    #[error("unknown {field} option `{value}`")]
    UnknownOption { field: &'static str, value: String },
}

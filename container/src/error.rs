use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Error {
    /// A set was expected to have exactly `expected` members.
    #[error("expected a set of {expected} element(s) but it has {found}")]
    Cardinality { expected: usize, found: usize },
    #[error("parameter {0} is already initialized (i.e. was previously accessed)")]
    AlreadyInitialized(&'static str),
}

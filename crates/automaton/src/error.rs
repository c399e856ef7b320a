use thiserror::Error;

/// Structural errors raised while constructing an automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("state '{0}' is not a known state")]
    UnknownState(String),

    #[error("symbol '{0}' is not in the alphabet")]
    UnknownSymbol(String),

    #[error("no initial state has been set")]
    MissingInitialState,

    #[error("the automaton has no states")]
    NoStates,
}

/// A query argument that violates the precondition of the query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("the maximum word length must be positive, got {0}")]
    NonPositiveMaxLength(usize),
}

/// Errors returned by a budgeted enumeration of the accepted language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("search budget exhausted after {steps} steps")]
    BudgetExhausted { steps: usize },
}

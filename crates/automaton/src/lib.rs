//!
//! A crate containing deterministic finite automata and the queries on them:
//! acceptance of a word, the trace of a run, and the enumeration of the
//! accepted language up to a length bound.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod budget;
mod builder;
mod deterministic_automaton;
mod enumerator;
mod error;
mod name_table;
mod random_dfa;
mod simulator;
mod word;

pub use budget::*;
pub use builder::*;
pub use deterministic_automaton::*;
pub use enumerator::*;
pub use error::*;
pub use random_dfa::*;
pub use simulator::*;
pub use word::*;

//!
//! A crate containing IO related functionality. This includes the reading and
//! writing of the textual automaton definition format.
//!

mod line_iterator;

pub mod io_definition;

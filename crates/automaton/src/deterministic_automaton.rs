use std::fmt;

use itertools::iproduct;
use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::name_table::NameTable;

/// The index for a state.
pub type StateIndex = usize;

/// The index for a symbol of the alphabet.
pub type SymbolIndex = usize;

/// A deterministic finite automaton, consisting of states, an alphabet, a
/// transition function, an initial state and a set of final states.
///
/// The transition function is keyed by the pair (origin, symbol) so that
/// every pair has at most one destination. A `Dfa` is immutable, it can only
/// be obtained from [crate::DfaBuilder::build].
#[derive(Clone)]
pub struct Dfa {
    pub(crate) states: NameTable,
    pub(crate) symbols: NameTable,
    pub(crate) transitions: FxHashMap<(StateIndex, SymbolIndex), StateIndex>,
    pub(crate) initial_state: StateIndex,
    pub(crate) final_states: Vec<bool>,
}

impl Dfa {
    /// Returns the index of the initial state.
    pub fn initial_state_index(&self) -> StateIndex {
        self.initial_state
    }

    /// Returns the name of the initial state.
    pub fn initial_state(&self) -> &str {
        self.states.name(self.initial_state)
    }

    /// Returns the index of the state with the given name.
    pub fn state_index(&self, name: &str) -> Option<StateIndex> {
        self.states.index_of(name)
    }

    /// Returns the index of the symbol with the given name.
    pub fn symbol_index(&self, name: &str) -> Option<SymbolIndex> {
        self.symbols.index_of(name)
    }

    pub fn state_name(&self, state: StateIndex) -> &str {
        self.states.name(state)
    }

    pub fn symbol_name(&self, symbol: SymbolIndex) -> &str {
        self.symbols.name(symbol)
    }

    /// Iterate over the names of all states, in order of insertion.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.iter()
    }

    /// Iterate over the symbols of the alphabet, in order of insertion.
    pub fn alphabet(&self) -> impl Iterator<Item = &str> + '_ {
        self.symbols.iter()
    }

    /// Iterate over the names of the final states.
    pub fn final_states(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter_states()
            .filter(|state| self.is_final(*state))
            .map(|state| self.states.name(state))
    }

    /// Returns true iff the given state is a final state.
    pub fn is_final(&self, state: StateIndex) -> bool {
        self.final_states[state]
    }

    /// Returns the destination of the transition from `state` with `symbol`, if it is defined.
    pub fn transition(&self, state: StateIndex, symbol: SymbolIndex) -> Option<StateIndex> {
        self.transitions.get(&(state, symbol)).copied()
    }

    /// Looks up the transition by names, returns None when either name is
    /// unknown or no transition is defined.
    pub fn transition_of(&self, origin: &str, symbol: &str) -> Option<&str> {
        let origin = self.states.index_of(origin)?;
        let symbol = self.symbols.index_of(symbol)?;
        self.transition(origin, symbol).map(|to| self.states.name(to))
    }

    /// Iterate over all transitions as (origin, symbol, destination), ordered
    /// by origin and then symbol insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        iproduct!(self.iter_states(), 0..self.num_of_symbols()).filter_map(|(from, symbol)| {
            self.transition(from, symbol).map(|to| {
                (
                    self.states.name(from),
                    self.symbols.name(symbol),
                    self.states.name(to),
                )
            })
        })
    }

    /// Iterate over all state indices.
    pub fn iter_states(&self) -> impl Iterator<Item = StateIndex> {
        0..self.states.len()
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of symbols in the alphabet.
    pub fn num_of_symbols(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the number of defined transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.len()
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print some information about the automaton.
        writeln!(f, "Number of states: {}", self.num_of_states())?;
        writeln!(f, "Number of symbols: {}", self.num_of_symbols())?;
        write!(f, "Number of transitions: {}", self.num_of_transitions())
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States: {}", self.states().sorted().join(", "))?;
        writeln!(f, "Alphabet: {}", self.alphabet().sorted().join(", "))?;
        writeln!(f, "Initial state: {}", self.initial_state())?;
        writeln!(f, "Final states: {}", self.final_states().sorted().join(", "))?;

        for (from, symbol, to) in self.transitions().sorted() {
            writeln!(f, "{from} --[{symbol}]-> {to}")?;
        }

        Ok(())
    }
}

use log::debug;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use crate::name_table::NameTable;
use crate::Dfa;
use crate::StateIndex;
use crate::SymbolIndex;
use crate::ValidationError;

/// Incrementally constructs a [Dfa], validating every mutation against the
/// states and symbols that are already known.
///
/// Only [DfaBuilder::build] produces an automaton that can be queried, and it
/// fails when the result would be incomplete.
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    states: NameTable,
    symbols: NameTable,
    transitions: FxHashMap<(StateIndex, SymbolIndex), StateIndex>,
    initial_state: Option<StateIndex>,
    final_states: FxHashSet<StateIndex>,
}

impl DfaBuilder {
    pub fn new() -> DfaBuilder {
        DfaBuilder::default()
    }

    /// Adds a state, adding an existing state has no effect.
    pub fn add_state(&mut self, name: &str) -> StateIndex {
        self.states.insert(name)
    }

    /// Adds a symbol to the alphabet, adding an existing symbol has no effect.
    pub fn add_symbol(&mut self, name: &str) -> SymbolIndex {
        self.symbols.insert(name)
    }

    /// Returns true iff a state with the given name was added.
    pub fn has_state(&self, name: &str) -> bool {
        self.states.index_of(name).is_some()
    }

    /// Returns true iff the given symbol is in the alphabet.
    pub fn has_symbol(&self, name: &str) -> bool {
        self.symbols.index_of(name).is_some()
    }

    /// Sets the initial state, replacing the previous one.
    pub fn set_initial(&mut self, name: &str) -> Result<(), ValidationError> {
        self.initial_state = Some(self.known_state(name)?);
        Ok(())
    }

    /// Marks the given state as a final state.
    pub fn add_final(&mut self, name: &str) -> Result<(), ValidationError> {
        let state = self.known_state(name)?;
        self.final_states.insert(state);
        Ok(())
    }

    /// Defines the transition from `origin` with `symbol` to `destination`.
    ///
    /// An existing transition for (origin, symbol) is replaced, its previous
    /// destination is returned.
    pub fn set_transition(
        &mut self,
        origin: &str,
        symbol: &str,
        destination: &str,
    ) -> Result<Option<String>, ValidationError> {
        let from = self.known_state(origin)?;
        let label = self
            .symbols
            .index_of(symbol)
            .ok_or_else(|| ValidationError::UnknownSymbol(symbol.to_string()))?;
        let to = self.known_state(destination)?;

        debug!("Set transition {} --[{}]-> {}", origin, symbol, destination);

        Ok(self
            .transitions
            .insert((from, label), to)
            .map(|previous| self.states.name(previous).to_string()))
    }

    /// Returns the destination of the transition from `origin` with `symbol`, if defined.
    pub fn transition_of(&self, origin: &str, symbol: &str) -> Option<&str> {
        let from = self.states.index_of(origin)?;
        let label = self.symbols.index_of(symbol)?;
        self.transitions
            .get(&(from, label))
            .map(|to| self.states.name(*to))
    }

    /// Finishes the construction, the state set must be non-empty and an
    /// initial state must be set.
    pub fn build(self) -> Result<Dfa, ValidationError> {
        if self.states.is_empty() {
            return Err(ValidationError::NoStates);
        }

        let initial_state = self.initial_state.ok_or(ValidationError::MissingInitialState)?;

        let mut final_states = vec![false; self.states.len()];
        for state in self.final_states {
            final_states[state] = true;
        }

        Ok(Dfa {
            states: self.states,
            symbols: self.symbols,
            transitions: self.transitions,
            initial_state,
            final_states,
        })
    }

    fn known_state(&self, name: &str) -> Result<StateIndex, ValidationError> {
        self.states
            .index_of(name)
            .ok_or_else(|| ValidationError::UnknownState(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;
    use test_log::test;

    use super::*;

    fn states_and_symbols() -> DfaBuilder {
        let mut builder = DfaBuilder::new();
        builder.add_state("q0");
        builder.add_state("q1");
        builder.add_symbol("a");
        builder.add_symbol("b");
        builder
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut builder = states_and_symbols();

        assert_eq!(builder.add_state("q0"), 0);
        assert_eq!(builder.add_symbol("b"), 1);

        builder.set_initial("q0").unwrap();
        let dfa = builder.build().unwrap();
        assert_eq!(dfa.num_of_states(), 2);
        assert_eq!(dfa.num_of_symbols(), 2);
    }

    #[test]
    fn test_unknown_initial_state() {
        let mut builder = states_and_symbols();

        assert_eq!(
            builder.set_initial("q7"),
            Err(ValidationError::UnknownState("q7".to_string()))
        );
    }

    #[test]
    fn test_unknown_final_state() {
        let mut builder = states_and_symbols();

        assert_eq!(
            builder.add_final("q7"),
            Err(ValidationError::UnknownState("q7".to_string()))
        );
    }

    #[test_case("q7", "a", "q1", ValidationError::UnknownState("q7".into()) ; "unknown origin")]
    #[test_case("q0", "c", "q1", ValidationError::UnknownSymbol("c".into()) ; "unknown symbol")]
    #[test_case("q0", "a", "q7", ValidationError::UnknownState("q7".into()) ; "unknown destination")]
    fn test_invalid_transition(origin: &str, symbol: &str, destination: &str, expected: ValidationError) {
        let mut builder = states_and_symbols();

        assert_eq!(builder.set_transition(origin, symbol, destination), Err(expected));
        assert_eq!(builder.transition_of(origin, symbol), None);
    }

    #[test]
    fn test_last_transition_wins() {
        let mut builder = states_and_symbols();

        assert_eq!(builder.set_transition("q0", "a", "q1"), Ok(None));
        assert_eq!(builder.set_transition("q0", "a", "q0"), Ok(Some("q1".to_string())));
        assert_eq!(builder.transition_of("q0", "a"), Some("q0"));

        builder.set_initial("q0").unwrap();
        let dfa = builder.build().unwrap();
        assert_eq!(dfa.num_of_transitions(), 1);
        assert_eq!(dfa.transition_of("q0", "a"), Some("q0"));
    }

    #[test]
    fn test_build_requires_states() {
        assert_eq!(DfaBuilder::new().build().err(), Some(ValidationError::NoStates));
    }

    #[test]
    fn test_build_requires_initial_state() {
        assert_eq!(
            states_and_symbols().build().err(),
            Some(ValidationError::MissingInitialState)
        );
    }

    #[test]
    fn test_empty_final_states() {
        let mut builder = states_and_symbols();
        builder.set_initial("q1").unwrap();

        let dfa = builder.build().unwrap();
        assert_eq!(dfa.final_states().count(), 0);
        assert_eq!(dfa.initial_state(), "q1");
    }
}

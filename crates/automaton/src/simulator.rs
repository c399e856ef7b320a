use std::fmt;

use log::trace;

use crate::Dfa;
use crate::StateIndex;

/// The reason a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The word contains a symbol outside of the alphabet.
    UnknownSymbol(String),

    /// No transition is defined for the current state and symbol.
    MissingTransition { state: String, symbol: String },

    /// The whole word was consumed.
    Finished { state: String, accepting: bool },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownSymbol(symbol) => write!(f, "symbol '{symbol}' is not in the alphabet"),
            Diagnostic::MissingTransition { state, symbol } => {
                write!(f, "no transition from {state} on '{symbol}'")
            }
            Diagnostic::Finished { state, accepting: true } => write!(f, "ending state {state} is accepting"),
            Diagnostic::Finished { state, accepting: false } => {
                write!(f, "ending state {state} is not accepting")
            }
        }
    }
}

/// The states visited while running a word, starting with the initial state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<'a> {
    pub accepted: bool,
    pub path: Vec<&'a str>,
    pub diagnostic: Diagnostic,
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" -> "))
    }
}

/// A single step of a run.
enum Step {
    Next(StateIndex),
    UnknownSymbol,
    MissingTransition,
}

fn step(dfa: &Dfa, state: StateIndex, symbol: &str) -> Step {
    match dfa.symbol_index(symbol) {
        None => Step::UnknownSymbol,
        Some(symbol) => match dfa.transition(state, symbol) {
            Some(to) => Step::Next(to),
            None => Step::MissingTransition,
        },
    }
}

/// Returns true iff the automaton accepts the given word. Words containing a
/// symbol outside of the alphabet, or requiring an undefined transition, are
/// rejected.
pub fn is_accepted<S: AsRef<str>>(dfa: &Dfa, word: &[S]) -> bool {
    let mut state = dfa.initial_state_index();

    for symbol in word {
        match step(dfa, state, symbol.as_ref()) {
            Step::Next(to) => state = to,
            Step::UnknownSymbol | Step::MissingTransition => return false,
        }
    }

    dfa.is_final(state)
}

/// Runs the given word and records every visited state. The run stops at the
/// first unknown symbol or undefined transition.
pub fn trace_word<'a, S: AsRef<str>>(dfa: &'a Dfa, word: &[S]) -> Trace<'a> {
    let mut state = dfa.initial_state_index();
    let mut path = Vec::with_capacity(word.len() + 1);
    path.push(dfa.state_name(state));

    for symbol in word {
        let symbol = symbol.as_ref();
        match step(dfa, state, symbol) {
            Step::Next(to) => {
                trace!("{} --[{}]-> {}", dfa.state_name(state), symbol, dfa.state_name(to));
                state = to;
                path.push(dfa.state_name(state));
            }
            Step::UnknownSymbol => {
                return Trace {
                    accepted: false,
                    path,
                    diagnostic: Diagnostic::UnknownSymbol(symbol.to_string()),
                };
            }
            Step::MissingTransition => {
                return Trace {
                    accepted: false,
                    path,
                    diagnostic: Diagnostic::MissingTransition {
                        state: dfa.state_name(state).to_string(),
                        symbol: symbol.to_string(),
                    },
                };
            }
        }
    }

    let accepted = dfa.is_final(state);
    Trace {
        accepted,
        path,
        diagnostic: Diagnostic::Finished {
            state: dfa.state_name(state).to_string(),
            accepting: accepted,
        },
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;
    use test_case::test_case;
    use test_log::test;

    use crate::random_dfa;
    use crate::DfaBuilder;

    use super::*;

    /// Accepts the words over {a, b} that end with an a.
    fn ends_with_a() -> Dfa {
        let mut builder = DfaBuilder::new();
        builder.add_state("q0");
        builder.add_state("q1");
        builder.add_symbol("a");
        builder.add_symbol("b");
        builder.set_initial("q0").unwrap();
        builder.add_final("q1").unwrap();
        builder.set_transition("q0", "a", "q1").unwrap();
        builder.set_transition("q0", "b", "q0").unwrap();
        builder.set_transition("q1", "a", "q1").unwrap();
        builder.set_transition("q1", "b", "q0").unwrap();
        builder.build().unwrap()
    }

    #[test_case(&["a"], true, &["q0", "q1"] ; "a")]
    #[test_case(&["b"], false, &["q0", "q0"] ; "b")]
    #[test_case(&["a", "b"], false, &["q0", "q1", "q0"] ; "ab")]
    #[test_case(&[], false, &["q0"] ; "empty")]
    fn test_trace(word: &[&str], accepted: bool, path: &[&str]) {
        let dfa = ends_with_a();

        let trace = trace_word(&dfa, word);
        assert_eq!(trace.accepted, accepted);
        assert_eq!(trace.path, path);
        assert_eq!(is_accepted(&dfa, word), accepted);
    }

    #[test]
    fn test_unknown_symbol() {
        let dfa = ends_with_a();

        let trace = trace_word(&dfa, &["c"]);
        assert!(!trace.accepted);
        assert_eq!(trace.path, vec!["q0"]);
        assert_eq!(trace.diagnostic.to_string(), "symbol 'c' is not in the alphabet");
        assert!(!is_accepted(&dfa, &["c"]));
    }

    #[test]
    fn test_missing_transition() {
        let mut builder = DfaBuilder::new();
        builder.add_state("q0");
        builder.add_state("q1");
        builder.add_symbol("a");
        builder.set_initial("q0").unwrap();
        builder.add_final("q1").unwrap();
        builder.set_transition("q0", "a", "q1").unwrap();
        let dfa = builder.build().unwrap();

        let trace = trace_word(&dfa, &["a", "a", "a"]);
        assert!(!trace.accepted);
        assert_eq!(trace.path, vec!["q0", "q1"]);
        assert_eq!(trace.diagnostic.to_string(), "no transition from q1 on 'a'");
        assert!(!is_accepted(&dfa, &["a", "a"]));
    }

    #[test]
    fn test_finished_diagnostic() {
        let dfa = ends_with_a();

        assert_eq!(
            trace_word(&dfa, &["b", "a"]).diagnostic.to_string(),
            "ending state q1 is accepting"
        );
        assert_eq!(
            trace_word(&dfa, &["a", "b"]).diagnostic.to_string(),
            "ending state q0 is not accepting"
        );
        assert_eq!(trace_word(&dfa, &["a", "b"]).to_string(), "q0 -> q1 -> q0");
    }

    #[test]
    fn test_trace_agrees_with_acceptance() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            let dfa = random_dfa(&mut rng, 5, 3, 0.7);
            let symbols: Vec<&str> = dfa.alphabet().chain(["z"]).collect();

            for _ in 0..50 {
                let length = rng.random_range(0..8);
                let word: Vec<&str> = (0..length)
                    .map(|_| symbols[rng.random_range(0..symbols.len())])
                    .collect();

                let trace = trace_word(&dfa, &word[..]);
                assert_eq!(trace.accepted, is_accepted(&dfa, &word[..]));
                assert_eq!(trace, trace_word(&dfa, &word[..]), "runs must be deterministic");

                if matches!(trace.diagnostic, Diagnostic::Finished { .. }) {
                    assert_eq!(trace.path.len(), word.len() + 1);
                } else {
                    assert!(trace.path.len() <= word.len());
                }
            }
        }
    }
}

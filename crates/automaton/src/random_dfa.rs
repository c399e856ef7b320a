use rand::Rng;

use crate::Dfa;
use crate::DfaBuilder;

/// Generates an automaton with states s0, s1, ... and lower case letters as
/// symbols. Every (state, symbol) pair has a transition with probability
/// `density`, and every state is final with probability one half. The state
/// s0 is the initial state.
pub fn random_dfa(rng: &mut impl Rng, num_of_states: usize, num_of_symbols: u32, density: f64) -> Dfa {
    assert!(num_of_states > 0, "An automaton requires at least one state");
    assert!(num_of_symbols <= 26, "Symbols are single lower case letters");

    let mut builder = DfaBuilder::new();

    let states: Vec<String> = (0..num_of_states).map(|i| format!("s{i}")).collect();
    for state in &states {
        builder.add_state(state);
    }

    // Introduce lower case letters for the symbols.
    let symbols: Vec<String> = (0..num_of_symbols)
        .filter_map(|i| char::from_digit(i + 10, 36))
        .map(String::from)
        .collect();
    for symbol in &symbols {
        builder.add_symbol(symbol);
    }

    builder
        .set_initial(&states[0])
        .expect("The initial state was added before");

    for state in &states {
        if rng.random_bool(0.5) {
            builder.add_final(state).expect("Final states were added before");
        }

        for symbol in &symbols {
            if rng.random_bool(density) {
                let to = &states[rng.random_range(0..num_of_states)];
                builder
                    .set_transition(state, symbol, to)
                    .expect("Transitions only use known states and symbols");
            }
        }
    }

    builder.build().expect("The random automaton is complete")
}

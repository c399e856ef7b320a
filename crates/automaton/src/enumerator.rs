use std::collections::BTreeSet;

use log::info;
use log::trace;
use rustc_hash::FxHashSet;

use crate::Dfa;
use crate::EnumerationError;
use crate::InputError;
use crate::SearchBudget;
use crate::StateIndex;
use crate::SymbolIndex;
use crate::Unlimited;
use crate::Word;

/// Returns all words of length at most `max_length` that are accepted by the
/// automaton, sorted and without duplicates. The empty word is included iff
/// the initial state is final.
///
/// Words are compared by their text: when multi-character symbols spell the
/// same text in several ways only the least symbol sequence is kept.
///
/// The search is exhaustive and its cost grows exponentially with
/// `max_length`, see [generate_words_with_budget] to bound it.
pub fn generate_words(dfa: &Dfa, max_length: usize) -> Result<Vec<Word>, InputError> {
    match generate_words_with_budget(dfa, max_length, &mut Unlimited) {
        Ok(words) => Ok(words),
        Err(EnumerationError::Input(error)) => Err(error),
        Err(EnumerationError::BudgetExhausted { .. }) => {
            unreachable!("An unlimited budget is never exhausted")
        }
    }
}

/// The same as [generate_words], but every expanded search node consumes one
/// step of the given budget. Fails without a partial result when the budget
/// runs out.
pub fn generate_words_with_budget<B: SearchBudget>(
    dfa: &Dfa,
    max_length: usize,
    budget: &mut B,
) -> Result<Vec<Word>, EnumerationError> {
    if max_length == 0 {
        return Err(InputError::NonPositiveMaxLength(max_length).into());
    }

    let mut words = BTreeSet::new();
    if dfa.is_final(dfa.initial_state_index()) {
        words.insert(Word::empty());
    }

    let mut search = Search { dfa, budget, steps: 0 };

    // Every length is searched independently from the initial state.
    for length in 1..=max_length {
        let accepted = search.accepted_words(&[], dfa.initial_state_index(), length)?;
        trace!("Found {} accepted words of length {}", accepted.len(), length);

        words.extend(accepted.into_iter().map(|symbols| {
            symbols
                .into_iter()
                .map(|symbol| dfa.symbol_name(symbol))
                .collect::<Word>()
        }));
    }

    // Iterating in order keeps the least symbol sequence for every text.
    let mut texts = FxHashSet::default();
    let words: Vec<Word> = words
        .into_iter()
        .filter(|word| texts.insert(word.symbols().concat()))
        .collect();

    info!(
        "Generated {} accepted words up to length {} in {} steps",
        words.len(),
        max_length,
        search.steps
    );

    Ok(words)
}

/// A depth first search for the accepted words of a fixed length.
struct Search<'a, B> {
    dfa: &'a Dfa,
    budget: &'a mut B,
    steps: usize,
}

impl<B: SearchBudget> Search<'_, B> {
    /// Returns the words `prefix · suffix` such that reading `suffix` from
    /// `state` takes exactly `remaining` transitions and ends in a final state.
    /// Symbols without a transition from `state` are not explored.
    fn accepted_words(
        &mut self,
        prefix: &[SymbolIndex],
        state: StateIndex,
        remaining: usize,
    ) -> Result<Vec<Vec<SymbolIndex>>, EnumerationError> {
        if !self.budget.step() {
            return Err(EnumerationError::BudgetExhausted { steps: self.steps });
        }
        self.steps += 1;

        if remaining == 0 {
            return Ok(if self.dfa.is_final(state) {
                vec![prefix.to_vec()]
            } else {
                Vec::new()
            });
        }

        let mut words = Vec::new();
        for symbol in 0..self.dfa.num_of_symbols() {
            if let Some(to) = self.dfa.transition(state, symbol) {
                let mut extended = Vec::with_capacity(prefix.len() + 1);
                extended.extend_from_slice(prefix);
                extended.push(symbol);

                words.extend(self.accepted_words(&extended, to, remaining - 1)?);
            }
        }

        Ok(words)
    }
}

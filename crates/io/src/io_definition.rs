use std::error::Error;
use std::io::Read;
use std::io::Write;

use log::trace;
use log::warn;
use regex::Regex;
use streaming_iterator::StreamingIterator;
use thiserror::Error;

use dfarust_automaton::Dfa;
use dfarust_automaton::DfaBuilder;

use crate::line_iterator::LineIterator;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Invalid transition on line {line}, expected <origin>,<symbol>,<destination>")]
    InvalidTransition { line: usize },

    #[error("Unexpected line {line}: {text}")]
    UnexpectedLine { line: usize, text: String },

    #[error("Section '{section}' on line {line} was already defined")]
    DuplicateSection { line: usize, section: String },
}

/// What to do with a final state that is not in the list of states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FinalStatePolicy {
    /// Fail with a validation error.
    #[default]
    Reject,

    /// Log a warning and ignore the final state.
    Warn,
}

/// The sections of a definition, before they are validated.
#[derive(Default)]
struct DefinitionSyntax {
    states: Option<Vec<String>>,
    alphabet: Option<Vec<String>>,
    initial_state: Option<String>,
    final_states: Option<Vec<String>>,
    transitions: Vec<(usize, String, String, String)>,
}

/// Splits a comma separated list, ignoring empty items.
fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stores the value of a section, failing when it was already set.
fn set_section<T>(slot: &mut Option<T>, value: T, section: &str, line: usize) -> Result<(), DefinitionError> {
    if slot.is_some() {
        return Err(DefinitionError::DuplicateSection {
            line,
            section: section.to_string(),
        });
    }

    *slot = Some(value);
    Ok(())
}

/// Loads a deterministic finite automaton from its textual definition.
///
/// The definition consists of the header sections, in any order:
///     `Estados: <state>, <state>, ...`
///     `Alfabeto: <symbol>, <symbol>, ...`
///     `Estado_inicial: <state>`
///     `Estados_finais: <state>, <state>, ...`
///
/// Followed by `Transicoes:` and one line for every transition:
///     `<origin>,<symbol>,<destination>`
///
/// Section names are case insensitive and may omit the underscore. Blank
/// lines are ignored. When the same (origin, symbol) pair occurs on
/// multiple lines the last one is used.
pub fn read_definition(reader: impl Read, policy: FinalStatePolicy) -> Result<Dfa, Box<dyn Error>> {
    let mut lines = LineIterator::new(reader);

    // Regex for <section>: <value>, section names ignore case and underscores.
    let section_regex = Regex::new(r#"(?i)^(estados|alfabeto|estado_*inicial|estados_*finais|transicoes)\s*:\s*(.*)$"#)
        .expect("Regex compilation should not fail");

    // Regex for <origin>,<symbol>,<destination>
    let transition_regex =
        Regex::new(r#"^([^,]*?)\s*,\s*([^,]*?)\s*,\s*([^,]*?)$"#).expect("Regex compilation should not fail");

    let mut syntax = DefinitionSyntax::default();
    let mut in_transitions = false;

    loop {
        lines.advance();
        let Some(line) = lines.get() else {
            break;
        };
        let line_number = lines.line_number();
        trace!("{}: {}", line_number, line);

        if in_transitions {
            let (_, [from_txt, symbol_txt, to_txt]) = transition_regex
                .captures(line)
                .ok_or(DefinitionError::InvalidTransition { line: line_number })?
                .extract();

            if from_txt.is_empty() || symbol_txt.is_empty() || to_txt.is_empty() {
                return Err(DefinitionError::InvalidTransition { line: line_number }.into());
            }

            syntax.transitions.push((
                line_number,
                from_txt.to_string(),
                symbol_txt.to_string(),
                to_txt.to_string(),
            ));
            continue;
        }

        let (_, [section, value]) = section_regex
            .captures(line)
            .ok_or_else(|| DefinitionError::UnexpectedLine {
                line: line_number,
                text: line.to_string(),
            })?
            .extract();

        match section.to_lowercase().replace('_', "").as_str() {
            "estados" => set_section(&mut syntax.states, split_list(value), section, line_number)?,
            "alfabeto" => set_section(&mut syntax.alphabet, split_list(value), section, line_number)?,
            "estadoinicial" => {
                set_section(&mut syntax.initial_state, value.to_string(), section, line_number)?
            }
            "estadosfinais" => {
                set_section(&mut syntax.final_states, split_list(value), section, line_number)?
            }
            _ => {
                // The transitions take up the remainder of the definition.
                if !value.is_empty() {
                    return Err(DefinitionError::UnexpectedLine {
                        line: line_number,
                        text: line.to_string(),
                    }
                    .into());
                }
                in_transitions = true;
            }
        }
    }

    if let Some(error) = lines.take_error() {
        warn!("Reading stopped after line {}", lines.line_number());
        return Err(error.into());
    }

    build(syntax, policy)
}

/// Validates the parsed sections and constructs the automaton.
fn build(syntax: DefinitionSyntax, policy: FinalStatePolicy) -> Result<Dfa, Box<dyn Error>> {
    let mut builder = DfaBuilder::new();

    for state in syntax.states.unwrap_or_default() {
        builder.add_state(&state);
    }

    for symbol in syntax.alphabet.unwrap_or_default() {
        builder.add_symbol(&symbol);
    }

    if let Some(initial_state) = syntax.initial_state.filter(|state| !state.is_empty()) {
        builder.set_initial(&initial_state)?;
    }

    for state in syntax.final_states.unwrap_or_default() {
        match builder.add_final(&state) {
            Ok(()) => {}
            Err(error) if policy == FinalStatePolicy::Warn => {
                warn!("Ignoring final state: {}", error);
            }
            Err(error) => return Err(error.into()),
        }
    }

    for (line, from, symbol, to) in &syntax.transitions {
        if let Some(previous) = builder.set_transition(from, symbol, to)? {
            if previous != *to {
                warn!(
                    "Transition {} --[{}]-> {} on line {} replaces destination {}",
                    from, symbol, to, line, previous
                );
            }
        }
    }

    Ok(builder.build()?)
}

/// Writes the automaton in the textual definition format, the order of the
/// states and symbols is preserved.
pub fn write_definition(writer: &mut impl Write, dfa: &Dfa) -> Result<(), Box<dyn Error>> {
    writeln!(writer, "Estados: {}", dfa.states().collect::<Vec<_>>().join(","))?;
    writeln!(writer, "Alfabeto: {}", dfa.alphabet().collect::<Vec<_>>().join(","))?;
    writeln!(writer, "Estado_inicial: {}", dfa.initial_state())?;
    writeln!(writer, "Estados_finais: {}", dfa.final_states().collect::<Vec<_>>().join(","))?;
    writeln!(writer, "Transicoes:")?;

    for (from, symbol, to) in dfa.transitions() {
        writeln!(writer, "{},{},{}", from, symbol, to)?;
    }

    Ok(())
}

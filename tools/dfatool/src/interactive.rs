use std::io::BufRead;
use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use log::warn;

use dfarust_automaton::Dfa;
use dfarust_automaton::DfaBuilder;

/// Prompts for the parts of an automaton on `output` and reads the answers
/// from `input`. Invalid answers are reported and asked again, final states
/// that do not exist are skipped with a warning.
pub fn build_interactive(input: &mut impl BufRead, output: &mut impl Write) -> Result<Dfa> {
    let mut builder = DfaBuilder::new();

    writeln!(output, "=== Automaton definition ===")?;

    loop {
        let states = split_list(&prompt(input, output, "States, separated by commas (e.g. q0,q1,q2): ")?);
        if states.is_empty() {
            writeln!(output, "At least one state is required!")?;
            continue;
        }

        for state in &states {
            builder.add_state(state);
        }
        break;
    }

    for symbol in split_list(&prompt(input, output, "Alphabet, separated by commas (e.g. a,b): ")?) {
        builder.add_symbol(&symbol);
    }

    loop {
        let initial = prompt(input, output, "Initial state: ")?;
        match builder.set_initial(&initial) {
            Ok(()) => break,
            Err(error) => writeln!(output, "{error}!")?,
        }
    }

    for state in split_list(&prompt(input, output, "Final states, separated by commas: ")?) {
        if let Err(error) = builder.add_final(&state) {
            warn!("Ignoring final state: {}", error);
            writeln!(output, "Warning: {error}, it is ignored")?;
        }
    }

    writeln!(output)?;
    writeln!(output, "=== Transitions ===")?;
    writeln!(output, "Enter transitions as origin,symbol,destination, and 'end' to finish")?;

    loop {
        let line = prompt(input, output, "Transition: ")?;
        if line.eq_ignore_ascii_case("end") || line.eq_ignore_ascii_case("fim") {
            break;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let [from, symbol, to] = parts[..] else {
            writeln!(output, "Invalid format! Use: origin,symbol,destination")?;
            continue;
        };

        match builder.set_transition(from, symbol, to) {
            Ok(Some(previous)) if previous != to => {
                writeln!(output, "Transition replaced: {from} --[{symbol}]-> {to} (was {previous})")?
            }
            Ok(_) => writeln!(output, "Transition added: {from} --[{symbol}]-> {to}")?,
            Err(error) => writeln!(output, "{error}!")?,
        }
    }

    Ok(builder.build()?)
}

/// Prints the question and returns the trimmed answer.
fn prompt(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        bail!("Unexpected end of input while reading the automaton");
    }

    Ok(answer.trim().to_string())
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

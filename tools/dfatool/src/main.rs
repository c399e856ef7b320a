use std::fs::File;
use std::io::stdin;
use std::io::stdout;
use std::io::BufWriter;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::anyhow;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use itertools::Itertools;
use log::info;

use dfarust_automaton::generate_words;
use dfarust_automaton::generate_words_with_budget;
use dfarust_automaton::trace_word;
use dfarust_automaton::Deadline;
use dfarust_automaton::Dfa;
use dfarust_automaton::StepLimit;
use dfarust_automaton::Word;
use dfarust_io::io_definition::read_definition;
use dfarust_io::io_definition::write_definition;
use dfarust_io::io_definition::FinalStatePolicy;
use dfarust_utilities::Timing;

use crate::interactive::build_interactive;

mod interactive;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(
    name = "dfatool",
    about = "A command line tool for deterministic finite automata",
    long_about = "Reads deterministic finite automata from their textual definition, decides acceptance of words and generates the accepted words up to a given length"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true, help = "Reject final states that are not in the list of states")]
    strict: bool,

    #[arg(long, global = true, help = "Print the time spent in every phase")]
    time: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the definition of the automaton.
    Info {
        #[arg(value_name = "FILE")]
        filename: String,
    },

    /// Runs the given words and prints the visited states.
    Accept {
        #[arg(value_name = "FILE")]
        filename: String,

        #[arg(required = true, help = "Words to run, use \"\" or epsilon for the empty word")]
        words: Vec<String>,

        #[arg(short, long, help = "Separates the symbols of a word, by default every character is a symbol")]
        delimiter: Option<char>,
    },

    /// Prints all accepted words up to the given length.
    Generate {
        #[arg(value_name = "FILE")]
        filename: String,

        max_length: usize,

        #[arg(long, conflicts_with = "timeout_ms", help = "Stop the search after this many steps")]
        max_steps: Option<usize>,

        #[arg(long, help = "Stop the search after this many milliseconds")]
        timeout_ms: Option<u64>,
    },

    /// Constructs an automaton interactively.
    Build {
        #[arg(short, long, help = "Write the definition of the automaton to this file")]
        output: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let policy = if cli.strict {
        FinalStatePolicy::Reject
    } else {
        FinalStatePolicy::Warn
    };

    let mut timing = Timing::new();

    match cli.command {
        Command::Info { filename } => {
            let dfa = load(&filename, policy, &mut timing)?;

            println!("{}", dfa);
            println!();
            print!("{:?}", dfa);
        }
        Command::Accept {
            filename,
            words,
            delimiter,
        } => {
            let dfa = load(&filename, policy, &mut timing)?;

            let mut query_time = timing.start("query");
            for text in &words {
                let word = Word::parse(text, delimiter);
                let trace = trace_word(&dfa, word.symbols());

                println!(
                    "{} '{}': {}",
                    if trace.accepted { "ACCEPTED" } else { "REJECTED" },
                    word,
                    trace
                );
                println!("  {}", trace.diagnostic);
            }
            query_time.finish();
        }
        Command::Generate {
            filename,
            max_length,
            max_steps,
            timeout_ms,
        } => {
            let dfa = load(&filename, policy, &mut timing)?;

            let mut query_time = timing.start("generate");
            let words = match (max_steps, timeout_ms) {
                (Some(steps), _) => generate_words_with_budget(&dfa, max_length, &mut StepLimit::new(steps))?,
                (None, Some(timeout)) => generate_words_with_budget(
                    &dfa,
                    max_length,
                    &mut Deadline::after(Duration::from_millis(timeout)),
                )?,
                (None, None) => generate_words(&dfa, max_length)?,
            };
            query_time.finish();

            println!("Accepted words up to length {} (total: {})", max_length, words.len());
            for (index, word) in words.iter().enumerate() {
                println!("{:3}. {}", index + 1, word);
            }
        }
        Command::Build { output } => {
            let dfa = build_interactive(&mut stdin().lock(), &mut stdout())?;

            println!();
            print!("{:?}", dfa);

            if let Some(output) = output {
                let mut writer = BufWriter::new(File::create(&output)?);
                write_definition(&mut writer, &dfa).map_err(|error| anyhow!("{error}"))?;
                info!("Wrote the definition to {}", output);
            }
        }
    }

    if cli.time {
        timing.print();
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads the automaton definition from the given file.
fn load(filename: &str, policy: FinalStatePolicy, timing: &mut Timing) -> Result<Dfa> {
    let mut read_time = timing.start("read");

    let file = File::open(filename)?;
    let dfa = read_definition(file, policy).map_err(|error| anyhow!("Failed to read {}: {}", filename, error))?;
    read_time.finish();

    info!(
        "Read automaton with states {}",
        dfa.states().format(", ")
    );

    Ok(dfa)
}

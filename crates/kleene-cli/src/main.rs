use anyhow::Context;
use clap::{Parser, Subcommand};
use kleene_regex::{RegexSynthesizer, render_output};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kleene")]
#[command(about = "Validate automaton descriptions and convert them to regular expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a description into a regular expression or an error report
    Convert {
        /// Description file
        #[arg(short, long, value_name = "FILE", default_value = "fsa.txt")]
        input: PathBuf,
        /// Where to write the result, `-` for stdout
        #[arg(short, long, value_name = "FILE", default_value = "result.txt")]
        output: PathBuf,
    },
    /// Validate a description and print the automaton as JSON
    Inspect {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Check whether the automaton and its expression accept a word
    Run {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Comma-separated symbols; empty for the empty word
        #[arg(value_name = "WORD", default_value = "")]
        word: String,
    },
}

fn read_description(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn split_word(word: &str) -> Vec<&str> {
    if word.is_empty() {
        Vec::new()
    } else {
        word.split(',').collect()
    }
}

/// The expression for `input`, or its error report.
fn convert(input: &Path) -> anyhow::Result<String> {
    let content = read_description(input)?;
    if let Err(err) = kleene_automaton::validate(&content) {
        log::warn!("{} rejected with {}", input.display(), err.code());
    }
    Ok(render_output(&content))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert { input, output } => {
            let result = convert(input)?;
            if output.as_os_str() == "-" {
                print!("{}", result);
            } else {
                fs::write(output, &result)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                log::info!("Wrote {} bytes to {}", result.len(), output.display());
            }
        }
        Commands::Inspect { path } => {
            let content = read_description(path)?;
            match kleene_automaton::validate(&content) {
                Ok(automaton) => println!("{}", serde_json::to_string_pretty(&automaton)?),
                Err(err) => println!("{}", err.report()),
            }
        }
        Commands::Run { path, word } => {
            let content = read_description(path)?;
            let automaton = match kleene_automaton::validate(&content) {
                Ok(automaton) => automaton,
                Err(err) => {
                    println!("{}", err.report());
                    return Ok(());
                }
            };
            let word = split_word(word);
            let regex = RegexSynthesizer::new(&automaton).synthesize();
            let by_automaton = automaton.accepts(&word);
            let by_regex = regex.matches(&word);
            println!("automaton: {}", verdict(by_automaton));
            println!("regex:     {}", verdict(by_regex));
            if by_automaton != by_regex {
                anyhow::bail!("automaton and expression disagree on {:?}", word);
            }
        }
    }
    Ok(())
}

fn verdict(accepted: bool) -> &'static str {
    if accepted { "accept" } else { "reject" }
}

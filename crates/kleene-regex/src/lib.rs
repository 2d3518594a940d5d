//! # Kleene Regex
//!
//! Regular-expression synthesis for validated automata.
//!
//! Given an [`Automaton`] from `kleene-automaton`, [`RegexSynthesizer`]
//! computes one expression describing its language with Kleene's algorithm.
//! Expressions are built as a [`Regex`] tree and only turned into text by
//! `Display`.
//!
//! ## Output syntax
//!
//! - alphabet symbols, written verbatim
//! - `eps` for the empty word, `{}` for the empty language
//! - `|` for union, juxtaposition for concatenation, postfix `*` for closure
//! - parentheses exactly where the algorithm groups operands
//!
//! ## Examples
//!
//! ```
//! use kleene_regex::render_output;
//!
//! let fsa = "states={s0,s1}\nalpha={a}\ninit.st={s0}\nfin.st={}\ntrans={s0>a>s1}";
//! assert_eq!(render_output(fsa), "{}");
//!
//! let fsa = "states={s0,s1}\nalpha={a}\ninit.st={}\nfin.st={s1}\ntrans={s0>a>s1}";
//! assert_eq!(render_output(fsa), "Error:\nE4: Initial state is not defined");
//! ```
//!
//! ```
//! use kleene_regex::translate;
//!
//! let fsa = "states={s0,s1}\nalpha={a}\ninit.st={s0}\nfin.st={s1}\ntrans={s0>a>s1}";
//! let regex = translate(fsa).unwrap();
//! assert!(regex.matches(&["a"]));
//! assert!(!regex.matches::<&str>(&[]));
//! ```

pub mod ast;
pub mod synthesizer;

pub use ast::Regex;
pub use kleene_automaton::{Automaton, ValidationError};
pub use synthesizer::{PathTable, RegexSynthesizer, synthesize};

/// Validates a five-line description and synthesizes its expression.
pub fn translate(input: &str) -> Result<Regex, ValidationError> {
    let automaton = kleene_automaton::validate(input)?;
    Ok(synthesize(&automaton))
}

/// The complete program output for a description: either the error report
/// or the rendered expression.
pub fn render_output(input: &str) -> String {
    match translate(input) {
        Ok(regex) => regex.to_string(),
        Err(err) => err.report(),
    }
}

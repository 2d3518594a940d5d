//! # Kleene Automaton
//!
//! Parser, data model and validator for textual finite-state automaton
//! descriptions.
//!
//! ## Overview
//!
//! An automaton is described by exactly five lines, in this order:
//!
//! ```text
//! states={s0,s1}
//! alpha={a,b}
//! init.st={s0}
//! fin.st={s1}
//! trans={s0>a>s1,s1>b>s0}
//! ```
//!
//! The description goes through two stages:
//!
//! ```text
//! ┌────────────┐  FsaDescription::parse  ┌────────────────┐  Validator::validate  ┌───────────┐
//! │ five lines │ ──────────────────────► │ FsaDescription │ ────────────────────► │ Automaton │
//! └────────────┘        E5               └────────────────┘  E1 E3 E4 E2 E6       └───────────┘
//! ```
//!
//! Both stages stop at the first problem. The result is either a
//! [`ValidationError`] carrying one of the codes `E1`..`E6`, or an
//! [`Automaton`] that is guaranteed well-formed and is read-only from then on.
//!
//! ## Error codes
//!
//! | Code | Meaning | Checked |
//! |------|---------|---------|
//! | `E5` | Input file is malformed | 1st |
//! | `E1` | A referenced state is not declared | 2nd |
//! | `E3` | A transition symbol is not in the alphabet | 3rd |
//! | `E4` | Initial state is not defined | 4th |
//! | `E2` | Some states are disjoint (undirected graph) | 5th |
//! | `E6` | FSA is nondeterministic | 6th |
//!
//! ## Examples
//!
//! ```
//! use kleene_automaton::validate;
//!
//! let input = "states={s0,s1}\nalpha={a}\ninit.st={s0}\nfin.st={s1}\ntrans={s0>a>s1}";
//! let automaton = validate(input).unwrap();
//!
//! assert_eq!(automaton.num_states(), 2);
//! assert!(automaton.accepts(&["a"]));
//! assert!(!automaton.accepts(&["a", "a"]));
//! ```
//!
//! ```
//! use kleene_automaton::validate;
//!
//! let input = "states={s0,s1}\nalpha={a}\ninit.st={s0}\nfin.st={s1}\ntrans={s0>a>s9}";
//! let err = validate(input).unwrap_err();
//! assert_eq!(err.report(), "Error:\nE1: A state 's9' is not in set of states");
//! ```

pub mod error;
/// Validated automaton model.
pub mod model;
/// Five-line description parser.
pub mod parser;
pub mod validator;


pub use error::{ErrorCode, ValidationError};
pub use model::{Automaton, State, StateId, Transition, TransitionId};
pub use parser::{FsaDescription, RawTransition};
pub use validator::{Validator, validate};

use crate::error::ValidationError;
use crate::model::{Automaton, StateId, Transition};
use crate::parser::FsaDescription;
use std::collections::{HashMap, HashSet};

/// Turns a parsed [`FsaDescription`] into an [`Automaton`], or reports the
/// first rule it breaks.
///
/// ## Check order
///
/// Checks run in a fixed order and the first failure wins, so a description
/// breaking several rules always reports the same one:
///
/// 1. `E1` undefined state: initial, then finals, then each transition's
///    source and target in declaration order
/// 2. `E3` transition symbol outside the alphabet
/// 3. `E4` no initial state
/// 4. `E2` disjoint states, on the undirected transition graph
/// 5. `E6` two transitions share a source state and a symbol
///
/// `E5` (malformed input) is raised earlier by [`FsaDescription::parse`].
///
/// An empty final-state set is not an error.
///
/// ## Examples
///
/// ```
/// use kleene_automaton::{FsaDescription, Validator, ValidationError};
///
/// let text = "states={a,b}\nalpha={x}\ninit.st={a}\nfin.st={b}\ntrans={a>x>b,a>x>a}";
/// let description = FsaDescription::parse(text).unwrap();
///
/// let result = Validator::new(&description).validate();
/// assert_eq!(result.unwrap_err(), ValidationError::Nondeterministic);
/// ```
pub struct Validator<'a> {
    description: &'a FsaDescription,
    index: HashMap<&'a str, StateId>,
}

impl<'a> Validator<'a> {
    pub fn new(description: &'a FsaDescription) -> Self {
        let index = description
            .states
            .iter()
            .enumerate()
            .map(|(id, name)| (name.as_str(), id))
            .collect();
        Self { description, index }
    }

    /// Runs every check and builds the automaton.
    pub fn validate(&self) -> Result<Automaton, ValidationError> {
        self.check_references()?;
        self.check_alphabet()?;
        let initial = self.initial_state()?;

        let automaton = self.build(initial);
        check_connected(&automaton)?;
        check_deterministic(&automaton)?;

        log::debug!(
            "Validated automaton: {} states, {} transitions, {} final",
            automaton.num_states(),
            automaton.transitions().len(),
            automaton.finals().len()
        );
        Ok(automaton)
    }

    fn lookup(&self, name: &str) -> Result<StateId, ValidationError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ValidationError::UndefinedState(name.to_string()))
    }

    fn check_references(&self) -> Result<(), ValidationError> {
        let d = self.description;
        if !d.initial.is_empty() {
            self.lookup(&d.initial)?;
        }
        for name in &d.finals {
            self.lookup(name)?;
        }
        for t in &d.transitions {
            self.lookup(&t.source)?;
            self.lookup(&t.target)?;
        }
        Ok(())
    }

    fn check_alphabet(&self) -> Result<(), ValidationError> {
        let alphabet: HashSet<&str> = self.description.alphabet.iter().map(String::as_str).collect();
        match self
            .description
            .transitions
            .iter()
            .find(|t| !alphabet.contains(t.symbol.as_str()))
        {
            Some(t) => Err(ValidationError::BadSymbol(t.symbol.clone())),
            None => Ok(()),
        }
    }

    fn initial_state(&self) -> Result<StateId, ValidationError> {
        let name = self.description.initial.as_str();
        if name.is_empty() {
            return Err(ValidationError::NoInitialState);
        }
        self.index
            .get(name)
            .copied()
            .ok_or(ValidationError::NoInitialState)
    }

    /// Only called once every name is known to resolve.
    fn build(&self, initial: StateId) -> Automaton {
        let d = self.description;
        let transitions = d
            .transitions
            .iter()
            .map(|t| Transition {
                source: self.index[t.source.as_str()],
                symbol: t.symbol.clone(),
                target: self.index[t.target.as_str()],
            })
            .collect();
        let finals = d.finals.iter().map(|name| self.index[name.as_str()]);

        Automaton::new(
            d.states.clone(),
            d.alphabet.clone(),
            initial,
            finals,
            transitions,
        )
    }
}

/// Depth-first search from the first state over the undirected graph.
/// Every state must be visited.
fn check_connected(automaton: &Automaton) -> Result<(), ValidationError> {
    let adjacency = automaton.undirected_adjacency();
    let mut visited = vec![false; automaton.num_states()];
    let mut stack = vec![0];
    let mut count = 0;

    while let Some(state) = stack.pop() {
        if visited[state] {
            continue;
        }
        visited[state] = true;
        count += 1;
        stack.extend(adjacency[state].iter().rev().filter(|&&next| !visited[next]));
    }

    if count == automaton.num_states() {
        Ok(())
    } else {
        log::debug!(
            "Reached {} of {} states from '{}'",
            count,
            automaton.num_states(),
            automaton.state(0).name
        );
        Err(ValidationError::DisjointStates)
    }
}

fn check_deterministic(automaton: &Automaton) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for t in automaton.transitions() {
        if !seen.insert((t.source, t.symbol.as_str())) {
            log::debug!(
                "State '{}' has more than one transition on '{}'",
                automaton.state(t.source).name,
                t.symbol
            );
            return Err(ValidationError::Nondeterministic);
        }
    }
    Ok(())
}

impl TryFrom<FsaDescription> for Automaton {
    type Error = ValidationError;

    fn try_from(description: FsaDescription) -> Result<Self, Self::Error> {
        Validator::new(&description).validate()
    }
}

/// Parses and validates a description in one step.
///
/// # Examples
///
/// ```
/// use kleene_automaton::validate;
///
/// let automaton = validate("states={a}\nalpha={x}\ninit.st={a}\nfin.st={a}\ntrans={a>x>a}").unwrap();
/// assert!(automaton.accepts(&["x", "x"]));
///
/// let err = validate("states={a}\nalpha={x}\ninit.st={}\nfin.st={}\ntrans={}").unwrap_err();
/// assert_eq!(err.report(), "Error:\nE4: Initial state is not defined");
/// ```
pub fn validate(input: &str) -> Result<Automaton, ValidationError> {
    let description = FsaDescription::parse(input)?;
    Validator::new(&description).validate()
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Index of a state in [`Automaton::states`].
pub type StateId = usize;

/// Index of a transition in [`Automaton::transitions`].
pub type TransitionId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub name: String,
    /// Transitions leaving this state, in declaration order.
    pub outgoing: Vec<TransitionId>,
}

/// A labeled edge `source --symbol--> target`.
///
/// Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub source: StateId,
    pub symbol: String,
    pub target: StateId,
}

/// A validated finite-state automaton.
///
/// States live in an arena addressed by [`StateId`]; transitions reference
/// states by index only. The only way to obtain an `Automaton` is through
/// [`Validator`](crate::validator::Validator), so every value of this type
/// satisfies the well-formedness rules: every transition endpoint and label
/// is declared, the initial state exists and the undirected graph is connected.
///
/// Deserialization goes through the same checks: the input is read as an
/// [`FsaDescription`](crate::parser::FsaDescription) and validated, so the
/// accepted JSON uses state names rather than the indices `Serialize` writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "crate::parser::FsaDescription")]
pub struct Automaton {
    states: Vec<State>,
    alphabet: Vec<String>,
    initial: StateId,
    /// Sorted by state index, no duplicates.
    finals: Vec<StateId>,
    transitions: Vec<Transition>,
}

impl Automaton {
    /// Assembles the arena and the per-state adjacency lists.
    ///
    /// Callers guarantee every index is in range.
    pub(crate) fn new(
        names: Vec<String>,
        alphabet: Vec<String>,
        initial: StateId,
        finals: impl IntoIterator<Item = StateId>,
        transitions: Vec<Transition>,
    ) -> Self {
        let mut states: Vec<State> = names
            .into_iter()
            .map(|name| State {
                name,
                outgoing: Vec::new(),
            })
            .collect();

        for (id, transition) in transitions.iter().enumerate() {
            states[transition.source].outgoing.push(id);
        }

        let finals: BTreeSet<StateId> = finals.into_iter().collect();

        Self {
            states,
            alphabet,
            initial,
            finals: finals.into_iter().collect(),
            transitions,
        }
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    /// Looks up a state by name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states.iter().position(|state| state.name == name)
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Final states in state-declaration order.
    pub fn finals(&self) -> &[StateId] {
        &self.finals
    }

    pub fn is_final(&self, id: StateId) -> bool {
        self.finals.binary_search(&id).is_ok()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Transitions leaving `id`, in declaration order.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.states[id]
            .outgoing
            .iter()
            .map(move |&t| &self.transitions[t])
    }

    /// Neighbours of every state when each transition is usable in both
    /// directions. Self-loops contribute nothing.
    pub fn undirected_adjacency(&self) -> Vec<Vec<StateId>> {
        let mut adjacency = vec![Vec::new(); self.states.len()];
        for t in &self.transitions {
            if t.source != t.target {
                adjacency[t.source].push(t.target);
                adjacency[t.target].push(t.source);
            }
        }
        adjacency
    }

    /// Runs the automaton on `word`, one symbol per element.
    ///
    /// The simulation tracks a set of current states, so it is also correct
    /// for descriptions that would fail the determinism check.
    pub fn accepts<S: AsRef<str>>(&self, word: &[S]) -> bool {
        let mut current = BTreeSet::from([self.initial]);
        for symbol in word {
            let symbol = symbol.as_ref();
            current = current
                .iter()
                .flat_map(|&s| self.outgoing(s))
                .filter(|t| t.symbol == symbol)
                .map(|t| t.target)
                .collect();
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|&s| self.is_final(s))
    }
}

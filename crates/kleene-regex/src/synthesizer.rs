use crate::ast::Regex;
use kleene_automaton::{Automaton, StateId};
use std::rc::Rc;

/// Square table of expressions indexed by `(from, to)` state pairs.
///
/// After [`RegexSynthesizer::table`] has incorporated `k` states, cell
/// `(i, j)` describes every walk from `i` to `j` whose intermediate states all
/// have an index below `k`.
#[derive(Debug, Clone)]
pub struct PathTable {
    size: usize,
    cells: Vec<Rc<Regex>>,
}

impl PathTable {
    fn from_fn(size: usize, mut cell: impl FnMut(StateId, StateId) -> Rc<Regex>) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(cell(i, j));
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, from: StateId, to: StateId) -> &Rc<Regex> {
        &self.cells[from * self.size + to]
    }
}

/// Builds a regular expression equivalent to an automaton using Kleene's
/// algorithm.
///
/// ## Algorithm
///
/// 1. **Base table**: cell `(i, j)` is the union of the labels of every
///    transition `i -> j`, in declaration order, followed by `eps` when
///    `i == j`. A cell with neither is `{}`.
/// 2. **Elimination**: for each state `k` in declaration order, every cell
///    is replaced by
///
///    ```text
///    (R[i][k])(R[k][k])*(R[k][j])|(R[i][j])
///    ```
///
///    i.e. a walk either passes through `k` (looping there any number of
///    times) or avoids it.
/// 3. **Result**: the union of `R[q0][f]` over the final states `f` in state
///    order, or `{}` when there are none.
///
/// No simplification is applied. The rendered expression grows
/// exponentially with the number of states; the table itself shares cells
/// through `Rc`, so building it stays cubic.
///
/// ## Examples
///
/// ```
/// use kleene_automaton::validate;
/// use kleene_regex::RegexSynthesizer;
///
/// let automaton = validate("states={s}\nalpha={a}\ninit.st={s}\nfin.st={s}\ntrans={s>a>s}").unwrap();
/// let regex = RegexSynthesizer::new(&automaton).synthesize();
///
/// assert_eq!(regex.to_string(), "(a|eps)(a|eps)*(a|eps)|(a|eps)");
/// assert!(regex.matches(&["a", "a", "a"]));
/// ```
pub struct RegexSynthesizer<'a> {
    automaton: &'a Automaton,
}

impl<'a> RegexSynthesizer<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self { automaton }
    }

    /// Direct-transition table, before any state may be used as an
    /// intermediate.
    pub fn base_table(&self) -> PathTable {
        let automaton = self.automaton;
        PathTable::from_fn(automaton.num_states(), |i, j| {
            let mut parts: Vec<Rc<Regex>> = automaton
                .outgoing(i)
                .filter(|t| t.target == j)
                .map(|t| Rc::new(Regex::symbol(t.symbol.as_str())))
                .collect();
            if i == j {
                parts.push(Rc::new(Regex::Epsilon));
            }
            match parts.len() {
                0 => Rc::new(Regex::Empty),
                1 => parts.remove(0),
                _ => Rc::new(Regex::Union(parts)),
            }
        })
    }

    /// Table after `steps` states have been allowed as intermediates.
    /// `steps` is capped at the number of states.
    pub fn table(&self, steps: usize) -> PathTable {
        let steps = steps.min(self.automaton.num_states());
        let mut r = self.base_table();
        for k in 0..steps {
            r = eliminate(&r, k);
            log::debug!("Kleene step {}/{} done", k + 1, steps);
        }
        r
    }

    /// Table with every state allowed as an intermediate.
    pub fn closure_table(&self) -> PathTable {
        self.table(self.automaton.num_states())
    }

    /// The expression for the automaton's language.
    pub fn synthesize(&self) -> Regex {
        let finals = self.automaton.finals();
        if finals.is_empty() {
            return Regex::Empty;
        }

        let r = self.closure_table();
        let q0 = self.automaton.initial();
        let mut parts: Vec<Rc<Regex>> = finals.iter().map(|&f| Rc::clone(r.get(q0, f))).collect();

        if parts.len() == 1 {
            return Rc::unwrap_or_clone(parts.remove(0));
        }
        Regex::Union(parts)
    }
}

/// One elimination step: allow state `k` as an intermediate.
fn eliminate(r: &PathTable, k: StateId) -> PathTable {
    let through_loop = Rc::new(Regex::star(Rc::new(Regex::group(Rc::clone(r.get(k, k))))));

    PathTable::from_fn(r.size(), |i, j| {
        let through = Rc::new(Regex::Concat(vec![
            Rc::new(Regex::group(Rc::clone(r.get(i, k)))),
            Rc::clone(&through_loop),
            Rc::new(Regex::group(Rc::clone(r.get(k, j)))),
        ]));
        let avoid = Rc::new(Regex::group(Rc::clone(r.get(i, j))));
        Rc::new(Regex::Union(vec![through, avoid]))
    })
}

/// Shorthand for [`RegexSynthesizer::synthesize`].
pub fn synthesize(automaton: &Automaton) -> Regex {
    RegexSynthesizer::new(automaton).synthesize()
}

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

/// A regular expression over an automaton's alphabet.
///
/// Children are reference counted so the synthesis table can share
/// subexpressions between cells. The structure is a DAG in memory while its
/// rendered text grows exponentially with the number of states.
///
/// Grouping is explicit: [`Regex::Group`] is the only variant that renders
/// parentheses, so the text produced by `Display` is exactly what the
/// builder asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regex {
    /// The empty language, rendered `{}`.
    Empty,
    /// The empty word, rendered `eps`.
    Epsilon,
    /// One alphabet symbol, rendered verbatim.
    Symbol(String),
    /// `(r)`
    Group(Rc<Regex>),
    /// `r*`
    Star(Rc<Regex>),
    /// Operands rendered back to back.
    Concat(Vec<Rc<Regex>>),
    /// Operands joined by `|`.
    Union(Vec<Rc<Regex>>),
}

impl Regex {
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Regex::Symbol(symbol.into())
    }

    pub fn group(inner: Rc<Regex>) -> Self {
        Regex::Group(inner)
    }

    pub fn star(inner: Rc<Regex>) -> Self {
        Regex::Star(inner)
    }

    /// Does this expression match the whole of `word`? Each element of
    /// `word` is one alphabet symbol.
    ///
    /// Results are memoized per shared node, so the cost follows the size
    /// of the in-memory DAG rather than the rendered text.
    ///
    /// # Examples
    ///
    /// ```
    /// use kleene_regex::Regex;
    /// use std::rc::Rc;
    ///
    /// let a = Rc::new(Regex::symbol("a"));
    /// let b = Rc::new(Regex::symbol("b"));
    /// // a(b)*
    /// let r = Regex::Concat(vec![a, Rc::new(Regex::star(Rc::new(Regex::group(b))))]);
    ///
    /// assert!(r.matches(&["a", "b", "b"]));
    /// assert!(!r.matches(&["b"]));
    /// ```
    pub fn matches<S: AsRef<str>>(&self, word: &[S]) -> bool {
        let word: Vec<&str> = word.iter().map(|s| s.as_ref()).collect();
        let mut matcher = Matcher {
            word: &word,
            memo: HashMap::new(),
        };
        matcher.advance(self, &BTreeSet::from([0])).contains(&word.len())
    }

    /// Number of nodes in the expression tree, counting shared nodes once
    /// per occurrence.
    pub fn tree_size(&self) -> usize {
        match self {
            Regex::Empty | Regex::Epsilon | Regex::Symbol(_) => 1,
            Regex::Group(inner) | Regex::Star(inner) => 1 + inner.tree_size(),
            Regex::Concat(parts) | Regex::Union(parts) => {
                1 + parts.iter().map(|p| p.tree_size()).sum::<usize>()
            }
        }
    }
}

/// Position-set matcher: `advance` maps the positions a node may start at to
/// the positions it may end at.
struct Matcher<'w> {
    word: &'w [&'w str],
    memo: HashMap<(*const Regex, BTreeSet<usize>), BTreeSet<usize>>,
}

impl Matcher<'_> {
    fn advance(&mut self, node: &Regex, from: &BTreeSet<usize>) -> BTreeSet<usize> {
        let key = (node as *const Regex, from.clone());
        if let Some(hit) = self.memo.get(&key) {
            return hit.clone();
        }

        let reached = match node {
            Regex::Empty => BTreeSet::new(),
            Regex::Epsilon => from.clone(),
            Regex::Symbol(s) => from
                .iter()
                .filter(|&&p| self.word.get(p) == Some(&s.as_str()))
                .map(|&p| p + 1)
                .collect(),
            Regex::Group(inner) => self.advance(inner, from),
            Regex::Star(inner) => {
                let mut reached = from.clone();
                let mut frontier = from.clone();
                while !frontier.is_empty() {
                    let next = self.advance(inner, &frontier);
                    frontier = next.difference(&reached).copied().collect();
                    reached.extend(&frontier);
                }
                reached
            }
            Regex::Concat(parts) => {
                let mut current = from.clone();
                for part in parts {
                    if current.is_empty() {
                        break;
                    }
                    current = self.advance(part, &current);
                }
                current
            }
            Regex::Union(parts) => {
                let mut reached = BTreeSet::new();
                for part in parts {
                    reached.extend(self.advance(part, from));
                }
                reached
            }
        };

        self.memo.insert(key, reached.clone());
        reached
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regex::Empty => f.write_str("{}"),
            Regex::Epsilon => f.write_str("eps"),
            Regex::Symbol(s) => f.write_str(s),
            Regex::Group(inner) => write!(f, "({})", inner),
            Regex::Star(inner) => write!(f, "{}*", inner),
            Regex::Concat(parts) => parts.iter().try_for_each(|p| write!(f, "{}", p)),
            Regex::Union(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{}", part)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Rc<Regex> {
        Rc::new(Regex::symbol(s))
    }

    #[test]
    fn test_render_leaves() {
        assert_eq!(Regex::Empty.to_string(), "{}");
        assert_eq!(Regex::Epsilon.to_string(), "eps");
        assert_eq!(Regex::symbol("ab").to_string(), "ab");
    }

    #[test]
    fn test_render_composite() {
        let r = Regex::Union(vec![
            Rc::new(Regex::Concat(vec![
                Rc::new(Regex::group(sym("a"))),
                Rc::new(Regex::star(Rc::new(Regex::group(Rc::new(Regex::Epsilon))))),
            ])),
            Rc::new(Regex::group(Rc::new(Regex::Empty))),
        ]);
        assert_eq!(r.to_string(), "(a)(eps)*|({})");
    }

    #[test]
    fn test_match_empty_language() {
        assert!(!Regex::Empty.matches::<&str>(&[]));
        assert!(!Regex::Empty.matches(&["a"]));
    }

    #[test]
    fn test_match_epsilon() {
        assert!(Regex::Epsilon.matches::<&str>(&[]));
        assert!(!Regex::Epsilon.matches(&["a"]));
    }

    #[test]
    fn test_match_multichar_symbol() {
        let r = Regex::symbol("ab");
        assert!(r.matches(&["ab"]));
        assert!(!r.matches(&["a", "b"]));
    }

    #[test]
    fn test_match_star_of_epsilon_terminates() {
        let r = Regex::star(Rc::new(Regex::Epsilon));
        assert!(r.matches::<&str>(&[]));
        assert!(!r.matches(&["a"]));
    }

    #[test]
    fn test_match_union_and_star() {
        // (a|b)*c
        let r = Regex::Concat(vec![
            Rc::new(Regex::star(Rc::new(Regex::group(Rc::new(Regex::Union(vec![
                sym("a"),
                sym("b"),
            ])))))),
            sym("c"),
        ]);
        assert!(r.matches(&["c"]));
        assert!(r.matches(&["a", "b", "a", "c"]));
        assert!(!r.matches(&["a", "b"]));
        assert!(!r.matches(&["c", "a"]));
    }

    #[test]
    fn test_tree_size_counts_shared_nodes() {
        let a = sym("a");
        let r = Regex::Concat(vec![a.clone(), a]);
        assert_eq!(r.tree_size(), 3);
    }
}

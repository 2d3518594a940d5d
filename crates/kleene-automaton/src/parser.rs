use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Field prefixes, in the order the lines must appear.
pub const FIELDS: [&str; 5] = ["states", "alpha", "init.st", "fin.st", "trans"];

/// A `source>symbol>target` entry exactly as written in the `trans` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransition {
    pub source: String,
    pub symbol: String,
    pub target: String,
}

/// The five fields of an automaton description, split but not yet resolved.
///
/// Names are kept as strings; nothing here has been checked against the
/// declared state set or alphabet. That is the job of
/// [`Validator`](crate::validator::Validator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsaDescription {
    /// Declared states in order. Order defines state indices.
    pub states: Vec<String>,
    /// Alphabet symbols, first occurrence kept.
    pub alphabet: Vec<String>,
    /// Raw body of `init.st`; empty when no initial state is given.
    pub initial: String,
    /// Final state names in declared order, first occurrence kept.
    pub finals: Vec<String>,
    pub transitions: Vec<RawTransition>,
}

impl FsaDescription {
    /// Splits the five-line description into its fields.
    ///
    /// Only the shape is checked here, so the only error this returns is
    /// [`ValidationError::MalformedInput`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kleene_automaton::FsaDescription;
    ///
    /// let text = "states={q0,q1}\nalpha={x}\ninit.st={q0}\nfin.st={q1}\ntrans={q0>x>q1}";
    /// let description = FsaDescription::parse(text).unwrap();
    /// assert_eq!(description.states, vec!["q0", "q1"]);
    /// assert_eq!(description.transitions[0].symbol, "x");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let mut lines = input.lines().map(|line| line.strip_suffix('\r').unwrap_or(line));

        let mut bodies: [&str; 5] = [""; 5];
        for (body, name) in bodies.iter_mut().zip(FIELDS) {
            let line = lines
                .next()
                .ok_or_else(|| ValidationError::malformed(format!("missing `{}` line", name)))?;
            *body = field_body(line, name)?;
        }

        let trailing = lines.filter(|line| !line.trim().is_empty()).count();
        if trailing > 0 {
            log::warn!("Ignoring {} non-empty line(s) after the `trans` field", trailing);
        }

        let [states, alpha, initial, finals, trans] = bodies;

        let states = split_items(states, "states")?;
        let mut seen = HashSet::with_capacity(states.len());
        for name in &states {
            if !seen.insert(*name) {
                return Err(ValidationError::malformed(format!(
                    "state '{}' is declared twice",
                    name
                )));
            }
        }

        let transitions = split_items(trans, "trans")?
            .into_iter()
            .map(parse_transition)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            states: states.into_iter().map(str::to_string).collect(),
            alphabet: dedup(split_items(alpha, "alpha")?),
            initial: initial.to_string(),
            finals: dedup(split_items(finals, "fin.st")?),
            transitions,
        })
    }
}

/// Returns the text between `name={` and the closing `}` of a line.
fn field_body<'a>(line: &'a str, name: &str) -> Result<&'a str, ValidationError> {
    let body = line
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix("={"))
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| ValidationError::malformed(format!("expected `{}={{...}}`", name)))?;

    if let Some(c) = body
        .chars()
        .find(|&c| c.is_whitespace() || matches!(c, '{' | '}'))
    {
        return Err(ValidationError::malformed(format!(
            "unexpected {:?} in `{}`",
            c, name
        )));
    }
    Ok(body)
}

/// Comma-separated items of a body. An empty body is an empty list, but an
/// empty item inside a non-empty body is malformed.
fn split_items<'a>(body: &'a str, name: &str) -> Result<Vec<&'a str>, ValidationError> {
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let items: Vec<&str> = body.split(',').collect();
    if items.iter().any(|item| item.is_empty()) {
        return Err(ValidationError::malformed(format!("empty item in `{}`", name)));
    }
    Ok(items)
}

fn parse_transition(item: &str) -> Result<RawTransition, ValidationError> {
    let parts: Vec<&str> = item.split('>').collect();
    match parts.as_slice() {
        [source, symbol, target] if !source.is_empty() && !symbol.is_empty() && !target.is_empty() => {
            Ok(RawTransition {
                source: source.to_string(),
                symbol: symbol.to_string(),
                target: target.to_string(),
            })
        }
        _ => Err(ValidationError::malformed(format!(
            "transition '{}' is not `source>symbol>target`",
            item
        ))),
    }
}

fn dedup(items: Vec<&str>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

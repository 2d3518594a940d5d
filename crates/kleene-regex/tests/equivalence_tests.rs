//! The synthesized expression must accept exactly the words the automaton
//! accepts. Words are enumerated exhaustively up to a small length.

use kleene_automaton::{Automaton, validate};
use kleene_regex::{Regex, synthesize};

const MAX_LEN: usize = 5;

/// Small automata covering loops, multiple finals, dead ends, unreachable
/// finals and multi-character symbols.
const AUTOMATA: &[&str] = &[
    "states={s0,s1}\nalpha={a}\ninit.st={s0}\nfin.st={s1}\ntrans={s0>a>s1}",
    "states={s}\nalpha={a,b}\ninit.st={s}\nfin.st={s}\ntrans={s>a>s,s>b>s}",
    "states={even,odd}\nalpha={a,b}\ninit.st={even}\nfin.st={even}\ntrans={even>a>odd,odd>a>even,even>b>even,odd>b>odd}",
    "states={p,q,r}\nalpha={0,1}\ninit.st={p}\nfin.st={r,p}\ntrans={p>0>q,q>1>r,r>0>p,q>0>q}",
    "states={s0,s1,s2}\nalpha={a,b}\ninit.st={s1}\nfin.st={s2}\ntrans={s0>a>s1,s1>b>s2,s2>a>s0}",
    "states={s0,s1}\nalpha={a}\ninit.st={s0}\nfin.st={s1}\ntrans={s1>a>s0}",
    "states={x,y,z}\nalpha={ab,c}\ninit.st={z}\nfin.st={x}\ntrans={z>ab>y,y>c>x,x>ab>z,y>ab>y}",
    "states={a,b,c,d}\nalpha={0,1}\ninit.st={a}\nfin.st={d}\ntrans={a>0>b,b>0>c,c>0>d,d>1>a,b>1>a}",
];

fn words(alphabet: &[String], max_len: usize) -> Vec<Vec<String>> {
    let mut all = vec![Vec::new()];
    let mut layer: Vec<Vec<String>> = vec![Vec::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|w| {
                alphabet.iter().map(move |s| {
                    let mut next = w.clone();
                    next.push(s.clone());
                    next
                })
            })
            .collect();
        all.extend(layer.iter().cloned());
    }
    all
}

fn assert_equivalent(automaton: &Automaton, regex: &Regex, max_len: usize) {
    for word in words(automaton.alphabet(), max_len) {
        assert_eq!(
            automaton.accepts(&word),
            regex.matches(&word),
            "disagreement on {:?} for {}",
            word,
            regex
        );
    }
}

#[test]
fn test_regex_matches_automaton_language() {
    for input in AUTOMATA {
        let automaton = validate(input).unwrap();
        let regex = synthesize(&automaton);
        assert_equivalent(&automaton, &regex, MAX_LEN);
    }
}

#[test]
fn test_at_least_one_accepted_word_where_expected() {
    // Guards against a matcher that rejects everything.
    let automaton = validate(AUTOMATA[3]).unwrap();
    let regex = synthesize(&automaton);
    assert!(regex.matches::<&str>(&[]));
    assert!(regex.matches(&["0", "1"]));
    assert!(regex.matches(&["0", "0", "0", "1", "0"]));
    assert!(!regex.matches(&["1"]));
}

#[test]
fn test_every_single_state_automaton() {
    // All combinations of loops over a two-symbol alphabet, final or not.
    for trans in ["", "s>a>s", "s>b>s", "s>a>s,s>b>s"] {
        for fin in ["", "s"] {
            let input = format!(
                "states={{s}}\nalpha={{a,b}}\ninit.st={{s}}\nfin.st={{{}}}\ntrans={{{}}}",
                fin, trans
            );
            let automaton = validate(&input).unwrap();
            assert_equivalent(&automaton, &synthesize(&automaton), MAX_LEN);
        }
    }
}

/// Renders an expression in `regex` crate syntax. Symbols are single
/// characters here, so a word is its symbols concatenated.
fn to_pattern(regex: &Regex) -> String {
    match regex {
        // NUL never occurs in the haystacks below.
        Regex::Empty => r"\x00".to_string(),
        Regex::Epsilon => "(?:)".to_string(),
        Regex::Symbol(s) => regex::escape(s),
        Regex::Group(inner) => format!("(?:{})", to_pattern(inner)),
        Regex::Star(inner) => format!("(?:{})*", to_pattern(inner)),
        Regex::Concat(parts) => parts.iter().map(|p| to_pattern(p)).collect(),
        Regex::Union(parts) => format!(
            "(?:{})",
            parts.iter().map(|p| to_pattern(p)).collect::<Vec<_>>().join("|")
        ),
    }
}

#[test]
fn test_independent_regex_engine_agrees() {
    // Up to three states keeps the compiled pattern well inside the size limits.
    for input in AUTOMATA.iter().take(5) {
        let automaton = validate(input).unwrap();
        let ours = synthesize(&automaton);
        let pattern = format!("^(?:{})$", to_pattern(&ours));
        let engine = regex::Regex::new(&pattern).unwrap();

        for word in words(automaton.alphabet(), MAX_LEN) {
            let haystack: String = word.concat();
            assert_eq!(
                automaton.accepts(&word),
                engine.is_match(&haystack),
                "regex crate disagrees on {:?}",
                word
            );
        }
    }
}

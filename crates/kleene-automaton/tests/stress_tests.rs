use kleene_automaton::{ValidationError, validate};

fn chain(n: usize, close_loop: bool) -> String {
    let states: Vec<String> = (0..n).map(|i| format!("q{}", i)).collect();
    let mut trans: Vec<String> = (1..n)
        .map(|i| format!("q{}>a>q{}", i - 1, i))
        .collect();
    if close_loop {
        trans.push(format!("q{}>a>q0", n - 1));
    }
    format!(
        "states={{{}}}\nalpha={{a}}\ninit.st={{q0}}\nfin.st={{q{}}}\ntrans={{{}}}",
        states.join(","),
        n - 1,
        trans.join(",")
    )
}

#[test]
fn test_long_chain_validates() {
    // Deep enough that a recursive search would be at risk.
    let automaton = validate(&chain(50_000, true)).unwrap();
    assert_eq!(automaton.num_states(), 50_000);
    assert_eq!(automaton.transitions().len(), 50_000);
}

#[test]
fn test_long_reversed_chain_is_connected() {
    let n = 20_000;
    let states: Vec<String> = (0..n).map(|i| format!("q{}", i)).collect();
    // Every edge points back towards q0.
    let trans: Vec<String> = (1..n).map(|i| format!("q{}>a>q{}", i, i - 1)).collect();
    let input = format!(
        "states={{{}}}\nalpha={{a}}\ninit.st={{q0}}\nfin.st={{}}\ntrans={{{}}}",
        states.join(","),
        trans.join(",")
    );
    assert!(validate(&input).is_ok());
}

#[test]
fn test_long_chain_with_trailing_isolated_state() {
    let n = 10_000;
    let mut states: Vec<String> = (0..n).map(|i| format!("q{}", i)).collect();
    states.push("lonely".to_string());
    let trans: Vec<String> = (1..n).map(|i| format!("q{}>a>q{}", i - 1, i)).collect();
    let input = format!(
        "states={{{}}}\nalpha={{a}}\ninit.st={{q0}}\nfin.st={{}}\ntrans={{{}}}",
        states.join(","),
        trans.join(",")
    );
    assert_eq!(validate(&input).unwrap_err(), ValidationError::DisjointStates);
}

#[test]
fn test_chain_acceptance() {
    let automaton = validate(&chain(100, false)).unwrap();
    let word = vec!["a"; 99];
    assert!(automaton.accepts(&word));
    assert!(!automaton.accepts(&word[..98]));
}

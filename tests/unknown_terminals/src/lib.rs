#![cfg(test)]

use lazy_static::lazy_static;
use matches::assert_matches;
use ll1::{Analysis, ErrorKind, Limits, ParseError, Position, StepAction, TablePolicy};
use test_utils::{tokens, EXPR};

lazy_static! {
    static ref START_A: Analysis =
        Analysis::from_source("Start -> a\n", Limits::default(), TablePolicy::Strict).unwrap();
}

#[test]
fn test_unknown_terminals() {
    let report = START_A.parse(tokens("b").into_iter());
    assert_matches!(
        report.result,
        Err(ParseError::UnknownTerminal { ref terminal, ref nonterminal, .. })
            if terminal == "b" && nonterminal == "S'"
    );
    assert_eq!(
        report.trace.last().unwrap().action,
        StepAction::Error(ErrorKind::UnknownTerminal)
    );
}

#[test]
fn test_unknown_terminal_after_known_prefix() {
    let report = EXPR.parse(tokens("id + * id").into_iter());
    let err = report.result.unwrap_err();
    assert_matches!(err, ParseError::UnknownTerminal { .. });
    assert_eq!(err.position(), Position::new(1, 6));
    assert_eq!(report.trace.matched().collect::<Vec<_>>(), vec!["id", "+"]);
}

#[test]
fn test_known_terminal_in_wrong_place() {
    let report = EXPR.parse(tokens("+ id").into_iter());
    assert_matches!(
        report.result,
        Err(ParseError::BlankCell { ref terminal, .. }) if terminal == "+"
    );
}

#[test]
fn test_unknown_terminal_against_matched_top() {
    let analysis =
        Analysis::from_source("S -> a b\n", Limits::default(), TablePolicy::Strict).unwrap();
    let report = analysis.parse(tokens("a c").into_iter());
    assert_matches!(
        report.result,
        Err(ParseError::Mismatch { ref expected, ref found, .. })
            if expected == "b" && found == "c"
    );
}

#[test]
fn test_unknown_terminal_under_expanded_rule() {
    let analysis =
        Analysis::from_source("Start -> a B\nB -> c\n", Limits::default(), TablePolicy::Strict)
            .unwrap();
    let report = analysis.parse(tokens("a d").into_iter());
    assert_matches!(
        report.result,
        Err(ParseError::UnknownTerminal { ref terminal, ref nonterminal, ref stack, .. })
            if terminal == "d" && nonterminal == "B" && stack == "B $"
    );
}

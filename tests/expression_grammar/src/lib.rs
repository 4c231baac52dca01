#![cfg(test)]

use lazy_static::lazy_static;
use matches::assert_matches;
use ll1::{
    Analysis, AnalysisError, BuildError, Limits, LoadError, ParseError, StepAction, SymbolId,
    TableEntry, TablePolicy,
};
use test_utils::{lexed, tokens, EXPR, EXPR_GRAMMAR};

const STATEMENT_GRAMMAR: &str = "\
P -> L
L -> S ; L
L -> epsilon
S -> id = E
S -> if E then S
E -> id
E -> num
";

lazy_static! {
    static ref STATEMENTS: Analysis =
        Analysis::from_source(STATEMENT_GRAMMAR, Limits::default(), TablePolicy::Strict).unwrap();
}

fn id(analysis: &Analysis, name: &str) -> SymbolId {
    analysis.grammar().registry().lookup(name).unwrap()
}

fn first(analysis: &Analysis, name: &str) -> Vec<String> {
    let registry = analysis.grammar().registry();
    analysis
        .first_sets()
        .get(id(analysis, name))
        .unwrap()
        .names(registry)
        .into_iter()
        .map(|s| s.to_owned())
        .collect()
}

fn follow(analysis: &Analysis, name: &str) -> Vec<String> {
    let registry = analysis.grammar().registry();
    analysis
        .follow_sets()
        .names(id(analysis, name), registry)
        .into_iter()
        .map(|s| s.to_owned())
        .collect()
}

#[test]
fn test_fixture_has_no_skipped_lines() {
    assert!(EXPR.grammar().skipped_lines().is_empty());
    assert_eq!(EXPR.grammar().productions().len(), 5);
}

#[test]
fn test_first_sets() {
    assert_eq!(first(&EXPR, "T"), vec!["id"]);
    assert_eq!(first(&EXPR, "E"), vec!["id"]);
    assert_eq!(first(&EXPR, "X"), vec!["+", "ε"]);
}

#[test]
fn test_follow_sets() {
    assert_eq!(follow(&EXPR, "E"), vec!["$"]);
    assert_eq!(follow(&EXPR, "X"), vec!["$"]);
    assert_eq!(follow(&EXPR, "T"), vec!["$", "+"]);
}

#[test]
fn test_fixed_point_is_stable() {
    let mut first = EXPR.first_sets().clone();
    assert!(!first.pass(EXPR.grammar()));
    assert_eq!(first.passes(), EXPR.first_sets().passes() + 1);

    let mut follow = EXPR.follow_sets().clone();
    assert!(!follow.pass(EXPR.grammar(), EXPR.first_sets()));

    for symbol in EXPR.grammar().registry().iter() {
        assert_eq!(first.get(symbol.id), EXPR.first_sets().get(symbol.id));
        assert_eq!(follow.get(symbol.id), EXPR.follow_sets().get(symbol.id));
    }
}

#[test]
fn test_table() {
    let table = EXPR.table();
    assert!(table.is_ll1());

    let entry = table.get(id(&EXPR, "E"), id(&EXPR, "id"));
    assert_eq!(entry, Some(TableEntry::Production(1)));
    assert_eq!(EXPR.grammar().describe(1).unwrap(), "E -> T X");

    assert_eq!(
        table.get(id(&EXPR, "X"), id(&EXPR, "$")),
        Some(TableEntry::Production(3))
    );
    assert_eq!(table.get(id(&EXPR, "T"), id(&EXPR, "+")), None);
    assert_eq!(
        table.get(id(&EXPR, "S'"), id(&EXPR, "$")),
        Some(TableEntry::Accept)
    );
}

#[test]
fn test_accept_trace() {
    let report = EXPR.parse(tokens("id + id").into_iter());
    assert!(report.is_accepted());

    let trace = &report.trace;
    assert_eq!(trace.count(StepAction::Match), 3);
    assert_eq!(trace.count(StepAction::Expand), 6);
    assert_eq!(trace.count(StepAction::Accept), 1);
    assert_eq!(
        trace.len(),
        trace.count(StepAction::Match) + trace.count(StepAction::Expand) + 1
    );
    assert_eq!(trace.expansions().collect::<Vec<_>>(), vec![0, 1, 4, 2, 4, 3]);
    assert_eq!(trace.matched().collect::<Vec<_>>(), vec!["id", "+", "id"]);
    assert_eq!(trace.steps()[0].stack, vec!["S'", "$"]);
    assert_eq!(trace.last().unwrap().action, StepAction::Accept);
    assert_eq!(trace.last().unwrap().stack, vec!["$"]);
}

#[test]
fn test_matched_tokens_equal_input() {
    let input = "id + id + id + id";
    let report = EXPR.parse(tokens(input).into_iter());
    assert!(report.is_accepted());
    assert_eq!(
        report.trace.matched().collect::<Vec<_>>(),
        input.split_whitespace().collect::<Vec<_>>()
    );
}

#[test]
fn test_rejected_inputs() {
    for input in &["", "+", "id id", "id +", "id + + id", "+ id"] {
        let report = EXPR.parse(tokens(input).into_iter());
        assert!(!report.is_accepted(), "`{}` must be rejected", input);
        assert_matches!(report.trace.last().unwrap().action, StepAction::Error(_));
    }
}

#[test]
fn test_premature_end() {
    let report = EXPR.parse(tokens("id +").into_iter());
    assert_matches!(
        report.result,
        Err(ParseError::BlankCell { ref nonterminal, ref terminal, .. })
            if nonterminal == "T" && terminal == "$"
    );
}

#[test]
fn test_deterministic() {
    let first = EXPR.parse(tokens("id + id").into_iter());
    let second = EXPR.parse(tokens("id + id").into_iter());
    assert_eq!(first.trace, second.trace);

    let rebuilt =
        Analysis::from_source(EXPR_GRAMMAR, Limits::default(), TablePolicy::Strict).unwrap();
    let third = rebuilt.parse(tokens("id + id").into_iter());
    assert_eq!(first.trace, third.trace);
}

#[test]
fn test_conflict() {
    let source = "S -> a b\nS -> a c\nS -> d\n";
    let analysis = Analysis::from_source(source, Limits::default(), TablePolicy::Lenient).unwrap();
    let table = analysis.table();
    assert!(!table.is_ll1());

    let conflicts = table.conflicts();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].nonterminal_name, "S");
    assert_eq!(conflicts[0].terminal_name, "a");
    assert_eq!(conflicts[0].productions, vec![1, 2]);

    // the last registered production owns the cell
    let s = id(&analysis, "S");
    assert_eq!(table.get(s, id(&analysis, "a")), Some(TableEntry::Production(2)));
    assert_eq!(table.get(s, id(&analysis, "d")), Some(TableEntry::Production(3)));

    let report = analysis.parse(tokens("a c").into_iter());
    assert!(report.is_accepted());
    let report = analysis.parse(tokens("a b").into_iter());
    assert_matches!(report.result, Err(ParseError::Mismatch { .. }));

    let strict = Analysis::from_source(source, Limits::default(), TablePolicy::Strict);
    assert_matches!(
        strict,
        Err(AnalysisError::Build(BuildError::Conflicts(ref conflicts))) if conflicts.len() == 1
    );
}

#[test]
fn test_statement_grammar() {
    assert!(STATEMENTS.table().is_ll1());
    assert_eq!(first(&STATEMENTS, "L"), vec!["id", "if", "ε"]);
    assert_eq!(follow(&STATEMENTS, "S"), vec![";"]);
    assert_eq!(follow(&STATEMENTS, "E"), vec![";", "then"]);
    assert_eq!(follow(&STATEMENTS, "L"), vec!["$"]);

    let input = lexed(&[
        ("id", "x"),
        ("=", "="),
        ("num", "1"),
        (";", ";"),
        ("if", "if"),
        ("id", "y"),
        ("then", "then"),
        ("id", "z"),
        ("=", "="),
        ("num", "2"),
        (";", ";"),
    ]);
    let report = STATEMENTS.parse(input.into_iter());
    assert!(report.is_accepted());
    assert_eq!(report.trace.count(StepAction::Match), 11);
    assert_eq!(report.trace.steps()[4].input.to_string(), "id x ...");
}

#[test]
fn test_statement_error_position() {
    let input = lexed(&[("id", "x"), ("=", "="), ("if", "if")]);
    let report = STATEMENTS.parse(input.into_iter());
    let err = report.result.unwrap_err();
    assert_matches!(
        err,
        ParseError::BlankCell { ref nonterminal, ref terminal, .. }
            if nonterminal == "E" && terminal == "if"
    );
    assert_eq!(err.position().column, 5);
}

#[test]
fn test_limits() {
    let limits = Limits {
        max_symbols: 4,
        ..Limits::default()
    };
    let result = Analysis::from_source(EXPR_GRAMMAR, limits, TablePolicy::Strict);
    assert_matches!(
        result,
        Err(AnalysisError::Load(LoadError::SymbolCapacity { capacity: 4, .. }))
    );

    let limits = Limits {
        max_productions: 2,
        ..Limits::default()
    };
    let result = Analysis::from_source(EXPR_GRAMMAR, limits, TablePolicy::Strict);
    assert_matches!(
        result,
        Err(AnalysisError::Load(LoadError::ProductionCapacity { capacity: 2, .. }))
    );
}

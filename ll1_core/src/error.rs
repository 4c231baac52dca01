use std::fmt;
use std::io;

use thiserror::Error;

use crate::{Conflict, Position};

/// Fatal grammar loading failures
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error while reading grammar: {0}")]
    Io(#[from] io::Error),

    #[error("symbol table is full ({capacity} symbols), cannot add `{name}`")]
    SymbolCapacity { capacity: usize, name: String },

    #[error("production table is full ({capacity} productions) at grammar line {line}")]
    ProductionCapacity { capacity: usize, line: usize },

    #[error("grammar contains no productions")]
    NoProductions,
}

/// Table construction failures under the strict policy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("grammar is not LL(1), {} conflicting cell(s): {}", .0.len(), join_conflicts(.0))]
    Conflicts(Vec<Conflict>),
}

fn join_conflicts(conflicts: &[Conflict]) -> String {
    let strings: Vec<String> = conflicts.iter().map(|c| c.to_string()).collect();
    strings.join("; ")
}

/// Terminal state of a rejected parse
///
/// Every variant names the symbols involved, the position of the current token and the parse stack
/// rendered top to bottom at the point of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("syntax error at {position}: expected `{expected}`, found `{found}` (stack: {stack})")]
    Mismatch {
        expected: String,
        found: String,
        position: Position,
        stack: String,
    },

    #[error("syntax error at {position}: table entry M[{nonterminal}, {terminal}] is empty, `{terminal}` cannot start `{nonterminal}` (stack: {stack})")]
    BlankCell {
        nonterminal: String,
        terminal: String,
        position: Position,
        stack: String,
    },

    #[error("syntax error at {position}: reached the accept entry M[{nonterminal}, {terminal}] before any input was derived (stack: {stack})")]
    UnexpectedAccept {
        nonterminal: String,
        terminal: String,
        position: Position,
        stack: String,
    },

    #[error("syntax error at {position}: `{terminal}` is not a terminal of the grammar, expected a start of `{nonterminal}` (stack: {stack})")]
    UnknownTerminal {
        nonterminal: String,
        terminal: String,
        position: Position,
        stack: String,
    },

    #[error("parse stack overflow at {position}: expanding `{production}` exceeds the capacity of {capacity} symbols")]
    StackOverflow {
        capacity: usize,
        production: String,
        position: Position,
    },

    #[error("step limit of {limit} exceeded at {position} (stack: {stack})")]
    StepLimitExceeded {
        limit: usize,
        position: Position,
        stack: String,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Mismatch { .. } => ErrorKind::Mismatch,
            ParseError::BlankCell { .. } => ErrorKind::BlankCell,
            ParseError::UnexpectedAccept { .. } => ErrorKind::UnexpectedAccept,
            ParseError::UnknownTerminal { .. } => ErrorKind::UnknownTerminal,
            ParseError::StackOverflow { .. } => ErrorKind::StackOverflow,
            ParseError::StepLimitExceeded { .. } => ErrorKind::StepLimitExceeded,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Mismatch { position, .. }
            | ParseError::BlankCell { position, .. }
            | ParseError::UnexpectedAccept { position, .. }
            | ParseError::UnknownTerminal { position, .. }
            | ParseError::StackOverflow { position, .. }
            | ParseError::StepLimitExceeded { position, .. } => *position,
        }
    }
}

/// Category of a parse error, as recorded in the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Mismatch,
    BlankCell,
    UnexpectedAccept,
    UnknownTerminal,
    StackOverflow,
    StepLimitExceeded,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let label = match self {
            ErrorKind::Mismatch => "mismatch",
            ErrorKind::BlankCell => "blank cell",
            ErrorKind::UnexpectedAccept => "unexpected accept",
            ErrorKind::UnknownTerminal => "unknown terminal",
            ErrorKind::StackOverflow => "stack overflow",
            ErrorKind::StepLimitExceeded => "step limit exceeded",
        };
        write!(f, "{}", label)
    }
}

/// Any failure while preparing an analysis session, before parsing starts
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

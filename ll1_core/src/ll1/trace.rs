use std::fmt;

use crate::error::ErrorKind;
use crate::Position;

/// Literal text longer than this is cut short in input summaries
pub const MAX_LEXEME_CHARS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepAction {
    Match,
    Expand,
    Accept,
    Error(ErrorKind),
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            StepAction::Match => write!(f, "match"),
            StepAction::Expand => write!(f, "expand"),
            StepAction::Accept => write!(f, "accept"),
            StepAction::Error(kind) => write!(f, "error ({})", kind),
        }
    }
}

/// The remaining input as seen at one step: the current terminal and its literal text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSummary {
    pub terminal: String,
    /// Literal text, if it says more than the terminal name
    pub lexeme: Option<String>,
    pub position: Position,
    /// False once the token stream is exhausted
    pub more: bool,
}

impl fmt::Display for InputSummary {
    /// Renders like `id count ...`, with the literal cut down to `MAX_LEXEME_CHARS`
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.terminal)?;
        if let Some(lexeme) = &self.lexeme {
            if lexeme.chars().count() > MAX_LEXEME_CHARS {
                let cut: String = lexeme.chars().take(MAX_LEXEME_CHARS).collect();
                write!(f, " {}~", cut)?;
            } else {
                write!(f, " {}", lexeme)?;
            }
        }
        if self.more {
            write!(f, " ...")?;
        }
        Ok(())
    }
}

/// One record of the parse trace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    /// 1-based step number
    pub index: usize,
    /// Symbol names from the top of the stack down to the end marker
    pub stack: Vec<String>,
    pub input: InputSummary,
    pub action: StepAction,
    /// Production expanded at this step
    pub production: Option<usize>,
}

impl Step {
    pub fn stack_string(&self) -> String {
        self.stack.join(" ")
    }

    /// Symbol on top of the stack when the step was taken
    pub fn top(&self) -> Option<&str> {
        self.stack.first().map(|s| s.as_str())
    }
}

/// Append-only log of the steps taken by the parse driver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Terminals consumed by match steps, in input order
    pub fn matched(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .filter(|s| s.action == StepAction::Match)
            .filter_map(|s| s.top())
    }

    /// Productions expanded, in order
    pub fn expansions(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .filter(|s| s.action == StepAction::Expand)
            .filter_map(|s| s.production)
    }

    pub fn count(&self, action: StepAction) -> usize {
        self.steps.iter().filter(|s| s.action == action).count()
    }
}

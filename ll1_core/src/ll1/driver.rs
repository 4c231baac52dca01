use tracing::{info, trace, warn};

use crate::error::ParseError;
use crate::{
    Grammar, InputSummary, Limits, ParseTable, Position, Step, StepAction, SymbolId, SymbolKind,
    TableEntry, Token, TokenSource, Trace, END_MARKER,
};

/// Result of driving a token stream through the parse table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub trace: Trace,
    pub result: Result<(), ParseError>,
}

impl ParseReport {
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Table-driven predictive parser
///
/// The stack starts out as `$ S'` with `S'` on top. At every step, with `X` on top of the stack
/// and `a` the current input terminal:
///
/// - `X = a = $`: accept
/// - `X` is a terminal: pop it and advance the input if `X = a`, fail otherwise
/// - `X` is a nonterminal: replace it by the right-hand side of `M[X, a]`, pushed in reverse
///
/// Each step is recorded in the trace before the driver moves on.
pub struct Driver<'a> {
    grammar: &'a Grammar,
    table: &'a ParseTable,
    limits: Limits,
}

impl<'a> Driver<'a> {
    /// `table` must have been generated from `grammar`
    pub fn new(grammar: &'a Grammar, table: &'a ParseTable, limits: &Limits) -> Self {
        Driver {
            grammar,
            table,
            limits: *limits,
        }
    }

    pub fn run<S: TokenSource>(&self, tokens: S) -> ParseReport {
        let mut run = Run {
            grammar: self.grammar,
            stack: vec![
                self.grammar.registry().end_marker(),
                self.grammar.registry().augmented_start(),
            ],
            cursor: Cursor::new(tokens),
            trace: Trace::new(),
            steps: 0,
        };
        let result = self.drive(&mut run);
        match &result {
            Ok(()) => info!("input accepted after {} steps", run.steps),
            Err(err) => warn!("input rejected: {}", err),
        }
        ParseReport {
            trace: run.trace,
            result,
        }
    }

    fn drive<S: TokenSource>(&self, run: &mut Run<'a, S>) -> Result<(), ParseError> {
        let registry = self.grammar.registry();
        let end = registry.end_marker();

        while let Some(&top) = run.stack.last() {
            run.steps += 1;
            let lookahead = run.cursor.lookahead(self.grammar);

            if run.steps > self.limits.max_steps {
                let err = ParseError::StepLimitExceeded {
                    limit: self.limits.max_steps,
                    position: run.cursor.position(),
                    stack: run.stack_string(),
                };
                run.record(StepAction::Error(err.kind()), None);
                return Err(err);
            }

            if top == end && lookahead == Some(end) {
                run.record(StepAction::Accept, None);
                return Ok(());
            }

            match registry.kind(top) {
                SymbolKind::Terminal | SymbolKind::EndMarker => {
                    if lookahead == Some(top) {
                        run.record(StepAction::Match, None);
                        run.stack.pop();
                        run.cursor.advance();
                    } else {
                        let err = ParseError::Mismatch {
                            expected: registry.name(top).to_owned(),
                            found: run.cursor.terminal_name().to_owned(),
                            position: run.cursor.position(),
                            stack: run.stack_string(),
                        };
                        run.record(StepAction::Error(err.kind()), None);
                        return Err(err);
                    }
                }
                _ => self.expand(run, top, lookahead)?,
            }
        }

        unreachable!("the end marker is only removed by accepting")
    }

    fn expand<S: TokenSource>(
        &self,
        run: &mut Run<'a, S>,
        top: SymbolId,
        lookahead: Option<SymbolId>,
    ) -> Result<(), ParseError> {
        let registry = self.grammar.registry();
        let nonterminal = registry.name(top).to_owned();

        let lookahead = match lookahead {
            Some(lookahead) => lookahead,
            None => {
                let err = ParseError::UnknownTerminal {
                    nonterminal,
                    terminal: run.cursor.terminal_name().to_owned(),
                    position: run.cursor.position(),
                    stack: run.stack_string(),
                };
                run.record(StepAction::Error(err.kind()), None);
                return Err(err);
            }
        };

        let id = match self.table.get(top, lookahead) {
            Some(TableEntry::Production(id)) => id,
            Some(TableEntry::Accept) => {
                let err = ParseError::UnexpectedAccept {
                    nonterminal,
                    terminal: registry.name(lookahead).to_owned(),
                    position: run.cursor.position(),
                    stack: run.stack_string(),
                };
                run.record(StepAction::Error(err.kind()), None);
                return Err(err);
            }
            None => {
                let err = ParseError::BlankCell {
                    nonterminal,
                    terminal: registry.name(lookahead).to_owned(),
                    position: run.cursor.position(),
                    stack: run.stack_string(),
                };
                run.record(StepAction::Error(err.kind()), None);
                return Err(err);
            }
        };

        let production = match self.grammar.production(id) {
            Some(production) => production,
            None => unreachable!("table entry refers to unknown production {}", id),
        };
        let pushed: Vec<SymbolId> = production.stack_symbols(registry).collect();

        if run.stack.len() - 1 + pushed.len() > self.limits.max_stack {
            let err = ParseError::StackOverflow {
                capacity: self.limits.max_stack,
                production: production.display(registry).to_string(),
                position: run.cursor.position(),
            };
            run.record(StepAction::Error(err.kind()), None);
            return Err(err);
        }

        run.record(StepAction::Expand, Some(id));
        run.stack.pop();
        run.stack.extend(pushed.into_iter().rev());
        Ok(())
    }
}

/// Mutable state of a single parse
struct Run<'g, S> {
    grammar: &'g Grammar,
    stack: Vec<SymbolId>,
    cursor: Cursor<S>,
    trace: Trace,
    steps: usize,
}

impl<'g, S: TokenSource> Run<'g, S> {
    fn stack_names(&self) -> Vec<String> {
        let registry = self.grammar.registry();
        self.stack
            .iter()
            .rev()
            .map(|s| registry.name(*s).to_owned())
            .collect()
    }

    fn stack_string(&self) -> String {
        self.stack_names().join(" ")
    }

    fn record(&mut self, action: StepAction, production: Option<usize>) {
        let step = Step {
            index: self.steps,
            stack: self.stack_names(),
            input: self.cursor.summary(),
            action,
            production,
        };
        trace!(
            "step {}: [{}] {} -> {}",
            step.index,
            step.stack_string(),
            step.input,
            step.action
        );
        self.trace.push(step);
    }
}

/// Position in the token stream, with the current token held back as lookahead
struct Cursor<S> {
    source: S,
    current: Option<Token>,
    end: Position,
}

impl<S: TokenSource> Cursor<S> {
    fn new(mut source: S) -> Self {
        let current = source.next_token();
        Cursor {
            source,
            current,
            end: Position::default(),
        }
    }

    fn advance(&mut self) {
        if let Some(token) = &self.current {
            self.end = token.end_position();
            self.current = self.source.next_token();
        }
    }

    /// Terminal symbol of the current token, the end marker once the stream is exhausted
    ///
    /// `None` means the token names something that is not a terminal of the grammar.
    fn lookahead(&self, grammar: &Grammar) -> Option<SymbolId> {
        let registry = grammar.registry();
        match &self.current {
            Some(token) => registry
                .lookup(&token.kind)
                .filter(|id| registry.kind(*id) == SymbolKind::Terminal),
            None => Some(registry.end_marker()),
        }
    }

    fn terminal_name(&self) -> &str {
        match &self.current {
            Some(token) => &token.kind,
            None => END_MARKER,
        }
    }

    fn position(&self) -> Position {
        match &self.current {
            Some(token) => token.position,
            None => self.end,
        }
    }

    fn summary(&self) -> InputSummary {
        match &self.current {
            Some(token) => InputSummary {
                terminal: token.kind.clone(),
                lexeme: if token.text.is_empty() || token.text == token.kind {
                    None
                } else {
                    Some(token.text.clone())
                },
                position: token.position,
                more: true,
            },
            None => InputSummary {
                terminal: END_MARKER.to_owned(),
                lexeme: None,
                position: self.end,
                more: false,
            },
        }
    }
}

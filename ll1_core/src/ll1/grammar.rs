use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::{Limits, Production, SymbolId, SymbolKind, SymbolRegistry};

/// A grammar line that was not understood and therefore ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the grammar source
    pub line: usize,
    pub text: String,
}

/// Symbol registry plus the ordered list of productions
///
/// Rules are read from lines of the form `LHS -> s1 s2 ... sN`, one alternative per line. Names
/// beginning with an uppercase letter or an underscore are nonterminals, `ε` (or `epsilon`) is the
/// empty alternative, and everything else is a terminal.
///
/// ```ignore
/// E -> T X
/// X -> + T X
/// X -> ε
/// T -> id
/// ```
///
/// Unless the source defines `S'` itself, production 0 `S' -> E` is synthesized, where `E` is the
/// left-hand side of the first rule.
#[derive(Debug, Clone)]
pub struct Grammar {
    registry: SymbolRegistry,
    productions: Vec<Production>,
    start: SymbolId,
    skipped: Vec<SkippedLine>,
}

impl Grammar {
    /// Load a grammar from a string
    pub fn parse(source: &str, limits: &Limits) -> Result<Self, LoadError> {
        Grammar::load(source.as_bytes(), limits)
    }

    pub fn load_file<P: AsRef<Path>>(path: P, limits: &Limits) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Grammar::load(BufReader::new(file), limits)
    }

    pub fn load<R: BufRead>(reader: R, limits: &Limits) -> Result<Self, LoadError> {
        let mut loader = GrammarLoader::new(limits)?;
        for (idx, line) in reader.lines().enumerate() {
            loader.read_line(idx + 1, &line?)?;
        }
        loader.finish()
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    /// All productions ordered by id, the augmented rule first if it was synthesized
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn production(&self, id: usize) -> Option<&Production> {
        self.productions
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|idx| &self.productions[idx])
    }

    /// The user start symbol
    ///
    /// This is the first symbol of an explicit `S' -> ...` rule if it is a nonterminal, and the
    /// left-hand side of the first rule otherwise.
    pub fn start_symbol(&self) -> SymbolId {
        self.start
    }

    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn describe(&self, id: usize) -> Option<String> {
        self.production(id)
            .map(|p| p.display(&self.registry).to_string())
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for production in self.productions.iter() {
            writeln!(
                f,
                "{}. {}",
                production.id,
                production.display(&self.registry)
            )?;
        }
        Ok(())
    }
}

struct GrammarLoader {
    registry: SymbolRegistry,
    productions: Vec<Production>,
    skipped: Vec<SkippedLine>,
    max_productions: usize,
}

impl GrammarLoader {
    fn new(limits: &Limits) -> Result<Self, LoadError> {
        Ok(GrammarLoader {
            registry: SymbolRegistry::with_capacity(limits.max_symbols)?,
            productions: Vec::new(),
            skipped: Vec::new(),
            max_productions: limits.max_productions,
        })
    }

    fn read_line(&mut self, line_no: usize, line: &str) -> Result<(), LoadError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let (lhs, rhs) = match split_rule(trimmed) {
            Some(rule) => rule,
            None => {
                self.skip(line_no, line);
                return Ok(());
            }
        };

        if self.productions.len() >= self.max_productions {
            return Err(LoadError::ProductionCapacity {
                capacity: self.max_productions,
                line: line_no,
            });
        }

        let lhs = self.registry.intern(lhs, SymbolKind::Nonterminal)?;
        if !self.registry.get(lhs).is_nonterminal() {
            // The name was already seen as a terminal or reserved symbol
            self.skip(line_no, line);
            return Ok(());
        }

        let mut symbols = Vec::with_capacity(rhs.len());
        for name in rhs {
            symbols.push(self.registry.intern(name, SymbolKind::classify(name))?);
        }

        let production = Production {
            id: self.productions.len() + 1,
            lhs,
            rhs: symbols,
        };
        debug!(
            "production {}: {}",
            production.id,
            production.display(&self.registry)
        );
        self.productions.push(production);
        Ok(())
    }

    fn skip(&mut self, line_no: usize, line: &str) {
        warn!("skipping malformed grammar line {}: {}", line_no, line);
        self.skipped.push(SkippedLine {
            line: line_no,
            text: line.to_owned(),
        });
    }

    fn finish(mut self) -> Result<Grammar, LoadError> {
        let first_lhs = match self.productions.first() {
            Some(first) => first.lhs,
            None => return Err(LoadError::NoProductions),
        };

        let augmented = self.registry.augmented_start();
        let explicit = self
            .productions
            .iter()
            .find(|p| p.lhs == augmented)
            .map(|p| p.rhs.first().cloned());
        let start = match explicit {
            Some(Some(symbol)) if self.registry.kind(symbol) == SymbolKind::Nonterminal => symbol,
            _ => first_lhs,
        };
        if explicit.is_none() {
            self.productions.insert(
                0,
                Production {
                    id: 0,
                    lhs: augmented,
                    rhs: vec![start],
                },
            );
        }

        debug!(
            "grammar loaded: {} productions, {} symbols, {} skipped lines",
            self.productions.len(),
            self.registry.len(),
            self.skipped.len()
        );

        Ok(Grammar {
            registry: self.registry,
            productions: self.productions,
            start,
            skipped: self.skipped,
        })
    }
}

/// Split `LHS -> s1 .. sN` into its sides
///
/// The left-hand side must be a single word and the right-hand side must not be empty.
fn split_rule(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut sides = line.splitn(2, "->");
    let lhs = sides.next()?.trim();
    let rhs: Vec<&str> = sides.next()?.split_whitespace().collect();
    if lhs.is_empty() || lhs.split_whitespace().count() != 1 || rhs.is_empty() {
        return None;
    }
    Some((lhs, rhs))
}

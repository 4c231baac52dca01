use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::error::BuildError;
use crate::{FirstSet, FirstSets, FollowSets, Grammar, Production, SymbolId, TablePolicy};

/// Resolved content of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEntry {
    Production(usize),
    Accept,
}

impl fmt::Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            TableEntry::Production(id) => write!(f, "{}", id),
            TableEntry::Accept => write!(f, "accept"),
        }
    }
}

/// All claims made on a single `(nonterminal, terminal)` cell
///
/// Candidates are kept in registration order without duplicates. The resolved entry is the last
/// candidate, so a conflicting cell behaves as if later productions overwrote earlier ones. The
/// accept marker only resolves when no production claims the cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    candidates: Vec<usize>,
    accept: bool,
}

impl Cell {
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    pub fn is_accept(&self) -> bool {
        self.accept
    }

    pub fn is_conflict(&self) -> bool {
        self.candidates.len() > 1
    }

    pub fn resolved(&self) -> Option<TableEntry> {
        match self.candidates.last() {
            Some(id) => Some(TableEntry::Production(*id)),
            None if self.accept => Some(TableEntry::Accept),
            None => None,
        }
    }
}

/// A cell claimed by more than one production
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conflict {
    pub nonterminal: SymbolId,
    pub terminal: SymbolId,
    pub nonterminal_name: String,
    pub terminal_name: String,
    /// Competing production ids in registration order
    pub productions: Vec<usize>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let ids: Vec<String> = self.productions.iter().map(|id| id.to_string()).collect();
        write!(
            f,
            "M[{}, {}] is claimed by productions {}",
            self.nonterminal_name,
            self.terminal_name,
            ids.join(", ")
        )
    }
}

/// Predictive LL(1) parse table
///
/// Maps `(nonterminal, lookahead terminal)` pairs to the production to expand. Cells that are not
/// present are syntax errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTable {
    cells: BTreeMap<(SymbolId, SymbolId), Cell>,
    conflicts: Vec<Conflict>,
}

impl ParseTable {
    /// Generate the predictive table from converged FIRST and FOLLOW sets
    ///
    /// With `TablePolicy::Strict` any conflict fails the build; with `TablePolicy::Lenient` the
    /// conflicts are only recorded.
    pub fn generate(
        grammar: &Grammar,
        first: &FirstSets,
        follow: &FollowSets,
        policy: TablePolicy,
    ) -> Result<Self, BuildError> {
        let table = ParseTableGenerator::new(grammar, first, follow).generate();
        match policy {
            TablePolicy::Strict if !table.conflicts.is_empty() => {
                Err(BuildError::Conflicts(table.conflicts))
            }
            _ => Ok(table),
        }
    }

    pub fn get(&self, nonterminal: SymbolId, terminal: SymbolId) -> Option<TableEntry> {
        self.cells
            .get(&(nonterminal, terminal))
            .and_then(|cell| cell.resolved())
    }

    pub fn cell(&self, nonterminal: SymbolId, terminal: SymbolId) -> Option<&Cell> {
        self.cells.get(&(nonterminal, terminal))
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }
}

struct ParseTableGenerator<'g> {
    grammar: &'g Grammar,
    first: &'g FirstSets,
    follow: &'g FollowSets,
    cells: BTreeMap<(SymbolId, SymbolId), Cell>,
}

impl<'g> ParseTableGenerator<'g> {
    fn new(grammar: &'g Grammar, first: &'g FirstSets, follow: &'g FollowSets) -> Self {
        ParseTableGenerator {
            grammar,
            first,
            follow,
            cells: BTreeMap::new(),
        }
    }

    fn generate(mut self) -> ParseTable {
        for production in self.grammar.productions() {
            let director = self.director_set(production);

            for terminal in director.terminals.iter() {
                self.claim(production, *terminal);
            }

            if director.epsilon {
                let follow: Vec<SymbolId> = self
                    .follow
                    .get(production.lhs)
                    .map(|set| set.iter().cloned().collect())
                    .unwrap_or_default();
                for terminal in follow {
                    self.claim(production, terminal);
                }
            }
        }

        let registry = self.grammar.registry();
        self.cells
            .entry((registry.augmented_start(), registry.end_marker()))
            .or_default()
            .accept = true;

        let conflicts = self.collect_conflicts();
        debug!(
            "parse table built: {} cells, {} conflicts",
            self.cells.len(),
            conflicts.len()
        );

        ParseTable {
            cells: self.cells,
            conflicts,
        }
    }

    /// Lookahead terminals selecting `production`, i.e. FIRST of its right-hand side
    fn director_set(&self, production: &Production) -> FirstSet {
        self.first.of_sequence(&production.rhs)
    }

    fn claim(&mut self, production: &Production, terminal: SymbolId) {
        let cell = self
            .cells
            .entry((production.lhs, terminal))
            .or_default();
        if cell.candidates.contains(&production.id) {
            return;
        }
        if let Some(previous) = cell.candidates.last() {
            let registry = self.grammar.registry();
            warn!(
                "LL(1) conflict: M[{}, {}] already holds production {}, now claimed by production {}",
                registry.name(production.lhs),
                registry.name(terminal),
                previous,
                production.id
            );
        }
        cell.candidates.push(production.id);
    }

    fn collect_conflicts(&self) -> Vec<Conflict> {
        let registry = self.grammar.registry();
        self.cells
            .iter()
            .filter(|(_, cell)| cell.is_conflict())
            .map(|(&(nonterminal, terminal), cell)| Conflict {
                nonterminal,
                terminal,
                nonterminal_name: registry.name(nonterminal).to_owned(),
                terminal_name: registry.name(terminal).to_owned(),
                productions: cell.candidates.clone(),
            })
            .collect()
    }
}

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::{Grammar, SymbolId, SymbolKind, SymbolRegistry};

/// Terminals that can begin a derivation, plus whether the empty string can be derived
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FirstSet {
    pub terminals: BTreeSet<SymbolId>,
    pub epsilon: bool,
}

impl FirstSet {
    /// Symbol names in registry order, `ε` last if present
    pub fn names<'r>(&self, registry: &'r SymbolRegistry) -> Vec<&'r str> {
        let mut names: Vec<&str> = self.terminals.iter().map(|t| registry.name(*t)).collect();
        if self.epsilon {
            names.push(registry.name(registry.epsilon()));
        }
        names
    }
}

/// FIRST sets of every symbol of a grammar
///
/// The FIRST set of a terminal `t` is `{t}` and the epsilon symbol derives only the empty string.
/// For a nonterminal `A` the sets are grown to a fixed point: for each rule `A -> s1 s2 .. sk`, the
/// terminals of `FIRST(s1)` are added to `FIRST(A)`, then those of `FIRST(s2)` if `s1` can derive
/// the empty string, and so on. If every `si` can derive the empty string, so can `A`.
///
/// Consider the following example:
/// ```ignore
/// E -> T X
/// X -> + T X
/// X -> ε
/// T -> id
/// ```
/// Here `FIRST(T) = FIRST(E) = {id}` and `FIRST(X) = {+, ε}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstSets {
    sets: BTreeMap<SymbolId, FirstSet>,
    passes: usize,
}

impl FirstSets {
    pub fn compute(grammar: &Grammar) -> Self {
        let mut sets = BTreeMap::new();
        for symbol in grammar.registry().iter() {
            let set = match symbol.kind {
                SymbolKind::Terminal => {
                    let mut terminals = BTreeSet::new();
                    terminals.insert(symbol.id);
                    FirstSet {
                        terminals,
                        epsilon: false,
                    }
                }
                SymbolKind::Epsilon => FirstSet {
                    terminals: BTreeSet::new(),
                    epsilon: true,
                },
                _ => FirstSet::default(),
            };
            sets.insert(symbol.id, set);
        }

        let mut first = FirstSets { sets, passes: 0 };
        while first.pass(grammar) {}
        debug!("FIRST sets converged after {} passes", first.passes);
        first
    }

    /// Run a single pass over all productions
    ///
    /// Returns whether any set changed. Once `compute` has returned, another pass never does.
    pub fn pass(&mut self, grammar: &Grammar) -> bool {
        self.passes += 1;
        let mut changed = false;
        for production in grammar.productions() {
            let derived = self.of_sequence(&production.rhs);
            let entry = self.sets.entry(production.lhs).or_default();
            for terminal in derived.terminals {
                changed |= entry.terminals.insert(terminal);
            }
            if derived.epsilon && !entry.epsilon {
                entry.epsilon = true;
                changed = true;
            }
        }
        changed
    }

    pub fn get(&self, symbol: SymbolId) -> Option<&FirstSet> {
        self.sets.get(&symbol)
    }

    /// FIRST set of a symbol sequence
    ///
    /// Symbols are scanned left to right for as long as they can derive the empty string. The empty
    /// sequence only derives the empty string.
    pub fn of_sequence(&self, symbols: &[SymbolId]) -> FirstSet {
        let mut result = FirstSet::default();
        for symbol in symbols {
            match self.sets.get(symbol) {
                Some(set) => {
                    result.terminals.extend(set.terminals.iter().cloned());
                    if !set.epsilon {
                        return result;
                    }
                }
                None => return result,
            }
        }
        result.epsilon = true;
        result
    }

    /// Number of passes run so far, the final unchanged pass included
    pub fn passes(&self) -> usize {
        self.passes
    }
}

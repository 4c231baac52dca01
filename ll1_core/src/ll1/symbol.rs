use std::collections::HashMap;
use std::fmt;

use crate::error::LoadError;

/// Name of the reserved empty-string symbol
pub const EPSILON: &str = "ε";
/// ASCII spelling accepted for `EPSILON` in grammar sources
pub const EPSILON_ALIAS: &str = "epsilon";
/// Name of the end-of-input marker
pub const END_MARKER: &str = "$";
/// Name of the augmented start symbol
pub const AUGMENTED_START: &str = "S'";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolKind {
    Terminal,
    Nonterminal,
    Epsilon,
    EndMarker,
    AugmentedStart,
}

impl SymbolKind {
    /// Classify a grammar token by naming convention
    ///
    /// Names starting with an ASCII uppercase letter or an underscore are nonterminals; the
    /// epsilon spellings are `Epsilon`; everything else is a terminal.
    pub fn classify(name: &str) -> SymbolKind {
        if name == EPSILON || name == EPSILON_ALIAS {
            return SymbolKind::Epsilon;
        }
        match name.chars().next() {
            Some(c) if c.is_ascii_uppercase() || c == '_' => SymbolKind::Nonterminal,
            _ => SymbolKind::Terminal,
        }
    }
}

/// Stable identity of an interned symbol
///
/// Identities are handed out in interning order and index straight into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub(crate) usize);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn is_terminal(&self) -> bool {
        self.kind == SymbolKind::Terminal
    }

    /// True for symbols that own productions, the augmented start included
    pub fn is_nonterminal(&self) -> bool {
        match self.kind {
            SymbolKind::Nonterminal | SymbolKind::AugmentedStart => true,
            _ => false,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name)
    }
}

/// Interning table for grammar symbols
///
/// A fresh registry already holds `ε`, `$` and `S'` (in this order). Symbols are never removed.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    symbols: Vec<Symbol>,
    by_name: HashMap<String, SymbolId>,
    capacity: usize,
    epsilon: SymbolId,
    end: SymbolId,
    start: SymbolId,
}

impl SymbolRegistry {
    pub fn with_capacity(capacity: usize) -> Result<Self, LoadError> {
        let mut registry = SymbolRegistry {
            symbols: Vec::new(),
            by_name: HashMap::new(),
            capacity,
            epsilon: SymbolId(0),
            end: SymbolId(0),
            start: SymbolId(0),
        };
        registry.epsilon = registry.intern(EPSILON, SymbolKind::Epsilon)?;
        registry.end = registry.intern(END_MARKER, SymbolKind::EndMarker)?;
        registry.start = registry.intern(AUGMENTED_START, SymbolKind::AugmentedStart)?;
        // Both spellings of epsilon resolve to the same identity
        registry
            .by_name
            .insert(EPSILON_ALIAS.to_owned(), registry.epsilon);
        Ok(registry)
    }

    /// Intern `name`, returning the existing identity if the name is already known
    ///
    /// The requested kind is ignored for known names: the first classification wins.
    pub fn intern(&mut self, name: &str, kind: SymbolKind) -> Result<SymbolId, LoadError> {
        if let Some(id) = self.lookup(name) {
            return Ok(id);
        }
        if self.symbols.len() >= self.capacity {
            return Err(LoadError::SymbolCapacity {
                capacity: self.capacity,
                name: name.to_owned(),
            });
        }
        let id = SymbolId(self.symbols.len());
        self.symbols.push(Symbol {
            id,
            name: name.to_owned(),
            kind,
        });
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).cloned()
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    pub fn name(&self, id: SymbolId) -> &str {
        &self.symbols[id.0].name
    }

    pub fn kind(&self, id: SymbolId) -> SymbolKind {
        self.symbols[id.0].kind
    }

    pub fn epsilon(&self) -> SymbolId {
        self.epsilon
    }

    pub fn end_marker(&self) -> SymbolId {
        self.end
    }

    pub fn augmented_start(&self) -> SymbolId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Terminals in interning order
    pub fn terminals(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(|s| s.is_terminal())
    }

    /// Nonterminals in interning order, excluding the augmented start
    pub fn nonterminals(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols
            .iter()
            .filter(|s| s.kind == SymbolKind::Nonterminal)
    }
}

use std::fmt;

use crate::{SymbolId, SymbolRegistry};

/// A rewrite rule `lhs -> rhs`
///
/// User productions are numbered from 1 in load order. Production 0 is reserved for the synthesized
/// augmented rule `S' -> start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub id: usize,
    pub lhs: SymbolId,
    pub rhs: Vec<SymbolId>,
}

impl Production {
    /// Right-hand symbols that end up on the parse stack, i.e. all but epsilon
    pub fn stack_symbols<'a>(
        &'a self,
        registry: &'a SymbolRegistry,
    ) -> impl DoubleEndedIterator<Item = SymbolId> + 'a {
        let epsilon = registry.epsilon();
        self.rhs.iter().cloned().filter(move |s| *s != epsilon)
    }

    pub fn display<'a>(&'a self, registry: &'a SymbolRegistry) -> ProductionDisplay<'a> {
        ProductionDisplay {
            production: self,
            registry,
        }
    }
}

/// Renders a production as `E -> T X`
pub struct ProductionDisplay<'a> {
    production: &'a Production,
    registry: &'a SymbolRegistry,
}

impl<'a> fmt::Display for ProductionDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} ->", self.registry.name(self.production.lhs))?;
        for symbol in self.production.rhs.iter() {
            write!(f, " {}", self.registry.name(*symbol))?;
        }
        Ok(())
    }
}

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::{FirstSets, Grammar, SymbolId, SymbolRegistry};

/// FOLLOW sets of every nonterminal of a grammar
///
/// `FOLLOW(S')` starts out as `{$}`. For every occurrence of a nonterminal `B` in a rule
/// `A -> α B β`, the terminals of `FIRST(β)` are added to `FOLLOW(B)`; if `β` is empty or can
/// derive the empty string, `FOLLOW(A)` is added as well. This repeats until nothing changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowSets {
    sets: BTreeMap<SymbolId, BTreeSet<SymbolId>>,
    passes: usize,
}

impl FollowSets {
    /// `first` must hold the converged FIRST sets of the same grammar
    pub fn compute(grammar: &Grammar, first: &FirstSets) -> Self {
        let registry = grammar.registry();
        let mut sets = BTreeMap::new();
        for symbol in registry.iter().filter(|s| s.is_nonterminal()) {
            sets.insert(symbol.id, BTreeSet::new());
        }
        sets.entry(registry.augmented_start())
            .or_insert_with(BTreeSet::new)
            .insert(registry.end_marker());

        let mut follow = FollowSets { sets, passes: 0 };
        while follow.pass(grammar, first) {}
        debug!("FOLLOW sets converged after {} passes", follow.passes);
        follow
    }

    /// Run a single pass over all productions, returning whether any set changed
    pub fn pass(&mut self, grammar: &Grammar, first: &FirstSets) -> bool {
        self.passes += 1;
        let registry = grammar.registry();
        let mut changed = false;
        for production in grammar.productions() {
            for (idx, symbol) in production.rhs.iter().enumerate() {
                if !registry.get(*symbol).is_nonterminal() {
                    continue;
                }

                let suffix = first.of_sequence(&production.rhs[idx + 1..]);
                let mut additions = suffix.terminals;
                if suffix.epsilon {
                    if let Some(lhs_follow) = self.sets.get(&production.lhs) {
                        additions.extend(lhs_follow.iter().cloned());
                    }
                }

                let entry = self.sets.entry(*symbol).or_insert_with(BTreeSet::new);
                for terminal in additions {
                    changed |= entry.insert(terminal);
                }
            }
        }
        changed
    }

    pub fn get(&self, nonterminal: SymbolId) -> Option<&BTreeSet<SymbolId>> {
        self.sets.get(&nonterminal)
    }

    /// Names in the set of `nonterminal`, in registry order
    pub fn names<'r>(&self, nonterminal: SymbolId, registry: &'r SymbolRegistry) -> Vec<&'r str> {
        self.sets
            .get(&nonterminal)
            .map(|set| set.iter().map(|t| registry.name(*t)).collect())
            .unwrap_or_default()
    }

    pub fn passes(&self) -> usize {
        self.passes
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Limits;

    fn follow_of(source: &str, symbol: &str) -> Vec<String> {
        let grammar = Grammar::parse(source, &Limits::default()).unwrap();
        let first = FirstSets::compute(&grammar);
        let follow = FollowSets::compute(&grammar, &first);
        let registry = grammar.registry();
        follow
            .names(registry.lookup(symbol).unwrap(), registry)
            .into_iter()
            .map(|s| s.to_owned())
            .collect()
    }

    const EXPR: &str = "E -> T X\nX -> + T X\nX -> ε\nT -> id\n";

    #[test]
    fn test_expression_follow_sets() {
        assert_eq!(follow_of(EXPR, "S'"), vec!["$"]);
        assert_eq!(follow_of(EXPR, "E"), vec!["$"]);
        assert_eq!(follow_of(EXPR, "X"), vec!["$"]);
        assert_eq!(follow_of(EXPR, "T"), vec!["$", "+"]);
    }

    #[test]
    fn test_follow_through_nullable_suffix() {
        let source = "S -> A B c\nA -> a\nB -> b\nB -> ε\n";
        // `B` may vanish, so `c` can follow `A` directly
        assert_eq!(follow_of(source, "A"), vec!["c", "b"]);
        assert_eq!(follow_of(source, "B"), vec!["c"]);
        assert_eq!(follow_of(source, "S"), vec!["$"]);
    }

    #[test]
    fn test_follow_of_last_symbol() {
        let source = "S -> a A\nA -> b B\nB -> c\n";
        assert_eq!(follow_of(source, "A"), vec!["$"]);
        assert_eq!(follow_of(source, "B"), vec!["$"]);
    }

    #[test]
    fn test_fixed_point() {
        let grammar = Grammar::parse(EXPR, &Limits::default()).unwrap();
        let first = FirstSets::compute(&grammar);
        let mut follow = FollowSets::compute(&grammar, &first);
        let before = follow.sets.clone();
        assert!(!follow.pass(&grammar, &first));
        assert_eq!(follow.sets, before);
    }
}

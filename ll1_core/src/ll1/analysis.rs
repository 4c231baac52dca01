use std::path::Path;

use crate::error::{AnalysisError, BuildError};
use crate::{
    Driver, FirstSets, FollowSets, Grammar, Limits, ParseReport, ParseTable, TablePolicy,
    TokenSource,
};

/// An analysis session over one grammar
///
/// Owns the grammar together with everything derived from it. The derived sets and the table are
/// computed once, in order, when the session is built and are never updated afterwards.
#[derive(Debug, Clone)]
pub struct Analysis {
    grammar: Grammar,
    first: FirstSets,
    follow: FollowSets,
    table: ParseTable,
    limits: Limits,
}

impl Analysis {
    pub fn build(grammar: Grammar, limits: Limits, policy: TablePolicy) -> Result<Self, BuildError> {
        let first = FirstSets::compute(&grammar);
        let follow = FollowSets::compute(&grammar, &first);
        let table = ParseTable::generate(&grammar, &first, &follow, policy)?;
        Ok(Analysis {
            grammar,
            first,
            follow,
            table,
            limits,
        })
    }

    pub fn from_source(
        source: &str,
        limits: Limits,
        policy: TablePolicy,
    ) -> Result<Self, AnalysisError> {
        let grammar = Grammar::parse(source, &limits)?;
        Ok(Analysis::build(grammar, limits, policy)?)
    }

    pub fn from_file<P: AsRef<Path>>(
        path: P,
        limits: Limits,
        policy: TablePolicy,
    ) -> Result<Self, AnalysisError> {
        let grammar = Grammar::load_file(path, &limits)?;
        Ok(Analysis::build(grammar, limits, policy)?)
    }

    /// Drive a token stream through the table, recording every step
    pub fn parse<S: TokenSource>(&self, tokens: S) -> ParseReport {
        Driver::new(&self.grammar, &self.table, &self.limits).run(tokens)
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn first_sets(&self) -> &FirstSets {
        &self.first
    }

    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow
    }

    pub fn table(&self) -> &ParseTable {
        &self.table
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}

/// Capacity limits of an analysis session
///
/// Limits are fixed when the session is created. Running into any of them is reported as an error
/// rather than grown past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of interned symbols, the three reserved symbols included
    pub max_symbols: usize,
    /// Maximum number of rules read from the grammar source, not counting the synthesized `S'` rule
    pub max_productions: usize,
    /// Maximum depth of the parse stack
    pub max_stack: usize,
    /// Maximum number of driver steps
    pub max_steps: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_symbols: 50,
            max_productions: 100,
            max_stack: 100,
            max_steps: 1000,
        }
    }
}

/// What the table builder does when a cell is claimed by more than one production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePolicy {
    /// Record the conflict and keep building; the last registered production wins the cell
    Lenient,
    /// Fail with every colliding cell listed
    Strict,
}

impl Default for TablePolicy {
    fn default() -> Self {
        TablePolicy::Lenient
    }
}

mod symbol;
pub use self::symbol::{
    Symbol, SymbolId, SymbolKind, SymbolRegistry, AUGMENTED_START, END_MARKER, EPSILON,
    EPSILON_ALIAS,
};

mod production;
pub use self::production::{Production, ProductionDisplay};

mod grammar;
pub use self::grammar::{Grammar, SkippedLine};

mod first;
pub use self::first::{FirstSet, FirstSets};

mod follow;
pub use self::follow::FollowSets;

mod parse_table;
pub use self::parse_table::{Cell, Conflict, ParseTable, TableEntry};

mod token;
pub use self::token::{Position, Token};

mod trace;
pub use self::trace::{InputSummary, Step, StepAction, Trace, MAX_LEXEME_CHARS};

mod driver;
pub use self::driver::{Driver, ParseReport};

mod analysis;
pub use self::analysis::Analysis;

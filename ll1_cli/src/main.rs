use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use ll1::{Limits, TablePolicy};
use tracing::Level;

mod grammar;
mod scan;
mod table;
mod trace;

#[derive(Parser)]
#[command(
    name = "ll1_cli",
    about = "Tool for inspecting LL(1) predictive parsers",
    version,
    arg_required_else_help = true
)]
struct Cli {
    /// Log more details to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints the LL(1) analysis table of a grammar
    Table {
        #[command(flatten)]
        grammar: GrammarOpts,

        /// Write the analysis table to a specified CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Prints the FIRST and FOLLOW sets of a grammar
    Sets {
        #[command(flatten)]
        grammar: GrammarOpts,
    },
    /// Parses an input file and prints every analysis step
    Parse {
        #[command(flatten)]
        grammar: GrammarOpts,

        /// Source file to scan and parse
        input: PathBuf,

        /// Also write the steps and the grammar listing to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GrammarOpts {
    /// Grammar file with one `LHS -> s1 s2 ...` rule per line
    grammar: PathBuf,

    /// Fail instead of warning when the grammar is not LL(1)
    #[arg(long)]
    strict: bool,

    #[arg(long, default_value_t = Limits::default().max_symbols)]
    max_symbols: usize,

    #[arg(long, default_value_t = Limits::default().max_productions)]
    max_productions: usize,

    /// Maximum depth of the parse stack
    #[arg(long, default_value_t = Limits::default().max_stack)]
    max_stack: usize,

    /// Maximum number of parse steps
    #[arg(long, default_value_t = Limits::default().max_steps)]
    max_steps: usize,
}

impl GrammarOpts {
    fn limits(&self) -> Limits {
        Limits {
            max_symbols: self.max_symbols,
            max_productions: self.max_productions,
            max_stack: self.max_stack,
            max_steps: self.max_steps,
        }
    }

    fn policy(&self) -> TablePolicy {
        if self.strict {
            TablePolicy::Strict
        } else {
            TablePolicy::Lenient
        }
    }
}

fn main() {
    if let Err(err) = cli() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn cli() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Command::Table { grammar, csv } => {
            let analysis = grammar::load_analysis(&grammar)?;
            if let Some(csv_filename) = csv {
                table::write_table_csv(&analysis, &csv_filename)?;
            } else {
                table::print_table(&analysis);
            }
        }
        Command::Sets { grammar } => {
            let analysis = grammar::load_analysis(&grammar)?;
            table::print_sets(&analysis);
        }
        Command::Parse {
            grammar,
            input,
            output,
        } => {
            let analysis = grammar::load_analysis(&grammar)?;
            trace::parse_file(&analysis, &input, output.as_deref())?;
        }
    }

    Ok(())
}

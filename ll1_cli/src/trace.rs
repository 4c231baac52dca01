use std::error::Error;
use std::fs;
use std::path::Path;

use logos::Logos;
use prettytable as pt;
use prettytable::row;

use ll1::extra::LogosTokens;
use ll1::{Analysis, ParseReport};

use crate::scan::Word;

/// Scan and parse `input_filename`, print the steps, and optionally save them with the grammar
///
/// A rejected input is returned as an error once the steps have been printed.
pub fn parse_file(
    analysis: &Analysis,
    input_filename: &Path,
    output_filename: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(input_filename)?;
    let report = analysis.parse(LogosTokens::new(Word::lexer(&source)));

    let pretty_trace = generate_pretty_trace(analysis, &report);
    println!("{}", pretty_trace);

    if let Some(output_filename) = output_filename {
        fs::write(output_filename, render_result(analysis, &report, &pretty_trace))?;
    }

    match report.result {
        Ok(()) => {
            println!("Input accepted");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn generate_pretty_trace(analysis: &Analysis, report: &ParseReport) -> pt::Table {
    let mut table = pt::Table::new();
    table.set_titles(row!["Step", "Stack", "Input", "Action", "Production"]);

    for step in report.trace.iter() {
        let production = step
            .production
            .and_then(|id| analysis.grammar().describe(id).map(|d| format!("{}: {}", id, d)))
            .unwrap_or_default();
        table.add_row(row![
            step.index,
            step.stack_string(),
            step.input,
            step.action,
            production
        ]);
    }

    table
}

fn render_result(analysis: &Analysis, report: &ParseReport, pretty_trace: &pt::Table) -> String {
    let grammar = analysis.grammar();
    let status = match &report.result {
        Ok(()) => "accepted".to_owned(),
        Err(err) => format!("rejected: {}", err),
    };
    format!(
        "LL(1) parse result\n\nSteps:\n{}\nResult: {}\n\nGrammar ({} productions):\n{}",
        pretty_trace,
        status,
        grammar.productions().len(),
        grammar
    )
}

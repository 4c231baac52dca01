use std::error::Error;
use std::fs::File;
use std::path::Path;

use prettytable as pt;
use prettytable::cell;
use prettytable::row;

use ll1::{Analysis, Symbol};

pub fn print_table(analysis: &Analysis) {
    let pretty_table = generate_pretty_table(analysis);
    println!("{}", pretty_table);
    print_conflicts(analysis);
}

pub fn write_table_csv(analysis: &Analysis, csv_filename: &Path) -> Result<(), Box<dyn Error>> {
    let pretty_table = generate_pretty_table(analysis);
    let csv_file = File::create(csv_filename)?;
    pretty_table.to_csv(csv_file)?;
    print_conflicts(analysis);
    Ok(())
}

/// Print `FIRST(A) = { .. }` and `FOLLOW(A) = { .. }` for every nonterminal
pub fn print_sets(analysis: &Analysis) {
    let registry = analysis.grammar().registry();

    for nonterminal in registry.nonterminals() {
        let names = analysis
            .first_sets()
            .get(nonterminal.id)
            .map(|set| set.names(registry))
            .unwrap_or_default();
        println!("FIRST({}) = {{ {} }}", nonterminal, names.join(", "));
    }
    println!();
    for nonterminal in registry.nonterminals() {
        let names = analysis.follow_sets().names(nonterminal.id, registry);
        println!("FOLLOW({}) = {{ {} }}", nonterminal, names.join(", "));
    }
}

fn print_conflicts(analysis: &Analysis) {
    let conflicts = analysis.table().conflicts();
    if conflicts.is_empty() {
        return;
    }
    println!("Conflicts (the grammar is not LL(1)):");
    for conflict in conflicts {
        println!("  {}", conflict);
    }
}

/// Rows are the nonterminals including `S'`, columns the terminals followed by `$`
fn generate_pretty_table(analysis: &Analysis) -> pt::Table {
    let registry = analysis.grammar().registry();
    let table = analysis.table();

    let rows: Vec<&Symbol> = registry.iter().filter(|s| s.is_nonterminal()).collect();
    let mut columns: Vec<&Symbol> = registry.terminals().collect();
    columns.push(registry.get(registry.end_marker()));

    let mut pretty_table = pt::Table::new();

    let mut title_row = row![""];
    for t in columns.iter() {
        title_row.add_cell(cell!(t));
    }
    pretty_table.add_row(title_row);

    for n in rows {
        let mut row = row![n];
        for t in columns.iter() {
            row.add_cell(cell![table
                .get(n.id, t.id)
                .map_or("error".to_owned(), |entry| entry.to_string())]);
        }
        pretty_table.add_row(row);
    }

    pretty_table
}

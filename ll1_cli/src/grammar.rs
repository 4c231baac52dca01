use std::error::Error;

use ll1::Analysis;

use crate::GrammarOpts;

/// Load the grammar file and build its analysis table
///
/// Skipped grammar lines and table conflicts are logged as warnings while loading, so they show
/// up before anything is parsed.
pub fn load_analysis(opts: &GrammarOpts) -> Result<Analysis, Box<dyn Error>> {
    let analysis = Analysis::from_file(&opts.grammar, opts.limits(), opts.policy())?;
    Ok(analysis)
}

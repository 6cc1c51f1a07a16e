//! InnerSource report output.
//!
//! Renders the classified results to a Markdown file. Reports are often
//! posted as issue bodies, so oversized output is split into numbered
//! parts with the full copy kept alongside.

mod markdown;
mod split;

pub use markdown::render_markdown;

use std::error::Error;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::ratio::ReportData;

/// GitHub caps issue bodies at this many characters.
pub const ISSUE_BODY_MAX_CHARS: usize = 65_535;

/// Inputs to the renderer beyond the classified data itself.
pub struct ReportContext<'a> {
    pub title: &'a str,
    pub repository: &'a str,
    pub original_author: Option<&'a str>,
    pub original_author_manager: Option<&'a str>,
    /// True when the owning team came from the override, not derivation.
    pub team_explicitly_specified: bool,
}

/// Render the report and write it to `output`. When the rendered file
/// would not fit in an issue body it is split into `<stem>_N.md` parts,
/// the full copy moved to `<stem>_full.md`, and the first part put back
/// under the original name.
pub fn write_report(
    data: &ReportData,
    ctx: &ReportContext,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    let rendered = markdown::render_markdown(data, ctx);
    fs::write(output, &rendered)?;

    if split::too_large_for_issue_body(&rendered, ISSUE_BODY_MAX_CHARS) {
        split::split_report_file(output, ISSUE_BODY_MAX_CHARS)?;
        info!(
            "report exceeds the issue body limit and was split; full copy kept as {}_full.md",
            output.with_extension("").display()
        );
    }
    Ok(())
}

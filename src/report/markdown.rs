use std::fmt::Write;

use chrono::Local;

use super::ReportContext;
use crate::ratio::ReportData;

/// Render the full report as Markdown.
///
/// Section order and wording are stable; downstream automation scrapes
/// these headings.
pub fn render_markdown(data: &ReportData, ctx: &ReportContext) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}\n", ctx.title);
    let _ = writeln!(out, "## Repository: {}\n", ctx.repository);
    let _ = writeln!(
        out,
        "### InnerSource Ratio: {:.2}%\n",
        data.ratio_or_zero() * 100.0
    );

    if !ctx.team_explicitly_specified
        && let Some(author) = ctx.original_author
    {
        let _ = writeln!(
            out,
            "### Original Commit Author: {author} (Manager: {})\n",
            ctx.original_author_manager.unwrap_or("none"),
        );
    }

    let _ = writeln!(out, "## Team Members that Own the Repo:");
    if data.team_members.is_empty() {
        let _ = writeln!(out, "No team members available.");
    } else {
        for member in &data.team_members {
            let _ = writeln!(out, "- {member}");
        }
    }

    let _ = writeln!(out, "\n## All Contributors:");
    if data.all_contributors.is_empty() {
        let _ = writeln!(out, "No contributors found.");
    } else {
        for contributor in &data.all_contributors {
            let _ = writeln!(out, "- {contributor}");
        }
    }

    let _ = writeln!(out, "\n## InnerSource Contributors:");
    if data.innersource_contributors.is_empty() {
        let _ = writeln!(out, "No InnerSource contributors found.");
    } else {
        for contributor in &data.innersource_contributors {
            let _ = writeln!(out, "- {contributor}");
        }
    }

    let _ = writeln!(out, "\n## InnerSource Contribution Counts:");
    if data.innersource_counts.is_empty() {
        let _ = writeln!(out, "No InnerSource contribution counts available.");
    } else {
        for (contributor, count) in &data.innersource_counts {
            let _ = writeln!(out, "- {contributor}: {count} contributions");
        }
    }

    let _ = writeln!(out, "\n## Team Member Contribution Counts:");
    if data.team_counts.is_empty() {
        let _ = writeln!(out, "No team member contribution counts available.");
    } else {
        // Idle members stay in the team list above but are noise here.
        let mut found = false;
        for (member, count) in &data.team_counts {
            if *count > 0 {
                found = true;
                let _ = writeln!(out, "- {member}: {count} contributions");
            }
        }
        if !found {
            let _ = writeln!(out, "No team member contributions found.");
        }
    }

    let _ = writeln!(
        out,
        "\n---\n*Generated {}*",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    out
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod tests;

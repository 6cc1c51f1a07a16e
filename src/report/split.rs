use std::error::Error;
use std::fs;
use std::path::Path;

/// True when `content` would not fit in an issue body of `max_chars`
/// characters. Counts characters, not bytes, matching the limit GitHub
/// applies.
pub fn too_large_for_issue_body(content: &str, max_chars: usize) -> bool {
    content.chars().count() > max_chars
}

/// Split `content` into chunks of at most `max_chars` characters each.
pub fn split_markdown(content: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(max_chars.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Split an oversized report file into `<stem>_0.md`, `<stem>_1.md`, …,
/// keep the full copy as `<stem>_full.md`, and put the first part back
/// under the original name.
pub fn split_report_file(path: &Path, max_chars: usize) -> Result<(), Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let stem = path.with_extension("");
    let stem = stem.display();

    let parts = split_markdown(&content, max_chars);
    for (i, part) in parts.iter().enumerate() {
        fs::write(format!("{stem}_{i}.md"), part)?;
    }

    fs::rename(path, format!("{stem}_full.md"))?;
    fs::rename(format!("{stem}_0.md"), path)?;
    Ok(())
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;

//! Diff previews for dry runs

use similar::{ChangeTag, TextDiff};

/// Lines longer than this are shortened in rendered diffs. Embedded data
/// URIs otherwise produce single lines hundreds of kilobytes long.
pub const MAX_LINE_WIDTH: usize = 160;

/// Line counts of a text diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub inserted: usize,
    pub deleted: usize,
}

impl DiffSummary {
    pub fn is_empty(&self) -> bool {
        self.inserted == 0 && self.deleted == 0
    }
}

/// Count inserted and deleted lines between two texts.
pub fn summarize(old: &str, new: &str) -> DiffSummary {
    let diff = TextDiff::from_lines(old, new);
    let mut summary = DiffSummary::default();
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => summary.inserted += 1,
            ChangeTag::Delete => summary.deleted += 1,
            ChangeTag::Equal => {}
        }
    }
    summary
}

/// Render a unified diff with two lines of context.
///
/// Returns an empty string when the texts are equal.
pub fn render_diff(old: &str, new: &str, old_label: &str, new_label: &str) -> String {
    if old == new {
        return String::new();
    }

    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified.context_radius(2).header(old_label, new_label);

    unified
        .to_string()
        .lines()
        .map(abbreviate)
        .collect::<Vec<_>>()
        .join("\n")
}

fn abbreviate(line: &str) -> String {
    match line.char_indices().nth(MAX_LINE_WIDTH) {
        Some((cut, _)) => {
            let hidden = line[cut..].chars().count();
            format!("{}... (+{} chars)", &line[..cut], hidden)
        }
        None => line.to_string(),
    }
}

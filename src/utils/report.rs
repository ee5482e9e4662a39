use crate::internal::models::RankedEntry;
use std::time::Duration;

/// Render the numbered ranking, one `"<i>. <title> - <comments>"` line per entry.
pub fn render_ranking(entries: &[RankedEntry], top_n: usize) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("Top {} Articles by Number of Comments:", top_n));
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{}. {} - {}", i + 1, entry.title, entry.num_comments));
    }
    lines.join("\n")
}

/// Warning line for pages that contributed nothing, or `None` if every page arrived.
pub fn format_missing_pages(missing: &[u32]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }

    let pages = missing
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "Warning: {} page(s) could not be fetched and were skipped: {}",
        missing.len(),
        pages
    ))
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Execution time: {:.3} seconds", elapsed.as_secs_f64())
}

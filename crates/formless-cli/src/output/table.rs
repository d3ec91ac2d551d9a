//! Table formatting utilities for CLI output.

use std::path::Path;

use comfy_table::{ContentArrangement, Table, presets};
use formless::ConversionReport;

/// Format the per-file conversion counts as a table.
pub fn format_summary_table(report: &ConversionReport) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Rewrites", "Changed", "Remaining"]);

    for file in &report.files {
        table.add_row(vec![
            relative_path(&report.root, &file.path),
            file.rewrites.to_string(),
            if file.changed { "yes" } else { "no" }.to_owned(),
            file.remaining.to_string(),
        ]);
    }

    table
}

/// `path` relative to the converted directory, or whole when `root` was the
/// file itself.
fn relative_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.display().to_string(),
    }
}

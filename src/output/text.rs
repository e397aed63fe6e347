//! Text output formatter for human-readable display
//!
//! Rows are rendered as fixed-width columns:
//! `name (25) declared (15) → latest (10) (YYYY-MM-DD)`.

use crate::checker::CheckOutcome;
use crate::domain::ReportRow;
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

const NAME_WIDTH: usize = 25;
const DECLARED_WIDTH: usize = 15;
const LATEST_WIDTH: usize = 10;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format a single report line.
    ///
    /// Padding is applied to the plain text first; color codes would
    /// otherwise count toward the column width.
    pub fn format_row(&self, row: &ReportRow) -> String {
        let name = format!("{:<width$}", row.name, width = NAME_WIDTH);
        let declared = format!("{:<width$}", row.declared_version, width = DECLARED_WIDTH);
        let latest = format!("{:<width$}", row.latest_version, width = LATEST_WIDTH);
        let date = format!("({})", row.date_string());

        if self.color {
            format!(
                "{} {} {} {} {}",
                name.bold(),
                declared.dimmed(),
                "→".dimmed(),
                latest.bright_white().bold(),
                date.dimmed()
            )
        } else {
            format!("{} {} → {} {}", name, declared, latest, date)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_start(&self, manifest: &Manifest, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            writer,
            "Checking {} packages in {}...",
            manifest.len(),
            manifest.path.display()
        )
    }

    fn format(&self, outcome: &CheckOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        if outcome.checked == 0 {
            return writeln!(writer, "No dependencies found in {}", MANIFEST_FILENAME);
        }

        writeln!(writer)?;
        let header = format!(
            "Recently updated packages (last {} days):",
            outcome.window_days
        );
        if self.color {
            writeln!(writer, "{}", header.bold())?;
        } else {
            writeln!(writer, "{}", header)?;
        }

        if outcome.report.is_empty() {
            return writeln!(writer, "No recent updates found");
        }

        for row in outcome.report.rows() {
            writeln!(writer, "{}", self.format_row(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dependency, Report};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn row(name: &str, declared: &str, latest: &str, date: (i32, u32, u32)) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            declared_version: declared.to_string(),
            latest_version: latest.to_string(),
            last_modified: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn outcome(checked: usize, rows: Vec<ReportRow>) -> CheckOutcome {
        CheckOutcome {
            manifest: PathBuf::from("/project/package.json"),
            window_days: 60,
            checked,
            report: Report::from_rows(rows),
            failures: Vec::new(),
        }
    }

    fn render(outcome: &CheckOutcome) -> String {
        let mut buf = Vec::new();
        TextFormatter::new(false).format(outcome, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_row_columns() {
        let line = TextFormatter::new(false).format_row(&row(
            "left-pad",
            "1.0.0",
            "1.3.0",
            (2024, 5, 1),
        ));
        assert_eq!(
            line,
            "left-pad                  1.0.0           → 1.3.0      (2024-05-01)"
        );
    }

    #[test]
    fn test_format_row_long_values_not_truncated() {
        let name = "@some-very-long-scope/and-a-long-package-name";
        let line = TextFormatter::new(false).format_row(&row(
            name,
            "^1.0.0-beta.12+build",
            "2.0.0-rc.100",
            (2024, 5, 1),
        ));
        assert_eq!(
            line,
            format!("{} ^1.0.0-beta.12+build → 2.0.0-rc.100 (2024-05-01)", name)
        );
    }

    #[test]
    fn test_colored_row_keeps_text() {
        colored::control::set_override(true);
        let line = TextFormatter::new(true).format_row(&row("react", "^18", "19.0.0", (2024, 12, 5)));
        colored::control::unset_override();
        assert!(line.contains("react"));
        assert!(line.contains("19.0.0"));
        assert!(line.contains("(2024-12-05)"));
    }

    #[test]
    fn test_no_dependencies_message() {
        assert_eq!(
            render(&outcome(0, Vec::new())),
            "No dependencies found in package.json\n"
        );
    }

    #[test]
    fn test_no_recent_updates_message() {
        assert_eq!(
            render(&outcome(3, Vec::new())),
            "\nRecently updated packages (last 60 days):\nNo recent updates found\n"
        );
    }

    #[test]
    fn test_rows_rendered_newest_first() {
        let text = render(&outcome(
            2,
            vec![
                row("older", "1.0.0", "1.1.0", (2024, 4, 1)),
                row("newer", "2.0.0", "2.1.0", (2024, 5, 1)),
            ],
        ));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("newer"));
        assert!(lines[3].starts_with("older"));
    }

    #[test]
    fn test_format_start() {
        let manifest = Manifest {
            path: PathBuf::from("/project/package.json"),
            dependencies: vec![
                Dependency::production("a", "1"),
                Dependency::development("b", "2"),
            ],
        };
        let mut buf = Vec::new();
        TextFormatter::new(false)
            .format_start(&manifest, &mut buf)
            .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Checking 2 packages in /project/package.json...\n"
        );
    }
}

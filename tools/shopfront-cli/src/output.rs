//! Output formatting for the CLI.

use console::style;
use shopfront_commerce::Money;

/// Output handler for CLI messages.
///
/// In JSON mode only [`Output::json`] and errors print; everything else is
/// for humans.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn info(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("ℹ").blue(), msg);
        }
    }

    pub fn success(&self, msg: &str) {
        if !self.json {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Warnings go to stderr so piped cart listings stay clean.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors print in both modes; JSON mode emits `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// A highlighted amount, e.g. the cart total.
    pub fn amount(&self, label: &str, amount: &Money) {
        if !self.json {
            println!("  {}: {}", style(label).dim(), style(amount.display()).bold());
        }
    }

    /// Print rows under a dimmed header, columns sized to their widest cell.
    pub fn table(&self, header: &[&str], rows: &[Vec<String>]) {
        if self.json {
            return;
        }
        let mut lines = render_table(header, rows).into_iter();
        if let Some(first) = lines.next() {
            println!("  {}", style(first).dim());
        }
        for line in lines {
            println!("  {}", line);
        }
    }
}

/// Lay out a table as padded lines, header first. Widths count characters,
/// so CJK product names line up with ASCII ones.
fn render_table(header: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    std::iter::once(render(header.to_vec()))
        .chain(rows.iter().map(|row| render(row.iter().map(String::as_str).collect())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_sizes_columns() {
        let rows = vec![
            vec!["1_none".to_string(), "Card".to_string(), "2".to_string()],
            vec!["12_3".to_string(), "T-Shirt - Red".to_string(), "10".to_string()],
        ];
        let lines = render_table(&["LINE", "ITEM", "QTY"], &rows);
        assert_eq!(
            lines,
            vec![
                "LINE    ITEM           QTY",
                "1_none  Card           2",
                "12_3    T-Shirt - Red  10",
            ]
        );
    }

    #[test]
    fn test_render_table_counts_characters() {
        let rows = vec![vec!["帆布袋".to_string(), "1".to_string()]];
        let lines = render_table(&["ITEM", "QTY"], &rows);
        assert_eq!(lines, vec!["ITEM  QTY", "帆布袋   1"]);
    }
}

//! Output formatting for the CLI.

use bazaar_commerce::accounts::{CustomerStatus, OrderStatus};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row. Widths count characters, not bytes.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad(col, *width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print a table header and its rule.
    pub fn table_header(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        self.table_row(cols, widths);
        let rule = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        println!("  {}", style("-".repeat(rule)).dim());
    }

    /// Create a spinner shown while a simulated request is in flight.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = console::measure_text_width(text);
    if len >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

/// Colored order status label.
pub fn order_badge(status: &OrderStatus) -> String {
    match status {
        OrderStatus::Delivered => style(status.label()).green().to_string(),
        OrderStatus::Shipping => style(status.label()).blue().to_string(),
        OrderStatus::Cancelled => style(status.label()).red().to_string(),
        OrderStatus::Other(label) => style(label).yellow().to_string(),
    }
}

/// Colored customer status label.
pub fn customer_badge(status: CustomerStatus) -> String {
    match status {
        CustomerStatus::Active => style(status.label()).green().to_string(),
        CustomerStatus::Passive => style(status.label()).dim().to_string(),
    }
}

/// Stock cell: "-" when untracked, red at or below the low-stock threshold.
pub fn stock_cell(stock: Option<u32>, threshold: u32) -> String {
    match stock {
        None => "-".to_string(),
        Some(n) if n <= threshold => style(n).red().to_string(),
        Some(n) => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_counts_characters() {
        assert_eq!(pad("Müşteri", 9), "Müşteri  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_stock_cell() {
        console::set_colors_enabled(false);
        assert_eq!(stock_cell(None, 5), "-");
        assert_eq!(stock_cell(Some(3), 5), "3");
        assert_eq!(stock_cell(Some(30), 5), "30");
    }
}

//! Output formatting utilities for CLI

use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print a serializable value as JSON or use custom text formatter
pub fn print_formatted<T, F>(value: &T, format: OutputFormat, text_formatter: F)
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Text => println!("{}", text_formatter(value)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a success message (suppressed in quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}

/// Print an error message (never suppressed)
pub fn print_error(message: &str) {
    eprintln!("Error: {}", message);
}

/// Format a jackpot amount with a compact unit suffix
pub fn format_jackpot(amount: f64) -> String {
    const MILLION: f64 = 1_000_000.0;
    const THOUSAND: f64 = 1_000.0;

    if amount == 0.0 {
        return "0".to_string();
    }

    if amount >= MILLION {
        format!("{:.1}M", amount / MILLION)
    } else if amount >= THOUSAND {
        format!("{:.1}K", amount / THOUSAND)
    } else {
        format!("{}", amount)
    }
}

/// Capitalize the first character, lower-casing the rest
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_jackpot() {
        assert_eq!(format_jackpot(0.0), "0");
        assert_eq!(format_jackpot(500.0), "500");
        assert_eq!(format_jackpot(23_000.0), "23.0K");
        assert_eq!(format_jackpot(40_999.83), "41.0K");
        assert_eq!(format_jackpot(1_500_000.0), "1.5M");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("slots"), "Slots");
        assert_eq!(capitalize("BLACKJACK"), "Blackjack");
        assert_eq!(capitalize(""), "");
    }
}

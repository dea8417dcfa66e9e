//! Text output.
//!
//! Result records go to stdout as `size;threads;avg_default;avg_static;diff;`.
//! Everything meant for a human (header, exit prompt) goes to stderr so the
//! record stream can be redirected untouched.

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use terminal_size::{terminal_size, Width};

use super::runner::{BenchConfig, ResultRecord};

/// Significant digits used for timings
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Format `value` like C's `%.{digits}g`.
///
/// Picks fixed or scientific notation from the decimal exponent, then strips
/// trailing zeros. Exponents carry a sign and at least two digits.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);

    // Round first so the exponent reflects carries like 9.99.. -> 10
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        strip_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{};{};",
            self.size,
            self.threads,
            format_significant(self.avg_default, SIGNIFICANT_DIGITS),
            format_significant(self.avg_static, SIGNIFICANT_DIGITS),
            format_significant(self.time_diff(), SIGNIFICANT_DIGITS),
        )
    }
}

/// Print the application header and the sweep shape to stderr
pub fn print_header(config: &BenchConfig) {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Parallel Dot Product Reduction Sweep ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    eprintln!("╔{}╗", border);
    eprintln!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    eprintln!("╚{}╝", border);
    eprintln!(
        "  {} sizes x {} thread counts, {} runs per variant, static chunk {}",
        config.vector_sizes.len(),
        config.thread_counts.len(),
        config.runs,
        config.chunk_size
    );
    eprintln!("  size;threads;avg_default_s;avg_static_s;diff_s;");
    eprintln!();
}

/// Block on one line of stdin when a person is at the terminal.
///
/// Returns immediately when stdin is piped or redirected.
pub fn wait_for_exit() -> io::Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(());
    }

    eprint!("Waiting for exit...");
    io::stderr().flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(())
}

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::ColorChoice;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn init(color: ColorChoice, verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);

    match color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {
            if !atty::is(atty::Stream::Stdout) {
                colored::control::set_override(false);
            }
        }
    }
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

pub fn verbose(msg: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{}", msg.dimmed());
    }
}

/// Truncates to `width` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Prints key/value pairs in two aligned columns, keeping values inside the
/// terminal width when it is known.
pub fn pairs(pairs: &[(String, String)]) {
    let key_width = pairs.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let term_width = term_size::dimensions_stdout().map(|(w, _)| w).unwrap_or(usize::MAX);
    let value_budget = term_width.saturating_sub(key_width + 2).max(16);

    for (k, v) in pairs {
        let padded = format!("{:width$}", k, width = key_width);
        println!("{}  {}", padded.cyan().bold(), truncate(v, value_budget));
    }
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("much too long", 8), "much to…");
}

use owo_colors::{OwoColorize, Stream};

use crate::types::BenchmarkResult;

/// Human-readable rendering: the command that ran, the wall-clock seconds,
/// and a note when the child exited abnormally.
pub fn format_text(result: &BenchmarkResult) -> String {
    let mut out = String::new();

    out.push_str(
        &result
            .command
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string(),
    );
    out.push('\n');

    let duration = format!("{:.3}", result.duration_secs);
    out.push_str(
        &duration
            .if_supports_color(Stream::Stdout, |s| s.bold())
            .to_string(),
    );
    out.push('\n');

    match result.exit_code {
        Some(0) => {}
        Some(code) => {
            let note = format!("(child exited with code {code})");
            out.push_str(
                &note
                    .if_supports_color(Stream::Stdout, |s| s.yellow())
                    .to_string(),
            );
            out.push('\n');
        }
        None => {
            let note = "(child terminated by signal)";
            out.push_str(
                &note
                    .if_supports_color(Stream::Stdout, |s| s.yellow())
                    .to_string(),
            );
            out.push('\n');
        }
    }

    out
}

pub fn format_json(result: &BenchmarkResult) -> String {
    let mut out = serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

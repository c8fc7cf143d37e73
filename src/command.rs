use crate::types::{BenchConfig, shell_escape_single_quote};

/// Assemble the command as an ordered token vector:
/// `[interpreter, -server?, -Xms{min}m, -Xmx{max}m, target]`.
///
/// Tokens are passed to the OS directly (no shell), so no quoting or
/// injection concerns apply here. The original harness produced two
/// orderings of the same tokens; both JVMs accept either, and this is the
/// single canonical form.
pub fn build_command(config: &BenchConfig) -> Vec<String> {
    let mut tokens = Vec::with_capacity(5);
    tokens.push(config.interpreter.to_string_lossy().into_owned());
    if config.server_mode {
        tokens.push("-server".to_string());
    }
    tokens.push(format!("-Xms{}m", config.min_heap_mb));
    tokens.push(format!("-Xmx{}m", config.max_heap_mb));
    tokens.push(config.target.clone());
    tokens
}

/// Render a token vector for display, quoting tokens a shell would mangle.
/// Display only; execution always goes through the token vector.
pub fn render_command(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| {
            if needs_quoting(t) {
                shell_escape_single_quote(t)
            } else {
                t.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn needs_quoting(token: &str) -> bool {
    token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '$' | '`' | '\\' | '*' | '?'))
}

use serde_json::Value;
use std::io::{self, Read};

/// JSON request piped on stdin for `command`, if any.
///
/// Interactive terminals and blank input yield `None` so the caller can fall
/// back to flags.
pub fn read_stdin(command: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(command, &buffer)
}

fn parse_piped(command: &str, buffer: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    log::debug!("{command}: {} bytes of JSON on stdin", trimmed.len());
    serde_json::from_str::<Value>(trimmed)
        .map(Some)
        .map_err(|e| format!("Invalid JSON on stdin for '{command}': {e}").into())
}

use anyhow::Context;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Text to classify: `--text` wins, then `--file`, otherwise stdin.
pub fn read_text(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read text from {:?}", path));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub(crate) fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).context(format!("Unable to read file {}", path.display()))
}

pub(crate) fn read_stdin_to_string() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Unable to read from stdin")?;
    Ok(buf)
}

//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::io::Read;
use std::path::Path;

use meterscan_core::Token;

/// Read a token sequence from a JSON string-array file, or stdin for "-".
pub fn read_tokens(path: &Path) -> anyhow::Result<Vec<Token>> {
    let content = if path.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?
    };

    let tokens: Vec<Token> = serde_json::from_str(&content)?;
    Ok(tokens)
}

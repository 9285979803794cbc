use anyhow::{Context, Result};

use crate::encoder::encode;
use crate::image::{ImageWriter, OutputFormat};
use crate::parser::parse_line;

/// Assembles a whole source text into the rendered memory image.
///
/// Lines are trimmed and processed strictly in order. A line whose first
/// non-blank character is `;` is skipped without counting; every other
/// line, blank ones included, must parse. The first malformed line aborts
/// the run with its 1-based line number attached, and nothing useful is
/// returned for the lines already encoded.
pub fn assemble(source: &str, format: OutputFormat) -> Result<Vec<u8>> {
    let mut image = ImageWriter::new(Vec::new(), format)?;
    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with(';') {
            continue;
        }
        let word = parse_line(line)
            .and_then(encode)
            .with_context(|| format!("line {}: {:?}", idx + 1, raw))?;
        tracing::debug!("line {}: {:#04x}", idx + 1, word);
        image.push(word)?;
    }
    tracing::debug!("assembled {} code words", image.count());
    Ok(image.finish()?)
}

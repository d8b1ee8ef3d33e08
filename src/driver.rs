use crate::constants::SENTINEL_LINE;
use crate::output::format_tokens;
use crate::tokenizer::Tokenizer;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// What a finished session processed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub tokens: usize,
    pub stopped_by_sentinel: bool,
}

/// Line loop: read, strip terminator, stop on the sentinel, split, print.
///
/// Lines longer than `max_line_len` characters are handled as consecutive
/// segments of that length; `0` disables segmenting.
pub fn run<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    tokenizer: &Tokenizer,
    max_line_len: usize,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut raw = Vec::new();
    let mut line_no = 0usize;

    loop {
        raw.clear();
        let n = reader
            .read_until(b'\n', &mut raw)
            .context("failed to read input line")?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let line = decode_line(strip_terminator(&raw), line_no);
        for segment in segments(&line, max_line_len) {
            if segment == SENTINEL_LINE {
                debug!("sentinel on line {line_no}");
                summary.stopped_by_sentinel = true;
                writer.flush().context("failed to write output")?;
                return Ok(summary);
            }
            let tokens = tokenizer
                .split(segment)
                .with_context(|| format!("failed to split line {line_no}"))?;
            debug!("line {line_no}: {} tokens", tokens.len());
            writeln!(writer, "{}", format_tokens(&tokens)).context("failed to write output")?;
            summary.lines += 1;
            summary.tokens += tokens.len();
        }
    }

    writer.flush().context("failed to write output")?;
    Ok(summary)
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

fn decode_line(
    bytes: &[u8],
    line_no: usize,
) -> Cow<'_, str> {
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        warn!("line {line_no} is not valid UTF-8; invalid bytes replaced");
    }
    line
}

/// Cuts `line` into pieces of at most `max_chars` characters. An empty line
/// still yields one (empty) piece.
fn segments(
    line: &str,
    max_chars: usize,
) -> Vec<&str> {
    if max_chars == 0 || line.chars().count() <= max_chars {
        return vec![line];
    }
    let mut out = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        out.push(head);
        rest = tail;
    }
    out
}

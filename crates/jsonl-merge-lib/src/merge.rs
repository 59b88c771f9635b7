//! Line-level concatenation of JSONL files.
//!
//! Every line is trimmed and written back with a single `\n`. Lines that are
//! empty after trimming are dropped. `\r\n`, `\n` and lone `\r` all count as
//! line terminators. Records are never parsed.
//!
//! Whitespace for trimming is Unicode White_Space plus the information
//! separators U+001C..=U+001F.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{MergeError, Result};

/// Outcome of a single merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    /// Number of input files consumed.
    pub files: usize,
    /// Number of lines written to the output.
    pub lines: usize,
}

/// Concatenate the non-blank lines of `files` into `output`.
///
/// Missing parent directories of `output` are created. An existing output is
/// truncated. Files are read in the order given.
///
/// # Errors
///
/// Returns `ReadInput` naming the first input that cannot be opened or is not
/// valid UTF-8, or `CreateDir`/`CreateOutput`/`WriteOutput` naming `output`.
/// Lines written before a failure are left in place.
pub fn merge_files<P: AsRef<Path>>(files: &[P], output: &Path) -> Result<MergeStats> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| MergeError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = fs::File::create(output).map_err(|source| MergeError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let mut stats = MergeStats::default();
    for input in files {
        let input = input.as_ref();
        let reader = fs::File::open(input)
            .map(BufReader::new)
            .map_err(|source| MergeError::ReadInput {
                path: input.to_path_buf(),
                source,
            })?;

        let written = merge_lines(reader, &mut writer, input, output)?;
        tracing::debug!("Merged {} line(s) from {}", written, input.display());

        stats.files += 1;
        stats.lines += written;
    }

    writer.flush().map_err(|source| MergeError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(stats)
}

fn is_line_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Copy the non-blank, trimmed lines of `reader` into `writer`.
///
/// `source` and `output` only label errors. Returns the number of lines
/// written.
///
/// # Errors
///
/// Returns `ReadInput` if `reader` fails or yields invalid UTF-8, and
/// `WriteOutput` if `writer` fails.
pub fn merge_lines<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    source: &Path,
    output: &Path,
) -> Result<usize> {
    let mut written = 0;

    for line in reader.lines() {
        let line = line.map_err(|e| MergeError::ReadInput {
            path: source.to_path_buf(),
            source: e,
        })?;

        for piece in line.split('\r') {
            let trimmed = piece.trim_matches(is_line_whitespace);
            if trimmed.is_empty() {
                continue;
            }

            writer
                .write_all(trimmed.as_bytes())
                .and_then(|()| writer.write_all(b"\n"))
                .map_err(|e| MergeError::WriteOutput {
                    path: output.to_path_buf(),
                    source: e,
                })?;
            written += 1;
        }
    }

    Ok(written)
}

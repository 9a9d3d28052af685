//! Line-oriented replacement of the TLS setting in a server startup file

use std::path::Path;

use crate::error::{Result, fs};

/// Result of patching a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The first matching line was rewritten. `line_number` is 1-based.
    Replaced { line_number: usize, previous: String },
    /// The first matching line already equals the replacement
    AlreadyCurrent { line_number: usize },
    /// No line contains the marker; nothing was written
    MarkerNotFound,
}

/// Replace the first line containing `marker` with `replacement`.
///
/// Lines keep their terminators, so every other line is preserved byte for byte.
/// `replacement` should carry its own `\n`; it becomes `\r\n` on a CRLF line.
pub fn replace_first_matching(
    lines: &mut [String],
    marker: &str,
    replacement: &str,
) -> PatchOutcome {
    let Some(index) = lines.iter().position(|line| line.contains(marker)) else {
        return PatchOutcome::MarkerNotFound;
    };

    let replacement = match_line_ending(&lines[index], replacement);
    if lines[index] == replacement {
        return PatchOutcome::AlreadyCurrent {
            line_number: index + 1,
        };
    }

    let previous = std::mem::replace(&mut lines[index], replacement);
    PatchOutcome::Replaced {
        line_number: index + 1,
        previous,
    }
}

/// Give `replacement` the `\r\n` terminator of `original` when it has one
fn match_line_ending(original: &str, replacement: &str) -> String {
    if original.ends_with("\r\n") && !replacement.ends_with("\r\n") {
        if let Some(body) = replacement.strip_suffix('\n') {
            return format!("{body}\r\n");
        }
    }
    replacement.to_string()
}

/// Split text into lines, each keeping its trailing `\n`
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Patch `path` in place. The file is only rewritten when a line actually changes.
pub fn patch_file(path: &Path, marker: &str, replacement: &str) -> Result<PatchOutcome> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            fs::config_not_found(path)
        } else {
            fs::read_failed(path, &e)
        }
    })?;

    let mut lines = split_lines(&content);
    let outcome = replace_first_matching(&mut lines, marker, replacement);

    if let PatchOutcome::Replaced { line_number, .. } = &outcome {
        std::fs::write(path, lines.concat()).map_err(|e| fs::write_failed(path, &e))?;
        tracing::debug!(path = %path.display(), line = line_number, "patched line");
    }

    Ok(outcome)
}

// qdef - Questionnaire Definition Format
//
// Copyright (c) 2025 qdef contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Input preprocessing for definition parsing.

use crate::error::{QdefError, QdefResult};
use crate::limits::Limits;

/// Validated input split into numbered lines.
///
/// Stores the decoded text once and hands out borrowed line slices.
#[derive(Debug)]
pub struct PreprocessedInput<'a> {
    text: &'a str,
    /// Line boundaries: (line_number, start_offset, end_offset)
    line_offsets: Vec<(usize, usize, usize)>,
}

impl<'a> PreprocessedInput<'a> {
    /// Get lines as (line_num, &str) pairs. Blank lines are kept so that
    /// numbering matches the source.
    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        let text = self.text;
        self.line_offsets
            .iter()
            .map(move |&(num, start, end)| (num, &text[start..end]))
    }

    /// Number of physical lines.
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }
}

/// Preprocess raw input bytes into lines.
///
/// This handles:
/// - size and line length limits
/// - UTF-8 validation
/// - BOM skipping
/// - CRLF line endings (the CR stays on the line and is trimmed later)
/// - control character rejection (TAB, CR and LF are allowed)
pub fn preprocess<'a>(input: &'a [u8], limits: &Limits) -> QdefResult<PreprocessedInput<'a>> {
    if input.len() > limits.max_file_size {
        return Err(QdefError::security(
            format!("file too large: exceeds limit of {} bytes", limits.max_file_size),
            0,
        ));
    }

    let text = std::str::from_utf8(input).map_err(|e| {
        let line = input[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count() + 1;
        QdefError::syntax(format!("invalid UTF-8 encoding: {}", e), line)
    })?;

    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let bytes = text.as_bytes();
    let estimated_lines = bytes.iter().filter(|&&b| b == b'\n').count() + 1;
    let mut line_offsets = Vec::with_capacity(estimated_lines);

    let mut start = 0;
    let mut line_num = 1;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'\n' {
            check_line_length(i - start, limits, line_num)?;
            line_offsets.push((line_num, start, i));
            start = i + 1;
            line_num += 1;
        } else if b < 0x20 && b != b'\t' && b != b'\r' {
            return Err(QdefError::syntax(
                format!("control character U+{:04X} not allowed", b),
                line_num,
            ));
        }
    }

    // Last line (no trailing newline)
    check_line_length(bytes.len() - start, limits, line_num)?;
    line_offsets.push((line_num, start, bytes.len()));

    Ok(PreprocessedInput { text, line_offsets })
}

fn check_line_length(len: usize, limits: &Limits, line_num: usize) -> QdefResult<()> {
    if len > limits.max_line_length {
        return Err(QdefError::security(
            format!(
                "line too long: exceeds limit of {} bytes",
                limits.max_line_length
            ),
            line_num,
        ));
    }
    Ok(())
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_limits() -> Limits {
        Limits::default()
    }

    #[test]
    fn test_preprocess_simple() {
        let input = b"Title = Survey\nPages = 2\n";
        let result = preprocess(input, &default_limits()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (1, "Title = Survey"));
        assert_eq!(lines[1], (2, "Pages = 2"));
        assert_eq!(lines[2], (3, ""));
    }

    #[test]
    fn test_preprocess_empty_input() {
        let result = preprocess(b"", &default_limits()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines, vec![(1, "")]);
    }

    #[test]
    fn test_preprocess_line_numbers_include_blank_lines() {
        let input = b"a\n\n\nb";
        let result = preprocess(input, &default_limits()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[3], (4, "b"));
        assert_eq!(result.line_count(), 4);
    }

    #[test]
    fn test_preprocess_crlf_keeps_cr_for_trimming() {
        let input = b"Title = A\r\nPages = 1\r\n";
        let result = preprocess(input, &default_limits()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0].1, "Title = A\r");
        assert_eq!(lines[0].1.trim(), "Title = A");
    }

    #[test]
    fn test_preprocess_bom_skip() {
        let input = b"\xEF\xBB\xBFTitle = A\n";
        let result = preprocess(input, &default_limits()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0].1, "Title = A");
    }

    #[test]
    fn test_preprocess_valid_utf8() {
        let input = "Title = Umfrage über Zufriedenheit\n".as_bytes();
        let result = preprocess(input, &default_limits()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0].1, "Title = Umfrage über Zufriedenheit");
    }

    #[test]
    fn test_preprocess_invalid_utf8_error() {
        let input = b"Title = ok\nTitle = \xFF\xFE\n";
        let err = preprocess(input, &default_limits()).unwrap_err();
        assert_eq!(err.kind, crate::QdefErrorKind::Syntax);
        assert_eq!(err.line, 2);
        assert!(err.message.contains("UTF-8"));
    }

    #[test]
    fn test_preprocess_control_character_error() {
        let input = b"Title = a\nTitle = \x07\n";
        let err = preprocess(input, &default_limits()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("U+0007"));
    }

    #[test]
    fn test_preprocess_tab_allowed() {
        let input = b"Title =\tA\n";
        assert!(preprocess(input, &default_limits()).is_ok());
    }

    #[test]
    fn test_preprocess_file_too_large() {
        let limits = Limits {
            max_file_size: 4,
            ..Limits::default()
        };
        let err = preprocess(b"Title = A", &limits).unwrap_err();
        assert_eq!(err.kind, crate::QdefErrorKind::Security);
    }

    #[test]
    fn test_preprocess_line_too_long() {
        let limits = Limits {
            max_line_length: 5,
            ..Limits::default()
        };
        let err = preprocess(b"abc\nabcdefgh\n", &limits).unwrap_err();
        assert_eq!(err.kind, crate::QdefErrorKind::Security);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_is_blank_line() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   \t"));
        assert!(is_blank_line("\r"));
        assert!(!is_blank_line(" x "));
    }
}

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

//! Hierarchical question numbering.
//!
//! Question texts may start with an explicit dotted index (`1.2.Text`), with
//! the auto marker (`XAUTO. Text`), or with nothing. [`AutoNumbering`] keeps
//! the cursor that turns this mix into a consistent outline.

use crate::error::{QdefError, QdefResult};
use crate::model::QIndex;
use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix the LaTeX class writes for questions numbered by the parser.
pub const AUTO_MARKER: &str = "XAUTO. ";

static INDEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<index>(?:[0-9]+\.)+)(?P<string>.*)$").expect("index pattern is valid")
});

/// Split a question value into its explicit index (if any) and display text.
///
/// `"1.3.Some text"` yields `(Some([1, 3]), "Some text")`, `"XAUTO. Foo"`
/// yields `(None, "Foo")`, anything else is returned unchanged.
pub fn get_index_and_string(raw: &str) -> QdefResult<(Option<QIndex>, &str)> {
    let Some(caps) = INDEX_RE.captures(raw) else {
        return Ok((None, raw.strip_prefix(AUTO_MARKER).unwrap_or(raw)));
    };

    let index = &caps["index"];
    let string = caps.name("string").map_or("", |m| m.as_str());

    let components = index
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| QdefError::value(format!("index component '{}' out of range", part), 0))
        })
        .collect::<QdefResult<Vec<u32>>>()?;

    Ok((Some(QIndex::new(components)), string))
}

/// The auto-numbering cursor.
///
/// Starts at `[0]`. An explicit index resets the cursor one level below it;
/// an implicit one increments the last component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoNumbering {
    cursor: Vec<u32>,
}

impl Default for AutoNumbering {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoNumbering {
    /// Create a cursor at `[0]`.
    pub fn new() -> Self {
        Self { cursor: vec![0] }
    }

    /// Current cursor value. Never empty.
    pub fn cursor(&self) -> &[u32] {
        &self.cursor
    }

    /// Resolve the index of the next qobject.
    pub fn next_index(&mut self, explicit: Option<QIndex>) -> QIndex {
        match explicit {
            Some(index) => {
                self.cursor.clear();
                self.cursor.extend_from_slice(index.components());
                self.cursor.push(0);
                index
            }
            None => {
                // The cursor is never empty: it starts as [0] and explicit
                // indices always append a trailing zero.
                if let Some(last) = self.cursor.last_mut() {
                    *last = last.saturating_add(1);
                }
                QIndex::new(self.cursor.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(components: &[u32]) -> QIndex {
        QIndex::new(components.to_vec())
    }

    #[test]
    fn test_explicit_index() {
        let (index, text) = get_index_and_string("1.3.Some text").unwrap();
        assert_eq!(index, Some(idx(&[1, 3])));
        assert_eq!(text, "Some text");
    }

    #[test]
    fn test_explicit_index_keeps_space_in_text() {
        let (index, text) = get_index_and_string("2. Section").unwrap();
        assert_eq!(index, Some(idx(&[2])));
        assert_eq!(text, " Section");
    }

    #[test]
    fn test_index_is_greedy() {
        // The run of dot-terminated numbers is taken as far as it goes.
        let (index, text) = get_index_and_string("1.2.3 apples").unwrap();
        assert_eq!(index, Some(idx(&[1, 2])));
        assert_eq!(text, "3 apples");
    }

    #[test]
    fn test_index_only() {
        let (index, text) = get_index_and_string("4.").unwrap();
        assert_eq!(index, Some(idx(&[4])));
        assert_eq!(text, "");
    }

    #[test]
    fn test_auto_marker() {
        let (index, text) = get_index_and_string("XAUTO. Foo").unwrap();
        assert_eq!(index, None);
        assert_eq!(text, "Foo");
    }

    #[test]
    fn test_auto_marker_needs_space() {
        let (index, text) = get_index_and_string("XAUTO.Foo").unwrap();
        assert_eq!(index, None);
        assert_eq!(text, "XAUTO.Foo");
    }

    #[test]
    fn test_plain_text() {
        let (index, text) = get_index_and_string("How old are you?").unwrap();
        assert_eq!(index, None);
        assert_eq!(text, "How old are you?");
    }

    #[test]
    fn test_number_without_dot_is_text() {
        let (index, text) = get_index_and_string("12 monkeys").unwrap();
        assert_eq!(index, None);
        assert_eq!(text, "12 monkeys");
    }

    #[test]
    fn test_component_overflow() {
        let err = get_index_and_string("99999999999.Text").unwrap_err();
        assert_eq!(err.kind, crate::QdefErrorKind::Value);
    }

    #[test]
    fn test_cursor_starts_at_zero() {
        assert_eq!(AutoNumbering::new().cursor(), &[0]);
    }

    #[test]
    fn test_auto_numbering_sequence() {
        let mut numbering = AutoNumbering::new();
        assert_eq!(numbering.next_index(None), idx(&[1]));
        assert_eq!(numbering.next_index(None), idx(&[2]));
        assert_eq!(numbering.next_index(None), idx(&[3]));
    }

    #[test]
    fn test_explicit_then_auto_nests() {
        let mut numbering = AutoNumbering::new();
        assert_eq!(numbering.next_index(Some(idx(&[1, 3]))), idx(&[1, 3]));
        assert_eq!(numbering.cursor(), &[1, 3, 0]);
        assert_eq!(numbering.next_index(None), idx(&[1, 3, 1]));
        assert_eq!(numbering.next_index(None), idx(&[1, 3, 2]));
    }

    #[test]
    fn test_explicit_overrides_cursor() {
        let mut numbering = AutoNumbering::new();
        numbering.next_index(Some(idx(&[1])));
        numbering.next_index(None);
        numbering.next_index(None);
        assert_eq!(numbering.next_index(Some(idx(&[2]))), idx(&[2]));
        assert_eq!(numbering.next_index(None), idx(&[2, 1]));
    }
}

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

//! Record classification and payload parsing.
//!
//! Each non-blank line is one `Key = value` record. [`RecordKey::classify`]
//! maps the key to a record type; the `parse_*` helpers turn payloads into
//! typed values. Errors raised here carry line 0 and get their line attached
//! by the driver.

use crate::error::{QdefError, QdefResult};
use crate::model::QObjectKind;
use crate::units::parse_points;

pub const QOBJECT_PREFIX: &str = "QObject";
pub const ANSWER_PREFIX: &str = "Answer";
pub const RANGE_PREFIX: &str = "Range";
pub const BOX_KEY: &str = "Box";
pub const TEXTBOX: &str = "Textbox";
pub const CHECKBOX: &str = "Checkbox";

/// Separator the LaTeX class places between a record prefix and its suffix.
const SUFFIX_SEPARATOR: char = '-';

/// The type of a record, derived from its key alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey<'a> {
    Title,
    PrintQuestionnaireId,
    PrintSurveyId,
    Pages,
    CheckMode,
    GlobalId,
    GlobalIdLabel,
    Duplex,
    Style,
    PageSize,
    /// `QObject<Kind>`, carrying the kind suffix.
    QObject(&'a str),
    /// `Answer<Kind>`, carrying the (informational) kind suffix.
    Answer(&'a str),
    /// `Range<Bound>`, carrying the bound suffix.
    Range(&'a str),
    Box,
    /// Anything else; stored in the survey's info map.
    Info(&'a str),
}

impl<'a> RecordKey<'a> {
    /// Classify a trimmed record key.
    pub fn classify(key: &'a str) -> Self {
        match key {
            "Title" => Self::Title,
            "PrintQuestionnaireId" => Self::PrintQuestionnaireId,
            "PrintSurveyId" => Self::PrintSurveyId,
            "Pages" => Self::Pages,
            "CheckMode" => Self::CheckMode,
            "GlobalID" => Self::GlobalId,
            "GlobalIDLabel" => Self::GlobalIdLabel,
            "Duplex" => Self::Duplex,
            "Style" => Self::Style,
            "PageSize" => Self::PageSize,
            BOX_KEY => Self::Box,
            _ => {
                if let Some(suffix) = key.strip_prefix(QOBJECT_PREFIX) {
                    Self::QObject(strip_separator(suffix))
                } else if let Some(suffix) = key.strip_prefix(ANSWER_PREFIX) {
                    Self::Answer(strip_separator(suffix))
                } else if let Some(suffix) = key.strip_prefix(RANGE_PREFIX) {
                    Self::Range(strip_separator(suffix))
                } else {
                    Self::Info(key)
                }
            }
        }
    }
}

fn strip_separator(suffix: &str) -> &str {
    suffix.strip_prefix(SUFFIX_SEPARATOR).unwrap_or(suffix)
}

/// Split a line into trimmed key and value at the first `=`.
///
/// Returns `None` when there is no `=` or the key is empty.
pub fn split_record(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
}

/// Resolve a `QObject` kind suffix.
pub fn parse_qobject_kind(suffix: &str) -> QdefResult<QObjectKind> {
    QObjectKind::from_name(suffix)
        .ok_or_else(|| QdefError::unknown_kind(format!("unknown question type '{}'", suffix), 0))
}

/// Which label of a range position a record sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Lower,
    Upper,
}

impl RangeBound {
    /// Resolve a `Range` suffix, case-insensitively.
    pub fn from_suffix(suffix: &str) -> QdefResult<Self> {
        if suffix.eq_ignore_ascii_case("lower") {
            Ok(Self::Lower)
        } else if suffix.eq_ignore_ascii_case("upper") {
            Ok(Self::Upper)
        } else {
            Err(QdefError::range_field(
                format!(
                    "invalid Range field '{}': has to be either Lower or Upper",
                    suffix
                ),
                0,
            ))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lower => "Lower",
            Self::Upper => "Upper",
        }
    }
}

/// Parse `"<integer position> <label text>"`.
pub fn parse_range_value(value: &str) -> QdefResult<(i32, &str)> {
    let (position, label) = value
        .split_once(char::is_whitespace)
        .ok_or_else(|| {
            QdefError::value(
                format!("Range value '{}' must be '<position> <label>'", value),
                0,
            )
        })?;
    let position = position
        .parse::<i32>()
        .map_err(|_| QdefError::value(format!("invalid range position '{}'", position), 0))?;
    Ok((position, label.trim_start()))
}

/// A `Box` record with geometry still in points, bottom-origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxRecord {
    pub textbox: bool,
    pub page: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub form: Option<String>,
}

/// Parse `kind, page, x, y, width, height[, form]`.
pub fn parse_box(value: &str) -> QdefResult<BoxRecord> {
    let fields: Vec<&str> = value.split(',').map(str::trim).collect();
    let kind = fields[0];

    let textbox = match kind {
        TEXTBOX => {
            if fields.len() != 6 {
                return Err(field_count_error(kind, "6", fields.len()));
            }
            true
        }
        CHECKBOX => {
            if fields.len() != 6 && fields.len() != 7 {
                return Err(field_count_error(kind, "6 or 7", fields.len()));
            }
            false
        }
        other => {
            return Err(QdefError::box_record(
                format!("invalid Box record: unknown box kind '{}'", other),
                0,
            ))
        }
    };

    let page = fields[1]
        .parse::<u32>()
        .map_err(|_| QdefError::value(format!("invalid page number '{}'", fields[1]), 0))?;

    Ok(BoxRecord {
        textbox,
        page,
        x: parse_points(fields[2])?,
        y: parse_points(fields[3])?,
        width: parse_points(fields[4])?,
        height: parse_points(fields[5])?,
        form: fields.get(6).map(|form| form.to_string()),
    })
}

fn field_count_error(kind: &str, expected: &str, got: usize) -> QdefError {
    QdefError::box_record(
        format!(
            "invalid Box record: {} takes {} fields, got {}",
            kind, expected, got
        ),
        0,
    )
}

/// Parse `"<W>pt, <H>pt"` into points.
pub fn parse_page_size(value: &str) -> QdefResult<(f64, f64)> {
    match value.split(',').map(str::trim).collect::<Vec<_>>().as_slice() {
        [width, height] => Ok((parse_points(width)?, parse_points(height)?)),
        _ => Err(QdefError::value(
            format!("PageSize '{}' must be '<width>pt, <height>pt'", value),
            0,
        )),
    }
}

/// Parse an integer flag: any non-zero integer is true.
pub fn parse_int_flag(value: &str) -> QdefResult<bool> {
    value
        .parse::<i64>()
        .map(|n| n != 0)
        .map_err(|_| QdefError::value(format!("expected 0 or 1, got '{}'", value), 0))
}

/// Parse the page count.
pub fn parse_page_count(value: &str) -> QdefResult<u32> {
    value
        .parse::<u32>()
        .map_err(|_| QdefError::value(format!("invalid page count '{}'", value), 0))
}

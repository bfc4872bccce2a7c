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

//! Line driver for questionnaire definition files.
//!
//! # Security Limits
//!
//! The parser enforces resource limits before and during dispatch:
//!
//! - `max_file_size`: Maximum input size (default: 64MB)
//! - `max_line_length`: Maximum line length (default: 1MB)
//! - `max_qobjects`: Maximum qobjects per questionnaire (default: 100k)
//! - `max_boxes_per_qobject`: Maximum boxes on one qobject (default: 10k)
//! - `max_index_depth`: Maximum components of an explicit index (default: 32)
//!
//! Every failure aborts the parse. No partial survey is returned.

use crate::builder::SurveyBuilder;
use crate::error::{QdefError, QdefResult};
use crate::limits::Limits;
use crate::model::Survey;
use crate::normalize::{Identity, Normalize};
use crate::preprocess::{is_blank_line, preprocess};
use crate::record::split_record;
use tracing::info;

/// Parsing options for definition files.
///
/// ```text
/// use qdef_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .max_file_size(1024 * 1024)
///     .max_qobjects(500)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
        }
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the maximum input size in bytes.
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.limits.max_file_size = size;
        self
    }

    /// Set the maximum line length in bytes.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Set the maximum number of qobjects.
    pub fn max_qobjects(mut self, count: usize) -> Self {
        self.limits.max_qobjects = count;
        self
    }

    /// Set the maximum number of boxes attached to a single qobject.
    pub fn max_boxes_per_qobject(mut self, count: usize) -> Self {
        self.limits.max_boxes_per_qobject = count;
        self
    }

    /// Set the maximum depth of an explicit index.
    pub fn max_index_depth(mut self, depth: usize) -> Self {
        self.limits.max_index_depth = depth;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a definition file from bytes.
pub fn parse(input: &[u8]) -> QdefResult<Survey> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a definition file with custom options.
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> QdefResult<Survey> {
    parse_with_normalizer(input, options, &Identity)
}

/// Parse a definition file, passing every value through `normalizer`
/// before it is interpreted.
pub fn parse_with_normalizer(
    input: &[u8],
    options: &ParseOptions,
    normalizer: &dyn Normalize,
) -> QdefResult<Survey> {
    let preprocessed = preprocess(input, &options.limits)?;
    let mut builder = SurveyBuilder::new(&options.limits);

    for (line_num, raw) in preprocessed.lines() {
        if is_blank_line(raw) {
            continue;
        }
        let line = raw.trim();

        let (key, value) = split_record(line).ok_or_else(|| {
            QdefError::syntax(format!("invalid line: {}", line), line_num).with_context(line)
        })?;
        let value = normalizer.normalize(value);

        builder
            .apply(key, &value)
            .map_err(|e| e.at_line(line_num).with_context(line))?;
    }

    let survey = builder.finish();
    info!(
        title = %survey.title,
        qobjects = survey.questionnaire.qobjects.len(),
        boxes = survey.questionnaire.boxes().count(),
        pages = survey.questionnaire.page_count,
        lines = preprocessed.line_count(),
        "parsed survey"
    );
    Ok(survey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QIndex, QObjectKind};
    use crate::QdefErrorKind;

    #[test]
    fn test_builder_new_creates_default_options() {
        let opts = ParseOptionsBuilder::new().build();
        assert_eq!(opts.limits, Limits::default());
    }

    #[test]
    fn test_builder_default_trait() {
        let opts = ParseOptionsBuilder::default().build();
        assert_eq!(opts.limits, ParseOptions::default().limits);
    }

    #[test]
    fn test_builder_setters() {
        let opts = ParseOptions::builder()
            .max_file_size(10)
            .max_line_length(20)
            .max_qobjects(30)
            .max_boxes_per_qobject(40)
            .max_index_depth(5)
            .build();
        assert_eq!(opts.limits.max_file_size, 10);
        assert_eq!(opts.limits.max_line_length, 20);
        assert_eq!(opts.limits.max_qobjects, 30);
        assert_eq!(opts.limits.max_boxes_per_qobject, 40);
        assert_eq!(opts.limits.max_index_depth, 5);
    }

    #[test]
    fn test_builder_limits_replaces_all() {
        let opts = ParseOptions::builder()
            .max_qobjects(3)
            .limits(Limits::unlimited())
            .build();
        assert_eq!(opts.limits, Limits::unlimited());
    }

    #[test]
    fn test_parse_empty() {
        let survey = parse(b"").unwrap();
        assert!(survey.title.is_empty());
        assert!(survey.questionnaire.qobjects.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let survey = parse(b"\n   \n  Title =  Hello world  \r\n\n").unwrap();
        assert_eq!(survey.title, "Hello world");
    }

    #[test]
    fn test_value_keeps_later_equals_signs() {
        let survey = parse(b"Formula = a = b").unwrap();
        assert_eq!(survey.info["Formula"], "a = b");
    }

    #[test]
    fn test_empty_key_is_invalid_line() {
        let err = parse(b"Title = A\n= orphan\n").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Syntax);
        assert_eq!(err.line, 2);
        assert_eq!(err.context.as_deref(), Some("= orphan"));
    }

    #[test]
    fn test_invalid_line_reports_line_and_context() {
        let err = parse(b"Title = ok\n\nno separator here\n").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Syntax);
        assert_eq!(err.line, 3);
        assert!(err.message.contains("invalid line"));
        assert_eq!(err.context.as_deref(), Some("no separator here"));
    }

    #[test]
    fn test_dispatch_error_gets_line_number() {
        let err = parse(b"Title = x\nAnswer-Choice = Yes\n").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Context);
        assert_eq!(err.line, 2);
        assert_eq!(err.context.as_deref(), Some("Answer-Choice = Yes"));
    }

    #[test]
    fn test_normalizer_applied_to_values() {
        let input = b"Title = caf\\'e\nQObject-Text = 1.caf\\'e?\n";
        let normalize = |value: &str| value.replace("\\'e", "\u{e9}");
        let survey =
            parse_with_normalizer(input, &ParseOptions::default(), &normalize).unwrap();
        assert_eq!(survey.title, "caf\u{e9}");
        let qobject = &survey.questionnaire.qobjects[0];
        assert_eq!(qobject.question, "caf\u{e9}?");
        assert_eq!(qobject.index, Some(QIndex::new(vec![1])));
    }

    #[test]
    fn test_parse_with_options_applies_limits() {
        let opts = ParseOptions::builder().max_qobjects(1).build();
        let err = parse_with_options(b"QObject-Text = a\nQObject-Text = b\n", &opts).unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Security);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_independent_parses_do_not_share_state() {
        let input = b"QObject-Text = a\nQObject-Text = b\n";
        let first = parse(input).unwrap();
        let second = parse(input).unwrap();
        assert_eq!(
            first.questionnaire.qobjects[1].index,
            second.questionnaire.qobjects[1].index
        );
        assert_eq!(
            second.questionnaire.qobjects[1].index,
            Some(QIndex::new(vec![2]))
        );
    }

    #[test]
    fn test_full_document() {
        let input = b"Title = Course evaluation
Pages = 2
CheckMode = check
Style = classic
Duplex = True
PageSize = 597.50787pt, 845.04684pt
Lecturer = Dr. Smith
QObject-Head = 1.General
QObject-Choice = How did you hear about us?
Answer-Choice = Friends
Answer-Choice = Web
Box = Checkbox, 1, 100pt, 700pt, 10pt, 10pt
Box = Checkbox, 1, 150pt, 700pt, 10pt, 10pt, other
QObject-Range = Overall rating
Range-Lower = 1 bad
Range-Upper = 5 good
QObject-Text = 2.Comments
Box = Textbox, 2, 100pt, 500pt, 300pt, 100pt
";
        let survey = parse(input).unwrap();
        assert_eq!(survey.title, "Course evaluation");
        assert!(survey.defs.duplex);
        assert_eq!(survey.defs.paper_width, Some(210.0));
        assert_eq!(survey.info["Lecturer"], "Dr. Smith");

        let qobjects = &survey.questionnaire.qobjects;
        assert_eq!(qobjects.len(), 4);
        assert_eq!(qobjects[0].kind(), QObjectKind::Head);
        assert_eq!(qobjects[1].index, Some(QIndex::new(vec![1, 1])));
        assert_eq!(qobjects[1].answer_texts().collect::<Vec<_>>(), vec!["Friends", "Web"]);
        assert_eq!(qobjects[1].answers[0].kind, "Choice");
        assert_eq!(qobjects[1].boxes[1].form(), Some("other"));
        assert_eq!(qobjects[2].index, Some(QIndex::new(vec![1, 2])));
        let range = qobjects[2].range().unwrap();
        assert_eq!(range[&1].lower.as_deref(), Some("bad"));
        assert_eq!(range[&5].upper.as_deref(), Some("good"));
        assert_eq!(range[&5].lower, None);
        assert_eq!(qobjects[3].index, Some(QIndex::new(vec![2])));
        assert_eq!(qobjects[3].boxes[0].page, 2);
    }
}

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

//! Canonical definition file writer.
//!
//! Serializes a [`Survey`] back into `Key = value` records. Geometry is
//! converted from millimeters (top origin) to points (bottom origin).

use std::fmt::{self, Write};

use crate::config::CanonicalConfig;
use qdef_core::numbering::{get_index_and_string, AUTO_MARKER};
use qdef_core::record::{RangeBound, RecordKey, ANSWER_PREFIX, BOX_KEY, QOBJECT_PREFIX, RANGE_PREFIX};
use qdef_core::traverse::{traverse, SurveyVisitor, VisitorContext};
use qdef_core::units::{flip_y, mm_to_points};
use qdef_core::{AnswerBox, BoxKind, QObject, QdefError, QdefResult, Survey};

/// Initial buffer capacity for output string.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 4096;

/// Writer for canonical definition files.
pub struct CanonicalWriter {
    config: CanonicalConfig,
    output: String,
}

impl CanonicalWriter {
    /// Creates a new canonical writer with the given configuration.
    pub fn new(config: CanonicalConfig) -> Self {
        Self {
            config,
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
        }
    }

    /// Writes a survey to canonical string format.
    pub fn write_survey(&mut self, survey: &Survey) -> QdefResult<String> {
        self.output.clear();
        traverse(survey, self)?;
        Ok(std::mem::take(&mut self.output))
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> QdefResult<()> {
        self.output
            .write_fmt(args)
            .map_err(|e| QdefError::conversion(format!("write error: {}", e)))?;
        self.output.push('\n');
        Ok(())
    }

    fn points(&self, mm: f64) -> String {
        format!("{:.*}pt", self.config.precision, mm_to_points(mm))
    }

    fn write_header(&mut self, survey: &Survey) -> QdefResult<()> {
        let defs = &survey.defs;

        self.line(format_args!("Title = {}", single_line("Title", &survey.title)?))?;
        if let Some(global_id) = &survey.global_id {
            self.line(format_args!("GlobalID = {}", single_line("GlobalID", global_id)?))?;
        }
        self.line(format_args!("PrintQuestionnaireId = {}", defs.print_questionnaire_id as u8))?;
        self.line(format_args!("PrintSurveyId = {}", defs.print_survey_id as u8))?;
        self.line(format_args!("Pages = {}", survey.questionnaire.page_count))?;
        self.line(format_args!("CheckMode = {}", defs.checkmode))?;
        self.line(format_args!("Style = {}", defs.style))?;
        self.line(format_args!(
            "Duplex = {}",
            if defs.duplex { "True" } else { "False" }
        ))?;

        match (defs.paper_width, defs.paper_height) {
            (Some(width), Some(height)) => {
                let (width, height) = (self.points(width), self.points(height));
                self.line(format_args!("PageSize = {}, {}", width, height))?;
            }
            (None, None) => {}
            _ => {
                return Err(QdefError::conversion(
                    "paper size needs both width and height",
                ))
            }
        }
        Ok(())
    }

    fn qobject_value(qobject: &QObject) -> QdefResult<String> {
        let text = single_line("question", &qobject.question)?;
        match &qobject.index {
            Some(index) if index.depth() > 0 => {
                let (leading, _) = get_index_and_string(text)?;
                if leading.is_some() {
                    return Err(QdefError::conversion(format!(
                        "question text '{}' would be read as part of index {}",
                        text, index
                    )));
                }
                Ok(format!("{}.{}", index, text))
            }
            _ => Ok(format!("{}{}", AUTO_MARKER, text)),
        }
    }
}

impl SurveyVisitor for CanonicalWriter {
    type Error = QdefError;

    fn begin_survey(&mut self, survey: &Survey, _ctx: &VisitorContext) -> QdefResult<()> {
        self.write_header(survey)
    }

    fn visit_info(&mut self, key: &str, value: &str, _ctx: &VisitorContext) -> QdefResult<()> {
        if !self.config.include_info {
            return Ok(());
        }
        if key.is_empty()
            || key.trim() != key
            || key.contains('=')
            || !matches!(RecordKey::classify(key), RecordKey::Info(_))
        {
            return Err(QdefError::conversion(format!(
                "info key '{}' cannot be written as a record",
                key
            )));
        }
        self.line(format_args!("{} = {}", single_line(key, key)?, single_line(key, value)?))
    }

    fn begin_qobject(&mut self, qobject: &QObject, _ctx: &VisitorContext) -> QdefResult<()> {
        if self.config.separate_qobjects {
            self.output.push('\n');
        }
        let kind = qobject.kind();
        let value = Self::qobject_value(qobject)?;
        self.line(format_args!("{}-{} = {}", QOBJECT_PREFIX, kind, value))?;

        for answer in &qobject.answers {
            if answer.kind.trim_end() != answer.kind || answer.kind.contains('=') {
                return Err(QdefError::conversion(format!(
                    "answer kind '{}' cannot be written as a record key",
                    answer.kind
                )));
            }
            self.line(format_args!(
                "{}-{} = {}",
                ANSWER_PREFIX,
                single_line("answer kind", &answer.kind)?,
                single_line("answer", &answer.text)?
            ))?;
        }

        if let Some(range) = qobject.range() {
            for (position, labels) in range {
                for (bound, label) in [
                    (RangeBound::Lower, &labels.lower),
                    (RangeBound::Upper, &labels.upper),
                ] {
                    let Some(label) = label else { continue };
                    let label = single_line("range label", label)?;
                    if label.trim().is_empty() {
                        return Err(QdefError::conversion(format!(
                            "empty {} label at range position {}",
                            bound.as_str(),
                            position
                        )));
                    }
                    self.line(format_args!(
                        "{}-{} = {} {}",
                        RANGE_PREFIX,
                        bound.as_str(),
                        position,
                        label
                    ))?;
                }
            }
        }
        Ok(())
    }

    fn visit_box(&mut self, answer_box: &AnswerBox, ctx: &VisitorContext) -> QdefResult<()> {
        let paper_height = ctx.survey.paper_height().ok_or_else(|| {
            QdefError::conversion("boxes need the paper size to be written")
        })?;
        let rect = &answer_box.rect;
        let mut record = format!(
            "{} = {}, {}, {}, {}, {}, {}",
            BOX_KEY,
            answer_box.kind.name(),
            answer_box.page,
            self.points(rect.x),
            self.points(flip_y(rect.y, paper_height)),
            self.points(rect.width),
            self.points(rect.height),
        );
        if let BoxKind::Checkbox { form: Some(form) } = &answer_box.kind {
            if form.contains(',') {
                return Err(QdefError::conversion(format!(
                    "checkbox form '{}' contains a comma",
                    form
                )));
            }
            record.push_str(", ");
            record.push_str(single_line("form", form)?);
        }
        self.line(format_args!("{}", record))
    }
}

/// Reject values that would split into several records.
fn single_line<'a>(field: &str, value: &'a str) -> QdefResult<&'a str> {
    if value.contains(['\n', '\r']) {
        return Err(QdefError::conversion(format!(
            "{} value contains a line break",
            field
        )));
    }
    Ok(value)
}

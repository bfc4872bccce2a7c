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

//! Survey construction from classified records.
//!
//! [`SurveyBuilder`] owns all per-parse state: the survey under
//! construction, the auto-numbering cursor and the position of the
//! currently open qobject. A fresh builder is created for every parse.

use crate::error::{QdefError, QdefResult};
use crate::limits::Limits;
use crate::model::{AnswerBox, BoxKind, CheckMode, QObject, Rect, Style, Survey};
use crate::numbering::{get_index_and_string, AutoNumbering};
use crate::record::{
    parse_box, parse_int_flag, parse_page_count, parse_page_size, parse_qobject_kind,
    parse_range_value, RangeBound, RecordKey,
};
use crate::units::{flip_y, points_to_mm, round_mm, PAPER_SIZE_DECIMALS};
use tracing::{debug, trace, warn};

/// Incrementally builds a [`Survey`] one record at a time.
#[derive(Debug)]
pub struct SurveyBuilder<'l> {
    survey: Survey,
    numbering: AutoNumbering,
    /// Position of the open qobject in `survey.questionnaire.qobjects`.
    open: Option<usize>,
    limits: &'l Limits,
}

impl<'l> SurveyBuilder<'l> {
    pub fn new(limits: &'l Limits) -> Self {
        Self {
            survey: Survey::new(),
            numbering: AutoNumbering::new(),
            open: None,
            limits,
        }
    }

    /// The currently open qobject, if any.
    pub fn open_qobject(&self) -> Option<&QObject> {
        self.open.map(|pos| &self.survey.questionnaire.qobjects[pos])
    }

    /// The numbering cursor.
    pub fn numbering(&self) -> &AutoNumbering {
        &self.numbering
    }

    /// Apply one record. `value` must already be trimmed and normalized.
    pub fn apply(&mut self, key: &str, value: &str) -> QdefResult<()> {
        let record = RecordKey::classify(key);
        trace!(?record, value, "record");

        match record {
            RecordKey::Title => self.survey.title = value.to_string(),
            RecordKey::PrintQuestionnaireId => {
                self.survey.defs.print_questionnaire_id = parse_int_flag(value)?
            }
            RecordKey::PrintSurveyId => self.survey.defs.print_survey_id = parse_int_flag(value)?,
            RecordKey::Pages => self.survey.questionnaire.page_count = parse_page_count(value)?,
            RecordKey::CheckMode => {
                self.survey.defs.checkmode = CheckMode::from_name(value).ok_or_else(|| {
                    QdefError::config(format!("invalid configuration value: CheckMode '{}'", value), 0)
                })?
            }
            RecordKey::GlobalId => self.survey.global_id = Some(value.to_string()),
            RecordKey::GlobalIdLabel => {}
            RecordKey::Duplex => self.survey.defs.duplex = value == "True",
            RecordKey::Style => {
                self.survey.defs.style = Style::from_name(value).ok_or_else(|| {
                    QdefError::config(format!("invalid configuration value: Style '{}'", value), 0)
                })?
            }
            RecordKey::PageSize => {
                let (width, height) = parse_page_size(value)?;
                self.survey.defs.paper_width =
                    Some(round_mm(points_to_mm(width), PAPER_SIZE_DECIMALS));
                self.survey.defs.paper_height =
                    Some(round_mm(points_to_mm(height), PAPER_SIZE_DECIMALS));
            }
            RecordKey::QObject(kind) => self.open_qobject_record(kind, value)?,
            RecordKey::Answer(kind) => {
                let qobject = self.require_open(key)?;
                qobject.register_answer(kind, value);
            }
            RecordKey::Range(suffix) => self.range_record(key, suffix, value)?,
            RecordKey::Box => self.box_record(key, value)?,
            RecordKey::Info(key) => {
                self.survey.info.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    fn open_qobject_record(&mut self, kind: &str, value: &str) -> QdefResult<()> {
        let kind = parse_qobject_kind(kind)?;
        let (explicit, text) = get_index_and_string(value)?;

        if let Some(index) = &explicit {
            if index.depth() > self.limits.max_index_depth {
                return Err(QdefError::security(
                    format!(
                        "index depth {} exceeds limit {}",
                        index.depth(),
                        self.limits.max_index_depth
                    ),
                    0,
                ));
            }
        }

        let questionnaire = &mut self.survey.questionnaire;
        if questionnaire.qobjects.len() >= self.limits.max_qobjects {
            return Err(QdefError::security(
                format!("qobject count exceeds limit {}", self.limits.max_qobjects),
                0,
            ));
        }

        let index = self.numbering.next_index(explicit);
        debug!(%kind, %index, "open qobject");

        let qobject = questionnaire.add_qobject(kind.instantiate(), Some(index));
        qobject.set_question(text);
        self.open = Some(questionnaire.qobjects.len() - 1);
        Ok(())
    }

    fn range_record(&mut self, key: &str, suffix: &str, value: &str) -> QdefResult<()> {
        let qobject = self.require_open(key)?;
        if qobject.range().is_none() {
            return Err(QdefError::context(
                format!(
                    "record out of context: {} on a {} question",
                    key,
                    qobject.kind()
                ),
                0,
            ));
        }

        let bound = RangeBound::from_suffix(suffix)?;
        let (position, label) = parse_range_value(value)?;
        match bound {
            RangeBound::Lower => qobject.set_lower(position, label),
            RangeBound::Upper => qobject.set_upper(position, label),
        }
    }

    fn box_record(&mut self, key: &str, value: &str) -> QdefResult<()> {
        let max_boxes = self.limits.max_boxes_per_qobject;
        let paper_height = self.survey.defs.paper_height;
        let qobject = self.require_open(key)?;

        let record = parse_box(value)?;
        let paper_height = paper_height.ok_or_else(|| {
            QdefError::context("record out of context: Box before PageSize", 0)
        })?;

        if qobject.boxes.len() >= max_boxes {
            return Err(QdefError::security(
                format!("box count exceeds limit {} for one qobject", max_boxes),
                0,
            ));
        }

        let rect = Rect::new(
            points_to_mm(record.x),
            flip_y(points_to_mm(record.y), paper_height),
            points_to_mm(record.width),
            points_to_mm(record.height),
        );
        let kind = if record.textbox {
            BoxKind::Textbox
        } else {
            BoxKind::Checkbox { form: record.form }
        };
        debug!(kind = kind.name(), page = record.page, x = rect.x, y = rect.y, "box");

        qobject.add_box(AnswerBox::new(kind, record.page, rect));
        Ok(())
    }

    fn require_open(&mut self, key: &str) -> QdefResult<&mut QObject> {
        match self.open {
            Some(pos) => Ok(&mut self.survey.questionnaire.qobjects[pos]),
            None => Err(QdefError::context(
                format!("record out of context: {} outside QObject", key),
                0,
            )),
        }
    }

    /// Finish the parse and return the survey.
    pub fn finish(mut self) -> Survey {
        if self.survey.questionnaire.page_count == 1 && self.survey.defs.duplex {
            warn!("single page questionnaire cannot be duplex, forcing Duplex off");
            self.survey.defs.duplex = false;
        }
        self.survey
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QIndex, QObjectKind};
    use crate::QdefErrorKind;

    fn builder(limits: &Limits) -> SurveyBuilder<'_> {
        SurveyBuilder::new(limits)
    }

    #[test]
    fn test_scalars() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("Title", "Customer survey").unwrap();
        b.apply("GlobalID", "2024-A").unwrap();
        b.apply("GlobalIDLabel", "ignored").unwrap();
        b.apply("PrintQuestionnaireId", "1").unwrap();
        b.apply("PrintSurveyId", "0").unwrap();
        b.apply("Pages", "4").unwrap();
        b.apply("CheckMode", "fill").unwrap();
        b.apply("Style", "qr").unwrap();
        b.apply("Duplex", "False").unwrap();
        let survey = b.finish();
        assert_eq!(survey.title, "Customer survey");
        assert_eq!(survey.global_id.as_deref(), Some("2024-A"));
        assert!(survey.defs.print_questionnaire_id);
        assert!(!survey.defs.print_survey_id);
        assert_eq!(survey.questionnaire.page_count, 4);
        assert_eq!(survey.defs.checkmode, CheckMode::Fill);
        assert_eq!(survey.defs.style, Style::Qr);
        assert!(!survey.defs.duplex);
        assert!(survey.info.is_empty());
    }

    #[test]
    fn test_invalid_config_values() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        assert_eq!(b.apply("CheckMode", "tick").unwrap_err().kind, QdefErrorKind::Config);
        assert_eq!(b.apply("Style", "fancy").unwrap_err().kind, QdefErrorKind::Config);
    }

    #[test]
    fn test_info_last_write_wins() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("Author", "A").unwrap();
        b.apply("Author", "B").unwrap();
        assert_eq!(b.finish().info["Author"], "B");
    }

    #[test]
    fn test_qobject_opens_and_numbers() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("QObject-Head", "1.Section").unwrap();
        b.apply("QObject-Choice", "Pick one").unwrap();
        let open = b.open_qobject().unwrap();
        assert_eq!(open.kind(), QObjectKind::Choice);
        assert_eq!(open.index, Some(QIndex::new(vec![1, 1])));
        assert_eq!(b.numbering().cursor(), &[1, 1]);
    }

    #[test]
    fn test_unknown_kind() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        let err = b.apply("QObject-Matrix", "x").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::UnknownKind);
        assert!(b.open_qobject().is_none());
    }

    #[test]
    fn test_answer_outside_qobject() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        let err = b.apply("Answer-Choice", "Yes").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Context);
        assert!(err.message.contains("outside QObject"));
    }

    #[test]
    fn test_range_requires_range_question() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("QObject-Choice", "x").unwrap();
        let err = b.apply("Range-Lower", "1 bad").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Context);
    }

    #[test]
    fn test_range_bad_suffix() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("QObject-Range", "x").unwrap();
        let err = b.apply("Range-Middle", "1 so-so").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::RangeField);
    }

    #[test]
    fn test_box_before_page_size() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("QObject-Choice", "x").unwrap();
        let err = b.apply("Box", "Checkbox, 1, 1pt, 2pt, 3pt, 4pt").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Context);
        assert!(err.message.contains("PageSize"));
    }

    #[test]
    fn test_box_geometry_flipped() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("PageSize", "597.50787pt, 845.04684pt").unwrap();
        b.apply("QObject-Text", "x").unwrap();
        b.apply("Box", "Textbox, 1, 72.27pt, 72.27pt, 144.54pt, 72.27pt").unwrap();
        let survey = b.finish();
        let answer_box = &survey.questionnaire.qobjects[0].boxes[0];
        assert!(answer_box.is_textbox());
        assert!((answer_box.rect.x - 25.4).abs() < 1e-9);
        assert!((answer_box.rect.y - (297.0 - 25.4)).abs() < 1e-9);
        assert!((answer_box.rect.width - 50.8).abs() < 1e-9);
        assert!((answer_box.rect.height - 25.4).abs() < 1e-9);
    }

    #[test]
    fn test_qobject_limit() {
        let limits = Limits {
            max_qobjects: 1,
            ..Limits::default()
        };
        let mut b = builder(&limits);
        b.apply("QObject-Text", "a").unwrap();
        let err = b.apply("QObject-Text", "b").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Security);
    }

    #[test]
    fn test_index_depth_limit() {
        let limits = Limits {
            max_index_depth: 2,
            ..Limits::default()
        };
        let mut b = builder(&limits);
        b.apply("QObject-Text", "1.2.a").unwrap();
        let err = b.apply("QObject-Text", "1.2.3.b").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Security);
    }

    #[test]
    fn test_box_limit() {
        let limits = Limits {
            max_boxes_per_qobject: 1,
            ..Limits::default()
        };
        let mut b = builder(&limits);
        b.apply("PageSize", "100pt, 100pt").unwrap();
        b.apply("QObject-Choice", "x").unwrap();
        b.apply("Box", "Checkbox, 1, 1pt, 2pt, 3pt, 4pt").unwrap();
        let err = b.apply("Box", "Checkbox, 1, 1pt, 2pt, 3pt, 4pt").unwrap_err();
        assert_eq!(err.kind, QdefErrorKind::Security);
    }

    #[test]
    fn test_single_page_forces_simplex() {
        let limits = Limits::default();
        let mut b = builder(&limits);
        b.apply("Pages", "1").unwrap();
        b.apply("Duplex", "True").unwrap();
        assert!(!b.finish().defs.duplex);
    }
}

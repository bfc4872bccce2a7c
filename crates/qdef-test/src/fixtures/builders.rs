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

//! Builder pattern for creating customizable test fixtures.
//!
//! Geometry is given in millimeters, top-left origin, exactly as the parser
//! stores it.

use qdef_core::{
    AnswerBox, CheckMode, QIndex, QObject, QObjectKind, Rect, Style, Survey,
};

/// A4 paper size in millimeters.
pub const A4_MM: (f64, f64) = (210.0, 297.0);

/// Builder for creating customizable Survey fixtures.
///
/// # Examples
///
/// ```
/// use qdef_test::fixtures::builders::{QObjectBuilder, SurveyBuilder};
/// use qdef_core::QObjectKind;
///
/// let survey = SurveyBuilder::new()
///     .title("Feedback")
///     .a4()
///     .qobject(QObjectBuilder::new(QObjectKind::Text).index(&[1]).question("Comments"))
///     .build();
///
/// assert_eq!(survey.title, "Feedback");
/// assert_eq!(survey.questionnaire.qobjects.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SurveyBuilder {
    survey: Survey,
}

impl SurveyBuilder {
    /// Creates a new SurveyBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.survey.title = title.into();
        self
    }

    pub fn global_id(mut self, global_id: impl Into<String>) -> Self {
        self.survey.global_id = Some(global_id.into());
        self
    }

    pub fn pages(mut self, pages: u32) -> Self {
        self.survey.questionnaire.page_count = pages;
        self
    }

    pub fn duplex(mut self, duplex: bool) -> Self {
        self.survey.defs.duplex = duplex;
        self
    }

    pub fn print_ids(mut self, questionnaire_id: bool, survey_id: bool) -> Self {
        self.survey.defs.print_questionnaire_id = questionnaire_id;
        self.survey.defs.print_survey_id = survey_id;
        self
    }

    pub fn checkmode(mut self, checkmode: CheckMode) -> Self {
        self.survey.defs.checkmode = checkmode;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.survey.defs.style = style;
        self
    }

    /// Sets the paper size in millimeters.
    pub fn page_size(mut self, width: f64, height: f64) -> Self {
        self.survey.defs.paper_width = Some(width);
        self.survey.defs.paper_height = Some(height);
        self
    }

    /// Sets the paper size to A4.
    pub fn a4(self) -> Self {
        self.page_size(A4_MM.0, A4_MM.1)
    }

    /// Adds an info entry.
    pub fn info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.survey.info.insert(key.into(), value.into());
        self
    }

    /// Appends a qobject.
    pub fn qobject(mut self, qobject: QObjectBuilder) -> Self {
        let qobject = qobject.build();
        let index = qobject.index.clone();
        self.survey.questionnaire.add_qobject(qobject, index);
        self
    }

    /// Builds the Survey.
    pub fn build(self) -> Survey {
        self.survey
    }
}

/// Builder for creating customizable QObject fixtures.
///
/// # Examples
///
/// ```
/// use qdef_test::fixtures::builders::QObjectBuilder;
/// use qdef_core::{QObjectKind, Rect};
///
/// let qobject = QObjectBuilder::new(QObjectKind::Choice)
///     .index(&[1, 2])
///     .question("Pick one")
///     .answer("Yes")
///     .checkbox(1, Rect::new(20.0, 30.0, 5.0, 5.0))
///     .build();
///
/// assert_eq!(qobject.answers[0].kind, "Choice");
/// assert_eq!(qobject.answers[0].text, "Yes");
/// assert_eq!(qobject.boxes.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QObjectBuilder {
    qobject: QObject,
}

impl QObjectBuilder {
    /// Creates an empty qobject of `kind`.
    pub fn new(kind: QObjectKind) -> Self {
        Self {
            qobject: kind.instantiate(),
        }
    }

    pub fn index(mut self, components: &[u32]) -> Self {
        self.qobject.index = Some(QIndex::new(components.to_vec()));
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.qobject.set_question(question);
        self
    }

    /// Registers an answer under the qobject's own kind, as the LaTeX
    /// class writes it.
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        let kind = self.qobject.kind().as_str();
        self.qobject.register_answer(kind, answer);
        self
    }

    /// Registers an answer under an explicit key suffix.
    pub fn answer_with_kind(mut self, kind: impl Into<String>, answer: impl Into<String>) -> Self {
        self.qobject.register_answer(kind, answer);
        self
    }

    pub fn checkbox(mut self, page: u32, rect: Rect) -> Self {
        self.qobject.add_box(AnswerBox::checkbox(page, rect, None));
        self
    }

    pub fn checkbox_with_form(mut self, page: u32, rect: Rect, form: impl Into<String>) -> Self {
        self.qobject
            .add_box(AnswerBox::checkbox(page, rect, Some(form.into())));
        self
    }

    pub fn textbox(mut self, page: u32, rect: Rect) -> Self {
        self.qobject.add_box(AnswerBox::textbox(page, rect));
        self
    }

    /// Sets a lower range label.
    ///
    /// # Panics
    ///
    /// Panics unless the qobject is a range question.
    pub fn lower(mut self, position: i32, label: impl Into<String>) -> Self {
        self.qobject
            .set_lower(position, label)
            .expect("lower label needs a Range qobject");
        self
    }

    /// Sets an upper range label.
    ///
    /// # Panics
    ///
    /// Panics unless the qobject is a range question.
    pub fn upper(mut self, position: i32, label: impl Into<String>) -> Self {
        self.qobject
            .set_upper(position, label)
            .expect("upper label needs a Range qobject");
        self
    }

    /// Builds the QObject.
    pub fn build(self) -> QObject {
        self.qobject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_builder_defaults() {
        let survey = SurveyBuilder::new().build();
        assert_eq!(survey, Survey::new());
    }

    #[test]
    fn test_survey_builder_all_fields() {
        let survey = SurveyBuilder::new()
            .title("T")
            .global_id("G")
            .pages(3)
            .duplex(false)
            .print_ids(true, true)
            .checkmode(CheckMode::Fill)
            .style(Style::Qr)
            .a4()
            .info("Author", "A")
            .build();
        assert_eq!(survey.title, "T");
        assert_eq!(survey.global_id.as_deref(), Some("G"));
        assert_eq!(survey.questionnaire.page_count, 3);
        assert!(!survey.defs.duplex);
        assert!(survey.defs.print_questionnaire_id && survey.defs.print_survey_id);
        assert_eq!(survey.defs.checkmode, CheckMode::Fill);
        assert_eq!(survey.defs.style, Style::Qr);
        assert_eq!(survey.paper_height(), Some(297.0));
        assert_eq!(survey.info["Author"], "A");
    }

    #[test]
    fn test_qobject_builder_keeps_index() {
        let survey = SurveyBuilder::new()
            .qobject(QObjectBuilder::new(QObjectKind::Head).index(&[2, 1]))
            .build();
        assert_eq!(
            survey.questionnaire.qobjects[0].index,
            Some(QIndex::new(vec![2, 1]))
        );
    }

    #[test]
    fn test_range_labels() {
        let qobject = QObjectBuilder::new(QObjectKind::Range)
            .lower(1, "bad")
            .upper(1, "good")
            .build();
        let range = qobject.range().unwrap();
        assert_eq!(range[&1].lower.as_deref(), Some("bad"));
        assert_eq!(range[&1].upper.as_deref(), Some("good"));
    }

    #[test]
    #[should_panic(expected = "Range qobject")]
    fn test_range_label_on_choice_panics() {
        QObjectBuilder::new(QObjectKind::Choice).lower(1, "bad");
    }

    #[test]
    fn test_boxes() {
        let qobject = QObjectBuilder::new(QObjectKind::Choice)
            .checkbox(1, Rect::new(1.0, 2.0, 3.0, 4.0))
            .checkbox_with_form(1, Rect::new(5.0, 2.0, 3.0, 4.0), "ellipse")
            .textbox(2, Rect::new(1.0, 10.0, 50.0, 20.0))
            .build();
        assert_eq!(qobject.boxes.len(), 3);
        assert_eq!(qobject.boxes[1].form(), Some("ellipse"));
        assert!(qobject.boxes[2].is_textbox());
    }
}

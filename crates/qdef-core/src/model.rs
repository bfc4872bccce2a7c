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

//! Object model for parsed questionnaire definitions.

use crate::error::{QdefError, QdefResult};
use std::collections::BTreeMap;
use std::fmt;

/// A hierarchical question index such as `1.2` ("section 1, item 2").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QIndex(Vec<u32>);

impl QIndex {
    /// Create an index from its components.
    pub fn new(components: Vec<u32>) -> Self {
        Self(components)
    }

    /// The index components, outermost first.
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// Number of levels.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<u32>> for QIndex {
    fn from(components: Vec<u32>) -> Self {
        Self(components)
    }
}

impl fmt::Display for QIndex {
    /// Dotted form without the trailing dot, e.g. `1.2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

/// How checkboxes are meant to be marked by respondents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CheckMode {
    /// Check to select, fill to correct.
    #[default]
    CheckCorrect,
    /// Check to select.
    Check,
    /// Fill to select.
    Fill,
}

impl CheckMode {
    /// All recognized modes.
    pub const ALL: [CheckMode; 3] = [CheckMode::CheckCorrect, CheckMode::Check, CheckMode::Fill];

    /// Look up a mode by its definition-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == name)
    }

    /// The definition-file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckCorrect => "checkcorrect",
            Self::Check => "check",
            Self::Fill => "fill",
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identification style printed on the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    #[default]
    Classic,
    Code128,
    Custom,
    Qr,
}

impl Style {
    /// All recognized styles.
    pub const ALL: [Style; 4] = [Style::Classic, Style::Code128, Style::Custom, Style::Qr];

    /// Look up a style by its definition-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == name)
    }

    /// The definition-file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Code128 => "code128",
            Self::Custom => "custom",
            Self::Qr => "qr",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout settings of a survey.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defs {
    pub print_questionnaire_id: bool,
    pub print_survey_id: bool,
    pub checkmode: CheckMode,
    pub duplex: bool,
    pub style: Style,
    /// Paper width in millimeters, once `PageSize` has been seen.
    pub paper_width: Option<f64>,
    /// Paper height in millimeters, once `PageSize` has been seen.
    pub paper_height: Option<f64>,
}

impl Default for Defs {
    fn default() -> Self {
        Self {
            print_questionnaire_id: false,
            print_survey_id: false,
            checkmode: CheckMode::default(),
            duplex: true,
            style: Style::default(),
            paper_width: None,
            paper_height: None,
        }
    }
}

/// Position and size of an answer box, in millimeters from the top-left
/// corner of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The flavor of an answer box.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxKind {
    /// A box to be ticked. `form` is a render hint (e.g. `ellipse`).
    Checkbox { form: Option<String> },
    /// A free-text field.
    Textbox,
}

impl BoxKind {
    /// The definition-file name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Checkbox { .. } => "Checkbox",
            Self::Textbox => "Textbox",
        }
    }
}

/// An interactive answer-capture region.
///
/// Built in one step by [`AnswerBox::new`]; there is no partially
/// initialized state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnswerBox {
    pub kind: BoxKind,
    /// 1-based page the box is printed on.
    pub page: u32,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub rect: Rect,
}

impl AnswerBox {
    pub fn new(kind: BoxKind, page: u32, rect: Rect) -> Self {
        Self { kind, page, rect }
    }

    pub fn checkbox(page: u32, rect: Rect, form: Option<String>) -> Self {
        Self::new(BoxKind::Checkbox { form }, page, rect)
    }

    pub fn textbox(page: u32, rect: Rect) -> Self {
        Self::new(BoxKind::Textbox, page, rect)
    }

    pub fn is_textbox(&self) -> bool {
        matches!(self.kind, BoxKind::Textbox)
    }

    /// The checkbox render hint, if any.
    pub fn form(&self) -> Option<&str> {
        match &self.kind {
            BoxKind::Checkbox { form } => form.as_deref(),
            BoxKind::Textbox => None,
        }
    }
}

/// Lower and upper labels attached to one position of a range scale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeLabels {
    pub lower: Option<String>,
    pub upper: Option<String>,
}

/// The recognized question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QObjectKind {
    /// Section heading.
    Head,
    /// Plain question without further structure.
    Question,
    /// Multiple choice question.
    Choice,
    /// Scale question with marks between two labels.
    Mark,
    /// Free-text question.
    Text,
    /// Scale question with labels per position.
    Range,
}

impl QObjectKind {
    /// All recognized kinds.
    pub const ALL: [QObjectKind; 6] = [
        QObjectKind::Head,
        QObjectKind::Question,
        QObjectKind::Choice,
        QObjectKind::Mark,
        QObjectKind::Text,
        QObjectKind::Range,
    ];

    /// Look up a kind by its definition-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The definition-file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Question => "Question",
            Self::Choice => "Choice",
            Self::Mark => "Mark",
            Self::Text => "Text",
            Self::Range => "Range",
        }
    }

    /// Construct an empty qobject of this kind.
    pub fn instantiate(self) -> QObject {
        let variant = match self {
            Self::Head => QObjectVariant::Head,
            Self::Question => QObjectVariant::Question,
            Self::Choice => QObjectVariant::Choice,
            Self::Mark => QObjectVariant::Mark,
            Self::Text => QObjectVariant::Text,
            Self::Range => QObjectVariant::Range(BTreeMap::new()),
        };
        QObject::new(variant)
    }
}

impl fmt::Display for QObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific data of a qobject.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QObjectVariant {
    Head,
    Question,
    Choice,
    Mark,
    Text,
    /// Labels per scale position.
    Range(BTreeMap<i32, RangeLabels>),
}

/// A registered answer option.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Answer {
    /// Key suffix as written, e.g. `Choice` for `Answer-Choice`. Carries no
    /// meaning for the parser.
    pub kind: String,
    pub text: String,
}

impl Answer {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// A question-like node of the questionnaire outline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QObject {
    pub variant: QObjectVariant,
    /// Hierarchical index; `None` for unindexed items.
    pub index: Option<QIndex>,
    /// Question text after normalization.
    pub question: String,
    /// Page number, assigned by layout rather than by the parser.
    pub page_number: Option<u32>,
    /// Registered answer options in document order.
    pub answers: Vec<Answer>,
    pub boxes: Vec<AnswerBox>,
}

impl QObject {
    /// Create an empty qobject.
    pub fn new(variant: QObjectVariant) -> Self {
        Self {
            variant,
            index: None,
            question: String::new(),
            page_number: None,
            answers: Vec::new(),
            boxes: Vec::new(),
        }
    }

    pub fn kind(&self) -> QObjectKind {
        match self.variant {
            QObjectVariant::Head => QObjectKind::Head,
            QObjectVariant::Question => QObjectKind::Question,
            QObjectVariant::Choice => QObjectKind::Choice,
            QObjectVariant::Mark => QObjectKind::Mark,
            QObjectVariant::Text => QObjectKind::Text,
            QObjectVariant::Range(_) => QObjectKind::Range,
        }
    }

    /// Set the question text.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Register an answer option under the key suffix it was recorded with.
    pub fn register_answer(&mut self, kind: impl Into<String>, text: impl Into<String>) {
        self.answers.push(Answer::new(kind, text));
    }

    /// Answer texts in document order.
    pub fn answer_texts(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(|answer| answer.text.as_str())
    }

    /// Attach a box.
    pub fn add_box(&mut self, answer_box: AnswerBox) {
        self.boxes.push(answer_box);
    }

    /// Range labels, if this is a range question.
    pub fn range(&self) -> Option<&BTreeMap<i32, RangeLabels>> {
        match &self.variant {
            QObjectVariant::Range(labels) => Some(labels),
            _ => None,
        }
    }

    fn range_mut(&mut self) -> QdefResult<&mut BTreeMap<i32, RangeLabels>> {
        let kind = self.kind();
        match &mut self.variant {
            QObjectVariant::Range(labels) => Ok(labels),
            _ => Err(QdefError::context(
                format!("Range record on a {} question", kind),
                0,
            )),
        }
    }

    /// Set the lower label at `position`. Fails unless this is a range question.
    pub fn set_lower(&mut self, position: i32, label: impl Into<String>) -> QdefResult<()> {
        self.range_mut()?.entry(position).or_default().lower = Some(label.into());
        Ok(())
    }

    /// Set the upper label at `position`. Fails unless this is a range question.
    pub fn set_upper(&mut self, position: i32, label: impl Into<String>) -> QdefResult<()> {
        self.range_mut()?.entry(position).or_default().upper = Some(label.into());
        Ok(())
    }
}

/// The ordered outline of qobjects.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Questionnaire {
    pub page_count: u32,
    /// Qobjects in document order.
    pub qobjects: Vec<QObject>,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a qobject, assigning it `index`.
    pub fn add_qobject(&mut self, mut qobject: QObject, index: Option<QIndex>) -> &mut QObject {
        qobject.index = index;
        self.qobjects.push(qobject);
        let last = self.qobjects.len() - 1;
        &mut self.qobjects[last]
    }

    /// Find a qobject by its index.
    pub fn get(&self, index: &QIndex) -> Option<&QObject> {
        self.qobjects.iter().find(|q| q.index.as_ref() == Some(index))
    }

    /// Iterate over all boxes in document order.
    pub fn boxes(&self) -> impl Iterator<Item = &AnswerBox> {
        self.qobjects.iter().flat_map(|q| q.boxes.iter())
    }
}

/// A parsed questionnaire definition.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Survey {
    pub title: String,
    pub global_id: Option<String>,
    /// Metadata for keys the parser does not interpret.
    pub info: BTreeMap<String, String>,
    pub defs: Defs,
    pub questionnaire: Questionnaire,
}

impl Survey {
    /// Create an empty survey.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paper height, required before any box can be placed.
    pub fn paper_height(&self) -> Option<f64> {
        self.defs.paper_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qindex_display() {
        assert_eq!(QIndex::new(vec![1, 2, 3]).to_string(), "1.2.3");
        assert_eq!(QIndex::new(vec![7]).to_string(), "7");
        assert_eq!(QIndex::default().to_string(), "");
    }

    #[test]
    fn test_qindex_ordering() {
        assert!(QIndex::new(vec![1, 2]) < QIndex::new(vec![1, 10]));
        assert!(QIndex::new(vec![1]) < QIndex::new(vec![1, 0]));
    }

    #[test]
    fn test_checkmode_names() {
        assert_eq!(CheckMode::from_name("checkcorrect"), Some(CheckMode::CheckCorrect));
        assert_eq!(CheckMode::from_name("check"), Some(CheckMode::Check));
        assert_eq!(CheckMode::from_name("fill"), Some(CheckMode::Fill));
        assert_eq!(CheckMode::from_name("Fill"), None);
        assert_eq!(CheckMode::Fill.to_string(), "fill");
    }

    #[test]
    fn test_style_names() {
        for style in Style::ALL {
            assert_eq!(Style::from_name(style.as_str()), Some(style));
        }
        assert_eq!(Style::from_name("fancy"), None);
    }

    #[test]
    fn test_defs_default() {
        let defs = Defs::default();
        assert!(!defs.print_questionnaire_id);
        assert!(!defs.print_survey_id);
        assert_eq!(defs.checkmode, CheckMode::CheckCorrect);
        assert_eq!(defs.style, Style::Classic);
        assert!(defs.paper_height.is_none());
    }

    #[test]
    fn test_kind_lookup_and_instantiate() {
        for kind in QObjectKind::ALL {
            assert_eq!(QObjectKind::from_name(kind.as_str()), Some(kind));
            assert_eq!(kind.instantiate().kind(), kind);
        }
        assert_eq!(QObjectKind::from_name("Matrix"), None);
        assert_eq!(QObjectKind::from_name("choice"), None);
    }

    #[test]
    fn test_range_labels() {
        let mut q = QObjectKind::Range.instantiate();
        q.set_lower(1, "bad").unwrap();
        q.set_upper(1, "good").unwrap();
        let labels = &q.range().unwrap()[&1];
        assert_eq!(labels.lower.as_deref(), Some("bad"));
        assert_eq!(labels.upper.as_deref(), Some("good"));
    }

    #[test]
    fn test_range_on_non_range_fails() {
        let mut q = QObjectKind::Choice.instantiate();
        let err = q.set_lower(1, "bad").unwrap_err();
        assert_eq!(err.kind, crate::QdefErrorKind::Context);
        assert!(q.range().is_none());
    }

    #[test]
    fn test_answers_and_boxes() {
        let mut q = QObjectKind::Choice.instantiate();
        q.set_question("Favourite colour?");
        q.register_answer("Choice", "Red");
        q.register_answer("Other", "Blue");
        q.add_box(AnswerBox::checkbox(1, Rect::new(1.0, 2.0, 3.0, 3.0), None));
        assert_eq!(q.question, "Favourite colour?");
        assert_eq!(q.answer_texts().collect::<Vec<_>>(), vec!["Red", "Blue"]);
        assert_eq!(q.answers[1], Answer::new("Other", "Blue"));
        assert_eq!(q.boxes.len(), 1);
        assert!(q.page_number.is_none());
    }

    #[test]
    fn test_box_form() {
        let b = AnswerBox::checkbox(1, Rect::default(), Some("ellipse".into()));
        assert_eq!(b.form(), Some("ellipse"));
        assert_eq!(b.kind.name(), "Checkbox");
        let t = AnswerBox::textbox(1, Rect::default());
        assert_eq!(t.form(), None);
        assert!(t.is_textbox());
    }

    #[test]
    fn test_questionnaire_add_and_get() {
        let mut qn = Questionnaire::new();
        qn.add_qobject(QObjectKind::Head.instantiate(), Some(QIndex::new(vec![1])));
        qn.add_qobject(QObjectKind::Text.instantiate(), Some(QIndex::new(vec![1, 1])));
        assert_eq!(qn.qobjects.len(), 2);
        let found = qn.get(&QIndex::new(vec![1, 1])).unwrap();
        assert_eq!(found.kind(), QObjectKind::Text);
        assert!(qn.get(&QIndex::new(vec![2])).is_none());
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 5.0, 2.0);
        assert_eq!(r.right(), 15.0);
        assert_eq!(r.bottom(), 22.0);
    }
}

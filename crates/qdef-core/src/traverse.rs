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

//! Survey traversal trait for writers and analyzers.
//!
//! The visitor pattern separates walking the survey from what is done with
//! each element. Writers implement [`SurveyVisitor`] and let [`traverse`]
//! drive them in document order.
//!
//! # Example
//!
//! ```text
//! use qdef_core::traverse::{traverse, SurveyVisitor, VisitorContext};
//!
//! struct Titles(Vec<String>);
//!
//! impl SurveyVisitor for Titles {
//!     type Error = std::convert::Infallible;
//!
//!     fn begin_qobject(&mut self, qobject: &QObject, _ctx: &VisitorContext) -> Result<(), Self::Error> {
//!         self.0.push(qobject.question.clone());
//!         Ok(())
//!     }
//! }
//! ```

use crate::model::{AnswerBox, QObject, QObjectKind, Survey};
use std::collections::{BTreeMap, BTreeSet};

/// Context provided to visitors during traversal.
#[derive(Debug, Clone, Copy)]
pub struct VisitorContext<'a> {
    /// The survey being traversed.
    pub survey: &'a Survey,
    /// Position of the current qobject in document order.
    pub qobject: Option<usize>,
    /// Position of the current box within its qobject.
    pub answer_box: Option<usize>,
}

impl<'a> VisitorContext<'a> {
    /// Create a root context.
    pub fn new(survey: &'a Survey) -> Self {
        Self {
            survey,
            qobject: None,
            answer_box: None,
        }
    }

    /// Context for the qobject at `position`.
    pub fn at_qobject(&self, position: usize) -> Self {
        Self {
            qobject: Some(position),
            answer_box: None,
            ..*self
        }
    }

    /// Context for the box at `position` of the current qobject.
    pub fn at_box(&self, position: usize) -> Self {
        Self {
            answer_box: Some(position),
            ..*self
        }
    }
}

/// Visitor trait for survey traversal.
///
/// All methods have default implementations that do nothing, so
/// implementations override only what they need.
pub trait SurveyVisitor {
    /// Error type for visitor operations.
    type Error;

    fn begin_survey(&mut self, _survey: &Survey, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_survey(&mut self, _survey: &Survey, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for each info entry, in key order.
    fn visit_info(&mut self, _key: &str, _value: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    fn begin_qobject(&mut self, _qobject: &QObject, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_box(&mut self, _answer_box: &AnswerBox, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_qobject(&mut self, _qobject: &QObject, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Traverse a survey, calling visitor methods for each element.
pub fn traverse<V: SurveyVisitor>(survey: &Survey, visitor: &mut V) -> Result<(), V::Error> {
    let ctx = VisitorContext::new(survey);
    visitor.begin_survey(survey, &ctx)?;

    for (key, value) in &survey.info {
        visitor.visit_info(key, value, &ctx)?;
    }

    for (position, qobject) in survey.questionnaire.qobjects.iter().enumerate() {
        let qobject_ctx = ctx.at_qobject(position);
        visitor.begin_qobject(qobject, &qobject_ctx)?;
        for (box_position, answer_box) in qobject.boxes.iter().enumerate() {
            visitor.visit_box(answer_box, &qobject_ctx.at_box(box_position))?;
        }
        visitor.end_qobject(qobject, &qobject_ctx)?;
    }

    visitor.end_survey(survey, &ctx)?;
    Ok(())
}

/// Statistics collector visitor.
#[derive(Debug, Default)]
pub struct StatsCollector {
    /// Number of qobjects per kind.
    pub qobjects: BTreeMap<QObjectKind, usize>,
    pub answers: usize,
    pub checkboxes: usize,
    pub textboxes: usize,
    /// Pages that carry at least one box.
    pub pages_used: BTreeSet<u32>,
    pub info_entries: usize,
}

impl StatsCollector {
    /// Total number of qobjects.
    pub fn qobject_count(&self) -> usize {
        self.qobjects.values().sum()
    }

    /// Total number of boxes.
    pub fn box_count(&self) -> usize {
        self.checkboxes + self.textboxes
    }
}

impl SurveyVisitor for StatsCollector {
    type Error = std::convert::Infallible;

    fn visit_info(&mut self, _key: &str, _value: &str, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        self.info_entries += 1;
        Ok(())
    }

    fn begin_qobject(&mut self, qobject: &QObject, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        *self.qobjects.entry(qobject.kind()).or_default() += 1;
        self.answers += qobject.answers.len();
        Ok(())
    }

    fn visit_box(&mut self, answer_box: &AnswerBox, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        if answer_box.is_textbox() {
            self.textboxes += 1;
        } else {
            self.checkboxes += 1;
        }
        self.pages_used.insert(answer_box.page);
        Ok(())
    }
}

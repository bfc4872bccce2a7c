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

//! Core parser and object model for questionnaire definition files.
//!
//! A definition file is a flat list of `Key = value` records written by the
//! questionnaire LaTeX class. [`parse`] turns it into a [`Survey`]: layout
//! settings, free-form metadata, and an ordered outline of qobjects with
//! their answer boxes converted to millimeters.
//!
//! ```text
//! let survey = qdef_core::parse(b"Title = Feedback\nQObject-Text = 1.Comments\n")?;
//! assert_eq!(survey.questionnaire.qobjects.len(), 1);
//! ```

mod builder;
mod error;
pub mod geometry;
mod limits;
mod model;
pub mod normalize;
pub mod numbering;
mod parser;
mod preprocess;
pub mod record;
pub mod traverse;
pub mod units;

pub use builder::SurveyBuilder;
pub use error::{QdefError, QdefErrorKind, QdefResult};
pub use geometry::{BoxRef, Edge, MIN_FREETEXT_SIZE};
pub use limits::Limits;
pub use model::{
    Answer, AnswerBox, BoxKind, CheckMode, Defs, QIndex, QObject, QObjectKind, QObjectVariant,
    Questionnaire, RangeLabels, Rect, Style, Survey,
};
pub use normalize::{Identity, Normalize};
pub use parser::{parse, parse_with_normalizer, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use traverse::{traverse, StatsCollector, SurveyVisitor, VisitorContext};

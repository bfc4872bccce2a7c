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

//! Definition file texts.
//!
//! Point values are chosen as whole inch fractions so the millimeter
//! geometry comes out exact.

/// The smallest useful definition: a title and one question.
pub const MINIMAL: &str = "Title = Minimal
QObject-Text = 1.Anything else?
";

/// A two-page course evaluation using every record type.
pub const COURSE_EVALUATION: &str = "Title = Course evaluation
GlobalID = CE-2025
PrintQuestionnaireId = 1
PrintSurveyId = 0
Pages = 2
CheckMode = checkcorrect
Style = classic
Duplex = True
PageSize = 597.50787pt, 845.04684pt
Lecturer = Dr. Ada Lovelace
Term = Winter 2025

QObject-Head = 1.General
QObject-Choice = How did you hear about the course?
Answer-Choice = Friends
Answer-Choice = Website
Box = Checkbox, 1, 72.27pt, 722.7pt, 14.454pt, 14.454pt
Box = Checkbox, 1, 216.81pt, 722.7pt, 14.454pt, 14.454pt, ellipse
QObject-Range = Overall rating
Range-Lower = 1 poor
Range-Upper = 5 excellent
Box = Checkbox, 1, 72.27pt, 578.16pt, 14.454pt, 14.454pt

QObject-Head = 2.Feedback
QObject-Text = What should be improved?
Box = Textbox, 2, 72.27pt, 433.62pt, 361.35pt, 144.54pt
";

/// Mixed explicit and automatic numbering.
pub const NESTED_NUMBERING: &str = "Title = Numbering
QObject-Head = 1.Intro
QObject-Text = XAUTO. First
QObject-Text = Second
QObject-Head = 2.Body
QObject-Head = 2.1.Detail
QObject-Mark = Deep
QObject-Question = Deeper
";

/// A single-page survey that asks for duplex printing.
pub const SINGLE_PAGE_DUPLEX: &str = "Title = Flyer
Pages = 1
Duplex = True
";

/// The empty definition.
pub const EMPTY: &str = "";

/// All definition texts as (name, text) pairs.
pub fn all_definitions() -> Vec<(&'static str, &'static str)> {
    vec![
        ("minimal", MINIMAL),
        ("course_evaluation", COURSE_EVALUATION),
        ("nested_numbering", NESTED_NUMBERING),
        ("single_page_duplex", SINGLE_PAGE_DUPLEX),
        ("empty", EMPTY),
    ]
}

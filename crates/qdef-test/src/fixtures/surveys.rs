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

//! Survey fixtures equivalent to the definition texts.

use super::builders::{QObjectBuilder, SurveyBuilder};
use qdef_core::{CheckMode, QObjectKind, Rect, Style, Survey};

/// Equivalent of [`super::MINIMAL`].
pub fn minimal() -> Survey {
    SurveyBuilder::new()
        .title("Minimal")
        .qobject(
            QObjectBuilder::new(QObjectKind::Text)
                .index(&[1])
                .question("Anything else?"),
        )
        .build()
}

/// Equivalent of [`super::COURSE_EVALUATION`].
pub fn course_evaluation() -> Survey {
    let checkbox = |x: f64, y: f64| Rect::new(x, y, 5.08, 5.08);

    SurveyBuilder::new()
        .title("Course evaluation")
        .global_id("CE-2025")
        .print_ids(true, false)
        .pages(2)
        .checkmode(CheckMode::CheckCorrect)
        .style(Style::Classic)
        .duplex(true)
        .a4()
        .info("Lecturer", "Dr. Ada Lovelace")
        .info("Term", "Winter 2025")
        .qobject(QObjectBuilder::new(QObjectKind::Head).index(&[1]).question("General"))
        .qobject(
            QObjectBuilder::new(QObjectKind::Choice)
                .index(&[1, 1])
                .question("How did you hear about the course?")
                .answer("Friends")
                .answer("Website")
                .checkbox(1, checkbox(25.4, 43.0))
                .checkbox_with_form(1, checkbox(76.2, 43.0), "ellipse"),
        )
        .qobject(
            QObjectBuilder::new(QObjectKind::Range)
                .index(&[1, 2])
                .question("Overall rating")
                .lower(1, "poor")
                .upper(5, "excellent")
                .checkbox(1, checkbox(25.4, 93.8)),
        )
        .qobject(QObjectBuilder::new(QObjectKind::Head).index(&[2]).question("Feedback"))
        .qobject(
            QObjectBuilder::new(QObjectKind::Text)
                .index(&[2, 1])
                .question("What should be improved?")
                .textbox(2, Rect::new(25.4, 144.6, 127.0, 50.8)),
        )
        .build()
}

/// Equivalent of [`super::NESTED_NUMBERING`].
pub fn nested_numbering() -> Survey {
    SurveyBuilder::new()
        .title("Numbering")
        .qobject(QObjectBuilder::new(QObjectKind::Head).index(&[1]).question("Intro"))
        .qobject(QObjectBuilder::new(QObjectKind::Text).index(&[1, 1]).question("First"))
        .qobject(QObjectBuilder::new(QObjectKind::Text).index(&[1, 2]).question("Second"))
        .qobject(QObjectBuilder::new(QObjectKind::Head).index(&[2]).question("Body"))
        .qobject(QObjectBuilder::new(QObjectKind::Head).index(&[2, 1]).question("Detail"))
        .qobject(QObjectBuilder::new(QObjectKind::Mark).index(&[2, 1, 1]).question("Deep"))
        .qobject(QObjectBuilder::new(QObjectKind::Question).index(&[2, 1, 2]).question("Deeper"))
        .build()
}

/// Equivalent of [`super::SINGLE_PAGE_DUPLEX`] after parsing.
pub fn single_page() -> Survey {
    SurveyBuilder::new().title("Flyer").pages(1).duplex(false).build()
}

/// The empty survey.
pub fn empty() -> Survey {
    Survey::new()
}

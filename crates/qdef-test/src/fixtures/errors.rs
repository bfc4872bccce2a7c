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

//! Error test fixtures.

use qdef_core::QdefErrorKind;

/// Invalid definition texts for parser error testing.
///
/// Each tuple contains (name, text, expected error kind, expected line).
pub fn invalid_definition_samples() -> Vec<(&'static str, &'static str, QdefErrorKind, usize)> {
    use QdefErrorKind::*;
    vec![
        ("invalid_line", "Title = ok\nTitle Foo\n", Syntax, 2),
        ("empty_key", "Title = ok\n= orphan\n", Syntax, 2),
        ("control_character", "Title = \u{7}\n", Syntax, 1),
        ("unknown_kind", "QObject-Slider = x\n", UnknownKind, 1),
        ("answer_outside_qobject", "Answer-Choice = Yes\n", Context, 1),
        ("range_outside_qobject", "Range-Lower = 1 bad\n", Context, 1),
        ("range_on_choice", "QObject-Choice = c\nRange-Lower = 1 bad\n", Context, 2),
        (
            "box_outside_qobject",
            "PageSize = 100pt, 100pt\nBox = Checkbox, 1, 1pt, 1pt, 1pt, 1pt\n",
            Context,
            2,
        ),
        (
            "box_before_page_size",
            "QObject-Choice = c\nBox = Checkbox, 1, 1pt, 1pt, 1pt, 1pt\n",
            Context,
            2,
        ),
        ("invalid_range_field", "QObject-Range = r\nRange-Middle = 1 x\n", RangeField, 2),
        (
            "textbox_five_fields",
            "PageSize = 100pt, 100pt\nQObject-Text = t\nBox = Textbox, 1, 1pt, 1pt, 1pt\n",
            BoxRecord,
            3,
        ),
        (
            "textbox_seven_fields",
            "PageSize = 100pt, 100pt\nQObject-Text = t\nBox = Textbox, 1, 1pt, 1pt, 1pt, 1pt, x\n",
            BoxRecord,
            3,
        ),
        (
            "checkbox_eight_fields",
            "PageSize = 100pt, 100pt\nQObject-Choice = c\nBox = Checkbox, 1, 1pt, 1pt, 1pt, 1pt, x, y\n",
            BoxRecord,
            3,
        ),
        (
            "unknown_box_kind",
            "PageSize = 100pt, 100pt\nQObject-Choice = c\nBox = Radio, 1, 1pt, 1pt, 1pt, 1pt\n",
            BoxRecord,
            3,
        ),
        ("invalid_checkmode", "CheckMode = tick\n", Config, 1),
        ("invalid_style", "Style = fancy\n", Config, 1),
        ("invalid_pages", "Pages = two\n", Value, 1),
        ("missing_pt_suffix", "PageSize = 100, 100\n", Value, 1),
        ("invalid_range_position", "QObject-Range = r\nRange-Upper = high good\n", Value, 2),
    ]
}

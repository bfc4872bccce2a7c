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

//! Canonical test fixtures for questionnaire definitions.
//!
//! - **definitions**: definition file texts
//! - **surveys**: the surveys those texts parse into, built directly
//! - **errors**: invalid texts with the error each one raises
//! - **builders**: builder pattern for customizable fixtures

pub mod builders;
mod definitions;
pub mod errors;
mod surveys;

pub use definitions::*;
pub use surveys::*;

use crate::FixtureList;

/// Returns all survey fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("minimal", minimal),
        ("course_evaluation", course_evaluation),
        ("nested_numbering", nested_numbering),
        ("single_page", single_page),
        ("empty", empty),
    ]
}

/// Pairs of definition text and the survey it parses into.
pub fn text_and_survey() -> Vec<(&'static str, &'static str, fn() -> qdef_core::Survey)> {
    vec![
        ("minimal", MINIMAL, minimal),
        ("course_evaluation", COURSE_EVALUATION, course_evaluation),
        ("nested_numbering", NESTED_NUMBERING, nested_numbering),
        ("single_page", SINGLE_PAGE_DUPLEX, single_page),
        ("empty", EMPTY, empty),
    ]
}

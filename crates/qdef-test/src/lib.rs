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

//! Shared test fixtures and utilities for questionnaire definition crates.
//!
//! # Quick Start
//!
//! ```rust
//! use qdef_test::fixtures;
//!
//! // Definition texts and the surveys they parse into
//! let text = fixtures::COURSE_EVALUATION;
//! let expected = fixtures::course_evaluation();
//!
//! let parsed = qdef_core::parse(text.as_bytes()).unwrap();
//! qdef_test::assert_surveys_close(&parsed, &expected, 1e-9);
//!
//! // Error cases
//! for (name, text, kind, line) in fixtures::errors::invalid_definition_samples() {
//!     let err = qdef_core::parse(text.as_bytes()).unwrap_err();
//!     assert_eq!((err.kind, err.line), (kind, line), "{}", name);
//! }
//! ```

use qdef_core::Survey;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Survey)>;

/// Canonical test fixtures.
pub mod fixtures;

/// Fixture counting utilities.
pub mod counts;

/// Tolerant survey comparison.
pub mod compare;

pub use compare::{assert_surveys_close, compare_surveys};
pub use counts::{count_answers, count_boxes, count_range_labels};
pub use fixtures::*;

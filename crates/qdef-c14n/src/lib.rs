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

//! Canonical writer for questionnaire definition files.
//!
//! Produces a deterministic `Key = value` rendition of a [`Survey`]:
//!
//! - header records in a fixed order, info entries sorted by key
//! - qobjects in document order with their answers, range labels and boxes
//! - geometry in points measured from the bottom of the page
//!
//! Parsing the output again yields the same millimeter geometry up to the
//! configured point precision.
//!
//! # Examples
//!
//! ```
//! use qdef_c14n::{canonicalize, canonicalize_with_config, CanonicalConfig};
//!
//! let survey = qdef_core::parse(b"Title = Feedback\nQObject-Text = 1.Comments\n").unwrap();
//! let output = canonicalize(&survey).unwrap();
//! assert!(output.starts_with("Title = Feedback\n"));
//!
//! let compact = CanonicalConfig::new().with_separate_qobjects(false);
//! let output = canonicalize_with_config(&survey, &compact).unwrap();
//! assert!(output.ends_with("QObject-Text = 1.Comments\n"));
//! ```

mod config;
mod writer;

pub use config::{CanonicalConfig, CanonicalConfigBuilder, DEFAULT_PRECISION};
pub use writer::CanonicalWriter;

use qdef_core::{QdefResult, Survey};

/// Canonicalize a survey using the default configuration.
///
/// # Errors
///
/// Returns a `Conversion` error when the survey cannot be expressed as
/// records: boxes without a paper size, values containing line breaks,
/// info keys that collide with record keys, or question texts that would
/// be read back as part of the index.
pub fn canonicalize(survey: &Survey) -> QdefResult<String> {
    canonicalize_with_config(survey, &CanonicalConfig::default())
}

/// Canonicalize a survey with custom configuration.
pub fn canonicalize_with_config(survey: &Survey, config: &CanonicalConfig) -> QdefResult<String> {
    let mut writer = CanonicalWriter::new(config.clone());
    writer.write_survey(survey)
}

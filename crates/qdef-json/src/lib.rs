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

//! Survey JSON Conversion
//!
//! Converts parsed surveys to JSON and back. The JSON layout mirrors the
//! object model: box geometry is in millimeters from the top-left page
//! corner, exactly as the parser stores it.
//!
//! # Examples
//!
//! ```rust
//! use qdef_json::{json_to_survey, survey_to_json};
//!
//! let input = "Title = Feedback\nPageSize = 595pt, 842pt\nQObject-Text = 1. Comments?\n";
//! let survey = qdef_core::parse(input.as_bytes()).unwrap();
//!
//! let json = survey_to_json(&survey).unwrap();
//! let back = json_to_survey(&json).unwrap();
//! assert_eq!(back.title, survey.title);
//! assert_eq!(back.questionnaire.qobjects.len(), 1);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use qdef_json::{to_json, ToJsonConfig};
//!
//! let survey = qdef_core::parse(b"Title = T\nSurveyor = Alice\n").unwrap();
//! let config = ToJsonConfig {
//!     pretty: false,
//!     include_info: false,
//! };
//! let json = to_json(&survey, &config).unwrap();
//! assert!(!json.contains("Surveyor"));
//! ```

mod from_json;
mod to_json;

pub use from_json::{from_json, from_json_value, JsonConversionError};
pub use to_json::{to_json, to_json_value, ToJsonConfig};

use qdef_core::Survey;

/// Convert a survey to a pretty-printed JSON string
pub fn survey_to_json(survey: &Survey) -> Result<String, String> {
    to_json(survey, &ToJsonConfig::default())
}

/// Convert a JSON string to a survey
pub fn json_to_survey(json: &str) -> Result<Survey, String> {
    from_json(json).map_err(|e| e.to_string())
}

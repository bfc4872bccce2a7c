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

//! Conversion commands

use super::{parse_file, write_output};
use crate::error::CliError;
use qdef_json::ToJsonConfig;

/// Convert a definition file to JSON.
///
/// ```no_run
/// use qdef_cli::commands::to_json;
///
/// # fn main() -> Result<(), qdef_cli::error::CliError> {
/// to_json("survey.qdef", Some("survey.json"), false, true)?;
/// # Ok(())
/// # }
/// ```
pub fn to_json(
    file: &str,
    output: Option<&str>,
    compact: bool,
    include_info: bool,
) -> Result<(), CliError> {
    let survey = parse_file(file)?;
    let config = ToJsonConfig {
        pretty: !compact,
        include_info,
    };
    let mut json = qdef_json::to_json(&survey, &config).map_err(CliError::JsonConversion)?;
    json.push('\n');
    write_output(&json, output)
}

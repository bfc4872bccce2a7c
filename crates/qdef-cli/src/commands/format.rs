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

//! Format command - rewrite a definition file in canonical form

use super::{read_file, write_output};
use crate::error::CliError;
use qdef_c14n::{canonicalize_with_config, CanonicalConfig};

/// Format a definition file to canonical form.
///
/// In check mode nothing is written; the command fails with
/// [`CliError::NotCanonical`] when the file differs from its canonical form
/// (line endings and surrounding whitespace aside).
///
/// ```no_run
/// use qdef_cli::commands::format;
///
/// # fn main() -> Result<(), qdef_cli::error::CliError> {
/// format("survey.qdef", Some("canonical.qdef"), false, 4)?;
/// format("canonical.qdef", None, true, 4)?;
/// # Ok(())
/// # }
/// ```
pub fn format(
    file: &str,
    output: Option<&str>,
    check: bool,
    precision: usize,
) -> Result<(), CliError> {
    let content = read_file(file)?;
    let survey = qdef_core::parse(&content)?;

    let config = CanonicalConfig::default().with_precision(precision);
    let canonical = canonicalize_with_config(&survey, &config)
        .map_err(|e| CliError::canonicalization(e.to_string()))?;

    if check {
        let original = String::from_utf8_lossy(&content).replace("\r\n", "\n");
        if canonical.trim() != original.trim() {
            return Err(CliError::NotCanonical);
        }
        println!("File is in canonical form");
        Ok(())
    } else {
        write_output(&canonical, output)
    }
}

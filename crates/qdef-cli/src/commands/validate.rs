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

//! Validate command - definition file syntax and structure validation

use super::{collect_stats, read_file};
use crate::error::CliError;
use colored::Colorize;

/// Validate a definition file.
///
/// Prints a check mark and a short summary on success. On failure prints a
/// cross and returns the parse error, which carries the offending line.
///
/// ```no_run
/// use qdef_cli::commands::validate;
///
/// # fn main() -> Result<(), qdef_cli::error::CliError> {
/// validate("survey.qdef")?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;

    match qdef_core::parse(&content) {
        Ok(survey) => {
            let stats = collect_stats(&survey);
            println!("{} {}", "✓".green().bold(), file);
            println!("  Title: {}", survey.title);
            println!("  Pages: {}", survey.questionnaire.page_count);
            println!("  QObjects: {}", stats.qobject_count());
            println!("  Boxes: {}", stats.box_count());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            if let Some(context) = &e.context {
                println!("  {} {}", format!("{}:", e.line).dimmed(), context);
            }
            Err(e.into())
        }
    }
}

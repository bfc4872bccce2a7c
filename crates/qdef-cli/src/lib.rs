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

//! Command-line interface for questionnaire definition files.
//!
//! # Commands
//!
//! - **validate**: parse a definition file and report the first error
//! - **inspect**: print layout settings and the qobject outline
//! - **format**: rewrite a definition file in canonical form, or check it
//! - **find-box**: hit-test a page position against the answer boxes
//! - **to-json**: export the parsed survey as JSON
//!
//! # Examples
//!
//! ```no_run
//! use qdef_cli::commands::{format, to_json, validate};
//!
//! # fn main() -> Result<(), qdef_cli::error::CliError> {
//! validate("survey.qdef")?;
//! to_json("survey.qdef", Some("survey.json"), false, true)?;
//! format("survey.qdef", None, true, 4)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than 64 MB are rejected before reading. The limit can
//! be changed with the `QDEF_MAX_FILE_SIZE` environment variable (bytes).

pub mod cli;
pub mod commands;
pub mod error;

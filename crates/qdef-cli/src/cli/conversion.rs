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

//! Export commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Conversion commands.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert a definition file to JSON
    ToJson {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Compact JSON (no pretty printing)
        #[arg(long)]
        compact: bool,

        /// Leave out the info map
        #[arg(long)]
        no_info: bool,
    },
}

impl ConversionCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToJson {
                file,
                output,
                compact,
                no_info,
            } => commands::to_json(&file, output.as_deref(), compact, !no_info),
        }
    }
}

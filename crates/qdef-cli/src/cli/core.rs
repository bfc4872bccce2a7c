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

//! Commands operating on a single definition file.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Core qdef commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate a definition file
    ///
    /// Parses the file and prints a short summary, or the first error with
    /// its line number.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the parsed survey
    ///
    /// Shows layout settings and the qobject outline. With --verbose, also
    /// metadata, answers, range labels and box geometry.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Rewrite a definition file in canonical form
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,

        /// Decimal places for point values
        #[arg(long, default_value_t = qdef_c14n::DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Find the answer box at a page position
    ///
    /// Coordinates are millimeters from the top-left corner of the page.
    FindBox {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Page number (1-based)
        #[arg(long)]
        page: u32,

        /// Horizontal position in mm
        #[arg(long)]
        x: f64,

        /// Vertical position in mm
        #[arg(long)]
        y: f64,

        /// Distance in mm within which a textbox edge counts as hit
        #[arg(long, default_value_t = 1.0)]
        tolerance: f64,
    },
}

impl CoreCommands {
    pub fn execute(self, verbose: bool) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file } => commands::validate(&file),
            CoreCommands::Inspect { file } => commands::inspect(&file, verbose),
            CoreCommands::Format {
                file,
                output,
                check,
                precision,
            } => commands::format(&file, output.as_deref(), check, precision),
            CoreCommands::FindBox {
                file,
                page,
                x,
                y,
                tolerance,
            } => commands::find_box(&file, page, x, y, tolerance),
        }
    }
}

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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: commands that work on one definition file in place
//!   (validate, inspect, format, find-box)
//! - [`conversion`]: export commands (to-json)

mod conversion;
mod core;

use crate::error::CliError;
use clap::Subcommand;

pub use conversion::ConversionCommands;
pub use core::CoreCommands;

/// Top-level CLI commands enum.
///
/// ```no_run
/// use clap::Parser;
/// use qdef_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Conversion(ConversionCommands),
}

impl Commands {
    /// Execute the command. `verbose` widens human-readable output.
    pub fn execute(self, verbose: bool) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(verbose),
            Commands::Conversion(cmd) => cmd.execute(),
        }
    }
}

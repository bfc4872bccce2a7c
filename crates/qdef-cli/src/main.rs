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

//! qdef command line interface

use clap::Parser;
use qdef_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// qdef - questionnaire definition toolkit
///
/// ```bash
/// # Check a definition file written by the LaTeX class
/// qdef validate survey.qdef
///
/// # Which box is at 30mm/50mm on page 2?
/// qdef find-box survey.qdef --page 2 --x 30 --y 50
///
/// # Export for other tools
/// qdef to-json survey.qdef --output survey.json
/// ```
#[derive(Parser)]
#[command(name = "qdef")]
#[command(author, version, about = "qdef - questionnaire definition toolkit", long_about = None)]
struct Cli {
    /// Verbose output and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute(cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

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

//! Find-box command - hit-test a page position

use super::parse_file;
use crate::error::CliError;
use colored::Colorize;
use qdef_core::{BoxRef, Edge, Survey};

/// Report the answer box at a position on a page.
///
/// The interior test runs first; when it misses, textbox edges within
/// `tolerance` millimeters are reported instead. A miss is an error so that
/// scripts can test the exit status.
pub fn find_box(file: &str, page: u32, x: f64, y: f64, tolerance: f64) -> Result<(), CliError> {
    if page == 0 {
        return Err(CliError::invalid_input("page numbers start at 1"));
    }
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(CliError::invalid_input("tolerance must not be negative"));
    }

    let survey = parse_file(file)?;
    match locate(&survey, page, x, y, tolerance) {
        Some((at, edge)) => {
            println!("{}", describe(&survey, at, edge));
            Ok(())
        }
        None => Err(CliError::NoBox { page, x, y }),
    }
}

fn locate(survey: &Survey, page: u32, x: f64, y: f64, tolerance: f64) -> Option<(BoxRef, Option<Edge>)> {
    let questionnaire = &survey.questionnaire;
    if let Some(at) = questionnaire.find_box(page, x, y) {
        let edge = questionnaire
            .box_at(at)
            .and_then(|b| b.find_edge(x, y, tolerance, tolerance));
        return Some((at, edge));
    }
    questionnaire
        .find_edge(page, x, y, tolerance, tolerance)
        .map(|(at, edge)| (at, Some(edge)))
}

fn describe(survey: &Survey, at: BoxRef, edge: Option<Edge>) -> String {
    let qobject = &survey.questionnaire.qobjects[at.qobject];
    let answer_box = &qobject.boxes[at.answer_box];
    let index = qobject
        .index
        .as_ref()
        .map_or_else(|| "-".to_string(), |i| i.to_string());

    let mut out = format!(
        "{} {} #{} of {} {} {}",
        "✓".green().bold(),
        answer_box.kind.name(),
        at.answer_box + 1,
        qobject.kind().as_str(),
        index,
        qobject.question
    );
    if let Some(edge) = edge {
        out.push_str(&format!(" [{:?} edge]", edge));
    }
    out
}

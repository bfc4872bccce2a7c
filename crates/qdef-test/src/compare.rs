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

//! Tolerant survey comparison.
//!
//! Geometry goes through floating point conversions, so exact equality is
//! too strict for round-trip tests. Everything else must match exactly.

use qdef_core::{AnswerBox, QObject, Survey};

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

fn close_opt(a: Option<f64>, b: Option<f64>, tolerance: f64) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => close(a, b, tolerance),
        (None, None) => true,
        _ => false,
    }
}

fn compare_box(path: &str, a: &AnswerBox, b: &AnswerBox, tolerance: f64) -> Result<(), String> {
    if a.kind != b.kind || a.page != b.page {
        return Err(format!("{}: {:?} != {:?}", path, a, b));
    }
    let (ra, rb) = (&a.rect, &b.rect);
    let fields = [
        ("x", ra.x, rb.x),
        ("y", ra.y, rb.y),
        ("width", ra.width, rb.width),
        ("height", ra.height, rb.height),
    ];
    for (name, va, vb) in fields {
        if !close(va, vb, tolerance) {
            return Err(format!("{}.{}: {} != {}", path, name, va, vb));
        }
    }
    Ok(())
}

fn compare_qobject(path: &str, a: &QObject, b: &QObject, tolerance: f64) -> Result<(), String> {
    if a.kind() != b.kind() {
        return Err(format!("{}: kind {} != {}", path, a.kind(), b.kind()));
    }
    if a.index != b.index {
        return Err(format!("{}: index {:?} != {:?}", path, a.index, b.index));
    }
    if a.question != b.question {
        return Err(format!("{}: question {:?} != {:?}", path, a.question, b.question));
    }
    if a.answers != b.answers {
        return Err(format!("{}: answers {:?} != {:?}", path, a.answers, b.answers));
    }
    if a.range() != b.range() {
        return Err(format!("{}: range {:?} != {:?}", path, a.range(), b.range()));
    }
    if a.boxes.len() != b.boxes.len() {
        return Err(format!(
            "{}: {} boxes != {} boxes",
            path,
            a.boxes.len(),
            b.boxes.len()
        ));
    }
    for (i, (ba, bb)) in a.boxes.iter().zip(&b.boxes).enumerate() {
        compare_box(&format!("{}.boxes[{}]", path, i), ba, bb, tolerance)?;
    }
    Ok(())
}

/// Compare two surveys, allowing `tolerance` millimeters of difference in
/// geometry. Returns a description of the first difference.
pub fn compare_surveys(a: &Survey, b: &Survey, tolerance: f64) -> Result<(), String> {
    if a.title != b.title {
        return Err(format!("title {:?} != {:?}", a.title, b.title));
    }
    if a.global_id != b.global_id {
        return Err(format!("global_id {:?} != {:?}", a.global_id, b.global_id));
    }
    if a.info != b.info {
        return Err(format!("info {:?} != {:?}", a.info, b.info));
    }

    let (da, db) = (&a.defs, &b.defs);
    if da.print_questionnaire_id != db.print_questionnaire_id
        || da.print_survey_id != db.print_survey_id
        || da.checkmode != db.checkmode
        || da.duplex != db.duplex
        || da.style != db.style
    {
        return Err(format!("defs {:?} != {:?}", da, db));
    }
    if !close_opt(da.paper_width, db.paper_width, tolerance)
        || !close_opt(da.paper_height, db.paper_height, tolerance)
    {
        return Err(format!(
            "paper size {:?}x{:?} != {:?}x{:?}",
            da.paper_width, da.paper_height, db.paper_width, db.paper_height
        ));
    }

    let (qa, qb) = (&a.questionnaire, &b.questionnaire);
    if qa.page_count != qb.page_count {
        return Err(format!("page_count {} != {}", qa.page_count, qb.page_count));
    }
    if qa.qobjects.len() != qb.qobjects.len() {
        return Err(format!(
            "{} qobjects != {} qobjects",
            qa.qobjects.len(),
            qb.qobjects.len()
        ));
    }
    for (i, (oa, ob)) in qa.qobjects.iter().zip(&qb.qobjects).enumerate() {
        compare_qobject(&format!("qobjects[{}]", i), oa, ob, tolerance)?;
    }
    Ok(())
}

/// Assert that two surveys match up to `tolerance` millimeters.
///
/// # Panics
///
/// Panics with the first difference.
pub fn assert_surveys_close(a: &Survey, b: &Survey, tolerance: f64) {
    if let Err(difference) = compare_surveys(a, b, tolerance) {
        panic!("surveys differ: {}", difference);
    }
}

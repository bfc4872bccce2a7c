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

//! Inspect command - survey structure visualization

use super::{collect_stats, parse_file};
use crate::error::CliError;
use colored::Colorize;
use qdef_core::{AnswerBox, BoxKind, QObject, Survey};

/// Print the parsed survey as a colored outline.
///
/// Always shows the layout settings and one line per qobject. In verbose
/// mode also shows the info map, answers, range labels and box geometry
/// (millimeters, top-left origin).
///
/// ```no_run
/// use qdef_cli::commands::inspect;
///
/// # fn main() -> Result<(), qdef_cli::error::CliError> {
/// inspect("survey.qdef", true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, verbose: bool) -> Result<(), CliError> {
    let survey = parse_file(file)?;
    print!("{}", render(&survey, verbose));
    Ok(())
}

fn render(survey: &Survey, verbose: bool) -> String {
    let mut out = String::new();
    let defs = &survey.defs;

    out.push_str(&format!("{}\n\n", "Survey".bold().underline()));
    out.push_str(&format!("{}  {}\n", "Title:".cyan(), survey.title));
    if let Some(global_id) = &survey.global_id {
        out.push_str(&format!("{}  {}\n", "GlobalID:".cyan(), global_id));
    }
    out.push_str(&format!(
        "{}  {}\n",
        "Pages:".cyan(),
        survey.questionnaire.page_count
    ));
    out.push_str(&format!(
        "{}  {} / {}\n",
        "Mode:".cyan(),
        defs.checkmode.as_str(),
        defs.style.as_str()
    ));
    out.push_str(&format!("{}  {}\n", "Duplex:".cyan(), defs.duplex));
    if let (Some(width), Some(height)) = (defs.paper_width, defs.paper_height) {
        out.push_str(&format!(
            "{}  {} x {} mm\n",
            "Paper:".cyan(),
            width,
            height
        ));
    }

    if verbose && !survey.info.is_empty() {
        out.push_str(&format!("\n{}\n", "Info:".cyan()));
        for (key, value) in &survey.info {
            out.push_str(&format!("  {}: {}\n", key.yellow(), value));
        }
    }

    let stats = collect_stats(survey);
    out.push_str(&format!(
        "\n{} ({} qobjects, {} boxes)\n",
        "Outline:".cyan(),
        stats.qobject_count(),
        stats.box_count()
    ));
    for qobject in &survey.questionnaire.qobjects {
        render_qobject(&mut out, qobject, verbose);
    }
    out
}

fn render_qobject(out: &mut String, qobject: &QObject, verbose: bool) {
    let index = match &qobject.index {
        Some(index) => index.to_string(),
        None => "-".to_string(),
    };
    let depth = qobject.index.as_ref().map_or(1, |i| i.depth().max(1));
    let prefix = "  ".repeat(depth);

    out.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        index.green(),
        qobject.kind().as_str().magenta(),
        qobject.question
    ));
    if !verbose {
        return;
    }

    for answer in &qobject.answers {
        out.push_str(&format!("{}  - {}\n", prefix, answer.text));
    }
    if let Some(range) = qobject.range() {
        for (position, labels) in range {
            out.push_str(&format!(
                "{}  [{}] {} / {}\n",
                prefix,
                position,
                labels.lower.as_deref().unwrap_or("~").dimmed(),
                labels.upper.as_deref().unwrap_or("~").dimmed()
            ));
        }
    }
    for answer_box in &qobject.boxes {
        out.push_str(&format!("{}  {}\n", prefix, format_box(answer_box)));
    }
}

fn format_box(answer_box: &AnswerBox) -> String {
    let rect = &answer_box.rect;
    let form = match &answer_box.kind {
        BoxKind::Checkbox { form: Some(form) } => format!(" ({})", form),
        _ => String::new(),
    };
    format!(
        "{}{} p{} @ {:.3},{:.3} {:.3}x{:.3}",
        answer_box.kind.name().yellow(),
        form,
        answer_box.page,
        rect.x,
        rect.y,
        rect.width,
        rect.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"Title = Demo
Lecturer = Ada
PageSize = 597.50787pt, 845.04684pt
QObject-Head = 1.Intro
QObject-Range = Rate
Range-Lower = 1 bad
Box = Checkbox, 1, 72.27pt, 722.7pt, 14.454pt, 14.454pt, ellipse
";

    fn plain(verbose: bool) -> String {
        colored::control::set_override(false);
        let survey = qdef_core::parse(SAMPLE).unwrap();
        render(&survey, verbose)
    }

    #[test]
    fn test_render_outline() {
        let out = plain(false);
        assert!(out.contains("Title:  Demo"));
        assert!(out.contains("Paper:  210 x 297 mm"));
        assert!(out.contains("(2 qobjects, 1 boxes)"));
        assert!(out.contains("  1 Head Intro"));
        assert!(!out.contains("Lecturer"));
        assert!(!out.contains("ellipse"));
    }

    #[test]
    fn test_render_verbose() {
        let out = plain(true);
        assert!(out.contains("Lecturer: Ada"));
        assert!(out.contains("[1] bad / ~"));
        assert!(out.contains("Checkbox (ellipse) p1 @ 25.400,43.000 5.080x5.080"));
    }
}

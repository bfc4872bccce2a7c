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

//! Fixture counting utilities.

use qdef_core::Survey;

/// Count boxes of all qobjects.
pub fn count_boxes(survey: &Survey) -> usize {
    survey.questionnaire.boxes().count()
}

/// Count registered answers of all qobjects.
pub fn count_answers(survey: &Survey) -> usize {
    survey
        .questionnaire
        .qobjects
        .iter()
        .map(|q| q.answers.len())
        .sum()
}

/// Count range labels (lower and upper) of all qobjects.
pub fn count_range_labels(survey: &Survey) -> usize {
    survey
        .questionnaire
        .qobjects
        .iter()
        .filter_map(|q| q.range())
        .flat_map(|range| range.values())
        .map(|labels| labels.lower.is_some() as usize + labels.upper.is_some() as usize)
        .sum()
}

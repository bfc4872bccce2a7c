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

//! JSON round-trip tests over the shared fixtures.

use qdef_json::{from_json, json_to_survey, survey_to_json, to_json, JsonConversionError, ToJsonConfig};
use qdef_test::{compare_surveys, fixtures};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_fixture_surveys_roundtrip() {
    for (name, make) in fixtures::all() {
        let survey = make();
        let json = survey_to_json(&survey).unwrap();
        let back = json_to_survey(&json).unwrap();
        if let Err(diff) = compare_surveys(&survey, &back, TOLERANCE) {
            panic!("{}: {}", name, diff);
        }
    }
}

#[test]
fn test_parsed_definitions_roundtrip() {
    for (name, text, _) in fixtures::text_and_survey() {
        let survey = qdef_core::parse(text.as_bytes()).unwrap();
        let json = survey_to_json(&survey).unwrap();
        let back = json_to_survey(&json).unwrap();
        if let Err(diff) = compare_surveys(&survey, &back, TOLERANCE) {
            panic!("{}: {}", name, diff);
        }
    }
}

#[test]
fn test_compact_output_is_single_line() {
    let config = ToJsonConfig {
        pretty: false,
        include_info: true,
    };
    let json = to_json(&fixtures::course_evaluation(), &config).unwrap();
    assert!(!json.contains('\n'));
    assert!(json.contains("\"Lecturer\":\"Dr. Ada Lovelace\""));
}

#[test]
fn test_without_info_roundtrips_to_empty_info() {
    let config = ToJsonConfig {
        pretty: true,
        include_info: false,
    };
    let survey = fixtures::course_evaluation();
    let json = to_json(&survey, &config).unwrap();
    let back = from_json(&json).unwrap();
    assert!(back.info.is_empty());

    let mut expected = survey;
    expected.info.clear();
    compare_surveys(&expected, &back, TOLERANCE).unwrap();
}

#[test]
fn test_box_geometry_in_millimeters() {
    let json = survey_to_json(&fixtures::course_evaluation()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first_box = &value["questionnaire"]["qobjects"][1]["boxes"][0];
    let x = first_box["x"].as_f64().unwrap();
    assert!((x - 25.4).abs() < 1e-9);
    assert_eq!(first_box["page"], 1);
}

#[test]
fn test_rejects_non_object_root() {
    let err = from_json("\"survey\"").unwrap_err();
    assert!(matches!(err, JsonConversionError::InvalidRoot(_)));
}

#[test]
fn test_json_to_survey_reports_message() {
    let err = json_to_survey("{").unwrap_err();
    assert!(err.starts_with("JSON parse error"));
}

#[test]
fn test_answer_kind_survives() {
    let survey = qdef_core::parse(b"QObject-Choice = 1.Pick\nAnswer-Other = x\n").unwrap();
    let json = survey_to_json(&survey).unwrap();
    let back = json_to_survey(&json).unwrap();
    assert_eq!(back.questionnaire.qobjects[0].answers[0].kind, "Other");
    assert_eq!(back.questionnaire.qobjects[0].answers[0].text, "x");
}

#[test]
fn test_single_page_duplex_survey_rejected() {
    let mut survey = fixtures::single_page();
    survey.defs.duplex = true;
    let json = survey_to_json(&survey).unwrap();
    let err = from_json(&json).unwrap_err();
    assert!(matches!(err, JsonConversionError::Inconsistent(_)));
}

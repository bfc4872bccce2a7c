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

//! JSON to Survey conversion

use qdef_core::Survey;
use serde_json::Value as JsonValue;

/// Errors that can occur during JSON to survey conversion
#[derive(Debug, Clone, thiserror::Error)]
pub enum JsonConversionError {
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// Root value must be an object
    #[error("Root must be a JSON object, found {0}")]
    InvalidRoot(String),

    /// The JSON does not have the shape of a survey
    #[error("Invalid survey: {0}")]
    InvalidSurvey(String),

    /// The survey could not have come out of a definition file
    #[error("Inconsistent survey: {0}")]
    Inconsistent(String),
}

impl From<serde_json::Error> for JsonConversionError {
    fn from(err: serde_json::Error) -> Self {
        JsonConversionError::ParseError(err.to_string())
    }
}

/// Convert a JSON string to a survey
///
/// ```text
/// use qdef_json::from_json;
///
/// let survey = from_json(&json_text)?;
/// ```
pub fn from_json(json: &str) -> Result<Survey, JsonConversionError> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(&value)
}

/// Convert a serde_json::Value to a survey
pub fn from_json_value(value: &JsonValue) -> Result<Survey, JsonConversionError> {
    if !value.is_object() {
        return Err(JsonConversionError::InvalidRoot(json_type_name(value).to_string()));
    }

    let mut value = value.clone();
    // Exported without info
    if let JsonValue::Object(map) = &mut value {
        map.entry("info")
            .or_insert_with(|| JsonValue::Object(Default::default()));
    }

    let survey: Survey = serde_json::from_value(value)
        .map_err(|e| JsonConversionError::InvalidSurvey(e.to_string()))?;
    validate(&survey)?;
    Ok(survey)
}

/// Check the invariants the parser guarantees.
fn validate(survey: &Survey) -> Result<(), JsonConversionError> {
    if survey.questionnaire.page_count == 1 && survey.defs.duplex {
        return Err(JsonConversionError::Inconsistent(
            "single page questionnaire cannot be duplex".to_string(),
        ));
    }

    let has_boxes = survey.questionnaire.boxes().next().is_some();
    if has_boxes && survey.paper_height().is_none() {
        return Err(JsonConversionError::Inconsistent(
            "boxes present but no paper size".to_string(),
        ));
    }

    for (position, qobject) in survey.questionnaire.qobjects.iter().enumerate() {
        if let Some(index) = &qobject.index {
            if index.depth() == 0 {
                return Err(JsonConversionError::Inconsistent(format!(
                    "qobject {} has an empty index",
                    position
                )));
            }
        }
    }
    Ok(())
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdef_core::QObjectKind;
    use serde_json::json;

    #[test]
    fn test_invalid_json() {
        let err = from_json("{not json").unwrap_err();
        assert!(matches!(err, JsonConversionError::ParseError(_)));
    }

    #[test]
    fn test_invalid_root() {
        let err = from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, JsonConversionError::InvalidRoot(ref t) if t == "array"));
        assert_eq!(err.to_string(), "Root must be a JSON object, found array");
    }

    #[test]
    fn test_missing_fields() {
        let err = from_json_value(&json!({"title": "T"})).unwrap_err();
        assert!(matches!(err, JsonConversionError::InvalidSurvey(_)));
    }

    fn minimal_json() -> JsonValue {
        json!({
            "title": "T",
            "global_id": null,
            "defs": {
                "print_questionnaire_id": false,
                "print_survey_id": false,
                "checkmode": "fill",
                "duplex": true,
                "style": "qr",
                "paper_width": null,
                "paper_height": null
            },
            "questionnaire": {
                "page_count": 2,
                "qobjects": [{
                    "variant": "Text",
                    "index": [1],
                    "question": "Q",
                    "page_number": null,
                    "answers": [],
                    "boxes": []
                }]
            }
        })
    }

    #[test]
    fn test_missing_info_defaults_to_empty() {
        let survey = from_json_value(&minimal_json()).unwrap();
        assert!(survey.info.is_empty());
        assert_eq!(survey.title, "T");
        assert_eq!(survey.questionnaire.qobjects[0].kind(), QObjectKind::Text);
    }

    #[test]
    fn test_boxes_without_paper_size() {
        let mut value = minimal_json();
        value["questionnaire"]["qobjects"][0]["boxes"] = json!([{
            "kind": "Textbox", "page": 1, "x": 1.0, "y": 1.0, "width": 1.0, "height": 1.0
        }]);
        let err = from_json_value(&value).unwrap_err();
        assert!(matches!(err, JsonConversionError::Inconsistent(_)));
    }

    #[test]
    fn test_single_page_duplex_rejected() {
        let mut value = minimal_json();
        value["questionnaire"]["page_count"] = json!(1);
        let err = from_json_value(&value).unwrap_err();
        assert!(matches!(err, JsonConversionError::Inconsistent(ref m) if m.contains("duplex")));

        value["defs"]["duplex"] = json!(false);
        let survey = from_json_value(&value).unwrap();
        assert_eq!(survey.questionnaire.page_count, 1);
        assert!(!survey.defs.duplex);
    }

    #[test]
    fn test_empty_index_rejected() {
        let mut value = minimal_json();
        value["questionnaire"]["qobjects"][0]["index"] = json!([]);
        let err = from_json_value(&value).unwrap_err();
        assert!(matches!(err, JsonConversionError::Inconsistent(_)));
    }
}

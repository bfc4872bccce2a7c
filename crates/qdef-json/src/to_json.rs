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

//! Survey to JSON conversion

use qdef_core::Survey;
use serde_json::Value as JsonValue;

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Pretty-print with indentation (default: true)
    pub pretty: bool,
    /// Include the info map (default: true)
    pub include_info: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_info: true,
        }
    }
}

/// Convert a survey to a JSON string
pub fn to_json(survey: &Survey, config: &ToJsonConfig) -> Result<String, String> {
    let value = to_json_value(survey, config)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    text.map_err(|e| format!("JSON serialization error: {}", e))
}

/// Convert a survey to serde_json::Value
pub fn to_json_value(survey: &Survey, config: &ToJsonConfig) -> Result<JsonValue, String> {
    let mut value =
        serde_json::to_value(survey).map_err(|e| format!("JSON serialization error: {}", e))?;

    if !config.include_info {
        if let JsonValue::Object(map) = &mut value {
            map.remove("info");
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdef_core::parse;

    fn sample() -> Survey {
        parse(
            b"Title = T\nAuthor = A\nPageSize = 597.50787pt, 845.04684pt\n\
              QObject-Range = 2.Rate\nRange-Lower = 1 bad\n\
              Box = Checkbox, 1, 72.27pt, 72.27pt, 10pt, 10pt, ellipse\n",
        )
        .unwrap()
    }

    #[test]
    fn test_to_json_value_shape() {
        let value = to_json_value(&sample(), &ToJsonConfig::default()).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["info"]["Author"], "A");
        assert_eq!(value["defs"]["paper_width"], 210.0);
        assert_eq!(value["defs"]["checkmode"], "checkcorrect");

        let qobject = &value["questionnaire"]["qobjects"][0];
        assert_eq!(qobject["index"], serde_json::json!([2]));
        assert_eq!(qobject["question"], "Rate");
        assert_eq!(qobject["variant"]["Range"]["1"]["lower"], "bad");
        assert!(qobject["variant"]["Range"]["1"]["upper"].is_null());

        let answer_box = &qobject["boxes"][0];
        assert_eq!(answer_box["kind"]["Checkbox"]["form"], "ellipse");
        assert_eq!(answer_box["page"], 1);
        assert_eq!(answer_box["x"], 25.4);
    }

    #[test]
    fn test_exclude_info() {
        let config = ToJsonConfig {
            include_info: false,
            ..ToJsonConfig::default()
        };
        let value = to_json_value(&sample(), &config).unwrap();
        assert!(value.get("info").is_none());
    }

    #[test]
    fn test_compact_output() {
        let config = ToJsonConfig {
            pretty: false,
            ..ToJsonConfig::default()
        };
        let text = to_json(&sample(), &config).unwrap();
        assert!(!text.contains('\n'));
        let pretty = to_json(&sample(), &ToJsonConfig::default()).unwrap();
        assert!(pretty.contains("\n  \"title\": \"T\""));
    }
}

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

//! Resource limits for definition parsing.

/// Configurable limits bounding the resources a single parse may consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_file_size: usize,
    /// Maximum line length in bytes (default: 1MB).
    pub max_line_length: usize,
    /// Maximum number of qobjects in one questionnaire (default: 100k).
    pub max_qobjects: usize,
    /// Maximum number of boxes attached to one qobject (default: 10k).
    pub max_boxes_per_qobject: usize,
    /// Maximum number of components in a hierarchical index (default: 32).
    ///
    /// Explicit indices append a trailing zero to the numbering cursor, so the
    /// cursor may be one component deeper than this.
    pub max_index_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 64 * 1024 * 1024, // 64MB
            max_line_length: 1024 * 1024,    // 1MB
            max_qobjects: 100_000,
            max_boxes_per_qobject: 10_000,
            max_index_depth: 32,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_file_size: usize::MAX,
            max_line_length: usize::MAX,
            max_qobjects: usize::MAX,
            max_boxes_per_qobject: usize::MAX,
            max_index_depth: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_file_size, 64 * 1024 * 1024);
        assert_eq!(limits.max_line_length, 1024 * 1024);
        assert_eq!(limits.max_qobjects, 100_000);
        assert_eq!(limits.max_boxes_per_qobject, 10_000);
        assert_eq!(limits.max_index_depth, 32);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_file_size, usize::MAX);
        assert_eq!(limits.max_qobjects, usize::MAX);
        assert_eq!(limits.max_index_depth, usize::MAX);
    }

    #[test]
    fn test_limits_clone_eq() {
        let limits = Limits {
            max_qobjects: 3,
            ..Limits::default()
        };
        assert_eq!(limits.clone(), limits);
        assert_ne!(limits, Limits::default());
    }
}

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

//! Canonicalization configuration.

/// Default number of decimals for point values.
pub const DEFAULT_PRECISION: usize = 4;

/// Configuration for canonical output format.
///
/// # Examples
///
/// ```
/// use qdef_c14n::CanonicalConfig;
///
/// let config = CanonicalConfig::default();
/// assert_eq!(config.precision, 4);
/// assert!(config.include_info);
///
/// let config = CanonicalConfig::new()
///     .with_precision(2)
///     .with_separate_qobjects(false);
/// assert_eq!(config.precision, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct CanonicalConfig {
    /// Decimals written for point values (`PageSize`, `Box`).
    ///
    /// Default: `4`
    pub precision: usize,

    /// Write the info entries.
    ///
    /// Default: `true`
    pub include_info: bool,

    /// Put a blank line before every `QObject` record.
    ///
    /// Default: `true`
    pub separate_qobjects: bool,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            include_info: true,
            separate_qobjects: true,
        }
    }
}

impl CanonicalConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `CanonicalConfig`.
    pub fn builder() -> CanonicalConfigBuilder {
        CanonicalConfigBuilder::new()
    }

    /// Set the point value precision.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set whether info entries are written.
    pub fn with_include_info(mut self, include_info: bool) -> Self {
        self.include_info = include_info;
        self
    }

    /// Set whether qobjects are separated by blank lines.
    pub fn with_separate_qobjects(mut self, separate_qobjects: bool) -> Self {
        self.separate_qobjects = separate_qobjects;
        self
    }
}

/// Builder for constructing a `CanonicalConfig` with a chainable API.
///
/// ```
/// use qdef_c14n::CanonicalConfig;
///
/// let config = CanonicalConfig::builder()
///     .precision(3)
///     .include_info(false)
///     .build();
/// assert!(!config.include_info);
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalConfigBuilder {
    precision: usize,
    include_info: bool,
    separate_qobjects: bool,
}

impl Default for CanonicalConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        let defaults = CanonicalConfig::default();
        Self {
            precision: defaults.precision,
            include_info: defaults.include_info,
            separate_qobjects: defaults.separate_qobjects,
        }
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn include_info(mut self, include_info: bool) -> Self {
        self.include_info = include_info;
        self
    }

    pub fn separate_qobjects(mut self, separate_qobjects: bool) -> Self {
        self.separate_qobjects = separate_qobjects;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> CanonicalConfig {
        CanonicalConfig {
            precision: self.precision,
            include_info: self.include_info,
            separate_qobjects: self.separate_qobjects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CanonicalConfig::default();
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert!(config.include_info);
        assert!(config.separate_qobjects);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(CanonicalConfig::new(), CanonicalConfig::default());
    }

    #[test]
    fn test_fluent_setters() {
        let config = CanonicalConfig::new()
            .with_precision(1)
            .with_include_info(false)
            .with_separate_qobjects(false);
        assert_eq!(config.precision, 1);
        assert!(!config.include_info);
        assert!(!config.separate_qobjects);
    }

    #[test]
    fn test_builder_defaults() {
        assert_eq!(CanonicalConfig::builder().build(), CanonicalConfig::default());
        assert_eq!(CanonicalConfigBuilder::default().build(), CanonicalConfig::default());
    }

    #[test]
    fn test_builder_all_options() {
        let config = CanonicalConfig::builder()
            .precision(6)
            .include_info(false)
            .separate_qobjects(false)
            .build();
        assert_eq!(
            config,
            CanonicalConfig::new()
                .with_precision(6)
                .with_include_info(false)
                .with_separate_qobjects(false)
        );
    }
}

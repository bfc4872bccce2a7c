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

//! Value normalization hook.
//!
//! Values in definition files may carry markup (the LaTeX class writes TeX
//! escapes). Turning that markup into plain text is left to the caller; the
//! parser only runs every value through a [`Normalize`] implementation.

/// Converts a raw record value into display text.
pub trait Normalize {
    fn normalize(&self, value: &str) -> String;
}

/// Leaves values untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Normalize for Identity {
    fn normalize(&self, value: &str) -> String {
        value.to_string()
    }
}

impl<F> Normalize for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, value: &str) -> String {
        self(value)
    }
}

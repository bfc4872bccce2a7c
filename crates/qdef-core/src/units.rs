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

//! Typographic point to millimeter conversion.
//!
//! Definition files carry geometry in TeX points (72.27 per inch) measured
//! from the bottom of the page. The object model stores millimeters measured
//! from the top of the page.

use crate::error::{QdefError, QdefResult};

/// TeX points per inch.
pub const POINTS_PER_INCH: f64 = 72.27;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Unit suffix carried by every point value in a definition file.
pub const POINT_SUFFIX: &str = "pt";

/// Decimal places kept for paper dimensions.
pub const PAPER_SIZE_DECIMALS: i32 = 3;

/// Convert TeX points to millimeters.
#[inline]
pub fn points_to_mm(value: f64) -> f64 {
    value / POINTS_PER_INCH * MM_PER_INCH
}

/// Convert millimeters to TeX points.
#[inline]
pub fn mm_to_points(value: f64) -> f64 {
    value / MM_PER_INCH * POINTS_PER_INCH
}

/// Flip a vertical coordinate between bottom-origin and top-origin.
///
/// The operation is its own inverse.
#[inline]
pub fn flip_y(y_mm: f64, page_height_mm: f64) -> f64 {
    page_height_mm - y_mm
}

/// Round a millimeter value to `decimals` decimal places.
pub fn round_mm(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Parse a `<number>pt` value into points.
///
/// Errors carry line 0; callers attach the line.
pub fn parse_points(raw: &str) -> QdefResult<f64> {
    let raw = raw.trim();
    let number = raw.strip_suffix(POINT_SUFFIX).ok_or_else(|| {
        QdefError::value(format!("expected a point value like '12.5pt', got '{}'", raw), 0)
    })?;
    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| QdefError::value(format!("invalid point value '{}'", raw), 0))?;
    if !value.is_finite() {
        return Err(QdefError::value(format!("point value '{}' is not finite", raw), 0));
    }
    Ok(value)
}

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

//! Hit-testing and resizing of answer boxes.
//!
//! All coordinates are millimeters from the top-left page corner, the same
//! space the parser stores boxes in.

use crate::model::{AnswerBox, Questionnaire, Rect};

/// Smallest width or height a textbox can be resized to, in millimeters.
pub const MIN_FREETEXT_SIZE: f64 = 4.0;

/// A side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Location of a box inside a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxRef {
    /// Position of the owning qobject in document order.
    pub qobject: usize,
    /// Position of the box within its qobject.
    pub answer_box: usize,
}

impl AnswerBox {
    /// Whether `(x, y)` lies strictly inside the box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let r = &self.rect;
        r.x < x && x < r.right() && r.y < y && y < r.bottom()
    }

    /// The textbox edge within tolerance of `(x, y)`.
    ///
    /// Checkboxes have no draggable edges and always return `None`.
    pub fn find_edge(&self, x: f64, y: f64, tol_x: f64, tol_y: f64) -> Option<Edge> {
        if !self.is_textbox() {
            return None;
        }
        let r = &self.rect;
        let within_height = r.y <= y && y <= r.bottom();
        let within_width = r.x <= x && x <= r.right();

        if within_height && (x - r.x).abs() <= tol_x {
            Some(Edge::Left)
        } else if within_height && (x - r.right()).abs() <= tol_x {
            Some(Edge::Right)
        } else if within_width && (y - r.y).abs() <= tol_y {
            Some(Edge::Top)
        } else if within_width && (y - r.bottom()).abs() <= tol_y {
            Some(Edge::Bottom)
        } else {
            None
        }
    }

    /// Drag `edge` of a textbox towards `(x, y)`.
    ///
    /// The moved edge stays inside `bounds` and the box never shrinks below
    /// [`MIN_FREETEXT_SIZE`]. Dragging the right edge also caps the new width
    /// at the box's previous right coordinate. The opposite edge does not move. Returns
    /// `false` (and leaves the box alone) for checkboxes.
    pub fn move_edge(&mut self, edge: Edge, x: f64, y: f64, bounds: &Rect) -> bool {
        if !self.is_textbox() {
            return false;
        }
        let r = &mut self.rect;
        match edge {
            Edge::Left => {
                let x = x.max(bounds.x);
                let width = MIN_FREETEXT_SIZE.max(r.width + r.x - x);
                r.x += r.width - width;
                r.width = width;
            }
            Edge::Right => {
                let x = x.min(bounds.right());
                // A single drag grows the width to at most the old right coordinate.
                r.width = MIN_FREETEXT_SIZE.max(x - r.x).min(r.right());
            }
            Edge::Top => {
                let y = y.max(bounds.y);
                let height = MIN_FREETEXT_SIZE.max(r.height + r.y - y);
                r.y += r.height - height;
                r.height = height;
            }
            Edge::Bottom => {
                let y = y.min(bounds.bottom());
                r.height = MIN_FREETEXT_SIZE.max(y - r.y);
            }
        }
        true
    }
}

impl Questionnaire {
    fn boxes_on_page(&self, page: u32) -> impl Iterator<Item = (BoxRef, &AnswerBox)> {
        self.qobjects
            .iter()
            .enumerate()
            .flat_map(move |(q, qobject)| {
                qobject
                    .boxes
                    .iter()
                    .enumerate()
                    .filter(move |(_, b)| b.page == page)
                    .map(move |(b, answer_box)| {
                        (
                            BoxRef {
                                qobject: q,
                                answer_box: b,
                            },
                            answer_box,
                        )
                    })
            })
    }

    /// First box on `page`, in document order, whose interior contains the point.
    pub fn find_box(&self, page: u32, x: f64, y: f64) -> Option<BoxRef> {
        self.boxes_on_page(page)
            .find(|(_, answer_box)| answer_box.contains(x, y))
            .map(|(found, _)| found)
    }

    /// First textbox edge on `page` within tolerance of the point.
    pub fn find_edge(&self, page: u32, x: f64, y: f64, tol_x: f64, tol_y: f64) -> Option<(BoxRef, Edge)> {
        self.boxes_on_page(page)
            .find_map(|(found, answer_box)| {
                answer_box.find_edge(x, y, tol_x, tol_y).map(|edge| (found, edge))
            })
    }

    /// Look up a box by reference.
    pub fn box_at(&self, at: BoxRef) -> Option<&AnswerBox> {
        self.qobjects.get(at.qobject)?.boxes.get(at.answer_box)
    }

    /// Mutable lookup of a box by reference.
    pub fn box_at_mut(&mut self, at: BoxRef) -> Option<&mut AnswerBox> {
        self.qobjects.get_mut(at.qobject)?.boxes.get_mut(at.answer_box)
    }
}

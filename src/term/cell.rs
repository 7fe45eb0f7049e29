// Copyright 2016 Joe Wilm, The Alacritty Project Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cell attributes: the text-style bitflags plus foreground/background
//! color every grid cell carries.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::term::color::Color;

bitflags! {
    /// Text-style tokens accumulated by `select-graphic-rendition`.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct TextStyle: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const UNDERLINE = 0b0000_0100;
        const BLINK     = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// The presentation attribute applied to a printed glyph: a style set plus
/// a foreground and background color.
///
/// Value-typed and `Copy`: a stored `Attribute` must never be mutated in
/// place, only replaced, so that cells which share one (the common case —
/// most of a freshly cleared screen shares `Attribute::default()`) never
/// observe each other's changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attribute {
    pub style: TextStyle,
    pub foreground: Color,
    pub background: Color,
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute { style: TextStyle::empty(), foreground: Color::Default, background: Color::Default }
    }
}

/// A single grid position: the glyph drawn there and its attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub glyph: char,
    pub attribute: Attribute,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { glyph: ' ', attribute: Attribute::default() }
    }
}

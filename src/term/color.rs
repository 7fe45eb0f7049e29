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

//! The named color tokens SGR foreground/background codes select.
//!
//! There is no RGB or 256-color palette here — VT220+ extended color is an
//! explicit non-goal, so every color a cell can carry is one of these nine
//! named tokens.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named ANSI color, or `Default` for "whatever the terminal's base
/// foreground/background is".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Resolves an SGR foreground code (30-39) to a [`Color`], if it's one
    /// of the codes this crate understands. `38` and `39` both resolve to
    /// `Default`.
    pub fn from_sgr_foreground(code: u16) -> Option<Color> {
        let color = match code {
            30 => Color::Black,
            31 => Color::Red,
            32 => Color::Green,
            33 => Color::Brown,
            34 => Color::Blue,
            35 => Color::Magenta,
            36 => Color::Cyan,
            37 => Color::White,
            38 | 39 => Color::Default,
            _ => return None,
        };
        Some(color)
    }

    /// Resolves an SGR background code (40-49) to a [`Color`].
    pub fn from_sgr_background(code: u16) -> Option<Color> {
        let color = match code {
            40 => Color::Black,
            41 => Color::Red,
            42 => Color::Green,
            43 => Color::Brown,
            44 => Color::Blue,
            45 => Color::Magenta,
            46 => Color::Cyan,
            47 => Color::White,
            49 => Color::Default,
            _ => return None,
        };
        Some(color)
    }
}

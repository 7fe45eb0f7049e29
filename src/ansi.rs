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

//! Numeric opcode tables for the VT1xx control/escape/CSI vocabulary.
//!
//! These are data, not behavior: the [`crate::parser::Parser`] consults
//! them to decide which [`crate::event::Event`] a given byte maps to.

/// Null: always ignored in the `Stream` state.
pub const NUL: u8 = 0x00;

/// Bell: generates a bell tone.
pub const BEL: u8 = 0x07;

/// Backspace: moves cursor left one column, stopping at the left margin.
pub const BS: u8 = 0x08;

/// Horizontal tab: moves cursor to the next tab stop, or the right margin.
pub const HT: u8 = 0x09;

/// Linefeed.
pub const LF: u8 = 0x0a;

/// Vertical tab: processed as LF.
pub const VT: u8 = 0x0b;

/// Form feed: processed as LF.
pub const FF: u8 = 0x0c;

/// Carriage return: moves cursor to the left margin on the current line.
pub const CR: u8 = 0x0d;

/// Shift out: switch to the G1 character set.
pub const SO: u8 = 0x0e;

/// Shift in: switch to the G0 character set.
pub const SI: u8 = 0x0f;

/// Device control 1 (XON). Recognized but has no effect on screen state.
pub const DC1: u8 = 0x11;

/// Device control 3 (XOFF). Recognized but has no effect on screen state.
pub const DC3: u8 = 0x13;

/// Cancel: aborts a pending escape/CSI sequence and returns to `Stream`.
pub const CAN: u8 = 0x18;

/// Substitute: processed as CAN.
pub const SUB: u8 = 0x1a;

/// Escape: introduces an escape sequence.
pub const ESC: u8 = 0x1b;

/// Returns `true` if `byte` is one of the "basic" C0 controls that map
/// directly to an event while in the `Stream` state (excludes `NUL`, `ESC`,
/// `CAN`, `SUB`, `DC1`, `DC3`, which are handled specially).
pub fn is_basic_control(byte: u8) -> bool {
    matches!(byte, BS | HT | LF | VT | FF | CR | SI | SO | BEL)
}

pub mod escape {
    //! Final bytes recognized directly after a bare `ESC` (escape-final
    //! vocabulary). Several of these numerically collide with CSI-final
    //! bytes (see [`super::csi`]); resolution is always by parser state.

    /// Saves cursor position (DECSC).
    pub const DECSC: u8 = 0x37;

    /// Restores previously saved cursor position (DECRC).
    pub const DECRC: u8 = 0x38;

    /// Index: moves cursor down one row, scrolling at the bottom margin.
    pub const IND: u8 = 0x44;

    /// Next line: moves cursor to column 0 of the next row, scrolling at
    /// the bottom margin.
    pub const NEL: u8 = 0x45;

    /// Reverse linefeed: moves cursor up one row, scrolling at the top
    /// margin, then to column 0.
    pub const RLF: u8 = 0x49;

    /// Reverse index: moves cursor up one row, scrolling at the top
    /// margin.
    pub const RI: u8 = 0x4d;
}

pub mod csi {
    //! Final bytes recognized after `ESC [` and optional `;`-separated
    //! decimal parameters (CSI-final vocabulary).

    pub const CUU: u8 = 0x41;
    pub const CUD: u8 = 0x42;
    pub const CUF: u8 = 0x43;
    pub const CUB: u8 = 0x44;
    pub const CUP: u8 = 0x48;
    pub const ED: u8 = 0x4a;
    pub const EL: u8 = 0x4b;
    pub const IL: u8 = 0x4c;
    pub const DL: u8 = 0x4d;
    pub const DCH: u8 = 0x50;
    pub const HVP: u8 = 0x66;
    pub const IRMI: u8 = 0x68;
    pub const IRMR: u8 = 0x6c;
    pub const SGR: u8 = 0x6d;
    pub const DECSTBM: u8 = 0x72;
}

pub mod sgr {
    //! Numeric codes understood by `select-graphic-rendition`.

    pub const RESET: u16 = 0;
    pub const BOLD: u16 = 1;
    pub const DIM: u16 = 2;
    pub const UNDERLINE: u16 = 4;
    pub const BLINK: u16 = 5;
    pub const REVERSE: u16 = 7;
    pub const UNDERLINE_OFF: u16 = 24;
    pub const BLINK_OFF: u16 = 25;
    pub const REVERSE_OFF: u16 = 27;

    /// Foreground color base code (30-37); 38 and 39 both mean "default".
    pub const FG_BASE: u16 = 30;
    pub const FG_DEFAULT_EXTENDED: u16 = 38;
    pub const FG_DEFAULT: u16 = 39;

    /// Background color base code (40-47); 49 means "default".
    pub const BG_BASE: u16 = 40;
    pub const BG_DEFAULT: u16 = 49;
}

/// The 21 source bytes that select a DEC Special Graphics glyph when the
/// active character set slot is bound to it. See [`crate::charset`].
pub const DEC_SPECIAL_GRAPHICS_BYTES: [u8; 21] = [
    0x60, 0x61, 0x66, 0x67, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, 0x70, 0x71, 0x72, 0x73, 0x74,
    0x75, 0x76, 0x77, 0x78, 0x7b, 0x7e,
];

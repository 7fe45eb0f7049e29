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

//! DEC Special Graphics character set.
//!
//! Bound to the `g0`/`g1` charset slot by `ESC ( 0` / `ESC ) 0`; translates
//! a handful of ASCII bytes into the VT100 line-drawing glyph set.

/// Translates `c` through the DEC Special Graphics table. Bytes outside the
/// table are returned unchanged, matching `vt102.py`'s `str.translate`
/// behavior for characters with no entry in the translation dict.
pub fn translate(c: char) -> char {
    match c {
        '`' => '\u{25c6}', // diamond
        'a' => '\u{2592}', // checkerboard
        'f' => '\u{00b0}', // degree
        'g' => '\u{00b1}', // plus-minus
        'j' => '\u{2518}', // box drawing lower-right corner
        'k' => '\u{2510}', // box drawing upper-right corner
        'l' => '\u{250c}', // box drawing upper-left corner
        'm' => '\u{2514}', // box drawing lower-left corner
        'n' => '\u{253c}', // box drawing cross
        'o' => '\u{23ba}', // scan line 1
        'p' => '\u{23bb}', // scan line 3
        'q' => '\u{2500}', // horizontal line
        'r' => '\u{23bc}', // scan line 7
        's' => '\u{23bd}', // scan line 9
        't' => '\u{251c}', // box drawing tee pointing right
        'u' => '\u{2524}', // box drawing tee pointing left
        'v' => '\u{2534}', // box drawing tee pointing up
        'w' => '\u{252c}', // box drawing tee pointing down
        'x' => '\u{2502}', // vertical line
        '{' => '\u{03c0}', // pi
        '~' => '\u{00b7}', // centered dot
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::translate;

    #[test]
    fn translates_known_bytes() {
        assert_eq!(translate('q'), '\u{2500}');
        assert_eq!(translate('x'), '\u{2502}');
        assert_eq!(translate('{'), '\u{03c0}');
    }

    #[test]
    fn leaves_unmapped_bytes_unchanged() {
        assert_eq!(translate('A'), 'A');
        assert_eq!(translate(' '), ' ');
    }
}

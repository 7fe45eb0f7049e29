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

//! Errors the parser can surface.
//!
//! Everything else the spec's error taxonomy names (decode failures,
//! absent tab stops, unknown CSI/SGR codes) is handled by silently
//! clamping or ignoring, never by returning `Err`.

use std::fmt;

/// The parser's only fallible condition: an `ESC` was followed by a byte
/// it does not recognize, and [`crate::parser::Parser`] was constructed
/// with `fail_on_unknown_esc` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    UnknownEscape { byte: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownEscape { byte } => {
                write!(f, "unexpected character after ESC: {:#04x}", byte)
            },
        }
    }
}

impl std::error::Error for Error {}

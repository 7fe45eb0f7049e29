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
//
//! An in-memory VT100/VT102-family terminal emulator core.
//!
//! Two tightly coupled pieces: [`parser::Parser`], a byte-driven state
//! machine that decodes the protocol into semantic [`event::Event`]s, and
//! [`term::Screen`], a grid-of-cells buffer that implements one handler per
//! event. Wire them together with [`term::Screen::attach`]:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use vt1xx::parser::Parser;
//! use vt1xx::term::Screen;
//!
//! let screen = Rc::new(RefCell::new(Screen::new(10, 10)));
//! let mut parser = Parser::default();
//! Screen::attach(&screen, &mut parser);
//!
//! parser.process("Text goes here".chars()).unwrap();
//! assert_eq!(screen.borrow().display()[0], "Text goes ");
//! assert_eq!(screen.borrow().display()[1], "here      ");
//!
//! parser.process("\u{1b}[H\u{1b}[K".chars()).unwrap();
//! assert_eq!(screen.borrow().display()[0], "          ");
//! assert_eq!(screen.borrow().display()[1], "here      ");
//! ```
#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use, clippy::wrong_pub_self_convention)]

pub mod ansi;
pub mod charset;
pub mod error;
pub mod event;
pub mod parser;
pub mod term;

pub use crate::error::Error;
pub use crate::event::{Event, EventListener};
pub use crate::parser::Parser;
pub use crate::term::Screen;

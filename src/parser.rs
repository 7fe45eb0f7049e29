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

//! The VT1xx protocol state machine.
//!
//! [`Parser`] consumes one `char` at a time and dispatches [`Event`]s to
//! every registered [`EventListener`] in registration order. It assigns no
//! meaning to what it parses beyond deciding which event fires; a
//! [`crate::term::Screen`] (or any other listener) supplies the meaning.

use log::{debug, trace};

use crate::ansi::{self, csi, escape, sgr};
use crate::error::Error;
use crate::event::{Event, EventListener};

/// The parser's current position within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Not currently inside any escape or control sequence.
    Stream,
    /// Just saw a bare `ESC`.
    Escape,
    /// Inside `ESC [ ... `, accumulating parameters up to the final byte.
    EscapeLb,
    /// Inside a DEC private-mode sequence (`ESC [ ? ... `); parameters are
    /// discarded until `l`/`h` ends it.
    Mode,
    /// Just saw `ESC (`; the next char selects the G0 charset.
    CharsetG0,
    /// Just saw `ESC )`; the next char selects the G1 charset.
    CharsetG1,
}

/// Byte-at-a-time VT1xx decoder.
///
/// ```
/// use vt1xx::event::{Event, EventListener};
/// use vt1xx::parser::Parser;
///
/// #[derive(Default)]
/// struct Counter(u32);
/// impl EventListener for Counter {
///     fn on_cursor_down(&mut self, _count: u16) {
///         self.0 += 1;
///     }
/// }
///
/// let mut parser = Parser::default();
/// let mut counter = Counter::default();
/// parser.add_event_listener(Box::new(counter));
/// ```
pub struct Parser {
    state: State,
    params: Vec<u16>,
    current_param: String,
    listeners: Vec<Box<dyn EventListener>>,
    fail_on_unknown_esc: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(true)
    }
}

impl Parser {
    /// Creates a parser. When `fail_on_unknown_esc` is `true`, an `ESC`
    /// followed by a byte this parser doesn't recognize returns
    /// [`Error::UnknownEscape`]; when `false`, it is silently ignored and
    /// the parser returns to the `Stream` state.
    pub fn new(fail_on_unknown_esc: bool) -> Self {
        Parser {
            state: State::Stream,
            params: Vec::new(),
            current_param: String::new(),
            listeners: Vec::new(),
            fail_on_unknown_esc,
        }
    }

    /// Registers a listener. Listeners are invoked in registration order;
    /// more than one listener may be registered for the lifetime of a
    /// `Parser`.
    pub fn add_event_listener(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    /// Consumes a single input unit, advancing parser state and
    /// dispatching at most one [`Event`] (a CSI sequence dispatches
    /// exactly one event, on its final byte).
    pub fn consume(&mut self, c: char) -> Result<(), Error> {
        match self.state {
            State::Stream => self.advance_stream(c),
            State::Escape => return self.advance_escape(c),
            State::EscapeLb => self.advance_escape_lb(c),
            State::Mode => self.advance_mode(c),
            State::CharsetG0 => self.advance_charset_g0(c),
            State::CharsetG1 => self.advance_charset_g1(c),
        }
        Ok(())
    }

    /// Consumes every unit of `chars` in order. Stops (without consuming
    /// the rest) and returns `Err` the moment an unrecognized escape is
    /// hit under `fail_on_unknown_esc`; the parser's `state` is left at
    /// `Stream` so a later call can resume cleanly.
    pub fn process<I>(&mut self, chars: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = char>,
    {
        for c in chars {
            self.consume(c)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, event: Event) {
        for listener in &mut self.listeners {
            listener.handle(event.clone());
        }
    }

    fn advance_stream(&mut self, c: char) {
        let byte = c as u32;
        if byte <= u8::MAX as u32 && ansi::is_basic_control(byte as u8) {
            self.dispatch(basic_control_event(byte as u8));
        } else if byte == ansi::ESC as u32 {
            self.state = State::Escape;
        } else if byte == ansi::NUL as u32 {
            // Nulls are always ignored.
        } else {
            // CAN/SUB only abort a pending sequence; outside of one
            // they're ordinary printable input, same as `vt102.py`.
            self.dispatch(Event::Print(c));
        }
    }

    fn advance_escape(&mut self, c: char) -> Result<(), Error> {
        let byte = c as u32;
        if byte == '[' as u32 {
            self.state = State::EscapeLb;
            self.params.clear();
            self.current_param.clear();
        } else if byte == '(' as u32 {
            self.state = State::CharsetG0;
        } else if byte == ')' as u32 {
            self.state = State::CharsetG1;
        } else if byte == ansi::CAN as u32 || byte == ansi::SUB as u32 {
            self.state = State::Stream;
        } else if byte <= u8::MAX as u32 {
            if let Some(event) = escape_final_event(byte as u8) {
                self.dispatch(event);
                self.state = State::Stream;
            } else if self.fail_on_unknown_esc {
                self.state = State::Stream;
                return Err(Error::UnknownEscape { byte: byte as u8 });
            } else {
                debug!("ignoring unknown escape byte {:#04x}", byte);
                self.state = State::Stream;
            }
        } else if self.fail_on_unknown_esc {
            self.state = State::Stream;
            return Err(Error::UnknownEscape { byte: 0xff });
        } else {
            self.state = State::Stream;
        }
        Ok(())
    }

    fn advance_escape_lb(&mut self, c: char) {
        let byte = c as u32;
        if byte == ansi::CAN as u32 || byte == ansi::SUB as u32 {
            self.state = State::Stream;
            self.params.clear();
            self.current_param.clear();
        } else if c == ';' {
            self.push_current_param();
        } else if c == '?' {
            self.state = State::Mode;
        } else if c.is_ascii_digit() {
            self.current_param.push(c);
        } else {
            // Any other byte is the CSI final byte.
            self.push_current_param();
            if byte <= u8::MAX as u32 {
                if let Some(event) = self.csi_final_event(byte as u8) {
                    self.dispatch(event);
                } else {
                    trace!("ignoring unknown CSI final byte {:#04x}", byte);
                }
            }
            self.state = State::Stream;
            self.params.clear();
            self.current_param.clear();
        }
    }

    fn advance_mode(&mut self, c: char) {
        let byte = c as u32;
        if byte == ansi::CAN as u32 || byte == ansi::SUB as u32 {
            self.state = State::Stream;
        } else if c == 'l' || c == 'h' {
            self.state = State::Stream;
        }
        // Any other byte while parsing a DEC private mode is ignored;
        // this crate does not model DEC private modes.
    }

    fn advance_charset_g0(&mut self, c: char) {
        let byte = c as u32;
        if byte == ansi::CAN as u32 || byte == ansi::SUB as u32 {
            self.state = State::Stream;
            return;
        }
        self.dispatch(Event::CharsetG0(c));
        self.state = State::Stream;
    }

    fn advance_charset_g1(&mut self, c: char) {
        let byte = c as u32;
        if byte == ansi::CAN as u32 || byte == ansi::SUB as u32 {
            self.state = State::Stream;
            return;
        }
        self.dispatch(Event::CharsetG1(c));
        self.state = State::Stream;
    }

    fn push_current_param(&mut self) {
        if !self.current_param.is_empty() {
            // A malformed parameter (too large for u16) clamps rather than
            // aborting the sequence; real terminals tolerate garbage here.
            let value = self.current_param.parse().unwrap_or(u16::MAX);
            self.params.push(value);
            self.current_param.clear();
        }
    }

    fn param(&self, index: usize, default: u16) -> u16 {
        match self.params.get(index).copied() {
            Some(0) | None => default,
            Some(value) => value,
        }
    }

    fn csi_final_event(&self, byte: u8) -> Option<Event> {
        let event = match byte {
            csi::CUU => Event::CursorUp(self.param(0, 1)),
            csi::CUD => Event::CursorDown(self.param(0, 1)),
            csi::CUF => Event::CursorRight(self.param(0, 1)),
            csi::CUB => Event::CursorLeft(self.param(0, 1)),
            csi::CUP | csi::HVP => Event::CursorMove(self.param(0, 1), self.param(1, 1)),
            csi::EL => Event::EraseInLine(self.raw_param(0)),
            csi::ED => Event::EraseInDisplay(self.raw_param(0)),
            csi::DCH => Event::DeleteCharacters(self.param(0, 1)),
            csi::IL => Event::InsertLines(self.param(0, 1)),
            csi::DL => Event::DeleteLines(self.param(0, 1)),
            csi::SGR => Event::SelectGraphicRendition(self.params.clone()),
            csi::DECSTBM => Event::SetMargins(self.param(0, 1), self.raw_param(1)),
            csi::IRMI => Event::SetInsert,
            csi::IRMR => Event::SetReplace,
            _ => return None,
        };
        Some(event)
    }

    /// Like [`Parser::param`], but `0` is returned as-is rather than
    /// replaced by a default — used for erase-type parameters, where `0`
    /// is itself a meaningful (and default) mode.
    fn raw_param(&self, index: usize) -> u16 {
        self.params.get(index).copied().unwrap_or(0)
    }
}

fn basic_control_event(byte: u8) -> Event {
    match byte {
        ansi::BS => Event::Backspace,
        ansi::HT => Event::Tab,
        ansi::LF | ansi::VT | ansi::FF => Event::Linefeed,
        ansi::CR => Event::CarriageReturn,
        ansi::SI => Event::ShiftIn,
        ansi::SO => Event::ShiftOut,
        ansi::BEL => Event::Bell,
        _ => unreachable!("basic_control_event called with non-basic byte"),
    }
}

fn escape_final_event(byte: u8) -> Option<Event> {
    let event = match byte {
        escape::IND => Event::Index,
        escape::RI => Event::ReverseIndex,
        escape::RLF => Event::ReverseLinefeed,
        escape::NEL => Event::Linefeed,
        escape::DECSC => Event::StoreCursor,
        escape::DECRC => Event::RestoreCursor,
        _ => return None,
    };
    Some(event)
}

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

//! The semantic events a [`crate::parser::Parser`] emits, and the
//! listener interface that receives them.
//!
//! The original `vt102` stream dispatched to listeners keyed by a string
//! event name (`add_event_listener("cursor-up", cb)`); this crate replaces
//! that with a tagged [`Event`] enum and an [`EventListener`] trait with
//! one default-no-op method per event, so a listener only has to
//! implement what it cares about. Multiple listeners (e.g. a `Screen`
//! plus a caller's own screen-scraping tap) can still be registered on a
//! single `Parser`.

/// A single decoded unit of terminal protocol meaning.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Print(char),
    Backspace,
    Tab,
    Linefeed,
    CarriageReturn,
    ShiftIn,
    ShiftOut,
    Bell,
    Index,
    ReverseIndex,
    ReverseLinefeed,
    StoreCursor,
    RestoreCursor,
    CursorUp(u16),
    CursorDown(u16),
    CursorRight(u16),
    CursorLeft(u16),
    CursorMove(u16, u16),
    EraseInLine(u16),
    EraseInDisplay(u16),
    DeleteCharacters(u16),
    InsertLines(u16),
    DeleteLines(u16),
    SelectGraphicRendition(Vec<u16>),
    SetMargins(u16, u16),
    SetInsert,
    SetReplace,
    CharsetG0(char),
    CharsetG1(char),
}

/// Receives [`Event`]s dispatched by a [`crate::parser::Parser`].
///
/// Every method has a no-op default; implement only the events a
/// particular listener needs to act on. [`EventListener::handle`] is the
/// single entry point the parser actually calls — it dispatches to the
/// per-event methods below, so overriding `handle` itself bypasses them
/// entirely if a catch-all is more convenient.
pub trait EventListener {
    fn on_print(&mut self, _c: char) {}
    fn on_backspace(&mut self) {}
    fn on_tab(&mut self) {}
    fn on_linefeed(&mut self) {}
    fn on_carriage_return(&mut self) {}
    fn on_shift_in(&mut self) {}
    fn on_shift_out(&mut self) {}
    fn on_bell(&mut self) {}
    fn on_index(&mut self) {}
    fn on_reverse_index(&mut self) {}
    fn on_reverse_linefeed(&mut self) {}
    fn on_store_cursor(&mut self) {}
    fn on_restore_cursor(&mut self) {}
    fn on_cursor_up(&mut self, _count: u16) {}
    fn on_cursor_down(&mut self, _count: u16) {}
    fn on_cursor_right(&mut self, _count: u16) {}
    fn on_cursor_left(&mut self, _count: u16) {}
    fn on_cursor_move(&mut self, _row: u16, _col: u16) {}
    fn on_erase_in_line(&mut self, _mode: u16) {}
    fn on_erase_in_display(&mut self, _mode: u16) {}
    fn on_delete_characters(&mut self, _count: u16) {}
    fn on_insert_lines(&mut self, _count: u16) {}
    fn on_delete_lines(&mut self, _count: u16) {}
    fn on_select_graphic_rendition(&mut self, _params: &[u16]) {}
    fn on_set_margins(&mut self, _top: u16, _bottom: u16) {}
    fn on_set_insert(&mut self) {}
    fn on_set_replace(&mut self) {}
    fn on_charset_g0(&mut self, _c: char) {}
    fn on_charset_g1(&mut self, _c: char) {}

    fn handle(&mut self, event: Event) {
        match event {
            Event::Print(c) => self.on_print(c),
            Event::Backspace => self.on_backspace(),
            Event::Tab => self.on_tab(),
            Event::Linefeed => self.on_linefeed(),
            Event::CarriageReturn => self.on_carriage_return(),
            Event::ShiftIn => self.on_shift_in(),
            Event::ShiftOut => self.on_shift_out(),
            Event::Bell => self.on_bell(),
            Event::Index => self.on_index(),
            Event::ReverseIndex => self.on_reverse_index(),
            Event::ReverseLinefeed => self.on_reverse_linefeed(),
            Event::StoreCursor => self.on_store_cursor(),
            Event::RestoreCursor => self.on_restore_cursor(),
            Event::CursorUp(n) => self.on_cursor_up(n),
            Event::CursorDown(n) => self.on_cursor_down(n),
            Event::CursorRight(n) => self.on_cursor_right(n),
            Event::CursorLeft(n) => self.on_cursor_left(n),
            Event::CursorMove(row, col) => self.on_cursor_move(row, col),
            Event::EraseInLine(mode) => self.on_erase_in_line(mode),
            Event::EraseInDisplay(mode) => self.on_erase_in_display(mode),
            Event::DeleteCharacters(count) => self.on_delete_characters(count),
            Event::InsertLines(count) => self.on_insert_lines(count),
            Event::DeleteLines(count) => self.on_delete_lines(count),
            Event::SelectGraphicRendition(params) => self.on_select_graphic_rendition(&params),
            Event::SetMargins(top, bottom) => self.on_set_margins(top, bottom),
            Event::SetInsert => self.on_set_insert(),
            Event::SetReplace => self.on_set_replace(),
            Event::CharsetG0(c) => self.on_charset_g0(c),
            Event::CharsetG1(c) => self.on_charset_g1(c),
        }
    }
}

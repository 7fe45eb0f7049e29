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
//! The in-memory screen buffer: a grid of glyphs with a parallel grid of
//! attributes, a cursor, tab stops, a saved-cursor stack, and a pair of
//! selectable character sets. [`Screen`] implements [`EventListener`] so it
//! can [`Screen::attach`] to a [`Parser`] and update itself as events are
//! dispatched, or be driven directly by calling its methods.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use log::{debug, trace};

use crate::ansi::sgr;
use crate::charset;
use crate::event::{Event, EventListener};
use crate::parser::Parser;
use crate::term::cell::{Attribute, Cell, TextStyle};
use crate::term::color::Color;

pub mod cell;
pub mod color;

/// Which of the two character-set slots a byte currently selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharsetSlot {
    G0,
    G1,
}

/// A character-set translation table bindable to `g0`/`g1`.
///
/// Only the DEC Special Graphics set is supported; any other designation
/// (national replacement sets) binds to `Ascii`, matching `vt102.py`'s
/// "officially unsupported" fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Charset {
    Ascii,
    DecSpecialGraphics,
}

impl Charset {
    fn translate(self, c: char) -> char {
        match self {
            Charset::Ascii => c,
            Charset::DecSpecialGraphics => charset::translate(c),
        }
    }
}

/// Insert/replace mode. Tracked and observable via [`Screen::mode`] but, as
/// in the source this crate is modeled on, never consulted by `print` —
/// glyph writes always overwrite. A deliberate extension point, not an
/// oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Insert,
    Replace,
}

/// A grid-of-cells terminal screen buffer.
pub struct Screen {
    rows: usize,
    cols: usize,
    display: Vec<String>,
    attributes: Vec<Vec<Attribute>>,
    x: usize,
    y: usize,
    cursor_attributes: Attribute,
    mode: Mode,
    tabstops: BTreeSet<usize>,
    cursor_save_stack: Vec<(usize, usize)>,
    g0: Charset,
    g1: Charset,
    current_charset: CharsetSlot,
}

impl Screen {
    /// Creates a screen of `rows` by `cols` blank cells. Panics (as
    /// `vt102.py`'s bare `assert` does) if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "screen dimensions must be strictly positive");
        Screen {
            rows,
            cols,
            display: vec![Self::blank_row(cols); rows],
            attributes: vec![vec![Attribute::default(); cols]; rows],
            x: 0,
            y: 0,
            cursor_attributes: Attribute::default(),
            mode: Mode::Insert,
            tabstops: BTreeSet::new(),
            cursor_save_stack: Vec::new(),
            g0: Charset::Ascii,
            g1: Charset::Ascii,
            current_charset: CharsetSlot::G0,
        }
    }

    fn blank_row(cols: usize) -> String {
        " ".repeat(cols)
    }

    /// Registers `screen` as a listener on `parser`. The parser keeps no
    /// reference back; more than one screen (or a screen plus a caller's
    /// own tap) may attach to the same parser.
    pub fn attach(screen: &Rc<RefCell<Screen>>, parser: &mut Parser) {
        parser.add_event_listener(Box::new(ScreenListener(Rc::clone(screen))));
    }

    /// The visible glyph grid: `rows` strings, each exactly `cols` chars.
    pub fn display(&self) -> &[String] {
        &self.display
    }

    /// The attribute grid, parallel to [`Screen::display`].
    pub fn attributes(&self) -> &[Vec<Attribute>] {
        &self.attributes
    }

    /// Current cursor position as `(x, y)` — column, then row.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Current `(rows, cols)` shape.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The insert/replace mode last selected by `set-insert`/`set-replace`.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The glyph and attribute at `(row, col)`, read from the two parallel
    /// grids. A convenience for callers who want combined cells without
    /// this crate paying the cost of storing them that way internally.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        Cell {
            glyph: self.display[row].chars().nth(col).unwrap_or(' '),
            attribute: self.attributes[row][col],
        }
    }

    /// Resizes the screen. Rows are added at the bottom / removed from the
    /// top; columns are added / removed on the right. The cursor is
    /// clamped back into range if the new shape is smaller than its
    /// current position — required to uphold the cursor-in-range
    /// invariant across every public operation, including this one.
    pub fn resize(&mut self, rows: usize, cols: usize) -> (usize, usize) {
        assert!(rows > 0 && cols > 0, "screen dimensions must be strictly positive");
        debug!("resizing screen from {}x{} to {}x{}", self.rows, self.cols, rows, cols);

        if self.rows < rows {
            for _ in 0..(rows - self.rows) {
                self.display.push(Self::blank_row(self.cols));
                self.attributes.push(vec![Attribute::default(); self.cols]);
            }
        } else if self.rows > rows {
            let dropped = self.rows - rows;
            self.display.drain(..dropped);
            self.attributes.drain(..dropped);
        }

        if self.cols < cols {
            let pad = cols - self.cols;
            for row in &mut self.display {
                row.push_str(&Self::blank_row(pad));
            }
            for row in &mut self.attributes {
                row.extend(vec![Attribute::default(); pad]);
            }
        } else if self.cols > cols {
            for row in &mut self.display {
                *row = row.chars().take(cols).collect();
            }
            for row in &mut self.attributes {
                row.truncate(cols);
            }
        }

        self.tabstops.retain(|&stop| stop < cols);

        self.rows = rows;
        self.cols = cols;
        self.y = self.y.min(self.rows - 1);
        self.x = self.x.min(self.cols - 1);

        (self.rows, self.cols)
    }

    // -- Glyph printing --------------------------------------------------

    pub fn print(&mut self, c: char) {
        let glyph = match self.current_charset {
            CharsetSlot::G0 => self.g0.translate(c),
            CharsetSlot::G1 => self.g1.translate(c),
        };

        let mut row: Vec<char> = self.display[self.y].chars().collect();
        row[self.x] = glyph;
        self.display[self.y] = row.into_iter().collect();
        self.attributes[self.y][self.x] = self.cursor_attributes;

        self.x += 1;
        if self.x >= self.cols {
            self.linefeed();
        }
    }

    // -- Cursor motion -----------------------------------------------------

    pub fn backspace(&mut self) {
        self.x = self.x.saturating_sub(1);
    }

    pub fn tab(&mut self) {
        self.x = self.next_tab_stop();
    }

    fn next_tab_stop(&self) -> usize {
        self.tabstops.iter().copied().find(|&stop| stop > self.x).unwrap_or(self.cols - 1)
    }

    pub fn carriage_return(&mut self) {
        self.x = 0;
    }

    pub fn cursor_up(&mut self, count: u16) {
        self.y = self.y.saturating_sub(count as usize);
    }

    pub fn cursor_down(&mut self, count: u16) {
        self.y = (self.y + count as usize).min(self.rows - 1);
    }

    pub fn cursor_left(&mut self, count: u16) {
        self.x = self.x.saturating_sub(count as usize);
    }

    pub fn cursor_right(&mut self, count: u16) {
        self.x = (self.x + count as usize).min(self.cols - 1);
    }

    /// `row`/`col` are 1-indexed; `0` is treated as `1`. Results are
    /// clamped to the grid after subtracting one.
    pub fn cursor_move(&mut self, row: u16, col: u16) {
        let row = if row == 0 { 1 } else { row } as usize;
        let col = if col == 0 { 1 } else { col } as usize;
        self.y = (row - 1).min(self.rows - 1);
        self.x = (col - 1).min(self.cols - 1);
    }

    pub fn home(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    // -- Scrolling --------------------------------------------------------

    pub fn index(&mut self) {
        if self.y + 1 >= self.rows {
            self.display.remove(0);
            self.display.push(Self::blank_row(self.cols));
            self.attributes.remove(0);
            self.attributes.push(vec![Attribute::default(); self.cols]);
        } else {
            self.y += 1;
        }
    }

    pub fn reverse_index(&mut self) {
        if self.y == 0 {
            self.display.pop();
            self.display.insert(0, Self::blank_row(self.cols));
            self.attributes.pop();
            self.attributes.insert(0, vec![Attribute::default(); self.cols]);
        } else {
            self.y -= 1;
        }
    }

    pub fn linefeed(&mut self) {
        self.index();
        self.x = 0;
    }

    pub fn reverse_linefeed(&mut self) {
        self.reverse_index();
        self.x = 0;
    }

    // -- Insert/delete ------------------------------------------------------

    /// Inserts `count` blank rows starting at the cursor row, shifting
    /// that row and everything below it down; rows pushed past the bottom
    /// margin are dropped.
    pub fn insert_lines(&mut self, count: u16) {
        let count = (count as usize).min(self.rows - self.y);

        let mut display: Vec<String> = self.display[..self.y].to_vec();
        let mut attributes: Vec<Vec<Attribute>> = self.attributes[..self.y].to_vec();
        for _ in 0..count {
            display.push(Self::blank_row(self.cols));
            attributes.push(vec![Attribute::default(); self.cols]);
        }
        display.extend(self.display[self.y..].iter().cloned());
        attributes.extend(self.attributes[self.y..].iter().cloned());
        display.truncate(self.rows);
        attributes.truncate(self.rows);

        self.display = display;
        self.attributes = attributes;
    }

    /// Removes `count` rows starting at the cursor row; rows below move up
    /// and blank rows with default attributes are appended to keep `rows`
    /// rows total.
    pub fn delete_lines(&mut self, count: u16) {
        let count = (count as usize).min(self.rows - self.y);

        let mut display: Vec<String> = self.display[..self.y].to_vec();
        let mut attributes: Vec<Vec<Attribute>> = self.attributes[..self.y].to_vec();
        display.extend(self.display[self.y + count..].iter().cloned());
        attributes.extend(self.attributes[self.y + count..].iter().cloned());
        while display.len() < self.rows {
            display.push(Self::blank_row(self.cols));
            attributes.push(vec![Attribute::default(); self.cols]);
        }

        self.display = display;
        self.attributes = attributes;
    }

    pub fn delete_characters(&mut self, count: u16) {
        let count = (count as usize).min(self.cols - self.x);
        if count == 0 {
            return;
        }

        let mut row: Vec<char> = self.display[self.y].chars().collect();
        row.drain(self.x..self.x + count);
        row.extend(std::iter::repeat(' ').take(count));
        self.display[self.y] = row.into_iter().collect();

        let attrs = &mut self.attributes[self.y];
        attrs.drain(self.x..self.x + count);
        attrs.extend(std::iter::repeat(Attribute::default()).take(count));
    }

    // -- Erasure ------------------------------------------------------------

    pub fn erase_in_line(&mut self, type_of: u16) {
        let (start, end) = match type_of {
            0 => (self.x, self.cols),
            1 => (0, self.x + 1),
            2 => (0, self.cols),
            _ => return,
        };

        let mut row: Vec<char> = self.display[self.y].chars().collect();
        for col in start..end {
            row[col] = ' ';
            self.attributes[self.y][col] = Attribute::default();
        }
        self.display[self.y] = row.into_iter().collect();
    }

    pub fn erase_in_display(&mut self, type_of: u16) {
        let (start, end) = match type_of {
            0 => (self.y, self.rows),
            1 => (0, self.y + 1),
            2 => (0, self.rows),
            _ => return,
        };

        for row in start..end {
            self.display[row] = Self::blank_row(self.cols);
            self.attributes[row] = vec![Attribute::default(); self.cols];
        }
    }

    // -- Saved cursor ------------------------------------------------------

    pub fn store_cursor(&mut self) {
        self.cursor_save_stack.push((self.x, self.y));
    }

    pub fn restore_cursor(&mut self) {
        if let Some((x, y)) = self.cursor_save_stack.pop() {
            self.x = x;
            self.y = y;
        }
    }

    // -- Tab stops -----------------------------------------------------------

    pub fn set_tab_stop(&mut self) {
        self.tabstops.insert(self.x);
    }

    pub fn clear_tab_stop(&mut self, type_of: u16) {
        match type_of {
            0x30 => {
                self.tabstops.remove(&self.x);
            },
            0x33 => self.tabstops.clear(),
            _ => {},
        }
    }

    // -- Character sets -------------------------------------------------------

    pub fn charset_g0(&mut self, cs: char) {
        self.g0 = if cs == '0' { Charset::DecSpecialGraphics } else { Charset::Ascii };
    }

    pub fn charset_g1(&mut self, cs: char) {
        self.g1 = if cs == '0' { Charset::DecSpecialGraphics } else { Charset::Ascii };
    }

    pub fn shift_in(&mut self) {
        self.current_charset = CharsetSlot::G0;
    }

    pub fn shift_out(&mut self) {
        self.current_charset = CharsetSlot::G1;
    }

    // -- Attributes -----------------------------------------------------------

    pub fn select_graphic_rendition(&mut self, params: &[u16]) {
        let reset = [sgr::RESET];
        let codes: &[u16] = if params.is_empty() { &reset } else { params };

        for &code in codes {
            match code {
                sgr::RESET => self.cursor_attributes = Attribute::default(),
                sgr::BOLD => self.cursor_attributes.style.insert(TextStyle::BOLD),
                sgr::DIM => self.cursor_attributes.style.insert(TextStyle::DIM),
                sgr::UNDERLINE => self.cursor_attributes.style.insert(TextStyle::UNDERLINE),
                sgr::BLINK => self.cursor_attributes.style.insert(TextStyle::BLINK),
                sgr::REVERSE => self.cursor_attributes.style.insert(TextStyle::REVERSE),
                sgr::UNDERLINE_OFF => self.cursor_attributes.style.remove(TextStyle::UNDERLINE),
                sgr::BLINK_OFF => self.cursor_attributes.style.remove(TextStyle::BLINK),
                sgr::REVERSE_OFF => self.cursor_attributes.style.remove(TextStyle::REVERSE),
                _ => {
                    if let Some(color) = Color::from_sgr_foreground(code) {
                        self.cursor_attributes.foreground = color;
                    } else if let Some(color) = Color::from_sgr_background(code) {
                        self.cursor_attributes.background = color;
                    } else {
                        trace!("ignoring unknown SGR code {}", code);
                    }
                },
            }
        }
    }

    // -- Modes ------------------------------------------------------------------

    pub fn set_insert(&mut self) {
        self.mode = Mode::Insert;
    }

    pub fn set_replace(&mut self) {
        self.mode = Mode::Replace;
    }

    pub fn bell(&mut self) {}
}

impl EventListener for Screen {
    fn on_print(&mut self, c: char) {
        self.print(c);
    }

    fn on_backspace(&mut self) {
        self.backspace();
    }

    fn on_tab(&mut self) {
        self.tab();
    }

    fn on_linefeed(&mut self) {
        self.linefeed();
    }

    fn on_carriage_return(&mut self) {
        self.carriage_return();
    }

    fn on_shift_in(&mut self) {
        self.shift_in();
    }

    fn on_shift_out(&mut self) {
        self.shift_out();
    }

    fn on_bell(&mut self) {
        self.bell();
    }

    fn on_index(&mut self) {
        self.index();
    }

    fn on_reverse_index(&mut self) {
        self.reverse_index();
    }

    fn on_reverse_linefeed(&mut self) {
        self.reverse_linefeed();
    }

    fn on_store_cursor(&mut self) {
        self.store_cursor();
    }

    fn on_restore_cursor(&mut self) {
        self.restore_cursor();
    }

    fn on_cursor_up(&mut self, count: u16) {
        self.cursor_up(count);
    }

    fn on_cursor_down(&mut self, count: u16) {
        self.cursor_down(count);
    }

    fn on_cursor_right(&mut self, count: u16) {
        self.cursor_right(count);
    }

    fn on_cursor_left(&mut self, count: u16) {
        self.cursor_left(count);
    }

    fn on_cursor_move(&mut self, row: u16, col: u16) {
        self.cursor_move(row, col);
    }

    fn on_erase_in_line(&mut self, mode: u16) {
        self.erase_in_line(mode);
    }

    fn on_erase_in_display(&mut self, mode: u16) {
        self.erase_in_display(mode);
    }

    fn on_delete_characters(&mut self, count: u16) {
        self.delete_characters(count);
    }

    fn on_insert_lines(&mut self, count: u16) {
        self.insert_lines(count);
    }

    fn on_delete_lines(&mut self, count: u16) {
        self.delete_lines(count);
    }

    fn on_select_graphic_rendition(&mut self, params: &[u16]) {
        self.select_graphic_rendition(params);
    }

    // `on_set_margins` is deliberately left at its no-op default: this
    // crate models no margin state, matching the source, which never
    // registers a `set-margins` handler on the screen either.

    fn on_set_insert(&mut self) {
        self.set_insert();
    }

    fn on_set_replace(&mut self) {
        self.set_replace();
    }

    fn on_charset_g0(&mut self, c: char) {
        self.charset_g0(c);
    }

    fn on_charset_g1(&mut self, c: char) {
        self.charset_g1(c);
    }
}

/// Adapts a shared, interior-mutable `Screen` to the `Parser`'s
/// boxed-listener ownership model so callers can keep reading the screen
/// after attaching it.
struct ScreenListener(Rc<RefCell<Screen>>);

impl EventListener for ScreenListener {
    fn handle(&mut self, event: Event) {
        self.0.borrow_mut().handle(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_advances_cursor_and_wraps() {
        let mut screen = Screen::new(2, 4);
        for c in "тест".chars() {
            screen.print(c);
        }
        assert_eq!(screen.display()[0], "тест");
        assert_eq!(screen.display()[1], "    ");
    }

    #[test]
    fn print_wraps_via_linefeed_at_right_margin() {
        let mut screen = Screen::new(2, 2);
        for c in "abc".chars() {
            screen.print(c);
        }
        assert_eq!(screen.display()[0], "ab");
        assert_eq!(screen.display()[1], "c ");
        assert_eq!(screen.cursor(), (1, 1));
    }

    #[test]
    fn erase_in_display_zero_preserves_rows_above_cursor() {
        let mut screen = Screen::new(5, 5);
        let rows = ["sam i", "s foo", "but a", "re yo", "u?   "];
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                screen.x = x;
                screen.y = y;
                screen.print(c);
            }
        }
        screen.y = 2;
        screen.x = 0;
        screen.erase_in_display(0);

        assert_eq!(screen.display()[0], "sam i");
        assert_eq!(screen.display()[1], "s foo");
        assert_eq!(screen.display()[2], "     ");
        assert_eq!(screen.display()[3], "     ");
        assert_eq!(screen.display()[4], "     ");
    }

    #[test]
    fn sgr_accumulates_styles_until_reset() {
        let mut screen = Screen::new(2, 2);
        screen.select_graphic_rendition(&[1]);
        screen.select_graphic_rendition(&[5]);
        screen.print('x');

        let attr = screen.attributes()[0][0];
        assert!(attr.style.contains(TextStyle::BOLD));
        assert!(attr.style.contains(TextStyle::BLINK));

        screen.select_graphic_rendition(&[0]);
        screen.print('y');
        assert_eq!(screen.attributes()[0][1], Attribute::default());
    }

    #[test]
    fn tab_stops_land_on_set_stops_then_clamp_to_margin() {
        let mut screen = Screen::new(10, 10);
        screen.x = 1;
        screen.set_tab_stop();
        screen.x = 8;
        screen.set_tab_stop();
        screen.x = 0;

        screen.tab();
        assert_eq!(screen.cursor().0, 1);
        screen.tab();
        assert_eq!(screen.cursor().0, 8);
        screen.tab();
        assert_eq!(screen.cursor().0, 9);
        screen.tab();
        assert_eq!(screen.cursor().0, 9);
    }

    #[test]
    fn saved_cursor_stack_restores_lifo() {
        let mut screen = Screen::new(10, 10);
        screen.store_cursor();
        screen.x = 3;
        screen.y = 5;
        screen.store_cursor();
        screen.x = 4;
        screen.y = 4;

        screen.restore_cursor();
        assert_eq!(screen.cursor(), (3, 5));
        screen.restore_cursor();
        assert_eq!(screen.cursor(), (0, 0));
        screen.restore_cursor();
        assert_eq!(screen.cursor(), (0, 0));
    }

    #[test]
    fn cursor_up_and_left_stop_at_margins() {
        let mut screen = Screen::new(3, 3);
        screen.cursor_up(5);
        screen.cursor_left(5);
        assert_eq!(screen.cursor(), (0, 0));
    }

    #[test]
    fn cursor_down_and_right_stop_at_margins() {
        let mut screen = Screen::new(3, 3);
        screen.cursor_down(5);
        screen.cursor_right(5);
        assert_eq!(screen.cursor(), (2, 2));
    }

    #[test]
    fn cursor_move_is_one_indexed_and_zero_means_one() {
        let mut screen = Screen::new(5, 5);
        screen.cursor_move(0, 0);
        assert_eq!(screen.cursor(), (0, 0));
        screen.cursor_move(2, 3);
        assert_eq!(screen.cursor(), (2, 1));
    }

    #[test]
    fn resize_grows_and_shrinks_rows_and_cols() {
        let mut screen = Screen::new(2, 2);
        screen.print('a');
        screen.resize(3, 3);
        assert_eq!(screen.size(), (3, 3));
        assert_eq!(screen.display()[0], "a  ");
        assert_eq!(screen.display().len(), 3);

        screen.resize(2, 2);
        assert_eq!(screen.size(), (2, 2));
        assert_eq!(screen.display()[0].chars().count(), 2);
    }

    #[test]
    fn resize_prunes_tab_stops_past_the_new_right_margin() {
        let mut screen = Screen::new(5, 10);
        screen.x = 8;
        screen.set_tab_stop();
        screen.x = 2;
        screen.set_tab_stop();

        screen.resize(5, 4);
        screen.x = 0;

        // The stop at column 8 no longer fits; only the one at column 2
        // survives, and a subsequent tab past it clamps to the margin
        // instead of landing on the stale out-of-range stop.
        screen.tab();
        assert_eq!(screen.cursor().0, 2);
        screen.tab();
        assert_eq!(screen.cursor().0, 3);

        screen.print('z');
        assert_eq!(screen.display()[0], "   z");
    }

    #[test]
    fn delete_lines_keeps_row_count_and_uses_default_attributes() {
        let mut screen = Screen::new(3, 3);
        screen.select_graphic_rendition(&[1]);
        screen.print('a');
        screen.y = 1;
        screen.delete_lines(1);

        assert_eq!(screen.display().len(), 3);
        assert_eq!(screen.attributes()[2][0], Attribute::default());
    }

    #[test]
    fn insert_lines_shifts_down_and_trims_bottom() {
        let mut screen = Screen::new(3, 1);
        screen.print('a');
        screen.y = 1;
        screen.x = 0;
        screen.print('b');
        screen.y = 2;
        screen.x = 0;
        screen.print('c');

        screen.y = 1;
        screen.insert_lines(1);

        assert_eq!(screen.display(), ["a", " ", "b"]);
    }

    #[test]
    fn delete_characters_shifts_row_left_and_pads() {
        let mut screen = Screen::new(1, 5);
        for c in "abcde".chars() {
            screen.print(c);
        }
        screen.x = 1;
        screen.delete_characters(2);
        assert_eq!(screen.display()[0], "ade  ");
    }

    #[test]
    fn dec_special_graphics_charset_translates_prints() {
        let mut screen = Screen::new(1, 1);
        screen.charset_g0('0');
        screen.print('q');
        assert_eq!(screen.display()[0], "\u{2500}");
    }

    #[test]
    fn attach_updates_screen_through_parser() {
        let screen = Rc::new(RefCell::new(Screen::new(2, 10)));
        let mut parser = Parser::default();
        Screen::attach(&screen, &mut parser);

        parser.process("Text goes here".chars()).unwrap();

        assert_eq!(screen.borrow().display()[0], "Text goes ");
        assert_eq!(screen.borrow().display()[1], "here      ");
    }
}

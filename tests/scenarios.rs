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

use std::cell::RefCell;
use std::rc::Rc;

use vt1xx::event::{Event, EventListener};
use vt1xx::parser::Parser;
use vt1xx::term::cell::{Attribute, TextStyle};
use vt1xx::term::Screen;

fn attached(rows: usize, cols: usize) -> (Rc<RefCell<Screen>>, Parser) {
    let _ = env_logger::builder().is_test(true).try_init();
    let screen = Rc::new(RefCell::new(Screen::new(rows, cols)));
    let mut parser = Parser::default();
    Screen::attach(&screen, &mut parser);
    (screen, parser)
}

#[test]
fn basic_text_on_a_2x4_grid() {
    let (screen, mut parser) = attached(2, 4);
    parser.process("тест".chars()).unwrap();

    let screen = screen.borrow();
    assert_eq!(screen.display()[0], "тест");
    assert_eq!(screen.display()[1], "    ");
    // Cursor position after exactly filling the last column is
    // deliberately unspecified (this implementation wraps immediately);
    // only the resulting grid is a binding observable.
}

#[test]
fn cursor_down_parse_on_a_fresh_parser() {
    let events = Rc::new(RefCell::new(Vec::new()));

    struct Recorder(Rc<RefCell<Vec<Event>>>);
    impl EventListener for Recorder {
        fn handle(&mut self, event: Event) {
            self.0.borrow_mut().push(event);
        }
    }

    let mut parser = Parser::default();
    parser.add_event_listener(Box::new(Recorder(events.clone())));

    parser.process("\u{0}\u{1b}[5\u{42}".chars()).unwrap();

    assert_eq!(*events.borrow(), vec![Event::CursorDown(5)]);
}

#[test]
fn erase_in_display_on_a_5x5_filled_grid() {
    let (screen, _parser) = attached(5, 5);
    {
        let mut screen = screen.borrow_mut();
        // Five full rows of five glyphs each wrap into place one after
        // another via the same linefeed-on-wrap path `print` always uses.
        for c in "sam is foobut are you?   ".chars().take(25) {
            screen.print(c);
        }
        screen.cursor_move(3, 1); // row 3, 1-indexed == y = 2
        screen.erase_in_display(0);
    }

    let screen = screen.borrow();
    assert_eq!(screen.display()[0], "sam i");
    assert_eq!(screen.display()[1], "s foo");
    assert_eq!(screen.display()[2], "     ");
    assert_eq!(screen.display()[3], "     ");
    assert_eq!(screen.display()[4], "     ");
}

#[test]
fn attribute_accumulation() {
    let (screen, mut parser) = attached(2, 2);

    parser.process("\u{1b}[1m\u{1b}[5mx".chars()).unwrap();
    {
        let screen = screen.borrow();
        let attr = screen.attributes()[0][0];
        assert!(attr.style.contains(TextStyle::BOLD));
        assert!(attr.style.contains(TextStyle::BLINK));
    }

    parser.process("\u{1b}[0my".chars()).unwrap();
    let screen = screen.borrow();
    assert_eq!(screen.attributes()[0][1], Attribute::default());
}

#[test]
fn tab_stops_on_a_10x10_screen() {
    let (screen, _parser) = attached(10, 10);
    let mut screen = screen.borrow_mut();

    screen.cursor_move(1, 2); // x = 1
    screen.set_tab_stop();
    screen.cursor_move(1, 9); // x = 8
    screen.set_tab_stop();
    screen.cursor_move(1, 1); // x = 0

    let mut stops = Vec::new();
    for _ in 0..4 {
        screen.tab();
        stops.push(screen.cursor().0);
    }
    assert_eq!(stops, vec![1, 8, 9, 9]);
}

#[test]
fn saved_cursor_stack() {
    let (screen, _parser) = attached(10, 10);
    let mut screen = screen.borrow_mut();

    screen.store_cursor(); // save at (0, 0)
    screen.cursor_move(6, 4); // (x, y) = (3, 5)
    screen.store_cursor(); // save at (3, 5)
    screen.cursor_move(5, 5); // (x, y) = (4, 4)

    screen.restore_cursor();
    assert_eq!(screen.cursor(), (3, 5));
    screen.restore_cursor();
    assert_eq!(screen.cursor(), (0, 0));
    screen.restore_cursor();
    assert_eq!(screen.cursor(), (0, 0));
}

#[test]
fn resizing_to_the_current_shape_is_identity() {
    let (screen, mut parser) = attached(2, 4);
    parser.process("hi".chars()).unwrap();

    let mut screen = screen.borrow_mut();
    let before = screen.display().to_vec();
    screen.resize(2, 4);

    assert_eq!(screen.display(), before.as_slice());
}

#[test]
fn processing_concatenated_input_matches_processing_each_part() {
    let (screen_a, mut parser_a) = attached(3, 10);
    parser_a.process("hello world".chars()).unwrap();

    let (screen_b, mut parser_b) = attached(3, 10);
    parser_b.process("hello ".chars()).unwrap();
    parser_b.process("world".chars()).unwrap();

    assert_eq!(screen_a.borrow().display(), screen_b.borrow().display());
}

#[test]
fn cursor_motion_is_a_no_op_at_margins() {
    let (screen, _parser) = attached(3, 3);
    let mut screen = screen.borrow_mut();

    screen.cursor_up(1);
    screen.cursor_left(1);
    assert_eq!(screen.cursor(), (0, 0));

    screen.cursor_move(3, 3); // (x, y) = (2, 2)
    screen.cursor_down(1);
    screen.cursor_right(1);
    assert_eq!(screen.cursor(), (2, 2));
}

#[test]
fn printing_past_the_last_column_and_row_scrolls() {
    let (screen, mut parser) = attached(1, 2);
    parser.process("abc".chars()).unwrap();

    // Last row, last column: the third glyph wraps and scrolls, leaving
    // a single-row screen containing only the just-scrolled-in glyph.
    let screen = screen.borrow();
    assert_eq!(screen.display()[0], "c ");
}

//! Terminal front end: prompts on stdout, answers from stdin
//!
//! Coordinates are 1-indexed on screen and converted before they reach the
//! game.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::board::{Board, Pos, BOARD_SIZE};
use crate::config::Glyphs;
use crate::game::{Event, Input, InputProvider, RenderSink};

/// Draw the board as rows of `| x | x | ... |`, with a blank line above and below.
pub fn render_board(board: &Board, glyphs: &Glyphs) -> String {
    let mut out = String::from("\n");
    for row in 0..BOARD_SIZE {
        out.push('|');
        for col in 0..BOARD_SIZE {
            let cell = board.get(Pos::new(row as u8, col as u8));
            out.push(' ');
            out.push_str(glyphs.for_cell(cell));
            out.push_str(" |");
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Parse one 1-indexed coordinate into a 0-indexed one.
///
/// Anything that is not a whole number >= 1 is rejected here; numbers past
/// the board edge pass through and are refused by the board.
fn parse_coordinate(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// Reads moves as two whitespace-separated numbers, row then column.
///
/// Both may sit on one line; a prompt is only written when no unread word
/// is left over from the previous line.
pub struct LineInput<R, W> {
    reader: R,
    prompt: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            pending: VecDeque::new(),
        }
    }

    /// Next word of input, prompting first if none is buffered; `None` at end of input
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        if let Some(word) = self.pending.pop_front() {
            return Ok(Some(word));
        }
        write!(self.prompt, "{question}")?;
        self.prompt.flush()?;

        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
            if let Some(word) = self.pending.pop_front() {
                return Ok(Some(word));
            }
        }
    }
}

impl<R: BufRead, W: Write> InputProvider for LineInput<R, W> {
    fn request_move(&mut self) -> io::Result<Input> {
        let Some(row) = self.ask("Enter the line number : ")? else {
            return Ok(Input::Closed);
        };
        let Some(col) = self.ask("Enter the column number : ")? else {
            return Ok(Input::Closed);
        };

        Ok(match (parse_coordinate(&row), parse_coordinate(&col)) {
            (Some(row), Some(col)) => Input::Square { row, col },
            _ => Input::Rejected,
        })
    }
}

/// Writes boards and messages as plain text.
pub struct TextRenderer<W> {
    out: W,
    glyphs: Glyphs,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        self.out.write_all(render_board(board, &self.glyphs).as_bytes())?;
        self.out.flush()
    }

    fn announce(&mut self, event: Event) -> io::Result<()> {
        writeln!(self.out, "{event}")?;
        self.out.flush()
    }
}

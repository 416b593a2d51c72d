//! Board rendering for the board window

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Pos, BOARD_SIZE};
use crate::rules::Line;

use super::theme::*;

/// Board view handles rendering and input for the 5x5 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid area, excluding the margin
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked square, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<Line>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let side = (available.x.min(available.y) - 20.0).max(2.0 * BOARD_MARGIN + 50.0);
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);
        self.grid_rect = response.rect.shrink(BOARD_MARGIN);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !accepts_input {
            return None;
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&pos| board.is_empty(pos));

        if let Some(pos) = hovered {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(2), hover_valid());
            if response.clicked() {
                return Some(pos);
            }
        }
        None
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let span = self.cell_size * BOARD_SIZE as f32;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([min + Vec2::new(offset, 0.0), min + Vec2::new(offset, span)], stroke);
            painter.line_segment([min + Vec2::new(0.0, offset), min + Vec2::new(span, offset)], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, cell) in board.all_cells() {
            self.draw_mark(painter, pos, cell);
        }
    }

    /// Ring for player A, cross for player B
    fn draw_mark(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_SIZE_RATIO * 0.5;
        let width = (self.cell_size * 0.08).max(2.0);

        match cell {
            Cell::PlayerA => {
                painter.circle_stroke(center, half, Stroke::new(width, PLAYER_A_MARK));
            }
            Cell::PlayerB => {
                let stroke = Stroke::new(width, PLAYER_B_MARK);
                painter.line_segment([center + Vec2::new(-half, -half), center + Vec2::new(half, half)], stroke);
                painter.line_segment([center + Vec2::new(-half, half), center + Vec2::new(half, -half)], stroke);
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).min + Vec2::splat(LAST_MOVE_MARKER_RADIUS * 2.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &Line) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[BOARD_SIZE - 1]);
        painter.line_segment([start, end], stroke);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Centre of a square in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

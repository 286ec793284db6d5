//! Board rendering and mouse mapping for the checkers GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Pos, BOARD_SIZE};
use crate::rules::Move;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// Everything the view highlights besides the pieces
#[derive(Debug, Clone, Default)]
pub struct Highlights {
    pub selected: Option<Pos>,
    pub targets: Vec<Pos>,
    pub last_move: Option<Move>,
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        highlights: &Highlights,
        interactive: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(160.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        self.draw_squares(&painter);

        if let Some(mv) = highlights.last_move {
            self.draw_last_move(&painter, mv);
        }
        if let Some(pos) = highlights.selected {
            self.draw_selection(&painter, pos);
        }

        self.draw_pieces(&painter, board);

        for &target in &highlights.targets {
            self.draw_target(&painter, target);
        }

        if !interactive || !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pointer| self.screen_to_board(pointer))
    }

    /// Draw the 8x8 checkered pattern
    fn draw_squares(&self, painter: &Painter) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let color = if pos.is_playable() {
                    DARK_SQUARE
                } else {
                    LIGHT_SQUARE
                };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, color);
            }
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let cell = board.get(pos);
                if !cell.is_empty() {
                    self.draw_piece(painter, pos, cell);
                }
            }
        }
    }

    /// Draw a single piece; kings get a darker body and a crown ring
    fn draw_piece(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let body = match cell {
            Cell::RedMan => RED_PIECE,
            Cell::RedKing => RED_KING,
            Cell::BlueMan => BLUE_PIECE,
            Cell::BlueKing => BLUE_KING,
            Cell::Empty => return,
        };

        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, shadow());
        painter.circle_filled(center, radius, body);

        if cell.is_king() {
            painter.circle_stroke(
                center,
                self.cell_size * CROWN_RADIUS_RATIO,
                Stroke::new(MARKER_WIDTH, CROWN_RING),
            );
        }
    }

    fn draw_selection(&self, painter: &Painter, pos: Pos) {
        let radius = self.cell_size * (PIECE_RADIUS_RATIO + 0.06);
        painter.circle_stroke(
            self.board_to_screen(pos),
            radius,
            Stroke::new(MARKER_WIDTH, SELECTED_RING),
        );
    }

    fn draw_target(&self, painter: &Painter, pos: Pos) {
        painter.circle_filled(
            self.board_to_screen(pos),
            self.cell_size * TARGET_RADIUS_RATIO,
            target_marker(),
        );
    }

    /// Outline both ends of the last move
    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        let stroke = Stroke::new(MARKER_WIDTH, LAST_MOVE_MARKER);
        for pos in [mv.from, mv.to] {
            let rect = self.cell_rect(pos).shrink(MARKER_WIDTH);
            let corners = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
                rect.left_top(),
            ];
            painter.line(corners.to_vec(), stroke);
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Center of a cell on screen
    fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Map a screen coordinate to a cell, `None` outside the grid
    fn screen_to_board(&self, screen: Pos2) -> Option<Pos> {
        cell_at(
            screen - self.board_rect.min - Vec2::splat(BOARD_MARGIN),
            self.cell_size,
        )
    }
}

/// Cell under an offset measured from the grid's top-left corner
fn cell_at(offset: Vec2, cell_size: f32) -> Option<Pos> {
    if cell_size <= 0.0 || offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let col = (offset.x / cell_size) as i32;
    let row = (offset.y / cell_size) as i32;
    Pos::try_new(row, col).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at() {
        assert_eq!(cell_at(Vec2::new(10.0, 10.0), 50.0), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(Vec2::new(75.0, 160.0), 50.0), Some(Pos::new(3, 1)));
        assert_eq!(cell_at(Vec2::new(399.0, 399.0), 50.0), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_cell_at_outside() {
        assert_eq!(cell_at(Vec2::new(-1.0, 10.0), 50.0), None);
        assert_eq!(cell_at(Vec2::new(10.0, 400.0), 50.0), None);
        assert_eq!(cell_at(Vec2::new(10.0, 10.0), 0.0), None);
    }
}

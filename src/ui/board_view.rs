//! Board rendering for the GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::board::{Mark, Pos};
use crate::game::Game;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Side length of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 56.0,
            board_rect: Rect::NOTHING,
            size: 3,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any
    pub fn show(&mut self, ui: &mut egui::Ui, game: &Game) -> Option<usize> {
        self.size = game.board().size();
        let n = self.size as f32;

        let available = ui.available_size();
        let fit = (available.x.min(available.y) - 2.0 * BOARD_MARGIN - (n - 1.0) * CELL_GAP) / n;
        self.cell_size = fit.clamp(24.0, MAX_CELL_SIZE);
        let side = 2.0 * BOARD_MARGIN + n * self.cell_size + (n - 1.0) * CELL_GAP;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_index(p))
            .filter(|&i| game.board().is_empty_at(i) && !game.is_finished());

        for (index, &mark) in game.board().cells().iter().enumerate() {
            let bg = if game.highlighted().contains(&index) {
                WIN_CELL_BG
            } else if hovered == Some(index) {
                CELL_HOVER
            } else {
                CELL_BG
            };
            self.draw_cell(&painter, index, bg);
            self.draw_mark(&painter, index, mark);
        }

        if let Some(line) = game.winning_line() {
            self.draw_winning_line(&painter, line.cells());
        }

        if let Some(index) = hovered {
            self.draw_hover_preview(&painter, index, game.next_player(), game.would_win(index));
        }

        // Occupied cells and finished games are filtered by the game, not here
        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_index(p));
        }
        None
    }

    fn draw_cell(&self, painter: &Painter, index: usize, fill: Color32) {
        let rect = self.cell_rect(index);
        painter.rect_filled(rect, CornerRadius::same(4), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(1.0, CELL_BORDER),
            StrokeKind::Inside,
        );
    }

    fn draw_mark(&self, painter: &Painter, index: usize, mark: Mark) {
        let Some(symbol) = mark.symbol() else {
            return;
        };
        painter.text(
            self.cell_rect(index).center(),
            egui::Align2::CENTER_CENTER,
            symbol,
            egui::FontId::proportional(self.cell_size * MARK_FONT_RATIO),
            mark_color(mark, 255),
        );
    }

    /// Draw a stroke through the winning run
    fn draw_winning_line(&self, painter: &Painter, cells: &[usize]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);
        for pair in cells.windows(2) {
            let start = self.cell_rect(pair[0]).center();
            let end = self.cell_rect(pair[1]).center();
            painter.line_segment([start, end], stroke);
        }
    }

    /// Ghost of the mark the next click would place
    fn draw_hover_preview(&self, painter: &Painter, index: usize, turn: Mark, winning: bool) {
        let rect = self.cell_rect(index);
        if winning {
            painter.rect_filled(rect.shrink(3.0), CornerRadius::same(4), winning_hover());
        }
        if let Some(symbol) = turn.symbol() {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                symbol,
                egui::FontId::proportional(self.cell_size * MARK_FONT_RATIO),
                mark_color(turn, 90),
            );
        }
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, index: usize) -> Rect {
        let pos = Pos::from_index(index, self.size);
        let pitch = self.cell_size + CELL_GAP;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * pitch,
                BOARD_MARGIN + pos.row as f32 * pitch,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index; gaps map to nothing
    pub fn screen_to_index(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }

        let pitch = self.cell_size + CELL_GAP;
        let col = (relative.x / pitch).floor() as usize;
        let row = (relative.y / pitch).floor() as usize;
        if col >= self.size || row >= self.size {
            return None;
        }

        let index = Pos::new(row, col).to_index(self.size);
        self.cell_rect(index).contains(screen_pos).then_some(index)
    }
}

fn mark_color(mark: Mark, alpha: u8) -> Color32 {
    let base = match mark {
        Mark::X => MARK_X,
        Mark::O => MARK_O,
        Mark::Empty => return Color32::TRANSPARENT,
    };
    Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(size: usize) -> BoardView {
        BoardView {
            cell_size: 40.0,
            board_rect: Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(400.0)),
            size,
        }
    }

    #[test]
    fn test_cell_centers_map_back() {
        let view = view(5);
        for index in 0..25 {
            let center = view.cell_rect(index).center();
            assert_eq!(view.screen_to_index(center), Some(index));
        }
    }

    #[test]
    fn test_gaps_and_margins_miss() {
        let view = view(3);
        // Top-left margin
        assert_eq!(view.screen_to_index(Pos2::new(105.0, 55.0)), None);
        // Gap between cells 0 and 1
        let gap_x = view.cell_rect(0).max.x + CELL_GAP / 2.0;
        assert_eq!(view.screen_to_index(Pos2::new(gap_x, 80.0)), None);
        // Past the last column
        assert_eq!(view.screen_to_index(Pos2::new(480.0, 80.0)), None);
    }
}

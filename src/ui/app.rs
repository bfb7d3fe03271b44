//! Main application for the GUI

use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use strum::IntoEnumIterator;
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::board::Variant;
use crate::game::Game;
use crate::rules::GameStatus;

/// Main application
pub struct GridGameApp {
    game: Game,
    board_view: BoardView,
}

impl Default for GridGameApp {
    fn default() -> Self {
        Self::with_variant(Variant::default())
    }
}

impl GridGameApp {
    /// Create the app starting on `variant`
    pub fn new(_cc: &eframe::CreationContext<'_>, variant: Variant) -> Self {
        Self::with_variant(variant)
    }

    pub fn with_variant(variant: Variant) -> Self {
        Self {
            game: Game::new(variant),
            board_view: BoardView::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Forward a cell click to the game; rejected clicks are ignored
    pub fn cell_clicked(&mut self, index: usize) {
        if let Err(err) = self.game.apply_move(index) {
            debug!(index, %err, "click ignored");
        }
    }

    pub fn reset_requested(&mut self) {
        self.game.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for variant in Variant::iter() {
                        if ui.button(format!("New {variant}")).clicked() {
                            self.game.new_game(variant);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Reset (R)").clicked() {
                        self.reset_requested();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let v = self.game.variant();
                    ui.label(format!("{v} - {0}x{0}, {1} in a row", v.size(), v.run_length()));
                });
            });
        });
    }

    /// Render the side panel with status and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let title = self.game.variant().to_string().to_uppercase();
                    ui.label(RichText::new(title).size(20.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.game.status() {
                GameStatus::Won(_) => WIN_HIGHLIGHT,
                _ => TEXT_PRIMARY,
            };
            ui.label(RichText::new(status_text(&self.game)).size(18.0).strong().color(color));

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    let label = RichText::new("↺ Reset Game").size(14.0).strong().color(TEXT_PRIMARY);
                    if ui.add(egui::Label::new(label).sense(egui::Sense::click())).clicked() {
                        self.reset_requested();
                    }
                });
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(index) = self.board_view.show(ui, &self.game) {
                    self.cell_clicked(index);
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let reset = ctx.input(|i| i.key_pressed(egui::Key::R) || i.key_pressed(egui::Key::N));
        if reset {
            self.reset_requested();
        }
    }
}

/// Status line shown above the board
pub fn status_text(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => format!("Next player: {}", game.next_player()),
        GameStatus::Won(mark) => format!("Winner: {mark}"),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

impl eframe::App for GridGameApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

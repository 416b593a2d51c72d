//! Main application for the board window

use std::time::Duration;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Window frontend: human plays `PlayerA` by clicking
pub struct ConnectFiveApp {
    state: GameState,
    board_view: BoardView,
}

impl ConnectFiveApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, pacing: Duration, seed: Option<u64>) -> Self {
        Self {
            state: GameState::new(pacing, seed),
            board_view: BoardView::default(),
        }
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("CONNECT FIVE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_opponent_card(ui);
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                    }
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Move #{}", self.state.game.move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(12.0).color(STATUS_WAIT));
                }
            });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let color = if self.state.game.is_over() {
                WIN_HIGHLIGHT
            } else if self.state.is_opponent_waiting() {
                STATUS_WAIT
            } else {
                STATUS_OK
            };
            ui.label(RichText::new(self.state.status_text()).size(16.0).strong().color(color));
        });
    }

    fn render_opponent_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("OPPONENT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            match self.state.last_decision {
                Some(decision) => {
                    ui.label(
                        RichText::new(format!(
                            "Played ({}, {})",
                            decision.pos.row + 1,
                            decision.pos.col + 1
                        ))
                        .size(13.0)
                        .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(format!("by {}", decision.rule))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("Waiting for your move").size(11.0).color(TEXT_SECONDARY));
                }
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let last_move = self.state.game.last_move().map(|mv| mv.pos);
            let winning_line = self.state.winning_line();
            let accepts_input = self.state.is_human_turn();

            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                last_move,
                winning_line,
                accepts_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

impl eframe::App for ConnectFiveApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.poll_opponent();

        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Wake up again when the opponent is due
        if let Some(remaining) = self.state.opponent_remaining() {
            ctx.request_repaint_after(remaining);
        }
    }
}

//! Main application for the checkers GUI

use eframe::egui;
use egui::{
    CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2,
};

use super::board_view::{BoardView, Highlights};
use super::game_state::{GameResult, GameState, WinReason};
use super::theme::*;
use crate::board::Player;
use crate::config::{GameConfig, GameMode};
use crate::eval;

/// Main checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl CheckersApp {
    /// Create the app with settings chosen at startup
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Restart with a different mode, keeping algorithm and depth
    fn new_game(&mut self, mode: GameMode) {
        let config = GameConfig {
            mode,
            ..self.state.config
        };
        self.state = GameState::new(config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Red)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Red });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Blue)").clicked() {
                        self.new_game(GameMode::PvE {
                            human: Player::Blue,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.config.mode {
                        GameMode::PvE { human } => format!(
                            "PvE - You: {} - {} depth {}",
                            human, self.state.config.algorithm, self.state.config.depth
                        ),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_material_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_PIECE));
            ui.label(RichText::new("●").size(20.0).color(BLUE_PIECE));
            ui.add_space(4.0);
            ui.label(
                RichText::new("CHECKERS")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let accent = piece_color(turn);

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.to_string().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(
                    RichText::new(format!("{:.2}s", secs))
                        .size(28.0)
                        .strong()
                        .color(color),
                );
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Piece counts and material balance for both sides
    fn render_material_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MATERIAL").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for player in [Player::Red, Player::Blue] {
                let board = &self.state.board;
                let kings = board
                    .pieces(player)
                    .filter(|(_, cell)| cell.is_king())
                    .count();
                let men = board.count(player) - kings;

                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(18.0).color(piece_color(player)));
                    ui.label(
                        RichText::new(format!("{men} men, {kings} kings"))
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{:+.1}", eval::evaluate(board, player)))
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if action_button(ui, "Undo (U)") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if action_button(ui, "New Game (N)") {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Diagnostics of the last AI search
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{} (depth {})", result.algorithm, result.depth))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(
                            RichText::new(format!("Score: {:.1}", result.score))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms()))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes()))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                            ui.label(
                                RichText::new(format!("{} cutoffs", result.stats.cutoffs))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(mv) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("→ {mv}"))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: GameResult) {
        let reason = match result.reason {
            WinReason::NoPiecesLeft => "no pieces left",
            WinReason::NoMovesLeft => "no moves left",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(
                            RichText::new("●")
                                .size(32.0)
                                .color(piece_color(result.winner)),
                        );
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(result.winner.to_string().to_uppercase())
                                    .size(18.0)
                                    .strong()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("opponent has {reason}"))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if action_button(ui, "New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let highlights = Highlights {
                selected: self.state.selected,
                targets: self.state.selected_targets(),
                last_move: self.state.last_move,
            };
            let interactive = self.state.game_over.is_none() && self.state.is_human_turn();

            let clicked = self
                .board_view
                .show(ui, &self.state.board, &highlights, interactive);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.handle_click(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer ticking while a game is running
        if self.state.game_over.is_none() {
            ctx.request_repaint();
        }
    }
}

fn piece_color(player: Player) -> egui::Color32 {
    match player {
        Player::Red => RED_PIECE,
        Player::Blue => BLUE_PIECE,
    }
}

/// Clickable label styled as a button
fn action_button(ui: &mut egui::Ui, text: &str) -> bool {
    Frame::new()
        .fill(egui::Color32::from_rgb(50, 53, 58))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click()),
            )
            .clicked()
        })
        .inner
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(egui::Color32::from_rgb(80, 60, 30))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("!").size(14.0).strong().color(TIMER_WARNING));
                ui.add_space(4.0);
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
        });
}

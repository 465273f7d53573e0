use crate::painter::EguiSurface;

use eframe::egui;
use egui::{Color32, Vec2};
use klondike_common::render::draw_table;
use klondike_common::{Game, InputController, InputEvent, Layout, PointerState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

const TABLE_COLOR: Color32 = Color32::from_rgb(0, 100, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
    Won,
}

pub struct KlondikeApp {
    game: Game,
    input: InputController,
    screen: Screen,
    seed: Option<u64>,
}

impl eframe::App for KlondikeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Menu => self.draw_menu(ctx),
            Screen::Playing => self.play(ctx),
            Screen::Won => {
                self.show_table(ctx);
                self.popup_win(ctx);
            }
        }

        if self.screen != Screen::Menu && ctx.input_mut(|i| i.key_pressed(egui::Key::N)) {
            self.renew();
        }

        ctx.request_repaint();
    }
}

impl KlondikeApp {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            game: Self::deal(seed),
            input: InputController::new(),
            screen: Screen::Menu,
            seed,
        }
    }

    fn deal(seed: Option<u64>) -> Game {
        match seed {
            Some(seed) => {
                info!(seed, "Dealing seeded game");
                Game::with_rng(&mut StdRng::seed_from_u64(seed))
            }
            None => Game::new(),
        }
    }

    /// Renew the game. A seeded session replays the same deal.
    fn renew(&mut self) {
        self.game = Self::deal(self.seed);
        self.input.reset();
        self.screen = Screen::Playing;
    }

    fn draw_menu(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.heading("Press ENTER to Start");
            });
        });

        let start = ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.pointer.primary_pressed());
        if start {
            self.screen = Screen::Playing;
        }
    }

    fn play(&mut self, ctx: &egui::Context) {
        let layout = Self::layout(ctx);
        let pointer = ctx.input(|i| PointerState {
            pos: i.pointer.latest_pos().unwrap_or_default(),
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
        });

        let event = self.input.update(&mut self.game, &layout, &pointer);
        if !matches!(event, InputEvent::None | InputEvent::Dragged) {
            debug!(?event, "Input");
        }

        self.show_table(ctx);

        if self.game.is_won() {
            self.screen = Screen::Won;
        }
    }

    fn show_table(&self, ctx: &egui::Context) {
        let layout = Self::layout(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(TABLE_COLOR))
            .show(ctx, |ui| {
                let mut surface = EguiSurface::new(ui.painter().clone());
                draw_table(&self.game, &layout, self.input.drag(), &mut surface);
            });
    }

    fn popup_win(&mut self, ctx: &egui::Context) {
        egui::Window::new("Victory")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label("Congratulations, you won the game!");
                    if ui.button("Play Again").clicked() {
                        self.renew();
                    }
                });
            });
    }

    fn layout(ctx: &egui::Context) -> Layout {
        let size: Vec2 = ctx.screen_rect().size();
        Layout::new(size)
    }
}

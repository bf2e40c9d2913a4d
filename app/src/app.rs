use std::time::{Duration, Instant};

use eframe::{CreationContext, Frame};
use egui::{
    Color32, ColorImage, Context, Key, Response, Sense, TextureHandle, TextureOptions, Ui,
    load::SizedTexture,
};
use life::{Config, Phase, Simulation};
use log::{error, info};

use crate::render;

const SEED_HINT: &str = "Click to create initial conditions.";
const START_HINT: &str = "Press s to start, or r for random conditions.";

pub struct App {
    sim: Simulation,
    config: Config,
    settings: render::Settings,
    tick_interval: Duration,
    last_tick: Instant,
    texture: Option<TextureHandle>,
}

impl App {
    /// Called once before the first frame.
    pub fn new(
        _cc: &CreationContext<'_>,
        config: Config,
        settings: render::Settings,
        tick_interval: Duration,
    ) -> life::Result<Self> {
        Ok(Self {
            sim: config.simulation()?,
            config,
            settings,
            tick_interval,
            last_tick: Instant::now(),
            texture: None,
        })
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (random, start) = ctx.input(|i| (i.key_pressed(Key::R), i.key_pressed(Key::S)));
        if !(random || start) || self.sim.phase() != Phase::Seeding {
            return;
        }
        if random {
            self.sim.randomize(self.config.population, self.config.seed);
        } else if start {
            self.sim.start();
        }
        self.last_tick = Instant::now();
    }

    fn advance(&mut self) {
        if self.sim.phase() != Phase::Running || self.last_tick.elapsed() < self.tick_interval {
            return;
        }
        self.last_tick = Instant::now();
        match self.sim.step() {
            Ok(Phase::Terminated) => info!("stopped after {} generations", self.sim.generation()),
            Ok(_) => (),
            Err(e) => error!("tick failed: {e}"),
        }
    }

    fn show_grid(&mut self, ctx: &Context, ui: &mut Ui) -> Response {
        let pixels = render::render(self.sim.current(), self.settings);
        let pixels: Vec<Color32> = pixels.into_iter().map(From::from).collect();
        let image = ColorImage::new(self.settings.image_size(self.sim.current()), pixels);
        let options = TextureOptions::NEAREST;
        let texture = match self.texture.take() {
            Some(mut t) if t.size() == image.size => {
                t.set(image, options);
                t
            }
            _ => ctx.load_texture("life", image, options),
        };
        let size = texture.size_vec2();
        let sized_texture = SizedTexture::new(&texture, size);
        let response = ui.add(
            egui::Image::new(sized_texture)
                .fit_to_exact_size(size)
                .sense(Sense::click()),
        );
        self.texture = Some(texture);
        response
    }

    fn toggle_clicked(&mut self, response: &Response) {
        if !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let local = pos - response.rect.min;
        let Some((row, col)) = self.settings.cell_at(self.sim.current(), (local.x, local.y)) else {
            return;
        };
        if let Some(grid) = self.sim.seed_grid_mut() {
            if let Err(e) = grid.toggle(row, col) {
                error!("toggle failed: {e}");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.handle_keys(ctx);
        self.advance();
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.sim.phase() {
                Phase::Seeding => {
                    ui.label(SEED_HINT);
                    ui.label(START_HINT);
                }
                Phase::Running => {
                    ui.label(format!("Generation {}", self.sim.generation()));
                }
                Phase::Terminated => {
                    ui.label(format!(
                        "All cells died after {} generations.",
                        self.sim.generation()
                    ));
                }
            }
            let response = self.show_grid(ctx, ui);
            self.toggle_clicked(&response);
        });
        if self.sim.phase() == Phase::Running {
            ctx.request_repaint_after(self.tick_interval.saturating_sub(self.last_tick.elapsed()));
        }
    }
}

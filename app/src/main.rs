use std::time::Duration;

use clap::Parser;
use egui::Rgba;
use life::{Boundary, Config};

mod app;
mod render;

/// Conway's Game of Life in a window.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 120)]
    rows: usize,
    #[arg(long, default_value_t = 120)]
    columns: usize,
    /// Random draws made when pressing r.
    #[arg(long, default_value_t = 2000)]
    population: usize,
    /// Seed for reproducible random conditions.
    #[arg(long)]
    seed: Option<u64>,
    /// Wrap neighbours around the grid edges.
    #[arg(long)]
    toroidal: bool,
    /// Side of one cell in pixels.
    #[arg(long, default_value_t = 5)]
    cell_size: usize,
    #[arg(long, default_value_t = 5.0)]
    ticks_per_second: f64,
}

impl Args {
    fn config(&self) -> Config {
        let boundary = if self.toroidal {
            Boundary::Toroidal
        } else {
            Boundary::Clamped
        };
        let config = Config::default()
            .rows(self.rows)
            .columns(self.columns)
            .population(self.population)
            .boundary(boundary);
        match self.seed {
            Some(seed) => config.seed(seed),
            None => config,
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    let settings = render::Settings::new(args.cell_size, Rgba::WHITE, Rgba::BLACK);
    let tick_interval = Duration::from_secs_f64(1. / args.ticks_per_second.max(0.1));
    let width = (args.columns * settings.cell_size()) as f32 + 16.;
    let height = (args.rows * settings.cell_size()) as f32 + 56.;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, settings, tick_interval)?))),
    )
}

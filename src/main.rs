use std::{
    error::Error,
    fs,
    io::Write,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use clap::Parser;
use life::{Boundary, Config, Grid, Phase};
use log::info;

/// Runs Conway's Game of Life in the terminal until every cell is dead.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 30)]
    rows: usize,
    #[arg(long, default_value_t = 60)]
    columns: usize,
    /// Random draws made when seeding.
    #[arg(long, default_value_t = 400)]
    population: usize,
    /// Seed for reproducible random conditions.
    #[arg(long)]
    seed: Option<u64>,
    /// Start from a pattern file (`o` alive, `.` dead) placed in the centre
    /// instead of random conditions.
    #[arg(long)]
    pattern: Option<PathBuf>,
    /// Wrap neighbours around the grid edges.
    #[arg(long)]
    toroidal: bool,
    /// Stop after this many generations even if cells are still alive.
    #[arg(long)]
    generations: Option<u64>,
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,
    /// Only print a summary at the end.
    #[arg(long)]
    quiet: bool,
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

fn load_pattern(path: &Path, grid: &mut Grid) -> Result<(), Box<dyn Error>> {
    let pattern: Grid = fs::read_to_string(path)?.parse()?;
    place_centred(grid, &pattern)?;
    Ok(())
}

/// Pastes `pattern` in the middle of `grid`, rounding towards the top left.
fn place_centred(grid: &mut Grid, pattern: &Grid) -> life::Result<()> {
    let (rows, columns) = grid.dimensions();
    let (height, width) = pattern.dimensions();
    let at = (rows.saturating_sub(height) / 2, columns.saturating_sub(width) / 2);
    grid.paste(pattern, at)
}

fn draw(out: &mut impl Write, grid: &Grid, generation: u64) -> std::io::Result<()> {
    // Clear the screen and home the cursor.
    write!(out, "\x1b[2J\x1b[H")?;
    writeln!(out, "{grid}")?;
    writeln!(out, "generation {generation}, population {}", grid.population())?;
    out.flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    let mut sim = config.simulation()?;
    match &args.pattern {
        Some(path) => {
            if let Some(grid) = sim.seed_grid_mut() {
                load_pattern(path, grid)?;
            }
            sim.start();
        }
        None => {
            sim.randomize(config.population, config.seed);
        }
    }

    let delay = Duration::from_millis(args.delay_ms);
    let mut out = std::io::stdout().lock();
    if !args.quiet {
        draw(&mut out, sim.current(), sim.generation())?;
    }
    while sim.phase() == Phase::Running && args.generations.is_none_or(|n| sim.generation() < n)
    {
        sim.step()?;
        if !args.quiet {
            thread::sleep(delay);
            draw(&mut out, sim.current(), sim.generation())?;
        }
    }

    let outcome = match sim.phase() {
        Phase::Terminated => "all cells died",
        _ => "generation limit reached",
    };
    info!("{outcome} at generation {}", sim.generation());
    writeln!(
        out,
        "{outcome} after {} generations, population {}",
        sim.generation(),
        sim.current().population()
    )?;
    Ok(())
}

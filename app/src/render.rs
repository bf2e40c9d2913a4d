use egui::Rgba;
use life::{Grid, State};

#[derive(Clone, Copy)]
pub struct Settings {
    cell_size: usize,
    dead_rgba: Rgba,
    alive_rgba: Rgba,
}

impl Settings {
    /// `cell_size` is the side of one cell in pixels, at least 1.
    pub fn new(cell_size: usize, dead_rgba: Rgba, alive_rgba: Rgba) -> Self {
        Self {
            cell_size: cell_size.max(1),
            dead_rgba,
            alive_rgba,
        }
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// `[width, height]` of the rendered image in pixels.
    pub fn image_size(&self, grid: &Grid) -> [usize; 2] {
        let (rows, columns) = grid.dimensions();
        [columns * self.cell_size, rows * self.cell_size]
    }

    /// The cell under an image-relative position, if any.
    pub fn cell_at(&self, grid: &Grid, (x, y): (f32, f32)) -> Option<(usize, usize)> {
        if x < 0. || y < 0. {
            return None;
        }
        let (rows, columns) = grid.dimensions();
        let row = y as usize / self.cell_size;
        let col = x as usize / self.cell_size;
        (row < rows && col < columns).then_some((row, col))
    }
}

pub fn render(grid: &Grid, settings: Settings) -> Vec<Rgba> {
    let [width, height] = settings.image_size(grid);
    let mut pixels = Vec::with_capacity(width * height);
    for i in 0..height {
        for j in 0..width {
            let state = grid.get(i / settings.cell_size, j / settings.cell_size);
            pixels.push(match state {
                Ok(State::Alive) => settings.alive_rgba,
                _ => settings.dead_rgba,
            });
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::new(5, Rgba::WHITE, Rgba::BLACK)
    }

    #[test]
    fn test_zero_cell_size_clamped() {
        let settings = Settings::new(0, Rgba::WHITE, Rgba::BLACK);
        assert_eq!(settings.cell_size(), 1);
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(1, 1, State::Alive).unwrap();
        let pixels = render(&grid, settings);
        assert_eq!(pixels.len(), 6);
        assert_eq!(pixels[4], Rgba::BLACK);
        assert_eq!(settings.cell_at(&grid, (2.5, 1.5)), Some((1, 2)));
    }

    #[test]
    fn test_render_cell_square() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(1, 2, State::Alive).unwrap();
        let pixels = render(&grid, settings());
        assert_eq!(pixels.len(), 15 * 10);
        assert_eq!(pixels[5 * 15 + 10], Rgba::BLACK);
        assert_eq!(pixels[9 * 15 + 14], Rgba::BLACK);
        assert_eq!(pixels[4 * 15 + 10], Rgba::WHITE);
        assert_eq!(pixels[5 * 15 + 9], Rgba::WHITE);
    }

    #[test]
    fn test_cell_at() {
        let grid = Grid::new(2, 3).unwrap();
        let settings = settings();
        assert_eq!(settings.cell_at(&grid, (0., 0.)), Some((0, 0)));
        assert_eq!(settings.cell_at(&grid, (14.9, 9.9)), Some((1, 2)));
        assert_eq!(settings.cell_at(&grid, (15., 0.)), None);
        assert_eq!(settings.cell_at(&grid, (-1., 3.)), None);
    }
}

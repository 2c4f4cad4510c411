use crate::config::TILE_SIZE;
use crate::paint::{Painter, Rgba};
use glam::Vec2;

const WALL_COLOR: Rgba = Rgba::rgb(0x22, 0x22, 0x22);
const FLOOR_COLOR: Rgba = Rgba::rgb(0xcc, 0xcc, 0xcc);

/// built-in level, one digit per tile, nonzero digits are wall materials
const LEVEL: &str = "
    111111111111111
    100000000000101
    100001000000101
    111100000020101
    100000000020101
    100000003333101
    100000000000001
    100000000000001
    111114000444101
    100000000000001
    111111111111111
";

/// Immutable tile map. Cells are stored row-major; 0 is open floor and any
/// other value is a wall of that material.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tile_size: f32,
    tiles: Vec<u8>,
}

impl Grid {
    /// Build a grid from a rectangular matrix whose outer ring is solid.
    pub fn new(tile_size: f32, rows: Vec<Vec<u8>>) -> anyhow::Result<Self> {
        anyhow::ensure!(tile_size > 0., "tile size must be positive, got {tile_size}");
        anyhow::ensure!(!rows.is_empty(), "grid has no rows");

        let cols = rows[0].len();
        anyhow::ensure!(cols > 0, "grid has no columns");
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cols) {
            anyhow::bail!("row {idx} has {} cells, expected {cols}", row.len());
        }

        let this = Self {
            rows: rows.len(),
            cols,
            tile_size,
            tiles: rows.into_iter().flatten().collect(),
        };

        for row in 0..this.rows {
            for col in 0..this.cols {
                let border = row == 0 || col == 0 || row == this.rows - 1 || col == this.cols - 1;
                if border && this.tiles[this.idx(row, col)] == 0 {
                    anyhow::bail!("border cell at row {row}, column {col} is open");
                }
            }
        }

        log::debug!(
            "built {}x{} grid with tile size {}",
            this.rows,
            this.cols,
            this.tile_size
        );
        Ok(this)
    }

    /// Build a grid from a digit matrix, one row per line. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn parse(tile_size: f32, text: &str) -> anyhow::Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|tile| match tile.to_digit(10) {
                        Some(material) => Ok(material as u8),
                        None => Err(anyhow::anyhow!("invalid tile in map: {tile}")),
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Self::new(tile_size, rows)
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::parse(TILE_SIZE, LEVEL)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// width in world units
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    /// height in world units
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        (row < self.rows && col < self.cols).then(|| self.tiles[self.idx(row, col)])
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn idx_to_vec(&self, idx: usize) -> Vec2 {
        let x = idx % self.cols;
        let y = idx / self.cols;
        Vec2::new(x as f32 * self.tile_size, y as f32 * self.tile_size)
    }

    /// cell under a world point, `None` outside the map
    fn cell_at(&self, x: f32, y: f32) -> Option<u8> {
        if !(x >= 0. && y >= 0.) {
            return None;
        }
        let col = (x / self.tile_size).floor() as usize;
        let row = (y / self.tile_size).floor() as usize;
        self.cell(row, col)
    }

    /// Whether a square collider of half-width `radius` centered at (x, y)
    /// touches a wall or leaves the map. A zero radius probes a single point.
    pub fn is_blocked(&self, x: f32, y: f32, radius: f32) -> bool {
        // written so NaN coordinates fall through to blocked
        let inside = x - radius >= 0.
            && y - radius >= 0.
            && x + radius <= self.width()
            && y + radius <= self.height();
        if !inside {
            return true;
        }

        [
            (x - radius, y - radius),
            (x + radius, y - radius),
            (x - radius, y + radius),
            (x + radius, y + radius),
        ]
        .into_iter()
        .any(|(cx, cy)| self.cell_at(cx, cy).map_or(true, |tile| tile != 0))
    }

    /// raw cell value at a world point, 0 when open or outside the map
    pub fn material_at(&self, x: f32, y: f32) -> u8 {
        self.cell_at(x, y).unwrap_or(0)
    }

    /// draw the tiles as a top-down map shrunk by `scale`
    pub fn render(&self, painter: &mut impl Painter, scale: f32) -> anyhow::Result<()> {
        let size = Vec2::splat(self.tile_size * scale);
        for (idx, tile) in self.tiles.iter().enumerate() {
            let color = if *tile != 0 { WALL_COLOR } else { FLOOR_COLOR };
            painter.fill_rect(self.idx_to_vec(idx) * scale, size, color)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::tests::{Call, Recorder};

    fn room() -> Grid {
        Grid::parse(
            10.,
            "
            11111
            10001
            10201
            10001
            11111
            ",
        )
        .unwrap()
    }

    #[test]
    fn parses_builtin_level() {
        let grid = Grid::builtin().unwrap();
        assert_eq!(grid.rows(), 11);
        assert_eq!(grid.cols(), 15);
        assert_eq!(grid.cell(5, 8), Some(3));
        assert_eq!(grid.cell(11, 0), None);
    }

    #[test]
    fn rejects_open_border() {
        let err = Grid::parse(10., "111\n101\n101").unwrap_err();
        assert!(err.to_string().contains("row 2, column 1"), "{err}");
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Grid::parse(10., "111\n11\n111").is_err());
    }

    #[test]
    fn rejects_non_digits() {
        assert!(Grid::parse(10., "111\n1x1\n111").is_err());
    }

    #[test]
    fn rejects_bad_tile_size() {
        assert!(Grid::parse(0., "111\n111\n111").is_err());
    }

    #[test]
    fn open_cell_center_is_free() {
        let grid = room();
        assert!(!grid.is_blocked(15., 15., 0.));
        assert!(!grid.is_blocked(15., 15., 4.));
    }

    #[test]
    fn wall_cell_is_blocked() {
        assert!(room().is_blocked(25., 25., 0.));
    }

    #[test]
    fn corner_sampling_catches_diagonal_wall() {
        let grid = room();
        // center sits in an open cell but the square reaches into the pillar
        // at (2, 2) only through its bottom-right corner
        assert!(!grid.is_blocked(18., 18., 1.));
        assert!(grid.is_blocked(18., 18., 3.));
    }

    #[test]
    fn border_cells_always_blocked() {
        let grid = room();
        let s = grid.tile_size();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if row != 0 && col != 0 && row != grid.rows() - 1 && col != grid.cols() - 1 {
                    continue;
                }
                let center = Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * s;
                assert!(grid.is_blocked(center.x, center.y, 0.));
                assert!(grid.is_blocked(center.x, center.y, 2.));
            }
        }
        // a collider poking into the border from an open cell
        assert!(grid.is_blocked(12., 15., 3.));
    }

    #[test]
    fn out_of_bounds_fails_closed() {
        let grid = room();
        assert!(grid.is_blocked(-1., 15., 0.));
        assert!(grid.is_blocked(15., 51., 0.));
        assert!(grid.is_blocked(50., 50., 0.));
        assert!(grid.is_blocked(f32::NAN, 15., 0.));
        assert!(grid.is_blocked(15., f32::INFINITY, 0.));
        assert_eq!(grid.material_at(-5., 5.), 0);
        assert_eq!(grid.material_at(f32::NAN, 5.), 0);
    }

    #[test]
    fn material_lookup() {
        let grid = room();
        assert_eq!(grid.material_at(25., 25.), 2);
        assert_eq!(grid.material_at(20., 20.), 2);
        assert_eq!(grid.material_at(15., 15.), 0);
        assert_eq!(grid.material_at(0., 0.), 1);
    }

    #[test]
    fn renders_every_tile() {
        let grid = room();
        let mut painter = Recorder::default();
        grid.render(&mut painter, 0.5).unwrap();

        assert_eq!(painter.calls.len(), 25);
        assert_eq!(
            painter.calls[12],
            Call::Rect {
                pos: Vec2::new(10., 10.),
                size: Vec2::new(5., 5.),
                color: WALL_COLOR,
            }
        );
        assert_eq!(
            painter.calls[6],
            Call::Rect {
                pos: Vec2::new(5., 5.),
                size: Vec2::new(5., 5.),
                color: FLOOR_COLOR,
            }
        );
    }
}

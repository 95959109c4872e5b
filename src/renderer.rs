use log::trace;

use crate::error::{MazeError, Result};
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction, Walls};

pub const WALL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// #2c2c2e, walls that were broken are painted over with the background
pub const BACKGROUND_COLOR: [f32; 4] = [0.173, 0.173, 0.180, 1.0];

/// A point on the canvas, `x` grows rightward and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
    pub color: [f32; 4],
}

/// Pixel box a cell occupies once it has been laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point {
            x: self.x1 + (self.x2 - self.x1) / 2,
            y: self.y1 + (self.y2 - self.y1) / 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x1: i32,
    pub y1: i32,
    pub cell_size_x: i32,
    pub cell_size_y: i32,
}

impl Layout {
    pub fn bounds_of(&self, col: usize, row: usize) -> Bounds {
        let x1 = self.x1 + self.cell_size_x * col as i32;
        let y1 = self.y1 + self.cell_size_y * row as i32;

        Bounds {
            x1,
            y1,
            x2: x1 + self.cell_size_x,
            y2: y1 + self.cell_size_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Forward,
    Backward,
}

impl From<Stroke> for [f32; 4] {
    fn from(stroke: Stroke) -> Self {
        match stroke {
            // red
            Stroke::Forward => [1.0, 0.0, 0.0, 1.0],
            // gray
            Stroke::Backward => [0.745, 0.745, 0.745, 1.0],
        }
    }
}

/// Sink for everything the generator and solver want shown. All methods do
/// nothing by default.
pub trait Renderer {
    fn draw_cell_walls(&mut self, _col: usize, _row: usize, _bounds: Bounds, _walls: Walls) {}

    fn draw_move(&mut self, _from: Bounds, _to: Bounds, _stroke: Stroke) {}

    /// Flush pending draws, may block for a frame.
    fn refresh(&mut self) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Renderer for Headless {}

/// Collects every draw call as colored line segments, ready to be handed to
/// a window.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pub lines: Vec<Line>,
    pub frames: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, a: Point, b: Point, color: [f32; 4]) {
        self.lines.push(Line { a, b, color });
    }
}

impl Renderer for LineBuffer {
    fn draw_cell_walls(&mut self, _col: usize, _row: usize, bounds: Bounds, walls: Walls) {
        let Bounds { x1, y1, x2, y2 } = bounds;
        let edges = [
            (Direction::West, Point { x: x1, y: y1 }, Point { x: x1, y: y2 }),
            (Direction::East, Point { x: x2, y: y1 }, Point { x: x2, y: y2 }),
            (Direction::North, Point { x: x1, y: y1 }, Point { x: x2, y: y1 }),
            (Direction::South, Point { x: x1, y: y2 }, Point { x: x2, y: y2 }),
        ];

        for &(dir, a, b) in edges.iter() {
            let color = if walls.has(dir) {
                WALL_COLOR
            } else {
                BACKGROUND_COLOR
            };
            self.push(a, b, color);
        }
    }

    fn draw_move(&mut self, from: Bounds, to: Bounds, stroke: Stroke) {
        self.push(from.center(), to.center(), stroke.into());
    }

    fn refresh(&mut self) {
        self.frames += 1;
    }
}

/// Lays cells out on screen and forwards their drawing to a `Renderer`.
pub struct Canvas<R: Renderer = Headless> {
    layout: Layout,
    rows: usize,
    /// bounds get assigned the first time a cell is drawn, indexed col * rows + row
    positions: Vec<Option<Bounds>>,
    renderer: R,
}

impl<R: Renderer> Canvas<R> {
    pub fn new(layout: Layout, grid: &WallGrid, renderer: R) -> Self {
        Self {
            layout,
            rows: grid.dims().rows,
            positions: vec![None; grid.dims().len()],
            renderer,
        }
    }

    #[inline]
    fn index_of(&self, col: usize, row: usize) -> usize {
        (self.rows * col) + row
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn bounds_of(&self, col: usize, row: usize) -> Option<Bounds> {
        if row >= self.rows {
            return None;
        }
        self.positions.get(self.index_of(col, row)).copied().flatten()
    }

    /// Positions the cell and draws its four walls, then refreshes.
    pub fn draw_cell(&mut self, grid: &WallGrid, col: usize, row: usize) {
        let bounds = self.layout.bounds_of(col, row);
        let index = self.index_of(col, row);
        self.positions[index] = Some(bounds);

        self.renderer
            .draw_cell_walls(col, row, bounds, grid.cell(col, row).walls);
        self.animate();
    }

    pub fn draw_move(&mut self, from: Coord, to: Coord, stroke: Stroke) -> Result<()> {
        let from_bounds = self.positioned(from)?;
        let to_bounds = self.positioned(to)?;
        trace!("move {:?} -> {:?} ({:?})", from, to, stroke);

        self.renderer.draw_move(from_bounds, to_bounds, stroke);
        Ok(())
    }

    #[inline]
    pub fn animate(&mut self) {
        self.renderer.refresh();
    }

    fn positioned(&self, (col, row): Coord) -> Result<Bounds> {
        self.bounds_of(col, row)
            .ok_or(MazeError::UnpositionedCellAccess { col, row })
    }
}

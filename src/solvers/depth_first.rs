use log::{debug, trace};

use crate::error::Result;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coord, Direction};
use crate::renderer::{Canvas, Renderer, Stroke};
use crate::solvers::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    Pending,
    Running,
    Solved,
    Exhausted,
}

struct Frame {
    cell: Coord,
    /// unvisited neighbors at the time the cell was entered
    candidates: Vec<(Coord, Direction)>,
    next: usize,
}

/// Exhaustive depth first search from `start` to `goal`. The first path found
/// wins, it is not necessarily the shortest.
///
/// Uses the grid's visited flags as its explored set, so they have to be clear
/// before the first step.
pub struct DepthFirst {
    start: Coord,
    goal: Coord,
    stack: Vec<Frame>,
    state: SolveState,
}

impl DepthFirst {
    pub fn new(start: Coord, goal: Coord) -> Self {
        Self {
            start,
            goal,
            stack: Vec::new(),
            state: SolveState::Pending,
        }
    }

    /// Searches from the top left cell to the bottom right one.
    pub fn corner_to_corner(grid: &WallGrid) -> Self {
        Self::new((0, 0), (grid.dims.columns - 1, grid.dims.rows - 1))
    }

    pub fn state(&self) -> SolveState {
        self.state
    }

    fn enter<R: Renderer>(&mut self, cell: Coord, grid: &mut WallGrid, canvas: &mut Canvas<R>) {
        canvas.animate();
        grid.visit(cell.0, cell.1);

        let candidates = if cell == self.goal {
            self.state = SolveState::Solved;
            Vec::new()
        } else {
            self.state = SolveState::Running;
            grid.unvisited_neighbors(cell.0, cell.1)
        };

        self.stack.push(Frame {
            cell,
            candidates,
            next: 0,
        });
    }

    /// Next candidate of the top frame that is open from both sides and has
    /// not been explored through another branch meanwhile.
    fn next_candidate(&mut self, grid: &WallGrid) -> Option<(Coord, Coord)> {
        let frame = self.stack.last_mut()?;
        let (col, row) = frame.cell;

        while let Some(&(candidate, dir)) = frame.candidates.get(frame.next) {
            frame.next += 1;
            if !grid.is_visited(candidate.0, candidate.1) && grid.is_open(col, row, dir) {
                return Some((frame.cell, candidate));
            }
        }

        None
    }
}

impl Solver for DepthFirst {
    fn step_solve_path<R: Renderer>(
        &mut self,
        grid: &mut WallGrid,
        canvas: &mut Canvas<R>,
    ) -> Result<bool> {
        match self.state {
            SolveState::Pending => {
                self.enter(self.start, grid, canvas);
                return Ok(self.state == SolveState::Running);
            }
            SolveState::Solved | SolveState::Exhausted => return Ok(false),
            SolveState::Running => {}
        }

        if let Some((from, to)) = self.next_candidate(grid) {
            trace!("trying {:?} -> {:?}", from, to);
            canvas.draw_move(from, to, Stroke::Forward)?;
            self.enter(to, grid, canvas);
            return Ok(self.state == SolveState::Running);
        }

        // dead end, undo the move that led here
        let dead_end = self.stack.pop().map(|frame| frame.cell);
        match (self.stack.last(), dead_end) {
            (Some(parent), Some(dead_end)) => {
                canvas.draw_move(parent.cell, dead_end, Stroke::Backward)?;
            }
            _ => {
                self.state = SolveState::Exhausted;
                debug!("no path from {:?} to {:?}", self.start, self.goal);
            }
        }

        Ok(self.state == SolveState::Running)
    }

    fn is_solved(&self) -> bool {
        self.state == SolveState::Solved
    }

    fn path(&self) -> Vec<Coord> {
        if !self.is_solved() {
            return Vec::new();
        }
        self.stack.iter().map(|frame| frame.cell).collect()
    }
}

#[cfg(test)]
mod test_depth_first {
    use super::*;
    use crate::error::MazeError;
    use crate::generators::backtracker::RecursiveBacktracker;
    use crate::generators::Generator;
    use crate::renderer::{Headless, Layout, LineBuffer};
    use rand::prelude::*;

    const LAYOUT: Layout = Layout {
        x1: 0,
        y1: 0,
        cell_size_x: 10,
        cell_size_y: 10,
    };

    fn laid_out<R: Renderer>(grid: &WallGrid, renderer: R) -> Canvas<R> {
        let mut canvas = Canvas::new(LAYOUT, grid, renderer);
        for col in 0..grid.dims.columns {
            for row in 0..grid.dims.rows {
                canvas.draw_cell(grid, col, row);
            }
        }
        canvas
    }

    fn generated(columns: usize, rows: usize, seed: u64) -> (WallGrid, Canvas) {
        let mut grid = WallGrid::with_dims(columns, rows).unwrap();
        let mut canvas = laid_out(&grid, Headless);
        RecursiveBacktracker::new(StdRng::seed_from_u64(seed)).generate_maze(&mut grid, &mut canvas);
        (grid, canvas)
    }

    /// hand carved corridor: (0,0) -> (1,0) -> (1,1), plus a dead end at (0,1)
    fn corridor() -> WallGrid {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.break_wall(0, 0, Direction::East);
        grid.break_wall(1, 0, Direction::West);
        grid.break_wall(1, 0, Direction::South);
        grid.break_wall(1, 1, Direction::North);
        grid.break_wall(0, 0, Direction::South);
        grid.break_wall(0, 1, Direction::North);
        grid
    }

    #[test]
    fn solves_generated_mazes() {
        for seed in 0..20 {
            let (mut grid, mut canvas) = generated(12, 10, seed);
            let mut solver = DepthFirst::corner_to_corner(&grid);

            assert_eq!(solver.solve_path(&mut grid, &mut canvas), Ok(true));
            assert_eq!(solver.state(), SolveState::Solved);
        }
    }

    #[test]
    fn path_follows_open_passages() {
        let (mut grid, mut canvas) = generated(16, 9, 77);
        let mut solver = DepthFirst::corner_to_corner(&grid);
        solver.solve_path(&mut grid, &mut canvas).unwrap();

        let path = solver.path();
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(15, 8)));
        for step in path.windows(2) {
            let dir = Direction::between(step[0], step[1]).unwrap();
            assert!(grid.is_open(step[0].0, step[0].1, dir));
        }
    }

    #[test]
    fn single_cell_is_already_solved() {
        let (mut grid, mut canvas) = generated(1, 1, 3);
        let mut solver = DepthFirst::corner_to_corner(&grid);

        assert_eq!(solver.step_solve_path(&mut grid, &mut canvas), Ok(false));
        assert!(solver.is_solved());
        assert_eq!(solver.path(), vec![(0, 0)]);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let mut grid = corridor();
        let mut canvas = laid_out(&grid, LineBuffer::new());
        let mut solver = DepthFirst::corner_to_corner(&grid);

        assert_eq!(solver.solve_path(&mut grid, &mut canvas), Ok(true));
        assert_eq!(solver.path(), vec![(0, 0), (1, 0), (1, 1)]);

        // East is tried before South, so the dead end is never entered
        let moves = &canvas.renderer().lines[4 * 4..];
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .all(|line| line.color == <[f32; 4]>::from(Stroke::Forward)));
        assert!(!grid.is_visited(0, 1));
    }

    #[test]
    fn undo_is_drawn_for_failed_branches() {
        // (0,0) -> (1,0) is a dead end, the goal is reached through (0,1)
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.break_wall(0, 0, Direction::East);
        grid.break_wall(1, 0, Direction::West);
        grid.break_wall(0, 0, Direction::South);
        grid.break_wall(0, 1, Direction::North);
        grid.break_wall(0, 1, Direction::East);
        grid.break_wall(1, 1, Direction::West);
        let mut canvas = laid_out(&grid, LineBuffer::new());
        let mut solver = DepthFirst::corner_to_corner(&grid);

        assert_eq!(solver.solve_path(&mut grid, &mut canvas), Ok(true));
        assert_eq!(solver.path(), vec![(0, 0), (0, 1), (1, 1)]);

        let colors: Vec<[f32; 4]> = canvas.renderer().lines[4 * 4..]
            .iter()
            .map(|line| line.color)
            .collect();
        let forward: [f32; 4] = Stroke::Forward.into();
        let backward: [f32; 4] = Stroke::Backward.into();
        assert_eq!(colors, vec![forward, backward, forward, forward]);
    }

    #[test]
    fn walled_off_goal_is_exhausted() {
        let mut grid = WallGrid::with_dims(3, 1).unwrap();
        grid.break_wall(0, 0, Direction::East);
        grid.break_wall(1, 0, Direction::West);
        let mut canvas = laid_out(&grid, Headless);
        let mut solver = DepthFirst::corner_to_corner(&grid);

        assert_eq!(solver.solve_path(&mut grid, &mut canvas), Ok(false));
        assert_eq!(solver.state(), SolveState::Exhausted);
        assert!(solver.path().is_empty());
        // stays finished
        assert_eq!(solver.step_solve_path(&mut grid, &mut canvas), Ok(false));
    }

    #[test]
    fn one_sided_openings_are_not_passages() {
        let mut grid = WallGrid::with_dims(2, 1).unwrap();
        grid.break_wall(0, 0, Direction::East);
        let mut canvas = laid_out(&grid, Headless);
        let mut solver = DepthFirst::corner_to_corner(&grid);

        assert_eq!(solver.solve_path(&mut grid, &mut canvas), Ok(false));
    }

    #[test]
    fn moves_before_layout_fail() {
        let mut grid = corridor();
        let mut canvas = Canvas::new(LAYOUT, &grid, Headless);
        let mut solver = DepthFirst::corner_to_corner(&grid);

        assert_eq!(
            solver.solve_path(&mut grid, &mut canvas),
            Err(MazeError::UnpositionedCellAccess { col: 0, row: 0 })
        );
    }
}

use log::{info, warn};

use maze_backtracker::{LineBuffer, Maze, MazeConfig, MazeError};

fn main() -> Result<(), MazeError> {
    env_logger::init();

    let config = MazeConfig::default();
    let (width, height) = config.window_size();
    info!("canvas {}x{}", width, height);

    let mut maze = Maze::new(&config, LineBuffer::new())?;
    let solved = maze.solve()?;

    print!("{}", maze.grid());
    if solved {
        println!("path: {:?}", maze.path());
    } else {
        warn!("no path from entrance to exit, seed {}", maze.seed());
    }

    let buffer = maze.into_renderer();
    info!(
        "{} line segments over {} frames",
        buffer.lines.len(),
        buffer.frames
    );

    Ok(())
}

//! Factory method: games decide which kind of room their maze is built from

use crate::error::PatternError;
use std::fmt;

/// Product created by [`MazeGame::make_room`]
pub trait Room: fmt::Display {
    /// Record a connection to the room at `index` in the maze
    fn connect(&mut self, index: usize);

    fn connections(&self) -> &[usize];
}

#[derive(Debug, Default)]
pub struct OrdinaryRoom {
    connected: Vec<usize>,
}

impl fmt::Display for OrdinaryRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ordinary room")
    }
}

impl Room for OrdinaryRoom {
    fn connect(&mut self, index: usize) {
        self.connected.push(index);
    }

    fn connections(&self) -> &[usize] {
        &self.connected
    }
}

#[derive(Debug, Default)]
pub struct MagicRoom {
    connected: Vec<usize>,
}

impl fmt::Display for MagicRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magic room")
    }
}

impl Room for MagicRoom {
    fn connect(&mut self, index: usize) {
        self.connected.push(index);
    }

    fn connections(&self) -> &[usize] {
        &self.connected
    }
}

/// Creator. `build` is shared; only the factory method differs per game.
pub trait MazeGame {
    fn make_room(&self) -> Box<dyn Room>;

    /// Prepare two rooms with the first leading to the second
    fn build(&self) -> Maze {
        let mut first = self.make_room();
        let second = self.make_room();
        first.connect(1);
        Maze {
            rooms: vec![first, second],
        }
    }
}

pub struct Maze {
    rooms: Vec<Box<dyn Room>>,
}

impl Maze {
    pub fn rooms(&self) -> &[Box<dyn Room>] {
        &self.rooms
    }

    pub fn play(&self) -> String {
        match self.rooms.first() {
            Some(room) => format!("Playing using \"{room}\""),
            None => "Nothing to play".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct OrdinaryMazeGame;

impl MazeGame for OrdinaryMazeGame {
    fn make_room(&self) -> Box<dyn Room> {
        Box::new(OrdinaryRoom::default())
    }
}

#[derive(Debug, Default)]
pub struct MagicMazeGame;

impl MazeGame for MagicMazeGame {
    fn make_room(&self) -> Box<dyn Room> {
        Box::new(MagicRoom::default())
    }
}

pub fn demo() -> Result<Vec<String>, PatternError> {
    Ok(vec![OrdinaryMazeGame.build().play(), MagicMazeGame.build().play()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_pick_room_kind() {
        assert_eq!(OrdinaryMazeGame.build().play(), "Playing using \"Ordinary room\"");
        assert_eq!(MagicMazeGame.build().play(), "Playing using \"Magic room\"");
    }

    #[test]
    fn test_rooms_are_connected() {
        let maze = MagicMazeGame.build();
        assert_eq!(maze.rooms().len(), 2);
        assert_eq!(maze.rooms()[0].connections(), &[1]);
        assert!(maze.rooms()[1].connections().is_empty());
    }
}

//! Dodge game - a turn-based grid walk with chasing enemies
//!
//! The player walks a walled arena collecting fruit while enemies step toward
//! them. Each turn is a pure step function: move the player, move every enemy
//! greedily (horizontal axis first), then resolve fruit and capture.

use log::debug;

use crate::rng::SimpleRng;
use crate::types::{Direction, GameStatus};

/// Default arena layout
pub const DEFAULT_ARENA: [&str; 7] = [
    "####################",
    "#.............#....#",
    "#..##..##...#......#",
    "#..#..........#....#",
    "#....###.#......#..#",
    "#..........#.......#",
    "####################",
];

/// Player start position in the default arena
pub const PLAYER_START: Entity = Entity::new(1, 1);

/// Enemy start positions in the default arena
pub const ENEMY_STARTS: [Entity; 2] = [Entity::new(18, 5), Entity::new(18, 1)];

/// Character that marks a wall cell
pub const WALL: char = '#';

/// A positioned actor (player, enemy or fruit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
}

impl Entity {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The static map: a character grid where `#` is a wall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    width: usize,
    height: usize,
    tiles: Vec<char>,
}

impl Arena {
    /// Build an arena from row art, top row first
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut tiles = vec![' '; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                tiles[y * width + x] = ch;
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at (x, y); None outside the arena
    pub fn tile(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.tiles[y as usize * self.width + x as usize])
    }

    /// Walls and everything outside the arena block movement
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).map_or(true, |ch| ch == WALL)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::from_rows(&DEFAULT_ARENA)
    }
}

/// Step the player one cell; blocked moves leave it in place.
///
/// Returns whether the player moved.
pub fn move_player(arena: &Arena, player: &mut Entity, direction: Direction) -> bool {
    let (dx, dy) = direction.delta();
    let (nx, ny) = (player.x + dx, player.y + dy);
    if arena.is_wall(nx, ny) {
        return false;
    }
    player.x = nx;
    player.y = ny;
    true
}

/// Greedy single-axis chase step toward `target`.
///
/// The horizontal step is tried first; the vertical one only when the enemy
/// is already aligned horizontally or the horizontal cell is a wall.
pub fn chase_step(arena: &Arena, enemy: &mut Entity, target: Entity) {
    let dx = (target.x - enemy.x).signum();
    let dy = (target.y - enemy.y).signum();

    if dx != 0 && !arena.is_wall(enemy.x + dx, enemy.y) {
        enemy.x += dx;
    } else if dy != 0 && !arena.is_wall(enemy.x, enemy.y + dy) {
        enemy.y += dy;
    }
}

/// Pick a random non-wall cell strictly inside the border
pub fn place_fruit(arena: &Arena, rng: &mut SimpleRng) -> Entity {
    let max_x = arena.width() as i32 - 2;
    let max_y = arena.height() as i32 - 2;
    // Arenas without an open interior cell would loop forever.
    let has_room = (1..=max_y).any(|y| (1..=max_x).any(|x| !arena.is_wall(x, y)));
    if !has_room {
        return Entity::new(1, 1);
    }

    loop {
        let x = rng.next_between(1, max_x);
        let y = rng.next_between(1, max_y);
        if !arena.is_wall(x, y) {
            return Entity::new(x, y);
        }
    }
}

/// What happened during one dodge turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DodgeEvent {
    /// Nothing notable
    Moved,
    /// The player picked up the fruit
    AteFruit,
    /// An enemy reached the player
    Caught,
    /// The game is already over
    Idle,
}

/// Full dodge game state
#[derive(Debug, Clone)]
pub struct DodgeGame {
    arena: Arena,
    player: Entity,
    enemies: Vec<Entity>,
    fruit: Entity,
    score: u32,
    status: GameStatus,
    rng: SimpleRng,
}

impl DodgeGame {
    /// Default arena, start positions and a fruit drawn from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_layout(Arena::default(), PLAYER_START, ENEMY_STARTS.to_vec(), seed)
    }

    pub fn with_layout(arena: Arena, player: Entity, enemies: Vec<Entity>, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let fruit = place_fruit(&arena, &mut rng);
        Self {
            arena,
            player,
            enemies,
            fruit,
            score: 0,
            status: GameStatus::Running,
            rng,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn fruit(&self) -> Entity {
        self.fruit
    }

    /// Move the fruit, for scripted scenarios
    pub fn set_fruit(&mut self, fruit: Entity) {
        self.fruit = fruit;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// End the session without being caught
    pub fn quit(&mut self) {
        self.status = GameStatus::GameOver;
    }

    /// Play one turn. `None` means the key was not a direction: the player
    /// stays put but the enemies still move.
    pub fn step(&mut self, direction: Option<Direction>) -> DodgeEvent {
        if self.is_over() {
            return DodgeEvent::Idle;
        }

        if let Some(direction) = direction {
            move_player(&self.arena, &mut self.player, direction);
        }

        let target = self.player;
        for enemy in &mut self.enemies {
            chase_step(&self.arena, enemy, target);
        }

        let mut event = DodgeEvent::Moved;
        if self.player == self.fruit {
            self.score += 1;
            self.fruit = place_fruit(&self.arena, &mut self.rng);
            debug!("fruit eaten; score {}", self.score);
            event = DodgeEvent::AteFruit;
        }

        if self.enemies.iter().any(|e| *e == self.player) {
            debug!("caught at ({}, {})", self.player.x, self.player.y);
            self.status = GameStatus::GameOver;
            event = DodgeEvent::Caught;
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arena_dimensions() {
        let arena = Arena::default();
        assert_eq!(arena.width(), 20);
        assert_eq!(arena.height(), 7);
        assert!(arena.is_wall(0, 0));
        assert!(!arena.is_wall(1, 1));
        assert!(arena.is_wall(-1, 3));
        assert!(arena.is_wall(20, 3));
    }

    #[test]
    fn test_player_blocked_by_wall() {
        let arena = Arena::default();
        let mut player = PLAYER_START;
        assert!(!move_player(&arena, &mut player, Direction::Up));
        assert!(!move_player(&arena, &mut player, Direction::Left));
        assert_eq!(player, PLAYER_START);
        assert!(move_player(&arena, &mut player, Direction::Right));
        assert_eq!(player, Entity::new(2, 1));
    }

    #[test]
    fn test_fruit_lands_inside_on_floor() {
        let arena = Arena::default();
        let mut rng = SimpleRng::new(42);
        for _ in 0..200 {
            let fruit = place_fruit(&arena, &mut rng);
            assert!(!arena.is_wall(fruit.x, fruit.y));
            assert!((1..=18).contains(&fruit.x));
            assert!((1..=5).contains(&fruit.y));
        }
    }
}

//! Tests for the dodge game rules

use term_arcade::core::dodge::{chase_step, move_player, DEFAULT_ARENA};
use term_arcade::core::{Arena, DodgeEvent, DodgeGame, Entity};
use term_arcade::types::{Direction, GameStatus};

const ROOM: [&str; 5] = ["#######", "#.....#", "#.#...#", "#.....#", "#######"];

fn room_game(player: Entity, enemies: Vec<Entity>) -> DodgeGame {
    DodgeGame::with_layout(Arena::from_rows(&ROOM), player, enemies, 11)
}

#[test]
fn test_default_game_layout() {
    let game = DodgeGame::new(1);
    assert_eq!(game.arena().height(), DEFAULT_ARENA.len());
    assert_eq!(game.player(), Entity::new(1, 1));
    assert_eq!(game.enemies(), &[Entity::new(18, 5), Entity::new(18, 1)]);
    assert!(!game.arena().is_wall(game.fruit().x, game.fruit().y));
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn test_enemy_prefers_horizontal_step() {
    let arena = Arena::from_rows(&ROOM);
    let mut enemy = Entity::new(5, 3);
    chase_step(&arena, &mut enemy, Entity::new(1, 1));
    assert_eq!(enemy, Entity::new(4, 3));
}

#[test]
fn test_enemy_steps_vertically_when_aligned() {
    let arena = Arena::from_rows(&ROOM);
    let mut enemy = Entity::new(1, 3);
    chase_step(&arena, &mut enemy, Entity::new(1, 1));
    assert_eq!(enemy, Entity::new(1, 2));
}

#[test]
fn test_enemy_goes_around_a_wall() {
    let arena = Arena::from_rows(&ROOM);
    // (2, 2) is a wall: the horizontal step is blocked, so it moves up.
    let mut enemy = Entity::new(3, 2);
    chase_step(&arena, &mut enemy, Entity::new(1, 1));
    assert_eq!(enemy, Entity::new(3, 1));
}

#[test]
fn test_enemy_waits_when_both_steps_blocked() {
    let arena = Arena::from_rows(&ROOM);
    let mut enemy = Entity::new(3, 2);
    chase_step(&arena, &mut enemy, Entity::new(1, 2));
    assert_eq!(enemy, Entity::new(3, 2));
}

#[test]
fn test_player_cannot_enter_walls() {
    let arena = Arena::from_rows(&ROOM);
    let mut player = Entity::new(1, 2);
    assert!(!move_player(&arena, &mut player, Direction::Right));
    assert!(!move_player(&arena, &mut player, Direction::Left));
    assert_eq!(player, Entity::new(1, 2));
}

#[test]
fn test_eating_fruit_scores_and_respawns_it() {
    let mut game = room_game(Entity::new(1, 1), vec![Entity::new(5, 3)]);
    game.set_fruit(Entity::new(2, 1));

    assert_eq!(game.step(Some(Direction::Right)), DodgeEvent::AteFruit);
    assert_eq!(game.score(), 1);
    let fruit = game.fruit();
    assert!(!game.arena().is_wall(fruit.x, fruit.y));
    assert!(!game.is_over());
}

#[test]
fn test_enemy_reaching_player_ends_game() {
    let mut game = room_game(Entity::new(1, 1), vec![Entity::new(3, 1)]);
    game.set_fruit(Entity::new(5, 3));

    assert_eq!(game.step(None), DodgeEvent::Moved);
    assert_eq!(game.enemies()[0], Entity::new(2, 1));
    assert_eq!(game.step(None), DodgeEvent::Caught);
    assert!(game.is_over());

    // Finished games ignore further turns.
    assert_eq!(game.step(Some(Direction::Down)), DodgeEvent::Idle);
    assert_eq!(game.player(), Entity::new(1, 1));
}

#[test]
fn test_walking_into_an_enemy_is_caught() {
    let mut game = room_game(Entity::new(1, 1), vec![Entity::new(3, 1)]);
    game.set_fruit(Entity::new(5, 3));

    // Player steps to (2, 1); the enemy steps onto it.
    assert_eq!(game.step(Some(Direction::Right)), DodgeEvent::Caught);
}

#[test]
fn test_quit_ends_game_without_capture() {
    let mut game = DodgeGame::new(4);
    game.quit();
    assert!(game.is_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.step(Some(Direction::Right)), DodgeEvent::Idle);
}

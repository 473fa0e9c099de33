//! Behavior of the concrete entities: ship steering and volleys, missile
//! flight and impact, enemy motion and death, explosion lifetime.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::Receiver;

use starblitz::board::Board;
use starblitz::entities::enemy::Enemy;
use starblitz::entities::explosion::Explosion;
use starblitz::entities::missile::PlayerMissile;
use starblitz::entities::ship::PlayerShip;
use starblitz::entity::EntityKind;
use starblitz::events::{GameEvent, game_bus};
use starblitz::game::GameCtx;
use starblitz::resources::blueprints::{Blueprints, SpawnPos};
use starblitz::resources::input::InputState;
use starblitz::resources::spritesheet::{SpriteAtlas, SpriteFrame};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn test_atlas() -> SpriteAtlas {
    let mut atlas = SpriteAtlas::new();
    atlas.insert(
        "ship",
        SpriteFrame {
            sx: 0.0,
            sy: 0.0,
            w: 38.0,
            h: 42.0,
            frames: 2,
        },
    );
    atlas.insert(
        "missile",
        SpriteFrame {
            sx: 0.0,
            sy: 30.0,
            w: 2.0,
            h: 10.0,
            frames: 1,
        },
    );
    atlas.insert(
        "enemy_ship",
        SpriteFrame {
            sx: 116.0,
            sy: 0.0,
            w: 42.0,
            h: 43.0,
            frames: 1,
        },
    );
    atlas.insert(
        "explosion",
        SpriteFrame {
            sx: 0.0,
            sy: 64.0,
            w: 64.0,
            h: 64.0,
            frames: 12,
        },
    );
    atlas
}

fn make_ctx() -> (GameCtx, Receiver<GameEvent>) {
    let (events, rx) = game_bus();
    let ctx = GameCtx {
        width: 480.0,
        height: 640.0,
        atlas: Rc::new(test_atlas()),
        input: Rc::new(RefCell::new(InputState::default())),
        events,
    };
    (ctx, rx)
}

fn blueprints_json(json: &str) -> Blueprints {
    Blueprints::from_json(json).expect("test blueprint JSON")
}

#[test]
fn ship_clamps_position_but_reports_velocity() {
    let (ctx, _rx) = make_ctx();
    let mut board = Board::new(ctx.clone());
    let (_, ship) = board.add(PlayerShip::new(&ctx));
    ship.borrow_mut().x = 0.0;

    ctx.input.borrow_mut().left.active = true;
    board.step(0.03);

    let ship = ship.borrow();
    assert_eq!(ship.x, 0.0, "clamped at the playfield edge");
    assert!(approx_eq(ship.vx, -ship.max_vel), "clamp affects position only");
}

#[test]
fn ship_moves_along_exactly_one_axis() {
    let (ctx, _rx) = make_ctx();
    let mut board = Board::new(ctx.clone());
    let (_, ship) = board.add(PlayerShip::new(&ctx));

    {
        let mut input = ctx.input.borrow_mut();
        input.left.active = true;
        input.right.active = true;
        input.up.active = true;
    }
    board.step(0.03);

    let ship = ship.borrow();
    assert!(approx_eq(ship.vx, -ship.max_vel), "left wins the priority chain");
    assert_eq!(ship.vy, 0.0, "the cross axis stays still");
}

#[test]
fn fire_spawns_one_volley_and_consumes_the_flag() {
    let (ctx, _rx) = make_ctx();
    let mut board = Board::new(ctx.clone());
    board.add(PlayerShip::new(&ctx));

    // reload starts charged: the press that opened the session cannot fire
    ctx.input.borrow_mut().fire.active = true;
    board.step(0.03);
    assert_eq!(board.count(EntityKind::PlayerMissile), 0);
    assert!(ctx.input.borrow().fire.active, "flag unconsumed while reloading");

    // run the reload down, still holding fire
    for _ in 0..8 {
        board.step(0.03);
    }
    assert_eq!(board.count(EntityKind::PlayerMissile), 2, "one volley, two missiles");
    assert!(!ctx.input.borrow().fire.active, "flag consumed by the volley");

    // consumed flag means no further volleys until re-asserted
    for _ in 0..10 {
        board.step(0.03);
    }
    assert_eq!(board.count(EntityKind::PlayerMissile), 2);
}

#[test]
fn missile_self_removes_past_the_top_edge() {
    let (ctx, _rx) = make_ctx();
    let mut board = Board::new(ctx.clone());
    // bottom edge at y=60 puts the box at y=50 with the 10px tall sprite
    board.add(PlayerMissile::new(&ctx, 240.0, 60.0));

    for _ in 0..8 {
        board.step(0.1);
    }
    assert_eq!(board.count(EntityKind::PlayerMissile), 0);
    assert_eq!(board.len(), 0);
}

#[test]
fn missile_damages_enemy_and_removes_itself() {
    let (ctx, _rx) = make_ctx();
    let blueprints = blueprints_json(
        r#"{ "straight": { "sprite": "enemy_ship", "health": 10 } }"#,
    );
    let mut board = Board::new(ctx.clone());
    board.add(PlayerMissile::new(&ctx, 20.0, 40.0));
    board.add(Enemy::from_blueprint(
        &ctx,
        blueprints.blueprint("straight"),
        Some(&SpawnPos {
            x: Some(0.0),
            y: Some(0.0),
        }),
    ));

    board.step(0.01);

    assert_eq!(board.count(EntityKind::Enemy), 0, "10 damage kills 10 health");
    assert_eq!(board.count(EntityKind::PlayerMissile), 0, "the missile is spent");
    assert_eq!(board.len(), 1, "one explosion remains");
}

#[test]
fn one_death_spawns_exactly_one_explosion() {
    let (ctx, _rx) = make_ctx();
    let blueprints = blueprints_json(
        r#"{ "straight": { "sprite": "enemy_ship", "health": 10 } }"#,
    );
    let mut board = Board::new(ctx.clone());
    // two missiles hit the same enemy in the same step
    board.add(PlayerMissile::new(&ctx, 10.0, 40.0));
    board.add(PlayerMissile::new(&ctx, 30.0, 40.0));
    board.add(Enemy::from_blueprint(
        &ctx,
        blueprints.blueprint("straight"),
        Some(&SpawnPos {
            x: Some(0.0),
            y: Some(0.0),
        }),
    ));

    board.step(0.01);

    assert_eq!(board.count(EntityKind::Enemy), 0);
    assert_eq!(board.count(EntityKind::PlayerMissile), 0);
    assert_eq!(board.len(), 1, "the second hit on a dead enemy adds nothing");
}

#[test]
fn straight_enemy_motion_is_deterministic() {
    let (ctx, _rx) = make_ctx();
    let blueprints = blueprints_json(
        r#"{ "straight": { "sprite": "enemy_ship", "health": 10, "E": 100 } }"#,
    );
    let mut board = Board::new(ctx.clone());
    let (_, enemy) = board.add(Enemy::from_blueprint(
        &ctx,
        blueprints.blueprint("straight"),
        Some(&SpawnPos {
            x: Some(200.0),
            y: Some(0.0),
        }),
    ));

    for _ in 0..10 {
        board.step(0.1);
    }

    let enemy = enemy.borrow();
    assert!(
        approx_eq(enemy.y, 100.0),
        "E=100 over 1s moves 100px straight down, got {}",
        enemy.y
    );
    assert!(approx_eq(enemy.x, 200.0));
}

#[test]
fn enemy_time_accumulates_across_steps() {
    let (ctx, _rx) = make_ctx();
    let blueprints = blueprints_json(
        r#"{ "arc": { "sprite": "enemy_ship", "health": 10, "B": 100, "C": 1 } }"#,
    );
    let mut board = Board::new(ctx.clone());
    let (_, enemy) = board.add(Enemy::from_blueprint(
        &ctx,
        blueprints.blueprint("arc"),
        Some(&SpawnPos {
            x: Some(200.0),
            y: Some(0.0),
        }),
    ));

    let dt = 0.5f32;
    board.step(dt);
    board.step(dt);

    // vx samples sin at the accumulated times 0.5 and 1.0, not at dt twice
    let expected = 200.0 + (100.0 * (0.5f32).sin()) * dt + (100.0 * (1.0f32).sin()) * dt;
    let enemy = enemy.borrow();
    assert!(
        approx_eq(enemy.x, expected),
        "expected {}, got {}",
        expected,
        enemy.x
    );
}

#[test]
fn enemy_leaving_the_playfield_is_removed() {
    let (ctx, _rx) = make_ctx();
    let blueprints = blueprints_json(
        r#"{ "straight": { "sprite": "enemy_ship", "health": 10, "E": 1000 } }"#,
    );
    let mut board = Board::new(ctx.clone());
    board.add(Enemy::from_blueprint(
        &ctx,
        blueprints.blueprint("straight"),
        Some(&SpawnPos {
            x: Some(200.0),
            y: Some(630.0),
        }),
    ));

    board.step(0.1);
    assert_eq!(board.count(EntityKind::Enemy), 0);
}

#[test]
fn ramming_the_player_emits_one_lose_event() {
    let (ctx, rx) = make_ctx();
    let blueprints = blueprints_json(
        r#"{ "straight": { "sprite": "enemy_ship", "health": 10 } }"#,
    );
    let mut board = Board::new(ctx.clone());
    let (_, ship) = board.add(PlayerShip::new(&ctx));
    let (sx, sy) = {
        let ship = ship.borrow();
        (ship.x, ship.y)
    };
    board.add(Enemy::from_blueprint(
        &ctx,
        blueprints.blueprint("straight"),
        Some(&SpawnPos {
            x: Some(sx),
            y: Some(sy),
        }),
    ));

    board.step(0.01);

    let events: Vec<GameEvent> = rx.try_iter().collect();
    assert_eq!(events, vec![GameEvent::Lose]);
    assert_eq!(board.count(EntityKind::Player), 0, "the hit is fatal");
    assert_eq!(board.count(EntityKind::Enemy), 0, "the rammer dies too");
}

#[test]
fn explosion_lives_exactly_36_steps() {
    let (ctx, _rx) = make_ctx();
    let mut board = Board::new(ctx.clone());
    let (_, explosion) = board.add(Explosion::new(&ctx, 100.0, 100.0));

    for _ in 0..4 {
        board.step(0.03);
    }
    assert_eq!(explosion.borrow().frame, 1, "three steps per sprite frame");
    assert_eq!(board.len(), 1);

    for _ in 0..31 {
        board.step(0.03);
    }
    assert_eq!(board.len(), 1, "still alive on step 35");

    board.step(0.03);
    assert_eq!(board.len(), 0, "gone after the 36th step");
}

//! Level director: timeline consumption, spawn cadence, lookahead, and the
//! completion callback.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossbeam_channel::Receiver;

use starblitz::board::Board;
use starblitz::entities::level::Level;
use starblitz::entity::EntityKind;
use starblitz::events::{GameEvent, game_bus};
use starblitz::game::GameCtx;
use starblitz::resources::blueprints::{Blueprints, SpawnRecord};
use starblitz::resources::input::InputState;
use starblitz::resources::spritesheet::{SpriteAtlas, SpriteFrame};

fn test_atlas() -> SpriteAtlas {
    let mut atlas = SpriteAtlas::new();
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

fn straight_blueprints(speed: f32) -> Rc<Blueprints> {
    let json = format!(
        r#"{{ "straight": {{ "sprite": "enemy_ship", "health": 10, "y": -50, "E": {speed} }} }}"#
    );
    Rc::new(Blueprints::from_json(&json).expect("test blueprint JSON"))
}

fn record(start: f32, end: f32, gap: f32, kind: &str) -> SpawnRecord {
    SpawnRecord {
        start,
        end,
        gap,
        kind: kind.to_string(),
        pos: None,
    }
}

/// Completion counter the director's callback bumps.
fn counting_callback() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
    let fired = Rc::new(Cell::new(0u32));
    let inner = fired.clone();
    (
        fired,
        Box::new(move || {
            inner.set(inner.get() + 1);
        }),
    )
}

#[test]
fn single_track_spawns_on_schedule_then_completes_once() {
    let (ctx, _rx) = make_ctx();
    let (fired, callback) = counting_callback();
    let mut board = Board::new(ctx);
    let (_, level) = board.add(Level::new(
        &[record(0.0, 1000.0, 500.0, "straight")],
        straight_blueprints(100.0),
        callback,
    ));

    // tick to t=1.2s at 100ms steps: fires at 0ms and 500ms, drops past 1000ms
    for _ in 0..12 {
        board.step(0.1);
    }
    assert_eq!(board.count(EntityKind::Enemy), 2, "exactly two spawns");
    assert_eq!(level.borrow().remaining(), 0, "record dropped after its window");
    assert_eq!(fired.get(), 0, "no completion while enemies are alive");

    // let both enemies drift off the bottom (y: -50 -> >640 at 100px/s)
    for _ in 0..70 {
        board.step(0.1);
    }
    assert_eq!(board.count(EntityKind::Enemy), 0);
    assert_eq!(fired.get(), 1, "completion fired");

    for _ in 0..10 {
        board.step(0.1);
    }
    assert_eq!(fired.get(), 1, "and exactly once");
}

#[test]
fn lookahead_fires_near_simultaneous_tracks_together() {
    let (ctx, _rx) = make_ctx();
    let (_fired, callback) = counting_callback();
    let mut board = Board::new(ctx);
    board.add(Level::new(
        &[
            record(0.0, 300.0, 1000.0, "straight"),
            record(0.0, 300.0, 1000.0, "straight"),
            record(5000.0, 9000.0, 1000.0, "straight"),
        ],
        straight_blueprints(100.0),
        callback,
    ));

    board.step(0.1);
    assert_eq!(
        board.count(EntityKind::Enemy),
        2,
        "both open tracks fire in one tick; the far-future track waits"
    );
}

#[test]
fn source_timeline_is_never_mutated() {
    let (ctx, _rx) = make_ctx();
    let (_fired, callback) = counting_callback();
    let records = vec![
        record(0.0, 1000.0, 500.0, "straight"),
        record(2000.0, 3000.0, 250.0, "straight"),
    ];
    let pristine = records.clone();

    let mut board = Board::new(ctx);
    board.add(Level::new(&records, straight_blueprints(100.0), callback));
    for _ in 0..20 {
        board.step(0.1);
    }

    assert_eq!(records, pristine, "the director works on a private copy");
}

#[test]
fn gap_paces_repeat_spawns_within_a_window() {
    let (ctx, _rx) = make_ctx();
    let (_fired, callback) = counting_callback();
    let mut board = Board::new(ctx);
    board.add(Level::new(
        &[record(0.0, 10000.0, 2000.0, "straight")],
        straight_blueprints(0.0),
        callback,
    ));

    // 1s of stepping: one spawn at 100ms, the next window opens at 2000ms
    for _ in 0..10 {
        board.step(0.1);
    }
    assert_eq!(board.count(EntityKind::Enemy), 1);

    // another 1.2s crosses the 2000ms mark
    for _ in 0..12 {
        board.step(0.1);
    }
    assert_eq!(board.count(EntityKind::Enemy), 2);
}

#[test]
#[should_panic(expected = "unknown enemy blueprint")]
fn unknown_timeline_kind_is_fatal() {
    let (ctx, _rx) = make_ctx();
    let (_fired, callback) = counting_callback();
    let mut board = Board::new(ctx);
    board.add(Level::new(
        &[record(0.0, 1000.0, 500.0, "ghost")],
        straight_blueprints(100.0),
        callback,
    ));
    board.step(0.1);
}

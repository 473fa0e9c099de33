//! Enemy blueprints and level timelines.
//!
//! A blueprint names a sprite and a set of sine-motion coefficients; the
//! level timeline schedules which blueprint spawns when. Both are static
//! JSON data, loaded once at startup and consumed read-only (the level
//! director clones the timeline before mutating its own copy).
//!
//! Every coefficient defaults to zero per instance, so a blueprint only
//! spells out the terms it uses:
//!
//! ```json
//! {
//!     "straight": { "sprite": "enemy_ship", "health": 10, "y": -50, "E": 100 },
//!     "wiggle": { "sprite": "enemy_bee", "health": 20, "x": 100, "y": -50,
//!                 "B": 100, "C": 4, "E": 100 }
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::Deserialize;

fn default_damage() -> i32 {
    10
}

/// Static description of one enemy kind: sprite, starting position, motion
/// coefficients for `v = base + amp * sin(freq * t + phase)` on each axis,
/// and combat numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnemyBlueprint {
    pub sprite: String,
    pub health: i32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default, rename = "A")]
    pub a: f32,
    #[serde(default, rename = "B")]
    pub b: f32,
    #[serde(default, rename = "C")]
    pub c: f32,
    #[serde(default, rename = "D")]
    pub d: f32,
    #[serde(default, rename = "E")]
    pub e: f32,
    #[serde(default, rename = "F")]
    pub f: f32,
    #[serde(default, rename = "G")]
    pub g: f32,
    #[serde(default, rename = "H")]
    pub h: f32,
    #[serde(default = "default_damage")]
    pub damage: i32,
}

/// Blueprint library keyed by enemy kind name.
#[derive(Debug, Clone, Default)]
pub struct Blueprints {
    map: FxHashMap<String, EnemyBlueprint>,
}

impl Blueprints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, blueprint: EnemyBlueprint) {
        self.map.insert(name.into(), blueprint);
    }

    pub fn get(&self, name: &str) -> Option<&EnemyBlueprint> {
        self.map.get(name)
    }

    /// Resolve a blueprint by kind name.
    ///
    /// Panics on an unknown name: the level timeline referencing a kind that
    /// does not exist is a data bug, caught at spawn time.
    pub fn blueprint(&self, name: &str) -> &EnemyBlueprint {
        match self.map.get(name) {
            Some(blueprint) => blueprint,
            None => panic!("unknown enemy blueprint '{name}'"),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let map: FxHashMap<String, EnemyBlueprint> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse blueprint JSON: {e}"))?;
        Ok(Self { map })
    }

    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read blueprint file {path}: {e}"))?;
        Self::from_json(&json)
    }
}

/// Position override a spawn record may apply on top of blueprint defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SpawnPos {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

/// One track of a level timeline, times in milliseconds.
///
/// While `start <= now <= end` the track fires an enemy of `kind` every
/// `gap` milliseconds; past `end` the record is dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpawnRecord {
    pub start: f32,
    pub end: f32,
    pub gap: f32,
    pub kind: String,
    #[serde(default)]
    pub pos: Option<SpawnPos>,
}

/// Load a level timeline (ordered spawn records) from a JSON file.
pub fn load_level(path: &str) -> Result<Vec<SpawnRecord>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read level file {path}: {e}"))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse level JSON: {e}"))
}

//! Sprite-sheet atlas records.
//!
//! The atlas maps sprite names to rectangles inside one packed sheet image.
//! Entities resolve their record once, at construction (the record carries
//! the width/height they size their collision box from), and hand it back to
//! the surface at draw time together with a frame index.
//!
//! Atlas data lives in a JSON file shaped like:
//!
//! ```json
//! {
//!     "ship": { "sx": 0, "sy": 0, "w": 38, "h": 42, "frames": 2 },
//!     "missile": { "sx": 0, "sy": 30, "w": 2, "h": 10 }
//! }
//! ```

use rustc_hash::FxHashMap;
use serde::Deserialize;

fn default_frames() -> u32 {
    1
}

/// One sprite record: source rectangle in the sheet plus the number of
/// horizontally adjacent animation frames.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpriteFrame {
    /// Source x inside the sheet, pixels.
    pub sx: f32,
    /// Source y inside the sheet, pixels.
    pub sy: f32,
    /// Frame width, pixels.
    pub w: f32,
    /// Frame height, pixels.
    pub h: f32,
    /// Number of frames laid out left to right.
    #[serde(default = "default_frames")]
    pub frames: u32,
}

/// All sprite records of one sheet, keyed by sprite name.
#[derive(Debug, Clone, Default)]
pub struct SpriteAtlas {
    frames: FxHashMap<String, SpriteFrame>,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, frame: SpriteFrame) {
        self.frames.insert(name.into(), frame);
    }

    pub fn get(&self, name: &str) -> Option<&SpriteFrame> {
        self.frames.get(name)
    }

    /// Resolve a sprite record by name.
    ///
    /// Panics on an unknown name: a missing sprite is a data bug caught at
    /// entity construction, not a runtime condition to recover from.
    pub fn frame(&self, name: &str) -> SpriteFrame {
        match self.frames.get(name) {
            Some(frame) => *frame,
            None => panic!("unknown sprite key '{name}'"),
        }
    }

    /// Parse atlas records from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let frames: FxHashMap<String, SpriteFrame> =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse atlas JSON: {e}"))?;
        Ok(Self { frames })
    }

    /// Load atlas records from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read atlas file {path}: {e}"))?;
        Self::from_json(&json)
    }
}

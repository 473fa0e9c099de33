//! Scrolling starfield backdrop.
//!
//! Each layer owns a fixed set of randomly placed 2x2 stars and scrolls them
//! downward with wraparound. Stacking several layers at different speeds and
//! alphas gives the parallax depth effect; the bottom layer paints an opaque
//! background so stale pixels from the previous frame never show through.

use crate::game::{GameCtx, Scene};
use crate::surface::{Rgba, Surface};

const STAR_SIZE: f32 = 2.0;

pub struct Starfield {
    width: f32,
    height: f32,
    speed: f32,
    color: Rgba,
    clear: bool,
    offset: f32,
    stars: Vec<(f32, f32)>,
}

impl Starfield {
    /// Create a layer of `count` stars scrolling at `speed` px/s with the
    /// given opacity. `clear` paints an opaque background first.
    pub fn new(ctx: &GameCtx, speed: f32, opacity: f32, count: usize, clear: bool) -> Self {
        let mut rng = fastrand::Rng::new();
        let stars = (0..count)
            .map(|_| {
                (
                    (rng.f32() * ctx.width).floor(),
                    (rng.f32() * ctx.height).floor(),
                )
            })
            .collect();
        Self {
            width: ctx.width,
            height: ctx.height,
            speed,
            color: Rgba::WHITE.with_alpha((opacity * 255.0) as u8),
            clear,
            offset: 0.0,
            stars,
        }
    }
}

impl Scene for Starfield {
    fn step(&mut self, dt: f32) {
        self.offset += dt * self.speed;
        self.offset %= self.height;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if self.clear {
            surface.fill_rect(0.0, 0.0, self.width, self.height, Rgba::BLACK);
        }
        let scroll = self.offset.floor();
        for (x, y) in &self.stars {
            let y = (y + scroll) % self.height;
            surface.fill_rect(*x, y, STAR_SIZE, STAR_SIZE, self.color);
        }
    }
}

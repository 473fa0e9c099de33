//! Raylib rendering backend.
//!
//! [`RaylibSurface`] implements the [`Surface`] contract over an active draw
//! handle plus the loaded sprite-sheet texture. Frame selection picks the
//! source rectangle inside the sheet by offsetting `sx` with the frame index.

use std::ffi::CString;

use raylib::ffi;
use raylib::prelude::*;

use crate::resources::spritesheet::SpriteFrame;
use crate::surface::{Rgba, Surface};

fn to_color(color: Rgba) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

/// One frame's drawing surface: the raylib draw handle and the sheet all
/// sprites blit from.
pub struct RaylibSurface<'a, 'h> {
    d: &'a mut RaylibDrawHandle<'h>,
    sheet: &'a Texture2D,
}

impl<'a, 'h> RaylibSurface<'a, 'h> {
    pub fn new(d: &'a mut RaylibDrawHandle<'h>, sheet: &'a Texture2D) -> Self {
        Self { d, sheet }
    }
}

impl Surface for RaylibSurface<'_, '_> {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.d
            .draw_rectangle(x as i32, y as i32, w as i32, h as i32, to_color(color));
    }

    fn sprite(&mut self, frame: &SpriteFrame, x: f32, y: f32, index: u32) {
        let src = Rectangle {
            x: frame.sx + index as f32 * frame.w,
            y: frame.sy,
            width: frame.w,
            height: frame.h,
        };
        let dest = Rectangle {
            x,
            y,
            width: frame.w,
            height: frame.h,
        };
        self.d
            .draw_texture_pro(self.sheet, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    fn text_centered(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        let width = measure_default_font(text, size as i32);
        self.d.draw_text(
            text,
            x as i32 - width / 2,
            y as i32,
            size as i32,
            to_color(color),
        );
    }
}

/// Measure a string in the default font at the given size.
fn measure_default_font(text: &str, font_size: i32) -> i32 {
    let Ok(c_text) = CString::new(text) else {
        return 0;
    };
    unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) }
}

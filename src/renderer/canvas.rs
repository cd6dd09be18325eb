//! Canvas-2d backed draw surface
//!
//! Sprite images load best-effort and asynchronously: drawing an image that
//! has not finished loading is a no-op on the 2d context, never an error, so
//! the first frames may simply show blank sprites.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{DrawSurface, Sprite};
use crate::sim::Rect;

/// Score/overlay text style
const TEXT_FONT: &str = "16px sans-serif";
const TEXT_FILL: &str = "white";

/// A [`DrawSurface`] over an HTML canvas 2d context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    player_right: HtmlImageElement,
    player_left: HtmlImageElement,
    platform: HtmlImageElement,
}

impl CanvasSurface {
    /// Attach to a canvas and start loading the sprite images
    pub fn new(canvas: &HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .expect("canvas 2d context")
            .expect("canvas 2d context missing")
            .dyn_into::<CanvasRenderingContext2d>()
            .expect("not a 2d context");

        Self {
            ctx,
            player_right: load_image("assets/player-right.png"),
            player_left: load_image("assets/player-left.png"),
            platform: load_image("assets/platform.png"),
        }
    }

    fn image(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::PlayerRight => &self.player_right,
            Sprite::PlayerLeft => &self.player_left,
            Sprite::Platform => &self.platform,
        }
    }
}

/// Fire-and-forget image load; a failed load leaves a blank sprite
fn load_image(src: &str) -> HtmlImageElement {
    let image = HtmlImageElement::new().expect("image element");
    image.set_src(src);
    image
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.pos.x as f64,
            region.pos.y as f64,
            region.size.x as f64,
            region.size.y as f64,
        );
    }

    fn sprite(&mut self, sprite: Sprite, rect: Rect) {
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            self.image(sprite),
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(TEXT_FILL);
        self.ctx.set_font(TEXT_FONT);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}

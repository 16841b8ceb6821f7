#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Decorative rotated line-grid canvas background with a pointer-following
//! flashlight highlight.
//!
//! The rendering math (line field geometry, highlight falloff, backing
//! store sizing, redraw gating, palette resolution) is target-independent
//! and testable with plain `cargo test`; the DOM wiring only compiles for
//! wasm32.

pub mod config;
pub mod driver;
pub mod geometry;
pub mod highlight;
pub mod pointer;
pub mod surface;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::config::RenderConfig;

    pub mod render;

    /// Attach a background to the canvas with the given id, if present.
    fn mount(document: &web_sys::Document, id: &str, config: RenderConfig) -> Result<(), JsValue> {
        if let Some(element) = document.get_element_by_id(id) {
            let canvas = element.dyn_into::<web_sys::HtmlCanvasElement>()?;
            // Page-lifetime instance; never detached.
            std::mem::forget(render::Background::attach(canvas, config)?);
        }
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        mount(&document, "hero-bg", RenderConfig::hero())?;
        mount(&document, "footer-bg", RenderConfig::footer())?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::render::Background;

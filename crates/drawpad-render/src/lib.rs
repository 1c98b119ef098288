//! drawpad Render Library
//!
//! Renderer abstraction and implementations for drawpad.
//! The bundled implementation writes a standalone SVG document.

mod renderer;
mod svg;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use svg::SvgRenderer;

//! Recorded pointer event scripts.
//!
//! A script is a JSON array of tagged events:
//!
//! ```json
//! [
//!   { "type": "shape", "kind": "ellipse" },
//!   { "type": "down", "x": 10, "y": 10 },
//!   { "type": "move", "x": 60, "y": 40 },
//!   { "type": "up" },
//!   { "type": "mode", "mode": "select" }
//! ]
//! ```

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use drawpad_core::canvas::Canvas;
use drawpad_core::input::PointerEvent;
use drawpad_core::interaction::Mode;
use drawpad_core::shapes::{SerializableColor, ShapeKind};
use drawpad_render::{RenderContext, Renderer, SvgRenderer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One step of a script: a pointer event or a toolbar action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    /// Switch the interaction mode.
    Mode { mode: Mode },
    /// Pick the shape kind for new shapes.
    Shape { kind: ShapeKind },
    /// Pick the color for new shapes.
    Color { color: SerializableColor },
}

impl ScriptEvent {
    /// Feed this step to the canvas.
    pub fn apply(&self, canvas: &mut Canvas) {
        match *self {
            ScriptEvent::Down { x, y } => canvas.handle_pointer_event(PointerEvent::down(x, y)),
            ScriptEvent::Move { x, y } => canvas.handle_pointer_event(PointerEvent::moved(x, y)),
            ScriptEvent::Up => canvas.handle_pointer_event(PointerEvent::Up),
            ScriptEvent::Mode { mode } => canvas.set_mode(mode),
            ScriptEvent::Shape { kind } => canvas.tools_mut().set_shape_kind(kind),
            ScriptEvent::Color { color } => canvas.tools_mut().set_color(color),
        }
    }
}

/// Parse a script from JSON.
pub fn parse_script(json: &str) -> AppResult<Vec<ScriptEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a script file.
pub fn load_script(path: &Path) -> AppResult<Vec<ScriptEvent>> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_script(&text)?;
    log::info!("Loaded {} events from {:?}", events.len(), path);
    Ok(events)
}

/// Run a script against a fresh canvas.
pub fn replay(config: &AppConfig, events: &[ScriptEvent]) -> Canvas {
    let mut canvas = Canvas::with_tools(config.tool_manager());
    for event in events {
        log::trace!("Replaying {:?}", event);
        event.apply(&mut canvas);
    }
    log::info!(
        "Replay finished: {} shapes, {} selected, mode {}, bounds {:?}",
        canvas.store().len(),
        canvas.store().selection_len(),
        canvas.mode().name(),
        canvas.store().bounds()
    );
    canvas
}

/// Render what the canvas currently shows.
pub fn render_svg(config: &AppConfig, canvas: &Canvas) -> AppResult<String> {
    let ctx = RenderContext::from_canvas(canvas, config.viewport())
        .with_background(config.background_color.into())
        .with_selection_color(config.selection_color.into());

    let mut renderer = SvgRenderer::new();
    renderer.stroke_width = config.stroke_width;
    renderer.build_scene(&ctx)?;
    Ok(renderer.into_document())
}

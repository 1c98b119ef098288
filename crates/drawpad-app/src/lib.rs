//! drawpad Application
//!
//! Headless host for the drawing surface: loads configuration, replays a
//! recorded pointer event script through the canvas and renders the result.

mod cli;
mod config;
mod error;
mod script;

pub use cli::CliArgs;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use script::{ScriptEvent, load_script, parse_script, render_svg, replay};

//! SVG renderer.

use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use drawpad_core::geometry::bounding_box;
use kurbo::Rect;
use peniko::Color;
use std::fmt::Write;

/// Default stroke width for shapes.
const DEFAULT_STROKE_WIDTH: f64 = 2.0;
/// Gap between a selected shape and its highlight box.
const SELECTION_PADDING: f64 = 4.0;

/// Renders a frame into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Stroke width for shapes.
    pub stroke_width: f64,
    document: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            document: String::new(),
        }
    }
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last `build_scene`.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }

    fn write_rect(
        out: &mut String,
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
        dashed: bool,
    ) -> RenderResult<()> {
        write!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            fill.map(css_color).unwrap_or_else(|| "none".to_string()),
        )?;
        if let Some(stroke) = stroke {
            write!(out, r#" stroke="{}" stroke-width="1""#, css_color(stroke))?;
        }
        if dashed {
            out.push_str(r#" stroke-dasharray="4 2""#);
        }
        out.push_str("/>\n");
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let size = ctx.viewport_size;
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width <= 0.0
            || size.height <= 0.0
        {
            return Err(RendererError::InvalidViewport {
                width: size.width,
                height: size.height,
            });
        }

        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = size.width,
            h = size.height,
        )?;
        Self::write_rect(
            &mut out,
            size.to_rect(),
            Some(self.background_color(ctx)),
            None,
            false,
        )?;

        for shape in &ctx.shapes {
            writeln!(
                out,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                shape.to_path().to_svg(),
                css_color(shape.color().into()),
                self.stroke_width,
            )?;
        }

        for shape in ctx.shapes.iter().filter(|s| ctx.is_selected(s.id())) {
            let highlight = bounding_box(shape).inflate(SELECTION_PADDING, SELECTION_PADDING);
            Self::write_rect(&mut out, highlight, None, Some(ctx.selection_color), true)?;
        }

        if let Some(rect) = ctx.selection_rect {
            let fill = ctx.selection_color.with_alpha(0.1);
            Self::write_rect(&mut out, rect, Some(fill), Some(ctx.selection_color), false)?;
        }

        out.push_str("</svg>\n");
        log::debug!(
            "Rendered {} shapes ({} selected) to SVG",
            ctx.shapes.len(),
            ctx.selected.len()
        );
        self.document = out;
        Ok(())
    }
}

/// CSS `rgba()` notation for a color.
fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!(
        "rgba({},{},{},{})",
        rgba.r,
        rgba.g,
        rgba.b,
        f64::from(rgba.a) / 255.0
    )
}

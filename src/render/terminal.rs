use kurbo::Shape as _;

use crate::foundation::core::{Canvas, Point, Rect, RoundedRect, Rgb8};
use crate::foundation::error::TraceGifResult;
use crate::render::frame::FrameRGBA;
use crate::text::font::MonoFont;
use crate::text::layout::TextLayoutEngine;
use crate::text::wrap::{WRAP_COLUMNS, wrap_lines};

/// Geometry, palette and fixed strings of the fake terminal window.
///
/// Box coordinates are inclusive pixel bounds, so a box from 10 to 970 covers 961 columns.
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalStyle {
    /// Output size.
    pub canvas: Canvas,
    /// Color outside the window.
    pub background: Rgb8,
    /// Distance from the canvas edge to the window border.
    pub window_inset: f64,
    /// Corner radius of the window border.
    pub window_radius: f64,
    /// Window body color.
    pub window_fill: Rgb8,
    /// Window border color.
    pub window_outline: Rgb8,
    /// Border thickness, drawn inward.
    pub outline_width: f64,
    /// Title bar color.
    pub title_bar: Rgb8,
    /// Title bar top and bottom (inclusive).
    pub title_bar_y: (f64, f64),
    /// Title bar horizontal inset from the canvas edge.
    pub title_bar_inset: f64,
    /// Caption drawn in the title bar.
    pub title: String,
    /// Top-left of the caption.
    pub title_origin: Point,
    /// Caption color.
    pub title_color: Rgb8,
    /// Command line shown above the output.
    pub prompt: String,
    /// Prompt color.
    pub prompt_color: Rgb8,
    /// Left margin of prompt and body text.
    pub margin_x: f64,
    /// Top of the prompt line.
    pub prompt_y: f64,
    /// Distance from the prompt line to the first body line.
    pub prompt_gap: f64,
    /// Body text color.
    pub body_color: Rgb8,
    /// Vertical advance between body lines.
    pub line_height: f64,
    /// Body lines starting below `canvas.height - bottom_margin` are dropped.
    pub bottom_margin: f64,
    /// Column limit for body text.
    pub wrap_columns: usize,
}

impl Default for TerminalStyle {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 980,
                height: 560,
            },
            background: Rgb8::new(12, 14, 18),
            window_inset: 10.0,
            window_radius: 12.0,
            window_fill: Rgb8::new(19, 22, 28),
            window_outline: Rgb8::new(46, 51, 63),
            outline_width: 2.0,
            title_bar: Rgb8::new(33, 37, 45),
            title_bar_y: (12.0, 44.0),
            title_bar_inset: 12.0,
            title: "pi-codex-search demo".to_string(),
            title_origin: Point::new(24.0, 20.0),
            title_color: Rgb8::new(200, 210, 226),
            prompt: "$ pi \"Use codex_search ...\"".to_string(),
            prompt_color: Rgb8::new(140, 214, 255),
            margin_x: 28.0,
            prompt_y: 60.0,
            prompt_gap: 32.0,
            body_color: Rgb8::new(201, 255, 191),
            line_height: 24.0,
            bottom_margin: 36.0,
            wrap_columns: WRAP_COLUMNS,
        }
    }
}

impl TerminalStyle {
    /// Wrapped body lines of `update` that fit on the frame, with their top y coordinate.
    pub fn body_lines(&self, update: &str) -> Vec<(String, f64)> {
        let limit = f64::from(self.canvas.height) - self.bottom_margin;
        let mut y = self.prompt_y + self.prompt_gap;
        let mut out = Vec::new();
        for line in wrap_lines(update, self.wrap_columns) {
            if y > limit {
                break;
            }
            out.push((line, y));
            y += self.line_height;
        }
        out
    }

    fn window_rect(&self) -> Rect {
        let inset = self.window_inset;
        Rect::new(
            inset,
            inset,
            f64::from(self.canvas.width) - inset + 1.0,
            f64::from(self.canvas.height) - inset + 1.0,
        )
    }

    fn title_bar_rect(&self) -> Rect {
        let inset = self.title_bar_inset;
        Rect::new(
            inset,
            self.title_bar_y.0,
            f64::from(self.canvas.width) - inset + 1.0,
            self.title_bar_y.1 + 1.0,
        )
    }
}

struct TextPainter {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

impl TextPainter {
    fn new(font: &MonoFont) -> TraceGifResult<Self> {
        let engine = TextLayoutEngine::new(font)?;
        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.to_vec()),
            font.index,
        );
        Ok(Self { engine, font: data })
    }

    fn draw_line(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        origin: Point,
        color: Rgb8,
    ) {
        if text.trim().is_empty() {
            return;
        }
        let layout = self.engine.layout_line(text, color.into());
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

/// Rasterizes one update into a terminal-window frame.
///
/// Output depends only on the style, the font and the update text.
pub struct TerminalRenderer {
    style: TerminalStyle,
    text: Option<TextPainter>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for TerminalRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalRenderer")
            .field("style", &self.style)
            .field("family", &self.family_name())
            .finish()
    }
}

impl TerminalRenderer {
    /// Create a renderer. Without a font, frames carry only the window chrome.
    pub fn new(style: TerminalStyle, font: Option<&MonoFont>) -> TraceGifResult<Self> {
        style.canvas.validate()?;
        let text = font.map(TextPainter::new).transpose()?;
        Ok(Self {
            style,
            text,
            ctx: None,
        })
    }

    /// Active style.
    pub fn style(&self) -> &TerminalStyle {
        &self.style
    }

    /// Family used for text, or `None` when rendering chrome only.
    pub fn family_name(&self) -> Option<&str> {
        self.text.as_ref().map(|t| t.engine.family_name())
    }

    /// Render `update` below the prompt line.
    pub fn render(&mut self, update: &str) -> TraceGifResult<FrameRGBA> {
        let (width, height) = self.style.canvas.size_u16()?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        draw_chrome(&mut ctx, &self.style);

        let style = &self.style;
        if let Some(text) = self.text.as_mut() {
            text.draw_line(&mut ctx, &style.title, style.title_origin, style.title_color);
            text.draw_line(
                &mut ctx,
                &style.prompt,
                Point::new(style.margin_x, style.prompt_y),
                style.prompt_color,
            );
            for (line, y) in style.body_lines(update) {
                text.draw_line(
                    &mut ctx,
                    &line,
                    Point::new(style.margin_x, y),
                    style.body_color,
                );
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        let bg = style.background;
        FrameRGBA::from_premul(
            style.canvas.width,
            style.canvas.height,
            pixmap.data_as_u8_slice(),
            [bg.r, bg.g, bg.b],
        )
    }
}

fn draw_chrome(ctx: &mut vello_cpu::RenderContext, style: &TerminalStyle) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    set_solid(ctx, style.background);
    ctx.fill_rect(&to_cpu_rect(style.canvas.rect()));

    let outer = style.window_rect();
    set_solid(ctx, style.window_outline);
    fill_rounded(ctx, outer, style.window_radius);

    let w = style.outline_width;
    let inner = outer.inset(-w);
    set_solid(ctx, style.window_fill);
    fill_rounded(ctx, inner, (style.window_radius - w).max(0.0));

    set_solid(ctx, style.title_bar);
    ctx.fill_rect(&to_cpu_rect(style.title_bar_rect()));
}

fn set_solid(ctx: &mut vello_cpu::RenderContext, c: Rgb8) {
    let [r, g, b, a] = c.to_rgba8();
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
}

fn fill_rounded(ctx: &mut vello_cpu::RenderContext, rect: Rect, radius: f64) {
    let rr = RoundedRect::from_rect(rect, radius);
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in rr.path_elements(0.1) {
        p.push(el);
    }
    ctx.fill_path(&p);
}

fn to_cpu_rect(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/terminal.rs"]
mod tests;

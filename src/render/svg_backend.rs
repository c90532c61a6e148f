use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// SVG string backend.
///
/// Accumulates one element per primitive and serializes them inside a
/// `viewBox`-sized document, ready to be attached into a host page. Each
/// `render` pass replaces the previous element buffer, so re-rendering the
/// same dataset never accumulates duplicate elements.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    viewport: Option<Viewport>,
    elements: Vec<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serializes the last rendered frame as a standalone SVG document.
    /// Returns an empty-viewBox document when nothing has been rendered yet.
    #[must_use]
    pub fn svg_document(&self) -> String {
        let (width, height) = self
            .viewport
            .map_or((0, 0), |viewport| (viewport.width, viewport.height));
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" font-family="sans-serif">"#
        );
        svg.push('\n');
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        self.viewport = Some(frame.viewport);
        self.elements.clear();

        for line in &frame.lines {
            self.elements.push(format!(
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                hex(line.color),
                line.stroke_width
            ));
        }

        for circle in &frame.circles {
            self.elements.push(format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                circle.cx,
                circle.cy,
                circle.radius,
                hex(circle.fill),
                hex(circle.stroke),
                circle.stroke_width
            ));
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let transform = if text.rotation_deg == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate({:.1},{:.1},{:.1})""#,
                    text.rotation_deg, text.x, text.y
                )
            };
            self.elements.push(format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="{anchor}"{transform}>{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                hex(text.color),
                escape(&text.text)
            ));
        }

        Ok(())
    }
}

fn hex(color: Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_to_u8(color.red),
        channel_to_u8(color.green),
        channel_to_u8(color.blue)
    )
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

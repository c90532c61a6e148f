use crate::core::Viewport;

use super::{
    ChartLayerKind, ChartLayerStack, CirclePrimitive, LinePrimitive, RenderFrame, TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

/// Per-layer primitive buckets for one draw pass.
///
/// Pushes land in the bucket for the given layer kind; `flatten` emits the
/// buckets in stack order so the flat frame preserves the canonical z-order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: ChartLayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerPrimitives {
                kind,
                lines: Vec::new(),
                circles: Vec::new(),
                texts: Vec::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    pub fn push_line(&mut self, kind: ChartLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_circle(&mut self, kind: ChartLayerKind, circle: CirclePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.circles.push(circle);
        }
    }

    pub fn push_text(&mut self, kind: ChartLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.lines.extend(layer.lines.iter().copied());
            frame.circles.extend(layer.circles.iter().copied());
            frame.texts.extend(layer.texts.iter().cloned());
        }
        frame
    }

    /// Flat frame restricted to one layer, for layer-level assertions.
    #[must_use]
    pub fn flatten_layer(&self, kind: ChartLayerKind) -> Option<RenderFrame> {
        let layer = self.layers.iter().find(|layer| layer.kind == kind)?;
        let mut frame = RenderFrame::new(self.viewport);
        frame.lines.extend(layer.lines.iter().copied());
        frame.circles.extend(layer.circles.iter().copied());
        frame.texts.extend(layer.texts.iter().cloned());
        Some(frame)
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::LayeredRenderFrame;
    use crate::core::Viewport;
    use crate::render::{ChartLayerKind, ChartLayerStack, Color, LinePrimitive};

    #[test]
    fn flatten_emits_layers_in_stack_order() {
        let mut layered =
            LayeredRenderFrame::from_stack(Viewport::new(100, 50), ChartLayerStack::canonical());

        layered.push_line(
            ChartLayerKind::Trajectory,
            LinePrimitive::new(0.0, 2.0, 5.0, 3.0, 1.5, Color::rgb(0.8, 0.2, 0.2)),
        );
        layered.push_line(
            ChartLayerKind::StageAxis,
            LinePrimitive::new(0.0, 1.0, 0.0, 4.0, 1.0, Color::FOREGROUND),
        );

        let flattened = layered.flatten();
        assert_eq!(flattened.lines.len(), 2);
        // Stage axis flattens before the trajectory layer.
        assert_eq!(flattened.lines[0].y1, 1.0);
        assert_eq!(flattened.lines[1].y1, 2.0);
    }
}

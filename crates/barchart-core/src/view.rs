// File: crates/barchart-core/src/view.rs
// Summary: Retained scene-graph reconciliation, entry animation, and pointer forwarding.

use std::time::Duration;

use crate::animation::{AnimationId, AnimationScheduler, Easing};
use crate::config::ChartConfig;
use crate::data::LayoutResult;
use crate::error::ChartError;
use crate::event::{ChartEvent, EventHub};
use crate::renderer::{
    LineShape, NodeId, PointerEvent, PointerKind, RectShape, ShapeStyle, Surface, TextAlign,
    TextShape,
};
use crate::style::{axis_label_style, axis_style, bar_style};

/// Semantic interaction resolved from a raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarInteraction {
    Click { index: usize },
    Hover { index: usize },
    HoverOut { index: usize },
}

struct EntryAnimation {
    id: AnimationId,
    node: NodeId,
    target: RectShape,
}

/// Owns the retained scene graph for the chart's whole life. Two persistent
/// container groups (axes, bars) survive across renders; their children are
/// cleared and repopulated on each pass. Bar nodes are tracked in render
/// order so pointer targets resolve back to data indices by position.
pub struct ChartView<S: Surface> {
    surface: S,
    axis_group: NodeId,
    bar_group: NodeId,
    bars: Vec<NodeId>,
    animations: Vec<EntryAnimation>,
    scheduler: AnimationScheduler,
    first_render: bool,
    pending: Option<(LayoutResult, ChartConfig)>,
    events: EventHub,
    destroyed: bool,
}

impl<S: Surface> ChartView<S> {
    pub fn new(mut surface: S) -> Self {
        let axis_group = surface.add_group();
        let bar_group = surface.add_group();
        Self {
            surface,
            axis_group,
            bar_group,
            bars: Vec::new(),
            animations: Vec::new(),
            scheduler: AnimationScheduler::new(),
            first_render: true,
            pending: None,
            events: EventHub::new(),
            destroyed: false,
        }
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Bar node handles in render order, index-aligned with the data array.
    pub fn bars(&self) -> &[NodeId] {
        &self.bars
    }

    pub fn bar_group(&self) -> NodeId {
        self.bar_group
    }

    pub fn axis_group(&self) -> NodeId {
        self.axis_group
    }

    fn ensure_live(&self) -> Result<(), ChartError> {
        if self.destroyed {
            Err(ChartError::Destroyed("view"))
        } else {
            Ok(())
        }
    }

    /// Reconcile the scene graph against a layout result. The first render
    /// since construction animates bar heights from the baseline; later
    /// renders apply final geometry immediately.
    pub fn render(&mut self, layout: LayoutResult, config: ChartConfig) -> Result<(), ChartError> {
        self.ensure_live()?;
        let animate = self.first_render;
        self.clear_content();
        self.render_axes(&layout, &config);
        self.render_bars(&layout, &config, animate);
        self.first_render = false;
        self.pending = Some((layout, config));
        Ok(())
    }

    fn clear_content(&mut self) {
        // In-flight entry animations reference nodes that are about to go
        // away; cancel them before touching the tree.
        self.scheduler.cancel_all();
        self.animations.clear();
        self.bars.clear();
        self.surface.remove_children(self.bar_group);
        self.surface.remove_children(self.axis_group);
    }

    fn render_bars(&mut self, layout: &LayoutResult, config: &ChartConfig, animate: bool) {
        // A non-finite configured duration collapses to an immediate entry.
        let millis = config.animation.duration;
        let millis = if millis.is_finite() { millis.max(0.0) } else { 0.0 };
        let duration = Duration::from_secs_f64(millis / 1000.0);
        let easing = Easing::from_name(&config.animation.easing);

        for bar in &layout.bars {
            let target = RectShape {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
            };
            let node = self.surface.add_rect(
                self.bar_group,
                RectShape { height: 0.0, ..target },
                bar_style(&bar.data, config, false, false),
            );
            if animate {
                let id = self.scheduler.animate(0.0, bar.height, duration, easing);
                self.animations.push(EntryAnimation { id, node, target });
            } else {
                self.surface.set_rect_shape(node, target);
            }
            self.bars.push(node);
        }
    }

    fn render_axes(&mut self, layout: &LayoutResult, config: &ChartConfig) {
        let stroke = axis_style();
        let label = axis_label_style();
        let baseline = config.height - config.padding.bottom;

        if config.x_axis.show {
            self.surface.add_line(
                self.axis_group,
                LineShape {
                    x1: config.padding.left,
                    y1: baseline,
                    x2: config.width - config.padding.right,
                    y2: baseline,
                },
                stroke.clone(),
            );
            for tick in &layout.axes.x_axis.ticks {
                let x = tick.position + config.x_axis.tick_size / 2.0;
                self.surface.add_line(
                    self.axis_group,
                    LineShape {
                        x1: x,
                        y1: baseline,
                        x2: x,
                        y2: baseline + config.x_axis.tick_size,
                    },
                    stroke.clone(),
                );
                self.surface.add_text(
                    self.axis_group,
                    TextShape {
                        x,
                        y: baseline + config.x_axis.tick_size + config.x_axis.tick_padding,
                        content: tick.label.clone(),
                    },
                    label.clone(),
                );
            }
        }

        if config.y_axis.show {
            self.surface.add_line(
                self.axis_group,
                LineShape {
                    x1: config.padding.left,
                    y1: config.padding.top,
                    x2: config.padding.left,
                    y2: baseline,
                },
                stroke.clone(),
            );
            for tick in &layout.axes.y_axis.ticks {
                self.surface.add_line(
                    self.axis_group,
                    LineShape {
                        x1: config.padding.left - config.y_axis.tick_size,
                        y1: tick.position,
                        x2: config.padding.left,
                        y2: tick.position,
                    },
                    stroke.clone(),
                );
                self.surface.add_text(
                    self.axis_group,
                    TextShape {
                        x: config.padding.left - config.y_axis.tick_size - config.y_axis.tick_padding,
                        y: tick.position,
                        content: tick.label.clone(),
                    },
                    ShapeStyle { align: TextAlign::Right, ..label.clone() },
                );
            }
        }
    }

    /// Resolve a raw pointer event against the tracked bar handles and
    /// re-emit it as a semantic interaction. Events whose target is not a
    /// tracked bar are silently dropped.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<BarInteraction> {
        if self.destroyed {
            return None;
        }
        let index = self.bars.iter().position(|&node| node == event.target)?;
        let interaction = match event.kind {
            PointerKind::Over => BarInteraction::Hover { index },
            PointerKind::Out => BarInteraction::HoverOut { index },
            PointerKind::Click => BarInteraction::Click { index },
        };
        self.events.emit(&match interaction {
            BarInteraction::Hover { index } => ChartEvent::BarHover { item: None, index },
            BarInteraction::HoverOut { index } => ChartEvent::BarHoverOut { item: None, index },
            BarInteraction::Click { index } => ChartEvent::BarClick { item: None, index },
        });
        Some(interaction)
    }

    /// Advance entry animations by one frame interval, applying interpolated
    /// heights to the live bar shapes.
    pub fn tick(&mut self, dt: Duration) {
        if self.destroyed || self.scheduler.is_idle() {
            return;
        }
        let frames = self.scheduler.advance(dt);
        for frame in frames {
            let Some(pos) = self.animations.iter().position(|a| a.id == frame.id) else {
                continue;
            };
            let node = self.animations[pos].node;
            let shape = RectShape { height: frame.value, ..self.animations[pos].target };
            self.surface.set_rect_shape(node, shape);
            self.surface.mark_dirty(node);
            if frame.done {
                self.animations.swap_remove(pos);
            }
        }
    }

    /// True while bar entry animations are still producing frames.
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Restyle one bar without touching its geometry. Out-of-range indices
    /// are ignored.
    pub fn update_bar_style(&mut self, index: usize, style: ShapeStyle) {
        if let Some(&node) = self.bars.get(index) {
            self.surface.set_style(node, style);
            self.surface.mark_dirty(node);
        }
    }

    /// Re-measure the container, resize the surface, and re-render pending
    /// data without animation.
    pub fn resize(&mut self) -> Result<(), ChartError> {
        self.ensure_live()?;
        let size = self.surface.measure();
        self.surface.resize(size)?;
        if let Some((layout, config)) = self.pending.clone() {
            self.render(layout, config)?;
        }
        Ok(())
    }

    /// Empty the scene content, keeping the container groups alive.
    pub fn clear(&mut self) -> Result<(), ChartError> {
        self.ensure_live()?;
        self.clear_content();
        self.pending = None;
        self.events.emit(&ChartEvent::Cleared);
        Ok(())
    }

    /// Exactly-once teardown: cancel animations, drop content, stop pointer
    /// forwarding, dispose the surface. Subsequent calls are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.clear_content();
        self.pending = None;
        self.surface.dispose();
        self.events.clear();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

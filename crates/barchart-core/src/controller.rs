// File: crates/barchart-core/src/controller.rs
// Summary: Top-level façade orchestrating model, layout, and view with outward events.

use std::time::Duration;

use serde_json::Value;
use tracing::{error, warn};

use crate::config::{ChartConfig, ChartConfigPatch};
use crate::data::DataItem;
use crate::error::ChartError;
use crate::event::{ChartEvent, EventHub};
use crate::layout::ChartLayout;
use crate::model::{ChartModel, InteractionChange};
use crate::renderer::{PointerEvent, Surface};
use crate::style::bar_style;
use crate::view::{BarInteraction, ChartView};

/// Explicit lifecycle state; composition over base-class hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Initialized,
    Destroyed,
}

/// Public entry point. Owns the model, view, and layout, routes semantic
/// interactions into model state, and re-emits change notifications on its
/// outward hub. All coordination is synchronous and single-threaded; the
/// only suspension point is the animation loop driven by [`tick`].
///
/// [`tick`]: ChartController::tick
pub struct ChartController<S: Surface> {
    model: ChartModel,
    view: ChartView<S>,
    layout: ChartLayout,
    events: EventHub,
    lifecycle: Lifecycle,
}

impl<S: Surface> ChartController<S> {
    pub fn new(surface: S, options: Option<ChartConfigPatch>) -> Self {
        let mut controller = Self {
            model: ChartModel::new(options.as_ref()),
            view: ChartView::new(surface),
            layout: ChartLayout::new(),
            events: EventHub::new(),
            lifecycle: Lifecycle::Created,
        };
        controller.lifecycle = Lifecycle::Initialized;
        controller
    }

    /// Outward event hub; see the module docs for the emitted set.
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    pub fn view(&self) -> &ChartView<S> {
        &self.view
    }

    fn ensure_live(&self) -> Result<(), ChartError> {
        if self.lifecycle == Lifecycle::Destroyed {
            Err(ChartError::Destroyed("chart"))
        } else {
            Ok(())
        }
    }

    /// Validate and store new data, then fully re-render. On validation
    /// failure the error is surfaced both as a return value and as an
    /// `Error` event; prior state is untouched.
    pub fn set_data(&mut self, raw: &Value) -> Result<(), ChartError> {
        self.ensure_live()?;
        if let Err(err) = self.model.set_data(raw) {
            warn!(op = "setData", %err, "rejected chart data");
            self.events.emit(&ChartEvent::Error {
                op: "setData",
                message: err.to_string(),
                data: Some(raw.clone()),
            });
            return Err(err);
        }
        self.render()
    }

    pub fn get_data(&self) -> &[DataItem] {
        self.model.data()
    }

    /// Merge a partial configuration update and fully re-render.
    pub fn update_options(&mut self, patch: &ChartConfigPatch) -> Result<(), ChartError> {
        self.ensure_live()?;
        self.model.set_options(patch)?;
        self.render()
    }

    /// Defensive copy of the current total configuration.
    pub fn get_options(&self) -> ChartConfig {
        self.model.options().clone()
    }

    pub fn selected(&self) -> (Option<&DataItem>, Option<usize>) {
        self.model.selected()
    }

    pub fn hovered(&self) -> (Option<&DataItem>, Option<usize>) {
        self.model.hovered()
    }

    /// Recompute geometry from current data + config and push it into the
    /// view. The sole place layout runs. Interaction styling is reapplied
    /// immediately after, so a render never leaves stale hover/selection
    /// visuals.
    pub fn render(&mut self) -> Result<(), ChartError> {
        self.ensure_live()?;
        let layout = self.layout.calculate(self.model.data(), self.model.options());
        let config = self.model.options().clone();
        if let Err(err) = self.view.render(layout, config) {
            error!(op = "render", %err, "render pass failed");
            self.events.emit(&ChartEvent::Error {
                op: "render",
                message: err.to_string(),
                data: None,
            });
            return Err(err);
        }
        self.apply_interaction_styles();
        self.events.emit(&ChartEvent::Rendered);
        Ok(())
    }

    /// Map a raw pointer event to model state changes and outward events.
    /// Clicking the selected bar clears the selection; clicking another bar
    /// moves it.
    pub fn dispatch_pointer(&mut self, event: &PointerEvent) -> Result<(), ChartError> {
        self.ensure_live()?;
        let Some(interaction) = self.view.handle_pointer(event) else {
            return Ok(());
        };
        match interaction {
            BarInteraction::Click { index } => {
                let target = if self.model.selected().1 == Some(index) {
                    None
                } else {
                    Some(index)
                };
                if let Some(change) = self.model.set_selected(target)? {
                    self.apply_interaction_styles();
                    self.emit_selection(change);
                }
                let item = self.model.data().get(index).cloned();
                self.events.emit(&ChartEvent::BarClick { item, index });
            }
            BarInteraction::Hover { index } => {
                if let Some(change) = self.model.set_hovered(Some(index))? {
                    self.apply_interaction_styles();
                    self.emit_hover(change);
                }
                let item = self.model.data().get(index).cloned();
                self.events.emit(&ChartEvent::BarHover { item, index });
            }
            BarInteraction::HoverOut { index } => {
                if let Some(change) = self.model.set_hovered(None)? {
                    self.apply_interaction_styles();
                    self.emit_hover(change);
                }
                let item = self.model.data().get(index).cloned();
                self.events.emit(&ChartEvent::BarHoverOut { item, index });
            }
        }
        Ok(())
    }

    /// Advance in-flight entry animations by one frame interval.
    pub fn tick(&mut self, dt: Duration) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.view.tick(dt);
    }

    /// Resize the surface to the container and re-render. Renderer failures
    /// are logged and emitted, not returned; only the destroyed-state error
    /// reaches the caller.
    pub fn resize(&mut self) -> Result<(), ChartError> {
        self.ensure_live()?;
        if let Err(err) = self.view.resize() {
            error!(op = "resize", %err, "resize failed");
            self.events.emit(&ChartEvent::Error {
                op: "resize",
                message: err.to_string(),
                data: None,
            });
            return Ok(());
        }
        if self.render().is_ok() {
            self.events.emit(&ChartEvent::Resized);
        }
        Ok(())
    }

    /// Empty data and scene content. Best-effort: view failures are logged
    /// and emitted, never returned.
    pub fn clear(&mut self) -> Result<(), ChartError> {
        self.ensure_live()?;
        self.model.clear()?;
        if let Err(err) = self.view.clear() {
            error!(op = "clear", %err, "clear failed");
            self.events.emit(&ChartEvent::Error {
                op: "clear",
                message: err.to_string(),
                data: None,
            });
        }
        self.events.emit(&ChartEvent::Cleared);
        Ok(())
    }

    /// Tear down view, model, and the outward hub. Idempotent and never
    /// fails; a second call is a no-op.
    pub fn destroy(&mut self) {
        if self.lifecycle == Lifecycle::Destroyed {
            return;
        }
        self.view.destroy();
        self.model.destroy();
        self.events.emit(&ChartEvent::Destroyed);
        self.events.clear();
        self.lifecycle = Lifecycle::Destroyed;
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Initialized
    }

    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    /// Recompute and apply the style of every bar from the current hover and
    /// selection flags. Style only; geometry is untouched.
    fn apply_interaction_styles(&mut self) {
        let selected = self.model.selected().1;
        let hovered = self.model.hovered().1;
        let config = self.model.options();
        let styles: Vec<_> = self
            .model
            .data()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                bar_style(item, config, hovered == Some(index), selected == Some(index))
            })
            .collect();
        for (index, style) in styles.into_iter().enumerate() {
            self.view.update_bar_style(index, style);
        }
    }

    fn emit_selection(&self, change: InteractionChange) {
        self.events.emit(&ChartEvent::SelectionChanged {
            item: change.item,
            index: change.index,
            prev_item: change.prev_item,
            prev_index: change.prev_index,
        });
    }

    fn emit_hover(&self, change: InteractionChange) {
        self.events.emit(&ChartEvent::HoverChanged {
            item: change.item,
            index: change.index,
            prev_item: change.prev_item,
            prev_index: change.prev_index,
        });
    }
}

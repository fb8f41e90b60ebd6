// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the bar chart MVC API.

pub mod animation;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod event;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod scale;
pub mod style;
pub mod view;

pub use animation::{AnimationFrame, AnimationId, AnimationScheduler, Easing};
pub use config::{ChartConfig, ChartConfigPatch};
pub use controller::{ChartController, Lifecycle};
pub use data::{AxisTick, BarRect, DataItem, ItemId, LayoutResult};
pub use error::ChartError;
pub use event::{ChartEvent, EventHub, EventKind, ListenerId};
pub use layout::ChartLayout;
pub use model::{ChartModel, InteractionChange};
pub use renderer::{
    Cursor, LineShape, MemorySurface, NodeId, PointerEvent, PointerKind, RectShape, ScenePayload,
    ShapeStyle, Size, Surface, TextAlign, TextShape,
};
pub use scale::{BandScale, LinearScale};
pub use view::{BarInteraction, ChartView};

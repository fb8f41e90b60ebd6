// File: crates/barchart-core/src/renderer.rs
// Summary: Retained scene-graph surface contract and the headless in-memory implementation.

use std::collections::HashMap;

use crate::error::ChartError;

/// Handle to a node in the retained scene graph. Stable for the node's life;
/// never reused by [`MemorySurface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineShape {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextShape {
    pub x: f64,
    pub y: f64,
    pub content: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Center,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// Visual attribute record attached to every primitive. Which fields matter
/// depends on the primitive: rects use fill/stroke/opacity, lines use
/// stroke/line_width, texts use fill/font_size/align.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub line_width: f64,
    pub corner_radius: f64,
    pub opacity: f64,
    pub font_size: f64,
    pub align: TextAlign,
    pub cursor: Cursor,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            line_width: 0.0,
            corner_radius: 0.0,
            opacity: 1.0,
            font_size: 12.0,
            align: TextAlign::Center,
            cursor: Cursor::Default,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Over,
    Out,
    Click,
}

/// Raw pointer event delivered by the embedder. `target` is the primitive
/// the renderer hit-tested; coordinates are in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Consumed interface of the scene-graph renderer. The canvas painter itself
/// is an external collaborator; this crate only mutates the retained tree.
/// Container groups survive across renders (cleared, not recreated), so
/// handles to them stay valid for the surface's whole life.
pub trait Surface {
    /// Create a persistent container node at the root.
    fn add_group(&mut self) -> NodeId;
    fn add_rect(&mut self, parent: NodeId, shape: RectShape, style: ShapeStyle) -> NodeId;
    fn add_line(&mut self, parent: NodeId, shape: LineShape, style: ShapeStyle) -> NodeId;
    fn add_text(&mut self, parent: NodeId, shape: TextShape, style: ShapeStyle) -> NodeId;
    /// Remove every child of a group, preserving the group itself.
    fn remove_children(&mut self, group: NodeId);
    /// In-place geometry mutation; callers must follow with [`Surface::mark_dirty`].
    fn set_rect_shape(&mut self, id: NodeId, shape: RectShape);
    fn set_style(&mut self, id: NodeId, style: ShapeStyle);
    /// Signal the renderer to repaint a node on its next frame.
    fn mark_dirty(&mut self, id: NodeId);
    /// Current pixel box of the containing element.
    fn measure(&self) -> Size;
    fn resize(&mut self, size: Size) -> Result<(), ChartError>;
    /// Tear the surface down. Further node operations become no-ops.
    fn dispose(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScenePayload {
    Group,
    Rect(RectShape),
    Line(LineShape),
    Text(TextShape),
}

#[derive(Clone, Debug)]
struct SceneNode {
    payload: ScenePayload,
    style: ShapeStyle,
    children: Vec<NodeId>,
    dirty: bool,
}

/// Headless retained scene graph backing tests and the demo binary. It keeps
/// the full node tree and dirty marks but paints nothing.
#[derive(Default)]
pub struct MemorySurface {
    nodes: HashMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
    size: Size,
    next_id: u64,
    disposed: bool,
}

impl MemorySurface {
    pub fn new(size: Size) -> Self {
        Self { size, ..Self::default() }
    }

    fn insert(&mut self, parent: Option<NodeId>, payload: ScenePayload, style: ShapeStyle) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            SceneNode { payload, style, children: Vec::new(), dirty: false },
        );
        match parent {
            Some(parent) => {
                if let Some(node) = self.nodes.get_mut(&parent) {
                    node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.remove_subtree(child);
            }
        }
    }

    // ---- introspection (tests and demo) ------------------------------------

    pub fn children(&self, group: NodeId) -> &[NodeId] {
        self.nodes
            .get(&group)
            .map_or(&[], |node| node.children.as_slice())
    }

    pub fn payload(&self, id: NodeId) -> Option<&ScenePayload> {
        self.nodes.get(&id).map(|node| &node.payload)
    }

    pub fn rect_shape(&self, id: NodeId) -> Option<RectShape> {
        match self.payload(id) {
            Some(ScenePayload::Rect(shape)) => Some(*shape),
            _ => None,
        }
    }

    pub fn style(&self, id: NodeId) -> Option<&ShapeStyle> {
        self.nodes.get(&id).map(|node| &node.style)
    }

    pub fn is_dirty(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|node| node.dirty)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Surface for MemorySurface {
    fn add_group(&mut self) -> NodeId {
        self.insert(None, ScenePayload::Group, ShapeStyle::default())
    }

    fn add_rect(&mut self, parent: NodeId, shape: RectShape, style: ShapeStyle) -> NodeId {
        self.insert(Some(parent), ScenePayload::Rect(shape), style)
    }

    fn add_line(&mut self, parent: NodeId, shape: LineShape, style: ShapeStyle) -> NodeId {
        self.insert(Some(parent), ScenePayload::Line(shape), style)
    }

    fn add_text(&mut self, parent: NodeId, shape: TextShape, style: ShapeStyle) -> NodeId {
        self.insert(Some(parent), ScenePayload::Text(shape), style)
    }

    fn remove_children(&mut self, group: NodeId) {
        let children = match self.nodes.get_mut(&group) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn set_rect_shape(&mut self, id: NodeId, shape: RectShape) {
        if let Some(node) = self.nodes.get_mut(&id) {
            if let ScenePayload::Rect(existing) = &mut node.payload {
                *existing = shape;
            }
        }
    }

    fn set_style(&mut self, id: NodeId, style: ShapeStyle) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.style = style;
        }
    }

    fn mark_dirty(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.dirty = true;
        }
    }

    fn measure(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) -> Result<(), ChartError> {
        if self.disposed {
            return Err(ChartError::Renderer("surface is disposed".into()));
        }
        self.size = size;
        Ok(())
    }

    fn dispose(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.disposed = true;
    }
}

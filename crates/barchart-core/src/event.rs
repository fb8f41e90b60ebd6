// File: crates/barchart-core/src/event.rs
// Summary: Event payloads and the publish/subscribe hub shared by model, view, and controller.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use crate::config::ChartConfig;
use crate::data::DataItem;

/// Discriminant used as the subscription key for [`EventHub`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    DataChanged,
    OptionsChanged,
    SelectionChanged,
    HoverChanged,
    BarClick,
    BarHover,
    BarHoverOut,
    Rendered,
    Resized,
    Cleared,
    Destroyed,
    Error,
}

/// Notification payload. One enum serves every hub in the component; which
/// variants a given hub actually emits depends on its owner.
#[derive(Clone, Debug)]
pub enum ChartEvent {
    DataChanged {
        data: Vec<DataItem>,
    },
    OptionsChanged {
        new: Box<ChartConfig>,
        old: Box<ChartConfig>,
    },
    SelectionChanged {
        item: Option<DataItem>,
        index: Option<usize>,
        prev_item: Option<DataItem>,
        prev_index: Option<usize>,
    },
    HoverChanged {
        item: Option<DataItem>,
        index: Option<usize>,
        prev_item: Option<DataItem>,
        prev_index: Option<usize>,
    },
    BarClick {
        item: Option<DataItem>,
        index: usize,
    },
    BarHover {
        item: Option<DataItem>,
        index: usize,
    },
    BarHoverOut {
        item: Option<DataItem>,
        index: usize,
    },
    Rendered,
    Resized,
    Cleared,
    Destroyed,
    Error {
        op: &'static str,
        message: String,
        /// The rejected input, when the failing operation had one.
        data: Option<Value>,
    },
}

impl ChartEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ChartEvent::DataChanged { .. } => EventKind::DataChanged,
            ChartEvent::OptionsChanged { .. } => EventKind::OptionsChanged,
            ChartEvent::SelectionChanged { .. } => EventKind::SelectionChanged,
            ChartEvent::HoverChanged { .. } => EventKind::HoverChanged,
            ChartEvent::BarClick { .. } => EventKind::BarClick,
            ChartEvent::BarHover { .. } => EventKind::BarHover,
            ChartEvent::BarHoverOut { .. } => EventKind::BarHoverOut,
            ChartEvent::Rendered => EventKind::Rendered,
            ChartEvent::Resized => EventKind::Resized,
            ChartEvent::Cleared => EventKind::Cleared,
            ChartEvent::Destroyed => EventKind::Destroyed,
            ChartEvent::Error { .. } => EventKind::Error,
        }
    }
}

/// Handle returned by [`EventHub::on`] for targeted removal.
pub type ListenerId = u64;

type Callback = Rc<RefCell<dyn FnMut(&ChartEvent)>>;

struct Listener {
    id: ListenerId,
    once: bool,
    callback: Callback,
}

/// Ordered listener registry keyed by event kind. Single-threaded by design:
/// handlers run synchronously, in subscription order, within the emitting
/// call. `emit` iterates over a snapshot copy of the handler list, so a
/// handler may subscribe or unsubscribe without affecting the in-flight
/// dispatch.
#[derive(Default)]
pub struct EventHub {
    listeners: RefCell<HashMap<EventKind, Vec<Listener>>>,
    next_id: Cell<ListenerId>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler; returns its id for later removal.
    pub fn on(&self, kind: EventKind, handler: impl FnMut(&ChartEvent) + 'static) -> ListenerId {
        self.subscribe(kind, false, handler)
    }

    /// Subscribe a handler that is removed after its first invocation.
    pub fn once(&self, kind: EventKind, handler: impl FnMut(&ChartEvent) + 'static) -> ListenerId {
        self.subscribe(kind, true, handler)
    }

    fn subscribe(
        &self,
        kind: EventKind,
        once: bool,
        handler: impl FnMut(&ChartEvent) + 'static,
    ) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().entry(kind).or_default().push(Listener {
            id,
            once,
            callback: Rc::new(RefCell::new(handler)),
        });
        id
    }

    /// Remove one listener. Unknown ids are ignored.
    pub fn off(&self, kind: EventKind, id: ListenerId) {
        let mut map = self.listeners.borrow_mut();
        if let Some(list) = map.get_mut(&kind) {
            list.retain(|l| l.id != id);
            if list.is_empty() {
                map.remove(&kind);
            }
        }
    }

    /// Remove every listener for an event kind.
    pub fn off_all(&self, kind: EventKind) {
        self.listeners.borrow_mut().remove(&kind);
    }

    /// Fire all handlers registered for the event's kind. The handler list is
    /// snapshotted before iteration; the map borrow is released before any
    /// handler runs, so handlers may call back into the hub.
    pub fn emit(&self, event: &ChartEvent) {
        let kind = event.kind();
        let snapshot: Vec<(ListenerId, bool, Callback)> = {
            let map = self.listeners.borrow();
            match map.get(&kind) {
                Some(list) => list
                    .iter()
                    .map(|l| (l.id, l.once, Rc::clone(&l.callback)))
                    .collect(),
                None => return,
            }
        };
        for (id, once, callback) in snapshot {
            (callback.borrow_mut())(event);
            if once {
                self.off(kind, id);
            }
        }
    }

    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.listener_count(kind) > 0
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .borrow()
            .get(&kind)
            .map_or(0, |list| list.len())
    }

    /// Event kinds that currently have at least one listener.
    pub fn event_kinds(&self) -> Vec<EventKind> {
        self.listeners.borrow().keys().copied().collect()
    }

    /// Drop every subscription.
    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

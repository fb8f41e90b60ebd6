// File: crates/barchart-core/src/model.rs
// Summary: Chart data/selection/hover state machine with change-detected event emission.

use serde_json::{Map, Value};

use crate::config::{ChartConfig, ChartConfigPatch};
use crate::data::{DataItem, ItemId};
use crate::error::ChartError;
use crate::event::{ChartEvent, EventHub};

/// Old/new pairing for a selection or hover transition. Item lookups are
/// `None` when the index is out of range of the current data.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionChange {
    pub item: Option<DataItem>,
    pub index: Option<usize>,
    pub prev_item: Option<DataItem>,
    pub prev_index: Option<usize>,
}

/// Owns the validated data array, the merged total configuration, and the
/// mutually independent hover/selection indices. Emits change events on its
/// own hub; state transitions that would be no-ops emit nothing.
pub struct ChartModel {
    data: Vec<DataItem>,
    config: ChartConfig,
    selected: Option<usize>,
    hovered: Option<usize>,
    events: EventHub,
    destroyed: bool,
}

impl ChartModel {
    pub fn new(options: Option<&ChartConfigPatch>) -> Self {
        Self {
            data: Vec::new(),
            config: ChartConfig::from_patch(options),
            selected: None,
            hovered: None,
            events: EventHub::new(),
            destroyed: false,
        }
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }

    fn ensure_live(&self) -> Result<(), ChartError> {
        if self.destroyed {
            Err(ChartError::Destroyed("model"))
        } else {
            Ok(())
        }
    }

    /// Validate and store a new data array, resetting selection and hover.
    /// The whole batch is rejected on the first malformed element; prior
    /// state is untouched on failure.
    pub fn set_data(&mut self, raw: &Value) -> Result<(), ChartError> {
        self.ensure_live()?;
        let data = validate_data(raw)?;
        self.data = data;
        self.selected = None;
        self.hovered = None;
        self.events.emit(&ChartEvent::DataChanged { data: self.data.clone() });
        Ok(())
    }

    pub fn data(&self) -> &[DataItem] {
        &self.data
    }

    /// Merge a partial configuration over the current one and notify.
    pub fn set_options(&mut self, patch: &ChartConfigPatch) -> Result<(), ChartError> {
        self.ensure_live()?;
        let old = self.config.clone();
        self.config.apply(patch);
        self.events.emit(&ChartEvent::OptionsChanged {
            new: Box::new(self.config.clone()),
            old: Box::new(old),
        });
        Ok(())
    }

    pub fn options(&self) -> &ChartConfig {
        &self.config
    }

    /// Update the selected index. Setting the current value is a no-op and
    /// returns `None`; otherwise the transition is emitted and returned.
    /// Indices are not bounds-checked here; out-of-range lookups resolve to
    /// no item.
    pub fn set_selected(&mut self, index: Option<usize>) -> Result<Option<InteractionChange>, ChartError> {
        self.ensure_live()?;
        if self.selected == index {
            return Ok(None);
        }
        let change = InteractionChange {
            item: self.item_at(index),
            index,
            prev_item: self.item_at(self.selected),
            prev_index: self.selected,
        };
        self.selected = index;
        self.events.emit(&ChartEvent::SelectionChanged {
            item: change.item.clone(),
            index: change.index,
            prev_item: change.prev_item.clone(),
            prev_index: change.prev_index,
        });
        Ok(Some(change))
    }

    pub fn selected(&self) -> (Option<&DataItem>, Option<usize>) {
        (self.selected.and_then(|i| self.data.get(i)), self.selected)
    }

    /// Symmetric to [`ChartModel::set_selected`], for the hover index.
    pub fn set_hovered(&mut self, index: Option<usize>) -> Result<Option<InteractionChange>, ChartError> {
        self.ensure_live()?;
        if self.hovered == index {
            return Ok(None);
        }
        let change = InteractionChange {
            item: self.item_at(index),
            index,
            prev_item: self.item_at(self.hovered),
            prev_index: self.hovered,
        };
        self.hovered = index;
        self.events.emit(&ChartEvent::HoverChanged {
            item: change.item.clone(),
            index: change.index,
            prev_item: change.prev_item.clone(),
            prev_index: change.prev_index,
        });
        Ok(Some(change))
    }

    pub fn hovered(&self) -> (Option<&DataItem>, Option<usize>) {
        (self.hovered.and_then(|i| self.data.get(i)), self.hovered)
    }

    /// Empty the data array and reset both interaction indices.
    pub fn clear(&mut self) -> Result<(), ChartError> {
        self.ensure_live()?;
        self.data.clear();
        self.selected = None;
        self.hovered = None;
        self.events.emit(&ChartEvent::Cleared);
        Ok(())
    }

    /// Clear state and release every subscription. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.data.clear();
        self.selected = None;
        self.hovered = None;
        self.events.emit(&ChartEvent::Cleared);
        self.events.clear();
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn item_at(&self, index: Option<usize>) -> Option<DataItem> {
        index.and_then(|i| self.data.get(i)).cloned()
    }
}

/// Coerce raw caller input into validated items. Rules: the input must be an
/// array of objects; a missing or falsy `name` becomes `Item <index>`; a
/// missing or non-numeric `value` becomes 0; `id` defaults to the position;
/// `color` and unrecognized fields are carried through. Booleans and
/// structured values are never stringified or numified; a boolean `value` or
/// a non-scalar `name` takes the same fallback as an absent field.
fn validate_data(raw: &Value) -> Result<Vec<DataItem>, ChartError> {
    let entries = raw
        .as_array()
        .ok_or_else(|| ChartError::InvalidData("data must be an array".into()))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let obj = entry.as_object().ok_or_else(|| {
                ChartError::InvalidData(format!("data item {index} must be an object"))
            })?;

            let name = match obj.get("name") {
                Some(Value::String(s)) if !s.is_empty() => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => format!("Item {index}"),
            };

            let value = match obj.get("value") {
                Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
                Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
                _ => 0.0,
            };

            let id = match obj.get("id") {
                Some(Value::String(s)) => ItemId::Text(s.clone()),
                Some(Value::Number(n)) => {
                    n.as_u64().map(ItemId::Index).unwrap_or(ItemId::Index(index as u64))
                }
                _ => ItemId::Index(index as u64),
            };

            let color = obj.get("color").and_then(Value::as_str).map(String::from);

            let extra: Map<String, Value> = obj
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "name" | "value" | "id" | "color"))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();

            Ok(DataItem { name, value, id, color, extra })
        })
        .collect()
}

mod backend;
mod patches;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use patches::{
    AxisKind, AxisPatch, BubblePatch, GroupPatch, NewBubble, NewGroup, QuadrantColorsPatch,
    QuadrantLabelsPatch,
};

use tracing::{debug, warn};

use crate::core::{Bubble, ChartData, Group};
use crate::error::{ChartError, ChartResult};

/// Owner of the persisted chart aggregate.
///
/// Every mutation is a complete read-modify-write: load the aggregate,
/// apply the patch, persist the whole aggregate back. The store is the only
/// writer; rendering consumes immutable snapshots obtained from `load`.
#[derive(Debug)]
pub struct ChartStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ChartStore<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Current persisted aggregate, or the built-in sample when nothing was
    /// saved yet.
    ///
    /// Payloads persisted before the quadrant substructures existed pick up
    /// defaults during deserialization; the migrated form is re-persisted so
    /// later loads see the full schema.
    pub fn load(&mut self) -> ChartResult<ChartData> {
        let Some(raw) = self.backend.load_raw()? else {
            debug!("no persisted chart, serving sample aggregate");
            return Ok(ChartData::sample());
        };

        let data = parse_chart(&raw)?;
        self.save(&data)?;
        Ok(data)
    }

    pub fn save(&mut self, data: &ChartData) -> ChartResult<()> {
        let payload = serde_json::to_string_pretty(data)
            .map_err(|err| ChartError::Format(format!("failed to serialize chart: {err}")))?;
        self.backend.save_raw(&payload)
    }

    pub fn add_bubble(&mut self, new: NewBubble) -> ChartResult<Bubble> {
        let mut data = self.load()?;
        let bubble = Bubble {
            id: next_id(data.bubbles.iter().map(|bubble| bubble.id.as_str())),
            name: new.name,
            x: new.x,
            y: new.y,
            size: new.size,
            group: new.group,
        };
        debug!(id = %bubble.id, name = %bubble.name, "add bubble");
        data.bubbles.push(bubble.clone());
        self.save(&data)?;
        Ok(bubble)
    }

    pub fn patch_bubble(&mut self, id: &str, patch: BubblePatch) -> ChartResult<()> {
        let mut data = self.load()?;
        let Some(bubble) = data.bubbles.iter_mut().find(|bubble| bubble.id == id) else {
            warn!(id, "patch for unknown bubble ignored");
            return Ok(());
        };

        patch.apply(bubble);
        self.save(&data)
    }

    pub fn delete_bubble(&mut self, id: &str) -> ChartResult<()> {
        let mut data = self.load()?;
        data.bubbles.retain(|bubble| bubble.id != id);
        debug!(id, remaining = data.bubbles.len(), "delete bubble");
        self.save(&data)
    }

    pub fn add_group(&mut self, new: NewGroup) -> ChartResult<Group> {
        let mut data = self.load()?;
        let group = Group {
            id: next_id(data.groups.iter().map(|group| group.id.as_str())),
            name: new.name,
            color: new.color,
        };
        debug!(id = %group.id, name = %group.name, "add group");
        data.groups.push(group.clone());
        self.save(&data)?;
        Ok(group)
    }

    pub fn patch_group(&mut self, id: &str, patch: GroupPatch) -> ChartResult<()> {
        let mut data = self.load()?;
        let Some(group) = data.groups.iter_mut().find(|group| group.id == id) else {
            warn!(id, "patch for unknown group ignored");
            return Ok(());
        };

        patch.apply(group);
        self.save(&data)
    }

    /// Deletes a group and cascades: every bubble referencing it goes too.
    pub fn delete_group(&mut self, id: &str) -> ChartResult<()> {
        let mut data = self.load()?;
        data.groups.retain(|group| group.id != id);
        let before = data.bubbles.len();
        data.bubbles.retain(|bubble| bubble.group != id);
        debug!(
            id,
            cascaded_bubbles = before - data.bubbles.len(),
            "delete group"
        );
        self.save(&data)
    }

    pub fn patch_axis(&mut self, which: AxisKind, patch: AxisPatch) -> ChartResult<()> {
        let mut data = self.load()?;
        let axis = match which {
            AxisKind::X => &mut data.x_axis,
            AxisKind::Y => &mut data.y_axis,
        };
        patch.apply(axis);
        self.save(&data)
    }

    pub fn patch_quadrant_labels(&mut self, patch: QuadrantLabelsPatch) -> ChartResult<()> {
        let mut data = self.load()?;
        patch.apply(&mut data.quadrants);
        self.save(&data)
    }

    pub fn patch_quadrant_colors(&mut self, patch: QuadrantColorsPatch) -> ChartResult<()> {
        let mut data = self.load()?;
        patch.apply(&mut data.quadrants.colors);
        self.save(&data)
    }

    pub fn patch_title(&mut self, title: impl Into<String>) -> ChartResult<()> {
        let mut data = self.load()?;
        data.title = title.into();
        self.save(&data)
    }

    /// Pretty-printed serialization of the full aggregate.
    pub fn export_as_text(&mut self) -> ChartResult<String> {
        let data = self.load()?;
        serde_json::to_string_pretty(&data)
            .map_err(|err| ChartError::Format(format!("failed to serialize chart: {err}")))
    }

    /// Parses and persists an externally produced payload.
    ///
    /// Malformed input fails with `ChartError::Format` and leaves the
    /// persisted aggregate untouched.
    pub fn import_from_text(&mut self, text: &str) -> ChartResult<ChartData> {
        let data = parse_chart(text)?;
        debug!(
            bubbles = data.bubbles.len(),
            groups = data.groups.len(),
            "import chart payload"
        );
        self.save(&data)?;
        Ok(data)
    }

    /// Resets to the empty scaffold and persists it.
    pub fn clear(&mut self) -> ChartResult<ChartData> {
        let data = ChartData::empty();
        self.save(&data)?;
        Ok(data)
    }

    /// Restores the built-in sample aggregate and persists it.
    pub fn reset_to_sample(&mut self) -> ChartResult<ChartData> {
        let data = ChartData::sample();
        self.save(&data)?;
        Ok(data)
    }
}

fn parse_chart(raw: &str) -> ChartResult<ChartData> {
    serde_json::from_str(raw)
        .map_err(|err| ChartError::Format(format!("failed to parse chart payload: {err}")))
}

/// Next opaque id: one past the largest existing numeric id, so generated
/// ids never collide within a collection.
fn next_id<'a>(existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Bubble, ChartData, Group, Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    DragController, DragFrame, DragPhase, DragPreview, GestureEvent, PointerPosition,
};
use crate::render::{RenderSink, SceneFrame};
use crate::scene::{ChartProjection, SceneBuilder};
use crate::store::{
    AxisKind, AxisPatch, BubblePatch, ChartStore, GroupPatch, NewBubble, NewGroup,
    QuadrantColorsPatch, QuadrantLabelsPatch, StorageBackend,
};

/// Public engine bootstrap configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

/// Image-capture request handed to an external exporter collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageExportRequest {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the store, the gesture controller, and the render
/// sink. Data flows one way: store snapshot → scene builder → sink. All
/// mutation goes through the store's patch operations, after which a fresh
/// snapshot is fetched and the full frame redrawn.
pub struct ChartEngine<R: RenderSink, B: StorageBackend> {
    renderer: R,
    store: ChartStore<B>,
    viewport: Viewport,
    margins: Margins,
    snapshot: ChartData,
    projection: ChartProjection,
    frame: SceneFrame,
    controller: DragController,
    preview: Option<DragPreview>,
}

impl<R: RenderSink, B: StorageBackend> ChartEngine<R, B> {
    pub fn new(renderer: R, backend: B, config: ChartEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let mut store = ChartStore::new(backend);
        let snapshot = store.load()?;
        let projection = ChartProjection::new(&snapshot, config.viewport, config.margins)?;
        let frame = SceneBuilder::build_with(&snapshot, config.viewport, &projection);

        let mut engine = Self {
            renderer,
            store,
            viewport: config.viewport,
            margins: config.margins,
            snapshot,
            projection,
            frame,
            controller: DragController::new(),
            preview: None,
        };
        engine.renderer.render(&engine.frame)?;
        Ok(engine)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Immutable read of the last loaded aggregate.
    #[must_use]
    pub fn snapshot(&self) -> &ChartData {
        &self.snapshot
    }

    /// Last materialized frame, in paint order.
    #[must_use]
    pub fn frame(&self) -> &SceneFrame {
        &self.frame
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn gesture_phase(&self) -> DragPhase {
        self.controller.phase()
    }

    /// Full rebuild and redraw from the current snapshot.
    pub fn render(&mut self) -> ChartResult<()> {
        self.rebuild_and_render()
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.rebuild_and_render()
    }

    /// Routes a pointer press.
    ///
    /// Returns `true` when a bubble's hit region was pressed and a gesture
    /// started; presses on empty chart space are ignored.
    pub fn pointer_press(&mut self, x: f64, y: f64, now_ms: f64) -> ChartResult<bool> {
        // Topmost circle wins: the last painted hit.
        let Some(hit) = self
            .frame
            .circles()
            .filter(|circle| circle.contains(x, y))
            .last()
            .map(|circle| circle.bubble_id.clone())
        else {
            return Ok(false);
        };
        let Some(bubble) = self.snapshot.bubble(&hit) else {
            return Ok(false);
        };

        let drag_frame = DragFrame {
            x_min: self.snapshot.x_axis.min,
            x_max: self.snapshot.x_axis.max,
            y_min: self.snapshot.y_axis.min,
            y_max: self.snapshot.y_axis.max,
            plot_width: self.projection.plot.width,
            plot_height: self.projection.plot.height,
        };
        self.controller.on_press(
            hit,
            PointerPosition::new(x, y),
            bubble.x,
            bubble.y,
            drag_frame,
            now_ms,
        );
        Ok(true)
    }

    /// Routes a pointer move; while dragging this redraws the previewed
    /// position without committing anything to the store.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        if let Some(preview) = self.controller.on_move(PointerPosition::new(x, y)) {
            self.preview = Some(preview);
            self.rebuild_and_render()?;
        }
        Ok(())
    }

    /// Routes a pointer release and completes the gesture.
    ///
    /// A drag commits its final clamped position to the store and re-renders
    /// from the fresh snapshot; a click is returned to the host untouched.
    pub fn pointer_release(&mut self, x: f64, y: f64, now_ms: f64) -> ChartResult<Option<GestureEvent>> {
        let event = self
            .controller
            .on_release(PointerPosition::new(x, y), now_ms);
        self.preview = None;

        match &event {
            Some(GestureEvent::Commit { id, x, y }) => {
                debug!(id = %id, x, y, "drag commit");
                self.store.patch_bubble(id, BubblePatch::position(*x, *y))?;
                self.refresh_snapshot()?;
            }
            // Click and no-op releases mutate nothing and had no preview.
            Some(GestureEvent::Click { .. }) | None => {}
        }
        Ok(event)
    }

    /// External cancellation: the gesture ends without an event and the
    /// bubble snaps back to its persisted position.
    pub fn pointer_cancel(&mut self) -> ChartResult<()> {
        self.controller.on_cancel();
        self.preview = None;
        self.rebuild_and_render()
    }

    pub fn add_bubble(&mut self, new: NewBubble) -> ChartResult<Bubble> {
        let bubble = self.store.add_bubble(new)?;
        self.refresh_snapshot()?;
        Ok(bubble)
    }

    pub fn patch_bubble(&mut self, id: &str, patch: BubblePatch) -> ChartResult<()> {
        self.store.patch_bubble(id, patch)?;
        self.refresh_snapshot()
    }

    pub fn delete_bubble(&mut self, id: &str) -> ChartResult<()> {
        self.store.delete_bubble(id)?;
        self.refresh_snapshot()
    }

    pub fn add_group(&mut self, new: NewGroup) -> ChartResult<Group> {
        let group = self.store.add_group(new)?;
        self.refresh_snapshot()?;
        Ok(group)
    }

    pub fn patch_group(&mut self, id: &str, patch: GroupPatch) -> ChartResult<()> {
        self.store.patch_group(id, patch)?;
        self.refresh_snapshot()
    }

    pub fn delete_group(&mut self, id: &str) -> ChartResult<()> {
        self.store.delete_group(id)?;
        self.refresh_snapshot()
    }

    pub fn patch_axis(&mut self, which: AxisKind, patch: AxisPatch) -> ChartResult<()> {
        self.store.patch_axis(which, patch)?;
        self.refresh_snapshot()
    }

    pub fn patch_quadrant_labels(&mut self, patch: QuadrantLabelsPatch) -> ChartResult<()> {
        self.store.patch_quadrant_labels(patch)?;
        self.refresh_snapshot()
    }

    pub fn patch_quadrant_colors(&mut self, patch: QuadrantColorsPatch) -> ChartResult<()> {
        self.store.patch_quadrant_colors(patch)?;
        self.refresh_snapshot()
    }

    pub fn patch_title(&mut self, title: impl Into<String>) -> ChartResult<()> {
        self.store.patch_title(title)?;
        self.refresh_snapshot()
    }

    pub fn export_as_text(&mut self) -> ChartResult<String> {
        self.store.export_as_text()
    }

    /// Imports an external payload; on a format error the in-memory
    /// snapshot and the persisted aggregate are both left unchanged.
    pub fn import_from_text(&mut self, text: &str) -> ChartResult<ChartData> {
        let data = self.store.import_from_text(text)?;
        self.refresh_snapshot()?;
        Ok(data)
    }

    pub fn clear(&mut self) -> ChartResult<ChartData> {
        let data = self.store.clear()?;
        self.refresh_snapshot()?;
        Ok(data)
    }

    pub fn reset_to_sample(&mut self) -> ChartResult<ChartData> {
        let data = self.store.reset_to_sample()?;
        self.refresh_snapshot()?;
        Ok(data)
    }

    /// Capture request for the out-of-scope image exporter.
    #[must_use]
    pub fn request_image_export(&self) -> ImageExportRequest {
        ImageExportRequest {
            title: self.snapshot.title.clone(),
            width: self.viewport.width,
            height: self.viewport.height,
        }
    }

    fn refresh_snapshot(&mut self) -> ChartResult<()> {
        self.snapshot = self.store.load()?;
        self.rebuild_and_render()
    }

    fn rebuild_and_render(&mut self) -> ChartResult<()> {
        let projection = ChartProjection::new(&self.snapshot, self.viewport, self.margins)?;
        let frame = match &self.preview {
            Some(preview) => {
                let mut data = self.snapshot.clone();
                if let Some(bubble) = data
                    .bubbles
                    .iter_mut()
                    .find(|bubble| bubble.id == preview.id)
                {
                    bubble.x = preview.x;
                    bubble.y = preview.y;
                }
                SceneBuilder::build_with(&data, self.viewport, &projection)
            }
            None => SceneBuilder::build_with(&self.snapshot, self.viewport, &projection),
        };

        self.renderer.render(&frame)?;
        self.projection = projection;
        self.frame = frame;
        Ok(())
    }
}

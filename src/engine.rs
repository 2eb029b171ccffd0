use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::background::{Background, LoadState, SourceKind};
use crate::config::EditorConfig;
use crate::consts::ROTATE_HANDLE_ANGLE_OFFSET_DEG;
use crate::error::EditorError;
use crate::guides::AlignmentGuides;
use crate::hit::hit_test;
use crate::input::{DragMode, DragSession, IDLE_CURSOR, InputState, UiState};
use crate::layer::{LayerId, Layers, limit_text};
use crate::render::{self, Scene};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCursor(String),
    /// Selection, guides or background state changed; the host should refresh
    /// any controls that mirror [`EditorStatus`].
    StatusChanged,
    RenderNeeded,
}

/// Snapshot of editor state the host page mirrors in its controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditorStatus {
    pub selected: Option<LayerId>,
    pub dragging: bool,
    pub guides: AlignmentGuides,
    pub alignment_detected: bool,
    pub background: BackgroundStatus,
    /// Where the current background came from, if any.
    pub source: Option<SourceKind>,
    pub can_export: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStatus {
    Empty,
    Loading,
    Ready,
    Failed,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug)]
pub struct EngineCore {
    pub config: EditorConfig,
    pub layers: Layers,
    pub ui: UiState,
    pub input: InputState,
    pub guides: AlignmentGuides,
    pub background: Option<Background>,
    pub viewport: Viewport,
    next_generation: u64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            layers: Layers::new(),
            ui: UiState::default(),
            input: InputState::default(),
            guides: AlignmentGuides::default(),
            background: None,
            viewport: Viewport::identity(config.surface_size, config.surface_size),
            next_generation: 0,
        }
    }

    // --- Data inputs ---

    /// Update the displayed rectangle of the surface, in client pixels.
    pub fn set_viewport(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.viewport = Viewport {
            left,
            top,
            width,
            height,
            surface_width: self.config.surface_size,
            surface_height: self.config.surface_size,
        };
    }

    /// Replace a layer's text, truncated to the configured limit.
    pub fn set_text(&mut self, id: LayerId, text: &str) -> Vec<Action> {
        let text = limit_text(text, self.config.max_text_chars);
        let layer = self.layers.get_mut(id);
        if layer.text == text {
            return Vec::new();
        }
        // A layer that reappears starts from its default placement.
        if layer.is_empty() {
            layer.reset_placement(id);
        }
        layer.text = text;

        // An emptied layer can no longer be hit, so it cannot stay selected.
        if self.layers.get(id).is_empty() && self.ui.selected == Some(id) {
            self.ui.selected = None;
            self.input = InputState::Idle;
        }

        let mut actions = Vec::new();
        self.refresh(&mut actions);
        actions
    }

    /// Start loading a new background. Layers go back to their defaults and
    /// the selection is cleared. Returns the load generation the completion
    /// callback must report back.
    pub fn begin_background(&mut self, src: String, kind: SourceKind) -> (u64, Vec<Action>) {
        self.next_generation += 1;
        let generation = self.next_generation;
        log::info!("engine: loading background gen={generation} kind={kind:?}");

        self.background = Some(Background::new(src, kind, generation));
        self.layers.reset_placement();
        self.ui.selected = None;
        self.input = InputState::Idle;

        // Blank the surface until the new image decodes.
        let mut actions = vec![Action::SetCursor(IDLE_CURSOR.into())];
        self.refresh(&mut actions);
        actions.push(Action::RenderNeeded);
        (generation, actions)
    }

    /// The image for `generation` decoded with the given natural size.
    pub fn image_loaded(&mut self, generation: u64, width: f64, height: f64) -> Vec<Action> {
        let Some(background) = self.current_background_mut(generation) else {
            log::debug!("engine: dropping stale image load gen={generation}");
            return Vec::new();
        };
        background.state = LoadState::Ready { width, height };
        log::info!("engine: background ready {width}x{height}");

        let mut actions = Vec::new();
        self.refresh(&mut actions);
        actions
    }

    /// The image for `generation` failed to decode.
    pub fn image_failed(&mut self, generation: u64) -> Vec<Action> {
        let Some(background) = self.current_background_mut(generation) else {
            log::debug!("engine: dropping stale image failure gen={generation}");
            return Vec::new();
        };
        background.state = LoadState::Failed;
        log::warn!("engine: {:?} {}", background.kind, EditorError::ImageLoadFailed { src: background.src.clone() });
        vec![Action::StatusChanged, Action::RenderNeeded]
    }

    fn current_background_mut(&mut self, generation: u64) -> Option<&mut Background> {
        self.background.as_mut().filter(|bg| bg.generation == generation)
    }

    /// Put both layers back at their defaults, clear selection and any drag.
    pub fn reset(&mut self) -> Vec<Action> {
        log::info!("engine: reset");
        self.layers.reset_placement();
        self.ui.selected = None;
        self.input = InputState::Idle;

        let mut actions = vec![Action::SetCursor(IDLE_CURSOR.into())];
        self.refresh(&mut actions);
        actions
    }

    // --- Pointer input ---

    /// Pointer pressed at a client-space point.
    pub fn on_pointer_down(&mut self, client: Point) -> Vec<Action> {
        if !self.is_ready() {
            return Vec::new();
        }
        let pt = self.viewport.client_to_surface(client);
        let hit = hit_test(pt, &self.layers, self.viewport.surface(), &self.config);
        log::debug!("engine: pointer down at ({:.1}, {:.1}) hit={hit:?}", pt.x, pt.y);

        let mut actions = Vec::new();
        match hit {
            Some(hit) => {
                let mode = hit.part.drag_mode();
                let transform = self.layers.get(hit.layer).transform;
                self.input = InputState::Dragging(DragSession {
                    layer: hit.layer,
                    mode,
                    pointer_start: pt,
                    initial_rotation: transform.rotation,
                    initial_scale: transform.scale,
                });
                self.ui.selected = Some(hit.layer);
                actions.push(Action::SetCursor(mode.active_cursor().into()));
            }
            None => {
                self.input = InputState::Idle;
                self.ui.selected = None;
                actions.push(Action::SetCursor(IDLE_CURSOR.into()));
            }
        }
        self.refresh(&mut actions);
        actions
    }

    /// Pointer moved to a client-space point.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        if !self.is_ready() {
            return Vec::new();
        }
        let pt = self.viewport.client_to_surface(client);

        let InputState::Dragging(session) = self.input else {
            return vec![Action::SetCursor(self.hover_cursor(pt).into())];
        };

        let surface = self.viewport.surface();
        let center = surface.to_pixels(self.layers.get(session.layer).position);
        let layer = self.layers.get_mut(session.layer);

        match session.mode {
            DragMode::Move => {
                let delta = self.viewport.normalize(Point::new(
                    pt.x - session.pointer_start.x,
                    pt.y - session.pointer_start.y,
                ));
                layer.translate(delta.x, delta.y);
                self.input = InputState::Dragging(DragSession { pointer_start: pt, ..session });
            }
            DragMode::Rotate => {
                layer.set_rotation(center.angle_to_deg(pt) - ROTATE_HANDLE_ANGLE_OFFSET_DEG);
            }
            DragMode::Scale => {
                let initial_dist = center.distance(session.pointer_start);
                if initial_dist <= f64::EPSILON {
                    return Vec::new();
                }
                layer.set_scale(session.initial_scale * center.distance(pt) / initial_dist);
            }
        }

        let mut actions = Vec::new();
        self.refresh(&mut actions);
        actions
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// Pointer left the surface. Treated exactly like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    fn end_drag(&mut self) -> Vec<Action> {
        if let InputState::Dragging(session) = self.input {
            log::debug!("engine: drag {:?} on {} ended", session.mode, session.layer.as_str());
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(IDLE_CURSOR.into()), Action::StatusChanged]
    }

    fn hover_cursor(&self, pt: Point) -> &'static str {
        hit_test(pt, &self.layers, self.viewport.surface(), &self.config)
            .map_or(IDLE_CURSOR, |hit| hit.part.drag_mode().hover_cursor())
    }

    /// Recompute guides, then ask for a redraw.
    fn refresh(&mut self, actions: &mut Vec<Action>) {
        self.guides = AlignmentGuides::detect(&self.layers, self.config.guide_tolerance);
        actions.push(Action::StatusChanged);
        if self.is_ready() {
            actions.push(Action::RenderNeeded);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.background.as_ref().is_some_and(Background::is_ready)
    }

    #[must_use]
    pub fn selection(&self) -> Option<LayerId> {
        self.ui.selected
    }

    /// A layer is selected and at least one guide holds.
    #[must_use]
    pub fn alignment_detected(&self) -> bool {
        self.ui.selected.is_some() && self.guides.any()
    }

    #[must_use]
    pub fn can_export(&self) -> bool {
        self.is_ready()
    }

    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.input.cursor()
    }

    #[must_use]
    pub fn status(&self) -> EditorStatus {
        let background = match self.background.as_ref().map(|bg| bg.state) {
            None => BackgroundStatus::Empty,
            Some(LoadState::Loading) => BackgroundStatus::Loading,
            Some(LoadState::Ready { .. }) => BackgroundStatus::Ready,
            Some(LoadState::Failed) => BackgroundStatus::Failed,
        };
        EditorStatus {
            selected: self.ui.selected,
            dragging: self.input.is_dragging(),
            guides: self.guides,
            alignment_detected: self.alignment_detected(),
            background,
            source: self.background.as_ref().map(|bg| bg.kind),
            can_export: self.can_export(),
        }
    }

    /// Everything the renderer needs, or `None` until the background is ready.
    #[must_use]
    pub fn scene<'a>(&'a self, ui: &'a UiState) -> Option<Scene<'a>> {
        let image_size = self.background.as_ref()?.ready_size()?;
        Some(Scene { layers: &self.layers, ui, guides: self.guides, config: &self.config, image_size })
    }
}

// =============================================================
// Engine
// =============================================================

/// The full canvas engine. Owns the browser canvas, its 2D context and the
/// current background image element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: Option<HtmlImageElement>,
    /// Object URL backing the current upload, revoked when replaced.
    object_url: Option<String>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Surface`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, EditorError> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let side = config.surface_size.round() as u32;
        canvas.set_width(side);
        canvas.set_height(side);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| EditorError::Surface("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        Ok(Self { canvas, ctx, image: None, object_url: None, core: EngineCore::with_config(config) })
    }

    /// Re-read the canvas's displayed rectangle before mapping a pointer.
    fn sync_viewport(&mut self) {
        let rect = self.canvas.get_bounding_client_rect();
        self.core.set_viewport(rect.left(), rect.top(), rect.width(), rect.height());
    }

    // --- Background ---

    /// Install `image` as the pending background for `src`.
    ///
    /// The caller attaches load callbacks to `image` and then sets its `src`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the previous upload's object URL cannot be revoked.
    pub fn begin_background(
        &mut self,
        src: String,
        kind: SourceKind,
        image: HtmlImageElement,
    ) -> Result<(u64, Vec<Action>), EditorError> {
        if let Some(old) = self.object_url.take() {
            web_sys::Url::revoke_object_url(&old)?;
        }
        if kind == SourceKind::Upload {
            self.object_url = Some(src.clone());
        }
        self.image = Some(image);
        Ok(self.core.begin_background(src, kind))
    }

    pub fn image_loaded(&mut self, generation: u64, width: f64, height: f64) -> Vec<Action> {
        self.core.image_loaded(generation, width, height)
    }

    pub fn image_failed(&mut self, generation: u64) -> Vec<Action> {
        self.core.image_failed(generation)
    }

    pub fn set_text(&mut self, id: LayerId, text: &str) -> Vec<Action> {
        self.core.set_text(id, text)
    }

    pub fn reset(&mut self) -> Vec<Action> {
        self.core.reset()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, client: Point) -> Vec<Action> {
        self.sync_viewport();
        self.core.on_pointer_down(client)
    }

    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        self.sync_viewport();
        self.core.on_pointer_move(client)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw the current state to the canvas. Until the background is ready
    /// the surface is left blank.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn render(&mut self) -> Result<(), EditorError> {
        self.draw_with(self.core.ui)
    }

    fn draw_with(&mut self, ui: UiState) -> Result<(), EditorError> {
        let (Some(scene), Some(image)) = (self.core.scene(&ui), self.image.as_ref()) else {
            render::draw_blank(&mut self.ctx, self.core.viewport.surface())?;
            return Ok(());
        };
        render::draw(&mut self.ctx, image, &scene)?;
        Ok(())
    }

    /// Encode the surface as a PNG data URL.
    ///
    /// The frame is redrawn without selection decorations for the capture,
    /// then restored.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoBackground`] if no background is ready, or
    /// `Err` if the canvas refuses to encode.
    pub fn export_png_data_url(&mut self) -> Result<String, EditorError> {
        if !self.core.can_export() {
            return Err(EditorError::NoBackground);
        }
        self.draw_with(UiState::default())?;
        let url = self.canvas.to_data_url_with_type("image/png");
        self.render()?;
        log::info!("engine: exported frame");
        Ok(url?)
    }

    /// Apply side effects of `actions` to the canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw or the cursor update fails.
    pub fn apply(&mut self, actions: &[Action]) -> Result<bool, EditorError> {
        let mut status_changed = false;
        for action in actions {
            match action {
                Action::SetCursor(cursor) => self.canvas.style().set_property("cursor", cursor)?,
                Action::StatusChanged => status_changed = true,
                Action::RenderNeeded => self.render()?,
            }
        }
        Ok(status_changed)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn status(&self) -> EditorStatus {
        self.core.status()
    }
}

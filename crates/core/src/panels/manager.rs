use super::PanelError;
use super::geometry::{Point, Size, Viewport};
use super::layout::assign_initial_positions;
use super::panel::{Panel, PanelId, ResizeCorner};

/// Owns every open panel, the viewport they live in and their z-order.
///
/// Stacking is "most recently touched wins": raising a panel sets its z-index to one
/// more than the current maximum. There is no history beyond that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelManager {
    panels: Vec<Panel>,
    viewport: Viewport,
    active: Option<PanelId>,
}

impl PanelManager {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            panels: Vec::new(),
            viewport,
            active: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the viewport and pulls placed panels back inside it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for panel in &mut self.panels {
            panel.reclamp(viewport);
        }
    }

    //
    // ─── LIFECYCLE ─────────────────────────────────────────────────────────────
    //

    /// Opens `id` with its default size, or raises it if already open.
    pub fn open(&mut self, id: PanelId) -> &Panel {
        let size = id.default_size(self.viewport);
        self.open_with_size(id, size)
    }

    pub fn open_with_size(&mut self, id: PanelId, size: Size) -> &Panel {
        let index = match self.index_of(id) {
            Some(index) => {
                let z = self.next_z();
                self.panels[index].set_z_index(z);
                index
            }
            None => {
                let z = self.next_z();
                self.panels.push(Panel::new(id, size, z));
                self.panels.len() - 1
            }
        };
        &self.panels[index]
    }

    /// Removes a panel, cancelling any gesture it owned.
    pub fn close(&mut self, id: PanelId) -> Option<Panel> {
        let index = self.index_of(id)?;
        if self.active == Some(id) {
            self.active = None;
        }
        Some(self.panels.remove(index))
    }

    /// Closes everything except `keep`.
    pub fn retain(&mut self, keep: &[PanelId]) {
        self.panels.retain(|panel| keep.contains(&panel.id()));
        if self.active.is_some_and(|id| !keep.contains(&id)) {
            self.active = None;
        }
    }

    #[must_use]
    pub fn is_open(&self, id: PanelId) -> bool {
        self.index_of(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|panel| panel.id() == id)
    }

    /// Like [`PanelManager::get`], for callers that require the panel to exist.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::NotOpen` if `id` is not currently open.
    pub fn panel(&self, id: PanelId) -> Result<&Panel, PanelError> {
        self.get(id).ok_or(PanelError::NotOpen(id))
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Places any panel that has never been positioned.
    pub fn ensure_layout(&mut self) {
        if self.panels.iter().any(|panel| panel.position().is_none()) {
            assign_initial_positions(&mut self.panels, self.viewport);
        }
    }

    //
    // ─── Z-ORDER ───────────────────────────────────────────────────────────────
    //

    /// Sets the panel's z-index to one above the current maximum.
    ///
    /// Returns the new z-index, or `None` if the panel is not open.
    pub fn bring_to_front(&mut self, id: PanelId) -> Option<u32> {
        let index = self.index_of(id)?;
        let z = self.next_z();
        self.panels[index].set_z_index(z);
        Some(z)
    }

    /// Open panels ordered bottom to top.
    #[must_use]
    pub fn stacking(&self) -> Vec<PanelId> {
        let mut ordered: Vec<&Panel> = self.panels.iter().collect();
        ordered.sort_by_key(|panel| panel.z_index());
        ordered.into_iter().map(Panel::id).collect()
    }

    #[must_use]
    pub fn top(&self) -> Option<PanelId> {
        self.panels
            .iter()
            .max_by_key(|panel| panel.z_index())
            .map(Panel::id)
    }

    //
    // ─── GESTURES ──────────────────────────────────────────────────────────────
    //

    /// Starts dragging `id` and raises it. No-op while resizing or before layout.
    pub fn begin_drag(&mut self, id: PanelId, pointer: Point) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.panels[index].begin_drag(pointer) {
            return false;
        }
        self.start_gesture(id);
        true
    }

    pub fn update_drag(&mut self, id: PanelId, pointer: Point) -> bool {
        let viewport = self.viewport;
        self.panel_mut(id)
            .is_some_and(|panel| panel.update_drag(pointer, viewport))
    }

    /// Ends a drag on `id`. Leaves any other gesture on the panel running.
    pub fn end_drag(&mut self, id: PanelId) {
        if self.panel_mut(id).is_some_and(Panel::end_drag) {
            self.clear_active(id);
        }
    }

    /// Starts resizing `id` from `corner` and raises it. No-op while dragging or before layout.
    pub fn begin_resize(&mut self, id: PanelId, pointer: Point, corner: ResizeCorner) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if !self.panels[index].begin_resize(pointer, corner) {
            return false;
        }
        self.start_gesture(id);
        true
    }

    pub fn update_resize(&mut self, id: PanelId, pointer: Point) -> bool {
        let viewport = self.viewport;
        self.panel_mut(id)
            .is_some_and(|panel| panel.update_resize(pointer, viewport))
    }

    /// Ends a resize on `id`. Leaves any other gesture on the panel running.
    pub fn end_resize(&mut self, id: PanelId) {
        if self.panel_mut(id).is_some_and(Panel::end_resize) {
            self.clear_active(id);
        }
    }

    /// Panel currently owning a drag or resize gesture.
    #[must_use]
    pub fn active(&self) -> Option<PanelId> {
        self.active
    }

    /// Routes a pointer move to whichever panel owns the active gesture.
    ///
    /// Returns `true` if a panel moved or changed size.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        let Some(id) = self.active else {
            return false;
        };
        let Some(dragging) = self.get(id).map(Panel::is_dragging) else {
            return false;
        };
        if dragging {
            self.update_drag(id, pointer)
        } else {
            self.update_resize(id, pointer)
        }
    }

    /// Ends whatever gesture is active.
    pub fn pointer_released(&mut self) {
        let Some(id) = self.active.take() else {
            return;
        };
        if let Some(panel) = self.panel_mut(id) {
            panel.end_drag();
            panel.end_resize();
        }
    }

    // ─── internals ───

    fn start_gesture(&mut self, id: PanelId) {
        // A pointer only ever drives one gesture.
        if let Some(previous) = self.active.filter(|previous| *previous != id) {
            if let Some(panel) = self.panel_mut(previous) {
                panel.end_drag();
                panel.end_resize();
            }
        }
        self.active = Some(id);
        self.bring_to_front(id);
    }

    fn clear_active(&mut self, id: PanelId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    fn next_z(&self) -> u32 {
        self.panels
            .iter()
            .map(Panel::z_index)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }

    fn index_of(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|panel| panel.id() == id)
    }

    fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|panel| panel.id() == id)
    }
}

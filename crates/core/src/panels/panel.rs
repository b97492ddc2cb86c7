use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect, Size, Viewport};

pub const MIN_WIDTH: f64 = 300.0;
pub const MIN_HEIGHT: f64 = 200.0;
pub const MIN_SIZE: Size = Size::new(MIN_WIDTH, MIN_HEIGHT);

const WORKSPACE_WIDTH: f64 = 431.0;
const WORKSPACE_HEIGHT_RATIO: f64 = 0.8;

//
// ─── IDENTITY ──────────────────────────────────────────────────────────────────
//

/// Every surface the desktop can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Question,
    Answer,
    Feedback,
    Results,
    Help,
}

/// How a panel is positioned the first time it is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Part of the left-to-right workspace row, ordered by `slot`.
    Tiled { slot: u8 },
    /// Centred in the viewport.
    Centered,
}

impl PanelId {
    pub const ALL: [PanelId; 5] = [
        PanelId::Question,
        PanelId::Answer,
        PanelId::Feedback,
        PanelId::Results,
        PanelId::Help,
    ];

    #[must_use]
    pub fn placement(self) -> Placement {
        match self {
            PanelId::Question => Placement::Tiled { slot: 0 },
            PanelId::Answer => Placement::Tiled { slot: 1 },
            PanelId::Feedback => Placement::Tiled { slot: 2 },
            PanelId::Results | PanelId::Help => Placement::Centered,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Question => "question",
            PanelId::Answer => "answer",
            PanelId::Feedback => "feedback",
            PanelId::Results => "results",
            PanelId::Help => "help",
        }
    }

    /// Size a panel opens with before the user resizes it.
    #[must_use]
    pub fn default_size(self, viewport: Viewport) -> Size {
        let size = match self {
            PanelId::Question | PanelId::Answer | PanelId::Feedback => Size::new(
                WORKSPACE_WIDTH,
                viewport.height * WORKSPACE_HEIGHT_RATIO,
            ),
            PanelId::Results => Size::new(720.0, 600.0),
            PanelId::Help => Size::new(480.0, 320.0),
        };
        size.at_least(MIN_SIZE)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── RESIZE CORNERS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeCorner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl ResizeCorner {
    pub const ALL: [ResizeCorner; 4] = [
        ResizeCorner::Nw,
        ResizeCorner::Ne,
        ResizeCorner::Sw,
        ResizeCorner::Se,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeCorner::Nw => "nw",
            ResizeCorner::Ne => "ne",
            ResizeCorner::Sw => "sw",
            ResizeCorner::Se => "se",
        }
    }

    /// True when this corner drags the left edge (otherwise the right edge moves).
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, ResizeCorner::Nw | ResizeCorner::Sw)
    }

    /// True when this corner drags the top edge (otherwise the bottom edge moves).
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, ResizeCorner::Nw | ResizeCorner::Ne)
    }
}

//
// ─── PANEL ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Dragging {
        anchor: Point,
    },
    Resizing {
        corner: ResizeCorner,
        pointer_origin: Point,
        baseline: Rect,
    },
}

/// One draggable, resizable rectangle.
///
/// Geometry never fails: out-of-range pointer input is clamped against the viewport
/// passed to each update.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    id: PanelId,
    position: Option<Point>,
    size: Size,
    gesture: Gesture,
    z_index: u32,
}

impl Panel {
    pub(crate) fn new(id: PanelId, size: Size, z_index: u32) -> Self {
        Self {
            id,
            position: None,
            size: size.at_least(MIN_SIZE),
            gesture: Gesture::Idle,
            z_index,
        }
    }

    #[must_use]
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// `None` until the first layout pass places the panel.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.position.map(|origin| Rect::new(origin, self.size))
    }

    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Gesture::Resizing { .. })
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    #[must_use]
    pub fn resize_direction(&self) -> Option<ResizeCorner> {
        match self.gesture {
            Gesture::Resizing { corner, .. } => Some(corner),
            _ => None,
        }
    }

    #[must_use]
    pub fn drag_anchor(&self) -> Option<Point> {
        match self.gesture {
            Gesture::Dragging { anchor } => Some(anchor),
            _ => None,
        }
    }

    pub(crate) fn set_z_index(&mut self, z_index: u32) {
        self.z_index = z_index;
    }

    pub(crate) fn place(&mut self, origin: Point, viewport: Viewport) {
        self.position = Some(viewport.clamp_origin(origin, self.size));
    }

    /// Pulls a placed panel back inside a (possibly shrunken) viewport.
    pub(crate) fn reclamp(&mut self, viewport: Viewport) {
        if let Some(origin) = self.position {
            self.place(origin, viewport);
        }
    }

    // ─── drag ───

    /// Returns `true` if a drag actually started.
    pub(crate) fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.is_resizing() {
            return false;
        }
        let Some(origin) = self.position else {
            return false;
        };
        self.gesture = Gesture::Dragging {
            anchor: pointer - origin,
        };
        true
    }

    pub(crate) fn update_drag(&mut self, pointer: Point, viewport: Viewport) -> bool {
        let Gesture::Dragging { anchor } = self.gesture else {
            return false;
        };
        self.place(pointer - anchor, viewport);
        true
    }

    /// Returns `true` if a drag was in progress.
    pub(crate) fn end_drag(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.gesture = Gesture::Idle;
        true
    }

    // ─── resize ───

    /// Returns `true` if a resize actually started.
    pub(crate) fn begin_resize(&mut self, pointer: Point, corner: ResizeCorner) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(baseline) = self.rect() else {
            return false;
        };
        self.gesture = Gesture::Resizing {
            corner,
            pointer_origin: pointer,
            baseline,
        };
        true
    }

    pub(crate) fn update_resize(&mut self, pointer: Point, viewport: Viewport) -> bool {
        let Gesture::Resizing {
            corner,
            pointer_origin,
            baseline,
        } = self.gesture
        else {
            return false;
        };

        let rect = resized(baseline, corner, pointer - pointer_origin, viewport);
        self.position = Some(rect.origin);
        self.size = rect.size;
        true
    }

    /// Returns `true` if a resize was in progress.
    pub(crate) fn end_resize(&mut self) -> bool {
        if !self.is_resizing() {
            return false;
        }
        self.gesture = Gesture::Idle;
        true
    }
}

/// Applies a corner drag to `baseline`. The edges opposite `corner` never move.
fn resized(baseline: Rect, corner: ResizeCorner, delta: Point, viewport: Viewport) -> Rect {
    let delta = Point::new(finite_or_zero(delta.x), finite_or_zero(delta.y));
    let mut left = baseline.left();
    let mut top = baseline.top();
    let mut right = baseline.right();
    let mut bottom = baseline.bottom();

    if corner.moves_left() {
        left = (left + delta.x).max(0.0).min(right - MIN_WIDTH);
    } else {
        right = (right + delta.x).min(viewport.width).max(left + MIN_WIDTH);
    }

    if corner.moves_top() {
        top = (top + delta.y).max(0.0).min(bottom - MIN_HEIGHT);
    } else {
        bottom = (bottom + delta.y).min(viewport.height).max(top + MIN_HEIGHT);
    }

    Rect::from_edges(left, top, right, bottom)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(x: f64, y: f64, width: f64, height: f64) -> Panel {
        let mut panel = Panel::new(PanelId::Question, Size::new(width, height), 1);
        panel.position = Some(Point::new(x, y));
        panel
    }

    #[test]
    fn new_panel_respects_minimum_size() {
        let panel = Panel::new(PanelId::Help, Size::new(10.0, 10.0), 1);
        assert_eq!(panel.size(), MIN_SIZE);
        assert_eq!(panel.position(), None);
        assert!(panel.is_idle());
    }

    #[test]
    fn drag_and_resize_are_exclusive() {
        let mut panel = placed(100.0, 100.0, 400.0, 300.0);
        assert!(panel.begin_drag(Point::new(110.0, 110.0)));
        assert!(!panel.begin_resize(Point::new(500.0, 400.0), ResizeCorner::Se));
        panel.end_drag();

        assert!(panel.begin_resize(Point::new(500.0, 400.0), ResizeCorner::Se));
        assert!(!panel.begin_drag(Point::new(110.0, 110.0)));
        assert_eq!(panel.resize_direction(), Some(ResizeCorner::Se));
        panel.end_resize();
        assert_eq!(panel.resize_direction(), None);
    }

    #[test]
    fn unplaced_panel_ignores_gestures() {
        let mut panel = Panel::new(PanelId::Answer, Size::new(400.0, 300.0), 1);
        assert!(!panel.begin_drag(Point::new(1.0, 1.0)));
        assert!(!panel.begin_resize(Point::new(1.0, 1.0), ResizeCorner::Nw));
        assert!(panel.is_idle());
    }

    #[test]
    fn se_resize_grows_from_fixed_top_left() {
        let viewport = Viewport::new(1200.0, 800.0);
        let mut panel = placed(100.0, 100.0, 400.0, 300.0);
        panel.begin_resize(Point::new(500.0, 400.0), ResizeCorner::Se);
        panel.update_resize(Point::new(560.0, 450.0), viewport);
        assert_eq!(panel.position(), Some(Point::new(100.0, 100.0)));
        assert_eq!(panel.size(), Size::new(460.0, 350.0));
    }

    #[test]
    fn ne_resize_keeps_left_and_bottom() {
        let viewport = Viewport::new(1200.0, 800.0);
        let mut panel = placed(100.0, 100.0, 400.0, 300.0);
        panel.begin_resize(Point::new(500.0, 100.0), ResizeCorner::Ne);
        panel.update_resize(Point::new(450.0, 60.0), viewport);
        let rect = panel.rect().unwrap();
        assert_eq!(rect.left(), 100.0);
        assert_eq!(rect.bottom(), 400.0);
        assert_eq!(rect.top(), 60.0);
        assert_eq!(rect.size.width, 350.0);
    }

    #[test]
    fn sw_resize_keeps_right_and_top() {
        let viewport = Viewport::new(1200.0, 800.0);
        let mut panel = placed(300.0, 100.0, 400.0, 300.0);
        panel.begin_resize(Point::new(300.0, 400.0), ResizeCorner::Sw);
        panel.update_resize(Point::new(200.0, 500.0), viewport);
        let rect = panel.rect().unwrap();
        assert_eq!(rect.right(), 700.0);
        assert_eq!(rect.top(), 100.0);
        assert_eq!(rect.size, Size::new(500.0, 400.0));
    }

    #[test]
    fn shrinking_stops_at_minimum() {
        let viewport = Viewport::new(1200.0, 800.0);
        let mut panel = placed(100.0, 100.0, 400.0, 300.0);
        panel.begin_resize(Point::new(500.0, 400.0), ResizeCorner::Se);
        panel.update_resize(Point::new(0.0, 0.0), viewport);
        assert_eq!(panel.size(), MIN_SIZE);
        assert_eq!(panel.position(), Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn growing_stops_at_viewport_edge() {
        let viewport = Viewport::new(1000.0, 700.0);
        let mut panel = placed(100.0, 100.0, 400.0, 300.0);
        panel.begin_resize(Point::new(500.0, 400.0), ResizeCorner::Se);
        panel.update_resize(Point::new(5000.0, 5000.0), viewport);
        let rect = panel.rect().unwrap();
        assert_eq!(rect.right(), 1000.0);
        assert_eq!(rect.bottom(), 700.0);
        assert!(viewport.contains(&rect));
    }

    #[test]
    fn default_sizes() {
        let viewport = Viewport::new(1280.0, 800.0);
        assert_eq!(PanelId::Question.default_size(viewport), Size::new(431.0, 640.0));
        assert_eq!(PanelId::Results.default_size(viewport), Size::new(720.0, 600.0));
        let tiny = Viewport::new(320.0, 100.0);
        assert_eq!(PanelId::Feedback.default_size(tiny).height, MIN_HEIGHT);
    }
}

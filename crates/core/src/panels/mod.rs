//! Draggable, resizable desktop panels and their stacking order.

mod geometry;
mod layout;
mod manager;
mod panel;

use thiserror::Error;

pub use geometry::{Point, Rect, Size, Viewport};
pub use layout::{TILE_GAP, TILE_TOP};
pub use manager::PanelManager;
pub use panel::{MIN_HEIGHT, MIN_SIZE, MIN_WIDTH, Panel, PanelId, Placement, ResizeCorner};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PanelError {
    #[error("panel {0} is not open")]
    NotOpen(PanelId),
}

use super::geometry::{Point, Viewport};
use super::panel::{Panel, Placement};

/// Horizontal gap between tiled workspace panels.
pub const TILE_GAP: f64 = 24.0;
/// Top offset of the tiled row.
pub const TILE_TOP: f64 = 40.0;

/// Assigns a position to every panel that does not have one yet.
///
/// Tiled panels form one row ordered by slot and centred horizontally. The row is
/// computed over all tiled panels, placed or not, so a late-opening panel lands in
/// the same spot it would have taken on the first pass. Centred panels go in the
/// middle of the viewport. Every result is clamped into the viewport.
pub(crate) fn assign_initial_positions(panels: &mut [Panel], viewport: Viewport) {
    let mut tiled: Vec<(u8, usize)> = panels
        .iter()
        .enumerate()
        .filter_map(|(index, panel)| match panel.id().placement() {
            Placement::Tiled { slot } => Some((slot, index)),
            Placement::Centered => None,
        })
        .collect();
    tiled.sort_unstable();

    let row_width = tiled
        .iter()
        .map(|&(_, index)| panels[index].size().width)
        .sum::<f64>()
        + TILE_GAP * tiled.len().saturating_sub(1) as f64;
    let mut x = ((viewport.width - row_width) / 2.0).max(0.0);

    for &(_, index) in &tiled {
        let panel = &mut panels[index];
        let width = panel.size().width;
        if panel.position().is_none() {
            panel.place(Point::new(x, TILE_TOP), viewport);
        }
        x += width + TILE_GAP;
    }

    for panel in panels.iter_mut() {
        if panel.position().is_some() {
            continue;
        }
        let size = panel.size();
        let origin = Point::new(
            (viewport.width - size.width) / 2.0,
            (viewport.height - size.height) / 2.0,
        );
        panel.place(origin, viewport);
    }
}

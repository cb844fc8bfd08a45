//! Inset harmonization across shared tracks.
//!
//! Items that report an inner inset (a border, a label gutter) get their insets evened
//! out per column (left/right) and per row (top/bottom), so their content edges line up
//! even when their outer boxes differ.
//!
//! An item whose outer extent matches the track joins both sides of the track. An item
//! that does not match joins only the side its track aligns it to: `start` joins the
//! leading side, `end` the trailing side, `center` neither. Sides an item does not join
//! keep the item's own inset.

use trellis_core::BBox;

use crate::axis::Axis;
use crate::matrix::{Matrix, MeasuredItem};
use crate::track::{Track, TrackAlign};

/// Harmonize insets on every column and row, then derive each inner box.
pub(crate) fn harmonize(matrix: &mut Matrix, rows: &[Track], cols: &[Track]) {
    for (axis, tracks) in [(Axis::Horizontal, cols), (Axis::Vertical, rows)] {
        for (index, track) in tracks.iter().enumerate() {
            let line = matrix.line(axis, index);
            harmonize_line(matrix.items_mut(), &line, track, axis);
        }
    }

    for item in matrix.items_mut() {
        item.inner = item.inset.map(|inset| {
            BBox::from_edges(
                inset.left,
                inset.top,
                item.outer.width - inset.right,
                item.outer.height - inset.bottom,
            )
        });
    }
}

fn harmonize_line(items: &mut [MeasuredItem], line: &[usize], track: &Track, axis: Axis) {
    let mut leading = 0.0_f64;
    let mut trailing = 0.0_f64;
    let mut joins_leading = vec![false; line.len()];
    let mut joins_trailing = vec![false; line.len()];

    for (slot, &index) in line.iter().enumerate() {
        let item = &items[index];
        let Some(inset) = item.size_hint.inner else {
            continue;
        };
        let (start, end) = axis.margin_sides(&inset);

        if axis.extent(&item.outer) != track.size {
            match track.align {
                TrackAlign::Start => {
                    leading = leading.max(start);
                    joins_leading[slot] = true;
                }
                TrackAlign::End => {
                    trailing = trailing.max(end);
                    joins_trailing[slot] = true;
                }
                TrackAlign::Center => {}
            }
        } else {
            leading = leading.max(start);
            trailing = trailing.max(end);
            joins_leading[slot] = true;
            joins_trailing[slot] = true;
        }
    }

    for (slot, &index) in line.iter().enumerate() {
        let item = &mut items[index];
        let Some(own) = item.size_hint.inner else {
            continue;
        };
        let (own_start, own_end) = axis.margin_sides(&own);
        let start = if joins_leading[slot] { leading } else { own_start };
        let end = if joins_trailing[slot] { trailing } else { own_end };
        let inset = item.inset.get_or_insert(own);
        axis.set_margin_sides(inset, start, end);
    }
}

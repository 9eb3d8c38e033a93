use super::{CellShaped, Zone};

/// Smallest zone containing both `a` and `b`.
pub fn union(a: &Zone, b: &Zone) -> Zone {
    Zone {
        left: a.left.min(b.left),
        top: a.top.min(b.top),
        right: a.right.max(b.right),
        bottom: a.bottom.max(b.bottom),
    }
}

/// Smallest zone containing every input, `None` when there is no input.
pub fn union_all<'a, I>(zones: I) -> Option<Zone>
where
    I: IntoIterator<Item = &'a Zone>,
{
    zones
        .into_iter()
        .fold(None, |acc: Option<Zone>, zone| match acc {
            Some(acc) => Some(union(&acc, zone)),
            None => Some(*zone),
        })
}

/// The cells shared by `a` and `b`, `None` when they are disjoint.
pub fn intersection(a: &Zone, b: &Zone) -> Option<Zone> {
    let left = a.left.max(b.left);
    let right = a.right.min(b.right);
    let top = a.top.max(b.top);
    let bottom = a.bottom.min(b.bottom);
    if left > right || top > bottom {
        return None;
    }
    Some(Zone {
        left,
        top,
        right,
        bottom,
    })
}

pub fn overlap(a: &Zone, b: &Zone) -> bool {
    spans_overlap(a.left, a.right, b.left, b.right) && spans_overlap(a.top, a.bottom, b.top, b.bottom)
}

/// True when the zones share a cell or share an edge.
///
/// Zones meeting only at a corner do not touch.
pub fn touch(a: &Zone, b: &Zone) -> bool {
    let cols_overlap = spans_overlap(a.left, a.right, b.left, b.right);
    let rows_overlap = spans_overlap(a.top, a.bottom, b.top, b.bottom);
    let cols_adjacent = spans_adjacent(a.left, a.right, b.left, b.right);
    let rows_adjacent = spans_adjacent(a.top, a.bottom, b.top, b.bottom);

    (cols_overlap && rows_overlap) || (cols_overlap && rows_adjacent) || (rows_overlap && cols_adjacent)
}

fn spans_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start <= b_end && b_start <= a_end
}

fn spans_adjacent(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_end.checked_add(1) == Some(b_start) || b_end.checked_add(1) == Some(a_start)
}

/// Coalesces touching zones until no two results touch.
///
/// A merged zone takes the place of the earliest zone it absorbed, so the
/// output keeps the order in which areas were first selected.
pub fn merge_overlapping_zones(zones: &[Zone]) -> Vec<Zone> {
    let mut merged: Vec<Zone> = Vec::with_capacity(zones.len());

    for zone in zones {
        let mut current = *zone;
        let mut slot: Option<usize> = None;
        let mut i = 0;
        while i < merged.len() {
            if touch(&merged[i], &current) {
                current = union(&merged.remove(i), &current);
                slot = Some(slot.map_or(i, |s| s.min(i)));
                // the grown zone may now reach zones already checked
                i = 0;
            } else {
                i += 1;
            }
        }
        let at = slot.unwrap_or(merged.len()).min(merged.len());
        merged.insert(at, current);
    }

    merged
}

/// Start offsets of tiles of `size` covering `start..=end`.
///
/// The last tile is pulled back so it ends on `end`; it may overlap the
/// previous one. A span shorter than `size` gets a single tile at `start`.
fn tile_starts(start: u32, end: u32, size: u32) -> Vec<u32> {
    let last = (u64::from(end) + 1)
        .saturating_sub(u64::from(size))
        .max(u64::from(start)) as u32;
    let mut starts = Vec::new();
    let mut offset = start;
    while offset < last {
        starts.push(offset);
        offset = offset.saturating_add(size);
    }
    starts.push(last);
    starts
}

/// Tiles `target` with `width x height` blocks anchored at its top-left.
///
/// Tiles are listed column by column. When the target is not an exact
/// multiple of the tile size the final column/row of tiles is shifted back
/// inside the target instead of being cut. A zero dimension means there is
/// nothing to tile and `target` is returned as is.
pub fn split_zone_for_paste(target: &Zone, width: u32, height: u32) -> Vec<Zone> {
    if width == 0 || height == 0 {
        return vec![*target];
    }

    let cols = tile_starts(target.left, target.right, width);
    let rows = tile_starts(target.top, target.bottom, height);

    let mut tiles = Vec::with_capacity(cols.len() * rows.len());
    for &left in &cols {
        for &top in &rows {
            tiles.push(Zone::with_size(left, top, width, height));
        }
    }
    tiles
}

/// Concrete content-sized tiles for every target zone.
///
/// Content with no rows or no columns leaves the targets untouched.
pub fn get_paste_zones<C>(targets: &[Zone], content: &C) -> Vec<Zone>
where
    C: CellShaped + ?Sized,
{
    let (width, height) = (content.width(), content.height());
    if width == 0 || height == 0 {
        return targets.to_vec();
    }
    targets
        .iter()
        .flat_map(|target| split_zone_for_paste(target, width, height))
        .collect()
}

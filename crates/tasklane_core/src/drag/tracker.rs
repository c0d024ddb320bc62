//! Slot-crossing arithmetic for the drag-to-reorder gesture.
//!
//! The tracker accumulates vertical drag distance and divides it by the
//! per-item pixel height to decide how many list slots the dragged item has
//! crossed. A half-item hysteresis band keeps the count stable near slot
//! boundaries, so neighbors do not flicker between slide directions while the
//! pointer hovers around a threshold.

/// Provisional visual offset direction for an item affected by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    None,
    Up,
    Down,
}

/// Slide transition for one neighboring item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    /// Index of the affected neighbor in the on-screen list.
    pub index: usize,
    pub slide: SlideState,
}

/// Result of releasing a drag: the reorder intent plus the pixel offset the
/// dragged item should settle at for the release animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub from: usize,
    pub to: usize,
    pub settle_offset: f32,
}

struct ActiveDrag {
    index: usize,
    list_len: usize,
    offset_y: f32,
    slid_items: i32,
}

/// Interprets one vertical drag at a time against a fixed item height.
pub struct DragTracker {
    item_height: u32,
    offset_to_slide: f32,
    active: Option<ActiveDrag>,
}

impl DragTracker {
    /// Creates a tracker for a list whose rows are `item_height` pixels tall.
    ///
    /// The hysteresis threshold is half the item height.
    pub fn new(item_height: u32) -> Self {
        Self {
            item_height,
            offset_to_slide: (item_height / 2) as f32,
            active: None,
        }
    }

    /// Starts tracking a drag of the item at `index`.
    ///
    /// An index outside the list leaves the tracker idle.
    pub fn begin(&mut self, index: usize, list_len: usize) {
        if index >= list_len {
            return;
        }
        self.active = Some(ActiveDrag {
            index,
            list_len,
            offset_y: 0.0,
            slid_items: 0,
        });
    }

    /// Current accumulated vertical offset of the dragged item, in pixels.
    pub fn offset(&self) -> f32 {
        self.active.as_ref().map_or(0.0, |drag| drag.offset_y)
    }

    /// Accumulates `dy` pixels of pointer movement and returns the slide
    /// transition it causes, if any.
    ///
    /// Dragging down slides the crossed neighbor up, and vice versa. Crossing
    /// back over a threshold returns the previously slid neighbor to rest.
    /// A crossing that would leave the list is discarded and the count keeps
    /// its previous value.
    pub fn update(&mut self, dy: f32) -> Option<SlideChange> {
        let drag = self.active.as_mut()?;
        drag.offset_y += dy;

        let sign: i32 = if drag.offset_y > 0.0 {
            1
        } else if drag.offset_y < 0.0 {
            -1
        } else {
            0
        };

        let previous = drag.slid_items;
        let mut slid = slid_item_count(
            drag.offset_y.abs(),
            self.item_height,
            self.offset_to_slide,
            previous,
        );

        let mut change = None;
        if previous > slid {
            if let Some(neighbor) = neighbor_index(drag.index, previous, sign, drag.list_len) {
                change = Some(SlideChange {
                    index: neighbor,
                    slide: SlideState::None,
                });
            }
        } else if slid > previous {
            match neighbor_index(drag.index, slid, sign, drag.list_len) {
                Some(neighbor) => {
                    change = Some(SlideChange {
                        index: neighbor,
                        slide: if sign == 1 {
                            SlideState::Up
                        } else {
                            SlideState::Down
                        },
                    });
                }
                None => slid = previous,
            }
        }

        drag.slid_items = slid;
        change
    }

    /// Ends the drag and commits the accumulated slot delta as one reorder
    /// intent. Returns `None` when no drag is active.
    pub fn finish(&mut self) -> Option<DragOutcome> {
        let drag = self.active.take()?;
        let sign: i32 = if drag.offset_y > 0.0 {
            1
        } else if drag.offset_y < 0.0 {
            -1
        } else {
            0
        };

        let last_index = drag.list_len.saturating_sub(1) as i64;
        let to = (drag.index as i64 + i64::from(drag.slid_items * sign)).clamp(0, last_index);

        Some(DragOutcome {
            from: drag.index,
            to: to as usize,
            settle_offset: self.item_height as f32 * drag.slid_items as f32 * sign as f32,
        })
    }
}

/// Number of whole slots crossed by an absolute offset, with hysteresis.
///
/// The crossing commits once the offset passes the slot boundary by the
/// half-item threshold and retracts once it falls the same margin short of
/// it; anywhere inside the band the previous count is kept.
fn slid_item_count(offset_abs: f32, item_height: u32, offset_to_slide: f32, previous: i32) -> i32 {
    let height = item_height as f32;
    let in_offset = (offset_abs / height) as i32;
    let plus_offset = ((offset_abs + offset_to_slide) / height) as i32;
    let minus_offset = ((offset_abs - offset_to_slide - 1.0) / height) as i32;

    if offset_abs - offset_to_slide - 1.0 < 0.0 {
        0
    } else if plus_offset > in_offset {
        plus_offset
    } else if minus_offset < in_offset {
        in_offset
    } else {
        previous
    }
}

fn neighbor_index(index: usize, count: i32, sign: i32, list_len: usize) -> Option<usize> {
    let target = index as i64 + i64::from(count * sign);
    if target < 0 || target >= list_len as i64 {
        return None;
    }
    Some(target as usize)
}

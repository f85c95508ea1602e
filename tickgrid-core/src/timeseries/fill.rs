//! Gap filling over an ordered array of bucket values.
//!
//! Both passes copy observed literals; nothing is ever interpolated.

/// Replace each empty slot with the nearest preceding value.
///
/// Leading empty slots (before the first value) are left empty. Returns the
/// number of slots filled.
pub fn forward_fill(slots: &mut [Option<f64>]) -> usize {
    let mut last: Option<f64> = None;
    let mut filled = 0;
    for slot in slots.iter_mut() {
        match *slot {
            Some(v) => last = Some(v),
            None => {
                if let Some(v) = last {
                    *slot = Some(v);
                    filled += 1;
                }
            }
        }
    }
    filled
}

/// Replace each empty slot with the nearest following value.
///
/// Run after [`forward_fill`], this only touches the leading gap. Returns the
/// number of slots filled.
pub fn back_fill(slots: &mut [Option<f64>]) -> usize {
    let mut next: Option<f64> = None;
    let mut filled = 0;
    for slot in slots.iter_mut().rev() {
        match *slot {
            Some(v) => next = Some(v),
            None => {
                if let Some(v) = next {
                    *slot = Some(v);
                    filled += 1;
                }
            }
        }
    }
    filled
}

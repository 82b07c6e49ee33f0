//! Index-clamped list moves.
//!
//! Indices coming from the UI may be stale or out of range. Both helpers clamp
//! them instead of failing, and either apply the whole move or nothing.

/// Move an element within a list.
///
/// `from` and `to` are clamped to the last index. Returns whether anything moved.
pub fn move_item<T>(list: &mut [T], from: usize, to: usize) -> bool {
    let Some(last) = list.len().checked_sub(1) else {
        return false;
    };
    let from = from.min(last);
    let to = to.min(last);

    if from == to {
        return false;
    }

    if from < to {
        list[from..=to].rotate_left(1);
    } else {
        list[to..=from].rotate_right(1);
    }
    true
}

/// Move an element from one list into another.
///
/// `from` is clamped to the source's last index and `to` to the destination's
/// length (append). Returns whether anything moved.
pub fn transfer_item<T>(
    source: &mut Vec<T>,
    destination: &mut Vec<T>,
    from: usize,
    to: usize,
) -> bool {
    let Some(last) = source.len().checked_sub(1) else {
        return false;
    };
    let item = source.remove(from.min(last));
    destination.insert(to.min(destination.len()), item);
    true
}

/// Mutable references to two distinct elements of a slice.
pub fn pair_mut<T>(list: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= list.len() || b >= list.len() {
        return None;
    }
    if a < b {
        let (head, tail) = list.split_at_mut(b);
        Some((&mut head[a], &mut tail[0]))
    } else {
        let (head, tail) = list.split_at_mut(a);
        Some((&mut tail[0], &mut head[b]))
    }
}

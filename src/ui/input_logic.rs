/// Move selection cursor one item up.
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Move selection cursor one item down if another item exists.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if selected + 1 < item_count {
        selected + 1
    } else {
        selected
    }
}

/// First row to draw so that `selected` stays inside a window of `visible` rows.
pub fn window_start(selected: usize, visible: usize) -> usize {
    (selected + 1).saturating_sub(visible.max(1))
}

/// Scroll one line further, stopping once the last line is in view.
pub fn scroll_down(offset: usize, total: usize, visible: usize) -> usize {
    if offset + visible < total {
        offset + 1
    } else {
        offset
    }
}

/// Wrap a cursor one step left within a row of `len` items.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if index == 0 {
        len.saturating_sub(1)
    } else {
        index - 1
    }
}

/// Wrap a cursor one step right within a row of `len` items.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if index + 1 >= len {
        0
    } else {
        index + 1
    }
}

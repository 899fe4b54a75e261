// src/catalog/window.rs

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The first `min(size, len)` items. Recomputed from the start every time.
pub fn window<T>(seq: &[T], size: usize) -> &[T] {
    &seq[..size.min(seq.len())]
}

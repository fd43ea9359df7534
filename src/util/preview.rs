//! Positional truncation for dashboard previews.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// The first `min(limit, items.len())` items, in input order.
///
/// Callers rely on the provider's ordering; nothing here sorts by date.
pub fn preview_slice<T>(items: &[T], limit: usize) -> &[T] {
    &items[..limit.min(items.len())]
}

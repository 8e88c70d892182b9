/// Paint-order key of a draw item.
///
/// Derived ordering compares `z` first (back to front), then `order`, the
/// insertion index that keeps equal-z items in the order they were pushed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: i32,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: i32, order: u32) -> Self {
        Self { z, order }
    }
}

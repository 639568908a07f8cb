use std::ops::Range;

use nutype::nutype;

/// One-based page number.
#[nutype(
    validate(greater_or_equal = 1),
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deref, TryFrom, Display, Serialize, Deserialize)
)]
pub struct PageNumber(u32);

impl PageNumber {
    pub fn first() -> Self {
        Self::try_new(1).unwrap()
    }

    pub fn next(self) -> Self {
        Self::try_new(self.into_inner().saturating_add(1)).unwrap()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::first()
    }
}

#[nutype(
    validate(greater = 0, less_or_equal = PageSize::MAX),
    derive(Debug, Clone, Copy, PartialEq, Eq, Deref, TryFrom, Display, Serialize, Deserialize)
)]
pub struct PageSize(u32);

impl PageSize {
    pub const MAX: u32 = 100;
    pub const DEFAULT: u32 = 10;
}

impl Default for PageSize {
    fn default() -> Self {
        Self::try_new(Self::DEFAULT).unwrap()
    }
}

/// The zero-based offset window `[(page-1)*size, page*size)`.
pub fn window(page: PageNumber, size: PageSize) -> Range<usize> {
    let size = size.into_inner() as usize;
    let start = (page.into_inner() as usize - 1).saturating_mul(size);
    start..start.saturating_add(size)
}

/// Slices `items` by the page window. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: PageNumber, size: PageSize) -> &[T] {
    let Range { start, end } = window(page, size);
    let len = items.len();
    &items[start.min(len)..end.min(len)]
}

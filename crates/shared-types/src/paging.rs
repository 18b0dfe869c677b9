/// Rows shown per page in every admin table.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed to show `len` records. An empty collection has
/// zero pages; the pagination controls render nothing in that case.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The contiguous slice of `items` shown on 1-indexed `page`.
///
/// Slicing past the end clamps to an empty or shorter slice instead of
/// panicking, so a stale page number after deletions is harmless.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

use crate::model::PageRequest;

/// One slice of a larger list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Slice `items` to the requested page. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total_pages = total_pages(items.len(), request.page_size);
    let items = items
        .into_iter()
        .skip(request.offset())
        .take(request.page_size)
        .collect();

    Page { items, total_pages }
}

/// `ceil(total / page_size)`; zero items give zero pages
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

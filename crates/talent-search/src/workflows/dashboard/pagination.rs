use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of an ordered sequence plus the metadata needed to render pager controls.
///
/// `start_index` and `end_index` are 1-based and inclusive, matching the
/// "Showing 11 to 20 of 25" display; both are 0 when the page is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// Slices `ordered` for `page_index` (1-based). No clamping happens here;
/// see [`clamp_page_index`]. A page size of zero is treated as one.
pub fn page<T: Clone>(ordered: &[T], page_size: usize, page_index: usize) -> PageWindow<T> {
    let page_size = page_size.max(1);
    let total_items = ordered.len();
    let total_pages = total_items.div_ceil(page_size);
    let page_index = if total_items == 0 { 1 } else { page_index };

    let offset = page_index.saturating_sub(1).saturating_mul(page_size);
    let items: Vec<T> = if page_index == 0 {
        Vec::new()
    } else {
        ordered.iter().skip(offset).take(page_size).cloned().collect()
    };

    let (start_index, end_index) = if items.is_empty() {
        (0, 0)
    } else {
        (offset + 1, offset + items.len())
    };

    PageWindow {
        items,
        page_index,
        page_size,
        total_pages,
        total_items,
        start_index,
        end_index,
    }
}

/// Clamps a requested page into `[1, total_pages]` (page 1 when there are no pages).
pub fn clamp_page_index(page_index: usize, total_pages: usize) -> usize {
    page_index.clamp(1, total_pages.max(1))
}

impl<T> PageWindow<T> {
    pub fn has_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageWindow<U> {
        PageWindow {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

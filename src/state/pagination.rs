/// Page position within the declarations list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
}

impl PaginationState {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }

    /// Move to page `n` if it exists. Returns whether the page changed.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages() || n == self.page {
            return false;
        }
        self.page = n;
        true
    }

    /// Change the page size, starting over at the first page
    pub fn set_limit(&mut self, limit: u32) -> bool {
        if limit == 0 || limit == self.limit {
            return false;
        }
        self.limit = limit;
        self.page = 1;
        true
    }

    /// Record a new server-side total, pulling `page` back into range
    pub fn set_total(&mut self, total: u32) {
        self.total = total;
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// First and last 1-based item positions on the current page
    pub fn item_range(&self) -> (u32, u32) {
        let start = (self.page - 1) * self.limit + 1;
        let end = (self.page * self.limit).min(self.total);
        (start, end)
    }

    pub fn range_summary(&self) -> String {
        let (start, end) = self.item_range();
        format!("Showing {} to {} of {} results", start, end, self.total)
    }
}

pub fn total_pages(total: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// One control in the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page-number controls for `page` out of `total_pages`.
///
/// The first and last pages are always shown, plus the current page and
/// the two before it. Page 2 turns into an ellipsis when `page > 3`, and
/// page `total_pages - 1` when `page < total_pages - 2`; other hidden pages
/// are omitted.
pub fn page_window(page: u32, total_pages: u32) -> Vec<PageItem> {
    let page = i64::from(page);
    let last = i64::from(total_pages);

    (1..=last)
        .filter_map(|i| {
            if i == 1 || i == last || (page - 2 <= i && i <= page) {
                Some(PageItem::Page(i as u32))
            } else if (i == 2 && page > 3) || (i == last - 1 && page < last - 2) {
                Some(PageItem::Ellipsis)
            } else {
                None
            }
        })
        .collect()
}

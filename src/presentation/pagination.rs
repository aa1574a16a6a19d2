use std::ops::Range;

/// Number of books shown on one listing page.
pub const PAGE_SIZE: usize = 5;

/// Navigation commands accepted by the listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    Next,
    Previous,
    Back,
}

impl PageCommand {
    /// Maps a key to a command. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "1" => Some(PageCommand::Next),
            "2" => Some(PageCommand::Previous),
            "3" => Some(PageCommand::Back),
            _ => None,
        }
    }
}

/// Page window over a list of `total` records.
///
/// Starts on page 0. Moving past either end is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    total: usize,
    page_size: usize,
    current_page: usize,
}

impl Paginator {
    pub fn new(total: usize) -> Self {
        Self::with_page_size(total, PAGE_SIZE)
    }

    fn with_page_size(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            (self.total - 1) / self.page_size + 1
        }
    }

    /// One-based page number for display. An empty list shows page 0.
    pub fn displayed_page(&self) -> usize {
        self.current_page + usize::from(self.total > 0)
    }

    /// Indices of the records on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current_page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// Advances one page; returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page + 1 < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page; returns false when already on the first page.
    pub fn previous(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn header(&self) -> String {
        format!("Books: page {} of {}", self.displayed_page(), self.total_pages())
    }
}

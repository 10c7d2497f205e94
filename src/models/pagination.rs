use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl Pagination {
    /// Clamps upstream values so that `1 <= current_page <= last_page` holds.
    pub fn new(current_page: u32, last_page: u32, total: u64) -> Self {
        let last_page = last_page.max(1);
        Self {
            current_page: current_page.clamp(1, last_page),
            last_page,
            total,
        }
    }

    pub fn single(total: u64) -> Self {
        Self::new(1, 1, total)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// One slot in the rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

impl PageToken {
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

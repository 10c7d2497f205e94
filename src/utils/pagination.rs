use crate::models::pagination::{PageToken, Pagination};

/// Windows up to this many pages are rendered without elision.
const FULL_WINDOW: u32 = 7;
/// Pages shown on each side of the current one.
const DELTA: u32 = 2;

/// Page labels for a pagination control around `current`.
///
/// The first and last page are always present; runs of skipped pages collapse
/// into a single [`PageToken::Ellipsis`]. Out-of-range input is clamped.
pub fn compute_window(current: u32, total: u32) -> Vec<PageToken> {
    let total = total.max(1);
    let current = current.clamp(1, total);

    if total <= FULL_WINDOW {
        return (1..=total).map(PageToken::Page).collect();
    }

    let mut pages = Vec::with_capacity(FULL_WINDOW as usize + 2);
    pages.push(PageToken::Page(1));

    if current > DELTA + 2 {
        pages.push(PageToken::Ellipsis);
    }

    let start = current.saturating_sub(DELTA).max(2);
    let end = current.saturating_add(DELTA).min(total - 1);
    pages.extend((start..=end).map(PageToken::Page));

    if current < total.saturating_sub(DELTA + 1) {
        pages.push(PageToken::Ellipsis);
    }

    pages.push(PageToken::Page(total));
    pages
}

/// Tokens for a pagination control, or nothing when there is a single page.
pub fn controls_for(pagination: &Pagination) -> Vec<PageToken> {
    if pagination.last_page <= 1 {
        return Vec::new();
    }
    compute_window(pagination.current_page, pagination.last_page)
}

use url::Url;

use crate::component::ticket::Ticket;

/// Tickets requested per page from the list endpoint.
pub const PAGE_SIZE: u32 = 25;

/// One page of tickets as returned by the list endpoint, with derived paging data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketPage {
    tickets: Vec<Ticket>,
    page_size: u32,
    total_count: u64,
    current_page: u32,
    previous_page: u32,
    next_page: u32,
    display_text: String,
}

impl TicketPage {
    /// Builds a page and derives its display text from the paging values.
    ///
    /// `previous_page` and `next_page` use 0 for "no such page". A `current_page`
    /// of 0 is raised to 1.
    pub fn new(
        tickets: Vec<Ticket>,
        total_count: u64,
        current_page: u32,
        previous_page: u32,
        next_page: u32,
    ) -> Self {
        let current_page = current_page.max(1);
        let display_text = format_display_range(previous_page, current_page, total_count, PAGE_SIZE);
        TicketPage {
            tickets,
            page_size: PAGE_SIZE,
            total_count,
            current_page,
            previous_page,
            next_page,
            display_text,
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn previous_page(&self) -> u32 {
        self.previous_page
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Number of tickets actually present on this page.
    pub fn page_ticket_count(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Reads the `page` query parameter of an absolute URL.
///
/// Returns 0 for an empty string, a malformed URL, a missing parameter or a
/// value that is not a non-negative integer.
pub fn extract_page_number(url: &str) -> u32 {
    let Ok(url) = Url::parse(url) else {
        return 0;
    };

    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(0)
}

/// `Showing {start} to {end} of {total}`, with `end` clamped to `total_count`.
///
/// The inputs are trusted: `previous_page` is expected to be `current_page - 1`
/// (or 0 on the first page) and a mismatched pair produces a mismatched range.
pub fn format_display_range(
    previous_page: u32,
    current_page: u32,
    total_count: u64,
    page_size: u32,
) -> String {
    let range_start = u64::from(previous_page) * u64::from(page_size) + 1;
    let range_end = (u64::from(current_page) * u64::from(page_size)).min(total_count);
    format!("Showing {} to {} of {}", range_start, range_end, total_count)
}

use crate::client::zendesk_rest_client::{TicketListResponse, ZendeskTicket};
use crate::component::pagination::{self, TicketPage, PAGE_SIZE};
use crate::component::retrieval::{self, RetrievalResult, NO_TICKETS_FOUND};
use crate::context::ZendeskContext;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub status: String,
}

/// Projects an upstream ticket onto a `Ticket`.
///
/// Missing or null `subject`, `description` and `status` become empty strings.
/// No validation is applied to the values.
pub fn map_ticket(ticket: &ZendeskTicket) -> Ticket {
    Ticket {
        id: ticket.id.clone(),
        subject: ticket.subject.clone().unwrap_or_default(),
        description: ticket.description.clone().unwrap_or_default(),
        status: ticket.status.clone().unwrap_or_default(),
    }
}

/// Builds a `TicketPage` from a list response for the requested page.
pub fn map_ticket_page(response: &TicketListResponse, page: Option<u32>) -> TicketPage {
    let tickets: Vec<Ticket> = response.tickets.iter().map(map_ticket).collect();
    let previous_page = pagination::extract_page_number(response.previous_page.as_deref().unwrap_or(""));
    let next_page = pagination::extract_page_number(response.next_page.as_deref().unwrap_or(""));
    let current_page = page.filter(|page| *page > 0).unwrap_or(1);

    TicketPage::new(tickets, response.count, current_page, previous_page, next_page)
}

#[derive(Debug, Clone)]
pub struct TicketHandler {
    pub context: ZendeskContext,
}

impl TicketHandler {
    pub async fn get_ticket(&self, id: &str) -> RetrievalResult<Ticket> {
        match self.context.zendesk_rest_client.fetch_ticket(id).await {
            Ok(ticket) => RetrievalResult::success(map_ticket(&ticket)),
            Err(e) => retrieval::handle_error(&e),
        }
    }

    /// Fetches one page of tickets. `None` or page 0 asks for the first page.
    ///
    /// A page past the end of the data is still a success, annotated with
    /// `NO_TICKETS_FOUND`.
    pub async fn get_ticket_page(&self, page: Option<u32>) -> RetrievalResult<TicketPage> {
        let response = match self
            .context
            .zendesk_rest_client
            .fetch_tickets(PAGE_SIZE, page)
            .await
        {
            Ok(response) => response,
            Err(e) => return retrieval::handle_error(&e),
        };

        let ticket_page = map_ticket_page(&response, page);
        if ticket_page.is_empty() {
            tracing::info!(?page, "No tickets on requested page");
            RetrievalResult::success_with_notice(ticket_page, NO_TICKETS_FOUND)
        } else {
            RetrievalResult::success(ticket_page)
        }
    }
}

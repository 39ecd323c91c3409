/// HTTP access to the Zendesk REST API.
///
/// Holds the authenticated client and the mapping of upstream HTTP statuses onto application errors.
pub mod client;
/// Ticket retrieval: domain types, pagination and the result handed to callers.
pub mod component;
/// Configuration loaded at startup and the shared context passed to handlers.
pub mod context;

pub mod pagination;
pub mod retrieval;
pub mod ticket;

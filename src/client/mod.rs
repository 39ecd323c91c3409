pub mod response_classifier;
pub mod zendesk_rest_client;

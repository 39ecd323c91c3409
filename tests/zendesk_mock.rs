use zendesk_ticket_viewer::component::ticket::TicketHandler;
use zendesk_ticket_viewer::context::{Credentials, ZendeskContext};

pub const TICKET_PATH: &str = "/api/v2/tickets";
pub const USERNAME: &str = "abc@xyz.com/token";
pub const API_TOKEN: &str = "randomToken12345";
pub const EXPECTED_AUTHORIZATION: &str =
    "Basic YWJjQHh5ei5jb20vdG9rZW46cmFuZG9tVG9rZW4xMjM0NQ==";

pub fn credentials(base_url: &str) -> Credentials {
    Credentials::new(base_url, TICKET_PATH, USERNAME, API_TOKEN)
}

pub fn ticket_handler(base_url: &str) -> TicketHandler {
    TicketHandler {
        context: ZendeskContext::new(&credentials(base_url)).unwrap(),
    }
}

pub fn ticket_response_mock() -> &'static str {
    r#"
    {
        "ticket": {
            "url": "https://acme.zendesk.com/api/v2/tickets/1.json",
            "id": 1,
            "subject": "Sample ticket: Meet the ticket",
            "description": "Hi there,\n\nI'm sending an email because I'm having a problem setting up your new product.",
            "status": "open",
            "priority": "normal",
            "tags": ["sample", "support"]
        }
    }
    "#
}

pub fn ticket_list_response_mock(base_url: &str) -> String {
    format!(
        r#"
    {{
        "tickets": [
            {{ "id": 26, "subject": "velit eiusmod reprehenderit", "description": "Aute ex sunt culpa ex ea esse sint cupidatat.", "status": "open" }},
            {{ "id": 27, "subject": "excepteur laborum ex occaecat", "description": null, "status": "pending" }},
            {{ "id": 28, "subject": null, "status": "solved" }}
        ],
        "next_page": "{base_url}{TICKET_PATH}.json?page=3&per_page=25",
        "previous_page": "{base_url}{TICKET_PATH}.json?page=1&per_page=25",
        "count": 78
    }}
    "#
    )
}

pub fn empty_ticket_list_response_mock(base_url: &str) -> String {
    format!(
        r#"
    {{
        "tickets": [],
        "next_page": null,
        "previous_page": "{base_url}{TICKET_PATH}.json?page=199&per_page=25",
        "count": 78
    }}
    "#
    )
}

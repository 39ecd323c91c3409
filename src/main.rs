use clap::{Parser, Subcommand};
use time::OffsetDateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zendesk_ticket_viewer::component::pagination::TicketPage;
use zendesk_ticket_viewer::component::retrieval::RetrievalResult;
use zendesk_ticket_viewer::component::ticket::{Ticket, TicketHandler};
use zendesk_ticket_viewer::context::{Credentials, ZendeskContext};

#[derive(Parser)]
#[command(name = "zendesk-ticket-viewer")]
#[command(about = "Browse Zendesk tickets from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one or more tickets by id
    Ticket {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// List one page of tickets
    Tickets {
        /// Page number, starting at 1
        #[arg(long, short)]
        page: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let start_time = OffsetDateTime::now_utc();
    let cli = Cli::parse();

    let credentials = Credentials::from_env()?;
    let ticket_handler = TicketHandler {
        context: ZendeskContext::new(&credentials)?,
    };

    match cli.command {
        Commands::Ticket { ids } => {
            let lookups = ids.iter().map(|id| ticket_handler.get_ticket(id));
            let results = futures::future::join_all(lookups).await;
            for (id, result) in ids.iter().zip(results) {
                print_ticket(id, &result);
            }
        }
        Commands::Tickets { page } => {
            print_ticket_page(&ticket_handler.get_ticket_page(page).await);
        }
    }

    let elapsed = OffsetDateTime::now_utc() - start_time;
    tracing::info!("Time elapsed: {:?}", elapsed);

    Ok(())
}

fn print_ticket(id: &str, result: &RetrievalResult<Ticket>) {
    match result {
        RetrievalResult::Success { data: ticket, .. } => {
            println!("#{} [{}] {}", ticket.id, ticket.status, ticket.subject);
            if !ticket.description.is_empty() {
                println!();
                println!("{}", ticket.description);
            }
            println!();
        }
        RetrievalResult::Failure { message } => eprintln!("Ticket {}: {}", id, message),
    }
}

fn print_ticket_page(result: &RetrievalResult<TicketPage>) {
    match result {
        RetrievalResult::Success { data: page, notice } => {
            if let Some(notice) = notice {
                println!("{}", notice);
                return;
            }
            println!("{}", page.display_text());
            for ticket in page.tickets() {
                println!("  #{:<8} {:<10} {}", ticket.id, ticket.status, ticket.subject);
            }
            if page.previous_page() > 0 {
                println!("Previous page: {}", page.previous_page());
            }
            if page.next_page() > 0 {
                println!("Next page: {}", page.next_page());
            }
        }
        RetrievalResult::Failure { message } => eprintln!("{}", message),
    }
}

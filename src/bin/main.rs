use msme_assistant::{
    client::AssistantClient,
    config::assistant_url,
    session::ChatSession,
    Category,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const HELP: &str = "Commands: /category <auto|registration|loans|compliance|schemes|maharashtra>, /quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let base_url = assistant_url();
    let client = AssistantClient::new(&base_url)?;
    info!(url = %base_url, "MSME chat client starting");

    let mut session = ChatSession::new();
    if let Some(welcome) = session.transcript().first() {
        println!("{}\n", welcome.text);
    }
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        if line == "/quit" {
            break;
        }

        if let Some(name) = line.strip_prefix("/category") {
            let category = Category::parse(name);
            session = session.select_category(category);
            println!("Category: {}", category.label());
            continue;
        }

        let (next, ticket) = session.send(line);
        session = next;
        let Some(ticket) = ticket else {
            continue;
        };

        if let Some(detected) = session.auto_detected() {
            println!("🎯 Auto-detected: {}", detected.label());
        }

        let reply = client.ask(&ticket).await;
        session = session.receive(&ticket, reply);

        if let Some(last) = session.transcript().last().filter(|m| !m.is_user) {
            println!("\n{}\n", last.text);
        }
    }

    Ok(())
}

use clap::Parser;

mod client;
mod tui;

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Browse the CyberArena game catalog", long_about = None)]
struct Cli {
    /// API server URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    /// Start filtered to this genre (e.g. action, rpg)
    #[arg(short, long)]
    genre: Option<String>,

    /// Start filtered to titles containing this keyword
    #[arg(short, long)]
    keyword: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    println!("Browsing games on {}...", cli.server);

    if let Err(e) = client::start_client(&cli.server, cli.genre, cli.keyword).await {
        eprintln!("Error: {}", e);
    }
}

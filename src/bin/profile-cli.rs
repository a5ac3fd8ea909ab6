use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "profile-cli")]
#[command(about = "Query CLI for the Stack Overflow profile lookup service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a profile by display name
    User {
        /// Display name to search for
        username: String,
    },
    /// Look up a profile by numeric user id
    Id {
        /// Exact Stack Overflow user id
        user_id: u64,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::User { username } => {
            let res = client
                .get(format!("{}/api/stackoverflow/{}", cli.url, username))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Id { user_id } => {
            let res = client
                .get(format!("{}/api/stackoverflow/id/{}", cli.url, user_id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

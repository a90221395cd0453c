use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "dice-cli")]
#[command(about = "Command-line client for the dice API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the die
    Roll {
        /// Number of faces (defaults to 6 on the server)
        #[arg(short, long, allow_hyphen_values = true)]
        faces: Option<i64>,
    },
    /// Force an outcome
    Cheat {
        /// Number of faces (defaults to 6 on the server)
        #[arg(short, long, allow_hyphen_values = true)]
        faces: Option<i64>,

        /// Desired outcome (defaults to the face count)
        #[arg(short, long, allow_hyphen_values = true)]
        number: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Roll { faces } => {
            let mut query = Vec::new();
            if let Some(faces) = faces {
                query.push(("faces", faces));
            }
            client.get(format!("{}/", base)).query(&query)
        }
        Commands::Cheat { faces, number } => {
            let mut query = Vec::new();
            if let Some(faces) = faces {
                query.push(("faces", faces));
            }
            if let Some(number) = number {
                query.push(("number", number));
            }
            client.get(format!("{}/cheat", base)).query(&query)
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: dice API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "session-cli")]
#[command(about = "Command-line front-end for the wallet session bridge", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8090")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account, draft, status and history
    State,
    /// Request wallet permission
    Connect,
    /// Set one form field (addressTo, amount, keyword, message)
    Set { field: String, value: String },
    /// Replace the whole form, then submit the transfer
    Send {
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "")]
        keyword: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Reload history and count from the contract
    Refresh,
    /// Abort a pending confirmation wait
    Cancel,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::State => {
            let res = client.get(format!("{}/state", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Connect => {
            let res = client.post(format!("{}/connect", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Set { field, value } => {
            let res = set_field(&client, &cli.url, &field, value).await?;
            print_response(res).await?;
        }
        Commands::Send {
            to,
            amount,
            keyword,
            message,
        } => {
            let draft = json!({
                "addressTo": to,
                "amount": amount,
                "keyword": keyword,
                "message": message,
            });
            let res = client
                .put(format!("{}/draft", cli.url))
                .json(&draft)
                .send()
                .await?;
            if !res.status().is_success() {
                return print_response(res).await;
            }
            let res = client.post(format!("{}/transactions", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Refresh => {
            let res = client
                .post(format!("{}/transactions/refresh", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Cancel => {
            let res = client
                .post(format!("{}/transactions/cancel", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn set_field(
    client: &reqwest::Client,
    url: &str,
    field: &str,
    value: String,
) -> Result<reqwest::Response, reqwest::Error> {
    client
        .put(format!("{}/draft/{}", url, field))
        .json(&json!({ "value": value }))
        .send()
        .await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await.unwrap_or(Value::Null);
    if !status.is_success() {
        eprintln!("Error: bridge returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

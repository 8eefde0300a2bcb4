//! vtrade-auth CLI binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vtrade_auth::cli::errors::format_error_help;
use vtrade_auth::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let result = match cli.command {
        Commands::Login => vtrade_auth::cli::auth::handle_login(&config).await,
        Commands::Status => vtrade_auth::cli::auth::handle_status(&config).await,
        Commands::Logout => vtrade_auth::cli::auth::handle_logout(&config).await,
    };

    match result {
        Ok(view) => {
            println!("{view}");
            // A login that ends signed out already logged why.
            if matches!(cli.command, Commands::Login) && !view.is_authenticated() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", format_error_help(&e));
            std::process::exit(1);
        }
    }
}

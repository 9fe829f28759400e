mod cli;
mod commands;
mod manager;
mod output;
mod session;
mod templates;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // One-shot commands only surface warnings
    let directive = match cli.command {
        Commands::Serve(_) => "tracker=info",
        _ => "tracker=warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format;
    match cli.command {
        Commands::Signup(args) => commands::account::signup(&args, format),
        Commands::Add(args) => commands::records::add(&args, format),
        Commands::List(args) => commands::records::list(&args, format),
        Commands::Delete(args) => commands::records::delete(&args, format),
        Commands::Export(args) => commands::records::export(&args, format),
        Commands::Summary(args) => commands::records::summary(&args, format),
        Commands::Info(args) => commands::info::run(&args, format),
        Commands::Serve(args) => commands::serve::run(&args).await,
        Commands::Health(args) => commands::health::run(&args).await,
    }
}

use std::path::PathBuf;

use clap::Parser;

mod commands;
mod context;

#[derive(Parser)]
#[command(
    name = "azdash",
    about = "Azure Resource Dashboard - browse and control Azure resources from the terminal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<commands::Commands>,

    /// Dashboard config file (defaults to ~/.config/azdash/config.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend API base URL, overriding the config file
    #[arg(long, env = "AZDASH_API_URL", global = true)]
    api_url: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = context::Context::load(cli.config.as_deref(), cli.api_url)?;

    match cli.command {
        None => {
            // No subcommand: launch TUI
            azdash_tui::launch_tui(ctx.tui_options()?).await
        }
        Some(command) => {
            let filter = match cli.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .init();

            match command {
                commands::Commands::Status(args) => commands::status::execute(&ctx, args).await,
                commands::Commands::List(args) => commands::list::execute(&ctx, args).await,
                commands::Commands::Show(args) => commands::show::execute(&ctx, args).await,
                commands::Commands::Vm(args) => commands::vm::execute(&ctx, args).await,
                commands::Commands::Theme(args) => commands::theme::execute(&ctx, args).await,
            }
        }
    }
}

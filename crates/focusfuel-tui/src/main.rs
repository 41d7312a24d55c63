mod app;
mod tui;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "focusfuel-tui")]
#[command(version)]
#[command(about = "FocusFuel -- smart study & energy planner")]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();
    app::run_tui().await
}

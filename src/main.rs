use anyhow::Result;
use clap::Parser;
use spendbook::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    spendbook::telemetry::init_tracing(cli.verbose);
    cli.run().await
}

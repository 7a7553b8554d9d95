use anyhow::Result;
use clap::Parser;
use topin_tags::cli::Cli;

fn main() -> Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "topin_tags=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}

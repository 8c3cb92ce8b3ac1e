//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use roster_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    // RUST_LOG wins; otherwise warnings only, or debug for our crates with -v
    let default_directive = if verbose {
        "warn,roster_core=debug,roster_http=debug,roster_store=debug,roster_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;

    match command {
        Commands::Paths => handlers::paths::execute(&config)?,
        Commands::List { refresh } => {
            let ctx = bootstrap(config)?;
            handlers::list::execute(&ctx, *refresh).await?;
        }
        Commands::Show { id } => {
            let ctx = bootstrap(config)?;
            handlers::show::execute(&ctx, *id).await?;
        }
    }

    Ok(())
}

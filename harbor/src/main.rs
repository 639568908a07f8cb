use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use harbor::commands::{bookmarks::BookmarksCommand, jobs::JobsCommand, theme::ThemeCommand};
use harbor_utils::harbor_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = harbor_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Jobs { command } => command.invoke(config).await?,
        Command::Bookmarks { command } => command.invoke(config).await?,
        Command::Theme { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = harbor_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse the job feed
    #[command(aliases(["j"]))]
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Manage bookmarked jobs
    #[command(aliases(["b", "saved"]))]
    Bookmarks {
        #[command(subcommand)]
        command: BookmarksCommand,
    },
    /// Show or change the colour scheme preference
    #[command(aliases(["t"]))]
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}

use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use discogs_shuffle::cli::args::{Cli, Commands, CompletionsArgs};
use discogs_shuffle::cli::commands::{self, ClientOverrides};
use discogs_shuffle::cli::OutputFormat;
use discogs_shuffle::config::{Config, Paths};
use discogs_shuffle::error::ShuffleError;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint.dimmed());
        }
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "discogs_shuffle=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), ShuffleError> {
    // Handle completions command early (no config needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    let paths = Paths::new()?;
    let mut config = Config::load_from(&paths)?;
    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    let output = match &cli.command {
        Commands::Completions(_) => unreachable!(), // Handled above
        Commands::Config(args) => commands::config(&mut config, &paths, args, format)?,
        Commands::Cache(args) => commands::cache(&paths, args, format)?,

        // Everything else may need to talk to Discogs
        Commands::Shuffle(_) | Commands::List(_) => {
            let overrides = ClientOverrides {
                token: cli.token.clone(),
                api_url: cli.api_url.clone(),
            };
            let shuffler = commands::build_shuffler(&config, &paths, &overrides)?;

            match &cli.command {
                Commands::Shuffle(args) => commands::shuffle(&shuffler, &config, args, format)?,
                Commands::List(args) => commands::list(&shuffler, &config, args, format)?,
                _ => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

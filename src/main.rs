use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use playlist_builder::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to Spotify and cache the token
    Auth,

    /// Run the playlist server
    Serve,

    /// Create a playlist
    Create(CreateOptions),

    /// Search for tracks
    Search(SearchOptions),

    /// Add a track to the current playlist
    Add(AddOptions),

    /// Finish the current playlist
    Finish(FinishOptions),

    /// Build a playlist interactively
    Session,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Name of the new playlist
    #[clap(long)]
    pub name: String,

    /// Optional description
    #[clap(long)]
    pub description: Option<String>,

    /// Open the created playlist in the browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search terms, joined with spaces
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// Spotify track URI, e.g. spotify:track:0DiWol3AO6WpXZgp0goxAV
    pub track_uri: String,
}

#[derive(Parser, Debug, Clone)]
pub struct FinishOptions {
    /// Don't ask for confirmation
    #[clap(long, short)]
    pub yes: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Auth => {
            cli::auth().await;
            Ok(())
        }
        Command::Serve => {
            cli::serve().await;
            Ok(())
        }
        Command::Create(opt) => cli::create(opt.name, opt.description, opt.open).await,
        Command::Search(opt) => cli::search(opt.query.join(" ")).await,
        Command::Add(opt) => cli::add(opt.track_uri).await,
        Command::Finish(opt) => cli::finish(opt.yes).await,
        Command::Session => {
            cli::session().await;
            Ok(())
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    // The failure has already been shown to the user.
    if outcome.is_err() {
        std::process::exit(1);
    }
}

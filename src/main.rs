use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use tracknotes::{
    api::DEFAULT_SEARCH_TYPE, cli, config, error, spotify::DEFAULT_API_VERSION,
    spotify::SpotifyClient,
};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the catalog
    Search(SearchOptions),

    /// Show an album by id
    Album(IdOption),

    /// Show an artist by id
    Artist(IdOption),

    /// Show a track by id
    Track(IdOption),

    /// Show any resource type by id
    Resource(ResourceOptions),

    /// Serve the JSON endpoints
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free text query
    pub query: String,

    /// What to search for (track, album, artist, ...)
    #[clap(long = "type", default_value = DEFAULT_SEARCH_TYPE)]
    pub search_type: String,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Spotify id
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ResourceOptions {
    /// Resource type as it appears in the API path, e.g. `albums`
    pub resource_type: String,

    /// Spotify id
    pub id: String,

    #[clap(long, default_value = DEFAULT_API_VERSION)]
    pub api_version: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Bind address, defaults to SERVER_ADDRESS
    #[clap(long)]
    pub addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let client = match SpotifyClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    match cli.command {
        Command::Search(opt) => cli::search(&client, &opt.query, &opt.search_type).await,
        Command::Album(opt) => cli::resource(&client, "albums", &opt.id, None).await,
        Command::Artist(opt) => cli::resource(&client, "artists", &opt.id, None).await,
        Command::Track(opt) => cli::resource(&client, "tracks", &opt.id, None).await,
        Command::Resource(opt) => {
            cli::resource(
                &client,
                &opt.resource_type,
                &opt.id,
                Some(opt.api_version.as_str()),
            )
            .await
        }
        Command::Serve(opt) => {
            let addr = opt.addr.unwrap_or_else(config::server_addr);
            cli::serve(Arc::clone(&client), &addr).await
        }
        Command::Completions(_) => {}
    }
}

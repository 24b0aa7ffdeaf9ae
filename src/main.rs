use std::path::PathBuf;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use gutencorp::{cli, config, error, utils};

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
    /// Build the training corpus from archive book ids
    Build(BuildOptions),

    /// Manage the local catalog metadata cache
    Cache(CacheOptions),

    /// Some helper information about the catalog cache and book list
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildOptions {
    /// Book id to include; can be repeated
    #[clap(
        long = "id",
        value_parser = utils::parse_book_id,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub ids: Vec<u32>,

    /// Output file for the assembled corpus
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Manage the local catalog metadata cache")]
pub struct CacheOptions {
    /// Subcommands under `cache` (e.g., `init`)
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CacheSubcommand {
    /// Create the catalog cache if it does not exist yet
    Init(CacheInitOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct CacheInitOpts {
    /// Rebuild the cache even if it already exists
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    #[clap(long)]
    catalog: bool,
    #[clap(long)]
    books: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Build(opt) => {
            let ids = if opt.ids.is_empty() {
                config::default_book_ids()
            } else {
                opt.ids
            };
            let output = opt.output.unwrap_or_else(config::default_corpus_path);
            cli::build(ids, output).await
        }

        Command::Cache(opt) => match opt.command {
            CacheSubcommand::Init(i) => cli::init_cache(i.force).await,
        },

        Command::Info(opt) => cli::info(opt.catalog, opt.books).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

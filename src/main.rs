//! Command-line interface for the deckroute binary.
//!
//! The CLI exposes subcommands for normalizing raw presentation parameters
//! and for deriving the full link document a page render would consume,
//! which makes the derivation rules scriptable in automation and easy to
//! inspect during deployment debugging.

use std::{
    io,
    path::PathBuf,
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use deckroute::{
    DeckParams, Error, LinkDocument, QueryRoutes, RepoRenderer, ServerConfig, load_snapshot,
};
use serde::Serialize;

/// Command line interface for deriving presentation parameters and links.
#[derive(Debug, Parser,)]
#[command(name = "deckroute", version, about = "Derive slide-deck parameters and links")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Normalize raw parameters into the canonical parameter set.
    Params(ParamsArgs,),
    /// Derive the full link document for a presentation page.
    Links(LinksArgs,),
}

/// Raw identity values shared by every subcommand.
#[derive(Debug, Args,)]
struct IdentityArgs
{
    /// Account or organization that owns the deck.
    #[arg(long = "owner", value_name = "OWNER", alias = "user")]
    owner: String,

    /// Repository holding the deck source.
    #[arg(long = "repo", value_name = "REPO")]
    repo: String,

    /// Branch to render; defaults to the default branch when omitted.
    #[arg(long = "branch", value_name = "BRANCH")]
    branch: Option<String,>,

    /// Slideshow theme; unknown names fall back to the default theme.
    #[arg(long = "theme", value_name = "THEME")]
    theme: Option<String,>,

    /// Speaker-notes flag, passed through unmodified.
    #[arg(long = "notes", value_name = "NOTES")]
    notes: Option<String,>,
}

impl IdentityArgs
{
    fn normalize(&self,) -> DeckParams
    {
        DeckParams::build_full(
            &self.owner,
            &self.repo,
            self.branch.as_deref(),
            self.theme.as_deref(),
            self.notes.as_deref(),
        )
    }
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `params` subcommand.
struct ParamsArgs
{
    #[command(flatten)]
    identity: IdentityArgs,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `links` subcommand.
struct LinksArgs
{
    #[command(flatten)]
    identity: IdentityArgs,

    /// Path to a JSON repository snapshot; omit to derive in degraded mode.
    #[arg(long = "snapshot", value_name = "PATH")]
    snapshot: Option<PathBuf,>,

    /// Path to a YAML server configuration enabling absolute links.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// Resolve the server configuration from the environment instead.
    #[arg(long = "absolute", action = ArgAction::SetTrue)]
    absolute: bool,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env(),)
        .with_writer(io::stderr,)
        .init();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from snapshot loading, configuration
/// resolution, and serialization.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();

    match cli.command {
        Command::Params(args,) => run_params(args,),
        Command::Links(args,) => run_links(args,),
    }
}

fn run_params(args: ParamsArgs,) -> Result<(), Error,>
{
    let params = args.identity.normalize();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_document(&mut handle, &params, args.pretty,)
}

fn run_links(args: LinksArgs,) -> Result<(), Error,>
{
    let pretty = args.pretty;
    let document = links_document(&args,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_document(&mut handle, &document, pretty,)
}

/// Derives the link document for the `links` subcommand.
///
/// The server configuration comes from `--config` when given, otherwise from
/// the environment when `--absolute` is set, otherwise absolute fields are
/// omitted.
///
/// # Errors
///
/// Propagates snapshot loading and configuration resolution failures.
fn links_document(args: &LinksArgs,) -> Result<LinkDocument, Error,>
{
    let params = args.identity.normalize();

    let snapshot = match args.snapshot.as_deref() {
        Some(path,) => Some(load_snapshot(path,)?,),
        None => None,
    };

    let config = match args.config.as_deref() {
        Some(path,) => Some(ServerConfig::load(path,)?,),
        None if args.absolute => Some(ServerConfig::from_env()?,),
        None => None,
    };

    let routes = QueryRoutes;
    let renderer = RepoRenderer::build(&params, snapshot.as_ref(), &routes,);

    Ok(renderer.link_document(config.as_ref(),),)
}

fn write_document<W: io::Write, T: Serialize,>(
    writer: &mut W,
    document: &T,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, document,)?;
    } else {
        serde_json::to_writer(writer, document,)?;
    }

    Ok((),)
}

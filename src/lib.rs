//! Parameter normalization and URL derivation for git-backed slide decks.
//!
//! The library turns raw, possibly-missing request values (owner, repo,
//! branch, theme, notes) into a canonical parameter set, then combines it
//! with optionally-fetched repository metadata to derive every relative and
//! absolute URL a presentation page needs. All derivations are pure,
//! synchronous string computations; the only fallible paths are the file and
//! environment loaders at the edges.

mod config;
mod error;
mod params;
mod renderer;
mod repo;
mod routes;
mod theme;

pub use config::{ENV_HOSTNAME, ENV_HTTPS, ServerConfig};
pub use error::{Error, io_error, snapshot_error};
pub use params::{DEFAULT_BRANCH, DeckParams, DeckRequest};
pub use renderer::{LinkDocument, PLACEHOLDER, RepoRenderer};
pub use repo::{RepoSnapshot, load_snapshot};
pub use routes::{QueryRoutes, RouteBuilder, absolute_url};
pub use theme::{DEFAULT_THEME, Theme, ThemeClass, is_dark_theme, is_light_theme, is_valid_theme};

// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Relative path construction for the named view endpoints.
//!
//! The mapping from parameters to path segments and query strings belongs to
//! the surrounding application's routing table, so it is consumed here as a
//! trait. [`QueryRoutes`] reproduces the original hosting service's URL
//! shape and serves as the default implementation.
//!
//! Identifier values are emitted verbatim; no percent-encoding is applied.
//! This matches the original service's wire format exactly.

use crate::theme::Theme;

/// Builds relative paths for the view endpoints of the presentation layer.
///
/// Implementations must be pure: the same inputs always yield the same path.
pub trait RouteBuilder {
    /// Relative URL of the landing (viewer) page.
    fn landing(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        theme: Theme,
        notes: Option<&str>
    ) -> String;

    /// Relative URL of the slideshow view.
    fn slideshow(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        theme: Theme,
        notes: Option<&str>
    ) -> String;

    /// Relative URL of the raw markdown source backing the deck.
    fn markdown(&self, owner: &str, repo: &str, branch: &str) -> String;

    /// Relative URL of the print-optimized view.
    fn print(&self, owner: &str, repo: &str, branch: &str, theme: Theme, notes: Option<&str>)
    -> String;

    /// Relative URL of the offline-export view.
    fn offline(&self, owner: &str, repo: &str, branch: &str, theme: Theme, notes: Option<&str>)
    -> String;
}

/// Default route shape: owner and repo as path segments, branch, theme, and
/// notes as `b`, `t`, and `n` query parameters for the landing page, and a
/// `/pitchme/{view}` prefix for the deck views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryRoutes;

const SLIDESHOW_PREFIX: &str = "/pitchme/slideshow";
const MARKDOWN_PREFIX: &str = "/pitchme/markdown";
const PRINT_PREFIX: &str = "/pitchme/print";
const OFFLINE_PREFIX: &str = "/pitchme/offline";

impl QueryRoutes {
    fn view_path(
        prefix: &str,
        owner: &str,
        repo: &str,
        branch: &str,
        theme: Option<Theme>,
        notes: Option<&str>
    ) -> String {
        let mut path = String::with_capacity(
            prefix.len() + owner.len() + repo.len() + branch.len() + 16
        );
        path.push_str(prefix);
        path.push('/');
        path.push_str(owner);
        path.push('/');
        path.push_str(repo);
        path.push('/');
        path.push_str(branch);
        if let Some(theme) = theme {
            path.push_str("?t=");
            path.push_str(theme.as_str());
            if let Some(notes) = notes {
                path.push_str("&n=");
                path.push_str(notes);
            }
        }
        path
    }
}

impl RouteBuilder for QueryRoutes {
    fn landing(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        theme: Theme,
        notes: Option<&str>
    ) -> String {
        let mut path =
            String::with_capacity(owner.len() + repo.len() + branch.len() + 16);
        path.push('/');
        path.push_str(owner);
        path.push('/');
        path.push_str(repo);
        path.push_str("?b=");
        path.push_str(branch);
        path.push_str("&t=");
        path.push_str(theme.as_str());
        if let Some(notes) = notes {
            path.push_str("&n=");
            path.push_str(notes);
        }
        path
    }

    fn slideshow(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        theme: Theme,
        notes: Option<&str>
    ) -> String {
        Self::view_path(SLIDESHOW_PREFIX, owner, repo, branch, Some(theme), notes)
    }

    fn markdown(&self, owner: &str, repo: &str, branch: &str) -> String {
        Self::view_path(MARKDOWN_PREFIX, owner, repo, branch, None, None)
    }

    fn print(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        theme: Theme,
        notes: Option<&str>
    ) -> String {
        Self::view_path(PRINT_PREFIX, owner, repo, branch, Some(theme), notes)
    }

    fn offline(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        theme: Theme,
        notes: Option<&str>
    ) -> String {
        Self::view_path(OFFLINE_PREFIX, owner, repo, branch, Some(theme), notes)
    }
}

/// Qualifies a relative path with scheme and hostname.
///
/// The scheme follows the encrypted-transport flag; the hostname may carry a
/// port. The relative path is expected to begin with a slash.
pub fn absolute_url(secure: bool, hostname: &str, relative: &str) -> String {
    let scheme = if secure { "https://" } else { "http://" };
    let mut url = String::with_capacity(scheme.len() + hostname.len() + relative.len());
    url.push_str(scheme);
    url.push_str(hostname);
    url.push_str(relative);
    url
}

#[cfg(test)]
mod tests {
    use super::{QueryRoutes, RouteBuilder, absolute_url};
    use crate::theme::Theme;

    #[test]
    fn landing_places_branch_theme_and_notes_in_query() {
        let routes = QueryRoutes;
        let url = routes.landing("acme", "deck", "feature-x", Theme::Moon, Some("true"));
        assert_eq!(url, "/acme/deck?b=feature-x&t=moon&n=true");
    }

    #[test]
    fn landing_omits_notes_when_absent() {
        let routes = QueryRoutes;
        let url = routes.landing("acme", "deck", "master", Theme::White, None);
        assert_eq!(url, "/acme/deck?b=master&t=white");
    }

    #[test]
    fn slideshow_uses_pitchme_prefix() {
        let routes = QueryRoutes;
        let url = routes.slideshow("acme", "deck", "master", Theme::Night, None);
        assert_eq!(url, "/pitchme/slideshow/acme/deck/master?t=night");
    }

    #[test]
    fn slideshow_appends_notes_after_theme() {
        let routes = QueryRoutes;
        let url = routes.slideshow("acme", "deck", "master", Theme::Night, Some("1"));
        assert_eq!(url, "/pitchme/slideshow/acme/deck/master?t=night&n=1");
    }

    #[test]
    fn markdown_carries_no_query_parameters() {
        let routes = QueryRoutes;
        let url = routes.markdown("acme", "deck", "feature-x");
        assert_eq!(url, "/pitchme/markdown/acme/deck/feature-x");
    }

    #[test]
    fn print_and_offline_share_the_view_shape() {
        let routes = QueryRoutes;
        assert_eq!(
            routes.print("acme", "deck", "master", Theme::Sky, None),
            "/pitchme/print/acme/deck/master?t=sky"
        );
        assert_eq!(
            routes.offline("acme", "deck", "master", Theme::Sky, None),
            "/pitchme/offline/acme/deck/master?t=sky"
        );
    }

    #[test]
    fn identifiers_are_emitted_verbatim() {
        let routes = QueryRoutes;
        let url = routes.landing("ac me", "deck", "feat/x", Theme::White, None);
        assert_eq!(url, "/ac me/deck?b=feat/x&t=white");
    }

    #[test]
    fn absolute_url_selects_scheme_from_transport_flag() {
        assert_eq!(
            absolute_url(true, "decks.example.com", "/acme/deck?b=master&t=white"),
            "https://decks.example.com/acme/deck?b=master&t=white"
        );
        assert_eq!(
            absolute_url(false, "localhost:9000", "/acme/deck?b=master&t=white"),
            "http://localhost:9000/acme/deck?b=master&t=white"
        );
    }

    #[test]
    fn route_builder_is_object_safe() {
        let routes: &dyn RouteBuilder = &QueryRoutes;
        let url = routes.markdown("acme", "deck", "master");
        assert_eq!(url, "/pitchme/markdown/acme/deck/master");
    }
}

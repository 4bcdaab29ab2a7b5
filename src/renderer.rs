// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! View-facing renderer combining normalized parameters with repository
//! metadata.
//!
//! A renderer is built once per page render from one [`DeckParams`], at most
//! one [`RepoSnapshot`], and a [`RouteBuilder`]. Metadata presence fixes one
//! of two permanent modes at construction: with a snapshot every derived URL
//! is real; without one, every metadata-dependent URL resolves to the `"#"`
//! placeholder so the view always receives a renderable value. Construction
//! never fails.

use std::fmt;

use serde::Serialize;

use crate::{
    config::ServerConfig,
    params::DeckParams,
    repo::RepoSnapshot,
    routes::{RouteBuilder, absolute_url},
    theme::Theme
};

/// Placeholder emitted for links that would require absent metadata.
pub const PLACEHOLDER: &str = "#";

/// Prefix of every absolute hosting-provider URL.
const GITHUB_WEB: &str = "https://github.com/";
const STARGAZERS_SEGMENT: &str = "stargazers";
const FORKS_SEGMENT: &str = "network";

const EMBED_OPEN: &str = "<iframe width='770' height='515' src='";
const EMBED_CLOSE: &str = "' frameborder='0' allowfullscreen></iframe>";
const BADGE_OPEN: &str = "[![GitPitch](https://gitpitch.com/assets/badge.svg)](";
const BADGE_CLOSE: &str = ")";

/// Renderer for one presentation page.
///
/// Borrows its inputs; nothing is copied or mutated. Any number of renderers
/// may be used in parallel since all operations are pure reads.
pub struct RepoRenderer<'a> {
    params: &'a DeckParams,
    routes: &'a dyn RouteBuilder,
    source: Source<'a>
}

/// Closed two-variant mode chosen by metadata presence at construction.
enum Source<'a> {
    /// A hosting-provider lookup succeeded; the snapshot's identity spelling
    /// is authoritative for derived URLs.
    Verified {
        snapshot: &'a RepoSnapshot,
        links:    DerivedLinks
    },
    /// No metadata is available; metadata-dependent URLs degrade to the
    /// placeholder.
    Unverified
}

/// URLs memoized at construction for the verified mode.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DerivedLinks {
    landing:   String,
    slideshow: String,
    markdown:  String,
    org_hub:   String,
    repo_hub:  String,
    star_hub:  String,
    fork_hub:  String
}

impl DerivedLinks {
    fn derive(params: &DeckParams, snapshot: &RepoSnapshot, routes: &dyn RouteBuilder) -> Self {
        let org_hub = {
            let mut hub = String::with_capacity(GITHUB_WEB.len() + snapshot.owner.len());
            hub.push_str(GITHUB_WEB);
            hub.push_str(snapshot.owner.as_str());
            hub
        };
        let repo_hub = {
            let mut hub = String::with_capacity(org_hub.len() + snapshot.name.len() + 1);
            hub.push_str(org_hub.as_str());
            hub.push('/');
            hub.push_str(snapshot.name.as_str());
            hub
        };
        let star_hub = format!("{repo_hub}/{STARGAZERS_SEGMENT}");
        let fork_hub = format!("{repo_hub}/{FORKS_SEGMENT}");

        Self {
            landing: routes.landing(
                &snapshot.owner,
                &snapshot.name,
                &params.branch,
                params.theme,
                params.notes.as_deref()
            ),
            slideshow: routes.slideshow(
                &snapshot.owner,
                &snapshot.name,
                &params.branch,
                params.theme,
                params.notes.as_deref()
            ),
            markdown: routes.markdown(&snapshot.owner, &snapshot.name, &params.branch),
            org_hub,
            repo_hub,
            star_hub,
            fork_hub
        }
    }
}

impl<'a> RepoRenderer<'a> {
    /// Builds a renderer from normalized parameters, optional metadata, and
    /// the application's route builder.
    ///
    /// The mode is fixed here and never transitions; derived URLs are
    /// memoized up front so accessors are allocation-free string reads.
    pub fn build(
        params: &'a DeckParams,
        snapshot: Option<&'a RepoSnapshot>,
        routes: &'a dyn RouteBuilder
    ) -> Self {
        let source = match snapshot {
            Some(snapshot) => Source::Verified {
                snapshot,
                links: DerivedLinks::derive(params, snapshot, routes)
            },
            None => Source::Unverified
        };

        Self {
            params,
            routes,
            source
        }
    }

    /// Returns the normalized parameter set the renderer was built from.
    pub fn params(&self) -> &DeckParams {
        self.params
    }

    /// Returns the repository snapshot, when one was supplied.
    pub fn snapshot(&self) -> Option<&RepoSnapshot> {
        match &self.source {
            Source::Verified {
                snapshot, ..
            } => Some(snapshot),
            Source::Unverified => None
        }
    }

    /// Returns true iff repository metadata was supplied at construction.
    pub fn is_valid(&self) -> bool {
        matches!(self.source, Source::Verified { .. })
    }

    /// Relative URL of the landing view, or the placeholder when metadata is
    /// absent.
    pub fn landing_url(&self) -> &str {
        match &self.source {
            Source::Verified {
                links, ..
            } => &links.landing,
            Source::Unverified => PLACEHOLDER
        }
    }

    /// Re-derives the landing URL for an alternate theme without touching
    /// renderer state.
    ///
    /// Uses the snapshot's authoritative identity in verified mode; resolves
    /// to the placeholder otherwise.
    pub fn landing_url_with_theme(&self, theme: Theme) -> String {
        match &self.source {
            Source::Verified {
                snapshot, ..
            } => self.routes.landing(
                &snapshot.owner,
                &snapshot.name,
                &self.params.branch,
                theme,
                self.params.notes.as_deref()
            ),
            Source::Unverified => PLACEHOLDER.to_owned()
        }
    }

    /// Relative URL of the slideshow view, or the placeholder.
    pub fn slideshow_url(&self) -> &str {
        match &self.source {
            Source::Verified {
                links, ..
            } => &links.slideshow,
            Source::Unverified => PLACEHOLDER
        }
    }

    /// Relative URL of the raw markdown source, or the placeholder.
    pub fn markdown_url(&self) -> &str {
        match &self.source {
            Source::Verified {
                links, ..
            } => &links.markdown,
            Source::Unverified => PLACEHOLDER
        }
    }

    /// `https://github.com/{owner}`, or the placeholder.
    pub fn org_hub(&self) -> &str {
        match &self.source {
            Source::Verified {
                links, ..
            } => &links.org_hub,
            Source::Unverified => PLACEHOLDER
        }
    }

    /// `https://github.com/{owner}/{repo}`, or the placeholder.
    pub fn repo_hub(&self) -> &str {
        match &self.source {
            Source::Verified {
                links, ..
            } => &links.repo_hub,
            Source::Unverified => PLACEHOLDER
        }
    }

    /// `https://github.com/{owner}/{repo}/stargazers`, or the placeholder.
    pub fn star_hub(&self) -> &str {
        match &self.source {
            Source::Verified {
                links, ..
            } => &links.star_hub,
            Source::Unverified => PLACEHOLDER
        }
    }

    /// `https://github.com/{owner}/{repo}/network`, or the placeholder.
    pub fn fork_hub(&self) -> &str {
        match &self.source {
            Source::Verified {
                links, ..
            } => &links.fork_hub,
            Source::Unverified => PLACEHOLDER
        }
    }

    /// Stargazer count from metadata; zero when metadata is absent.
    pub fn stargazers(&self) -> u64 {
        self.snapshot().map_or(0, |snapshot| snapshot.stargazers)
    }

    /// Fork count from metadata; zero when metadata is absent.
    pub fn forks(&self) -> u64 {
        self.snapshot().map_or(0, |snapshot| snapshot.forks)
    }

    /// Primary repository language, when metadata reports one.
    pub fn repo_lang(&self) -> Option<&str> {
        self.snapshot().and_then(|snapshot| snapshot.lang.as_deref())
    }

    /// Label shown under the repository name on the landing page.
    ///
    /// Invalid renderers show the branch. A deck on the default branch with a
    /// known primary language shows the language; every other combination
    /// shows the branch.
    pub fn display_lang_or_branch(&self) -> &str {
        if !self.is_valid() {
            return &self.params.branch;
        }
        if self.params.is_master()
            && let Some(lang) = self.repo_lang()
        {
            return lang;
        }
        &self.params.branch
    }

    /// Relative viewer URL built from the parameter identity.
    ///
    /// Unlike [`landing_url`](Self::landing_url) this uses the request's own
    /// owner/repo spelling, so it remains meaningful without metadata.
    pub fn page_link(&self) -> String {
        self.routes.landing(
            &self.params.owner,
            &self.params.repo,
            &self.params.branch,
            self.params.theme,
            self.params.notes.as_deref()
        )
    }

    /// Fully-qualified viewer URL using the deployment configuration.
    pub fn page_link_absolute(&self, config: &ServerConfig) -> String {
        absolute_url(config.https, &config.hostname, &self.page_link())
    }

    /// Relative viewer URL re-derived for an arbitrary theme override.
    pub fn page_link_with_theme(&self, theme: Theme) -> String {
        self.routes.landing(
            &self.params.owner,
            &self.params.repo,
            &self.params.branch,
            theme,
            self.params.notes.as_deref()
        )
    }

    /// Relative URL of the print-optimized view.
    pub fn print_link(&self) -> String {
        self.routes.print(
            &self.params.owner,
            &self.params.repo,
            &self.params.branch,
            self.params.theme,
            self.params.notes.as_deref()
        )
    }

    /// Relative URL of the offline-export view.
    pub fn offline_link(&self) -> String {
        self.routes.offline(
            &self.params.owner,
            &self.params.repo,
            &self.params.branch,
            self.params.theme,
            self.params.notes.as_deref()
        )
    }

    /// HTML iframe snippet embedding the deck, always wrapping the absolute
    /// viewer URL.
    pub fn page_embed(&self, config: &ServerConfig) -> String {
        let link = self.page_link_absolute(config);
        let mut embed =
            String::with_capacity(EMBED_OPEN.len() + link.len() + EMBED_CLOSE.len());
        embed.push_str(EMBED_OPEN);
        embed.push_str(link.as_str());
        embed.push_str(EMBED_CLOSE);
        embed
    }

    /// Markdown badge snippet linking to the deck, always wrapping the
    /// absolute viewer URL.
    pub fn page_badge(&self, config: &ServerConfig) -> String {
        let link = self.page_link_absolute(config);
        let mut badge =
            String::with_capacity(BADGE_OPEN.len() + link.len() + BADGE_CLOSE.len());
        badge.push_str(BADGE_OPEN);
        badge.push_str(link.as_str());
        badge.push_str(BADGE_CLOSE);
        badge
    }

    /// Owner from the parameter set.
    pub fn owner(&self) -> &str {
        &self.params.owner
    }

    /// Repository from the parameter set.
    pub fn repo(&self) -> &str {
        &self.params.repo
    }

    /// Branch from the parameter set.
    pub fn branch(&self) -> &str {
        &self.params.branch
    }

    /// Theme from the parameter set.
    pub fn theme(&self) -> Theme {
        self.params.theme
    }

    /// Notes flag from the parameter set.
    pub fn notes(&self) -> Option<&str> {
        self.params.notes.as_deref()
    }

    /// True iff the branch is the default branch.
    pub fn is_master(&self) -> bool {
        self.params.is_master()
    }

    /// Stylesheet filename for the parameter set's theme.
    pub fn theme_css(&self) -> String {
        self.params.theme_css()
    }

    /// Serializes every derived value into a document for automation and the
    /// CLI.
    ///
    /// Absolute link, embed, and badge fields are present only when a
    /// deployment configuration is supplied.
    pub fn link_document(&self, config: Option<&ServerConfig>) -> LinkDocument {
        LinkDocument {
            owner:                  self.params.owner.clone(),
            repo:                   self.params.repo.clone(),
            branch:                 self.params.branch.clone(),
            theme:                  self.params.theme,
            theme_css:              self.theme_css(),
            notes:                  self.params.notes.clone(),
            valid:                  self.is_valid(),
            landing_url:            self.landing_url().to_owned(),
            slideshow_url:          self.slideshow_url().to_owned(),
            markdown_url:           self.markdown_url().to_owned(),
            org_hub:                self.org_hub().to_owned(),
            repo_hub:               self.repo_hub().to_owned(),
            star_hub:               self.star_hub().to_owned(),
            fork_hub:               self.fork_hub().to_owned(),
            stargazers:             self.stargazers(),
            forks:                  self.forks(),
            lang:                   self.repo_lang().map(str::to_owned),
            display_lang_or_branch: self.display_lang_or_branch().to_owned(),
            page_link:              self.page_link(),
            print_link:             self.print_link(),
            offline_link:           self.offline_link(),
            page_link_absolute:     config.map(|config| self.page_link_absolute(config)),
            page_embed:             config.map(|config| self.page_embed(config)),
            page_badge:             config.map(|config| self.page_badge(config))
        }
    }
}

impl fmt::Display for RepoRenderer<'_> {
    /// The string form of a renderer is its landing URL.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.landing_url())
    }
}

impl fmt::Debug for RepoRenderer<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RepoRenderer")
            .field("params", &self.params)
            .field("valid", &self.is_valid())
            .finish_non_exhaustive()
    }
}

/// Flat, serializable view of every value a renderer derives.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LinkDocument {
    /// Owner from the parameter set.
    pub owner:                  String,
    /// Repository from the parameter set.
    pub repo:                   String,
    /// Normalized branch.
    pub branch:                 String,
    /// Normalized theme.
    pub theme:                  Theme,
    /// Stylesheet filename for the theme.
    pub theme_css:              String,
    /// Notes flag, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes:                  Option<String>,
    /// Whether repository metadata was available.
    pub valid:                  bool,
    /// Relative landing URL, or the placeholder.
    pub landing_url:            String,
    /// Relative slideshow URL, or the placeholder.
    pub slideshow_url:          String,
    /// Relative markdown URL, or the placeholder.
    pub markdown_url:           String,
    /// Absolute organization page URL, or the placeholder.
    pub org_hub:                String,
    /// Absolute repository page URL, or the placeholder.
    pub repo_hub:               String,
    /// Absolute stargazers page URL, or the placeholder.
    pub star_hub:               String,
    /// Absolute forks page URL, or the placeholder.
    pub fork_hub:               String,
    /// Stargazer count, zero without metadata.
    pub stargazers:             u64,
    /// Fork count, zero without metadata.
    pub forks:                  u64,
    /// Primary language, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang:                   Option<String>,
    /// Landing page label: language or branch.
    pub display_lang_or_branch: String,
    /// Relative viewer URL built from the parameter identity.
    pub page_link:              String,
    /// Relative print view URL.
    pub print_link:             String,
    /// Relative offline-export URL.
    pub offline_link:           String,
    /// Absolute viewer URL, when configuration was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_link_absolute:     Option<String>,
    /// Embed snippet, when configuration was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_embed:             Option<String>,
    /// Badge snippet, when configuration was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_badge:             Option<String>
}

//! Canonical presentation parameters derived from raw request input.
//!
//! Every other component keys off the (owner, repo, branch) identity triple
//! normalized here. Construction is total: absent or invalid optional fields
//! are defaulted rather than rejected, so a parameter set is always valid
//! once built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Branch assumed when a request does not name one.
pub const DEFAULT_BRANCH: &str = "master";
/// Account whose decks are served with a long-lived cache policy.
const LONG_LIVED_OWNER: &str = "gitpitch";

/// Raw request values as they arrive from the web layer, before
/// normalization.
///
/// Instances are typically created by deserializing query or form documents.
/// Aliases accept the short parameter names used on the wire.
#[derive(Debug, Deserialize, Serialize, Clone,)]
pub struct DeckRequest
{
    /// Hosting-provider account or organization that owns the deck.
    #[serde(alias = "user")]
    pub owner: String,

    /// Repository holding the deck source.
    #[serde(alias = "repository")]
    pub repo: String,

    /// Optional branch override.
    #[serde(default, alias = "b")]
    pub branch: Option<String,>,

    /// Optional theme override.
    #[serde(default, alias = "t")]
    pub theme: Option<String,>,

    /// Optional speaker-notes flag, passed through unmodified.
    #[serde(default, alias = "n")]
    pub notes: Option<String,>,
}

impl DeckRequest
{
    /// Normalizes the raw request into a canonical [`DeckParams`].
    ///
    /// # Examples
    ///
    /// ```
    /// use deckroute::DeckRequest;
    ///
    /// let request: DeckRequest =
    ///     serde_json::from_str(r#"{"user":"acme","repo":"deck","t":"moon"}"#,)
    ///         .expect("valid request",);
    /// let params = request.normalize();
    /// assert_eq!(params.branch, "master");
    /// assert_eq!(params.theme.as_str(), "moon");
    /// ```
    pub fn normalize(&self,) -> DeckParams
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

/// Canonical, always-valid parameter bundle for one presentation.
///
/// Immutable value object constructed once per incoming request. The branch
/// and theme fields are never empty after construction; equality is value
/// equality across all fields.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct DeckParams
{
    /// Hosting-provider account or organization that owns the deck.
    pub owner:  String,
    /// Repository holding the deck source.
    pub repo:   String,
    /// Branch to render, defaulted to [`DEFAULT_BRANCH`] when absent.
    pub branch: String,
    /// Slideshow theme, silently defaulted when absent or unknown.
    pub theme:  Theme,
    /// Optional speaker-notes flag, passed through unmodified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes:  Option<String,>,
}

impl DeckParams
{
    /// Builds a parameter set from the identity pair alone.
    ///
    /// Branch and theme take their defaults; notes are absent.
    pub fn build(owner: &str, repo: &str,) -> Self
    {
        Self::build_full(owner, repo, None, None, None,)
    }

    /// Builds a parameter set with an explicit branch.
    pub fn build_with_branch(owner: &str, repo: &str, branch: &str,) -> Self
    {
        Self::build_full(owner, repo, Some(branch,), None, None,)
    }

    /// Builds a parameter set with explicit branch and theme.
    pub fn build_with_theme(owner: &str, repo: &str, branch: &str, theme: &str,) -> Self
    {
        Self::build_full(owner, repo, Some(branch,), Some(theme,), None,)
    }

    /// Builds a parameter set from the full raw value tuple.
    ///
    /// All other constructors funnel into this single normalization rule set:
    /// owner and repo are taken as-is, an absent or empty branch becomes
    /// [`DEFAULT_BRANCH`], the theme resolves through [`Theme::parse`], and
    /// notes pass through untouched. Construction never fails and the same
    /// raw inputs always produce the same normalized fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckroute::DeckParams;
    ///
    /// let params = DeckParams::build_full("acme", "deck", None, Some("bogus",), None,);
    /// assert_eq!(params.branch, "master");
    /// assert_eq!(params.theme.as_str(), "white");
    /// ```
    pub fn build_full(
        owner: &str,
        repo: &str,
        branch: Option<&str,>,
        theme: Option<&str,>,
        notes: Option<&str,>,
    ) -> Self
    {
        let branch = branch.filter(|value| !value.is_empty(),).unwrap_or(DEFAULT_BRANCH,);

        Self {
            owner:  owner.to_owned(),
            repo:   repo.to_owned(),
            branch: branch.to_owned(),
            theme:  Theme::parse(theme,),
            notes:  notes.map(str::to_owned,),
        }
    }

    /// Returns true iff the branch is exactly [`DEFAULT_BRANCH`].
    ///
    /// Comparison is case-sensitive; `Master` is an ordinary branch name.
    pub fn is_master(&self,) -> bool
    {
        self.branch == DEFAULT_BRANCH
    }

    /// Returns true iff the owner is the privileged hosting account.
    ///
    /// The caching layer applies a longer lifetime policy to decks published
    /// under this account.
    pub fn is_long_lived(&self,) -> bool
    {
        self.owner == LONG_LIVED_OWNER
    }

    /// Returns true iff the normalized theme belongs to the dark class.
    pub fn dark_theme(&self,) -> bool
    {
        self.theme.class() == crate::theme::ThemeClass::Dark
    }

    /// Returns true iff the normalized theme belongs to the light class.
    pub fn light_theme(&self,) -> bool
    {
        self.theme.class() == crate::theme::ThemeClass::Light
    }

    /// Returns the stylesheet filename for the normalized theme.
    pub fn theme_css(&self,) -> String
    {
        self.theme.css()
    }

    /// Human-readable `/owner/repo/branch` path string.
    pub fn pretty(&self,) -> String
    {
        format!("/{}/{}/{}", self.owner, self.repo, self.branch)
    }

    /// `owner / repo` display string used in page headers.
    pub fn as_logo(&self,) -> String
    {
        format!("{} / {}", self.owner, self.repo)
    }
}

impl fmt::Display for DeckParams
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(formatter, "{} [ {} ]", self.pretty(), self.theme)
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{DEFAULT_BRANCH, DeckParams, DeckRequest};
    use crate::theme::{Theme, is_dark_theme, is_light_theme};

    proptest! {
        #[test]
        fn build_full_never_leaves_branch_or_theme_empty(
            branch in proptest::option::of("[a-zA-Z0-9/_-]{0,24}"),
            theme in proptest::option::of("[a-z]{0,12}"),
        ) {
            let params = DeckParams::build_full(
                "acme",
                "deck",
                branch.as_deref(),
                theme.as_deref(),
                None,
            );
            prop_assert!(!params.branch.is_empty());
            prop_assert!(Theme::from_name(params.theme.as_str()).is_some());
        }

        #[test]
        fn build_full_is_idempotent(
            owner in "[a-zA-Z0-9-]{1,16}",
            repo in "[a-zA-Z0-9-]{1,16}",
            branch in proptest::option::of("[a-zA-Z0-9/-]{0,16}"),
            theme in proptest::option::of("[a-z]{0,10}"),
            notes in proptest::option::of("[a-z]{0,6}"),
        ) {
            let first = DeckParams::build_full(
                &owner, &repo, branch.as_deref(), theme.as_deref(), notes.as_deref(),
            );
            let second = DeckParams::build_full(
                &owner, &repo, branch.as_deref(), theme.as_deref(), notes.as_deref(),
            );
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn build_defaults_branch_and_theme()
    {
        let params = DeckParams::build("acme", "deck",);
        assert_eq!(params.owner, "acme");
        assert_eq!(params.repo, "deck");
        assert_eq!(params.branch, DEFAULT_BRANCH);
        assert_eq!(params.theme, Theme::White);
        assert!(params.notes.is_none());
    }

    #[test]
    fn build_with_branch_keeps_explicit_branch()
    {
        let params = DeckParams::build_with_branch("acme", "deck", "feature-x",);
        assert_eq!(params.branch, "feature-x");
        assert_eq!(params.theme, Theme::White);
    }

    #[test]
    fn build_with_theme_resolves_known_theme()
    {
        let params = DeckParams::build_with_theme("acme", "deck", "master", "night",);
        assert_eq!(params.theme, Theme::Night);
    }

    #[test]
    fn empty_branch_falls_back_to_default()
    {
        let params = DeckParams::build_full("acme", "deck", Some("",), None, None,);
        assert_eq!(params.branch, DEFAULT_BRANCH);
    }

    #[test]
    fn invalid_theme_is_defaulted_not_rejected()
    {
        let params = DeckParams::build_full("acme", "deck", None, Some("neon",), None,);
        assert_eq!(params.theme, Theme::White);
        assert!(params.light_theme());
        assert!(!params.dark_theme());

        // The raw pre-default string classifies as neither dark nor light.
        assert!(!is_dark_theme("neon"));
        assert!(!is_light_theme("neon"));
    }

    #[test]
    fn notes_pass_through_unmodified()
    {
        let params = DeckParams::build_full("acme", "deck", None, None, Some("  true  ",),);
        assert_eq!(params.notes.as_deref(), Some("  true  "));
    }

    #[test]
    fn is_master_requires_exact_match()
    {
        assert!(DeckParams::build("acme", "deck",).is_master());
        assert!(!DeckParams::build_with_branch("acme", "deck", "Master",).is_master());
        assert!(!DeckParams::build_with_branch("acme", "deck", "main",).is_master());
    }

    #[test]
    fn is_long_lived_matches_privileged_owner_only()
    {
        assert!(DeckParams::build("gitpitch", "kitchen-sink",).is_long_lived());
        assert!(!DeckParams::build("acme", "kitchen-sink",).is_long_lived());
        assert!(!DeckParams::build("GitPitch", "kitchen-sink",).is_long_lived());
    }

    #[test]
    fn dark_theme_reflects_defaulted_class()
    {
        let dark = DeckParams::build_with_theme("acme", "deck", "master", "moon",);
        assert!(dark.dark_theme());
        assert!(!dark.light_theme());
    }

    #[test]
    fn pretty_joins_identity_triple()
    {
        let params = DeckParams::build_with_branch("acme", "deck", "feature-x",);
        assert_eq!(params.pretty(), "/acme/deck/feature-x");
    }

    #[test]
    fn display_appends_theme_marker()
    {
        let params = DeckParams::build_with_theme("acme", "deck", "master", "sky",);
        assert_eq!(params.to_string(), "/acme/deck/master [ sky ]");
    }

    #[test]
    fn as_logo_joins_owner_and_repo()
    {
        let params = DeckParams::build("acme", "deck",);
        assert_eq!(params.as_logo(), "acme / deck");
    }

    #[test]
    fn theme_css_reflects_normalized_theme()
    {
        let params = DeckParams::build_with_theme("acme", "deck", "master", "night",);
        assert_eq!(params.theme_css(), "night.css");

        let defaulted = DeckParams::build_full("acme", "deck", None, Some("bogus",), None,);
        assert_eq!(defaulted.theme_css(), "white.css");
    }

    #[test]
    fn request_aliases_accept_wire_names()
    {
        let request: DeckRequest =
            serde_json::from_str(r#"{"user":"acme","repository":"deck","b":"dev","t":"moon","n":"1"}"#,)
                .expect("request should deserialize",);
        let params = request.normalize();
        assert_eq!(params.owner, "acme");
        assert_eq!(params.repo, "deck");
        assert_eq!(params.branch, "dev");
        assert_eq!(params.theme, Theme::Moon);
        assert_eq!(params.notes.as_deref(), Some("1"));
    }

    #[test]
    fn request_normalize_matches_build_full()
    {
        let request = DeckRequest {
            owner:  "acme".to_owned(),
            repo:   "deck".to_owned(),
            branch: None,
            theme:  Some("sky".to_owned(),),
            notes:  None,
        };
        let expected = DeckParams::build_full("acme", "deck", None, Some("sky",), None,);
        assert_eq!(request.normalize(), expected);
    }

    #[test]
    fn serialized_params_omit_absent_notes()
    {
        let params = DeckParams::build("acme", "deck",);
        let encoded = serde_json::to_string(&params,).expect("params should serialize",);
        assert!(!encoded.contains("notes"));
        assert!(encoded.contains("\"theme\":\"white\""));
    }
}

// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Slideshow theme enumeration and classification.
//!
//! Themes form a closed set partitioned into dark and light display classes.
//! Anything outside the set is silently replaced by the default theme; there
//! is no invalid-theme error path visible to callers, so a stale or mistyped
//! query parameter degrades to the default presentation instead of failing a
//! page render.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Theme applied when a request omits one or names an unknown theme.
pub const DEFAULT_THEME: Theme = Theme::White;

/// Stylesheet suffix appended to theme names.
const DOT_CSS: &str = ".css";

/// Closed set of slideshow themes shipped with the presentation layer.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default light theme.
    White,
    /// Warm light theme.
    Beige,
    /// High-contrast dark theme.
    Black,
    /// Muted dark theme.
    Moon,
    /// Deep blue dark theme.
    Night,
    /// Pale blue light theme.
    Sky
}

/// Display classes partitioning the theme set.
///
/// Every theme belongs to exactly one class; the view layer uses the class to
/// pick contrasting chrome around the slideshow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemeClass {
    /// Dark backgrounds: black, moon, night.
    Dark,
    /// Light backgrounds: beige, sky, white.
    Light
}

impl Theme {
    /// Every theme in the closed set, in stable display order.
    pub const ALL: [Theme; 6] = [
        Theme::White,
        Theme::Beige,
        Theme::Black,
        Theme::Moon,
        Theme::Night,
        Theme::Sky
    ];

    /// Resolves a raw, possibly-missing theme name to a member of the set.
    ///
    /// Defaulting is total and silent: `None`, the empty string, and any name
    /// outside the enumeration all resolve to [`DEFAULT_THEME`]. Matching is
    /// exact and case-sensitive, mirroring how the hosting service compares
    /// query parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use deckroute::Theme;
    ///
    /// assert_eq!(Theme::parse(Some("moon")), Theme::Moon);
    /// assert_eq!(Theme::parse(Some("neon")), Theme::White);
    /// assert_eq!(Theme::parse(None), Theme::White);
    /// ```
    pub fn parse(raw: Option<&str>) -> Theme {
        raw.and_then(Theme::from_name).unwrap_or(DEFAULT_THEME)
    }

    /// Looks up a theme by its exact lowercase name.
    ///
    /// Returns `None` for anything outside the closed set; callers that want
    /// the defaulting behavior should use [`Theme::parse`] instead.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "white" => Some(Theme::White),
            "beige" => Some(Theme::Beige),
            "black" => Some(Theme::Black),
            "moon" => Some(Theme::Moon),
            "night" => Some(Theme::Night),
            "sky" => Some(Theme::Sky),
            _ => None
        }
    }

    /// Returns the lowercase theme name used in URLs and stylesheets.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::White => "white",
            Theme::Beige => "beige",
            Theme::Black => "black",
            Theme::Moon => "moon",
            Theme::Night => "night",
            Theme::Sky => "sky"
        }
    }

    /// Returns the display class the theme belongs to.
    pub fn class(self) -> ThemeClass {
        match self {
            Theme::Black | Theme::Moon | Theme::Night => ThemeClass::Dark,
            Theme::Beige | Theme::Sky | Theme::White => ThemeClass::Light
        }
    }

    /// Returns the stylesheet filename for the theme, e.g. `white.css`.
    pub fn css(self) -> String {
        let name = self.as_str();
        let mut css = String::with_capacity(name.len() + DOT_CSS.len());
        css.push_str(name);
        css.push_str(DOT_CSS);
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Theme {
    /// Deserializes a theme name, applying the same silent defaulting as
    /// [`Theme::parse`] so that documents carrying stale theme names keep
    /// decoding.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Theme::parse(Some(raw.as_str())))
    }
}

/// Returns true iff the raw name is a member of the closed theme set.
///
/// Unlike [`Theme::parse`], no defaulting is applied; unknown names report
/// `false`.
pub fn is_valid_theme(name: &str) -> bool {
    Theme::from_name(name).is_some()
}

/// Returns true iff the raw name maps to a dark theme.
///
/// Names outside the closed set report `false`, including names that
/// [`Theme::parse`] would silently default.
pub fn is_dark_theme(name: &str) -> bool {
    Theme::from_name(name).is_some_and(|theme| theme.class() == ThemeClass::Dark)
}

/// Returns true iff the raw name maps to a light theme.
///
/// Names outside the closed set report `false`, including names that
/// [`Theme::parse`] would silently default.
pub fn is_light_theme(name: &str) -> bool {
    Theme::from_name(name).is_some_and(|theme| theme.class() == ThemeClass::Light)
}

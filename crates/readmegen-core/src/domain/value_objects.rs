//! Domain value objects: Field, Licence, Modality.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Field ────────────────────────────────────────────────────────────────────

/// Key of a single answer in an [`AnswerSet`](crate::domain::AnswerSet).
///
/// Declaration order is the order the questions are asked in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Github,
    Title,
    Description,
    Installation,
    Usage,
    Tests,
    Collaborators,
    Tech,
    Licence,
    Contribute,
    #[serde(rename = "targetDir")]
    TargetDir,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Self::Name,
        Self::Email,
        Self::Github,
        Self::Title,
        Self::Description,
        Self::Installation,
        Self::Usage,
        Self::Tests,
        Self::Collaborators,
        Self::Tech,
        Self::Licence,
        Self::Contribute,
        Self::TargetDir,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Github => "github",
            Self::Title => "title",
            Self::Description => "description",
            Self::Installation => "installation",
            Self::Usage => "usage",
            Self::Tests => "tests",
            Self::Collaborators => "collaborators",
            Self::Tech => "tech",
            Self::Licence => "licence",
            Self::Contribute => "contribute",
            Self::TargetDir => "targetDir",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

// ── Licence ──────────────────────────────────────────────────────────────────

/// A licence the generated README can declare.
///
/// `Licence::None` is the "No Licence" sentinel: it renders no licence
/// section and no badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Licence {
    Apache2,
    Gpl3,
    Mit,
    Bsd2,
    Bsd3,
    Mpl2,
    None,
}

impl Licence {
    /// Choice order presented to the user.
    pub const ALL: [Licence; 7] = [
        Self::Apache2,
        Self::Gpl3,
        Self::Mit,
        Self::Bsd2,
        Self::Bsd3,
        Self::Mpl2,
        Self::None,
    ];

    /// Display names, index-aligned with [`Licence::ALL`].
    pub const NAMES: [&'static str; 7] = [
        "Apache Licence 2.0",
        "GNU GPL 3.0",
        "MIT Licence",
        "BSD 2-Clause 'simplified' Licence",
        "BSD 3-Clause 'new' Licence",
        "Mozilla Public Licence 2.0",
        "No Licence",
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apache2 => Self::NAMES[0],
            Self::Gpl3 => Self::NAMES[1],
            Self::Mit => Self::NAMES[2],
            Self::Bsd2 => Self::NAMES[3],
            Self::Bsd3 => Self::NAMES[4],
            Self::Mpl2 => Self::NAMES[5],
            Self::None => Self::NAMES[6],
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// SPDX identifier, `None` for the sentinel.
    pub const fn spdx(&self) -> Option<&'static str> {
        match self {
            Self::Apache2 => Some("Apache-2.0"),
            Self::Gpl3 => Some("GPL-3.0"),
            Self::Mit => Some("MIT"),
            Self::Bsd2 => Some("BSD-2-Clause"),
            Self::Bsd3 => Some("BSD-3-Clause"),
            Self::Mpl2 => Some("MPL-2.0"),
            Self::None => None,
        }
    }

    /// Canonical licence page.
    pub const fn link(&self) -> Option<&'static str> {
        match self {
            Self::Apache2 => Some("https://opensource.org/licenses/Apache-2.0"),
            Self::Gpl3 => Some("https://www.gnu.org/licenses/gpl-3.0"),
            Self::Mit => Some("https://opensource.org/licenses/MIT"),
            Self::Bsd2 => Some("https://opensource.org/licenses/BSD-2-Clause"),
            Self::Bsd3 => Some("https://opensource.org/licenses/BSD-3-Clause"),
            Self::Mpl2 => Some("https://opensource.org/licenses/MPL-2.0"),
            Self::None => None,
        }
    }

    /// shields.io badge image URL.
    pub const fn badge_image(&self) -> Option<&'static str> {
        match self {
            Self::Apache2 => Some("https://img.shields.io/badge/License-Apache_2.0-blue.svg"),
            Self::Gpl3 => Some("https://img.shields.io/badge/License-GPLv3-blue.svg"),
            Self::Mit => Some("https://img.shields.io/badge/License-MIT-yellow.svg"),
            Self::Bsd2 => Some("https://img.shields.io/badge/License-BSD_2--Clause-orange.svg"),
            Self::Bsd3 => Some("https://img.shields.io/badge/License-BSD_3--Clause-blue.svg"),
            Self::Mpl2 => Some("https://img.shields.io/badge/License-MPL_2.0-brightgreen.svg"),
            Self::None => None,
        }
    }

    /// Markdown badge linking to the licence page.
    pub fn badge(&self) -> Option<String> {
        let (image, link) = (self.badge_image()?, self.link()?);
        Some(format!("[![License: {}]({})]({})", self.as_str(), image, link))
    }
}

impl fmt::Display for Licence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Licence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|licence| licence.as_str() == s.trim())
            .ok_or_else(|| DomainError::UnknownLicence(s.to_string()))
    }
}

// ── Modality ─────────────────────────────────────────────────────────────────

/// How a question collects its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    /// Single line of text.
    Line,
    /// Free text edited in the user's editor.
    Multiline,
    /// One of an ordered list of choices.
    Choice(&'static [&'static str]),
}

impl Modality {
    /// Whether a rejected answer can be handed back as initial text.
    pub const fn preserves_input(&self) -> bool {
        matches!(self, Self::Line | Self::Multiline)
    }

    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::Choice(choices) => choices,
            _ => &[],
        }
    }
}

//! The five SOLID principles.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::DomainError;

/// One of the five SOLID design principles, in their conventional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Principle {
    SingleResponsibility,
    OpenClosed,
    LiskovSubstitution,
    InterfaceSegregation,
    DependencyInversion,
}

impl Principle {
    /// All principles in SOLID order.
    pub const ALL: [Self; 5] = [
        Self::SingleResponsibility,
        Self::OpenClosed,
        Self::LiskovSubstitution,
        Self::InterfaceSegregation,
        Self::DependencyInversion,
    ];

    /// Short key used on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SingleResponsibility => "srp",
            Self::OpenClosed => "ocp",
            Self::LiskovSubstitution => "lsp",
            Self::InterfaceSegregation => "isp",
            Self::DependencyInversion => "dip",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SingleResponsibility => "Single Responsibility Principle",
            Self::OpenClosed => "Open/Closed Principle",
            Self::LiskovSubstitution => "Liskov Substitution Principle",
            Self::InterfaceSegregation => "Interface Segregation Principle",
            Self::DependencyInversion => "Dependency Inversion Principle",
        }
    }

    /// One-line statement of the principle.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::SingleResponsibility => "A type should have one reason to change.",
            Self::OpenClosed => "Open for extension, closed for modification.",
            Self::LiskovSubstitution => {
                "Implementations must be substitutable for their abstraction."
            }
            Self::InterfaceSegregation => {
                "No client should be forced to depend on methods it does not use."
            }
            Self::DependencyInversion => "Depend on abstractions, not on concretions.",
        }
    }

    fn full_name(self) -> &'static str {
        match self {
            Self::SingleResponsibility => "single responsibility",
            Self::OpenClosed => "open closed",
            Self::LiskovSubstitution => "liskov substitution",
            Self::InterfaceSegregation => "interface segregation",
            Self::DependencyInversion => "dependency inversion",
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .replace(['-', '_', '/'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for Principle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        let without_suffix = normalized
            .strip_suffix(" principle")
            .unwrap_or(&normalized);

        Self::ALL
            .into_iter()
            .find(|p| p.key() == without_suffix || p.full_name() == without_suffix)
            .ok_or_else(|| DomainError::UnknownPrinciple(s.to_string()))
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

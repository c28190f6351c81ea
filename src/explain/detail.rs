//! Detail levels and prompt selection
//!
//! Pure mapping from the requested verbosity to a fixed system prompt.
//! Unrecognized values never fail; they fall back to the default level.

use std::fmt;

use clap::ValueEnum;

/// Verbosity of the requested explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DetailLevel {
    /// Short, high-level summary
    Brief,
    /// Purpose and functionality
    #[default]
    Medium,
    /// Purpose, functionality, edge cases, and improvement suggestions
    Detailed,
}

impl DetailLevel {
    /// Parse a detail level leniently; anything unrecognized is the default
    pub fn parse(value: &str) -> Self {
        match value {
            "brief" => DetailLevel::Brief,
            "detailed" => DetailLevel::Detailed,
            _ => DetailLevel::Medium,
        }
    }

    /// The wire name of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailLevel::Brief => "brief",
            DetailLevel::Medium => "medium",
            DetailLevel::Detailed => "detailed",
        }
    }

    /// System prompt instructing the model for this level
    pub fn system_prompt(&self) -> &'static str {
        match self {
            DetailLevel::Brief => {
                "You are a coding assistant. Provide a brief, concise explanation \
                 of the following code."
            }
            DetailLevel::Detailed => {
                "You are a coding assistant. Provide a detailed explanation of the \
                 following code, including its purpose, functionality, potential \
                 edge cases, and possible improvements."
            }
            DetailLevel::Medium => {
                "You are a coding assistant. Please explain the following code in \
                 detail, including its purpose and functionality."
            }
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_levels() {
        assert_eq!(DetailLevel::parse("brief"), DetailLevel::Brief);
        assert_eq!(DetailLevel::parse("medium"), DetailLevel::Medium);
        assert_eq!(DetailLevel::parse("detailed"), DetailLevel::Detailed);
    }

    #[test]
    fn test_parse_unrecognized_falls_back_to_medium() {
        assert_eq!(DetailLevel::parse("verbose"), DetailLevel::Medium);
        assert_eq!(DetailLevel::parse(""), DetailLevel::Medium);
        assert_eq!(DetailLevel::parse("BRIEF"), DetailLevel::Medium);
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(DetailLevel::default(), DetailLevel::Medium);
    }

    #[test]
    fn test_prompts_are_distinct() {
        assert_ne!(
            DetailLevel::Brief.system_prompt(),
            DetailLevel::Medium.system_prompt()
        );
        assert_ne!(
            DetailLevel::Medium.system_prompt(),
            DetailLevel::Detailed.system_prompt()
        );
    }

    #[test]
    fn test_prompt_wording() {
        assert!(DetailLevel::Brief
            .system_prompt()
            .contains("brief, concise explanation"));
        assert!(DetailLevel::Detailed
            .system_prompt()
            .contains("possible improvements"));
        assert!(DetailLevel::Medium
            .system_prompt()
            .contains("purpose and functionality"));
    }
}

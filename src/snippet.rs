//! "Current state as code" rendering
//!
//! Purely cosmetic: the snippets mirror how the collection would be built in
//! the chosen language, they are not meant to be parsed back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language for code snippets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Cpp,
    Java,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::Cpp => Language::Java,
            Language::Java => Language::Cpp,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Cpp => f.write_str("C++"),
            Language::Java => f.write_str("Java"),
        }
    }
}

/// Join values with `sep`
pub fn join_values(values: &[i64], sep: &str) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_language() {
        assert_eq!(Language::Cpp.toggle(), Language::Java);
        assert_eq!(Language::Java.toggle(), Language::Cpp);
    }

    #[test]
    fn join_handles_empty() {
        assert_eq!(join_values(&[], ", "), "");
        assert_eq!(join_values(&[1, 2], " -> "), "1 -> 2");
    }
}

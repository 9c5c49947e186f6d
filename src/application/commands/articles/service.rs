// src/application/commands/articles/service.rs
use std::{fmt, str::FromStr, sync::Arc};

use crate::domain::article::ArticleRepository;

/// How an update combines submitted fields with the stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// The stored record becomes exactly the submitted fields.
    #[default]
    Replace,
    /// Empty submitted fields keep their stored values.
    Merge,
}

impl FromStr for UpdateMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "merge" => Ok(Self::Merge),
            other => Err(format!("unknown update mode `{other}`")),
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => f.write_str("replace"),
            Self::Merge => f.write_str("merge"),
        }
    }
}

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) update_mode: UpdateMode,
}

impl ArticleCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>, update_mode: UpdateMode) -> Self {
        Self { repo, update_mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_mode_parses_case_insensitively() {
        assert_eq!("Merge".parse::<UpdateMode>(), Ok(UpdateMode::Merge));
        assert_eq!(" replace ".parse::<UpdateMode>(), Ok(UpdateMode::Replace));
        assert!("patch".parse::<UpdateMode>().is_err());
        assert_eq!(UpdateMode::default().to_string(), "replace");
    }
}

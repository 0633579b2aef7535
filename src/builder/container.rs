//! Builder for constructing containers.

use crate::builder::error::BuildError;
use crate::container::Container;
use crate::core::{ApplyHistory, DEFAULT_HISTORY_LIMIT};

/// Builder for configuring containers with a fluent API.
///
/// Only metadata is configurable: every container still starts from an
/// empty snapshot.
///
/// # Example
///
/// ```rust
/// use sprout::builder::ContainerBuilder;
///
/// let phil = ContainerBuilder::new()
///     .label("Phil")
///     .history_limit(16)
///     .build()
///     .unwrap();
///
/// assert_eq!(phil.label(), Some("Phil"));
/// ```
#[derive(Clone, Debug)]
pub struct ContainerBuilder {
    label: Option<String>,
    history_limit: Option<usize>,
}

impl ContainerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            label: None,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Set a human-readable label used in logs.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Keep at most `limit` apply records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every apply record.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Build the container.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Container, BuildError> {
        if self.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(BuildError::EmptyLabel);
        }

        let history = match self.history_limit {
            Some(0) => return Err(BuildError::ZeroHistoryLimit),
            Some(limit) => ApplyHistory::bounded(limit),
            None => ApplyHistory::new(),
        };

        let container = Container::with_parts(self.label, history);
        tracing::debug!(
            container = %container.id(),
            label = container.label().unwrap_or_default(),
            "Built container"
        );
        Ok(container)
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

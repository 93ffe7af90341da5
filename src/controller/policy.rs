use serde::{Deserialize, Serialize};

/// How a fetched page is merged into the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// First page: the page becomes the whole feed.
    Replace,
    /// Following pages: the page is appended after the existing items.
    Append,
}

/// What a load does to the feed when the fetch fails at the transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureAction {
    /// Log it and stop loading; no notice is shown.
    LogOnly,
    /// Show the "request failed" notice and keep the items.
    ReportError,
    /// Drop all items and stop loading.
    ClearItems,
}

/// Per-path transport failure handling.
///
/// The default keeps the historical behavior of the feed screen: a failed
/// first page is only logged, a failed next page empties the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailurePolicy {
    pub first_page: FailureAction,
    pub next_page: FailureAction,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            first_page: FailureAction::LogOnly,
            next_page: FailureAction::ClearItems,
        }
    }
}

impl FailurePolicy {
    /// Both paths report the failure and keep what is already loaded.
    pub fn uniform() -> Self {
        Self {
            first_page: FailureAction::ReportError,
            next_page: FailureAction::ReportError,
        }
    }

    pub fn action_for(&self, merge: MergeStrategy) -> FailureAction {
        match merge {
            MergeStrategy::Replace => self.first_page,
            MergeStrategy::Append => self.next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_asymmetric() {
        let policy = FailurePolicy::default();
        assert_eq!(policy.action_for(MergeStrategy::Replace), FailureAction::LogOnly);
        assert_eq!(policy.action_for(MergeStrategy::Append), FailureAction::ClearItems);
    }

    #[test]
    fn test_uniform_policy() {
        let policy = FailurePolicy::uniform();
        assert_eq!(policy.action_for(MergeStrategy::Replace), FailureAction::ReportError);
        assert_eq!(policy.action_for(MergeStrategy::Append), FailureAction::ReportError);
    }

    #[test]
    fn test_action_names() {
        let action: FailureAction = serde_json::from_str(r#""report_error""#).unwrap();
        assert_eq!(action, FailureAction::ReportError);
    }
}

//! The read-only issue collection for one migration run.

use std::collections::HashMap;

use super::{MigrationIssue, MigrationIssueId};

/// The complete, read-only collection of migration issues for one run.
///
/// Built once from the fetched issues and never mutated afterwards. Keeps
/// both an id-keyed map (parent lookups) and the input-order id list, since
/// issues are processed in the order the source produced them. On a
/// duplicate id the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    by_id: HashMap<MigrationIssueId, MigrationIssue>,
    order: Vec<MigrationIssueId>,
}

impl WorkingSet {
    /// Builds a working set from the fetched issues.
    pub fn from_issues(issues: Vec<MigrationIssue>) -> Self {
        let mut by_id = HashMap::with_capacity(issues.len());
        let mut order = Vec::with_capacity(issues.len());

        for issue in issues {
            if by_id.contains_key(&issue.id) {
                continue;
            }
            order.push(issue.id.clone());
            by_id.insert(issue.id.clone(), issue);
        }

        Self { by_id, order }
    }

    /// Looks up an issue by id.
    pub fn get(&self, id: &MigrationIssueId) -> Option<&MigrationIssue> {
        self.by_id.get(id)
    }

    /// Iterates issue ids in input order.
    pub fn ids(&self) -> impl Iterator<Item = &MigrationIssueId> {
        self.order.iter()
    }

    /// Number of distinct issues in the set.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when the set holds no issues.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

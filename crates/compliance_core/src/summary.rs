use shared::domain::ComplianceStatus;

use crate::store::WorkingTree;

/// Category counts by answer. The four fields always add up to the number of
/// categories in the tree they were computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub met: usize,
    pub not_met: usize,
    pub not_applicable: usize,
    pub pending: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.met + self.not_met + self.not_applicable + self.pending
    }
}

pub fn summarize(tree: &WorkingTree) -> Summary {
    tree.categories()
        .fold(Summary::default(), |mut summary, category| {
            match category.status {
                ComplianceStatus::Met => summary.met += 1,
                ComplianceStatus::NotMet => summary.not_met += 1,
                ComplianceStatus::NotApplicable => summary.not_applicable += 1,
                ComplianceStatus::Pending | ComplianceStatus::Unrecognized(_) => {
                    summary.pending += 1
                }
            }
            summary
        })
}

#[cfg(test)]
#[path = "tests/summary_tests.rs"]
mod tests;

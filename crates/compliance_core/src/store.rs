//! Working tree of compliance answers and the store that owns it.

use std::collections::HashMap;

use shared::domain::{ComplianceCategory, ComplianceFunction, FieldUpdate, Framework};

/// Framework catalog augmented with the user's status and notes per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTree {
    functions: Vec<ComplianceFunction>,
}

impl WorkingTree {
    /// Maps every function and category of `framework` into working form with
    /// a pending status and empty notes.
    pub fn initialize(framework: &Framework) -> Self {
        Self {
            functions: framework
                .functions
                .iter()
                .map(ComplianceFunction::from)
                .collect(),
        }
    }

    pub fn functions(&self) -> &[ComplianceFunction] {
        &self.functions
    }

    pub fn categories(&self) -> impl Iterator<Item = &ComplianceCategory> {
        self.functions.iter().flat_map(|f| f.categories.iter())
    }

    pub fn category_count(&self) -> usize {
        self.functions.iter().map(|f| f.categories.len()).sum()
    }

    /// Linear lookup; [`ComplianceStore::category`] answers from its index.
    pub fn category(&self, category_id: &str) -> Option<&ComplianceCategory> {
        self.categories().find(|c| c.id.as_str() == category_id)
    }

    #[cfg(test)]
    pub fn category_ids(&self) -> Vec<shared::domain::CategoryId> {
        self.categories().map(|c| c.id.clone()).collect()
    }

    /// Returns a new tree where only the category matching `category_id` has
    /// the updated field. An unknown id yields a tree equal to `self`.
    pub fn update_field(&self, category_id: &str, update: FieldUpdate) -> WorkingTree {
        let functions = self
            .functions
            .iter()
            .map(|function| ComplianceFunction {
                categories: function
                    .categories
                    .iter()
                    .map(|category| {
                        if category.id.as_str() == category_id {
                            with_update(category, update.clone())
                        } else {
                            category.clone()
                        }
                    })
                    .collect(),
                ..function.clone()
            })
            .collect();
        WorkingTree { functions }
    }
}

fn with_update(category: &ComplianceCategory, update: FieldUpdate) -> ComplianceCategory {
    let mut next = category.clone();
    apply(&mut next, update);
    next
}

fn apply(category: &mut ComplianceCategory, update: FieldUpdate) {
    match update {
        FieldUpdate::Status(status) => category.status = status,
        FieldUpdate::Notes(notes) => category.notes = notes,
    }
}

/// Sole owner of the working tree. Views borrow the tree and route edits back
/// through [`ComplianceStore::update_field`].
#[derive(Debug, Default)]
pub struct ComplianceStore {
    tree: WorkingTree,
    // category id -> (function index, category index), built once per initialize
    index: HashMap<String, (usize, usize)>,
}

impl ComplianceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working tree with a fresh one derived from `framework`.
    /// Any in-progress edits are discarded.
    pub fn initialize(&mut self, framework: &Framework) -> &WorkingTree {
        let tree = WorkingTree::initialize(framework);
        self.index = tree
            .functions
            .iter()
            .enumerate()
            .flat_map(|(fi, function)| {
                function
                    .categories
                    .iter()
                    .enumerate()
                    .map(move |(ci, category)| (category.id.0.clone(), (fi, ci)))
            })
            .collect();
        self.tree = tree;
        tracing::debug!(
            categories = self.index.len(),
            "initialized compliance working tree"
        );
        &self.tree
    }

    pub fn tree(&self) -> &WorkingTree {
        &self.tree
    }

    pub fn category(&self, category_id: &str) -> Option<&ComplianceCategory> {
        let &(fi, ci) = self.index.get(category_id)?;
        self.tree.functions.get(fi)?.categories.get(ci)
    }

    /// Applies `update` to the matching category. Returns `false` and leaves
    /// the tree untouched when no category has `category_id`.
    pub fn update_field(&mut self, category_id: &str, update: FieldUpdate) -> bool {
        let Some(&(fi, ci)) = self.index.get(category_id) else {
            tracing::warn!(category_id, "ignoring update for unknown category");
            return false;
        };
        let field = update.field_name();
        let mut next = self.tree.clone();
        apply(&mut next.functions[fi].categories[ci], update);
        self.tree = next;
        tracing::debug!(category_id, field, "applied compliance update");
        true
    }

    /// String-keyed test entry point: `field` is `"status"` or `"notes"` and
    /// `value` is stored verbatim. Unknown fields change nothing.
    #[cfg(test)]
    pub fn update_raw(&mut self, category_id: &str, field: &str, value: &str) -> bool {
        match FieldUpdate::from_raw(field, value) {
            Some(update) => self.update_field(category_id, update),
            None => {
                tracing::warn!(category_id, field, "ignoring update for unknown field");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;

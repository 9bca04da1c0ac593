//! Query facade over a fetched personality profile.

use serde::Serialize;
use serde_json::Value;

use crate::identifier::id_matches;
use crate::node::{self, InsightNode};
use crate::profile::ProfileSource;
use crate::strength::AnalysisStrength;

/// Read-only accessor over any [`ProfileSource`].
///
/// Nothing is cached: every call re-reads the source, and tree operations
/// re-normalize from the raw `tree` field each time.
#[derive(Debug, Clone)]
pub struct ResultsAccessor<S> {
    source: S,
}

/// Snapshot of the profile's top-level scalars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub author: Option<Value>,
    pub source: Option<Value>,
    pub language: Option<Value>,
    pub word_count: Option<i64>,
    pub word_count_message: Option<Value>,
    pub analysis_level: AnalysisStrength,
}

impl<S: ProfileSource> ResultsAccessor<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn inner(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Root of the results tree with every level normalized.
    #[must_use]
    pub fn collect_tree(&self) -> Option<InsightNode> {
        let tree = self.tree().map(Self::collect_all);
        if tree.is_none() {
            tracing::debug!("profile has no tree to collect");
        }
        tree
    }

    /// Replace every nested container below `node` with a normalized node.
    #[must_use]
    pub fn collect_all(node: InsightNode) -> InsightNode {
        node::collect_all(node)
    }

    /// Whether `node` or any descendant reachable through `children` has `id`.
    // Takes `&self` so callers query through the accessor like every other operation.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn has_insight(&self, id: &str, node: &InsightNode) -> bool {
        self.get_node_by_id(id, node).is_some()
    }

    /// First node in pre-order, left-to-right, whose `id` matches.
    ///
    /// Descends only through `children` values that are normalized nodes or
    /// sequences; raw `children` data stops the descent without error.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn get_node_by_id<'a>(&self, id: &str, node: &'a InsightNode) -> Option<&'a InsightNode> {
        find_by_id(id, node)
    }

    /// Collect the tree and return an owned copy of the node with `id`.
    #[must_use]
    pub fn find_insight(&self, id: &str) -> Option<InsightNode> {
        let tree = self.collect_tree()?;
        let found = find_by_id(id, &tree).cloned();
        if found.is_none() {
            tracing::debug!(id, "no insight with this id in profile tree");
        }
        found
    }

    /// `word_count`, read from integers, floats (truncated) or numeric strings.
    #[must_use]
    pub fn word_count(&self) -> Option<i64> {
        match self.source.get_from_profile("word_count")? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(truncate)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(truncate))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&Value> {
        self.source.get_from_profile("source")
    }

    /// Author identifier, stored under the profile's `id` key.
    #[must_use]
    pub fn author(&self) -> Option<&Value> {
        self.source.get_from_profile("id")
    }

    /// `processed_lang`, passed through as stored.
    #[must_use]
    pub fn language(&self) -> Option<&Value> {
        self.source.get_from_profile("processed_lang")
    }

    #[must_use]
    pub fn word_count_message(&self) -> Option<&Value> {
        self.source.get_from_profile("word_count_message")
    }

    /// Root of the results tree, normalized one level deep only.
    #[must_use]
    pub fn tree(&self) -> Option<InsightNode> {
        self.source
            .get_from_profile("tree")
            .cloned()
            .and_then(InsightNode::from_value)
    }

    #[must_use]
    pub fn analysis_level(&self) -> AnalysisStrength {
        AnalysisStrength::from_word_count(self.word_count())
    }

    #[must_use]
    pub fn is_analysis_very_strong(&self) -> bool {
        self.analysis_level() == AnalysisStrength::VeryStrong
    }

    /// Strong or very strong.
    #[must_use]
    pub fn is_analysis_strong(&self) -> bool {
        self.analysis_level().is_at_least_strong()
    }

    /// Weak or very weak.
    #[must_use]
    pub fn is_analysis_weak(&self) -> bool {
        self.analysis_level().is_at_most_weak()
    }

    #[must_use]
    pub fn is_analysis_very_weak(&self) -> bool {
        self.analysis_level() == AnalysisStrength::VeryWeak
    }

    #[must_use]
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            author: self.author().cloned(),
            source: self.source().cloned(),
            language: self.language().cloned(),
            word_count: self.word_count(),
            word_count_message: self.word_count_message().cloned(),
            analysis_level: self.analysis_level(),
        }
    }
}

fn find_by_id<'a>(id: &str, node: &'a InsightNode) -> Option<&'a InsightNode> {
    if node.id().is_some_and(|v| id_matches(v, id)) {
        return Some(node);
    }
    node.children().find_map(|child| find_by_id(id, child))
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(f: f64) -> i64 {
    f.trunc() as i64
}

#[cfg(test)]
#[path = "accessor_test.rs"]
mod tests;

//! Validation report grouped by section.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::category::Category;
use crate::issue::Issue;

/// Validation report for one record.
///
/// Sections keep the order in which their first issue was added. An empty
/// report means the record is valid. Serializes as `{section: [messages]}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    sections: Vec<(String, Vec<Issue>)>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report holding a single internal failure and nothing else.
    pub fn internal_failure(message: impl Into<String>) -> Self {
        let mut report = Self::new();
        report.add(Issue::InternalValidationFailure {
            message: message.into(),
        });
        report
    }

    /// Add an issue under its section.
    pub fn add(&mut self, issue: Issue) {
        let section = issue.section();
        match self.sections.iter_mut().find(|(name, _)| name == section) {
            Some((_, issues)) => issues.push(issue),
            None => self.sections.push((section.to_string(), vec![issue])),
        }
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        for issue in issues {
            self.add(issue);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section names in insertion order.
    pub fn sections(&self) -> Vec<&str> {
        self.sections.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Issues filed under a section.
    pub fn issues(&self, section: &str) -> &[Issue] {
        self.sections
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, issues)| issues.as_slice())
            .unwrap_or_default()
    }

    /// Messages filed under a section, in order.
    pub fn messages(&self, section: &str) -> Vec<String> {
        self.issues(section).iter().map(Issue::message).collect()
    }

    /// All issues across sections.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.sections.iter().flat_map(|(_, issues)| issues)
    }

    pub fn issue_count(&self) -> usize {
        self.sections.iter().map(|(_, issues)| issues.len()).sum()
    }

    /// Issue count per category, in [`Category::all`] order. Categories
    /// without issues are left out.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::all()
            .iter()
            .filter_map(|category| {
                let count = self
                    .iter()
                    .filter(|issue| issue.category() == *category)
                    .count();
                (count > 0).then_some((*category, count))
            })
            .collect()
    }

    /// Section to messages, keyed alphabetically.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.sections
            .iter()
            .map(|(name, issues)| (name.clone(), issues.iter().map(Issue::message).collect()))
            .collect()
    }
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, issues) in &self.sections {
            let messages: Vec<String> = issues.iter().map(Issue::message).collect();
            map.serialize_entry(name, &messages)?;
        }
        map.end()
    }
}

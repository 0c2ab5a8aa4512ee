//! Distracting sites shown on the focus panel.
//!
//! The list is informational: nothing is intercepted. Each entry carries
//! the number of blocks recorded for it today, and the panel total is the
//! "Sites Blocked" figure in the stats table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedSite {
    pub url: String,
    pub category: String,
    #[serde(default)]
    pub blocked_count: u64,
}

impl BlockedSite {
    pub fn new(url: &str, category: &str, blocked_count: u64) -> Self {
        Self {
            url: url.to_string(),
            category: category.to_string(),
            blocked_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    sites: Vec<BlockedSite>,
}

impl BlockList {
    pub fn new(sites: Vec<BlockedSite>) -> Self {
        Self { sites }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockedSite> {
        self.sites.iter()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Blocks recorded across every site.
    pub fn total_blocks(&self) -> u64 {
        self.sites.iter().fold(0u64, |total, site| total.saturating_add(site.blocked_count))
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::new(vec![
            BlockedSite::new("youtube.com", "Entertainment", 23),
            BlockedSite::new("instagram.com", "Social Media", 18),
            BlockedSite::new("twitter.com", "Social Media", 15),
            BlockedSite::new("reddit.com", "News/Forum", 12),
            BlockedSite::new("netflix.com", "Entertainment", 8),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_totals_seventy_six_blocks() {
        let list = BlockList::default();
        assert_eq!(list.len(), 5);
        assert_eq!(list.total_blocks(), 76);
        assert_eq!(list.iter().next().map(|site| site.url.as_str()), Some("youtube.com"));
    }

    #[test]
    fn test_total_saturates() {
        let list = BlockList::new(vec![
            BlockedSite::new("a.example", "Other", u64::MAX),
            BlockedSite::new("b.example", "Other", 1),
        ]);
        assert_eq!(list.total_blocks(), u64::MAX);
        assert!(BlockList::new(Vec::new()).is_empty());
    }
}

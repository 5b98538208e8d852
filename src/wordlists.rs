//! Tier term collection
//!
//! Builds the three word-list tiers from raw configuration values: CSV
//! splitting (or whole-file pass-through), cross-tier deduplication from
//! loosest to strictest, and the default blocklist fallback.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::Settings;

/// Blocklist used when no term list is supplied anywhere
pub const DEFAULT_BLOCKLIST: &str = "master,slave,whitelist,blacklist";

/// Term tiers from least to most restrictive, each sorted lexicographically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLists {
    /// Substring matches with special-character tolerance, case-insensitive
    pub blocklist: Vec<String>,
    /// As blocklist, but bounded by word edges
    pub wordlist: Vec<String>,
    /// Exact substring bounded by word edges, case-sensitive
    pub exactlist: Vec<String>,
}

impl WordLists {
    /// Collect the three tiers from the resolved configuration.
    ///
    /// When none of the three lists was supplied at all, the blocklist
    /// falls back to [`DEFAULT_BLOCKLIST`]. A term claimed by a looser tier
    /// is removed from every stricter tier it also appears in.
    #[must_use]
    pub fn gather(settings: &Settings) -> Self {
        let no_lists = settings.blocklist.is_none()
            && settings.wordlist.is_none()
            && settings.exactlist.is_none();
        let blocklist_raw = if no_lists {
            Some(DEFAULT_BLOCKLIST)
        } else {
            settings.blocklist.as_deref()
        };

        let mut tiers = [
            terms_from(blocklist_raw),
            terms_from(settings.wordlist.as_deref()),
            terms_from(settings.exactlist.as_deref()),
        ];

        // Loose tiers claim words first.
        for looser in 0..tiers.len() {
            let (head, tail) = tiers.split_at_mut(looser + 1);
            let claimed = &head[looser];
            for stricter in tail {
                stricter.retain(|term| !claimed.contains(term));
            }
        }

        let [blocklist, wordlist, exactlist] = tiers.map(|set| set.into_iter().collect());
        Self {
            blocklist,
            wordlist,
            exactlist,
        }
    }
}

/// Turn one raw list value into its term set.
///
/// A value naming an existing readable file passes the file's entire
/// contents through as a single literal term (a prepared word file);
/// anything else is split on commas, duplicates collapsing into the set.
fn terms_from(raw: Option<&str>) -> BTreeSet<String> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };

    if Path::new(raw).exists() {
        if let Ok(contents) = fs::read_to_string(raw) {
            return BTreeSet::from([contents]);
        }
    }

    raw.split(',').map(str::to_string).collect()
}

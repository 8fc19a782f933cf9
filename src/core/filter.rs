//! Filtering and search helpers over parsed entries.
//!
//! All functions here are pure over borrowed entries, so filters chain by
//! feeding one result into the next; reading and rewriting the backing
//! store is the storage layer's concern.

use crate::core::{Entry, Tag};

/// Entries carrying a project tag whose value contains `value`
/// (case-insensitive).
#[must_use]
pub fn by_project<'a>(entries: &[&'a Entry], value: &str) -> Vec<&'a Entry> {
    let needle = value.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.tags.iter().any(|tag| {
                matches!(tag, Tag::Project { .. }) && tag.value().to_lowercase().contains(&needle)
            })
        })
        .copied()
        .collect()
}

/// Entries carrying a context tag whose value contains `value`
/// (case-insensitive).
#[must_use]
pub fn by_context<'a>(entries: &[&'a Entry], value: &str) -> Vec<&'a Entry> {
    let needle = value.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.tags.iter().any(|tag| {
                matches!(tag, Tag::Context { .. }) && tag.value().to_lowercase().contains(&needle)
            })
        })
        .copied()
        .collect()
}

/// Entries carrying a key-value tag whose key contains `key`
/// (case-insensitive).
#[must_use]
pub fn by_key<'a>(entries: &[&'a Entry], key: &str) -> Vec<&'a Entry> {
    let needle = key.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.tags.iter().any(|tag| match tag {
                Tag::KeyValue { key, .. } => key.to_lowercase().contains(&needle),
                _ => false,
            })
        })
        .copied()
        .collect()
}

/// Entries marked as done.
#[must_use]
pub fn completed<'a>(entries: &[&'a Entry]) -> Vec<&'a Entry> {
    entries.iter().filter(|entry| entry.done).copied().collect()
}

/// Entries not yet done.
#[must_use]
pub fn pending<'a>(entries: &[&'a Entry]) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|entry| !entry.done)
        .copied()
        .collect()
}

/// First entry whose description contains `text` (case-insensitive).
#[must_use]
pub fn find_by_description<'a>(entries: &'a [Entry], text: &str) -> Option<&'a Entry> {
    let needle = text.to_lowercase();
    entries
        .iter()
        .find(|entry| entry.description.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;

    fn sample_entries() -> Vec<Entry> {
        [
            "x (B) 2022-04-20 2022-04-22 walk dog +project",
            "x 2011-03-03 call mom due:now",
            "(A) call mom +Family +PeaceLoveAndHappiness @iphone @phone",
            "(B) schedule Goodwill pickup +GarageSale @phone",
            "@GroceryStore Eskimo pies",
            "2018-04-12 post signs around the neighborhood +GarageSale ends:tomorrow",
        ]
        .into_iter()
        .map(|line| parse(line).unwrap())
        .collect()
    }

    fn refs(entries: &[Entry]) -> Vec<&Entry> {
        entries.iter().collect()
    }

    #[test]
    fn test_by_project_matches_substring() {
        let entries = sample_entries();
        let matched = by_project(&refs(&entries), "garagesale");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_by_project_ignores_contexts() {
        let entries = sample_entries();
        assert!(by_project(&refs(&entries), "phone").is_empty());
    }

    #[test]
    fn test_by_context() {
        let entries = sample_entries();
        let matched = by_context(&refs(&entries), "phone");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_by_key() {
        let entries = sample_entries();
        let matched = by_key(&refs(&entries), "due");
        assert_eq!(matched.len(), 1);
        assert!(matched[0].done);
    }

    #[test]
    fn test_completed_and_pending_partition() {
        let entries = sample_entries();
        let all = refs(&entries);
        assert_eq!(completed(&all).len(), 2);
        assert_eq!(pending(&all).len(), 4);
        assert_eq!(completed(&all).len() + pending(&all).len(), entries.len());
    }

    #[test]
    fn test_filters_chain() {
        let entries = sample_entries();
        let matched = pending(&by_context(&refs(&entries), "phone"));
        assert_eq!(matched.len(), 2);

        let matched = by_project(&pending(&refs(&entries)), "garagesale");
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_find_by_description() {
        let entries = sample_entries();
        let found = find_by_description(&entries, "eskimo");
        assert!(found.is_some());
        assert_eq!(found.map(|e| e.description.as_str()), Some("Eskimo pies"));

        assert!(find_by_description(&entries, "not present").is_none());
    }
}

use proptest::prelude::*;

mod common;

use common::{as_set, naive_first, naive_search, substrings};
use gstree::{DocumentId, GeneralizedSuffixTree};

/// Small alphabet so documents share plenty of structure, with a few
/// multi-byte characters and a space.
fn word() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('a'),
            Just('b'),
            Just('c'),
            Just(' '),
            Just('中'),
            Just('文'),
            Just('é'),
        ],
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn corpus() -> impl Strategy<Value = Vec<(String, DocumentId)>> {
    proptest::collection::vec((word(), 0i64..6), 1..8)
}

fn build(documents: &[(String, DocumentId)]) -> GeneralizedSuffixTree {
    let mut tree = GeneralizedSuffixTree::new();
    for (word, id) in documents {
        tree.put(word, *id);
    }
    tree
}

proptest! {
    #[test]
    fn every_substring_finds_its_document(documents in corpus()) {
        let tree = build(&documents);
        for (word, id) in &documents {
            for sub in substrings(word) {
                prop_assert!(
                    tree.search(&sub, -1).contains(id),
                    "{:?} of {:?} missing id {}", sub, word, id
                );
            }
        }
    }

    #[test]
    fn search_matches_linear_scan(documents in corpus(), pattern in word()) {
        let tree = build(&documents);
        let hits = tree.search(&pattern, -1);

        let distinct = as_set(hits.clone());
        prop_assert_eq!(distinct.len(), hits.len(), "duplicate ids in {:?}", hits);
        prop_assert_eq!(distinct, naive_search(&documents, &pattern));
        prop_assert_eq!(tree.contains(&pattern), !hits.is_empty());
    }

    #[test]
    fn limit_takes_earliest_matches(documents in corpus(), pattern in word(), limit in 0usize..5) {
        let tree = build(&documents);
        let unbounded = tree.search(&pattern, -1);
        let capped = tree.search(&pattern, limit as i64);

        prop_assert_eq!(capped.len(), limit.min(unbounded.len()));
        prop_assert_eq!(capped, naive_first(&documents, &pattern, limit));
    }

    #[test]
    fn empty_pattern_never_matches(documents in corpus(), limit in -3i64..5) {
        let tree = build(&documents);
        prop_assert!(tree.search("", limit).is_empty());
    }

    #[test]
    fn longest_common_substring_is_shared(documents in corpus()) {
        let tree = build(&documents);
        let common = tree.longest_common_substring();
        for (word, _) in &documents {
            prop_assert!(word.contains(common.as_str()), "{:?} not in {:?}", common, word);
        }

        // Nothing longer is shared.
        let shortest = documents
            .iter()
            .min_by_key(|(word, _)| word.chars().count())
            .map(|(word, _)| word.clone())
            .unwrap_or_default();
        for sub in substrings(&shortest) {
            if sub.chars().count() > common.chars().count() {
                prop_assert!(
                    documents.iter().any(|(word, _)| !word.contains(sub.as_str())),
                    "{:?} is shared and longer than {:?}", sub, common
                );
            }
        }
    }
}

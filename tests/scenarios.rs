//! Fixed scenarios: word lists, a pattern, a limit and the words expected back.

mod common;

use common::{as_set, tree_of};
use test_case::test_case;

#[test_case(&["banana", "apple", "中文app"], "a", -1, &["banana", "apple", "中文app"]; "common letter matches every word")]
#[test_case(&["bananal", "applel", "中文appz"], "al", -1, &["bananal"]; "first word only")]
#[test_case(&["bananal", "applel", "中文appz"], "pz", -1, &["中文appz"]; "last word only")]
#[test_case(&["banana is cool", "apple is cold", "中文app is warm"], "is cold", -1, &["apple is cold"]; "pattern spanning a space")]
#[test_case(&["banana is cool", "apple is cold", "中文app is warm"], "", -1, &[]; "empty pattern matches nothing")]
#[test_case(&["banana is cool 100", "apple is cold 99", "中文app is warm 98"], "100", -1, &["banana is cool 100"]; "numeric pattern")]
#[test_case(&["banana is cool 999", "apple is cold 998", "中文app is warm 997"], "99", 1, &["banana is cool 999"]; "limit keeps earliest match")]
#[test_case(&["中文app", "文章", "中国"], "中文", -1, &["中文app"]; "multibyte prefix")]
#[test_case(&["中文app", "文章", "中国"], "文", -1, &["中文app", "文章"]; "multibyte single character")]
#[test_case(&["banana", "apple"], "aa", -1, &[]; "never matches across documents")]
#[test_case(&["banana", "apple"], "a", 0, &[]; "zero limit")]
fn search_returns_expected_words(words: &[&str], pattern: &str, limit: i64, expected: &[&str]) {
    let tree = tree_of(words);

    let hits = tree.search(pattern, limit);
    let matched: Vec<&str> = hits.iter().map(|&id| words[id as usize]).collect();

    let mut got = matched.clone();
    got.sort_unstable();
    let mut want = expected.to_vec();
    want.sort_unstable();
    assert_eq!(got, want, "pattern {:?} limit {}", pattern, limit);
}

#[test_case("banana"; "ascii")]
#[test_case("中文app is warm"; "mixed width")]
#[test_case("aaaaaaa"; "single repeated letter")]
#[test_case("abcabxabcd"; "classic ukkonen example")]
fn every_substring_of_a_lone_word_is_found(word: &str) {
    let tree = tree_of(&[word, "zzz"]);
    for sub in common::substrings(word) {
        assert!(
            tree.search(&sub, -1).contains(&0),
            "{:?} not found in {:?}",
            sub,
            word
        );
    }
}

#[test]
fn same_word_under_two_ids_matches_both() {
    let mut tree = gstree::GeneralizedSuffixTree::new();
    tree.put("banana", 10);
    tree.put("banana", 20);

    assert_eq!(as_set(tree.search("nan", -1)), [10, 20].into_iter().collect());
    assert_eq!(tree.search("nan", 1), vec![10]);
}

#[test]
fn repeated_id_is_reported_once() {
    let mut tree = gstree::GeneralizedSuffixTree::new();
    tree.put("apple", 4);
    tree.put("pineapple", 4);
    tree.put("grape", 5);

    assert_eq!(tree.search("ap", -1), vec![4, 5]);
    assert_eq!(tree.search("ap", 2), vec![4, 5]);
    assert_eq!(tree.search("apple", 10), vec![4]);
}

#[test]
fn empty_words_are_documents_without_substrings() {
    let mut tree = gstree::GeneralizedSuffixTree::new();
    tree.put("", 0);
    tree.put("", 1);
    tree.put("x", 2);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.search("x", -1), vec![2]);
    assert!(tree.search("", -1).is_empty());
}

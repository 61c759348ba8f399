//! Teardown and allocation discipline for pathological tree shapes.
//!
//! The trie holds one node per pattern byte, so both construction and drop
//! must cope with chains far deeper than any reasonable call stack.

use urlrouter::Router;

#[test]
fn deep_literal_chain_drops_without_overflow() {
    let pattern = format!("/{}", "a".repeat(100_000));

    let mut router = Router::new();
    router.insert(&pattern, 1).unwrap();

    let matched = router.at(&pattern).unwrap();
    assert_eq!(matched.value, Some(1));
    assert!(matched.captures.is_empty());

    drop(router);
}

#[test]
fn deep_placeholder_chain_drops_without_overflow() {
    let pattern = "/{p}".repeat(5_000);
    let input = "/x".repeat(5_000);

    let mut router = Router::new();
    router.insert(&pattern, 2).unwrap();

    let matched = router.at(&input).unwrap();
    assert_eq!(matched.value, Some(2));
    assert_eq!(matched.captures.len(), 5_000);
    assert!(matched.captures.iter().all(|(key, value)| key == "p" && value == "x"));

    drop(router);
}

#[test]
fn wide_tree_drops() {
    let mut router = Router::new();
    for i in 0u32..1_000 {
        router.insert(&format!("/routes/{i}/{{id}}"), u64::from(i) + 1).unwrap();
    }

    let matched = router.at("/routes/999/abc").unwrap();
    assert_eq!(matched.value, Some(1_000));
    assert_eq!(matched.captures.get("id"), Some("abc"));

    drop(router);
}

// captures borrow the router and the input, but remain usable after
// any number of later matches
#[test]
fn captures_outlive_later_matches() {
    let mut router = Router::new();
    router.insert("/users/{username}", 1).unwrap();

    let first = router.at("/users/max").unwrap();
    let second = router.at("/users/nils").unwrap();

    assert_eq!(first.captures.get("username"), Some("max"));
    assert_eq!(second.captures.get("username"), Some("nils"));

    drop(first);
    drop(second);
    drop(router);
}

#[test]
fn fresh_captures_per_match() {
    let mut router = Router::new();
    router.insert("/users/{username}", 1).unwrap();
    router.insert("/about", 2).unwrap();

    // a match that resolves no placeholder shares no state with one that does
    let with = router.at("/users/max").unwrap();
    let without = router.at("/about").unwrap();

    assert_eq!(with.captures.len(), 1);
    assert!(without.captures.is_empty());
}

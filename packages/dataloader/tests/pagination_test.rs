//! Pagination properties over generated sequences

use assert_matches::assert_matches;
use bookshelf_dataloader::{
    decode_cursor, encode_cursor, paginate, Error, Page, PaginationArgs, Paginator, Scope,
};
use bookshelf_test_utils::{numbered_items, Item};
use proptest::prelude::*;

fn ids(page: &Page<Item>) -> Vec<String> {
    page.nodes().map(|item| item.id.clone()).collect()
}

fn arb_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::root()),
        "[a-z]{1,6}-[0-9]{1,2}".prop_map(|id| Scope::nested(id, "Author")),
        "[a-z]{1,6}-[0-9]{1,2}".prop_map(|id| Scope::nested(id, "Book")),
    ]
}

/// Follow `endCursor` until `hasNextPage` is false
fn walk_forward(items: &[Item], page_size: i32, scope: &Scope) -> Vec<String> {
    let mut seen = Vec::new();
    let mut args = PaginationArgs::forward(page_size);

    loop {
        let page = paginate(items, &args, scope).unwrap();
        seen.extend(ids(&page));
        match (page.page_info.has_next_page, page.page_info.end_cursor) {
            (true, Some(end)) => args = PaginationArgs::forward(page_size).after(end),
            _ => break,
        }
    }
    seen
}

proptest! {
    #[test]
    fn forward_walk_visits_every_item_once(len in 0usize..60, page_size in 1i32..12, scope in arb_scope()) {
        let items = numbered_items("item", len);
        let seen = walk_forward(&items, page_size, &scope);
        let expected: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn first_n_returns_exactly_n(len in 0usize..300, seed in any::<usize>()) {
        let items = numbered_items("item", len);
        let n = seed % (len + 1);
        let page = paginate(&items, &PaginationArgs::forward(n as i32), &Scope::root()).unwrap();

        prop_assert_eq!(page.edges.len(), n);
        prop_assert_eq!(page.page_info.has_next_page, n < len);
        prop_assert!(!page.page_info.has_previous_page);
    }

    #[test]
    fn first_beyond_len_returns_everything(len in 0usize..300, extra in 0i32..100) {
        let items = numbered_items("item", len);
        let page = paginate(&items, &PaginationArgs::forward(len as i32 + extra), &Scope::root()).unwrap();

        prop_assert_eq!(page.edges.len(), len);
        prop_assert!(!page.page_info.has_next_page);
    }

    #[test]
    fn last_n_never_exceeds_limit(len in 0usize..60, last in 0i32..20) {
        let items = numbered_items("item", len);
        let page = paginate(&items, &PaginationArgs::backward(last), &Scope::root()).unwrap();

        prop_assert_eq!(page.edges.len(), (last as usize).min(len));
        prop_assert_eq!(page.page_info.has_previous_page, len > last as usize);
        if let Some(tail) = page.nodes().last() {
            prop_assert_eq!(&tail.id, &items[len - 1].id);
        }
    }

    #[test]
    fn pagination_is_idempotent(len in 0usize..40, first in 0i32..10, after in 0usize..45) {
        let items = numbered_items("item", len);
        let args = PaginationArgs::forward(first).after(encode_cursor(&format!("item-{after}"), None, None));

        let once = paginate(&items, &args, &Scope::root()).unwrap();
        let twice = paginate(&items, &args, &Scope::root()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn cursor_round_trips(id in "\\PC{0,40}", parent in proptest::option::of(("[a-z0-9-]{1,12}", "[A-Z][a-z]{2,8}"))) {
        let (parent_id, parent_type) = match &parent {
            Some((id, kind)) => (Some(id.as_str()), Some(kind.as_str())),
            None => (None, None),
        };
        let token = encode_cursor(&id, parent_id, parent_type);
        let cursor = decode_cursor(&token).unwrap();

        prop_assert_eq!(cursor.id, id);
        prop_assert_eq!(cursor.parent_id.as_deref(), parent_id);
        prop_assert_eq!(cursor.parent_type.as_deref(), parent_type);
        prop_assert!(token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn unknown_cursor_id_restarts_from_beginning(len in 1usize..30, first in 1i32..10) {
        let items = numbered_items("item", len);
        let args = PaginationArgs::forward(first).after(encode_cursor("not-in-list", None, None));
        let page = paginate(&items, &args, &Scope::root()).unwrap();
        let fresh = paginate(&items, &PaginationArgs::forward(first), &Scope::root()).unwrap();

        prop_assert_eq!(ids(&page), ids(&fresh));
    }
}

#[test]
fn test_sibling_lists_paginate_independently() {
    let books = numbered_items("book", 6);
    let first_author = Scope::nested("author-1", "Author");
    let second_author = Scope::nested("author-2", "Author");

    let a = paginate(&books, &PaginationArgs::forward(2), &first_author).unwrap();
    let b = paginate(&books, &PaginationArgs::forward(3), &second_author).unwrap();

    assert_ne!(a.edges[0].cursor, b.edges[0].cursor);

    let a_next = PaginationArgs::forward(2).after(a.page_info.end_cursor.clone().unwrap());
    assert_eq!(ids(&paginate(&books, &a_next, &first_author).unwrap()), ["book-3", "book-4"]);

    assert_matches!(
        paginate(&books, &a_next, &second_author),
        Err(Error::InvalidCursor(_))
    );
}

#[test]
fn test_lenient_paginator_accepts_sibling_cursor() {
    let books = numbered_items("book", 6);
    let paginator = Paginator::default().with_strict_scope(false);
    let foreign = encode_cursor("book-2", Some("author-1"), Some("Author"));

    let page = paginator
        .paginate(&books, &PaginationArgs::forward(2).after(foreign), &Scope::nested("author-2", "Author"))
        .unwrap();
    assert_eq!(ids(&page), ["book-3", "book-4"]);
}

#[test]
fn test_custom_page_limits() {
    let items = numbered_items("item", 50);
    let paginator = Paginator::new(5, 20);

    let clamped = paginator.paginate(&items, &PaginationArgs::forward(40), &Scope::root()).unwrap();
    assert_eq!(clamped.edges.len(), 20);

    let fallback = paginator.paginate(&items, &PaginationArgs::forward(-3), &Scope::root()).unwrap();
    assert_eq!(fallback.edges.len(), 5);
}

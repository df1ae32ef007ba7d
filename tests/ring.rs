use circular_lists::{ CircularList, Removal, RingError };

fn values(list: &CircularList) -> Vec<i64> {
    list.iter().collect()
}

#[test]
fn size_tracks_inserts() {
    let mut list = CircularList::new();
    for i in 0..10 {
        if i % 2 == 0 {
            list.insert_at_head(i);
        } else {
            list.insert_at_tail(i);
        }
        assert_eq!(list.len(), (i + 1) as usize);
        assert_eq!(list.iter().count(), list.len());
    }
    assert_eq!(values(&list), &[8, 6, 4, 2, 0, 1, 3, 5, 7, 9]);
}

#[test]
fn walkthrough() {
    let mut list = CircularList::new();
    list.insert_at_head(10);
    list.insert_at_tail(20);
    list.insert_at_head(5);
    list.insert_at_tail(30);
    list.insert_at_head(1);
    assert_eq!(values(&list), &[1, 5, 10, 20, 30]);
    assert_eq!(list.len(), 5);

    assert!(list.search(10));
    assert!(list.search(30));
    assert!(list.search(1));
    assert!(!list.search(99));

    assert_eq!(list.delete_at_head(), Ok(1));
    assert_eq!(list.delete_by_value(20), Some(Removal::Interior));
    assert_eq!(values(&list), &[5, 10, 30]);
    assert_eq!(list.delete_by_value(30), Some(Removal::Tail));
    assert_eq!(values(&list), &[5, 10]);
    assert_eq!(list.delete_by_value(5), Some(Removal::Head));
    assert_eq!(values(&list), &[10]);
    assert_eq!(list.delete_by_value(99), None);
    assert_eq!(list.len(), 1);
    assert_eq!(list.delete_by_value(10), Some(Removal::Only));
    assert!(list.is_empty());
}

#[test]
fn empty_ring_reports_without_corruption() {
    let mut list = CircularList::new();
    assert_eq!(list.delete_at_head(), Err(RingError::EmptyCollection));
    assert_eq!(list.delete_by_value(5), None);
    assert!(!list.search(5));
    assert_eq!(list.len(), 0);
    assert_eq!(list.to_string(), "List is empty.");

    // Still usable afterwards
    list.insert_at_tail(1);
    assert_eq!(values(&list), &[1]);
}

#[test]
fn lone_node_deletes_agree() {
    let mut by_head = CircularList::new();
    by_head.insert_at_head(77);
    assert_eq!(by_head.delete_at_head(), Ok(77));

    let mut by_value = CircularList::new();
    by_value.insert_at_tail(77);
    assert_eq!(by_value.delete_by_value(77), Some(Removal::Only));

    assert_eq!(by_head, by_value);
    assert!(by_value.is_empty());
    assert_eq!(by_value.len(), 0);
}

#[test]
fn insert_after_tail_delete() {
    let mut list = CircularList::new();
    for elem in [5, 10, 20, 30] {
        list.insert_at_tail(elem);
    }
    list.delete_by_value(30);
    assert_eq!(values(&list), &[5, 10, 20]);
    assert_eq!(list.tail(), Some(20));

    list.insert_at_tail(99);
    assert_eq!(values(&list), &[5, 10, 20, 99]);
    assert_eq!(list.head(), Some(5));
}

#[test]
fn drain_from_head() {
    let mut list = CircularList::new();
    for elem in 0..100 {
        list.insert_at_tail(elem);
    }
    let mut drained = Vec::new();
    while let Ok(elem) = list.delete_at_head() {
        drained.push(elem);
    }
    assert_eq!(drained, (0..100).collect::<Vec<_>>());
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn display_matches_narration() {
    let mut list = CircularList::new();
    list.insert_at_head(100);
    list.insert_at_tail(200);
    assert_eq!(list.to_string(), "List (tail -> 200): head -> 100 -> 200 -> (head again: 100)");
    list.delete_by_value(100);
    assert_eq!(list.to_string(), "List (tail -> 200): head -> 200 -> (head again: 200)");
}

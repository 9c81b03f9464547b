use std::vec::Vec;

use proptest::prelude::*;

use crate::linked_list::LinkedList;

proptest! {
    #[test]
    fn test_iteration_preserves_sequence(values: Vec<i32>) {
        let list: LinkedList<i32> = values.iter().copied().collect();
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values.clone());
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), values);
    }

    #[test]
    fn test_equality_is_reflexive(values: Vec<i32>) {
        let a = LinkedList::from(values.clone());
        let b = LinkedList::from(values);
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(&a, &b);
    }

    #[test]
    fn test_ordering_matches_vec(a: Vec<u8>, b: Vec<u8>) {
        let list_a = LinkedList::from(a.clone());
        let list_b = LinkedList::from(b.clone());
        prop_assert_eq!(list_a.cmp(&list_b), a.cmp(&b));
        prop_assert_eq!(list_a < list_b, a < b);
        prop_assert_eq!(list_a <= list_b, a <= b);
        prop_assert_eq!(list_a > list_b, a > b);
        prop_assert_eq!(list_a >= list_b, a >= b);
        prop_assert_eq!(list_a == list_b, a == b);
    }

    #[test]
    fn test_clone_is_independent(values: Vec<i32>, extra: i32) {
        let original = LinkedList::from(values.clone());
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        copy.push_front(extra);
        prop_assert_eq!(original.len(), values.len());
        prop_assert_eq!(original.iter().copied().collect::<Vec<_>>(), values);
    }

    #[test]
    fn test_swap_is_an_involution(a: Vec<i32>, b: Vec<i32>) {
        let mut list_a = LinkedList::from(a.clone());
        let mut list_b = LinkedList::from(b.clone());
        list_a.swap(&mut list_b);
        prop_assert_eq!(list_a.iter().copied().collect::<Vec<_>>(), b.clone());
        list_a.swap(&mut list_b);
        prop_assert_eq!(list_a.iter().copied().collect::<Vec<_>>(), a);
        prop_assert_eq!(list_b.iter().copied().collect::<Vec<_>>(), b);
    }

    #[test]
    fn test_clear_empties(values: Vec<i32>) {
        let mut list = LinkedList::from(values);
        list.clear();
        prop_assert!(list.is_empty());
        prop_assert_eq!(list.begin(), list.end());
    }
}

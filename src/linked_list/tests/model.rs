use std::vec::Vec;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::{Error, LinkedList, Position};

const STEPS: usize = 5_000;

/// Checks the list against a `Vec` model, including that every position still held
/// resolves to the element it was handed out for.
fn assert_matches(list: &LinkedList<u32>, model: &[u32], positions: &[Position]) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert!(list.iter().eq(model.iter()));
    for (position, expected) in positions.iter().zip(model) {
        assert_eq!(list.get(*position), Ok(expected));
    }
    assert_eq!(list.begin(), positions.first().copied().unwrap_or(Position::END));
}

#[test]
fn test_random_operations_against_vec_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = LinkedList::new();
    let mut model: Vec<u32> = Vec::new();
    let mut positions: Vec<Position> = Vec::new();

    for _ in 0..STEPS {
        match rng.random_range(0..100) {
            0..25 => {
                let value = rng.random();
                list.push_front(value);
                model.insert(0, value);
                positions.insert(0, list.begin());
            }
            25..55 => {
                let value = rng.random();
                let at = rng.random_range(0..=model.len());
                let anchor = if at == 0 { list.before_begin() } else { positions[at - 1] };
                let inserted = list.insert_after(anchor, value).unwrap();
                model.insert(at, value);
                positions.insert(at, inserted);
            }
            55..80 => {
                let at = rng.random_range(0..=model.len());
                let anchor = if at == 0 { list.before_begin() } else { positions[at - 1] };
                if at == model.len() {
                    assert_eq!(list.erase_after(anchor), Err(Error::NoSuccessor));
                } else {
                    let removed = positions.remove(at);
                    model.remove(at);
                    let next = list.erase_after(anchor).unwrap();
                    assert_eq!(next, positions.get(at).copied().unwrap_or(Position::END));
                    assert_eq!(list.get(removed), Err(Error::StalePosition));
                }
            }
            80..98 => match list.pop_front() {
                Ok(value) => {
                    assert_eq!(value, model.remove(0));
                    positions.remove(0);
                }
                Err(error) => {
                    assert_eq!(error, Error::Empty);
                    assert!(model.is_empty());
                }
            },
            _ => {
                list.clear();
                model.clear();
                positions.clear();
            }
        }
        assert_matches(&list, &model, &positions);
    }
}

#[test]
fn test_random_clone_and_swap() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let a_values: Vec<u32> = (0..rng.random_range(0..64)).map(|_| rng.random()).collect();
        let b_values: Vec<u32> = (0..rng.random_range(0..64)).map(|_| rng.random()).collect();
        let mut a: LinkedList<u32> = a_values.iter().copied().collect();
        let mut b: LinkedList<u32> = b_values.iter().copied().collect();

        let copy = a.clone();
        a.swap(&mut b);
        assert!(a.iter().eq(b_values.iter()));
        assert!(b.iter().eq(a_values.iter()));
        a.swap(&mut b);
        assert_eq!(a, copy);
        assert_eq!(a.cmp(&b), a_values.cmp(&b_values));
    }
}

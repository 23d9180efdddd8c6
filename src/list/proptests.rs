//! Model-based tests running random edit sequences against a `VecDeque`.

use std::collections::VecDeque;

use proptest::prelude::*;
use proptest::test_runner::Config;
use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

use crate::error::Error;
use crate::list::node::live;
use crate::list::tests::assert_well_formed;
use crate::List;

proptest_state_machine::prop_state_machine! {
    #![proptest_config(Config {
        failure_persistence: None,
        .. Config::default()
    })]

    #[test]
    fn list_state_machine_test(
        sequential
        1..200
        =>
        List<u32>
    );
}

#[derive(Clone, Debug)]
pub enum Transition {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    PopBack,
    Insert(usize, u32),
    Remove(usize),
    EraseRange(usize, usize),
    /// Splice `start..end` of the given list before position `at`.
    SpliceRange {
        at: usize,
        other: Vec<u32>,
        start: usize,
        end: usize,
    },
    Relocate {
        start: usize,
        end: usize,
        at: usize,
    },
    Reverse,
    Sort,
    Unique,
    /// Sort, then merge a sorted copy of the given elements.
    MergeSorted(Vec<u32>),
    /// Remove the multiples of the given number.
    RemoveIf(u32),
}

pub struct ListStateMachine;

fn splice_is_valid(len: usize, other_len: usize, at: usize, start: usize, end: usize) -> bool {
    start < end && end <= other_len && at <= len
}

fn relocate_is_valid(len: usize, start: usize, end: usize, at: usize) -> bool {
    start < end && end <= len && at <= len && !(start < at && at < end)
}

impl ReferenceStateMachine for ListStateMachine {
    type State = VecDeque<u32>;
    type Transition = Transition;

    fn init_state() -> BoxedStrategy<Self::State> {
        prop::collection::vec_deque(0..8u32, 0..10).boxed()
    }

    fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
        // Small values make duplicates likely; indices may overshoot by one to
        // exercise the error paths.
        let len = state.len();
        let value = 0..8u32;
        let index = 0..=len + 1;
        prop_oneof![
            3 => (any::<bool>(), value.clone()).prop_map(|(front, v)| if front {
                Transition::PushFront(v)
            } else {
                Transition::PushBack(v)
            }),
            2 => any::<bool>().prop_map(|front| if front {
                Transition::PopFront
            } else {
                Transition::PopBack
            }),
            2 => (index.clone(), value.clone()).prop_map(|(at, v)| Transition::Insert(at, v)),
            1 => index.clone().prop_map(Transition::Remove),
            1 => (index.clone(), index.clone()).prop_map(|(s, e)| Transition::EraseRange(s, e)),
            1 => (index.clone(), prop::collection::vec(value.clone(), 0..5), 0..6usize, 0..6usize)
                .prop_map(|(at, other, start, end)| {
                    Transition::SpliceRange { at, other, start, end }
                }),
            1 => (index.clone(), index.clone(), index)
                .prop_map(|(start, end, at)| Transition::Relocate { start, end, at }),
            1 => prop_oneof![
                Just(Transition::Reverse),
                Just(Transition::Sort),
                Just(Transition::Unique),
            ],
            1 => prop::collection::vec(value, 0..5).prop_map(Transition::MergeSorted),
            1 => (1..4u32).prop_map(Transition::RemoveIf),
        ]
        .boxed()
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        let len = state.len();
        match transition {
            Transition::PushFront(v) => state.push_front(*v),
            Transition::PushBack(v) => state.push_back(*v),
            Transition::PopFront => {
                state.pop_front();
            }
            Transition::PopBack => {
                state.pop_back();
            }
            Transition::Insert(at, v) => {
                if *at <= len {
                    state.insert(*at, *v);
                }
            }
            Transition::Remove(at) => {
                state.remove(*at);
            }
            Transition::EraseRange(start, end) => {
                if start <= end && *end <= len {
                    state.drain(*start..*end);
                }
            }
            Transition::SpliceRange { at, other, start, end } => {
                if splice_is_valid(len, other.len(), *at, *start, *end) {
                    for (i, v) in other[*start..*end].iter().enumerate() {
                        state.insert(at + i, *v);
                    }
                }
            }
            Transition::Relocate { start, end, at } => {
                if relocate_is_valid(len, *start, *end, *at) && at != start && at != end {
                    let moved: Vec<u32> = state.drain(*start..*end).collect();
                    let target = if at > start { at - moved.len() } else { *at };
                    for (i, v) in moved.into_iter().enumerate() {
                        state.insert(target + i, v);
                    }
                }
            }
            Transition::Reverse => state.make_contiguous().reverse(),
            Transition::Sort => state.make_contiguous().sort(),
            Transition::Unique => {
                let mut vec = Vec::from(state);
                vec.dedup();
                state = VecDeque::from(vec);
            }
            Transition::MergeSorted(other) => {
                state.extend(other);
                state.make_contiguous().sort();
            }
            Transition::RemoveIf(m) => state.retain(|x| x % m != 0),
        }
        state
    }
}

impl StateMachineTest for List<u32> {
    type SystemUnderTest = Self;
    type Reference = ListStateMachine;

    fn init_test(
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        ref_state.iter().copied().collect()
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: Transition,
    ) -> Self::SystemUnderTest {
        let len = state.len();
        match transition {
            Transition::PushFront(v) => {
                state.push_front(v);
                assert_eq!(state.front(), Some(&v));
            }
            Transition::PushBack(v) => {
                state.push_back(v);
                assert_eq!(state.back(), Some(&v));
            }
            Transition::PopFront => {
                assert_eq!(state.try_pop_front().is_ok(), len > 0);
            }
            Transition::PopBack => {
                assert_eq!(state.try_pop_back().is_ok(), len > 0);
            }
            Transition::Insert(at, v) => match state.insert(at, v) {
                Ok(cursor) => assert_eq!((cursor.index(), cursor.current()), (at, Some(&v))),
                Err(err) => assert_eq!(err, Error::OutOfRange { index: at, len }),
            },
            Transition::Remove(at) => {
                assert_eq!(state.remove(at).is_ok(), at < len);
            }
            Transition::EraseRange(start, end) => match state.erase_range(start..end) {
                Ok(erased) => assert_eq!(erased, end - start),
                Err(Error::InvalidRange { .. }) => assert!(start > end),
                Err(err) => assert_eq!(err, Error::OutOfRange { index: end, len }),
            },
            Transition::SpliceRange { at, other, start, end } => {
                let other_len = other.len();
                let mut other = List::from(other);
                let before = live::count();
                let result = state.splice_range(at, &mut other, start..end);
                assert_eq!(result.is_ok(), splice_is_valid(len, other_len, at, start, end));
                assert_eq!(state.len() + other.len(), len + other_len);
                assert_eq!(live::count(), before);
                assert_well_formed(&other);
            }
            Transition::Relocate { start, end, at } => {
                let result = state.relocate(start..end, at);
                assert_eq!(result.is_ok(), relocate_is_valid(len, start, end, at));
            }
            Transition::Reverse => state.reverse(),
            Transition::Sort => state.sort(),
            Transition::Unique => {
                state.unique();
                assert_eq!(state.unique(), 0);
            }
            Transition::MergeSorted(mut other) => {
                other.sort_unstable();
                let mut other = List::from(other);
                state.sort();
                state.merge(&mut other);
                assert!(other.is_empty());
            }
            Transition::RemoveIf(m) => {
                let removed = state.remove_if(|x| x % m == 0);
                assert_eq!(state.len() + removed, len);
            }
        }
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        assert_well_formed(state);
        assert_eq!(state.len(), ref_state.len());
        assert!(state.iter().eq(ref_state.iter()));
        assert!(state.iter().rev().eq(ref_state.iter().rev()));
    }
}

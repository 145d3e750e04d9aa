use std::cmp::Ordering;

/// Sort implementation under test. The suite drives it through these entry
/// points and compares against the standard library.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Send;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Send,
        F: Fn(&T, &T) -> Ordering + Sync;
}

/// Predicate partition implementation under test. Returns the boundary index.
pub trait Partition {
    fn name() -> String;

    fn partition<T, P>(arr: &mut [T], pred: P) -> usize
    where
        T: Send,
        P: Fn(&T) -> bool + Sync;
}

/// Merge implementation under test. Both inputs sorted, `dst` sized
/// `a.len() + b.len()`, ties taken from `a` first.
pub trait Merge {
    fn name() -> String;

    fn merge<T>(a: &[T], b: &[T], dst: &mut [T])
    where
        T: Ord + Clone + Send + Sync;

    fn merge_by<T, F>(a: &[T], b: &[T], dst: &mut [T], compare: F)
    where
        T: Clone + Send + Sync,
        F: Fn(&T, &T) -> Ordering + Sync;
}

pub mod patterns;
pub mod types;

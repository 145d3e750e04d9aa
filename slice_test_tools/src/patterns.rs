//! Input distributions for the differential test suites and benches.
//!
//! Every generator derives its values from the process-wide seed below, so
//! a failing case can be replayed by exporting `OVERRIDE_SEED`. All
//! generators currently produce `i32` values.

use std::env;
use std::iter;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use zipf::ZipfDistribution;

/// Uniform random `i32`s over the full value range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    iter::repeat_with(|| rng.gen()).take(len).collect()
}

/// Uniform random values drawn from `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    range.into().sample_iter(seeded_rng()).take(len).collect()
}

/// Zipfian values with the given exponent, low values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    iter::repeat_with(|| dist.sample(&mut rng) as i32)
        .take(len)
        .collect()
}

/// Random values with the leading `sorted_percent` of the slice sorted.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[..sorted_len.min(len)].sort_unstable();
    v
}

/// `0..len`, already in order.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `0..len` in reverse order.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Every element the same value.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// `saw_count` runs of random values, each run sorted ascending.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);

    for run in v.chunks_mut(saw_len(len, saw_count)) {
        run.sort_unstable();
    }

    v
}

/// `saw_count` runs of random values, each run sorted descending.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);

    for run in v.chunks_mut(saw_len(len, saw_count)) {
        run.sort_unstable_by(|a, b| b.cmp(a));
    }

    v
}

/// `saw_count` runs of random values, sorted ascending and descending in
/// alternation.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);

    for (i, run) in v.chunks_mut(saw_len(len, saw_count)).enumerate() {
        if i % 2 == 0 {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Alternating runs like [`saw_mixed`], each run length drawn from `range`.
pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    let mut rng = seeded_rng();
    let run_lens = Uniform::from(range);

    let mut v = random(len);
    let mut at = 0;
    let mut up = true;
    while at < len {
        let run_len = run_lens.sample(&mut rng).clamp(1, len - at);
        let run = &mut v[at..at + run_len];

        if up {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }

        up = !up;
        at += run_len;
    }

    v
}

/// Sorted random values rising to the middle and falling back down.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);

    v.sort_unstable();
    v[len / 2..].reverse();
    v
}

/// Switches seeding to a fresh random seed per generator call.
///
/// By default `random(4)` yields the same values for the whole process, so
/// failures replay. Benchmarks want new data per sample and call this once
/// at startup.
pub fn use_random_seed_each_time() {
    if env::var_os("OVERRIDE_SEED").is_some() {
        panic!("use_random_seed_each_time conflicts with the OVERRIDE_SEED environment variable");
    }

    FRESH_SEED_EACH_CALL.store(true, Ordering::Relaxed);
}

/// The seed every generator derives its values from.
pub fn random_init_seed() -> u64 {
    if FRESH_SEED_EACH_CALL.load(Ordering::Relaxed) {
        return thread_rng().gen();
    }

    *PROCESS_SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => val.parse().expect("OVERRIDE_SEED must be a u64"),
        Err(_) => thread_rng().gen(),
    })
}

static FRESH_SEED_EACH_CALL: AtomicBool = AtomicBool::new(false);
static PROCESS_SEED: OnceLock<u64> = OnceLock::new();

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn saw_len(len: usize, saw_count: usize) -> usize {
    (len / saw_count.max(1)).max(1)
}

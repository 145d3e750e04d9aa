use std::cmp::Ordering;

/// 1 KiB element, for exercising the algorithms with fat stack values.
///
/// The construction is strictly monotone in `val`, so transformed inputs
/// keep their order.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct OneKiloByte {
    words: [i64; 128],
}

impl OneKiloByte {
    pub fn new(val: i32) -> Self {
        let mut words = [0i64; 128];
        let seed = val as i64;

        for (i, word) in words.iter_mut().enumerate() {
            *word = std::hint::black_box(seed.wrapping_mul(i as i64 + 1));
        }

        Self { words }
    }

    fn key(&self) -> i64 {
        self.words[64]
    }
}

impl PartialOrd for OneKiloByte {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OneKiloByte {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// 16 byte element whose comparison does real float work.
///
/// The ratio `num / den` equals `2 * sqrt(shifted)`, strictly monotone in
/// `val`, and the ctor asserts both components are normal, so the ordering
/// is total over every value that can exist.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct F128 {
    num: f64,
    den: f64,
}

impl F128 {
    pub fn new(val: i32) -> Self {
        let shifted = (val as f64) + (i32::MAX as f64) + 10.0;

        let num = shifted * 2.0;
        let den = shifted.sqrt();

        assert!(num.is_normal() && den.is_normal() && den > 1.0);

        Self { num, den }
    }
}

impl Eq for F128 {}

impl PartialOrd for F128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F128 {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num / self.den;
        let rhs = other.num / other.den;

        lhs.partial_cmp(&rhs).unwrap()
    }
}

/// Source of uniform samples in `[0, 1)`.
///
/// The browser client passes `js_sys::Math::random`; tests pass fixed
/// sequences so generated shapes and quiz rounds are reproducible.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let value = (self.next_f64() * len as f64) as usize;
        value.min(len.saturating_sub(1))
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

pub fn pick<'a, T>(rng: &mut impl RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}

/// Fisher-Yates shuffle, in place.
pub fn shuffle<T>(rng: &mut impl RandomSource, items: &mut [T]) {
    for index in (1..items.len()).rev() {
        let swap_index = rng.index(index + 1);
        items.swap(index, swap_index);
    }
}

/// Cycles through a fixed list of samples.
#[cfg(test)]
pub(crate) fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
    let mut cursor = 0;
    move || {
        let value = values[cursor % values.len()];
        cursor += 1;
        value
    }
}

/// Deterministic pseudo-random stream for tests that need many distinct
/// samples.
#[cfg(test)]
pub(crate) fn seeded(seed: u64) -> impl FnMut() -> f64 {
    let mut state = seed;
    move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    }
}

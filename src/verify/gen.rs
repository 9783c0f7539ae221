//! Seeded sample generators with shrinking.
//!
//! A [`Generator`] draws values from a [`SampleRng`] and proposes simpler variants of a value
//! for shrinking. Generation is fallible: `None` means the sample was discarded (for example,
//! rejected by a [`Filter`]) and the checker simply draws again.

use std::fmt::Debug;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source used for generation. Seeding it with the same value replays the same samples.
pub type SampleRng = ChaCha8Rng;

/// Probability of drawing an edge value instead of a uniform one.
const EDGE_PROBABILITY: f64 = 0.125;

pub trait Generator {
    type Value: Clone + Debug;

    /// Draws one sample, or `None` if the draw was discarded.
    fn generate(&self, rng: &mut SampleRng) -> Option<Self::Value>;

    /// Proposes simpler values than `value`, simplest first.
    fn shrink(&self, _value: &Self::Value) -> Vec<Self::Value> {
        Vec::new()
    }

    /// Lazy sequence of samples. Restarting with the same seed yields the same sequence.
    fn samples(&self, seed: u64) -> Samples<'_, Self>
    where
        Self: Sized,
    {
        Samples {
            generator: self,
            rng: SampleRng::seed_from_u64(seed),
        }
    }

    /// Keeps only the samples (and shrink candidates) satisfying `predicate`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> bool,
    {
        Filter { inner: self, predicate }
    }
}

/// Endless iterator over the samples of a generator.
pub struct Samples<'a, G> {
    generator: &'a G,
    rng: SampleRng,
}

impl<G: Generator> Iterator for Samples<'_, G> {
    type Item = Option<G::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generator.generate(&mut self.rng))
    }
}

// =============================================================================
// Integers
// =============================================================================

/// Integers from `min..=max`, biased towards the edges of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ints {
    min: i32,
    max: i32,
}

impl Ints {
    /// The full `i32` range.
    pub fn any() -> Self {
        Self::between(i32::MIN, i32::MAX)
    }

    pub fn between(min: i32, max: i32) -> Self {
        assert!(min <= max, "empty range {}..={}", min, max);
        Self { min, max }
    }

    /// Multiplies each draw by one of `factors`.
    pub fn scaled_by(self, factors: &[i32]) -> Scaled<Self> {
        assert!(!factors.is_empty(), "no factors to scale by");
        Scaled {
            inner: self,
            factors: factors.to_vec(),
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Bounds, their neighbours, and `-1, 0, 1`, as far as they lie in range.
    fn edges(&self) -> Vec<i32> {
        let (lo, hi) = (self.min as i64, self.max as i64);
        let mut edges = Vec::new();
        for v in [lo, lo + 1, hi - 1, hi, -1, 0, 1] {
            if lo <= v && v <= hi && !edges.contains(&(v as i32)) {
                edges.push(v as i32);
            }
        }
        edges
    }

    /// Value in range closest to zero.
    fn target(&self) -> i32 {
        0.clamp(self.min, self.max)
    }
}

impl Generator for Ints {
    type Value = i32;

    fn generate(&self, rng: &mut SampleRng) -> Option<i32> {
        if rng.random_bool(EDGE_PROBABILITY) {
            let edges = self.edges();
            return Some(edges[rng.random_range(0..edges.len())]);
        }
        Some(rng.random_range(self.min..=self.max))
    }

    fn shrink(&self, &value: &i32) -> Vec<i32> {
        let v = value as i64;
        let target = self.target() as i64;
        if v == target {
            return Vec::new();
        }

        let mut candidates = vec![target];
        let mut push = |c: i64| {
            if c != v && !candidates.contains(&c) {
                candidates.push(c);
            }
        };
        // Approach `value` from `target`: halfway, three quarters, and so on.
        let mut d = (v - target) / 2;
        while d != 0 {
            push(v - d);
            d /= 2;
        }
        // Steps of one and two; the latter keeps parity for filtered generators.
        let toward = if v > target { -1 } else { 1 };
        push(v + toward);
        if (v - target).abs() > 2 {
            push(v + 2 * toward);
        }

        // All candidates lie between `target` and `value`, hence fit into i32.
        candidates.into_iter().map(|c| c as i32).collect()
    }
}

/// Products of an integer draw and a factor; overflowing products are discarded.
#[derive(Debug, Clone)]
pub struct Scaled<G> {
    inner: G,
    factors: Vec<i32>,
}

impl<G: Generator<Value = i32>> Generator for Scaled<G> {
    type Value = i32;

    fn generate(&self, rng: &mut SampleRng) -> Option<i32> {
        let base = self.inner.generate(rng)?;
        let factor = self.factors[rng.random_range(0..self.factors.len())];
        base.checked_mul(factor)
    }

    fn shrink(&self, value: &i32) -> Vec<i32> {
        let mut candidates = Vec::new();
        if *value != 0 && value % 10 == 0 {
            candidates.push(value / 10);
        }
        for c in self.inner.shrink(value) {
            if !candidates.contains(&c) {
                candidates.push(c);
            }
        }
        candidates
    }
}

/// See [`Generator::filter`].
#[derive(Debug, Clone)]
pub struct Filter<G, F> {
    inner: G,
    predicate: F,
}

impl<G, F> Generator for Filter<G, F>
where
    G: Generator,
    F: Fn(&G::Value) -> bool,
{
    type Value = G::Value;

    fn generate(&self, rng: &mut SampleRng) -> Option<G::Value> {
        self.inner.generate(rng).filter(|v| (self.predicate)(v))
    }

    fn shrink(&self, value: &G::Value) -> Vec<G::Value> {
        self.inner
            .shrink(value)
            .into_iter()
            .filter(|c| (self.predicate)(c))
            .collect()
    }
}

// =============================================================================
// Strings
// =============================================================================

/// Strings over a fixed alphabet with a length in `min_len..=max_len` (in characters).
#[derive(Debug, Clone)]
pub struct Strings {
    alphabet: Vec<char>,
    simplest: char,
    min_len: usize,
    max_len: usize,
}

impl Strings {
    /// Code points `0..=127`.
    pub fn ascii(min_len: usize, max_len: usize) -> Self {
        Self::code_points(0x7F, min_len, max_len)
    }

    /// Code points `0..=255`, the extended ASCII range.
    pub fn latin1(min_len: usize, max_len: usize) -> Self {
        Self::code_points(0xFF, min_len, max_len)
    }

    /// Characters of `alphabet`; shrinking prefers its first character.
    pub fn alphabet(alphabet: &str, min_len: usize, max_len: usize) -> Self {
        let alphabet: Vec<char> = alphabet.chars().collect();
        assert!(!alphabet.is_empty(), "empty alphabet");
        assert!(min_len <= max_len, "empty length range {}..={}", min_len, max_len);
        Self {
            simplest: alphabet[0],
            alphabet,
            min_len,
            max_len,
        }
    }

    fn code_points(last: u8, min_len: usize, max_len: usize) -> Self {
        assert!(min_len <= max_len, "empty length range {}..={}", min_len, max_len);
        Self {
            alphabet: (0..=last).map(char::from).collect(),
            simplest: 'a',
            min_len,
            max_len,
        }
    }

    fn draw_len(&self, rng: &mut SampleRng) -> usize {
        rng.random_range(self.min_len..=self.max_len)
    }

    fn draw(&self, rng: &mut SampleRng, len: usize) -> String {
        (0..len)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    /// Same string with the char at each position replaced by the simplest one.
    fn simplified(&self, chars: &[char]) -> Vec<String> {
        (0..chars.len())
            .filter(|&i| chars[i] != self.simplest)
            .map(|i| {
                let mut c = chars.to_vec();
                c[i] = self.simplest;
                c.into_iter().collect()
            })
            .collect()
    }
}

/// Same string with the char at `i` removed, for each `i`.
fn deletions(chars: &[char]) -> Vec<String> {
    (0..chars.len())
        .map(|i| chars.iter().enumerate().filter(|&(j, _)| j != i).map(|(_, &c)| c).collect())
        .collect()
}

impl Generator for Strings {
    type Value = String;

    fn generate(&self, rng: &mut SampleRng) -> Option<String> {
        let len = self.draw_len(rng);
        Some(self.draw(rng, len))
    }

    fn shrink(&self, value: &String) -> Vec<String> {
        let chars: Vec<char> = value.chars().collect();
        let mut candidates = Vec::new();
        if chars.len() > self.min_len {
            candidates.extend(deletions(&chars));
        }
        candidates.extend(self.simplified(&chars));
        candidates
    }
}

/// Two strings of one common length.
#[derive(Debug, Clone)]
pub struct SameLength {
    strings: Strings,
}

pub fn same_length(strings: Strings) -> SameLength {
    SameLength { strings }
}

impl Generator for SameLength {
    type Value = (String, String);

    fn generate(&self, rng: &mut SampleRng) -> Option<(String, String)> {
        let len = self.strings.draw_len(rng);
        let s = self.strings.draw(rng, len);
        let t = self.strings.draw(rng, len);
        Some((s, t))
    }

    fn shrink(&self, (s, t): &(String, String)) -> Vec<(String, String)> {
        let a: Vec<char> = s.chars().collect();
        let b: Vec<char> = t.chars().collect();
        let mut candidates = Vec::new();
        if a.len() > self.strings.min_len {
            candidates.extend(deletions(&a).into_iter().zip(deletions(&b)));
        }
        candidates.extend(self.strings.simplified(&a).into_iter().map(|s| (s, t.clone())));
        candidates.extend(self.strings.simplified(&b).into_iter().map(|t| (s.clone(), t)));
        candidates
    }
}

// =============================================================================
// Combinators
// =============================================================================

/// Independent pair of draws.
#[derive(Debug, Clone)]
pub struct Pairs<A, B> {
    first: A,
    second: B,
}

pub fn pairs<A: Generator, B: Generator>(first: A, second: B) -> Pairs<A, B> {
    Pairs { first, second }
}

impl<A: Generator, B: Generator> Generator for Pairs<A, B> {
    type Value = (A::Value, B::Value);

    fn generate(&self, rng: &mut SampleRng) -> Option<Self::Value> {
        let a = self.first.generate(rng)?;
        let b = self.second.generate(rng)?;
        Some((a, b))
    }

    fn shrink(&self, (a, b): &Self::Value) -> Vec<Self::Value> {
        let mut candidates: Vec<Self::Value> = self.first.shrink(a).into_iter().map(|x| (x, b.clone())).collect();
        candidates.extend(self.second.shrink(b).into_iter().map(|y| (a.clone(), y)));
        candidates
    }
}

/// Vectors of `min_len..=max_len` elements.
#[derive(Debug, Clone)]
pub struct Vecs<G> {
    element: G,
    min_len: usize,
    max_len: usize,
}

pub fn vecs<G: Generator>(element: G, min_len: usize, max_len: usize) -> Vecs<G> {
    assert!(min_len <= max_len, "empty length range {}..={}", min_len, max_len);
    Vecs { element, min_len, max_len }
}

impl<G: Generator> Generator for Vecs<G> {
    type Value = Vec<G::Value>;

    fn generate(&self, rng: &mut SampleRng) -> Option<Self::Value> {
        let len = rng.random_range(self.min_len..=self.max_len);
        (0..len).map(|_| self.element.generate(rng)).collect()
    }

    fn shrink(&self, value: &Self::Value) -> Vec<Self::Value> {
        let mut candidates = Vec::new();
        if value.len() > self.min_len {
            for i in 0..value.len() {
                let mut v = value.clone();
                v.remove(i);
                candidates.push(v);
            }
        }
        for (i, x) in value.iter().enumerate() {
            for y in self.element.shrink(x) {
                let mut v = value.clone();
                v[i] = y;
                candidates.push(v);
            }
        }
        candidates
    }
}

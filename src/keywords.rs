//! Candidate topics and the randomness used to pick among them.
//!
//! Randomness goes through [`RandomSource`] so the keyword and the startup
//! delay can be scripted in tests.

use rand::{Rng, rng};
use std::time::Duration;
use tracing::info;

/// Topics the site writes about. One is chosen per run.
pub const KEYWORDS: &[&str] = &[
    "jasa pembuatan website",
    "cara membuat website bisnis",
    "harga pembuatan website toko online",
    "jasa seo murah",
    "tips optimasi seo on page",
    "cara meningkatkan kecepatan website",
    "manfaat website untuk umkm",
    "perbedaan hosting dan domain",
    "cara memilih hosting terbaik",
    "desain website responsif",
    "strategi digital marketing untuk pemula",
    "cara membuat landing page yang menjual",
];

/// Source of the two random choices a run makes.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform whole-second duration in `0..=max`.
    fn delay(&mut self, max: Duration) -> Duration;
}

/// [`RandomSource`] backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&mut self, len: usize) -> usize {
        rng().random_range(0..len)
    }

    fn delay(&mut self, max: Duration) -> Duration {
        Duration::from_secs(rng().random_range(0..=max.as_secs()))
    }
}

/// Pick one keyword uniformly from `candidates`.
pub fn select_keyword<'a, R: RandomSource>(random: &mut R, candidates: &[&'a str]) -> &'a str {
    let i = random.index(candidates.len()).min(candidates.len() - 1);
    let keyword = candidates[i];
    info!(keyword, index = i, pool = candidates.len(), "Selected keyword");
    keyword
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Replays fixed answers in order; falls back to 0 once exhausted.
    #[derive(Debug, Default)]
    pub struct ScriptedRandom {
        pub indices: VecDeque<usize>,
        pub delays: VecDeque<Duration>,
    }

    impl ScriptedRandom {
        pub fn new(indices: &[usize], delays: &[Duration]) -> Self {
            Self {
                indices: indices.iter().copied().collect(),
                delays: delays.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn index(&mut self, _len: usize) -> usize {
            self.indices.pop_front().unwrap_or(0)
        }

        fn delay(&mut self, _max: Duration) -> Duration {
            self.delays.pop_front().unwrap_or(Duration::ZERO)
        }
    }
}

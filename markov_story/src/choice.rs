use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Picks one of `len` options with uniform probability.
pub trait Chooser {
    /// `len` is always at least 1; the result must be in `0..len`.
    fn choose_index(&mut self, len: usize) -> usize;
}

#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: SmallRng,
}

impl RandomChooser {
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Chooser for RandomChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping each one into `0..len`.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    picks: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedChooser {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, pos: 0 }
    }
}

#[cfg(test)]
impl Chooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        return pick % len;
    }
}

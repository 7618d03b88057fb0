use super::*;

/// Purely random generation: picks a mine count from [`MINE_COUNT_RANGE`], then a position
/// for every mine with both coordinates drawn from [`MINE_COORD_RANGE`].
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self) -> Vec<Position> {
        use rand::prelude::*;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let count = rng.random_range(MINE_COUNT_RANGE);
        log::debug!("Generating {} mines from seed {}", count, self.seed);

        (0..count)
            .map(|_| {
                let row = rng.random_range(MINE_COORD_RANGE);
                let col = rng.random_range(MINE_COORD_RANGE);
                Position::new(row, col)
            })
            .collect()
    }
}

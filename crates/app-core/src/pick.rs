use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TableError {
    #[error("weighted table needs at least one entry")]
    Empty,
    #[error("weight {0} is not a positive finite number")]
    BadWeight(f32),
}

/// Cumulative-weight lookup table: one uniform draw selects an entry.
///
/// Weights need not sum to 1; draws are proportional to weight.
#[derive(Clone, Debug)]
pub struct WeightedTable<T> {
    entries: SmallVec<[(f32, T); 4]>,
    total: f32,
}

impl<T> WeightedTable<T> {
    pub fn new(weighted: impl IntoIterator<Item = (f32, T)>) -> Result<Self, TableError> {
        let mut entries: SmallVec<[(f32, T); 4]> = SmallVec::new();
        let mut total = 0.0_f32;
        for (weight, item) in weighted {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(TableError::BadWeight(weight));
            }
            total += weight;
            entries.push((total, item));
        }
        if entries.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { entries, total })
    }

    pub fn pick<R: Rng>(&self, rng: &mut R) -> &T {
        let x = rng.gen::<f32>() * self.total;
        for (cumulative, item) in &self.entries {
            if x < *cumulative {
                return item;
            }
        }
        // x can round up onto the total itself; fall back to the last entry
        &self.entries[self.entries.len() - 1].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

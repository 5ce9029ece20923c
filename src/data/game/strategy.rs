//! # Mixed strategies
use std::ops::Index;
use std::slice::Iter;

use crate::data::number_types::traits::Field;

/// A probability distribution over the pure strategies of one player.
///
/// Entries are non-negative and sum to one, up to rounding errors when working with floats.
#[derive(Clone, Debug, PartialEq)]
pub struct MixedStrategy<F> {
    probabilities: Vec<F>,
}

impl<F: Field> MixedStrategy<F> {
    /// Wrap a vector of probabilities, one per pure strategy.
    pub fn new(probabilities: Vec<F>) -> Self {
        debug_assert!(!probabilities.is_empty());

        Self { probabilities }
    }

    /// The probability of each pure strategy, in order.
    pub fn probabilities(&self) -> &[F] {
        &self.probabilities
    }

    /// Probability with which pure strategy `i` is played.
    pub fn get(&self, i: usize) -> Option<&F> {
        self.probabilities.get(i)
    }

    /// Number of pure strategies.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Whether there are no pure strategies; never true for a solved game.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Iterate over the probabilities.
    pub fn iter(&self) -> Iter<'_, F> {
        self.probabilities.iter()
    }

    /// Indices of the pure strategies that are played with a non-zero probability.
    pub fn support(&self) -> Vec<usize> {
        self.probabilities.iter()
            .enumerate()
            .filter(|(_, probability)| !probability.is_zero())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether only a single pure strategy is played.
    pub fn is_pure(&self) -> bool {
        self.support().len() == 1
    }

    /// Sum of all probabilities, should be (close to) one.
    pub fn total(&self) -> F {
        self.probabilities.iter().fold(F::zero(), |total, probability| total + probability)
    }

    /// Consume the strategy, returning the probabilities.
    pub fn into_inner(self) -> Vec<F> {
        self.probabilities
    }
}

impl<F> Index<usize> for MixedStrategy<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        &self.probabilities[index]
    }
}

impl<'a, F: Field> IntoIterator for &'a MixedStrategy<F> {
    type Item = &'a F;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

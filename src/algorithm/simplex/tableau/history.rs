//! # Tableau history
//!
//! Every tableau visited by the simplex method is kept, in order, such that a caller can show how
//! the optimum was reached.
use std::ops::Index;
use std::slice::Iter;

use crate::algorithm::simplex::tableau::Tableau;

/// Ordered, append-only collection of tableaus.
///
/// Index `0` holds the initial tableau, the last index the most recent (eventually the terminal)
/// one. Stored tableaus are never modified or removed.
#[derive(Clone, Debug, PartialEq)]
pub struct TableauHistory<F> {
    tableaus: Vec<Tableau<F>>,
}

impl<F> TableauHistory<F> {
    /// Start a history with the initial tableau.
    pub fn new(initial: Tableau<F>) -> Self {
        Self { tableaus: vec![initial] }
    }

    /// Add a tableau at the end, taking ownership of it.
    pub fn push(&mut self, tableau: Tableau<F>) {
        self.tableaus.push(tableau);
    }

    /// Number of tableaus stored, at least one.
    pub fn len(&self) -> usize {
        self.tableaus.len()
    }

    /// Always `false`, the initial tableau is present from creation.
    pub fn is_empty(&self) -> bool {
        self.tableaus.is_empty()
    }

    /// Number of pivots that lead from the initial tableau to the last one.
    pub fn nr_pivots(&self) -> usize {
        self.tableaus.len() - 1
    }

    /// Tableau at position `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&Tableau<F>> {
        self.tableaus.get(index)
    }

    /// The tableau that the history was started with.
    pub fn initial(&self) -> &Tableau<F> {
        &self.tableaus[0]
    }

    /// The most recently added tableau.
    pub fn terminal(&self) -> &Tableau<F> {
        &self.tableaus[self.tableaus.len() - 1]
    }

    /// Iterate over the tableaus from the initial to the terminal one.
    pub fn iter(&self) -> Iter<'_, Tableau<F>> {
        self.tableaus.iter()
    }
}

impl<F> Index<usize> for TableauHistory<F> {
    type Output = Tableau<F>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tableaus[index]
    }
}

impl<'a, F> IntoIterator for &'a TableauHistory<F> {
    type Item = &'a Tableau<F>;
    type IntoIter = Iter<'a, Tableau<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F> IntoIterator for TableauHistory<F> {
    type Item = Tableau<F>;
    type IntoIter = std::vec::IntoIter<Tableau<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tableaus.into_iter()
    }
}

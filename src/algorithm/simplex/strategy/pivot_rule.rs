//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Field;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made independent
/// of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of a variable column with a negative coefficient in the objective row together
    /// with that coefficient, or `None` if there is no such column and the tableau is optimal.
    /// Negligible coefficients are not considered negative.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Whether increasing the variable of a column with this relative cost improves the objective.
fn is_profitable<F: Field>(cost: &F) -> bool {
    cost.is_negative() && !cost.is_negligible()
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl<F: Field> PivotRule<F> for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        tableau.objective_row()[..tableau.nr_variables()].iter()
            .enumerate()
            .find(|(_, cost)| is_profitable(*cost))
            .map(|(j, cost)| (j, cost.clone()))
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// When several columns share the most negative cost, the first one is chosen.
pub struct SteepestDescentAlongVariable;
impl<F: Field> PivotRule<F> for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut smallest: Option<(usize, &F)> = None;
        for (j, cost) in tableau.objective_row()[..tableau.nr_variables()].iter()
            .enumerate()
            .filter(|(_, cost)| is_profitable(*cost)) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { smallest = Some((j, cost)) }
        }

        smallest.map(|(j, cost)| (j, cost.clone()))
    }
}

//! # Representation of solved games
//!
//! Once the simplex method terminates with an optimal tableau, the strategies of both players and
//! the value of the game are derived from it. The tableaus that were visited are kept, such that
//! the caller can show how the solution was reached.
use crate::algorithm::simplex::PivotRecord;
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::simplex::tableau::history::TableauHistory;
use crate::data::game::strategy::MixedStrategy;
use crate::data::number_types::traits::Field;

/// Optimal strategies for both players, the value of the game and how they were computed.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSolution<F> {
    /// Every tableau produced, from the initial tableau through the optimal one.
    history: TableauHistory<F>,
    /// The pivot that produced each tableau after the initial one.
    pivots: Vec<PivotRecord>,
    /// Optimal strategy of player 1 (choosing a row of the payoff matrix).
    player_one: MixedStrategy<F>,
    /// Optimal strategy of player 2 (choosing a column of the payoff matrix).
    player_two: MixedStrategy<F>,
    /// Expected payoff to player 1 when both players play optimally.
    value: F,
}

impl<F: Field> GameSolution<F> {
    /// Create a new `GameSolution` instance.
    ///
    /// A plain constructor.
    pub fn new(
        history: TableauHistory<F>,
        pivots: Vec<PivotRecord>,
        player_one: MixedStrategy<F>,
        player_two: MixedStrategy<F>,
        value: F,
    ) -> Self {
        debug_assert_eq!(history.len(), pivots.len() + 1);

        Self { history, pivots, player_one, player_two, value }
    }

    /// All tableaus, index `0` being the initial one.
    pub fn history(&self) -> &TableauHistory<F> {
        &self.history
    }

    /// The optimal tableau.
    pub fn terminal_tableau(&self) -> &Tableau<F> {
        self.history.terminal()
    }

    /// Row and column of each pivot, in the order they were performed.
    pub fn pivots(&self) -> &[PivotRecord] {
        &self.pivots
    }

    /// Number of pivots that were needed to reach the optimum.
    pub fn nr_pivots(&self) -> usize {
        self.pivots.len()
    }

    /// Optimal strategy of player 1, with a probability per row of the payoff matrix.
    pub fn player_one(&self) -> &MixedStrategy<F> {
        &self.player_one
    }

    /// Optimal strategy of player 2, with a probability per column of the payoff matrix.
    pub fn player_two(&self) -> &MixedStrategy<F> {
        &self.player_two
    }

    /// Value of the game to player 1.
    pub fn value(&self) -> &F {
        &self.value
    }
}

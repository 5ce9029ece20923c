//! # Tests that require a look inside the crate.
//!
//! Convention for function names in the `games` module: the name describes the structure of the
//! game, the function returns its payoff matrix for any number type.

/// Install a logger that writes into the test output, once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

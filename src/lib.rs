pub mod arena;
pub mod builder;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod util;

use crate::arena::ChainArena;
use crate::builder::ChainBuilder;
use crate::errors::ChainResult;

/// Builds the standard chain: sentinel head plus five data nodes valued 0..4.
///
/// # Returns
///
/// A `Result` containing the fully linked `ChainArena`, or
/// `ChainError::AllocationFailure` if any of the six allocations fails. On
/// failure every partially allocated node has already been released; the
/// caller never receives a partial chain.
pub fn build_chain() -> ChainResult<ChainArena> {
    ChainBuilder::new().build()
}

/// Collects the chain's payload values in order, sentinel excluded.
pub fn collect_values(chain: &ChainArena) -> Vec<i64> {
    chain.values()
}

/// Prints the chain's values to stdout, one decimal integer per line.
///
/// Traversal does not mutate the chain; an empty chain prints nothing.
pub fn print_values(chain: &ChainArena) {
    for value in chain.values() {
        println!("{}", value);
    }
}

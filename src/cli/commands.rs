use tracing::{debug, instrument};

use crate::builder::ChainBuilder;
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::print_values;

/// Builds the chain, then prints its values in order.
///
/// On allocation failure nothing reaches stdout; the error propagates to the
/// caller for reporting and exit-code mapping.
#[instrument(skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    debug!("debug level: {}", cli.debug);
    let chain = ChainBuilder::new().build()?;
    print_values(&chain);
    Ok(())
}

use crate::Cli;
use crate::CommandResult;

/// A `graphql` subcommand. Failures are reported through the returned
/// [`CommandResult`] rather than an `Err`.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

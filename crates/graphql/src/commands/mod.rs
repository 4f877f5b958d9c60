mod coerce;
mod schema_files;
mod validate;

#[cfg(test)]
mod tests;

use crate::Cli;
use crate::CommandResult;
use coerce::CoerceCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Materialize a GraphQL literal as a value of the given input type.
    Coerce(Box<CoerceCmd>),

    /// Check that a set of schema files define a consistent set of types.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Coerce(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

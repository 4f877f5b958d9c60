use crate::commands::schema_files::SchemaFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_value::types::GraphQLType;
use libgraphql_value::types::TypeRegistry;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[command(flatten)]
    schema_file_args: SchemaFileArgs,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let scan = self.schema_file_args.scan(&self.file_or_dir_paths);
        if !scan.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors: {:#?}",
                output_utils::RED_X,
                scan.errors,
            ));
        }

        let registry = match TypeRegistry::builder()
            .load_files(scan.file_paths.clone())
            .and_then(|builder| builder.build()) {
            Ok(registry) => registry,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors validating schema: {err}",
                output_utils::RED_X,
            )),
        };

        let defined_types: Vec<&GraphQLType> = registry.types()
            .values()
            .filter(|graphql_type| !graphql_type.as_scalar().is_some_and(|s| s.is_builtin()))
            .collect();
        let num_input_types = defined_types.iter()
            .filter(|graphql_type| graphql_type.is_input_type())
            .count();
        let num_default_values = defined_types.iter()
            .filter_map(|graphql_type| graphql_type.as_input_object())
            .flat_map(|inputobj_type| inputobj_type.fields().values())
            .filter(|field| !field.default_value().is_absent())
            .count();

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions ({} input types).\n",
                "  * Materialized {} input field default values.",
            ),
            output_utils::GREEN_CHECK,
            scan.file_paths.len(),
            scan.num_non_graphql_files,
            defined_types.len(),
            num_input_types,
            num_default_values,
        ))
    }
}

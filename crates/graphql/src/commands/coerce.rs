use crate::commands::schema_files::SchemaFileArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_value::ast::ValueNode;
use libgraphql_value::types::TypeRef;
use libgraphql_value::types::TypeRegistry;
use libgraphql_value::value::ResolvedValue;
use libgraphql_value::value::Variables;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CoerceCmd {
    #[command(flatten)]
    schema_file_args: SchemaFileArgs,

    #[arg(
        help="GraphQL files or directories containing GraphQL files which \
             define the types the literal may refer to. The built-in scalar \
             types are always available.",
        long="schema",
        value_name="PATH",
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="The input type to materialize the literal as (e.g. `[Point!]!`).",
        long="type",
        value_name="TYPE",
        value_parser=TypeRef::parse,
    )]
    type_ref: TypeRef,

    #[arg(
        help="A variable the literal may refer to, given as `NAME=LITERAL`. \
             The variable's literal is converted without an expected type.",
        long="var",
        value_name="NAME=LITERAL",
        value_parser=parse_var_arg,
    )]
    vars: Vec<(String, ValueNode)>,

    #[arg(
        allow_hyphen_values=true,
        help="The GraphQL value literal to materialize (e.g. `{x: 1, y: $y}`).",
        name="LITERAL",
        value_parser=ValueNode::parse,
    )]
    literal: ValueNode,
}
impl CoerceCmd {
    pub(crate) fn try_run(&self) -> anyhow::Result<ResolvedValue> {
        let scan = self.schema_file_args.scan(&self.schema_paths);
        if let Some(err) = scan.errors.into_iter().next() {
            return Err(err.context("Failed to scan the --schema paths"));
        }

        let registry = TypeRegistry::builder()
            .load_files(scan.file_paths)
            .and_then(|builder| builder.build())
            .context("Failed to load the schema")?;

        let variables: Variables = self.vars.iter()
            .map(|(var_name, value_node)| (
                var_name.to_string(),
                ResolvedValue::from_ast_untyped(value_node, None),
            ))
            .collect();

        log::debug!(
            "Materializing a {} literal as `{}` with {} variables.",
            self.literal.kind(),
            self.type_ref,
            variables.len(),
        );
        let resolved = registry.value_from_ast(
            Some(&self.literal),
            &self.type_ref,
            Some(&variables),
        ).with_context(|| format!("Failed to materialize a `{}` value", self.type_ref))?;

        Ok(resolved)
    }
}

#[inherent::inherent]
impl RunnableCommand for CoerceCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.try_run() {
            Ok(resolved) => CommandResult::stdout(format_args!("{resolved}")),
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

fn parse_var_arg(arg: &str) -> anyhow::Result<(String, ValueNode)> {
    let (var_name, literal) = arg.split_once('=')
        .with_context(|| format!("Expected `NAME=LITERAL`, but got `{arg}`"))?;
    let var_name = var_name.trim().trim_start_matches('$');
    anyhow::ensure!(!var_name.is_empty(), "Variable name is empty in `{arg}`");

    let value_node = ValueNode::parse(literal)
        .with_context(|| format!("Invalid literal for variable `${var_name}`"))?;
    Ok((var_name.to_string(), value_node))
}

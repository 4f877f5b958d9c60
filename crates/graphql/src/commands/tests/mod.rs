use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::path::PathBuf;

async fn run(args: &[&str]) -> CommandResult {
    let mut cli = Cli::try_parse_from(
        std::iter::once("graphql").chain(args.iter().copied()),
    ).unwrap();
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}

/// Write `files` into a fresh directory under the system temp dir.
fn write_schema_dir(dir_name: &str, files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "graphql-cli-{dir_name}-{}",
        std::process::id(),
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    for (file_name, content) in files {
        std::fs::write(dir.join(file_name), content).unwrap();
    }
    dir
}

mod coerce {
    use super::*;

    #[tokio::test]
    async fn builtin_scalar_list() {
        let result = run(&["coerce", "--type", "[Int]", "5"]).await;
        assert_eq!(result.stdout.as_deref(), Some("[5]"));
        assert_eq!(result.stderr, None);
    }

    #[tokio::test]
    async fn negative_int_literal() {
        let result = run(&["coerce", "--type", "Int!", "-5"]).await;
        assert_eq!(result.stdout.as_deref(), Some("-5"));
    }

    #[tokio::test]
    async fn variables() {
        let result = run(&[
            "coerce",
            "--type", "[Int]",
            "--var", "n=3",
            "--var", "$unused={a: 1}",
            "[$n, 4, $unset]",
        ]).await;
        assert_eq!(result.stdout.as_deref(), Some("[3, 4, <absent>]"));
    }

    #[tokio::test]
    async fn unparseable_literal_is_absent() {
        let result = run(&["coerce", "--type", "Int", "\"five\""]).await;
        assert_eq!(result.stdout.as_deref(), Some("<absent>"));
    }

    #[tokio::test]
    async fn undefined_type() {
        let result = run(&["coerce", "--type", "Point", "{x: 1}"]).await;
        assert_eq!(result.stdout, None);
        assert!(result.stderr.unwrap().contains("`Point`"));
    }

    #[tokio::test]
    async fn schema_defined_types() {
        let schema_dir = write_schema_dir("coerce", &[
            ("point.graphql", "input Point { x: Int = 0, y: Int = 0 }"),
            ("color.graphqls", "enum Color { RED GREEN }"),
        ]);
        let schema_dir = schema_dir.to_string_lossy();
        let result = run(&[
            "coerce",
            "--schema", schema_dir.as_ref(),
            "--type", "[Point!]!",
            "{y: 2, z: 3}",
        ]).await;
        assert_eq!(result.stdout.as_deref(), Some("[{x: 0, y: 2}]"));
    }

    #[test]
    fn invalid_arguments() {
        let parse = |args: &[&str]| Cli::try_parse_from(
            std::iter::once("graphql").chain(args.iter().copied()),
        );
        assert!(parse(&["coerce", "--type", "[Int", "5"]).is_err());
        assert!(parse(&["coerce", "--type", "Int", "{x: "]).is_err());
        assert!(parse(&["coerce", "--type", "Int", "--var", "n", "5"]).is_err());
        assert!(parse(&["coerce", "--type", "Int", "--var", "=5", "5"]).is_err());
        assert!(parse(&["coerce", "5"]).is_err());
    }
}

mod validate {
    use super::*;

    #[tokio::test]
    async fn valid_schema_dir() {
        let schema_dir = write_schema_dir("validate-ok", &[
            ("a.graphql", "input A { b: B = {} }\ntype Query { a(arg: A): Int }"),
            ("b.graphql", "input B { n: Int = 1 }"),
            ("README.md", "Not a schema."),
        ]);
        let result = run(&["validate", schema_dir.to_string_lossy().as_ref()]).await;
        let stdout = result.stdout.unwrap();
        assert!(stdout.contains("Analyzed 2 files."), "{stdout}");
        assert!(stdout.contains("Skipped 1 non-graphql files."), "{stdout}");
        assert!(stdout.contains("Validated 3 type definitions (2 input types)."), "{stdout}");
        assert!(stdout.contains("Materialized 2 input field default values."), "{stdout}");
    }

    #[tokio::test]
    async fn invalid_schema_dir() {
        let schema_dir = write_schema_dir("validate-err", &[
            ("a.graphql", "input A { b: Missing }"),
        ]);
        let result = run(&["validate", schema_dir.to_string_lossy().as_ref()]).await;
        assert_eq!(result.stdout, None);
        assert!(result.stderr.unwrap().contains("`Missing`"));
    }
}

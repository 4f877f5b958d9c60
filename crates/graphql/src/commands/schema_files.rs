use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Command-line arguments naming the schema files a command loads.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaFileArgs {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,
}
impl SchemaFileArgs {
    /// Find all GraphQL files recursively located at or under each of
    /// `file_or_dir_paths`.
    pub(crate) fn scan(&self, file_or_dir_paths: &[PathBuf]) -> SchemaFileScan {
        let mut scan = SchemaFileScan {
            errors: vec![],
            file_paths: vec![],
            num_non_graphql_files: 0,
        };

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
        for path in file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        scan.errors.push(err.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let has_graphql_ext = entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
                if !has_graphql_ext {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                    scan.num_non_graphql_files += 1;
                    continue
                }

                log::trace!("Found file at {entry_path:#?}.");
                match std::fs::canonicalize(entry_path) {
                    Ok(file_path) => scan.file_paths.push(file_path),
                    Err(err) => scan.errors.push(err.into()),
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file loaded as a GraphQL file, even if
        // its file extension doesn't match one of the `graphql_file_exts`.
        if scan.file_paths.is_empty()
            && let [first_arg_path] = file_or_dir_paths
            && first_arg_path.is_file() {
            match std::fs::canonicalize(first_arg_path) {
                Ok(file_path) => {
                    log::warn!(
                        "Proceeding to load {file_path:#?} even though it \
                        doesn't match any of the --graphql-file-exts ({}).",
                        graphql_file_exts.iter()
                            .map(|ext| format!("`.{ext}`"))
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    scan.num_non_graphql_files = scan.num_non_graphql_files.saturating_sub(1);
                    scan.file_paths.push(file_path);
                },
                Err(err) => scan.errors.push(err.into()),
            }
        }

        log::debug!("Found {} GraphQL files.", scan.file_paths.len());
        scan
    }
}

#[derive(Debug)]
pub(crate) struct SchemaFileScan {
    pub errors: Vec<anyhow::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_non_graphql_files: usize,
}

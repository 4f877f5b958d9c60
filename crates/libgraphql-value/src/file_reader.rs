use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read the schema document at `file_path` as UTF-8 text.
pub(crate) fn read_content(file_path: &Path) -> Result<String> {
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| {
        ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        }
    })?;

    String::from_utf8(bytes).map_err(|err| {
        ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err: err.utf8_error(),
        }
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ReadContentError {
    #[error("Schema file {file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::str::Utf8Error,
    },

    #[error("Failed to read schema file {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
                | Self::FileReadError { file_path, .. }
                | Self::PathIsNotAFile(file_path) => file_path.as_path(),
        }
    }
}
// `std::io::Error` has no equality, so errors compare by kind and path.
impl std::cmp::PartialEq for ReadContentError {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.file_path() == other.file_path()
    }
}

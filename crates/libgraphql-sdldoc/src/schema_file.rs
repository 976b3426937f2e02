use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadSchemaError>;

/// Reads a schema document from disk as UTF-8 text.
pub fn read_schema_file(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadSchemaError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadSchemaError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    decode_schema_bytes(file_path, bytes)
}

/// Decodes schema bytes read from `file_path` as UTF-8 text.
pub fn decode_schema_bytes(file_path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|err| ReadSchemaError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum ReadSchemaError {
    #[error("Schema file {file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read schema file {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Schema path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
impl ReadSchemaError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileDecodeError { file_path, .. }
                | Self::FileReadError { file_path, .. }
                | Self::PathIsNotAFile(file_path) => file_path.as_path(),
        }
    }
}

/// Errors are equal when they concern the same path and fail the same way.
/// I/O errors are compared by [`std::io::ErrorKind`].
impl PartialEq for ReadSchemaError {
    fn eq(&self, other: &Self) -> bool {
        self.file_path() == other.file_path()
            && match (self, other) {
                (
                    Self::FileDecodeError { err: lhs, .. },
                    Self::FileDecodeError { err: rhs, .. },
                ) => lhs == rhs,
                (
                    Self::FileReadError { err: lhs, .. },
                    Self::FileReadError { err: rhs, .. },
                ) => lhs.kind() == rhs.kind(),
                (Self::PathIsNotAFile(_), Self::PathIsNotAFile(_)) => true,
                _ => false,
            }
    }
}

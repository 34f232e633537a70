use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use cnf_split::types::err::ErrorKind;

pub(super) enum ReadError {
    FailedToOpen,
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen => write!(f, "Failed to open file."),
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
        }
    }
}

impl From<ErrorKind> for ReadError {
    fn from(err: ErrorKind) -> Self {
        ReadError::ParseError(err)
    }
}

/// A buffered reader of the file at `path`, decompressed if the file is xz compressed and the `xz` feature is enabled.
pub(super) fn open(path: &Path) -> Result<Box<dyn BufRead>, ReadError> {
    eprintln!("c Reading from {path:?}");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            Ok(Box::new(BufReader::new(xz2::read::XzDecoder::new(file))))
        }

        _ => Ok(Box::new(BufReader::new(file))),
    }
}

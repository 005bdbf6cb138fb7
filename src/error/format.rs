use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unable to locate updater for provided type ({format}).")]
    UnknownFormat { format: String },

    #[error(
        "Unsupported file ({filename}) provided for bumping.\n Please specify the updater `type` or use a custom `updater`."
    )]
    UnsupportedFile { filename: String },

    #[error("updater for type ({format}) is already registered")]
    DuplicateFormat { format: String },
}

impl FormatError {
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat {
            format: format.into(),
        }
    }

    pub fn unsupported_file(filename: impl Into<String>) -> Self {
        Self::UnsupportedFile {
            filename: filename.into(),
        }
    }

    pub fn duplicate_format(format: impl Into<String>) -> Self {
        Self::DuplicateFormat {
            format: format.into(),
        }
    }
}

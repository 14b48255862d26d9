use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum SceneErrors {
    InvalidParameter(String),
    InputFormatError(String),
    IoError(io::Error),
    CsvError(csv::Error),
    ImageError(image::ImageError),
}

impl SceneErrors {
    /// True for every failure caused by a malformed source table, whether it was
    /// detected by the loader itself or by the csv crate underneath it.
    pub fn is_input_format(&self) -> bool {
        matches!(
            self,
            SceneErrors::InputFormatError(_) | SceneErrors::CsvError(_)
        )
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SceneErrors::InvalidParameter(_))
    }
}

impl fmt::Display for SceneErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneErrors::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SceneErrors::InputFormatError(msg) => write!(f, "Input format error: {}", msg),
            SceneErrors::IoError(e) => write!(f, "I/O error: {}", e),
            SceneErrors::CsvError(e) => write!(f, "CSV parsing error: {}", e),
            SceneErrors::ImageError(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl Error for SceneErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SceneErrors::IoError(e) => Some(e),
            SceneErrors::CsvError(e) => Some(e),
            SceneErrors::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for SceneErrors {
    fn from(err: io::Error) -> Self {
        SceneErrors::IoError(err)
    }
}

impl From<csv::Error> for SceneErrors {
    fn from(err: csv::Error) -> Self {
        SceneErrors::CsvError(err)
    }
}

impl From<image::ImageError> for SceneErrors {
    fn from(err: image::ImageError) -> Self {
        SceneErrors::ImageError(err)
    }
}

pub type Result<T> = std::result::Result<T, SceneErrors>;

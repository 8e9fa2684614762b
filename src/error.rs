use std::{io,fmt};
use std::convert::From;


pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    IO(io::Error),
    CSV(csv::Error),
    JSON(serde_json::Error),
    Reqwest(reqwest::Error),
    HttpError(reqwest::StatusCode),
    SourceUnavailable(String, Box<Error>),
    Schema(String),
    SingularFit(String),
    Render(String, Box<Error>),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
	Self::IO(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
	Self::CSV(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
	Self::JSON(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
	Self::Reqwest(err)
    }
}


impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match self {
	    Self::IO(err) => write!(f, "I/O error: {}", err),
	    Self::CSV(err) => write!(f, "CSV error: {}", err),
	    Self::JSON(err) => write!(f, "JSON error: {}", err),
	    Self::Reqwest(err) => write!(f, "Request error: {}", err),
	    Self::HttpError(err) => write!(f, "HTTP error: {}", err),
	    Self::SourceUnavailable(url, err) => write!(f, "Source unavailable ({}): {}", url, err),
	    Self::Schema(msg) => write!(f, "Unexpected table shape: {}", msg),
	    Self::SingularFit(msg) => write!(f, "Singular trend fit: {}", msg),
	    Self::Render(group, err) => write!(f, "Failed to render {}: {}", group, err),
	}
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
	match self {
	    Self::IO(err) => Some(err),
	    Self::CSV(err) => Some(err),
	    Self::JSON(err) => Some(err),
	    Self::Reqwest(err) => Some(err),
	    Self::SourceUnavailable(_, err) | Self::Render(_, err) => Some(err.as_ref()),
	    Self::HttpError(_) | Self::Schema(_) | Self::SingularFit(_) => None,
	}
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid regular expression '{pattern}'")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

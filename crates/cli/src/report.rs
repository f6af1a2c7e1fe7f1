use std::error;
use std::fmt;

pub type Report<T> = Result<T, Error>;

type Source = Box<dyn error::Error + Send + Sync>;

#[derive(Debug)]
pub struct Error {
    source: Option<Source>,
    message: String,
}

impl Error {
    pub fn new<U, M>(source: U, message: M) -> Self
    where
        U: Into<Source>,
        M: Into<String>,
    {
        Self {
            source: Some(source.into()),
            message: message.into(),
        }
    }

    pub fn message<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            source: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

pub trait ErrorExt<T, E> {
    fn message(self, message: &str) -> Result<T, Error>
    where
        E: Into<Source>;

    fn with_message<F, M>(self, f: F) -> Result<T, Error>
    where
        E: Into<Source>,
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ErrorExt<T, E> for Result<T, E> {
    fn message(self, message: &str) -> Result<T, Error>
    where
        E: Into<Source>,
    {
        self.map_err(|err| Error::new(err, message))
    }

    fn with_message<F, M>(self, f: F) -> Result<T, Error>
    where
        E: Into<Source>,
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|err| Error::new(err, f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_source() {
        let err: Result<(), _> = "x".parse::<u8>().map(drop);
        let err = err.message("failed to parse").unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to parse: invalid digit found in string"
        );
        assert_eq!(Error::message("plain").to_string(), "plain");
    }
}

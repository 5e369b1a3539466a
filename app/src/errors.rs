
use failure::{Backtrace, Context, Fail};
use std::fmt::Display;
use std::fmt;

use logo_png::png::errors::PngError;

pub type AppResult<T> = Result<T, Error>;



#[derive(Fail, Debug)]
pub enum ErrorKind {
    #[fail(display = "PNG error")]
    Png,
}

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}


impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl From<PngError> for Error {
    fn from(error: PngError) -> Error {
        Error {
            inner: error.context(ErrorKind::Png),
        }
    }
}

/*
 * emolib - error module
 *
 * This file is part of emolib.
 *
 * emolib is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * emolib is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with emolib. If not, see <http://www.gnu.org/licenses/>.
 */

/*!
 * An error object for `emolib`.
 *
 * The conversion core itself is infallible by design: unknown aliases and
 * malformed references degrade to pass-through. Errors only surface from
 * catalog loading and from explicit precondition-checked constructors.
 */

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::result;
use std::sync::Arc;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct Error {
    pub summary: Option<Cow<'static, str>>,
    pub details: Cow<'static, str>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    pub fn new<M>(msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        Error {
            summary: None,
            details: msg.into(),
            source: None,
        }
    }

    pub fn set_summary<M>(mut self, summary: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        self.summary = Some(summary.into());
        self
    }

    pub fn set_source(
        mut self,
        new_val: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Error {
        self.source = new_val;
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(summary) = self.summary.as_ref() {
            writeln!(f, "Summary: {}", summary)?;
        }
        write!(f, "{}", self.details)?;
        if let Some(source) = self.source.as_ref() {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|s| &(*(*s)) as _)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(kind: io::Error) -> Error {
        Error::new(kind.to_string()).set_source(Some(Arc::new(kind)))
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(kind: serde_json::Error) -> Error {
        Error::new(kind.to_string()).set_source(Some(Arc::new(kind)))
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(kind: &str) -> Error {
        Error::new(kind.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(kind: String) -> Error {
        Error::new(kind)
    }
}

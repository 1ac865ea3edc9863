//! Moderately simple declaration-first command line arguments parser.
//!
//! Declare named arguments up front, parse the process's argument vector
//! against them, then read typed values back through the handles handed out
//! at declaration time:
//!
//! ```
//! use declargs::{Arg, ArgParser};
//!
//! fn main() -> declargs::Result<()> {
//!     let mut args = ArgParser::new();
//!     let verbose = args.add(Arg::flag("v", "verbose", "print more"))?;
//!     let jobs = args.add(Arg::value("j", "jobs", "worker count").default_value(4u32))?;
//!
//!     args.parse(["prog", "--jobs", "8", "-v"])?;
//!
//!     assert!(*args.value(verbose));
//!     assert_eq!(*args.value(jobs), 8);
//!     assert!(args.is_set(jobs));
//!     Ok(())
//! }
//! ```
//!
//! Three kinds of argument are supported: flags (`true` when named), value
//! arguments (name must be followed by a value token, optionally defaulted),
//! and implicit arguments (name alone substitutes a declared value, a
//! following token overrides it). Tokens that match no declared name are
//! ignored, and when a name matches more than once the last occurrence wins.

use std::fmt;

mod arg;
mod convert;
mod help;
mod parser;

pub use crate::{
    arg::{Arg, Visibility},
    convert::{ConversionError, Value},
    parser::{ArgId, ArgParser},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure raised by registration or parsing.
///
/// All variants abort the operation that raised them; the parser performs no
/// recovery and no rollback of declarations already updated by earlier
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A declaration was registered with both names empty.
    Unnamed,
    /// A value-taking argument's name appeared without a following value.
    MissingValue { arg: String },
    /// A supplied token failed conversion to the declared element type.
    InvalidValue { arg: String, token: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unnamed => write!(f, "an argument needs at least one name"),
            Error::MissingValue { arg } => write!(f, "expected a value for `{arg}`"),
            Error::InvalidValue { arg, token } => {
                write!(f, "can't parse `{arg}`: invalid value `{token}`")
            }
        }
    }
}

impl std::error::Error for Error {}

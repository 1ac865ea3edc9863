use std::any::Any;

use crate::{convert::Value, Error, Result};

/// Where a declaration shows up in the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
    /// Parsed like any other argument but listed in neither help section.
    Invisible,
}

/// A declaration under construction; hand it to [`crate::ArgParser::add`].
///
/// `T` is the element type the argument carries and is fixed for the
/// lifetime of the declaration.
#[derive(Clone)]
pub struct Arg<T> {
    pub(crate) short: String,
    pub(crate) long: String,
    pub(crate) description: String,
    pub(crate) visibility: Visibility,
    pub(crate) kind: Kind<T>,
}

#[derive(Clone)]
pub(crate) enum Kind<T> {
    Flag { on: T },
    Value { default: Option<T> },
    Implicit { set_value: T, absent: Option<T> },
}

fn prefixed(name: &str, prefix: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("{prefix}{name}")
    }
}

impl Arg<bool> {
    /// A boolean switch: `false` unless its name appears, `true` when it
    /// does. Never consumes a following token.
    pub fn flag(short: &str, long: &str, description: &str) -> Arg<bool> {
        Arg::new(short, long, description, Kind::Flag { on: true })
    }
}

impl<T: Value> Arg<T> {
    fn new(short: &str, long: &str, description: &str, kind: Kind<T>) -> Arg<T> {
        Arg {
            short: prefixed(short, "-"),
            long: prefixed(long, "--"),
            description: description.to_string(),
            visibility: Visibility::Visible,
            kind,
        }
    }

    /// An argument whose name must be followed by a value token whenever it
    /// appears.
    pub fn value(short: &str, long: &str, description: &str) -> Arg<T> {
        Arg::new(short, long, description, Kind::Value { default: None })
    }

    /// An argument that substitutes `set_value` when its name appears with
    /// no following value token.
    pub fn implicit(short: &str, long: &str, description: &str, set_value: T) -> Arg<T> {
        Arg::new(short, long, description, Kind::Implicit { set_value, absent: None })
    }

    /// The value the argument holds when its name never appears on the
    /// command line.
    ///
    /// For a value argument this is its default; for an implicit argument
    /// the absent-default. Flags ignore it, an absent flag is always
    /// `false`. Declaring a default makes the argument defined before any
    /// parsing happens.
    pub fn default_value(mut self, default: T) -> Arg<T> {
        match &mut self.kind {
            Kind::Flag { .. } => {}
            Kind::Value { default: slot } => *slot = Some(default),
            Kind::Implicit { absent, .. } => *absent = Some(default),
        }
        self
    }

    /// Lists the argument under `[[Hidden Arguments]]` instead of the
    /// visible section.
    pub fn hidden(mut self) -> Arg<T> {
        self.visibility = Visibility::Hidden;
        self
    }

    /// Keeps the argument out of the help listing entirely.
    pub fn invisible(mut self) -> Arg<T> {
        self.visibility = Visibility::Invisible;
        self
    }
}

/// A registered declaration plus its parse state.
pub(crate) struct ArgData<T> {
    short: String,
    long: String,
    description: String,
    visibility: Visibility,
    kind: Kind<T>,
    value: T,
    defined: bool,
    set: bool,
}

impl<T: Value> ArgData<T> {
    pub(crate) fn new(arg: Arg<T>) -> ArgData<T> {
        let (value, defined) = match &arg.kind {
            // a flag holds `false` until its name shows up
            Kind::Flag { .. } => (T::default(), true),
            Kind::Value { default: Some(v) } => (v.clone(), true),
            Kind::Value { default: None } => (T::default(), false),
            Kind::Implicit { absent: Some(v), .. } => (v.clone(), true),
            Kind::Implicit { absent: None, .. } => (T::default(), false),
        };
        ArgData {
            short: arg.short,
            long: arg.long,
            description: arg.description,
            visibility: arg.visibility,
            kind: arg.kind,
            value,
            defined,
            set: false,
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn is_defined(&self) -> bool {
        self.defined
    }

    pub(crate) fn is_set(&self) -> bool {
        self.set
    }

    fn convert(&self, token: &str) -> Result<T> {
        T::from_token(token).map_err(|err| Error::InvalidValue {
            arg: self.display_name(),
            token: err.into_token(),
        })
    }
}

/// Object-safe view of a declaration, what the registry stores and the help
/// renderer reads. Typed access goes back through `as_any`.
pub(crate) trait AnyArg {
    fn short(&self) -> &str;
    fn long(&self) -> &str;
    fn description(&self) -> &str;
    fn visibility(&self) -> Visibility;
    fn display_name(&self) -> String;
    fn default_text(&self) -> String;
    fn parse_token(&mut self, token: Option<&str>) -> Result<()>;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Value> AnyArg for ArgData<T> {
    fn short(&self) -> &str {
        &self.short
    }

    fn long(&self) -> &str {
        &self.long
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// `-s, --long` when both names exist, otherwise whichever is non-empty.
    fn display_name(&self) -> String {
        if !self.short.is_empty() && !self.long.is_empty() {
            format!("{}, {}", self.short, self.long)
        } else if !self.short.is_empty() {
            self.short.clone()
        } else {
            self.long.clone()
        }
    }

    fn default_text(&self) -> String {
        match &self.kind {
            Kind::Flag { .. } | Kind::Value { default: None } => String::new(),
            Kind::Value { default: Some(v) } => format!("={v}"),
            Kind::Implicit { set_value, .. } => format!("=arg(={set_value})"),
        }
    }

    /// Applies one occurrence of the argument's name; `token` is the
    /// following command line token, already reduced to `None` when it was
    /// missing, empty, or itself `-`-prefixed.
    fn parse_token(&mut self, token: Option<&str>) -> Result<()> {
        match &self.kind {
            Kind::Flag { on } => {
                self.value = on.clone();
                self.defined = true;
                self.set = true;
            }
            Kind::Value { .. } => match token {
                None => return Err(Error::MissingValue { arg: self.display_name() }),
                Some(token) => {
                    self.value = self.convert(token)?;
                    self.defined = true;
                    self.set = true;
                }
            },
            Kind::Implicit { set_value, .. } => match token {
                None => {
                    self.value = set_value.clone();
                    self.defined = true;
                }
                Some(token) => {
                    self.value = self.convert(token)?;
                    self.defined = true;
                    self.set = true;
                }
            },
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

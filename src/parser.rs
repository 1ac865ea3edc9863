use std::{collections::HashMap, env, fmt, marker::PhantomData};

use crate::{
    arg::{AnyArg, Arg, ArgData, Visibility},
    convert::Value,
    help, Error, Result,
};

/// Typed handle returned by [`ArgParser::add`], used to read one
/// declaration's value and state back after parsing.
///
/// A handle is only meaningful with the parser that minted it.
pub struct ArgId<T> {
    idx: usize,
    ty: PhantomData<fn() -> T>,
}

impl<T> Clone for ArgId<T> {
    fn clone(&self) -> ArgId<T> {
        *self
    }
}

impl<T> Copy for ArgId<T> {}

impl<T> fmt::Debug for ArgId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArgId").field(&self.idx).finish()
    }
}

/// The argument registry: owns every declaration, maps names to them, scans
/// argument vectors, and renders the help listing.
pub struct ArgParser {
    pub(crate) args: Vec<Box<dyn AnyArg>>,
    index: HashMap<String, usize>,
    pub(crate) visible: Vec<usize>,
    pub(crate) hidden: Vec<usize>,
}

impl ArgParser {
    pub fn new() -> ArgParser {
        ArgParser {
            args: Vec::new(),
            index: HashMap::new(),
            visible: Vec::new(),
            hidden: Vec::new(),
        }
    }

    /// Registers a declaration and returns the handle for reading it back.
    ///
    /// Fails with [`Error::Unnamed`] when both names are empty; nothing is
    /// stored in that case. Both prefixed names end up pointing at the same
    /// declaration; re-registering an existing name repoints that name at
    /// the newer declaration.
    pub fn add<T: Value>(&mut self, arg: Arg<T>) -> Result<ArgId<T>> {
        if arg.short.is_empty() && arg.long.is_empty() {
            return Err(Error::Unnamed);
        }
        let idx = self.args.len();
        let data = ArgData::new(arg);
        for name in [data.short(), data.long()] {
            if !name.is_empty() {
                self.index.insert(name.to_string(), idx);
            }
        }
        match data.visibility() {
            Visibility::Visible => self.visible.push(idx),
            Visibility::Hidden => self.hidden.push(idx),
            Visibility::Invisible => {}
        }
        self.args.push(Box::new(data));
        Ok(ArgId { idx, ty: PhantomData })
    }

    /// Parses a full argument vector.
    ///
    /// Element 0 is the program path and is always skipped, as are empty
    /// tokens and tokens matching no declared name. A matched name peeks at
    /// the following token; it counts as absent when there is none, it is
    /// empty, or it starts with `-`. The peeked value token is not consumed
    /// here, it simply matches no name on the next iteration.
    ///
    /// The first failing declaration aborts the pass; declarations already
    /// updated by earlier tokens keep their state.
    pub fn parse<I>(&mut self, argv: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let tokens: Vec<String> = argv.into_iter().map(|t| t.as_ref().to_string()).collect();
        for i in 1..tokens.len() {
            let token = tokens[i].as_str();
            if token.is_empty() {
                continue;
            }
            if let Some(&idx) = self.index.get(token) {
                let next = tokens
                    .get(i + 1)
                    .map(String::as_str)
                    .filter(|t| !t.is_empty() && !t.starts_with('-'));
                self.args[idx].parse_token(next)?;
            }
        }
        Ok(())
    }

    /// Parses the process's own argument vector.
    pub fn parse_env(&mut self) -> Result<()> {
        self.parse(env::args())
    }

    /// The declaration's current value: the element type's zero value until
    /// a default or a command line token supplies one.
    pub fn value<T: Value>(&self, id: ArgId<T>) -> &T {
        self.data(id).value()
    }

    /// True once the declaration holds a usable value, whether it came from
    /// a command line token or from a declared default.
    pub fn is_defined<T: Value>(&self, id: ArgId<T>) -> bool {
        self.data(id).is_defined()
    }

    /// True only when the value came from an actual command line token.
    /// Implies [`ArgParser::is_defined`].
    pub fn is_set<T: Value>(&self, id: ArgId<T>) -> bool {
        self.data(id).is_set()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Renders the aligned two-section help listing. The hidden section is
    /// included only when `show_hidden` is true and hidden declarations
    /// exist; invisible declarations never appear.
    pub fn help_message(&self, show_hidden: bool) -> String {
        help::render(self, show_hidden)
    }

    fn data<T: Value>(&self, id: ArgId<T>) -> &ArgData<T> {
        match self.args[id.idx].as_any().downcast_ref() {
            Some(data) => data,
            // ids are only minted by `add`, which fixes the element type
            None => unreachable!("ArgId used with a foreign parser"),
        }
    }
}

impl Default for ArgParser {
    fn default() -> ArgParser {
        ArgParser::new()
    }
}

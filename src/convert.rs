use std::fmt;

/// Error produced when a token cannot be interpreted as the target type.
///
/// Declarations wrap this into [`crate::Error::InvalidValue`] before it
/// reaches the parser's caller; it is public only so [`Value`] can be named
/// in downstream bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    token: String,
    ty: &'static str,
}

impl ConversionError {
    fn new(token: &str, ty: &'static str) -> ConversionError {
        ConversionError { token: token.to_string(), ty }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn into_token(self) -> String {
        self.token
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "can't convert `{}` to {}", self.token, self.ty)
    }
}

impl std::error::Error for ConversionError {}

mod sealed {
    pub trait Sealed {}
}

/// Element types an argument can carry.
///
/// The set is closed: primitive numbers, `bool`, and `String`. `bool`
/// accepts `true`/`1`/`false`/`0` case-insensitively; `String` accepts
/// anything; numbers go through `str::parse`, so a token with trailing
/// garbage like `12abc` is rejected rather than truncated to `12`.
pub trait Value: sealed::Sealed + Clone + Default + fmt::Display + 'static {
    fn from_token(token: &str) -> Result<Self, ConversionError>;
}

macro_rules! numeric_value {
    ($($t:ty)*) => {$(
        impl sealed::Sealed for $t {}
        impl Value for $t {
            fn from_token(token: &str) -> Result<$t, ConversionError> {
                token.parse().map_err(|_| ConversionError::new(token, stringify!($t)))
            }
        }
    )*};
}

numeric_value!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);

impl sealed::Sealed for bool {}
impl Value for bool {
    fn from_token(token: &str) -> Result<bool, ConversionError> {
        match token.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConversionError::new(token, "bool")),
        }
    }
}

impl sealed::Sealed for String {}
impl Value for String {
    fn from_token(token: &str) -> Result<String, ConversionError> {
        Ok(token.to_string())
    }
}

//! Message values and their normalization into printable tokens.
//!
//! Loggers accept heterogeneous arguments. Each one is converted into a
//! [`Message`] up front (see the [`messages!`](crate::messages) macro) and
//! turned into text only when an entry is committed.

use std::fmt;

use serde::Serialize;

/// One logged argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Plain text.
    Text(String),
    /// The message text of an error.
    Error(String),
    /// A structured value, printed as compact JSON.
    Structured(serde_json::Value),
    /// A value that could not be serialized, carried as its `Debug` text.
    Opaque(String),
    /// An explicit null.
    Null,
    /// An absent value.
    Undefined,
}

impl Message {
    /// Capture an error by its display text.
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::Error(err.to_string())
    }

    /// Capture any serializable value as structured JSON.
    ///
    /// Values that serialize to a plain string or to null are kept as text
    /// or [`Message::Null`].
    ///
    /// When serialization fails, a warning is emitted and the value is kept
    /// as its `Debug` representation instead.
    pub fn structured<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Self::from(json),
            Err(e) => {
                log::warn!("unable to serialize message: {e}");
                Self::Opaque(format!("{value:?}"))
            }
        }
    }

    /// The printable form of this message.
    pub fn to_token(&self) -> String {
        match self {
            Self::Text(s) if s.trim().is_empty() => "''".to_string(),
            Self::Text(s) | Self::Error(s) | Self::Opaque(s) => s.clone(),
            Self::Structured(value) => value.to_string(),
            Self::Null => "null".to_string(),
            Self::Undefined => "undefined".to_string(),
        }
    }
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Message {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Message {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for Message {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<serde_json::Value> for Message {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Structured(other),
        }
    }
}

impl<T: Into<Self>> From<Option<T>> for Message {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

macro_rules! message_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Message {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

message_from_display!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Build a `Vec<Message>` from heterogeneous arguments.
///
/// ```
/// use fly::{Message, messages};
///
/// let msgs = messages!["port", 8080, None::<&str>];
/// assert_eq!(msgs[1], Message::Text("8080".to_string()));
/// assert_eq!(msgs[2], Message::Undefined);
/// ```
#[macro_export]
macro_rules! messages {
    ($($msg:expr),* $(,)?) => {
        ::std::vec![$($crate::Message::from($msg)),*]
    };
}

/// Convert messages to tokens, upper-casing each when `force_caps` is set.
pub fn normalize(messages: &[Message], force_caps: bool) -> Vec<String> {
    messages
        .iter()
        .map(|msg| {
            let token = msg.to_token();
            if force_caps {
                token.to_uppercase()
            } else {
                token
            }
        })
        .collect()
}

/// Characters that open or close a wrapped section, plus whitespace.
fn is_wrapping(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}') || c.is_whitespace()
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ';' | ':' | '!' | '?')
}

fn is_tight(c: Option<char>) -> bool {
    c.is_some_and(|c| is_wrapping(c) || is_punctuation(c))
}

/// Join tokens with single spaces, except next to wrapping or punctuation
/// characters.
///
/// No space is inserted when the left token ends with, or the right token
/// starts with, one of `"'()[]{}`, whitespace, or `.,;:!?`.
pub fn smart_join<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if i > 0 {
            let prev = tokens[i - 1].as_ref();
            if !is_tight(prev.chars().last()) && !is_tight(token.chars().next()) {
                out.push(' ');
            }
        }
        out.push_str(token);
    }
    out
}

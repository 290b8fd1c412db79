use std::collections::BTreeMap;
use std::fmt;

/// A number that can appear as text or as an attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer value.
    Int(i64),
    /// An unsigned integer too large for [`Number::Int`].
    UInt(u64),
    /// A floating-point value.
    Float(f64),
}
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A plain data value describing (part of) an HTML tree.
///
/// Elements are sequences headed by a tag spec (`["p.lead", "Hello"]`), text is
/// a string or number, and the optional mapping directly after the tag spec holds
/// the attributes. [`Value::Raw`] and [`Value::Comment`] are only created through
/// [`crate::raw`] and [`crate::comment`] and are never escaped.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "serde_json::Value"))]
pub enum Value {
    /// Nothing; renders as nothing.
    #[default]
    Null,
    /// A boolean. `false` renders as nothing.
    Bool(bool),
    /// A number, rendered as text.
    Number(Number),
    /// A string, rendered as escaped text.
    String(String),
    /// A sequence: an element if headed by a tag spec, a list otherwise.
    Seq(Vec<Value>),
    /// A mapping; only meaningful as the attributes of an element.
    Map(BTreeMap<String, Value>),
    /// Pre-formatted HTML.
    Raw(String),
    /// The body of an HTML comment.
    Comment(String),
}

impl Value {
    /// Returns `true` if the value is [`Null`] or `false`.
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        matches!(self, Value::Null | Value::Bool(false))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Number(Number::Int(i64::from(i)))
                }
            }
        )*
    };
}
from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    match (i64::try_from(i), u64::try_from(i)) {
                        (Ok(i), _) => Value::Number(Number::Int(i)),
                        (_, Ok(u)) => Value::Number(Number::UInt(u)),
                        _ => Value::Number(Number::Float(i as f64)),
                    }
                }
            }
        )*
    };
}
from_wide_int!(u64, usize, isize);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Number(Number::Float(f64::from(x)))
    }
}
impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(Number::Float(x))
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}
impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}
impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().map(Into::into).collect())
    }
}

/// Prints the literal form of the value, e.g. `["li", "One"]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Raw(html) => write!(f, "raw({html:?})"),
            Value::Comment(text) => write!(f, "comment({text:?})"),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Number(Number::Int(i)),
                (None, Some(u)) => Value::Number(Number::UInt(u)),
                (None, None) => Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Build a [`Value::Seq`] from heterogeneous items.
///
/// Each item is converted with [`Value::from`], so strings, numbers, booleans,
/// options and other values can be mixed freely.
///
/// ```
/// use hiccup_html::{attrs, node, render};
///
/// let tree = node!["a.button", attrs! { "href" => "/" }, "Home"];
/// assert_eq!(render(&tree).unwrap(), r#"<a class="button" href="/">Home</a>"#);
/// ```
#[macro_export]
macro_rules! node {
    ($($item:expr),* $(,)?) => {
        $crate::Value::Seq(::std::vec![$($crate::Value::from($item)),*])
    };
}

/// Build a [`Value::Map`] of attributes from `key => value` pairs.
#[macro_export]
macro_rules! attrs {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = ::std::collections::BTreeMap::<::std::string::String, $crate::Value>::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )*
        $crate::Value::Map(map)
    }};
}

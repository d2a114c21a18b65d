//! Conditional class-name merging.
//!
//! Views build their `class` attributes from fragments that are only
//! sometimes present. [`cn`] flattens those fragments into one
//! space-separated string, keeping input order and dropping anything empty.

use std::borrow::Cow;

/// One class-name input.
///
/// Most callers never name this type: anything convertible into it can be
/// passed straight to [`cn`] or [`cn!`](crate::cn!).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue<'a> {
    /// Contributes nothing (`None`, `false`, `()`, zero).
    #[default]
    Skip,
    /// A class name, included unless empty.
    Name(Cow<'a, str>),
    /// A class name included only when the flag is set.
    When(Cow<'a, str>, bool),
    /// Nested values, flattened in order.
    List(Vec<ClassValue<'a>>),
}

impl ClassValue<'_> {
    fn write_into(&self, out: &mut String) {
        match self {
            ClassValue::Skip | ClassValue::When(_, false) => {}
            ClassValue::Name(name) | ClassValue::When(name, true) => push_class(out, name),
            ClassValue::List(items) => {
                for item in items {
                    item.write_into(out);
                }
            }
        }
    }
}

fn push_class(out: &mut String, name: &str) {
    if name.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(name);
}

/// Merge class-name values into a single space-separated string.
///
/// Strings are kept verbatim and in order, nested lists are flattened,
/// skipped values and empty strings vanish without leaving a separator.
/// Nothing is deduplicated.
///
/// ```
/// use thebon_ui::{ClassValue, cn};
///
/// let active = true;
/// let classes = cn([
///     ClassValue::from("btn"),
///     ClassValue::from(("btn-active", active)),
///     ClassValue::from(None::<&str>),
/// ]);
/// assert_eq!(classes, "btn btn-active");
/// ```
pub fn cn<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    let mut out = String::new();
    for input in inputs {
        input.into().write_into(&mut out);
    }
    out
}

/// Variadic form of [`cn`](fn@crate::cn) accepting mixed argument types.
///
/// ```
/// use thebon_ui::cn;
///
/// let disabled = false;
/// assert_eq!(
///     cn!("px-6", ("opacity-50", disabled), ["py-3", ""], Some("rounded-lg")),
///     "px-6 py-3 rounded-lg"
/// );
/// assert_eq!(cn!(), "");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::cn([$($crate::ClassValue::from($input)),+])
    };
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(name: &'a str) -> Self {
        ClassValue::Name(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(name: &'a String) -> Self {
        ClassValue::Name(Cow::Borrowed(name.as_str()))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(name: String) -> Self {
        ClassValue::Name(Cow::Owned(name))
    }
}

impl<'a> From<Cow<'a, str>> for ClassValue<'a> {
    fn from(name: Cow<'a, str>) -> Self {
        ClassValue::Name(name)
    }
}

/// Bare booleans carry no class name, so both values are skipped.
impl From<bool> for ClassValue<'_> {
    fn from(_: bool) -> Self {
        ClassValue::Skip
    }
}

impl From<()> for ClassValue<'_> {
    fn from(_: ()) -> Self {
        ClassValue::Skip
    }
}

/// Numbers render as their decimal form. Zero (and `NaN`) is falsy and
/// skipped.
macro_rules! impl_from_integer {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ClassValue<'_> {
                fn from(value: $ty) -> Self {
                    if value == 0 {
                        ClassValue::Skip
                    } else {
                        ClassValue::Name(Cow::Owned(value.to_string()))
                    }
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_float {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ClassValue<'_> {
                fn from(value: $ty) -> Self {
                    if value == 0.0 || value.is_nan() {
                        ClassValue::Skip
                    } else {
                        ClassValue::Name(Cow::Owned(value.to_string()))
                    }
                }
            }
        )+
    };
}

impl_from_float!(f32, f64);

impl<'a, S> From<(S, bool)> for ClassValue<'a>
where
    S: Into<Cow<'a, str>>,
{
    fn from((name, enabled): (S, bool)) -> Self {
        ClassValue::When(name.into(), enabled)
    }
}

impl<'a, T> From<Option<T>> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Skip, Into::into)
    }
}

impl<'a, T> From<Vec<T>> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T, const N: usize> From<[T; N]> for ClassValue<'a>
where
    T: Into<ClassValue<'a>>,
{
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

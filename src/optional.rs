//! Defines the [`Optional`] type

use std::fmt;

use log::trace;


/// Container which may or may not hold a value
///
/// The state is fixed at construction: an [`Optional`] is either present,
/// holding exactly one `T`, or empty. No method takes `&mut self`.
///
/// A present container is never treated as empty because of the value it
/// holds, so `Optional::of(0)` and `Optional::of(String::new())` are both
/// present.
///
/// The type is `repr(transparent)` over [`Option`], so it has the same
/// layout as the standard library type and benefits from the same niches.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[must_use]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Create a present container holding `value`
    ///
    /// The argument is always a value, so the result is always present.
    /// Note that this holds for nested options as well:
    /// `Optional::of(None::<u32>)` is a present container whose value is
    /// `None`. Use [`Optional::of_nullable`] or `Optional::from` when the
    /// value might be absent.
    pub fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Create an empty container
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Create a container from a reference that might be absent
    ///
    /// `None` gives an empty container, `Some(&v)` gives a present container
    /// holding a clone of `v`.
    pub fn of_nullable(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self(value.cloned())
    }

    /// Whether this container holds a value
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Whether this container holds no value
    ///
    /// Always the negation of [`Optional::is_present`].
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Get the held value along with a presence flag
    ///
    /// Returns `(value, true)` if present and `(T::default(), false)` if
    /// empty. Only the flag tells whether a value was present: a container
    /// holding the default value returns the same first element as an empty
    /// one.
    pub fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match &self.0 {
            Some(value) => (value.clone(), true),
            None => {
                trace!("get on empty optional, returning default value");
                (T::default(), false)
            }
        }
    }

    /// Get the held value or `fallback` if the container is empty
    ///
    /// The fallback is evaluated by the caller before this is called, even
    /// if it ends up unused.
    pub fn or_else(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match &self.0 {
            Some(value) => value.clone(),
            None => fallback,
        }
    }

    /// Compare two containers
    ///
    /// Two empty containers are equal. Two present containers are equal if
    /// their values are equal according to `T`'s [`PartialEq`]. A present
    /// and an empty container are never equal.
    ///
    /// This is the same relation as `==`.
    pub fn equals(&self, other: &Optional<T>) -> bool
    where
        T: PartialEq,
    {
        if self.is_present() != other.is_present() {
            trace!(
                "compare {} optional with {} optional",
                self.state(),
                other.state()
            );
        }
        self == other
    }

    /// Turn the container into a plain [`Option`]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    fn state(&self) -> &'static str {
        if self.is_present() {
            "present"
        } else {
            "empty"
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => {
                f.write_str("Optional[")?;
                // Width and precision apply to the value.
                fmt::Display::fmt(value, f)?;
                f.write_str("]")
            }
            None => f.write_str("Optional.empty"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::of(x),
            None => Self::empty(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

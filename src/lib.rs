//! A container that may or may not hold a value
//!
//! The [`Optional`] type makes the presence or absence of a value explicit.
//! It is constructed with [`Optional::of`], [`Optional::of_nullable`] or
//! [`Optional::empty`] and never changes afterwards: every method either
//! reads the container or produces a new one.
//!
//! ```
//! use optional::Optional;
//!
//! let opt = Optional::of("hello");
//! if opt.is_present() {
//!     let (value, _) = opt.get();
//!     assert_eq!(value, "hello");
//! }
//!
//! let empty = Optional::<&str>::empty();
//! assert_eq!(empty.or_else("default"), "default");
//! assert_eq!(empty.to_string(), "Optional.empty");
//! ```
mod optional;

pub use optional::Optional;

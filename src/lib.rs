//! An `Option` algebra whose combinator chains flow transparently across
//! asynchronous boundaries.
//!
//! The crate provides two cooperating types:
//!
//! * [`Option<T>`] — a two-variant container expressing optional presence
//!   of a value, with the usual combinator surface (`map`, `and_then`,
//!   `filter`, `or`, `or_else`, …), slot-swap mutators (`insert`,
//!   `replace`, `take`, `get_or_insert`), and zero-or-one-element
//!   iteration.
//! * [`FutureOption<T>`] — "an `Option`, eventually": a pending
//!   computation of an `Option<T>` that re-exposes the same combinator
//!   contract lazily, so a chain keeps reading fluently even when some of
//!   its links are asynchronous.
//!
//! Presence is determined solely by the construction path: `Some(0)`,
//! `Some(false)`, and `Some("")` are all present. Absence carries no
//! state.
//!
//! # Examples
//!
//! ```
//! use option_future::{None, Option, Some};
//!
//! fn half(n: i32) -> Option<i32> {
//!     if n % 2 == 0 { Some(n / 2) } else { None }
//! }
//!
//! assert_eq!(Some(8).and_then(half).and_then(half), Some(2));
//! assert_eq!(Some(6).and_then(half).and_then(half), None);
//! ```
//!
//! Crossing an async boundary mid-chain:
//!
//! ```
//! use futures::executor::block_on;
//! use option_future::Some;
//!
//! let chained = Some(12)
//!     .and_then_async(|n| async move { Some(n * 2) })
//!     .and_then(|n| async move { Some(n * 3) });
//! assert_eq!(block_on(chained), Some(72));
//! ```

#![warn(missing_docs)]

pub mod future;
pub mod option;

pub use self::future::FutureOption;
pub use self::option::Option;
pub use self::option::Option::{None, Some};

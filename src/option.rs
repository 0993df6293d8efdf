//! Optional presence of a value, without a null sentinel.
//!
//! [`Option<T>`] is a two-variant container: [`Some`] holds exactly one
//! value of type `T`, [`None`] holds nothing but its discriminant. Every
//! combinator either transforms the held value or short-circuits on
//! absence, so callers never inspect the discriminant by hand.
//!
//! The type deliberately shadows the prelude's `Option`; import it
//! explicitly where you want this algebra:
//!
//! ```
//! use option_future::{None, Option, Some};
//!
//! let name: Option<&str> = Some("flan");
//! assert_eq!(name.map(str::len), Some(4));
//! ```
//!
//! Mutating operations (`insert`, `replace`, `take`, `get_or_insert`)
//! treat `&mut Option<T>` as a reassignable slot: they swap which variant
//! the slot holds rather than mutating a variant in place.

use std::iter::FusedIterator;
use std::mem;
use std::option::Option as StdOption;
use std::option::Option::{None as StdNone, Some as StdSome};

use self::Option::{None, Some};

/// A value that is either present ([`Some`]) or absent ([`None`]).
///
/// `None` is declared first so the derived ordering sorts absence before
/// any present value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Option<T> {
    /////////////////////////////////////////////////////////////////////
    // Querying the contained value
    /////////////////////////////////////////////////////////////////////

    /// Returns `true` if the option holds a value.
    ///
    /// Presence is determined solely by the construction path; `Some` of
    /// a zero, an empty string, or `false` is still present.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// assert!(Some(0).is_some());
    /// assert!(!None::<u32>.is_some());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(*self, Some(_))
    }

    /// Returns `true` if the option holds no value.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /////////////////////////////////////////////////////////////////////
    // Adapters for working with references
    /////////////////////////////////////////////////////////////////////

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match *self {
            Some(ref v) => Some(v),
            None => None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match *self {
            Some(ref mut v) => Some(v),
            None => None,
        }
    }

    /////////////////////////////////////////////////////////////////////
    // Extracting the contained value
    /////////////////////////////////////////////////////////////////////

    /// Returns the contained value, panicking with `msg` if absent.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Some(v) => v,
            None => empty_option_failed(msg),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an `EmptyOption` fault if the option is absent; a
    /// value that does not exist cannot be extracted. The fault is not
    /// recoverable here and propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::Some;
    ///
    /// assert_eq!(Some("air").unwrap(), "air");
    /// ```
    ///
    /// ```should_panic
    /// use option_future::{None, Option};
    ///
    /// let x: Option<&str> = None;
    /// x.unwrap(); // EmptyOption
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Some(v) => v,
            None => empty_option_failed("called `Option::unwrap()` on an absent value"),
        }
    }

    /// Returns the contained value, or `default` if absent.
    ///
    /// The default is returned as-is, with no validation; `unwrap_or` is
    /// total. Arguments are eagerly evaluated — use [`Option::unwrap_or_else`]
    /// for a lazily computed fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// assert_eq!(Some("car").unwrap_or("bike"), "car");
    /// assert_eq!(None::<&str>.unwrap_or("bike"), "bike");
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(v) => v,
            None => default,
        }
    }

    /// Returns the contained value, or computes one from `f` if absent.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(v) => v,
            None => f(),
        }
    }

    /////////////////////////////////////////////////////////////////////
    // Transforming the contained value
    /////////////////////////////////////////////////////////////////////

    /// Maps an `Option<T>` to `Option<U>` by applying `f` to a contained
    /// value. Absence propagates and `f` is never invoked for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{Option, Some};
    ///
    /// let line = Some("12\n");
    /// let parsed: Option<usize> = line.map(|s| s.trim().len());
    /// assert_eq!(parsed, Some(2));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => Some(f(v)),
            None => None,
        }
    }

    /// Applies `f` to a contained value, or returns `default` if absent.
    ///
    /// Together with [`Option::map_or_else`] this is the two-branch match
    /// over the option: a handler for presence, a plain value for absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// assert_eq!(Some("foo").map_or(42, |s| s.len()), 3);
    /// assert_eq!(None::<&str>.map_or(42, |s| s.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => f(v),
            None => default,
        }
    }

    /// Applies `f` to a contained value, or computes a fallback from
    /// `default` if absent. Only the selected branch runs.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Some(v) => f(v),
            None => default(),
        }
    }

    /// Transforms the option into a [`Result`], mapping presence to
    /// `Ok(v)` and absence to `Err(err)`.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }

    /// Transforms the option into a [`Result`], mapping presence to
    /// `Ok(v)` and absence to `Err(err())`. The error producer runs only
    /// on absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// assert_eq!(Some(3).ok_or_else(|| "gone"), Ok(3));
    /// assert_eq!(None::<i32>.ok_or_else(|| "gone"), Err("gone"));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(v) => Ok(v),
            None => Err(err()),
        }
    }

    /////////////////////////////////////////////////////////////////////
    // Boolean operations on the values, eager and lazy
    /////////////////////////////////////////////////////////////////////

    /// Returns `None` if the option is absent, otherwise returns `optb`.
    ///
    /// Arguments are eagerly evaluated; for the result of a function
    /// call, use [`Option::and_then`] instead.
    #[inline]
    pub fn and<U>(self, optb: Option<U>) -> Option<U> {
        match self {
            Some(_) => optb,
            None => None,
        }
    }

    /// Returns `None` if the option is absent, otherwise calls `f` with
    /// the contained value and returns the result.
    ///
    /// Some languages call this operation flatmap.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// fn checked_sq(n: u32) -> Option<u32> {
    ///     n.checked_mul(n).map_or(None, Some)
    /// }
    ///
    /// assert_eq!(Some(2).and_then(checked_sq), Some(4));
    /// assert_eq!(Some(1_000_000).and_then(checked_sq), None);
    /// assert_eq!(None.and_then(checked_sq), None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(v) => f(v),
            None => None,
        }
    }

    /// Returns the option if the contained value satisfies `predicate`,
    /// otherwise `None`. The predicate never runs for an absent option.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// fn is_even(n: &i32) -> bool {
    ///     n % 2 == 0
    /// }
    ///
    /// assert_eq!(None::<i32>.filter(is_even), None);
    /// assert_eq!(Some(3).filter(is_even), None);
    /// assert_eq!(Some(4).filter(is_even), Some(4));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if let Some(v) = self {
            if predicate(&v) {
                return Some(v);
            }
        }
        None
    }

    /// Returns the option if it contains a value, otherwise returns
    /// `optb`.
    ///
    /// Arguments are eagerly evaluated; for the result of a function
    /// call, use [`Option::or_else`] instead.
    #[inline]
    pub fn or(self, optb: Option<T>) -> Option<T> {
        match self {
            Some(v) => Some(v),
            None => optb,
        }
    }

    /// Returns the option if it contains a value, otherwise calls `f`
    /// and returns the result. `f` never runs for a present option.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Some(v) => Some(v),
            None => f(),
        }
    }

    /////////////////////////////////////////////////////////////////////
    // Entry-like operations: the option as a reassignable slot
    /////////////////////////////////////////////////////////////////////

    /// Inserts `value` if the option is absent, then returns a mutable
    /// reference to the contained value.
    ///
    /// A present option keeps its existing value untouched; nothing new
    /// is constructed for it. See also [`Option::insert`], which
    /// overwrites unconditionally.
    ///
    /// Mutation through the returned reference is observable through the
    /// option afterwards:
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// let mut x: Option<u32> = None;
    /// {
    ///     let y = x.get_or_insert(5);
    ///     assert_eq!(*y, 5);
    ///     *y = 7;
    /// }
    /// assert_eq!(x, Some(7));
    /// ```
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        if self.is_none() {
            *self = Some(value);
        }
        match self {
            Some(v) => v,
            None => unreachable!(),
        }
    }

    /// Inserts `value` into the option, then returns a mutable reference
    /// to it. Any previously contained value is dropped.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Some(value);
        match self {
            Some(v) => v,
            None => unreachable!(),
        }
    }

    /// Replaces the contained state with `Some(value)`, returning the
    /// previous state.
    ///
    /// The previous state is returned by value, so later mutation of the
    /// option cannot retroactively alter what `replace` handed back.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::{None, Option, Some};
    ///
    /// let mut x = Some(2);
    /// assert_eq!(x.replace(5), Some(2));
    /// assert_eq!(x, Some(5));
    ///
    /// let mut y: Option<i32> = None;
    /// assert_eq!(y.replace(3), None);
    /// assert_eq!(y, Some(3));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        mem::replace(self, Some(value))
    }

    /// Takes the value out of the option, leaving `None` in its place.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        mem::replace(self, None)
    }

    /////////////////////////////////////////////////////////////////////
    // Iterator constructors
    /////////////////////////////////////////////////////////////////////

    /// Returns an iterator over the possibly contained value.
    ///
    /// The iterator is finite and restartable: it yields at most one
    /// element, and calling `iter` again starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use option_future::Some;
    ///
    /// let x = Some(4);
    /// assert_eq!(x.iter().sum::<i32>(), 4);
    /// assert_eq!(x.iter().sum::<i32>(), 4);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: Item { opt: self.as_ref() } }
    }

    /// Returns a mutable iterator over the possibly contained value.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { inner: Item { opt: self.as_mut() } }
    }
}

/// Raises the `EmptyOption` fault. Kept out of line so the happy paths
/// stay small enough to inline.
#[cold]
#[track_caller]
fn empty_option_failed(msg: &str) -> ! {
    panic!("EmptyOption: {msg}")
}

impl<T> Default for Option<T> {
    /// Returns the absent option.
    #[inline]
    fn default() -> Option<T> {
        None
    }
}

impl<T> From<T> for Option<T> {
    /// Wraps a value in `Some`.
    #[inline]
    fn from(value: T) -> Option<T> {
        Some(value)
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    /// Lifts the standard library's option into this algebra, variant by
    /// variant.
    #[inline]
    fn from(opt: StdOption<T>) -> Option<T> {
        match opt {
            StdSome(v) => Some(v),
            StdNone => None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    /// Lowers this option into the standard library's, variant by
    /// variant.
    #[inline]
    fn from(opt: Option<T>) -> StdOption<T> {
        match opt {
            Some(v) => StdSome(v),
            None => StdNone,
        }
    }
}

/////////////////////////////////////////////////////////////////////////
// Iterators
/////////////////////////////////////////////////////////////////////////

// The shared zero-or-one-element cursor underneath all three public
// iterators. `next` drains the slot; `size_hint` is exact either way.
#[derive(Clone, Debug)]
struct Item<A> {
    opt: Option<A>,
}

impl<A> Iterator for Item<A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> StdOption<A> {
        self.opt.take().into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        match self.opt {
            Some(_) => (1, StdSome(1)),
            None => (0, StdSome(0)),
        }
    }
}

impl<A> DoubleEndedIterator for Item<A> {
    #[inline]
    fn next_back(&mut self) -> StdOption<A> {
        self.opt.take().into()
    }
}

impl<A> ExactSizeIterator for Item<A> {}
impl<A> FusedIterator for Item<A> {}

/// An iterator over a reference to the possibly contained value.
///
/// Created by [`Option::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, A> {
    inner: Item<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> StdOption<&'a A> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for Iter<'a, A> {
    #[inline]
    fn next_back(&mut self) -> StdOption<&'a A> {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for Iter<'_, A> {}
impl<A> FusedIterator for Iter<'_, A> {}

/// An iterator over a mutable reference to the possibly contained value.
///
/// Created by [`Option::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, A> {
    inner: Item<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    #[inline]
    fn next(&mut self) -> StdOption<&'a mut A> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, A> DoubleEndedIterator for IterMut<'a, A> {
    #[inline]
    fn next_back(&mut self) -> StdOption<&'a mut A> {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for IterMut<'_, A> {}
impl<A> FusedIterator for IterMut<'_, A> {}

/// An iterator over the possibly contained value.
///
/// Created by the [`IntoIterator`] impl for [`Option<T>`].
#[derive(Clone, Debug)]
pub struct IntoIter<A> {
    inner: Item<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    #[inline]
    fn next(&mut self) -> StdOption<A> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        self.inner.size_hint()
    }
}

impl<A> DoubleEndedIterator for IntoIter<A> {
    #[inline]
    fn next_back(&mut self) -> StdOption<A> {
        self.inner.next_back()
    }
}

impl<A> ExactSizeIterator for IntoIter<A> {}
impl<A> FusedIterator for IntoIter<A> {}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the option into an iterator yielding its value, if any.
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: Item { opt: self } }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Option<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

//! An `Option`, eventually.
//!
//! [`FutureOption<T>`] wraps a pending computation of an
//! [`Option<T>`](crate::Option) and re-exposes the combinator contract
//! lazily: each method returns a new wrapper that first awaits the inner
//! computation, then applies the corresponding synchronous combinator to
//! the settled option, and — when the application itself yields a pending
//! computation — awaits that too, flattening one level of nesting.
//!
//! Chained steps therefore settle strictly left to right; nothing runs
//! concurrently, nothing is reordered, and there is no cancellation or
//! timeout: a link that never settles stalls everything downstream.
//!
//! The synchronous type gains `_async`-suffixed entry points
//! ([`Option::and_then_async`], [`Option::map_async`],
//! [`Option::or_else_async`], [`Option::ok_or_else_async`]) for the first
//! hop onto the asynchronous rail, and [`IntoFuture`] lifts an
//! already-settled option onto it directly.
//!
//! # Examples
//!
//! ```
//! use futures::executor::block_on;
//! use option_future::{None, Some};
//!
//! let settled = None::<u32>
//!     .or_else_async(|| async { Some(55) })
//!     .and_then(|n| async move { Some(n * 2) });
//! assert_eq!(block_on(settled), Some(110));
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture};

use crate::option::Option::{self, None, Some};

/// A pending computation of an [`Option<T>`](crate::Option) that chains
/// combinators lazily.
///
/// Awaiting the wrapper yields the settled option. Every combinator
/// consumes the wrapper and returns a new one, so a chain owns exactly
/// one in-flight future at a time.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct FutureOption<T> {
    inner: BoxFuture<'static, Option<T>>,
}

impl<T> FutureOption<T> {
    /// Wraps a pending computation of an option.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::executor::block_on;
    /// use option_future::{FutureOption, Some};
    ///
    /// let fut = FutureOption::new(async { Some(5) });
    /// assert_eq!(block_on(fut), Some(5));
    /// ```
    pub fn new<F>(future: F) -> FutureOption<T>
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        FutureOption { inner: Box::pin(future) }
    }

    /// Settles the chain and returns whether the option holds a value.
    pub async fn is_some(self) -> bool {
        self.inner.await.is_some()
    }

    /// Settles the chain and returns whether the option is absent.
    pub async fn is_none(self) -> bool {
        self.inner.await.is_none()
    }

    /// Settles the chain and returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with the `EmptyOption` fault if the settled option is
    /// absent, exactly as the synchronous [`Option::unwrap`] does.
    pub async fn unwrap(self) -> T {
        self.inner.await.unwrap()
    }

    /// Settles the chain and returns the contained value, or `default`
    /// if the settled option is absent.
    pub async fn unwrap_or(self, default: T) -> T {
        self.inner.await.unwrap_or(default)
    }

    /// Settles the chain into a [`Result`], mapping presence to `Ok(v)`
    /// and absence to `Err(err())`.
    pub async fn ok_or_else<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.inner.await.ok_or_else(err)
    }
}

impl<T: Send + 'static> FutureOption<T> {
    /// Settles the chain, then returns `None` if the option is absent
    /// and `optb` otherwise.
    ///
    /// `optb` is eagerly evaluated, as in the synchronous algebra; use
    /// [`FutureOption::and_then`] for a lazily produced continuation.
    pub fn and<U>(self, optb: Option<U>) -> FutureOption<U>
    where
        U: Send + 'static,
    {
        FutureOption::new(async move { self.inner.await.and(optb) })
    }

    /// Settles the chain, then calls `f` with a contained value and
    /// awaits the option it produces. Absence skips `f` entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::executor::block_on;
    /// use option_future::{FutureOption, Some};
    ///
    /// let chained = FutureOption::new(async { Some(12) })
    ///     .and_then(|n| async move { Some(n * 2) })
    ///     .and_then(|n| async move { Some(n * 3) });
    /// assert_eq!(block_on(chained), Some(72));
    /// ```
    pub fn and_then<U, F, Fut>(self, f: F) -> FutureOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Option<U>> + Send + 'static,
    {
        FutureOption::new(async move {
            match self.inner.await {
                Some(v) => f(v).await,
                None => None,
            }
        })
    }

    /// Settles the chain, then keeps the value only if it satisfies
    /// `predicate`. The predicate never runs for an absent option.
    pub fn filter<P>(self, predicate: P) -> FutureOption<T>
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        FutureOption::new(async move { self.inner.await.filter(predicate) })
    }

    /// Settles the chain, then maps a contained value through `f`,
    /// awaiting `f`'s result before re-wrapping it in `Some`.
    pub fn map<U, F, Fut>(self, f: F) -> FutureOption<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        FutureOption::new(async move {
            match self.inner.await {
                Some(v) => Some(f(v).await),
                None => None,
            }
        })
    }

    /// Settles the chain, then returns it if present and `optb`
    /// otherwise. `optb` is eagerly evaluated.
    pub fn or(self, optb: Option<T>) -> FutureOption<T> {
        FutureOption::new(async move { self.inner.await.or(optb) })
    }

    /// Settles the chain, then — only if the option is absent — calls
    /// `f` and awaits the replacement option it produces.
    pub fn or_else<F, Fut>(self, f: F) -> FutureOption<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        FutureOption::new(async move {
            match self.inner.await {
                Some(v) => Some(v),
                None => f().await,
            }
        })
    }
}

impl<T> Future for FutureOption<T> {
    type Output = Option<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().inner.as_mut().poll(cx)
    }
}

impl<T> fmt::Debug for FutureOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FutureOption").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> From<Option<T>> for FutureOption<T> {
    /// Lifts an already-settled option onto the asynchronous rail.
    fn from(opt: Option<T>) -> FutureOption<T> {
        FutureOption::new(future::ready(opt))
    }
}

impl<T: Send + 'static> IntoFuture for Option<T> {
    type Output = Option<T>;
    type IntoFuture = FutureOption<T>;

    /// Awaiting a settled option yields it unchanged.
    fn into_future(self) -> FutureOption<T> {
        FutureOption::from(self)
    }
}

impl<T> Option<T> {
    /// Calls `f` with a contained value and awaits the option it
    /// produces; the first hop of a chain whose continuation is
    /// asynchronous. Absence skips `f` entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::executor::block_on;
    /// use option_future::Some;
    ///
    /// let chained = Some(12)
    ///     .and_then_async(|n| async move { Some(n * 2) })
    ///     .and_then(|n| async move { Some(n * 3) })
    ///     .and_then(|n| async move { Some(n * 4) });
    /// assert_eq!(block_on(chained), Some(288));
    /// ```
    pub fn and_then_async<U, F, Fut>(self, f: F) -> FutureOption<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Option<U>> + Send + 'static,
    {
        FutureOption::new(async move {
            match self {
                Some(v) => f(v).await,
                None => None,
            }
        })
    }

    /// Maps a contained value through `f`, awaiting `f`'s result before
    /// re-wrapping it in `Some`. Absence skips `f` entirely.
    pub fn map_async<U, F, Fut>(self, f: F) -> FutureOption<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
    {
        FutureOption::new(async move {
            match self {
                Some(v) => Some(f(v).await),
                None => None,
            }
        })
    }

    /// Returns the option if present; otherwise calls `f` and awaits the
    /// replacement option it produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures::executor::block_on;
    /// use option_future::{None, Some};
    ///
    /// let recovered = None::<u32>
    ///     .or_else_async(|| async { Some(55) })
    ///     .and_then(|n| async move { Some(n * 2) });
    /// assert_eq!(block_on(recovered), Some(110));
    /// ```
    pub fn or_else_async<F, Fut>(self, f: F) -> FutureOption<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        FutureOption::new(async move {
            match self {
                Some(v) => Some(v),
                None => f().await,
            }
        })
    }

    /// Transforms the option into a [`Result`], awaiting the error
    /// producer when the option is absent. Presence never runs `err`.
    pub fn ok_or_else_async<E, F, Fut>(self, err: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = E>,
    {
        async move {
            match self {
                Some(v) => Ok(v),
                None => Err(err().await),
            }
        }
    }
}

//! Method-call syntax for stream pipelines.
//!
//! [`LazyStreamExt`] is implemented for both [`Link`] and [`Stream`], so a
//! pipeline can start from either and chain `_lazy` combinators.

use crate::error::StreamResult;
use crate::stream::{
    advanced, constructors, core as stream_core, utility, Link, Stream,
};

/// Extension trait providing chainable combinators on streams and links.
///
/// Method names carry a `_lazy` suffix so they don't collide with the
/// inherent `Option` methods of the same name.
pub trait LazyStreamExt<T>: Sized
where
    T: Clone + 'static,
{
    /// Converts the receiver into a link.
    fn into_link(self) -> Link<T>;

    /// Map elements of the stream with a function
    fn map_lazy<U, F>(self, f: F) -> Link<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        stream_core::map(self.into_link(), f)
    }

    /// Keep the elements matching `pred`
    fn filter_lazy<P>(self, pred: P) -> StreamResult<Link<T>>
    where
        P: Fn(&T) -> bool + 'static,
    {
        stream_core::filter(self.into_link(), pred)
    }

    /// Take at most `n` elements
    fn take_lazy(self, n: usize) -> Link<T> {
        stream_core::take(self.into_link(), n)
    }

    fn take_while_lazy<P>(self, pred: P) -> Link<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        utility::take_while(self.into_link(), pred)
    }

    fn drop_lazy(self, n: usize) -> StreamResult<Link<T>> {
        utility::drop(self.into_link(), n)
    }

    /// Follow this stream with `other`
    fn append_lazy(self, other: Link<T>) -> Link<T> {
        advanced::append(self.into_link(), other)
    }

    fn flat_map_lazy<U, I, F>(self, f: F) -> StreamResult<Link<U>>
    where
        U: Clone + 'static,
        I: IntoIterator<Item = U>,
        F: Fn(&T) -> I + 'static,
    {
        advanced::flat_map(self.into_link(), f)
    }

    /// Combine pairwise with `other`, stopping at the shorter stream
    fn zip_lazy<U, V, F>(self, other: Link<U>, f: F) -> Link<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(&T, &U) -> V + 'static,
    {
        advanced::zip(self.into_link(), other, f)
    }

    fn scan_lazy<A, F>(self, init: A, f: F) -> Link<A>
    where
        A: Clone + 'static,
        F: Fn(&A, &T) -> A + 'static,
    {
        utility::scan(self.into_link(), init, f)
    }

    /// Collect all elements of a finite stream
    fn collect_lazy(self) -> StreamResult<Vec<T>> {
        utility::to_vec(self.into_link())
    }

    fn fold_lazy<A, F>(self, init: A, f: F) -> StreamResult<A>
    where
        F: FnMut(A, T) -> A,
    {
        utility::fold(self.into_link(), init, f)
    }
}

impl<T: Clone + 'static> LazyStreamExt<T> for Link<T> {
    fn into_link(self) -> Link<T> {
        self
    }
}

impl<T: Clone + 'static> LazyStreamExt<T> for Stream<T> {
    fn into_link(self) -> Link<T> {
        Some(self)
    }
}

/// Builds a stream from anything iterable, e.g. `vec![1, 2, 3].into_lazy()`.
pub trait IntoLazyStream<T> {
    fn into_lazy(self) -> Link<T>;
}

impl<T: Clone + 'static> IntoLazyStream<T> for Vec<T> {
    fn into_lazy(self) -> Link<T> {
        constructors::from_vec(self)
    }
}

impl<T: Clone + 'static> IntoLazyStream<T> for &[T] {
    fn into_lazy(self) -> Link<T> {
        constructors::from_slice(self)
    }
}

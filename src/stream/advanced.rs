//! Advanced stream combinators: concat, append, flat_map, zip, sieve
use std::collections::VecDeque;
use std::ops::Rem;
use std::rc::Rc;

use super::constructors::from_vec;
use super::core::{filter, Link, Stream};
use crate::error::{StreamError, StreamResult};

// ================================
// Concat
// ================================

/// Flattens a sequence of streams, skipping `None` entries.
///
/// The sequence is taken by value and drained through a private queue, so
/// the caller's collection is never advanced. The same stream may appear in
/// several slots; each slot walks it independently.
pub fn concat<T, I>(streams: I) -> Link<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = Link<T>>,
{
    concat_queue(streams.into_iter().flatten().collect())
}

// The remaining queue is shared by every node of the front stream and only
// rebuilt once that stream is exhausted.
fn concat_queue<T>(mut queue: VecDeque<Stream<T>>) -> Link<T>
where
    T: Clone + 'static,
{
    let head = queue.pop_front()?;
    let rest = move || -> StreamResult<Link<T>> { Ok(concat_queue(queue.clone())) };
    Some(append_with(head, Rc::new(rest)))
}

// ================================
// Append
// ================================

/// All of `s`, then all of `t`.
///
/// Once `s` is exhausted the nodes of `t` are shared, not copied.
pub fn append<T>(s: Link<T>, t: Link<T>) -> Link<T>
where
    T: Clone + 'static,
{
    match s {
        None => t,
        Some(s) => {
            let rest = move || -> StreamResult<Link<T>> { Ok(t.clone()) };
            Some(append_with(s, Rc::new(rest)))
        }
    }
}

/// All of `s`, then whatever `rest` produces. `rest` only runs when `s` is
/// exhausted, and again if a previous run failed.
pub(crate) fn append_with<T, R>(s: Stream<T>, rest: Rc<R>) -> Stream<T>
where
    T: Clone + 'static,
    R: Fn() -> StreamResult<Link<T>> + 'static,
{
    let value = s.value().clone();
    Stream::try_cons(value, move || match s.next()? {
        Some(next) => Ok(Some(append_with(next, Rc::clone(&rest)))),
        None => rest(),
    })
}

// ================================
// FlatMap
// ================================

/// Expands every element into a finite run of elements.
///
/// Elements mapped to an empty run are skipped without ending the stream.
/// The expansion of one element is buffered in full; the source is forced
/// again only once that buffer is drained.
pub fn flat_map<S, T, I, F>(s: Link<S>, f: F) -> StreamResult<Link<T>>
where
    S: 'static,
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
    F: Fn(&S) -> I + 'static,
{
    flat_map_rc(s, Rc::new(f))
}

fn flat_map_rc<S, T, I, F>(mut s: Link<S>, f: Rc<F>) -> StreamResult<Link<T>>
where
    S: 'static,
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
    F: Fn(&S) -> I + 'static,
{
    while let Some(node) = s {
        if let Some(expanded) = from_vec(f(node.value()).into_iter().collect()) {
            let rest = move || -> StreamResult<Link<T>> {
                flat_map_rc(node.next()?, Rc::clone(&f))
            };
            return Ok(Some(append_with(expanded, Rc::new(rest))));
        }
        s = node.next()?;
    }
    Ok(None)
}

// ================================
// Zip
// ================================

/// Combines the streams pairwise, stopping at the shorter one.
pub fn zip<S, U, T, F>(s: Link<S>, t: Link<U>, f: F) -> Link<T>
where
    S: 'static,
    U: 'static,
    T: 'static,
    F: Fn(&S, &U) -> T + 'static,
{
    zip_rc(s, t, Rc::new(f))
}

fn zip_rc<S, U, T, F>(s: Link<S>, t: Link<U>, f: Rc<F>) -> Link<T>
where
    S: 'static,
    U: 'static,
    T: 'static,
    F: Fn(&S, &U) -> T + 'static,
{
    let (s, t) = (s?, t?);
    let value = f(s.value(), t.value());
    Some(Stream::try_cons(value, move || {
        let s_next = s.next()?;
        if s_next.is_none() {
            return Ok(None);
        }
        Ok(zip_rc(s_next, t.next()?, Rc::clone(&f)))
    }))
}

// ================================
// Sieve
// ================================

/// Sieve of Eratosthenes over a stream: keeps the head `p`, then sieves the
/// rest of the stream with every multiple of `p` removed.
///
/// `sieve(integers_from(2))` is the stream of primes. Every retained element
/// wraps the rest of the stream in one more filter, and forcing walks through
/// all of them recursively: the k-th prime needs a stack depth proportional to
/// k. A debug build on a 2 MiB thread handles about the first thousand primes.
///
/// # Errors
///
/// A head equal to zero cannot divide anything; forcing the node after it
/// fails with [`StreamError::Force`]. A head of one removes every following
/// element, so on an infinite stream the force never returns. In practice the
/// head should be at least 2.
pub fn sieve<T>(s: Link<T>) -> Link<T>
where
    T: Clone + PartialEq + Rem<Output = T> + From<u8> + 'static,
{
    let s = s?;
    let prime = s.value().clone();
    Some(Stream::try_cons(prime.clone(), move || {
        if prime == T::from(0u8) {
            return Err(StreamError::force("sieve cannot divide by a zero head"));
        }
        let p = prime.clone();
        let rest = filter(s.next()?, move |x: &T| x.clone() % p.clone() != T::from(0u8))?;
        Ok(sieve(rest))
    }))
}

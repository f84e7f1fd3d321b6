//! Stream constructors: cons, from_slice, from_vec, once, repeat, iterate,
//! integers_from, from_iter, try_from_iter
use std::cell::RefCell;
use std::rc::Rc;

use super::core::{map, Link, Stream};
use crate::error::{StreamError, StreamResult};

// ================================
// Primitive Constructors
// ================================

/// Pairs `value` with a deferred tail.
pub fn cons<T, F>(value: T, promise: F) -> Stream<T>
where
    T: 'static,
    F: FnOnce() -> Link<T> + 'static,
{
    Stream::cons(value, promise)
}

/// Pairs `value` with a deferred tail that may fail and be retried.
pub fn try_cons<T, F>(value: T, promise: F) -> Stream<T>
where
    T: 'static,
    F: FnMut() -> StreamResult<Link<T>> + 'static,
{
    Stream::try_cons(value, promise)
}

// ================================
// Eager Data
// ================================

/// Streams the elements of a slice. Only the first node is built up front.
pub fn from_slice<T>(items: &[T]) -> Link<T>
where
    T: Clone + 'static,
{
    from_shared(Rc::from(items), 0)
}

/// Streams the elements of a vector without copying it into nodes eagerly.
pub fn from_vec<T>(items: Vec<T>) -> Link<T>
where
    T: Clone + 'static,
{
    from_shared(Rc::from(items), 0)
}

fn from_shared<T>(items: Rc<[T]>, index: usize) -> Link<T>
where
    T: Clone + 'static,
{
    let value = items.get(index)?.clone();
    Some(Stream::cons(value, move || from_shared(items, index + 1)))
}

pub fn once<T: 'static>(value: T) -> Link<T> {
    Some(Stream::new(value, None))
}

// ================================
// Infinite Streams
// ================================

/// `value` forever.
pub fn repeat<T>(value: T) -> Link<T>
where
    T: Clone + 'static,
{
    Some(Stream::cons(value.clone(), move || repeat(value)))
}

/// `seed`, `f(seed)`, `f(f(seed))`, ...
pub fn iterate<T, F>(seed: T, f: F) -> Link<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    Some(iterate_rc(seed, Rc::new(f)))
}

fn iterate_rc<T, F>(seed: T, f: Rc<F>) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> T + 'static,
{
    Stream::cons(seed.clone(), move || Some(iterate_rc(f(&seed), f)))
}

/// The integers from `start` upwards, each defined as one more than the
/// stream's own previous element.
///
/// Built with [`Stream::recursive`], so the unforced frontier of the stream
/// stays allocated after every handle to it is dropped.
pub fn integers_from(start: i64) -> Link<i64> {
    Some(Stream::recursive(|cell| {
        Stream::try_cons(start, move || Ok(map(Some(cell.get()?), |n| n + 1)))
    }))
}

// ================================
// Iterator Sources
// ================================

/// Pulls from `iter` lazily, one item per force.
pub fn from_iter<I>(iter: I) -> Link<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    pull(iter.into_iter())
}

fn pull<I>(mut iter: I) -> Link<I::Item>
where
    I: Iterator + 'static,
    I::Item: 'static,
{
    let value = iter.next()?;
    Some(Stream::cons(value, move || pull(iter)))
}

/// Pulls from a fallible iterator lazily.
///
/// The first item is pulled immediately. A failed pull is returned from the
/// `next` that triggered it; calling `next` again pulls the following item.
pub fn try_from_iter<T, E, I>(iter: I) -> StreamResult<Link<T>>
where
    T: 'static,
    E: Into<StreamError>,
    I: IntoIterator<Item = Result<T, E>>,
    I::IntoIter: 'static,
{
    try_pull(Rc::new(RefCell::new(iter.into_iter())))
}

fn try_pull<T, E, I>(source: Rc<RefCell<I>>) -> StreamResult<Link<T>>
where
    T: 'static,
    E: Into<StreamError>,
    I: Iterator<Item = Result<T, E>> + 'static,
{
    let item = source.borrow_mut().next();
    match item {
        None => Ok(None),
        Some(Err(err)) => Err(err.into()),
        Some(Ok(value)) => Ok(Some(Stream::try_cons(value, move || {
            try_pull(Rc::clone(&source))
        }))),
    }
}

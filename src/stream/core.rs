//! Core stream node, forcing and memoization, plus the basic combinators
//! map, filter and take.
//!
//! A [`Stream`] is a shared handle to a cons cell: one immutable value and a
//! tail that is either already realized or still a pending continuation. The
//! end of a stream is not a node; it is the `None` of a [`Link`].

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};

/// A stream, or the end marker.
pub type Link<T> = Option<Stream<T>>;

/// Deferred computation of the rest of a stream.
enum Promise<T> {
    /// Infallible and consumed by its single run.
    Once(Box<dyn FnOnce() -> Link<T>>),
    /// Fallible; kept and re-run on the next force if it fails.
    Retry(Box<dyn FnMut() -> StreamResult<Link<T>>>),
}

enum Tail<T> {
    Pending(Promise<T>),
    /// The promise has been taken out and is running.
    Forcing,
    Realized(Link<T>),
}

struct Node<T> {
    value: T,
    tail: RefCell<Tail<T>>,
}

// Unlink realized successors iteratively so long streams don't overflow the
// stack when they are dropped.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut link = match std::mem::replace(self.tail.get_mut(), Tail::Forcing) {
            Tail::Realized(link) => link,
            _ => return,
        };
        while let Some(stream) = link {
            match Rc::try_unwrap(stream.node) {
                Ok(mut node) => {
                    link = match std::mem::replace(node.tail.get_mut(), Tail::Forcing) {
                        Tail::Realized(next) => next,
                        _ => None,
                    };
                }
                Err(_) => break,
            }
        }
    }
}

/// Persistent, lazily extended, memoized stream.
///
/// Cloning a `Stream` clones the handle, not the elements: every clone
/// observes the same memoized tail.
pub struct Stream<T> {
    node: Rc<Node<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T: 'static> Stream<T> {
    /// Creates a node whose tail is already known.
    pub fn new(value: T, tail: Link<T>) -> Self {
        Self::with_tail(value, Tail::Realized(tail))
    }

    /// Creates a node whose tail is produced by `promise` on first force.
    pub fn cons<F>(value: T, promise: F) -> Self
    where
        F: FnOnce() -> Link<T> + 'static,
    {
        Self::with_tail(value, Tail::Pending(Promise::Once(Box::new(promise))))
    }

    /// Creates a node with a fallible tail.
    ///
    /// If `promise` fails, the error is returned from [`Stream::next`] and the
    /// promise is kept, so a later `next` runs it again.
    pub fn try_cons<F>(value: T, promise: F) -> Self
    where
        F: FnMut() -> StreamResult<Link<T>> + 'static,
    {
        Self::with_tail(value, Tail::Pending(Promise::Retry(Box::new(promise))))
    }

    /// Builds a stream that refers to itself.
    ///
    /// `build` receives an unbound [`StreamCell`] which may only be read from
    /// inside a promise; the cell is bound to the returned stream before any
    /// promise can run.
    ///
    /// The cell holds the stream strongly. The cycle through the capturing
    /// promise is released when that promise runs, but a combinator applied to
    /// the stream itself (such as `map` over the cell) keeps its two unforced
    /// frontier nodes pointing at each other, and they are not reclaimed when
    /// the last handle is dropped.
    ///
    /// ```
    /// use lazy_stream::{map, to_vec, take, Stream};
    ///
    /// let integers = Stream::recursive(|cell| {
    ///     Stream::try_cons(1, move || Ok(map(Some(cell.get()?), |n| n + 1)))
    /// });
    /// assert_eq!(to_vec(take(Some(integers), 4)).unwrap(), vec![1, 2, 3, 4]);
    /// ```
    pub fn recursive<F>(build: F) -> Self
    where
        F: FnOnce(StreamCell<T>) -> Stream<T>,
    {
        let cell = StreamCell::new();
        let stream = build(cell.clone());
        if cell.bind(&stream).is_err() {
            log::warn!("stream cell was bound inside its own builder; keeping that binding");
        }
        stream
    }

    fn with_tail(value: T, tail: Tail<T>) -> Self {
        Stream {
            node: Rc::new(Node {
                value,
                tail: RefCell::new(tail),
            }),
        }
    }
}

impl<T> Stream<T> {
    /// The element held by this node.
    pub fn value(&self) -> &T {
        &self.node.value
    }

    /// Returns the rest of the stream, running the pending promise if this is
    /// the first successful force.
    ///
    /// The result is memoized: every later call returns the same node, and
    /// the promise is dropped once it has succeeded. A failed promise leaves
    /// the node pending. A promise that panics leaves the node unusable; later
    /// forces report [`StreamError::Reentrant`].
    pub fn next(&self) -> StreamResult<Link<T>> {
        let promise = {
            let mut tail = self.node.tail.borrow_mut();
            match std::mem::replace(&mut *tail, Tail::Forcing) {
                Tail::Pending(promise) => promise,
                Tail::Realized(link) => {
                    let out = link.clone();
                    *tail = Tail::Realized(link);
                    return Ok(out);
                }
                Tail::Forcing => {
                    log::warn!("stream node forced from inside its own continuation");
                    return Err(StreamError::Reentrant);
                }
            }
        };

        log::trace!("forcing pending stream node");
        let link = match promise {
            Promise::Once(promise) => promise(),
            Promise::Retry(mut promise) => match promise() {
                Ok(link) => link,
                Err(err) => {
                    log::debug!("continuation failed, node stays pending: {}", err);
                    *self.node.tail.borrow_mut() = Tail::Pending(Promise::Retry(promise));
                    return Err(err);
                }
            },
        };
        *self.node.tail.borrow_mut() = Tail::Realized(link.clone());
        Ok(link)
    }

    /// The value of this node together with the rest of the stream.
    pub fn next_value(&self) -> StreamResult<(T, Link<T>)>
    where
        T: Clone,
    {
        let rest = self.next()?;
        Ok((self.value().clone(), rest))
    }

    /// Whether the tail has been realized.
    pub fn is_forced(&self) -> bool {
        matches!(*self.node.tail.borrow(), Tail::Realized(_))
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.node, &other.node)
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("value", self.value())
            .field("forced", &self.is_forced())
            .finish()
    }
}

/// Write-once slot used to define a stream in terms of itself.
///
/// Allocate the cell, capture a clone of it in a promise, build the stream,
/// then [`bind`](StreamCell::bind) it. The cell holds the stream strongly;
/// the reference cycle through the capturing promise goes away once that
/// promise has run.
pub struct StreamCell<T> {
    slot: Rc<OnceCell<Stream<T>>>,
}

impl<T> Clone for StreamCell<T> {
    fn clone(&self) -> Self {
        StreamCell {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> Default for StreamCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StreamCell<T> {
    pub fn new() -> Self {
        StreamCell {
            slot: Rc::new(OnceCell::new()),
        }
    }

    pub fn bind(&self, stream: &Stream<T>) -> StreamResult<()> {
        self.slot
            .set(stream.clone())
            .map_err(|_| StreamError::AlreadyBound)
    }

    pub fn get(&self) -> StreamResult<Stream<T>> {
        self.slot.get().cloned().ok_or(StreamError::Unbound)
    }
}

// ================================
// Map
// ================================

/// Applies `f` to every element.
pub fn map<S, T, F>(s: Link<S>, f: F) -> Link<T>
where
    S: 'static,
    T: 'static,
    F: Fn(&S) -> T + 'static,
{
    map_rc(s, Rc::new(f))
}

fn map_rc<S, T, F>(s: Link<S>, f: Rc<F>) -> Link<T>
where
    S: 'static,
    T: 'static,
    F: Fn(&S) -> T + 'static,
{
    let s = s?;
    let value = f(s.value());
    Some(Stream::try_cons(value, move || {
        Ok(map_rc(s.next()?, Rc::clone(&f)))
    }))
}

// ================================
// Filter
// ================================

/// Keeps the elements matching `pred`.
///
/// The source is forced until the first match, so building the filtered
/// stream can itself fail.
pub fn filter<T, P>(s: Link<T>, pred: P) -> StreamResult<Link<T>>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    filter_rc(s, Rc::new(pred))
}

pub(crate) fn filter_rc<T, P>(mut s: Link<T>, pred: Rc<P>) -> StreamResult<Link<T>>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    while let Some(node) = s {
        if pred(node.value()) {
            let value = node.value().clone();
            return Ok(Some(Stream::try_cons(value, move || {
                filter_rc(node.next()?, Rc::clone(&pred))
            })));
        }
        s = node.next()?;
    }
    Ok(None)
}

// ================================
// Take
// ================================

/// The first `n` elements.
///
/// The node after the n-th is never forced.
pub fn take<T>(s: Link<T>, n: usize) -> Link<T>
where
    T: Clone + 'static,
{
    if n == 0 {
        return None;
    }
    let s = s?;
    let value = s.value().clone();
    if n == 1 {
        return Some(Stream::new(value, None));
    }
    Some(Stream::try_cons(value, move || Ok(take(s.next()?, n - 1))))
}

//! Utility combinators and consumers: take_while, drop, drop_while, scan,
//! interleave, iter, to_vec, fold, reduce, nth, count, last
use std::collections::VecDeque;
use std::rc::Rc;

use super::core::{Link, Stream};
use crate::error::StreamResult;

// ================================
// Conditional Adapters
// ================================

/// The leading run of elements matching `pred`.
pub fn take_while<T, P>(s: Link<T>, pred: P) -> Link<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    take_while_rc(s, Rc::new(pred))
}

fn take_while_rc<T, P>(s: Link<T>, pred: Rc<P>) -> Link<T>
where
    T: Clone + 'static,
    P: Fn(&T) -> bool + 'static,
{
    let s = s.filter(|node| pred(node.value()))?;
    let value = s.value().clone();
    Some(Stream::try_cons(value, move || {
        Ok(take_while_rc(s.next()?, Rc::clone(&pred)))
    }))
}

/// Skips `n` elements. The returned suffix shares its nodes with `s`.
pub fn drop<T>(mut s: Link<T>, n: usize) -> StreamResult<Link<T>> {
    for _ in 0..n {
        match s {
            Some(node) => s = node.next()?,
            None => break,
        }
    }
    Ok(s)
}

/// Skips the leading run of elements matching `pred`.
pub fn drop_while<T, P>(mut s: Link<T>, pred: P) -> StreamResult<Link<T>>
where
    P: Fn(&T) -> bool,
{
    while let Some(node) = &s {
        if !pred(node.value()) {
            break;
        }
        s = node.next()?;
    }
    Ok(s)
}

// ================================
// Scan
// ================================

/// Running accumulation: yields `f(acc, x)` after each element, starting
/// from `init`.
pub fn scan<T, A, F>(s: Link<T>, init: A, f: F) -> Link<A>
where
    T: 'static,
    A: Clone + 'static,
    F: Fn(&A, &T) -> A + 'static,
{
    scan_rc(s, init, Rc::new(f))
}

fn scan_rc<T, A, F>(s: Link<T>, acc: A, f: Rc<F>) -> Link<A>
where
    T: 'static,
    A: Clone + 'static,
    F: Fn(&A, &T) -> A + 'static,
{
    let s = s?;
    let acc = f(&acc, s.value());
    Some(Stream::try_cons(acc.clone(), move || {
        Ok(scan_rc(s.next()?, acc.clone(), Rc::clone(&f)))
    }))
}

// ================================
// Interleave
// ================================

/// Takes one element from each stream in turn, ending as soon as the stream
/// whose turn it is has run out.
pub fn interleave<T, I>(streams: I) -> Link<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = Link<T>>,
{
    interleave_queue(streams.into_iter().collect())
}

fn interleave_queue<T>(mut queue: VecDeque<Link<T>>) -> Link<T>
where
    T: Clone + 'static,
{
    let head = queue.pop_front()??;
    let value = head.value().clone();
    Some(Stream::try_cons(value, move || {
        let mut rest = queue.clone();
        rest.push_back(head.next()?);
        Ok(interleave_queue(rest))
    }))
}

// ================================
// Consumers
// ================================

/// Walks a stream as a std iterator of `StreamResult<T>`.
///
/// A node is forced only when the element after it is requested. Iteration
/// ends after the first error.
pub fn iter<T: Clone>(s: Link<T>) -> Iter<T> {
    Iter {
        state: IterState::Start(s),
    }
}

pub struct Iter<T> {
    state: IterState<T>,
}

enum IterState<T> {
    Start(Link<T>),
    Yielded(Stream<T>),
    Done,
}

impl<T: Clone> Iterator for Iter<T> {
    type Item = StreamResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let link = match std::mem::replace(&mut self.state, IterState::Done) {
            IterState::Start(link) => link,
            IterState::Yielded(prev) => match prev.next() {
                Ok(link) => link,
                Err(err) => return Some(Err(err)),
            },
            IterState::Done => return None,
        };
        let node = link?;
        let value = node.value().clone();
        self.state = IterState::Yielded(node);
        Some(Ok(value))
    }
}

/// Collects a finite stream.
pub fn to_vec<T: Clone>(s: Link<T>) -> StreamResult<Vec<T>> {
    iter(s).collect()
}

pub fn fold<T, A, F>(s: Link<T>, init: A, mut f: F) -> StreamResult<A>
where
    T: Clone,
    F: FnMut(A, T) -> A,
{
    let mut acc = init;
    for value in iter(s) {
        acc = f(acc, value?);
    }
    Ok(acc)
}

/// Folds a non-empty stream using its first element as the seed.
pub fn reduce<T, F>(s: Link<T>, f: F) -> StreamResult<Option<T>>
where
    T: Clone,
    F: FnMut(T, T) -> T,
{
    let Some(head) = s else {
        return Ok(None);
    };
    let (first, rest) = head.next_value()?;
    fold(rest, first, f).map(Some)
}

/// The element at `index`; works on infinite streams.
pub fn nth<T: Clone>(s: Link<T>, index: usize) -> StreamResult<Option<T>> {
    iter(s).nth(index).transpose()
}

pub fn count<T: Clone>(s: Link<T>) -> StreamResult<usize> {
    fold(s, 0, |n, _| n + 1)
}

pub fn last<T: Clone>(s: Link<T>) -> StreamResult<Option<T>> {
    fold(s, None, |_, value| Some(value))
}

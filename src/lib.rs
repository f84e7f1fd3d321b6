//! Persistent, memoized, lazily-extended streams.
//!
//! A [`Stream`] is a shared cons cell whose tail is computed on first
//! demand and then remembered, so a stream can be infinite, can be walked
//! by any number of holders, and can be defined in terms of itself:
//!
//! ```
//! use lazy_stream::{integers_from, sieve, take, to_vec};
//!
//! let primes = sieve(integers_from(2));
//! assert_eq!(to_vec(take(primes, 5)).unwrap(), vec![2, 3, 5, 7, 11]);
//! ```
//!
//! The crate also carries the small helpers the stream demos and puzzle
//! inputs need: fixed and sparse grids, and line/integer input readers.

pub mod error;
pub mod stream;
pub mod lazy_stream_ext;

pub mod grid;
pub mod infinite_grid;
pub mod input;

// Re-export the stream API at the crate root; `drop` is only reachable as
// `stream::drop` and must not shadow the prelude
pub use error::{StreamError, StreamResult};
pub use lazy_stream_ext::{IntoLazyStream, LazyStreamExt};
pub use stream::{
    append, concat, cons, count, drop_while, filter, flat_map, fold, from_iter, from_slice,
    from_vec, integers_from, interleave, iter, iterate, last, map, nth, once, reduce, repeat, scan,
    sieve, take, take_while, to_vec, try_cons, try_from_iter, zip, Iter, Link, Stream, StreamCell,
};

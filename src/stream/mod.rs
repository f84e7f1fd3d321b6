//! Persistent lazy streams
//!
//! A stream is a chain of shared cons cells whose tails are computed on
//! first demand and memoized. Every combinator here takes and returns a
//! [`Link`], so the end of a stream is simply `None`.

pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;

// Re-export core types and combinators
pub use self::core::{filter, map, take, Link, Stream, StreamCell};

// Re-export constructors
pub use constructors::{
    cons, from_iter, from_slice, from_vec, integers_from, iterate, once, repeat, try_cons,
    try_from_iter,
};

// Re-export advanced combinators
pub use advanced::{append, concat, flat_map, sieve, zip};

// Re-export utility combinators and consumers
pub use utility::{
    count, drop, drop_while, fold, interleave, iter, last, nth, reduce, scan, take_while, to_vec,
    Iter,
};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # A Persistent Vector for Rust
//!
//! This library implements a persistent vector: an indexed sequence
//! whose update operations return a new vector and leave the old one
//! exactly as it was. It relies on structural sharing to make this
//! cheap, so holding onto every version of a growing sequence costs
//! log-sized slivers of memory rather than full copies, and the
//! behaviour of a value you have in hand can never change under you
//! because some other part of the code "updated" it.
//!
//! Because Rust is not a garbage collected language, and immutable
//! data structures generally rely on some sort of garbage collection,
//! the tree nodes behind a [`Vector`][vector::Vector] are kept behind
//! [`Arc`][std::sync::Arc]s. Reference counting is what lets two
//! versions of a vector jointly own the parts they have in common, and
//! it's atomic, so vectors can be shared and read across threads
//! freely. There are no locks anywhere: readers never coordinate, and
//! updates only ever write to nodes nothing else can see yet.
//!
//! The layout is a bit partitioned trie with a branching factor of 32
//! plus a tail buffer for the most recent appends, as popularised by
//! Clojure's `PersistentVector`. The operations this buys:
//!
//! | Operation | Complexity |
//! | --- | --- |
//! | [`push_back`][vector::Vector::push_back] | O(1)* |
//! | [`get`][vector::Vector::get] | O(log n) |
//! | [`len`][vector::Vector::len] / [`is_empty`][vector::Vector::is_empty] | O(1) |
//! | `clone` | O(1) |
//! | iteration, per step | O(1)* |
//!
//! (*) amortised: an occasional step pays O(log n) to copy the path
//! from the root down to a new leaf.
//!
//! Deliberately not here: in-place mutation of any kind, insertion and
//! removal at arbitrary positions, slicing and concatenation. This is
//! a grow-at-the-end, read-anywhere sequence.
//!
//! Sequential access comes in two flavours: plain iterators from
//! [`Vector::iter`][vector::Vector::iter], and the random access
//! [`Cursor`][vector::Cursor], which remembers the leaf it's sitting
//! in so that stepping and short jumps don't re-walk the tree.
//!
//! [vector::Vector]: ./vector/struct.Vector.html
//! [vector::Vector::push_back]: ./vector/struct.Vector.html#method.push_back
//! [vector::Vector::get]: ./vector/struct.Vector.html#method.get
//! [vector::Vector::len]: ./vector/struct.Vector.html#method.len
//! [vector::Vector::is_empty]: ./vector/struct.Vector.html#method.is_empty
//! [vector::Vector::iter]: ./vector/struct.Vector.html#method.iter
//! [vector::Cursor]: ./vector/struct.Cursor.html
//! [std::sync::Arc]: https://doc.rust-lang.org/std/sync/struct.Arc.html

#![cfg_attr(has_specialisation, feature(specialization))]

#[cfg(any(test, feature = "quickcheck"))]
extern crate quickcheck;

#[cfg(any(test, feature = "proptest"))]
#[macro_use]
extern crate proptest;

#[cfg(any(test, feature = "serde"))]
extern crate serde;
#[cfg(test)]
extern crate serde_json;

mod bits;
mod nodes;
mod util;

#[macro_use]
pub mod vector;

#[cfg(any(test, feature = "serde"))]
pub mod ser;

pub use vector::{Cursor, Vector};

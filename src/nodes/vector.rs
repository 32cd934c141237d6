// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::sync::Mutex;

use bits::{mask, BITS, BRANCHING};
use util::Ref;

/// A leaf node: a fixed block of `BRANCHING` value slots.
///
/// Slots past the number of elements the owning vector keeps in this
/// leaf are `None` and are never handed out.
pub struct Leaf<A> {
    values: [Option<A>; BRANCHING],
}

/// An inner node: a fixed block of `BRANCHING` child slots.
///
/// Slots past the logical reach of the tree are `None` and are never
/// descended into.
pub struct Inner<A> {
    children: [Option<Ref<Node<A>>>; BRANCHING],
}

/// A tree node, either a block of values or a block of children.
///
/// Nodes carry no size or depth of their own; both are implicit in the
/// owning vector's `shift` and in the node's position. Once a node is
/// reachable from a published vector it is never written to again.
pub enum Node<A> {
    Leaf(Leaf<A>),
    Inner(Inner<A>),
}

impl<A> Leaf<A> {
    pub fn new() -> Self {
        Leaf {
            values: [
                None, None, None, None, None, None, None, None, None, None, None, None, None, None,
                None, None, None, None, None, None, None, None, None, None, None, None, None, None,
                None, None, None, None,
            ],
        }
    }

    pub fn unit(value: A) -> Self {
        let mut leaf = Leaf::new();
        leaf.values[0] = Some(value);
        leaf
    }

    pub fn get(&self, slot: usize) -> Option<&A> {
        self.values[slot].as_ref()
    }

    pub fn set(&mut self, slot: usize, value: A) {
        self.values[slot] = Some(value);
    }
}

impl<A: Clone> Clone for Leaf<A> {
    fn clone(&self) -> Self {
        Leaf {
            values: self.values.clone(),
        }
    }
}

impl<A> Inner<A> {
    pub fn new() -> Self {
        Inner {
            children: [
                None, None, None, None, None, None, None, None, None, None, None, None, None, None,
                None, None, None, None, None, None, None, None, None, None, None, None, None, None,
                None, None, None, None,
            ],
        }
    }

    /// An inner node with a single child in slot 0.
    pub fn unit(child: Ref<Node<A>>) -> Self {
        let mut inner = Inner::new();
        inner.children[0] = Some(child);
        inner
    }

    /// An inner node with children in slots 0 and 1.
    pub fn pair(left: Ref<Node<A>>, right: Ref<Node<A>>) -> Self {
        let mut inner = Inner::new();
        inner.children[0] = Some(left);
        inner.children[1] = Some(right);
        inner
    }

    pub fn child(&self, slot: usize) -> Option<&Node<A>> {
        self.children[slot].as_ref().map(|child| &**child)
    }

    pub fn set(&mut self, slot: usize, child: Ref<Node<A>>) {
        self.children[slot] = Some(child);
    }
}

impl<A> Clone for Inner<A> {
    fn clone(&self) -> Self {
        Inner {
            children: self.children.clone(),
        }
    }
}

impl<A> Node<A> {
    pub fn empty_leaf() -> Self {
        Node::Leaf(Leaf::new())
    }

    pub fn empty_inner() -> Self {
        Node::Inner(Inner::new())
    }

    pub fn leaf(&self) -> &Leaf<A> {
        match *self {
            Node::Leaf(ref leaf) => leaf,
            Node::Inner(_) => panic!("Node::leaf: expected a leaf but found an inner node"),
        }
    }

    pub fn inner(&self) -> &Inner<A> {
        match *self {
            Node::Inner(ref inner) => inner,
            Node::Leaf(_) => panic!("Node::inner: expected an inner node but found a leaf"),
        }
    }
}

impl<A: Clone> Clone for Node<A> {
    fn clone(&self) -> Self {
        match *self {
            Node::Leaf(ref leaf) => Node::Leaf(leaf.clone()),
            Node::Inner(ref inner) => Node::Inner(inner.clone()),
        }
    }
}

/// A type-erased handle to one of the cached empty nodes.
///
/// The box only ever holds a `Ref<Node<A>>` to an empty node, which
/// contains no `A` values and no children: cloning the handle touches
/// nothing but the atomic count, and the cache keeps its own reference
/// for the life of the process, so the node itself is never dropped.
struct CachedNode(Box<dyn Any>);

#[allow(unsafe_code)]
unsafe impl Send for CachedNode {}

static EMPTY_NODES: Mutex<BTreeMap<TypeId, (CachedNode, CachedNode)>> =
    Mutex::new(BTreeMap::new());

/// Get the process-wide empty inner node and empty leaf for an element
/// type, allocating the pair the first time the type is seen.
pub fn empty_nodes<A: 'static>() -> (Ref<Node<A>>, Ref<Node<A>>) {
    let mut cache = EMPTY_NODES
        .lock()
        .expect("Node::empty_nodes: sentinel cache lock poisoned");
    let entry = cache.entry(TypeId::of::<A>()).or_insert_with(|| {
        (
            CachedNode(Box::new(Ref::new(Node::<A>::empty_inner()))),
            CachedNode(Box::new(Ref::new(Node::<A>::empty_leaf()))),
        )
    });
    let CachedNode(ref inner) = entry.0;
    let CachedNode(ref leaf) = entry.1;
    let inner = inner
        .downcast_ref::<Ref<Node<A>>>()
        .expect("Node::empty_nodes: sentinel cache held the wrong type");
    let leaf = leaf
        .downcast_ref::<Ref<Node<A>>>()
        .expect("Node::empty_nodes: sentinel cache held the wrong type");
    (inner.clone(), leaf.clone())
}

/// Construct a spine of single child inner nodes reaching down `level`
/// bits, with `node` as its sole descendant.
pub fn new_path<A>(level: usize, node: Ref<Node<A>>) -> Ref<Node<A>> {
    if level == 0 {
        node
    } else {
        Ref::new(Node::Inner(Inner::unit(new_path(level - BITS, node))))
    }
}

/// Copy the spine from `parent` down to the slot where a full tail gets
/// grafted in, sharing every sibling subtree, and return the new parent.
///
/// `size` is the vector's size before the append; the last element of
/// the tail being grafted lives at index `size - 1`.
pub fn push_tail<A>(size: usize, level: usize, parent: &Inner<A>, tail: Ref<Node<A>>) -> Inner<A> {
    let sub_index = mask(size - 1, level);
    let mut out = parent.clone();
    let child = if level == BITS {
        tail
    } else {
        match parent.child(sub_index) {
            Some(child) => Ref::new(Node::Inner(push_tail(
                size,
                level - BITS,
                child.inner(),
                tail,
            ))),
            None => new_path(level - BITS, tail),
        }
    };
    out.set(sub_index, child);
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_path_depth() {
        let leaf: Ref<Node<usize>> = Ref::new(Node::Leaf(Leaf::unit(1)));
        let spine = new_path(2 * BITS, leaf);
        let mid = spine.inner().child(0).unwrap();
        let bottom = mid.inner().child(0).unwrap();
        assert_eq!(Some(&1), bottom.leaf().get(0));
    }

    #[test]
    fn empty_nodes_are_cached() {
        let (inner1, leaf1) = empty_nodes::<usize>();
        let (inner2, leaf2) = empty_nodes::<usize>();
        assert!(Ref::ptr_eq(&inner1, &inner2));
        assert!(Ref::ptr_eq(&leaf1, &leaf2));
    }

    #[test]
    fn push_tail_shares_siblings() {
        // A root with one grafted leaf; grafting a second must reuse
        // the first leaf's handle in the copied root.
        let first: Ref<Node<usize>> = Ref::new(Node::Leaf(Leaf::unit(1)));
        let mut root = Inner::new();
        root.set(0, first.clone());
        let second = Ref::new(Node::Leaf(Leaf::unit(2)));
        let out = push_tail(2 * BRANCHING, BITS, &root, second);
        assert!(Ref::ptr_eq(
            root.children[0].as_ref().unwrap(),
            out.children[0].as_ref().unwrap()
        ));
        assert_eq!(Some(&2), out.child(1).unwrap().leaf().get(0));
    }
}

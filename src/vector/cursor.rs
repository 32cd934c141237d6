use bits::{BRANCHING, MASK};
use nodes::vector::Leaf;
use vector::Vector;

/// A position inside a `Vector` that remembers its leaf.
///
/// A cursor sits on a logical index between 0 and the vector's length
/// inclusive, and keeps hold of the leaf node that index lives in.
/// Stepping to a neighbouring index inside the same leaf is a pointer
/// bump; only crossing into the next leaf walks the tree again, so
/// sweeping a cursor across the whole vector costs O(1) per step
/// amortised where repeated [`get`][Vector::get] calls would pay the
/// full descent every time.
///
/// The one index with no element is the length itself: the past-the-end
/// position, where [`get`][get] returns `None`. Two cursors over the
/// same vector are equal exactly when their indices are equal.
///
/// A cursor borrows its vector, and stays valid however many updated
/// vectors are built from it in the meantime; updates never touch the
/// nodes the cursor is looking at.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate trievec;
/// # fn main() {
/// let vec = vector![1, 2, 3, 4, 5];
/// let mut cursor = vec.cursor();
/// assert_eq!(Some(&1), cursor.get());
/// cursor.advance(3);
/// assert_eq!(Some(&4), cursor.get());
/// cursor.advance(-2);
/// assert_eq!(Some(&2), cursor.get());
/// # }
/// ```
///
/// [get]: #method.get
/// [Vector::get]: struct.Vector.html#method.get
pub struct Cursor<'a, A: 'a> {
    vector: &'a Vector<A>,
    index: usize,
    base: usize,
    leaf: &'a Leaf<A>,
}

impl<'a, A: Clone> Cursor<'a, A> {
    /// Construct a cursor on the first element of a vector.
    ///
    /// For an empty vector this is the past-the-end position.
    #[must_use]
    pub fn begin(vector: &'a Vector<A>) -> Self {
        Cursor {
            vector,
            index: 0,
            base: 0,
            leaf: vector.array_for(0),
        }
    }

    /// Construct a cursor on the past-the-end position of a vector.
    #[must_use]
    pub fn end(vector: &'a Vector<A>) -> Self {
        let index = vector.len();
        Cursor {
            vector,
            index,
            base: index - (index & MASK),
            // The end position borrows the leaf of the last element;
            // there is no leaf at the index itself.
            leaf: vector.array_for(if index == 0 { 0 } else { index - 1 }),
        }
    }

    /// The logical index the cursor is sitting on.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Get a reference to the element under the cursor.
    ///
    /// Returns `None` on the past-the-end position.
    ///
    /// Time: O(1)
    #[must_use]
    pub fn get(&self) -> Option<&'a A> {
        if self.index >= self.vector.len() {
            None
        } else {
            self.leaf.get(self.index - self.base)
        }
    }

    /// Get a reference to the element under the cursor.
    ///
    /// Panics on the past-the-end position.
    ///
    /// Time: O(1)
    #[must_use]
    pub fn index(&self) -> &'a A {
        self.get().expect("Cursor::index: cursor out of bounds")
    }

    /// Move the cursor by `n` places, forwards or backwards.
    ///
    /// If the target index stays inside the cached leaf this is a
    /// constant time bump; otherwise the new leaf is looked up from
    /// the root.
    ///
    /// Panics if the move would take the cursor below index 0 or past
    /// the past-the-end position.
    ///
    /// Time: O(1) within the current leaf, O(log n) beyond it
    pub fn advance(&mut self, n: isize) {
        self.index = if n < 0 {
            match self.index.checked_sub((-n) as usize) {
                Some(index) => index,
                None => panic!("Cursor::advance: can't advance before the start of the vector"),
            }
        } else {
            let index = self.index + n as usize;
            if index > self.vector.len() {
                panic!("Cursor::advance: can't advance past the end of the vector");
            }
            index
        };
        if self.index < self.base || self.index - self.base >= BRANCHING {
            self.refresh();
        }
    }

    /// The number of places `other` sits ahead of this cursor;
    /// negative if it sits behind.
    #[must_use]
    pub fn distance_to(&self, other: &Cursor<'a, A>) -> isize {
        if other.index > self.index {
            (other.index - self.index) as isize
        } else {
            -((self.index - other.index) as isize)
        }
    }

    /// Re-aim the leaf cache after the cursor has left it.
    fn refresh(&mut self) {
        self.base = self.index - (self.index & MASK);
        // At the past-the-end position there may be no leaf to look up
        // (a full tail puts `base` at the length itself), so borrow the
        // last element's leaf the way `end` does.
        let target = if self.index == self.vector.len() && self.index > 0 {
            self.index - 1
        } else {
            self.index
        };
        self.leaf = self.vector.array_for(target);
    }
}

impl<'a, A> Clone for Cursor<'a, A> {
    fn clone(&self) -> Self {
        Cursor {
            vector: self.vector,
            index: self.index,
            base: self.base,
            leaf: self.leaf,
        }
    }
}

impl<'a, A> PartialEq for Cursor<'a, A> {
    /// Cursors compare by index alone; comparing cursors over two
    /// different vectors is meaningless.
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<'a, A> Eq for Cursor<'a, A> {}

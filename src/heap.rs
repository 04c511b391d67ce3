//! Binary heap laid out in place over a borrowed slice.
//!
//! Position `p` has children at `2p + 1` and `2p + 2` and its parent at `(p - 1) / 2`.
//! The root holds the element no other element is "greater" than under the comparator,
//! i.e. a max-heap for a "less" comparator, which is what heapsort needs to produce
//! ascending output.

/// A max-heap (under `is_less`) occupying the prefix `[0, len)` of a borrowed slice.
///
/// Slots in `[len, capacity)` hold elements already extracted by [`Heap::pop`], in
/// ascending order once the heap is drained.
pub struct Heap<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    data: &'a mut [T],
    len: usize,
    is_less: F,
}

impl<'a, T, F> Heap<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    /// Builds a heap over the whole of `data` in O(n).
    ///
    /// Sifts down from the last non-leaf position back to the root.
    pub fn new(data: &'a mut [T], is_less: F) -> Self {
        let len = data.len();
        let mut heap = Heap {
            data,
            len,
            is_less,
        };
        for pos in (0..len / 2).rev() {
            heap.sift_down(pos);
        }
        heap
    }

    /// Number of elements still inside the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the underlying slice.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The live heap region.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// The root of the heap, if any.
    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Extracts the root.
    ///
    /// The root is swapped into the last live slot, the heap shrinks by one and the
    /// element moved to the root is sifted down. The returned reference points at the
    /// extracted element, which now rests just past the end of the heap.
    pub fn pop(&mut self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.data.swap(0, self.len);
        self.sift_down(0);
        Some(&self.data[self.len])
    }

    /// Inserts `value` into the first slot past the end of the heap and sifts it up.
    ///
    /// Returns the element previously stored in that slot. When the heap already spans
    /// the whole slice, `value` is handed back as `Err`.
    pub fn push(&mut self, value: T) -> Result<T, T> {
        if self.len == self.data.len() {
            return Err(value);
        }
        let displaced = std::mem::replace(&mut self.data[self.len], value);
        self.len += 1;
        self.sift_up(self.len - 1);
        Ok(displaced)
    }

    /// Drains the heap into the tail of the slice, leaving the whole slice in
    /// ascending order under `is_less`.
    pub fn sort(mut self) {
        while self.len >= 2 {
            self.pop();
        }
    }

    /// Moves the element at `pos` down until neither child is greater than it.
    pub fn sift_down(&mut self, mut pos: usize) {
        while let Some(child) = self.greater_child(pos) {
            if !(self.is_less)(&self.data[pos], &self.data[child]) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }

    /// Moves the element at `pos` up while its parent is less than it.
    pub fn sift_up(&mut self, mut pos: usize) {
        while let Some(parent) = parent(pos) {
            if !(self.is_less)(&self.data[parent], &self.data[pos]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    /// Picks the child to compare against during a sift-down.
    ///
    /// `None` means `pos` is a leaf. With two children the right one wins unless it is
    /// strictly less than the left one, so ties go right.
    fn greater_child(&mut self, pos: usize) -> Option<usize> {
        let left = self.child(pos, 1);
        let right = self.child(pos, 2);
        match (left, right) {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(only),
            (Some(left), Some(right)) => {
                if (self.is_less)(&self.data[right], &self.data[left]) {
                    Some(left)
                } else {
                    Some(right)
                }
            }
        }
    }

    #[inline]
    fn child(&self, pos: usize, offset: usize) -> Option<usize> {
        pos.checked_mul(2)
            .and_then(|p| p.checked_add(offset))
            .filter(|&c| c < self.len)
    }
}

#[inline]
fn parent(pos: usize) -> Option<usize> {
    if pos == 0 { None } else { Some((pos - 1) / 2) }
}

/// Returns `true` if `v` satisfies the max-heap invariant under `is_less`: no element
/// is greater than its parent.
pub fn is_heap_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).all(|pos| !is_less(&v[(pos - 1) / 2], &v[pos]))
}

/// [`is_heap_by`] under the natural order.
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_by(v, |a, b| a.lt(b))
}

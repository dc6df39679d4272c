//! The ordered collection every visualization mutates
//!
//! A [`Collection`] is a plain sequence of integers plus a [`Capacity`] policy.
//! Structures never touch the values directly: they describe the net change of
//! an operation as an [`Effect`], and [`Collection::apply`] turns that into a
//! new collection. The same function produces the mid-animation preview and the
//! terminal mutation, so the two can never disagree.

use std::fmt;

/// How many elements a collection may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// No bound (linked list)
    Unbounded,
    /// Hard bound; growth beyond it is a no-op (array-backed queue)
    Fixed(usize),
    /// Soft bound that doubles when a growth fills it (vector)
    Growable(usize),
}

impl Capacity {
    /// Numeric capacity, if the policy has one
    pub fn limit(self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Fixed(n) | Capacity::Growable(n) => Some(n),
        }
    }
}

/// Net structural change of one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Splice `value` in at `position` (clamped into `0..=len`)
    InsertAt { position: i64, value: i64 },
    /// Remove the element at `position`; no-op when out of bounds
    RemoveAt { position: i64 },
    /// Append at the rear, subject to the capacity policy
    PushBack { value: i64 },
    /// Remove the front element; no-op when empty
    PopFront,
    /// Sort ascending
    Sort,
    /// Reverse in place
    Reverse,
}

/// Outcome of applying an [`Effect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The collection changed
    Changed,
    /// The effect was rejected by bounds or capacity and nothing changed
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    values: Vec<i64>,
    capacity: Capacity,
}

impl Collection {
    pub fn new(values: Vec<i64>, capacity: Capacity) -> Self {
        Collection { values, capacity }
    }

    pub fn unbounded(values: Vec<i64>) -> Self {
        Self::new(values, Capacity::Unbounded)
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// True when a `Fixed` collection cannot take another element
    pub fn is_full(&self) -> bool {
        matches!(self.capacity, Capacity::Fixed(n) if self.values.len() >= n)
    }

    /// Pure application of `effect`, returning the resulting collection
    pub fn apply(&self, effect: Effect) -> Collection {
        let mut next = self.clone();
        next.apply_in_place(effect);
        next
    }

    /// Apply `effect` to this collection
    pub fn apply_in_place(&mut self, effect: Effect) -> Applied {
        match effect {
            Effect::InsertAt { position, value } => {
                let index = clamp_insert_index(position, self.values.len());
                self.grow_for_push();
                self.values.insert(index, value);
                Applied::Changed
            }
            Effect::RemoveAt { position } => match checked_index(position, self.values.len()) {
                Some(index) => {
                    self.values.remove(index);
                    Applied::Changed
                }
                None => Applied::Unchanged,
            },
            Effect::PushBack { value } => {
                if self.is_full() {
                    return Applied::Unchanged;
                }
                self.grow_for_push();
                self.values.push(value);
                Applied::Changed
            }
            Effect::PopFront => {
                if self.values.is_empty() {
                    return Applied::Unchanged;
                }
                self.values.remove(0);
                Applied::Changed
            }
            Effect::Sort => {
                self.values.sort_unstable();
                Applied::Changed
            }
            Effect::Reverse => {
                self.values.reverse();
                Applied::Changed
            }
        }
    }

    /// Set a growable capacity to `n` when it can hold the current values
    pub fn reserve(&mut self, n: usize) -> Applied {
        match self.capacity {
            Capacity::Growable(_) if n >= self.values.len() => {
                self.capacity = Capacity::Growable(n);
                Applied::Changed
            }
            _ => Applied::Unchanged,
        }
    }

    /// Shrink a growable capacity down to the current length
    pub fn shrink_to_fit(&mut self) -> Applied {
        match self.capacity {
            Capacity::Growable(_) => {
                self.capacity = Capacity::Growable(self.values.len());
                Applied::Changed
            }
            _ => Applied::Unchanged,
        }
    }

    // Doubling happens when the element about to be added fills the buffer.
    fn grow_for_push(&mut self) {
        if let Capacity::Growable(n) = self.capacity {
            if self.values.len() + 1 >= n {
                self.capacity = Capacity::Growable((n * 2).max(1));
            }
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

/// Clamp an insert position into `0..=len`
pub fn clamp_insert_index(position: i64, len: usize) -> usize {
    if position <= 0 {
        0
    } else {
        usize::try_from(position).map_or(len, |p| p.min(len))
    }
}

/// Convert a position into an index of an existing element
pub fn checked_index(position: i64, len: usize) -> Option<usize> {
    usize::try_from(position).ok().filter(|&p| p < len)
}

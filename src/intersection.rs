//! src/intersection.rs
//! -------------------
//! Ray/object hit records and the ordered collection that picks the visible hit.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ptr;

use crate::algebra::approx_eq;
use crate::sphere::Sphere;

/// Parametric distance `t` plus a borrowed reference to the object hit.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Sphere,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Sphere) -> Self {
        Self { t, object }
    }
}

/// Same `t` (within `EPSILON`) on the very same object instance.
impl PartialEq for Intersection<'_> {
    fn eq(&self, i: &Self) -> bool {
        approx_eq(self.t, i.t) && ptr::eq(self.object, i.object)
    }
}

// Heap entry ordered so the record nearest to t = 0 is the maximum. Ties go
// to the record inserted first.
#[derive(Clone, Copy, Debug)]
struct Entry<'a> {
    seq: usize,
    hit: Intersection<'a>,
}

impl Ord for Entry<'_> {
    fn cmp(&self, e: &Self) -> Ordering {
        e.hit.t.abs().total_cmp(&self.hit.t.abs()).then_with(|| e.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, e: &Self) -> Option<Ordering> {
        Some(self.cmp(e))
    }
}

impl PartialEq for Entry<'_> {
    fn eq(&self, e: &Self) -> bool {
        self.cmp(e) == Ordering::Equal
    }
}

impl Eq for Entry<'_> {}

/// Ordered multiset of intersections, split into the records in front of the
/// ray origin (`t >= 0`) and those behind it (`t < 0`). Both halves pop the
/// record nearest to the origin first.
#[derive(Clone, Debug, Default)]
pub struct Intersections<'a> {
    ahead: BinaryHeap<Entry<'a>>,
    behind: BinaryHeap<Entry<'a>>,
    next_seq: usize,
}

impl<'a> Intersections<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, hit: Intersection<'a>) {
        let entry = Entry { seq: self.next_seq, hit };
        self.next_seq += 1;
        if hit.t >= 0.0 {
            self.ahead.push(entry);
        } else {
            self.behind.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.ahead.len() + self.behind.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The record with the smallest non-negative `t`, if any.
    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.ahead.peek().map(|e| &e.hit)
    }

    pub fn pop(&mut self) -> Option<Intersection<'a>> {
        self.ahead.pop().map(|e| e.hit)
    }

    /// Removes the negative record closest to zero.
    pub fn pop_negative(&mut self) -> Option<Intersection<'a>> {
        self.behind.pop().map(|e| e.hit)
    }

    /// Union of both collections. Records from `other` rank after records of
    /// `self` with an equal `t`.
    pub fn merge(mut self, other: Intersections<'a>) -> Intersections<'a> {
        let offset = self.next_seq;
        let shift = move |e: Entry<'a>| Entry { seq: e.seq + offset, hit: e.hit };
        self.ahead.extend(other.ahead.into_iter().map(shift));
        self.behind.extend(other.behind.into_iter().map(shift));
        self.next_seq += other.next_seq;
        self
    }

    /// Every record, by ascending `t`.
    pub fn into_sorted_vec(self) -> Vec<Intersection<'a>> {
        // heap order is "nearest to zero is greatest", so the behind half is
        // already ascending in `t` and the ahead half is descending
        let behind = self.behind.into_sorted_vec().into_iter().map(|e| e.hit);
        let ahead = self.ahead.into_sorted_vec().into_iter().rev().map(|e| e.hit);
        behind.chain(ahead).collect()
    }
}

impl<'a> FromIterator<Intersection<'a>> for Intersections<'a> {
    fn from_iter<I: IntoIterator<Item = Intersection<'a>>>(iter: I) -> Self {
        let mut xs = Self::new();
        for i in iter {
            xs.push(i);
        }
        xs
    }
}

impl<'a> Extend<Intersection<'a>> for Intersections<'a> {
    fn extend<I: IntoIterator<Item = Intersection<'a>>>(&mut self, iter: I) {
        for i in iter {
            self.push(i);
        }
    }
}

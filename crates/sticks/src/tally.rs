//! Sticks plus their endpoint occurrence tally.
//!
//! `StickSet` is the hand-off between the input reader and the closure check:
//! every pushed stick bumps the count of both endpoints.

use std::collections::BTreeMap;

use crate::geom2::{Point, Stick};

/// Point → occurrence count over all stick endpoints. Iterates in point order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointTally {
    counts: BTreeMap<Point, usize>,
}

impl EndpointTally {
    #[inline]
    pub fn add(&mut self, p: Point) {
        *self.counts.entry(p).or_insert(0) += 1;
    }
    #[inline]
    pub fn count(&self, p: Point) -> usize {
        self.counts.get(&p).copied().unwrap_or(0)
    }
    /// Number of distinct endpoints.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
    /// Total endpoints tallied (twice the stick count).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = (Point, usize)> + '_ {
        self.counts.iter().map(|(p, c)| (*p, *c))
    }
    /// Distinct endpoints in point order.
    pub fn points(&self) -> Vec<Point> {
        self.counts.keys().copied().collect()
    }
}

/// Sticks in input order with their endpoint tally kept in sync.
#[derive(Clone, Debug, Default)]
pub struct StickSet {
    sticks: Vec<Stick>,
    tally: EndpointTally,
}

impl StickSet {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            sticks: Vec::with_capacity(n),
            tally: EndpointTally::default(),
        }
    }
    pub fn push(&mut self, s: Stick) {
        for p in s.endpoints() {
            self.tally.add(p);
        }
        self.sticks.push(s);
    }
    #[inline]
    pub fn sticks(&self) -> &[Stick] {
        &self.sticks
    }
    #[inline]
    pub fn tally(&self) -> &EndpointTally {
        &self.tally
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.sticks.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sticks.is_empty()
    }
}

impl FromIterator<Stick> for StickSet {
    fn from_iter<I: IntoIterator<Item = Stick>>(iter: I) -> Self {
        let mut set = StickSet::default();
        set.extend(iter);
        set
    }
}

impl Extend<Stick> for StickSet {
    fn extend<I: IntoIterator<Item = Stick>>(&mut self, iter: I) {
        for s in iter {
            self.push(s);
        }
    }
}

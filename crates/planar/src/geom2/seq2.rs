//! Ordered point sequences.
//!
//! `Seq2` owns its points in one of two layouts chosen at construction:
//! - inline: a boxed slice, length fixed forever;
//! - external: a `Vec` whose capacity is tracked apart from its length.
//!
//! Both layouts share one read contract (`len`, `get`, `iter`, `as_slice`).
//! Growth is only exposed on [`Vec2Array`], which always uses the external
//! layout.

use std::fmt;
use std::ops::Index;

use super::affine::Affine;
use super::display::fmt_points;
use super::Vec2;

#[derive(Clone, Debug)]
enum Storage {
    Inline(Box<[Vec2]>),
    External(Vec<Vec2>),
}

impl Storage {
    #[inline]
    fn as_slice(&self) -> &[Vec2] {
        match self {
            Storage::Inline(b) => b,
            Storage::External(v) => v,
        }
    }
}

/// Ordered sequence of points.
#[derive(Clone, Debug)]
pub struct Seq2 {
    storage: Storage,
}

impl Seq2 {
    /// Fixed-length sequence with inline storage.
    pub fn new<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Self {
        let pts: Vec<Vec2> = points.into_iter().map(Into::into).collect();
        Self {
            storage: Storage::Inline(pts.into_boxed_slice()),
        }
    }

    /// Sequence backed by a growable buffer (keeps the buffer's capacity).
    pub fn external(points: Vec<Vec2>) -> Self {
        Self {
            storage: Storage::External(points),
        }
    }

    pub fn from_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Self {
        Self::new(points)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline(_))
    }

    /// Allocated slots; equals `len` for the inline layout.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline(b) => b.len(),
            Storage::External(v) => v.capacity(),
        }
    }

    /// Bounds-checked element access.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Vec2> {
        self.as_slice().get(i).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Vec2>> {
        self.as_slice().iter().copied()
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.as_slice().to_vec()
    }

    /// New sequence with every point mapped through `t`, same layout.
    pub fn transform(&self, t: &Affine) -> Seq2 {
        let pts = t.apply_all(self.as_slice());
        match self.storage {
            Storage::Inline(_) => Seq2::new(pts),
            Storage::External(_) => Seq2::external(pts),
        }
    }
}

impl PartialEq for Seq2 {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Index<usize> for Seq2 {
    type Output = Vec2;
    #[inline]
    fn index(&self, i: usize) -> &Vec2 {
        &self.as_slice()[i]
    }
}

impl<'a> IntoIterator for &'a Seq2 {
    type Item = Vec2;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Vec2>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Seq2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_points("Seq2", self.as_slice()))
    }
}

/// Growable point sequence (external layout, amortized doubling growth).
#[derive(Clone, Debug, PartialEq)]
pub struct Vec2Array {
    seq: Seq2,
}

impl Default for Vec2Array {
    fn default() -> Self {
        Self::new()
    }
}

impl Vec2Array {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seq: Seq2::external(Vec::with_capacity(capacity)),
        }
    }

    pub fn from_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Self {
        Self {
            seq: Seq2::external(points.into_iter().map(Into::into).collect()),
        }
    }

    // Runs `f` on the growable buffer. The layout is external by
    // construction; an inline buffer would be moved out into a `Vec`.
    fn with_buf<R>(&mut self, f: impl FnOnce(&mut Vec<Vec2>) -> R) -> R {
        let mut buf = match std::mem::replace(&mut self.seq.storage, Storage::External(Vec::new())) {
            Storage::External(v) => v,
            Storage::Inline(b) => b.into_vec(),
        };
        let out = f(&mut buf);
        self.seq.storage = Storage::External(buf);
        out
    }

    pub fn push(&mut self, p: impl Into<Vec2>) {
        let p = p.into();
        self.with_buf(|v| v.push(p));
    }

    pub fn reserve(&mut self, additional: usize) {
        self.with_buf(|v| v.reserve(additional));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.seq.capacity()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Vec2> {
        self.seq.get(i)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        self.seq.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Vec2>> {
        self.seq.iter()
    }

    pub fn to_vec(&self) -> Vec<Vec2> {
        self.seq.to_vec()
    }

    #[inline]
    pub fn as_seq2(&self) -> &Seq2 {
        &self.seq
    }

    pub fn into_seq2(self) -> Seq2 {
        self.seq
    }

    pub fn transform(&self, t: &Affine) -> Vec2Array {
        Self {
            seq: self.seq.transform(t),
        }
    }
}

impl<P: Into<Vec2>> Extend<P> for Vec2Array {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.with_buf(|v| v.extend(iter.into_iter().map(Into::into)));
    }
}

impl<P: Into<Vec2>> FromIterator<P> for Vec2Array {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl Index<usize> for Vec2Array {
    type Output = Vec2;
    #[inline]
    fn index(&self, i: usize) -> &Vec2 {
        &self.seq[i]
    }
}

impl fmt::Display for Vec2Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_points("Vec2Array", self.as_slice()))
    }
}

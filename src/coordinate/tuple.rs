use super::*;

// ---- Indexing and vector space operators for Coor2D ----

use std::ops::{Add, Index, IndexMut, Sub};

impl Index<usize> for Coor2D {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Coor2D {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

impl Add<Coor2D> for Coor2D {
    type Output = Self;
    fn add(self, other: Coor2D) -> Self {
        Coor2D([self.0[0] + other.0[0], self.0[1] + other.0[1]])
    }
}

impl Sub<Coor2D> for Coor2D {
    type Output = Self;
    fn sub(self, other: Coor2D) -> Self {
        Coor2D([self.0[0] - other.0[0], self.0[1] - other.0[1]])
    }
}

/// CoordinateTuple is the ISO-19111 atomic spatial referencing element.
/// So loosely speaking, a CoordinateSet is a collection of CoordinateTuples.
///
/// The accessors are pragmatically named (x, y, xy). While these names may
/// be geodetically naïve, they align well with the internal coordinate order
/// convention of the projection: longitude first, latitude second, and
/// easting first, northing second.
///
/// All accessors have default implementations, except the 3 methods
/// [`nth_unchecked()`](Self::nth_unchecked()),
/// [`set_nth_unchecked()`](Self::set_nth_unchecked) and
/// [`dim()`](Self::dim()),
/// which must be provided by the implementer.
pub trait CoordinateTuple {
    /// Construct a new `CoordinateTuple`, with all elements set to `fill`
    fn new(fill: f64) -> Self;

    /// Access the n'th (0-based) element of the CoordinateTuple.
    /// May panic if n >= DIMENSION.
    fn nth_unchecked(&self, n: usize) -> f64;

    /// Replace the n'th (0-based) element of the `CoordinateTuple` with `value`.
    /// May panic if `n >=` [`dim()`](Self::dim()).
    fn set_nth_unchecked(&mut self, n: usize, value: f64);

    /// Native dimension of the coordinate tuple
    fn dim(&self) -> usize;

    /// Access the n'th (0-based) element of the CoordinateTuple.
    /// Returns NaN if `n >= DIMENSION`.
    fn nth(&self, n: usize) -> f64 {
        if n < self.dim() {
            self.nth_unchecked(n)
        } else {
            f64::NAN
        }
    }

    /// Pragmatically named accessor for the first element of the CoordinateTuple.
    fn x(&self) -> f64 {
        self.nth_unchecked(0)
    }

    /// Pragmatically named accessor for the second element of the CoordinateTuple.
    fn y(&self) -> f64 {
        if self.dim() > 1 {
            self.nth_unchecked(1)
        } else {
            f64::NAN
        }
    }

    /// A tuple containing the first two components of the CoordinateTuple.
    fn xy(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    /// Fill all elements of `self` with `value`
    fn fill(&mut self, value: f64) {
        for n in 0..self.dim() {
            self.set_nth_unchecked(n, value);
        }
    }

    /// Replace the two first elements of the `CoordinateTuple` with `x` and `y`.
    /// If the dimension is less than 2, fill the coordinate with `f64::NAN`.
    fn set_xy(&mut self, x: f64, y: f64) {
        if self.dim() > 1 {
            self.set_nth_unchecked(0, x);
            self.set_nth_unchecked(1, y);
        } else {
            self.fill(f64::NAN);
        }
    }

    /// Euclidean distance between two points in the 2D plane.
    ///
    /// Primarily used to compute the distance between two projected points
    /// in their projected plane. Typically, this distance will differ from
    /// the actual distance in the real world.
    ///
    /// # Examples
    ///
    /// ```
    /// use laea::prelude::*;
    /// let t = 1000 as f64;
    /// let p0 = Coor2D::origin();
    /// let p1 = Coor2D::raw(t, t);
    /// assert_eq!(p0.hypot2(&p1), t.hypot(t));
    /// ```
    #[must_use]
    fn hypot2(&self, other: &Self) -> f64
    where
        Self: Sized,
    {
        let (u, v) = self.xy();
        let (x, y) = other.xy();
        (u - x).hypot(v - y)
    }
}

impl CoordinateTuple for Coor2D {
    fn new(fill: f64) -> Self {
        Coor2D([fill; 2])
    }

    fn dim(&self) -> usize {
        2
    }

    fn nth_unchecked(&self, n: usize) -> f64 {
        self.0[n]
    }

    fn set_nth_unchecked(&mut self, n: usize, value: f64) {
        self.0[n] = value;
    }
}

// For good measure, let's also implement it for a plain 2D f64 tuple
#[rustfmt::skip]
impl CoordinateTuple for (f64, f64) {
    fn new(fill: f64) -> Self {
        (fill, fill)
    }

    fn dim(&self) -> usize { 2 }

    fn nth_unchecked(&self, n: usize) -> f64 {
        match n {
            0 => self.0,
            1 => self.1,
            _ => f64::NAN
        }
    }

    fn set_nth_unchecked(&mut self, n: usize, value: f64) {
        match n {
            0 => self.0 = value,
            1 => self.1 = value,
            _ => ()
        }
    }
}

// ----- T E S T S ---------------------------------------------------

use super::*;

/// `CoordinateSet` is the fundamental coordinate access interface in ISO-19111.
/// Strictly speaking, it is not a set, but (in abstract terms) rather an
/// indexed list, or (in more concrete terms): An array.
///
/// Here it is implemented simply as an accessor trait, that allows us to
/// access any user provided data model by iterating over its elements,
/// represented as a `Coor2D`
pub trait CoordinateSet {
    /// Number of coordinate tuples in the set
    fn len(&self) -> usize;

    /// Access the `index`th coordinate tuple
    fn get_coord(&self, index: usize) -> Coor2D;

    /// Overwrite the `index`th coordinate tuple
    fn set_coord(&mut self, index: usize, value: &Coor2D);

    /// Companion to `len()`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the two elements of the `index`th `CoordinateTuple`
    /// with `x` and `y`.
    /// Consider providing a type specific version, when implementing
    /// the CoordinateSet trait for a concrete data type: The default
    /// version is straightforward, but not necessarily efficient
    fn set_xy(&mut self, index: usize, x: f64, y: f64) {
        self.set_coord(index, &Coor2D([x, y]));
    }

    /// Access the two elements of the `index`th `CoordinateTuple`.
    fn xy(&self, index: usize) -> (f64, f64) {
        self.get_coord(index).xy()
    }

    /// Set all coordinate tuples in the set to NaN
    fn stomp(&mut self) {
        let nanny = Coor2D::nan();
        for i in 0..self.len() {
            self.set_coord(i, &nanny);
        }
    }
}

// Produce the correct len() method for arrays, slices, and vecs
macro_rules! length {
    (array) => {
        fn len(&self) -> usize {
            N
        }
    };

    (slice) => {
        fn len(&self) -> usize {
            (**self).len()
        }
    };

    (vec) => {
        fn len(&self) -> usize {
            self.len()
        }
    };
}

macro_rules! coordinate_set_impl_for_coor2d {
    ($kind:ident) => {
        length!($kind);

        fn get_coord(&self, index: usize) -> Coor2D {
            self[index]
        }

        fn set_coord(&mut self, index: usize, value: &Coor2D) {
            self[index] = *value;
        }

        fn xy(&self, index: usize) -> (f64, f64) {
            (self[index][0], self[index][1])
        }

        fn set_xy(&mut self, index: usize, x: f64, y: f64) {
            self[index] = Coor2D([x, y]);
        }
    };
}

impl<const N: usize> CoordinateSet for [Coor2D; N] {
    coordinate_set_impl_for_coor2d!(array);
}

impl CoordinateSet for &mut [Coor2D] {
    coordinate_set_impl_for_coor2d!(slice);
}

impl CoordinateSet for Vec<Coor2D> {
    coordinate_set_impl_for_coor2d!(vec);
}

// ----- T E S T S ---------------------------------------------------

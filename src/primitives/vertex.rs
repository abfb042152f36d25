//! Point access for the simplification algorithms.
//!
//! The algorithms only ever read two coordinates and an optional
//! force-retain flag, so any caller type can be simplified in place by
//! implementing [`Vertex`] rather than converting into [`Point2`] first.

use super::Point2;
use num_traits::Float;

/// A read-only view of a 2D vertex.
///
/// Implemented for [`Point2`], `(F, F)` tuples, `[F; 2]` arrays, references to
/// any vertex, and [`Marked`] wrappers.
pub trait Vertex {
    /// Coordinate type.
    type Scalar: Float;

    /// Horizontal coordinate.
    fn x(&self) -> Self::Scalar;

    /// Vertical coordinate.
    fn y(&self) -> Self::Scalar;

    /// Returns `true` if the vertex must be kept regardless of distance.
    ///
    /// Only the radial-distance pass honours this flag.
    #[inline]
    fn is_retained(&self) -> bool {
        false
    }

    /// Copies the coordinates into a [`Point2`].
    #[inline]
    fn to_point(&self) -> Point2<Self::Scalar> {
        Point2::new(self.x(), self.y())
    }
}

impl<F: Float> Vertex for Point2<F> {
    type Scalar = F;

    #[inline]
    fn x(&self) -> F {
        self.x
    }

    #[inline]
    fn y(&self) -> F {
        self.y
    }

    #[inline]
    fn to_point(&self) -> Point2<F> {
        *self
    }
}

impl<F: Float> Vertex for (F, F) {
    type Scalar = F;

    #[inline]
    fn x(&self) -> F {
        self.0
    }

    #[inline]
    fn y(&self) -> F {
        self.1
    }
}

impl<F: Float> Vertex for [F; 2] {
    type Scalar = F;

    #[inline]
    fn x(&self) -> F {
        self[0]
    }

    #[inline]
    fn y(&self) -> F {
        self[1]
    }
}

impl<V: Vertex + ?Sized> Vertex for &V {
    type Scalar = V::Scalar;

    #[inline]
    fn x(&self) -> V::Scalar {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> V::Scalar {
        (**self).y()
    }

    #[inline]
    fn is_retained(&self) -> bool {
        (**self).is_retained()
    }

    #[inline]
    fn to_point(&self) -> Point2<V::Scalar> {
        (**self).to_point()
    }
}

/// A vertex paired with a force-retain flag.
///
/// A retained vertex survives the radial-distance pass even when it sits
/// right next to the previously kept vertex. Use it to pin waypoints or
/// other points of interest in a dense trace.
///
/// # Example
///
/// ```
/// use polysimplify::{Marked, Point2, Vertex};
///
/// let pinned = Marked::retained(Point2::new(1.0, 2.0));
/// assert!(pinned.is_retained());
/// assert_eq!(pinned.x(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marked<P> {
    pub point: P,
    pub retained: bool,
}

impl<P> Marked<P> {
    /// Wraps `point` with an explicit flag.
    #[inline]
    pub fn new(point: P, retained: bool) -> Self {
        Self { point, retained }
    }

    /// Wraps `point` and marks it as retained.
    #[inline]
    pub fn retained(point: P) -> Self {
        Self::new(point, true)
    }

    /// Wraps `point` without marking it.
    #[inline]
    pub fn unmarked(point: P) -> Self {
        Self::new(point, false)
    }

    /// Unwraps the inner point.
    #[inline]
    pub fn into_inner(self) -> P {
        self.point
    }
}

impl<P: Vertex> Vertex for Marked<P> {
    type Scalar = P::Scalar;

    #[inline]
    fn x(&self) -> P::Scalar {
        self.point.x()
    }

    #[inline]
    fn y(&self) -> P::Scalar {
        self.point.y()
    }

    #[inline]
    fn is_retained(&self) -> bool {
        self.retained || self.point.is_retained()
    }

    #[inline]
    fn to_point(&self) -> Point2<P::Scalar> {
        self.point.to_point()
    }
}

impl<P> From<P> for Marked<P> {
    fn from(point: P) -> Self {
        Self::unmarked(point)
    }
}

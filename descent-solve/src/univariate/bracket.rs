use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or [`Triple`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or more points are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// The center of a triple is not strictly inside its bounds.
    #[error("center is not strictly between the bounds")]
    CenterOutside,
}

/// An interval known to contain a minimizer or a derivative root.
///
/// Bounds are always ordered so that `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or equal.
    pub fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bounds;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        Ok(Self::ordered(a, b))
    }

    /// Orders two points produced during a search.
    pub(super) fn ordered(a: f64, b: f64) -> Self {
        Self {
            left: a.min(b),
            right: a.max(b),
        }
    }

    /// Returns the left bound.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right bound.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.left..=self.right).contains(&x)
    }
}

/// A bracket with an interior point, used by three-point interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Triple {
    left: f64,
    center: f64,
    right: f64,
}

impl Triple {
    /// Validates a triple; the bounds may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if a point is non-finite, the bounds are equal,
    /// or the center is not strictly between them.
    pub fn new(a: f64, center: f64, b: f64) -> Result<Self, BracketError> {
        if !center.is_finite() {
            return Err(BracketError::NonFinite);
        }
        let bracket = Bracket::new([a, b])?;
        if center <= bracket.left || center >= bracket.right {
            return Err(BracketError::CenterOutside);
        }
        Ok(Self::ordered(a, center, b))
    }

    /// Orders the bounds of a triple produced during a search.
    pub(super) fn ordered(a: f64, center: f64, b: f64) -> Self {
        Self {
            left: a.min(b),
            center,
            right: a.max(b),
        }
    }

    /// Returns the left bound.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the interior point.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Returns the right bound.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the outer bounds as a [`Bracket`].
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        Bracket::ordered(self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bracket_reorders_bounds() {
        let bracket = Bracket::new([3.0, 1.0]).expect("valid bracket");
        assert_relative_eq!(bracket.left(), 1.0);
        assert_relative_eq!(bracket.right(), 3.0);
        assert_relative_eq!(bracket.width(), 2.0);
        assert_relative_eq!(bracket.midpoint(), 2.0);
        assert!(bracket.contains(3.0));
        assert!(!bracket.contains(3.5));
    }

    #[test]
    fn bracket_rejects_non_finite() {
        assert_eq!(Bracket::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(
            Bracket::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite)
        );
    }

    #[test]
    fn bracket_rejects_zero_width() {
        assert_eq!(Bracket::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn triple_requires_interior_center() {
        let triple = Triple::new(4.0, 3.0, 2.0).expect("valid triple");
        assert_relative_eq!(triple.left(), 2.0);
        assert_relative_eq!(triple.center(), 3.0);
        assert_relative_eq!(triple.right(), 4.0);
        assert_eq!(triple.bracket().as_array(), [2.0, 4.0]);

        assert_eq!(Triple::new(0.0, 0.0, 1.0), Err(BracketError::CenterOutside));
        assert_eq!(Triple::new(0.0, 2.0, 1.0), Err(BracketError::CenterOutside));
        assert_eq!(Triple::new(0.0, f64::NAN, 1.0), Err(BracketError::NonFinite));
    }
}

//! Geographic bounding boxes and ranking origins.

use crate::error::CoreError;

/// Axis-aligned rectangle in longitude/latitude space.
///
/// Constructed values always satisfy `min_lng <= max_lng` and
/// `min_lat <= max_lat` with all four edges finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Builds a bounding box from its four edges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidBoundingBox`] when any edge is non-finite
    /// or a minimum exceeds its maximum.
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Result<Self, CoreError> {
        let edges = [min_lng, min_lat, max_lng, max_lat];
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(CoreError::InvalidBoundingBox {
                reason: format!("non-finite edge in [{min_lng}, {min_lat}, {max_lng}, {max_lat}]"),
            });
        }
        if min_lng > max_lng || min_lat > max_lat {
            return Err(CoreError::InvalidBoundingBox {
                reason: format!("min exceeds max in [{min_lng}, {min_lat}, {max_lng}, {max_lat}]"),
            });
        }
        Ok(Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        })
    }

    /// The whole-earth box. Merging it into a store's coverage marks every
    /// viewport as covered, which is what a full listing crawl establishes.
    #[must_use]
    pub fn world() -> Self {
        Self {
            min_lng: -180.0,
            min_lat: -90.0,
            max_lng: 180.0,
            max_lat: 90.0,
        }
    }

    /// True iff `inner` lies fully within `self` on all four edges.
    #[must_use]
    pub fn contains(&self, inner: &BoundingBox) -> bool {
        inner.min_lng >= self.min_lng
            && inner.max_lng <= self.max_lng
            && inner.min_lat >= self.min_lat
            && inner.max_lat <= self.max_lat
    }

    /// Smallest box containing both `self` and `other`: componentwise min
    /// of minima, max of maxima.
    #[must_use]
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_lng: self.min_lng.min(other.min_lng),
            min_lat: self.min_lat.min(other.min_lat),
            max_lng: self.max_lng.max(other.max_lng),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }
}

/// Point the distance ranking is measured from, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub lng: f64,
    pub lat: f64,
}

impl Origin {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidOrigin`] when either coordinate is
    /// non-finite or outside geographic range.
    pub fn new(lng: f64, lat: f64) -> Result<Self, CoreError> {
        if lng.is_finite() && lng.abs() <= 180.0 && lat.is_finite() && lat.abs() <= 90.0 {
            Ok(Self { lng, lat })
        } else {
            Err(CoreError::InvalidOrigin { lng, lat })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_edges() {
        let err = BoundingBox::new(-90.0, 30.0, -100.0, 40.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidBoundingBox { .. }));
    }

    #[test]
    fn new_rejects_non_finite_edges() {
        assert!(BoundingBox::new(f64::NAN, 30.0, -90.0, 40.0).is_err());
        assert!(BoundingBox::new(-100.0, 30.0, f64::INFINITY, 40.0).is_err());
    }

    #[test]
    fn contains_inner_box() {
        let outer = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
        let inner = BoundingBox::new(-98.0, 32.0, -95.0, 35.0).unwrap();
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn contains_rejects_partial_overlap() {
        let outer = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
        let straddling = BoundingBox::new(-102.0, 32.0, -95.0, 35.0).unwrap();
        assert!(!outer.contains(&straddling));
    }

    #[test]
    fn contains_accepts_exact_match() {
        let b = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
        assert!(b.contains(&b));
    }

    #[test]
    fn merge_is_componentwise_envelope() {
        let a = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
        let b = BoundingBox::new(-95.0, 25.0, -85.0, 35.0).unwrap();
        let merged = a.merge(&b);
        assert_eq!(merged, BoundingBox::new(-100.0, 25.0, -85.0, 40.0).unwrap());
    }

    #[test]
    fn merge_is_commutative() {
        let a = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
        let b = BoundingBox::new(-95.0, 25.0, -85.0, 35.0).unwrap();
        assert_eq!(a.merge(&b), b.merge(&a));
    }

    #[test]
    fn merge_with_self_is_identity() {
        let a = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
        assert_eq!(a.merge(&a), a);
    }

    #[test]
    fn world_contains_everything() {
        let b = BoundingBox::new(-100.0, 30.0, -90.0, 40.0).unwrap();
        assert!(BoundingBox::world().contains(&b));
    }

    #[test]
    fn origin_rejects_out_of_range() {
        assert!(Origin::new(-200.0, 0.0).is_err());
        assert!(Origin::new(0.0, 95.0).is_err());
        assert!(Origin::new(f64::NAN, 0.0).is_err());
        assert!(Origin::new(-94.5, 39.1).is_ok());
    }
}

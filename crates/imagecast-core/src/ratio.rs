//! Aspect-ratio simplification.
//!
//! Resizing needs the source's width/height ratio in lowest terms so the
//! unselected dimension can be scaled without accumulating float drift from
//! the raw pixel counts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from aspect-ratio computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatioError {
    /// Width or height was zero; a ratio is undefined.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    ZeroDimension { width: u32, height: u32 },
}

/// A width/height ratio reduced to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub numerator: u32,
    pub denominator: u32,
}

impl AspectRatio {
    /// Compute the simplified ratio of a width/height pair.
    ///
    /// # Errors
    ///
    /// Returns [`RatioError::ZeroDimension`] if either input is zero.
    pub fn of(width: u32, height: u32) -> Result<Self, RatioError> {
        if width == 0 || height == 0 {
            return Err(RatioError::ZeroDimension { width, height });
        }
        let g = gcd(width, height);
        Ok(Self {
            numerator: width / g,
            denominator: height / g,
        })
    }
}

/// Greatest common divisor via the iterative Euclidean algorithm.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(8, 12), 4);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(100, 50), 50);
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(5, 0), 5);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_simplify_common_ratios() {
        assert_eq!(
            AspectRatio::of(1920, 1080).unwrap(),
            AspectRatio {
                numerator: 16,
                denominator: 9
            }
        );
        assert_eq!(
            AspectRatio::of(100, 50).unwrap(),
            AspectRatio {
                numerator: 2,
                denominator: 1
            }
        );
    }

    #[test]
    fn test_simplify_coprime_unchanged() {
        let ratio = AspectRatio::of(7, 13).unwrap();
        assert_eq!(ratio.numerator, 7);
        assert_eq!(ratio.denominator, 13);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            AspectRatio::of(0, 100),
            Err(RatioError::ZeroDimension {
                width: 0,
                height: 100
            })
        );
        assert!(AspectRatio::of(100, 0).is_err());
    }
}

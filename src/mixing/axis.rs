//! A single mixing axis: one observable and its bin edges

use super::error::MixingError;
use super::variables::Variable;

/// One registered variable with validated, strictly ascending bin edges.
///
/// `k` edges define `k - 1` half-open bins `[edges[i], edges[i + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    variable: Variable,
    edges: Vec<f64>,
}

impl Axis {
    /// Validate edges and create the axis.
    pub fn new(variable: Variable, edges: Vec<f64>) -> Result<Self, MixingError> {
        if edges.len() < 2 {
            return Err(MixingError::TooFewEdges {
                variable,
                count: edges.len(),
            });
        }
        if let Some(index) = edges.iter().position(|e| !e.is_finite()) {
            return Err(MixingError::NonFiniteEdge { variable, index });
        }
        if let Some(index) = edges.windows(2).position(|w| w[1] <= w[0]) {
            return Err(MixingError::UnsortedEdges {
                variable,
                index: index + 1,
            });
        }
        Ok(Self { variable, edges })
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of usable bins (`edges - 1`).
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// Bin holding `value`, or `None` below the first edge, at or above the
    /// last edge, or for NaN.
    #[inline]
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Count of edges <= value; NaN compares false everywhere and yields 0
        let above = self.edges.partition_point(|&edge| edge <= value);
        if above == 0 || above == self.edges.len() {
            None
        } else {
            Some(above - 1)
        }
    }

    /// Lower and upper edge of `bin`.
    pub fn bin_bounds(&self, bin: usize) -> Option<(f64, f64)> {
        if bin < self.bin_count() {
            Some((self.edges[bin], self.edges[bin + 1]))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(edges: &[f64]) -> Axis {
        Axis::new(Variable::VtxZ, edges.to_vec()).unwrap()
    }

    #[test]
    fn test_rejects_too_few_edges() {
        assert_eq!(
            Axis::new(Variable::VtxZ, vec![1.0]).unwrap_err(),
            MixingError::TooFewEdges {
                variable: Variable::VtxZ,
                count: 1
            }
        );
        assert!(Axis::new(Variable::VtxZ, vec![]).is_err());
    }

    #[test]
    fn test_rejects_unsorted_and_duplicate_edges() {
        assert_eq!(
            Axis::new(Variable::VtxZ, vec![0.0, 2.0, 1.0]).unwrap_err(),
            MixingError::UnsortedEdges {
                variable: Variable::VtxZ,
                index: 2
            }
        );
        assert!(Axis::new(Variable::VtxZ, vec![0.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_edges() {
        assert_eq!(
            Axis::new(Variable::VtxZ, vec![0.0, f64::NAN]).unwrap_err(),
            MixingError::NonFiniteEdge {
                variable: Variable::VtxZ,
                index: 1
            }
        );
        assert!(Axis::new(Variable::VtxZ, vec![f64::NEG_INFINITY, 0.0]).is_err());
    }

    #[test]
    fn test_find_bin_half_open() {
        let a = axis(&[0.0, 10.0, 20.0, 30.0]);
        assert_eq!(a.bin_count(), 3);
        assert_eq!(a.find_bin(0.0), Some(0));
        assert_eq!(a.find_bin(9.999), Some(0));
        assert_eq!(a.find_bin(10.0), Some(1));
        assert_eq!(a.find_bin(25.0), Some(2));
        assert_eq!(a.find_bin(30.0), None);
        assert_eq!(a.find_bin(-0.001), None);
        assert_eq!(a.find_bin(f64::NAN), None);
        assert_eq!(a.find_bin(f64::INFINITY), None);
    }

    #[test]
    fn test_single_bin_axis() {
        let a = axis(&[-1.0, 1.0]);
        assert_eq!(a.bin_count(), 1);
        assert_eq!(a.find_bin(0.0), Some(0));
        assert_eq!(a.find_bin(1.0), None);
    }

    #[test]
    fn test_bin_bounds() {
        let a = axis(&[0.0, 10.0, 20.0]);
        assert_eq!(a.bin_bounds(1), Some((10.0, 20.0)));
        assert_eq!(a.bin_bounds(2), None);
    }
}

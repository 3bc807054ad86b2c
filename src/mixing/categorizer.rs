//! Mixed-radix event categorization over a per-variable binned grid
//!
//! Registration happens on a [`CategorizerBuilder`]. [`CategorizerBuilder::build`]
//! freezes the axes into an immutable [`Categorizer`] that can be shared
//! across worker threads.
//!
//! The category of an event is the mixed-radix number whose digits are the
//! per-axis bin indices, with the earliest registered axis as the most
//! significant digit:
//!
//! ```text
//! category = Σ_i bin_i × Π_{j>i} binCount_j
//! ```

use super::axis::Axis;
use super::error::MixingError;
use super::variables::{Observables, Variable, VariableRegistry};

/// Accumulates mixing axes in registration order.
#[derive(Debug, Clone, Default)]
pub struct CategorizerBuilder {
    axes: Vec<Axis>,
}

impl CategorizerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an axis for `variable` with the given bin edges.
    ///
    /// Registering the same variable twice creates two independent axes.
    /// The registry is told about the variable only after the edges pass
    /// validation; nothing is appended on error.
    pub fn register<R>(
        &mut self,
        variable: Variable,
        edges: Vec<f64>,
        registry: &mut R,
    ) -> Result<&mut Self, MixingError>
    where
        R: VariableRegistry + ?Sized,
    {
        let axis = Axis::new(variable, edges)?;
        self.axes.push(axis);
        registry.mark_used(variable);
        Ok(self)
    }

    /// Position of the last axis registered for `variable`.
    pub fn lookup_axis(&self, variable: Variable) -> Option<usize> {
        self.axes.iter().rposition(|a| a.variable() == variable)
    }

    /// Edges of every axis registered for `variable`, concatenated in order.
    pub fn axis_limits(&self, variable: Variable) -> Vec<f64> {
        collect_limits(&self.axes, variable)
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Freeze the current axes into a [`Categorizer`].
    ///
    /// Computes positional weights and the total number of categories. May be
    /// called any number of times; each call yields an equal snapshot.
    pub fn build(&self) -> Result<Categorizer, MixingError> {
        let mut weights = vec![1usize; self.axes.len()];
        let mut running = 1usize;
        for (i, axis) in self.axes.iter().enumerate().rev() {
            weights[i] = running;
            running = running
                .checked_mul(axis.bin_count())
                .ok_or(MixingError::TooManyCategories)?;
        }
        let total = if self.axes.is_empty() { 0 } else { running };

        let mut lookup = [None; Variable::COUNT];
        for (i, axis) in self.axes.iter().enumerate() {
            lookup[axis.variable().index()] = Some(i);
        }

        Ok(Categorizer {
            axes: self.axes.clone(),
            weights,
            total,
            lookup,
        })
    }
}

/// Immutable categorizer over a fixed, ordered set of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorizer {
    axes: Vec<Axis>,
    weights: Vec<usize>,
    total: usize,
    lookup: [Option<usize>; Variable::COUNT],
}

impl Categorizer {
    pub fn builder() -> CategorizerBuilder {
        CategorizerBuilder::new()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Number of valid categories, `0` when no axis is registered.
    pub fn total_categories(&self) -> usize {
        self.total
    }

    /// Position of the last axis registered for `variable`.
    #[inline]
    pub fn lookup_axis(&self, variable: Variable) -> Option<usize> {
        self.lookup[variable.index()]
    }

    /// Edges of every axis registered for `variable`, concatenated in order.
    pub fn axis_limits(&self, variable: Variable) -> Vec<f64> {
        collect_limits(&self.axes, variable)
    }

    /// Per-axis bin indices, or `None` if any axis is out of range.
    pub fn bin_indices(&self, values: &Observables) -> Option<Vec<usize>> {
        if self.axes.is_empty() {
            return None;
        }
        self.axes
            .iter()
            .map(|axis| axis.find_bin(values.get(axis.variable())))
            .collect()
    }

    /// Category of an event.
    ///
    /// Returns `None` when no axis is registered or when any registered
    /// observable falls outside its axis range.
    pub fn categorize(&self, values: &Observables) -> Option<usize> {
        if self.axes.is_empty() {
            return None;
        }
        let mut category = 0usize;
        for (axis, weight) in self.axes.iter().zip(&self.weights) {
            let bin = axis.find_bin(values.get(axis.variable()))?;
            category += bin * weight;
        }
        Some(category)
    }

    /// Encode per-axis bin indices (one per axis, in registration order).
    pub fn encode(&self, bins: &[usize]) -> Option<usize> {
        if self.axes.is_empty() || bins.len() != self.axes.len() {
            return None;
        }
        let mut category = 0usize;
        for ((axis, weight), &bin) in self.axes.iter().zip(&self.weights).zip(bins) {
            if bin >= axis.bin_count() {
                return None;
            }
            category += bin * weight;
        }
        Some(category)
    }

    /// Bin index along `variable` encoded in `category`.
    ///
    /// `None` for an empty grid, an unregistered variable, or a category
    /// outside `[0, total_categories)`.
    pub fn decode_axis(&self, variable: Variable, category: usize) -> Option<usize> {
        let axis = self.lookup_axis(variable)?;
        self.decode_position(axis, category)
    }

    /// All per-axis bin indices of `category`.
    pub fn decode(&self, category: usize) -> Option<Vec<usize>> {
        (0..self.axes.len())
            .map(|axis| self.decode_position(axis, category))
            .collect::<Option<Vec<_>>>()
            .filter(|bins| !bins.is_empty())
    }

    /// Edge interval of the `variable` bin encoded in `category`.
    pub fn bin_range(&self, variable: Variable, category: usize) -> Option<(f64, f64)> {
        let axis = self.lookup_axis(variable)?;
        let bin = self.decode_position(axis, category)?;
        self.axes[axis].bin_bounds(bin)
    }

    fn decode_position(&self, axis: usize, category: usize) -> Option<usize> {
        if category >= self.total {
            return None;
        }
        Some((category / self.weights[axis]) % self.axes[axis].bin_count())
    }
}

fn collect_limits(axes: &[Axis], variable: Variable) -> Vec<f64> {
    axes.iter()
        .filter(|a| a.variable() == variable)
        .flat_map(|a| a.edges().iter().copied())
        .collect()
}

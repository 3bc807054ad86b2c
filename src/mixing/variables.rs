//! Event observables known to the mixing engine
//!
//! `Variable` is the fixed set of event-level quantities that can be used as
//! mixing axes. `Observables` is the dense per-event vector indexed by it.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::MixingError;

/// Event-level observable that can serve as a mixing axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Variable {
    /// Primary vertex X position (cm)
    VtxX,
    /// Primary vertex Y position (cm)
    VtxY,
    /// Primary vertex Z position (cm)
    VtxZ,
    /// Number of tracks contributing to the primary vertex
    VtxNcontrib,
    /// Centrality percentile from the V0M estimator
    CentV0m,
    /// Centrality percentile from the FT0C estimator
    CentFt0c,
    /// TPC track multiplicity
    MultTpc,
    /// FV0A amplitude
    MultFv0a,
    /// FT0A amplitude
    MultFt0a,
    /// FT0C amplitude
    MultFt0c,
    /// SPD/ITS tracklet multiplicity
    MultTracklets,
    /// Second-harmonic event plane angle
    Psi2,
}

impl Variable {
    /// Number of known observables; the length of an [`Observables`] vector.
    pub const COUNT: usize = 12;

    /// All observables in declaration order.
    pub const ALL: [Variable; Variable::COUNT] = [
        Variable::VtxX,
        Variable::VtxY,
        Variable::VtxZ,
        Variable::VtxNcontrib,
        Variable::CentV0m,
        Variable::CentFt0c,
        Variable::MultTpc,
        Variable::MultFv0a,
        Variable::MultFt0a,
        Variable::MultFt0c,
        Variable::MultTracklets,
        Variable::Psi2,
    ];

    /// Dense index of this observable.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column / configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Variable::VtxX => "vtx_x",
            Variable::VtxY => "vtx_y",
            Variable::VtxZ => "vtx_z",
            Variable::VtxNcontrib => "vtx_ncontrib",
            Variable::CentV0m => "cent_v0m",
            Variable::CentFt0c => "cent_ft0c",
            Variable::MultTpc => "mult_tpc",
            Variable::MultFv0a => "mult_fv0a",
            Variable::MultFt0a => "mult_ft0a",
            Variable::MultFt0c => "mult_ft0c",
            Variable::MultTracklets => "mult_tracklets",
            Variable::Psi2 => "psi2",
        }
    }

    /// Human-readable description, shown by `evmix variables`.
    pub fn description(self) -> &'static str {
        match self {
            Variable::VtxX => "Primary vertex X position (cm)",
            Variable::VtxY => "Primary vertex Y position (cm)",
            Variable::VtxZ => "Primary vertex Z position (cm)",
            Variable::VtxNcontrib => "Primary vertex contributors",
            Variable::CentV0m => "Centrality V0M (%)",
            Variable::CentFt0c => "Centrality FT0C (%)",
            Variable::MultTpc => "TPC track multiplicity",
            Variable::MultFv0a => "FV0A amplitude",
            Variable::MultFt0a => "FT0A amplitude",
            Variable::MultFt0c => "FT0C amplitude",
            Variable::MultTracklets => "Tracklet multiplicity",
            Variable::Psi2 => "Second-harmonic event plane angle (rad)",
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Variable {
    type Err = MixingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Variable::ALL
            .iter()
            .copied()
            .find(|v| v.name() == needle)
            .ok_or_else(|| MixingError::UnknownVariable(s.to_string()))
    }
}

impl TryFrom<String> for Variable {
    type Error = MixingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Variable> for &'static str {
    fn from(value: Variable) -> Self {
        value.name()
    }
}

/// Capability through which registration announces the observables it needs.
///
/// Upstream stages consult the registry to decide which observables to
/// compute or which columns to read.
pub trait VariableRegistry {
    fn mark_used(&mut self, variable: Variable);
}

/// Set of observables marked as used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedVariables {
    used: [bool; Variable::COUNT],
}

impl UsedVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.used[variable.index()]
    }

    /// Used observables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        Variable::ALL.iter().copied().filter(|v| self.contains(*v))
    }

    pub fn len(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VariableRegistry for UsedVariables {
    fn mark_used(&mut self, variable: Variable) {
        self.used[variable.index()] = true;
    }
}

/// Dense observable vector for one event, indexed by [`Variable`].
///
/// Unset entries hold NaN, which every axis treats as out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observables {
    values: [f64; Variable::COUNT],
}

impl Default for Observables {
    fn default() -> Self {
        Self {
            values: [f64::NAN; Variable::COUNT],
        }
    }
}

impl Observables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(variable, value)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Variable, f64)>,
    {
        let mut obs = Self::default();
        for (variable, value) in pairs {
            obs.values[variable.index()] = value;
        }
        obs
    }

    #[inline]
    pub fn get(&self, variable: Variable) -> f64 {
        self.values[variable.index()]
    }

    #[inline]
    pub fn set(&mut self, variable: Variable, value: f64) {
        self.values[variable.index()] = value;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Index<Variable> for Observables {
    type Output = f64;

    fn index(&self, variable: Variable) -> &f64 {
        &self.values[variable.index()]
    }
}

impl IndexMut<Variable> for Observables {
    fn index_mut(&mut self, variable: Variable) -> &mut f64 {
        &mut self.values[variable.index()]
    }
}

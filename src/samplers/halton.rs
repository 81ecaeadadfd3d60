use crate::core::base::*;
use crate::core::error::*;
use crate::core::lowdiscrepancy::*;

use serde::Serialize;

/// Inputs for `create_halton_sequence`.
///
/// Exactly one input mode must be supplied: `num` together with `dim`, or
/// `indices` together with `bases`.
#[derive(Debug, Default, Clone)]
pub struct HaltonParams {
    /// Number of samples, starting at index 0.
    pub num: Option<u64>,
    /// Number of dimensions; the bases are the first `dim` primes.
    pub dim: Option<u32>,
    /// Specific indices of the sequence.
    pub indices: Option<Vec<u64>>,
    /// Specific bases of the sequence.
    pub bases: Option<Vec<u64>>,
}

/// Halton sequence values for a fixed set of indices and bases.
///
/// The full table is evaluated once at construction and held immutable;
/// rows follow the index order and columns the base order given at creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HaltonSequence {
    indices: Vec<u64>,
    bases: Vec<u64>,
    table: Vec<Vec<Float>>,
}

impl HaltonSequence {
    /// The first `num` points of the `dim`-dimensional Halton sequence,
    /// with the first `dim` primes as bases.
    pub fn new(num: u64, dim: u32) -> Result<Self, HaltonError> {
        let indices: Vec<u64> = (0..num).collect();
        let bases = first_n_primes(dim as usize);
        return Self::with_indices_and_bases(indices, bases);
    }

    /// Sequence values for explicit indices and bases, both used verbatim:
    /// duplicates are kept and ordering is preserved.
    pub fn with_indices_and_bases(
        indices: Vec<u64>,
        bases: Vec<u64>,
    ) -> Result<Self, HaltonError> {
        let table = evaluate_table(&indices, &bases)?;
        return Ok(HaltonSequence {
            indices,
            bases,
            table,
        });
    }

    pub fn indices(&self) -> &[u64] {
        return &self.indices;
    }

    pub fn bases(&self) -> &[u64] {
        return &self.bases;
    }

    /// The cached table; entry (i, j) is the value of `indices[i]` in
    /// `bases[j]`.
    pub fn evaluate(&self) -> &[Vec<Float>] {
        return &self.table;
    }

    /// Table rows as an iterator, one point per index.
    pub fn points(&self) -> impl Iterator<Item = &[Float]> {
        return self.table.iter().map(|row| row.as_slice());
    }

    /// Value of the sequence with basis `base` at index `index`.
    pub fn evaluate_one(index: u64, base: u64) -> Result<Float, HaltonError> {
        return radical_inverse(index, base);
    }
}

// Full cross product, row-major.
fn evaluate_table(indices: &[u64], bases: &[u64]) -> Result<Vec<Vec<Float>>, HaltonError> {
    let mut table = Vec::with_capacity(indices.len());
    for &index in indices {
        let mut row = Vec::with_capacity(bases.len());
        for &base in bases {
            row.push(radical_inverse(index, base)?);
        }
        table.push(row);
    }
    return Ok(table);
}

/// Resolve `params` into a `HaltonSequence`.
///
/// Supplying parts of both input modes, neither mode, or only half of one
/// mode fails with `InvalidArgument`.
pub fn create_halton_sequence(params: &HaltonParams) -> Result<HaltonSequence, HaltonError> {
    let count_given = params.num.is_some() || params.dim.is_some();
    let explicit_given = params.indices.is_some() || params.bases.is_some();
    if count_given && explicit_given {
        return Err(HaltonError::invalid_argument(
            "num and dim or indices and bases cannot be supplied simultaneously",
        ));
    }
    if !count_given && !explicit_given {
        return Err(HaltonError::invalid_argument(
            "num and dim or indices and bases must be supplied",
        ));
    }
    if let (Some(indices), Some(bases)) = (params.indices.as_ref(), params.bases.as_ref()) {
        return HaltonSequence::with_indices_and_bases(indices.clone(), bases.clone());
    }
    if let (Some(num), Some(dim)) = (params.num, params.dim) {
        return HaltonSequence::new(num, dim);
    }
    return Err(HaltonError::invalid_argument(
        "num and dim or indices and bases must both be supplied",
    ));
}

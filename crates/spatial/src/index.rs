//! Body counts and placement within a chunk.
//!
//! The expected count comes from a fixed 3×3×3 quadrature of the density field
//! over the wedge. Bodies are placed by stratified jittered sampling: the chunk is
//! cut into `k³` strata with `k = ⌈∛count⌉`, body `i` lands in stratum `i mod k³`,
//! and its offset inside the stratum comes from the body's own position stream.

use galaxy::{DensityField, Position, Purpose, SeedStream};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chunk::{ChunkBounds, ChunkCoord};
use crate::error::{SpatialError, SpatialResult};
use crate::seed::{pack, INDEX_LIMIT};

/// Quadrature points per axis when integrating density over a chunk.
pub const SAMPLES_PER_AXIS: usize = 3;

/// Mean normalized density at or below which a chunk is empty.
pub const EFFECTIVELY_ZERO_DENSITY: f64 = 1e-12;

/// One body slot of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySlot {
    pub seed: u64,
    pub index: u64,
    pub position: Position,
}

/// Counts and places bodies against a density field.
#[derive(Debug, Clone, Copy)]
pub struct ChunkIndex<'a> {
    field: &'a DensityField,
}

impl<'a> ChunkIndex<'a> {
    pub fn new(field: &'a DensityField) -> Self {
        Self { field }
    }

    /// Number of bodies the chunk holds.
    ///
    /// Zero when the density over the whole chunk is effectively zero, otherwise
    /// at least one. The only ceiling is the width of the seed's index field.
    pub fn expected_body_count(&self, chunk: &ChunkCoord) -> u64 {
        let bounds = chunk.bounds();
        let n = SAMPLES_PER_AXIS as f64;

        let mut weight_sum = 0.0;
        let mut density_sum = 0.0;
        let mut stars_sum = 0.0;
        for i in 0..SAMPLES_PER_AXIS {
            let r = bounds.r_min + (i as f64 + 0.5) / n * (bounds.r_max - bounds.r_min);
            for j in 0..SAMPLES_PER_AXIS {
                let theta = bounds.theta_min
                    + (j as f64 + 0.5) / n * (bounds.theta_max - bounds.theta_min);
                for k in 0..SAMPLES_PER_AXIS {
                    let z = bounds.z_min + (k as f64 + 0.5) / n * (bounds.z_max - bounds.z_min);
                    let sample = Position::from_cylindrical(r, theta, z);
                    // cylindrical volume element grows with r
                    weight_sum += r;
                    density_sum += r * self.field.density(&sample);
                    stars_sum += r * self.field.stars_per_cubic_ly(&sample);
                }
            }
        }

        let mean_density = density_sum / weight_sum;
        if mean_density <= EFFECTIVELY_ZERO_DENSITY {
            return 0;
        }

        let expected = (stars_sum / weight_sum * bounds.volume()).floor();
        let count = if expected >= INDEX_LIMIT as f64 {
            warn!(%chunk, expected, "chunk body count exceeds the seed index field");
            INDEX_LIMIT
        } else {
            (expected as u64).max(1)
        };
        debug!(%chunk, mean_density, count, "expected body count");
        count
    }

    /// Position of body `index` in `chunk`.
    pub fn locate_body(&self, chunk: &ChunkCoord, index: u64) -> SpatialResult<Position> {
        let count = self.expected_body_count(chunk);
        if index >= count {
            return Err(SpatialError::IndexOutOfRange { index, count });
        }
        Ok(place(&chunk.bounds(), strata_per_axis(count), pack(chunk, index), index))
    }

    /// Lazily yields every body slot of the chunk in index order.
    pub fn bodies(&self, chunk: &ChunkCoord) -> ChunkBodies {
        let count = self.expected_body_count(chunk);
        ChunkBodies {
            chunk: *chunk,
            bounds: chunk.bounds(),
            strata: strata_per_axis(count),
            count,
            next: 0,
        }
    }
}

/// Smallest `k` with `k³ ≥ count`.
pub fn strata_per_axis(count: u64) -> u64 {
    if count <= 1 {
        return 1;
    }
    let mut k = (count as f64).cbrt().round() as u64;
    while k.saturating_pow(3) < count {
        k += 1;
    }
    while k > 1 && (k - 1).saturating_pow(3) >= count {
        k -= 1;
    }
    k
}

/// Stratum `(radial, angular, vertical)` of body `index` on a `k³` grid.
pub fn stratum(index: u64, k: u64) -> (u64, u64, u64) {
    let cell = index % (k * k * k);
    (cell / (k * k), (cell / k) % k, cell % k)
}

fn place(bounds: &ChunkBounds, k: u64, seed: u64, index: u64) -> Position {
    let (i, j, l) = stratum(index, k);
    let mut rng = SeedStream::for_purpose(seed, Purpose::Position).rng();
    let k = k as f64;
    let u = (i as f64 + rng.random::<f64>()) / k;
    let v = (j as f64 + rng.random::<f64>()) / k;
    let w = (l as f64 + rng.random::<f64>()) / k;
    bounds.point_at(u, v, w)
}

/// Iterator over the bodies of one chunk. Nothing is materialized up front.
#[derive(Debug, Clone)]
pub struct ChunkBodies {
    chunk: ChunkCoord,
    bounds: ChunkBounds,
    strata: u64,
    count: u64,
    next: u64,
}

impl ChunkBodies {
    pub fn chunk(&self) -> ChunkCoord {
        self.chunk
    }

    /// Total bodies in the chunk, including those already yielded.
    pub fn total(&self) -> u64 {
        self.count
    }
}

impl Iterator for ChunkBodies {
    type Item = BodySlot;

    fn next(&mut self) -> Option<BodySlot> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let seed = pack(&self.chunk, index);
        Some(BodySlot {
            seed,
            index,
            position: place(&self.bounds, self.strata, seed, index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChunkBodies {}

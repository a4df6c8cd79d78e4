//! Point field generation: jittered-grid placement, per-point visual
//! attributes and the k-nearest-neighbor proximity graph.

use crate::constants::*;
use crate::geometry::distance_squared;
use crate::profile::Profile;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Neighbor indices into the owning field, nearest first.
pub type Neighbors = SmallVec<[usize; 4]>;

#[derive(Clone, Debug)]
pub struct Point {
    pub position: Vec2,
    pub origin: Vec2,
    pub radius: f32,
    pub brightness: f32,
    pub twinkle_phase: f32,
    pub twinkle_speed: f32,
    pub color: [f32; 3],
    pub neighbors: Neighbors,
    pub activity: f32,
}

impl Point {
    fn sample<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        Self {
            position: origin,
            origin,
            radius: rng.gen_range(POINT_RADIUS_MIN..=POINT_RADIUS_MAX),
            brightness: rng.gen_range(BRIGHTNESS_MIN..=BRIGHTNESS_MAX),
            twinkle_phase: rng.gen_range(0.0..TAU),
            twinkle_speed: rng.gen_range(TWINKLE_SPEED_MIN..=TWINKLE_SPEED_MAX),
            color: *POINT_PALETTE.choose(rng).unwrap_or(&POINT_PALETTE[0]),
            neighbors: Neighbors::new(),
            activity: 0.0,
        }
    }
}

/// All points of one viewport configuration plus the profile they were built
/// under. A field is never resized in place; build a new one instead.
#[derive(Clone, Debug)]
pub struct Field {
    pub points: Vec<Point>,
    pub profile: Profile,
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn build<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        profile: &Profile,
        rng: &mut R,
    ) -> Self {
        let width = clamp_extent(width);
        let height = clamp_extent(height);
        let mut points: Vec<Point> = jittered_grid(width, height, profile.point_count, rng)
            .into_iter()
            .map(|origin| Point::sample(origin, rng))
            .collect();
        link_neighbors(&mut points, profile.neighbor_k, profile.connection_distance);
        log::debug!(
            "[field] built {} points for {}x{} (k={}, max_dist={})",
            points.len(),
            width,
            height,
            profile.neighbor_k,
            profile.connection_distance
        );
        Self {
            points,
            profile: profile.clone(),
            width,
            height,
        }
    }

    /// Deterministic variant for snapshots and tests.
    pub fn build_seeded(width: f32, height: f32, profile: &Profile, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::build(width, height, profile, &mut rng)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of directed neighbor links in the proximity graph.
    pub fn link_count(&self) -> usize {
        self.points.iter().map(|p| p.neighbors.len()).sum()
    }
}

#[inline]
fn clamp_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(1.0)
    } else {
        1.0
    }
}

/// Row count for `count` roughly square cells over `width` x `height`.
pub fn grid_rows(width: f32, height: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    ((count as f32 * height / width).sqrt().round() as usize).clamp(1, count)
}

/// One point per grid cell, row-major, at a random offset inside the cell.
/// Rows are sized first and the points spread over them so that row lengths
/// differ by at most one; every row spans the full width.
pub fn jittered_grid<R: Rng + ?Sized>(
    width: f32,
    height: f32,
    count: usize,
    rng: &mut R,
) -> Vec<Vec2> {
    let rows = grid_rows(width, height, count);
    let mut out = Vec::with_capacity(count);
    if rows == 0 {
        return out;
    }
    let cell_h = height / rows as f32;
    for row in 0..rows {
        let cols = count * (row + 1) / rows - count * row / rows;
        let cell_w = width / cols.max(1) as f32;
        for col in 0..cols {
            out.push(Vec2::new(
                (col as f32 + rng.gen::<f32>()) * cell_w,
                (row as f32 + rng.gen::<f32>()) * cell_h,
            ));
        }
    }
    out
}

/// Fills every point's neighbor list with its `k` nearest other points that
/// lie within `max_distance`. All-pairs O(n^2); ties keep insertion order.
pub fn link_neighbors(points: &mut [Point], k: usize, max_distance: f32) {
    let max_d2 = max_distance * max_distance;
    let origins: Vec<Vec2> = points.iter().map(|p| p.origin).collect();
    let mut candidates: Vec<(f32, usize)> = Vec::with_capacity(origins.len());
    for (i, p) in points.iter_mut().enumerate() {
        p.neighbors.clear();
        if k == 0 {
            continue;
        }
        candidates.clear();
        candidates.extend(
            origins
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(j, o)| (distance_squared(origins[i], *o), j))
                .filter(|&(d2, _)| d2 <= max_d2),
        );
        // stable: equal distances stay in index order
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
        p.neighbors.extend(candidates.iter().take(k).map(|&(_, j)| j));
    }
}

//! Random closed stick sets (radial jitter + lattice hull + replay tokens).
//!
//! Purpose
//! - Deterministic sampler of convex lattice polygons, emitted as a shuffled
//!   list of boundary sticks with random endpoint orientation. Feeds the
//!   property tests and the pipeline benchmark.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, round to the integer lattice, then keep the strict convex
//!   hull. Convexity keeps every vertex visible from the vertex centroid at a
//!   distinct angle, so the angular ordering recovers the hull loop.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `util::convex_hull`, `OrderedPolygon`

use super::types::{Point, Stick};
use super::util::convex_hull;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StickGenCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude), `r = base_radius * (1 + u)`, `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius in lattice units. Small radii collapse vertices after rounding.
    pub base_radius: f64,
    /// Lattice offset of the polygon center.
    pub center: Point,
    /// Redraws allowed when rounding leaves fewer than three hull vertices.
    pub max_attempts: usize,
}
impl Default for StickGenCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1000.0,
            center: Point::new(0, 0),
            max_attempts: 16,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One draw: the CCW hull loop and the sticks along it.
#[derive(Clone, Debug)]
pub struct DrawnSticks {
    pub hull: Vec<Point>,
    pub sticks: Vec<Stick>,
}

/// Draw a convex lattice polygon and return its boundary as shuffled sticks.
pub fn draw_closed_sticks(cfg: StickGenCfg, tok: ReplayToken) -> Option<DrawnSticks> {
    let mut rng = tok.to_std_rng();
    for _ in 0..cfg.max_attempts.max(1) {
        let pts = draw_lattice_points(&cfg, &mut rng);
        let Some(hull) = convex_hull(&pts) else {
            continue;
        };
        let mut sticks: Vec<Stick> = (0..hull.len())
            .map(|k| {
                let s = Stick::new(hull[k], hull[(k + 1) % hull.len()]);
                if rng.gen_bool(0.5) {
                    s.flipped()
                } else {
                    s
                }
            })
            .collect();
        sticks.shuffle(&mut rng);
        return Some(DrawnSticks { hull, sticks });
    }
    None
}

fn draw_lattice_points(cfg: &StickGenCfg, rng: &mut StdRng) -> Vec<Point> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Point::new(
                cfg.center.x + (th.cos() * r).round() as i64,
                cfg.center.y + (th.sin() * r).round() as i64,
            )
        })
        .collect()
}

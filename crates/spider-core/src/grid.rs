//! Uniform grid buckets for the peer-link scan.
//!
//! Cells are as wide as the link range, so any pair within range sits in the
//! same or an adjacent cell and only the 3x3 neighbourhood needs checking.

use crate::particle::Particle;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

type Bucket = SmallVec<[usize; 8]>;

pub struct PeerGrid {
    cell_size: f32,
    range: f32,
    cells: FnvHashMap<(i32, i32), Bucket>,
}

impl PeerGrid {
    pub fn build(particles: &[Particle], range: f32) -> Self {
        let cell_size = range.max(f32::EPSILON);
        let mut cells: FnvHashMap<(i32, i32), Bucket> = FnvHashMap::default();
        for (i, p) in particles.iter().enumerate() {
            cells.entry(cell_of(p.origin, cell_size)).or_default().push(i);
        }
        Self {
            cell_size,
            range,
            cells,
        }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Same pairs, same order as [`crate::links::peer_pairs`].
    pub fn pairs(&self, particles: &[Particle]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in particles.iter().enumerate() {
            let (cx, cy) = cell_of(a.origin, self.cell_size);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(bucket) = self.cells.get(&(cx + dx, cy + dy)) else {
                        continue;
                    };
                    for &j in bucket.iter().filter(|&&j| j > i) {
                        if a.origin.distance(particles[j].origin) < self.range {
                            pairs.push((i, j));
                        }
                    }
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }
}

#[inline]
fn cell_of(p: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (p.x / cell_size).floor() as i32,
        (p.y / cell_size).floor() as i32,
    )
}

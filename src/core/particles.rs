// Particle field simulation for the hero background canvas.
//
// Pure state: no DOM or canvas types here. The web layer feeds pointer
// coordinates in, steps the field once per animation frame, and reads the
// particle list back out to draw it.

use super::constants::{
    CONNECT_ALPHA_SCALE, CONNECT_DISTANCE, PARTICLE_ALPHA_MIN, PARTICLE_ALPHA_SPAN,
    PARTICLE_AREA_PER, PARTICLE_CHANNEL_BASE, PARTICLE_CHANNEL_SPAN, PARTICLE_MAX_COUNT,
    PARTICLE_SIZE_MIN, PARTICLE_SIZE_SPAN, PARTICLE_SPEED_HALF_RANGE, POINTER_RADIUS,
    REPEL_MIN_DISTANCE, REPEL_STEP_MAX,
};
use glam::Vec2;
use rand::prelude::*;

/// Blue-biased RGBA color; the blue channel is always at full intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleColor {
    pub red: u8,
    pub green: u8,
    pub alpha: f32,
}

impl ParticleColor {
    pub fn css(&self) -> String {
        format!("rgba({}, {}, 255, {})", self.red, self.green, self.alpha)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: ParticleColor,
}

/// Latest pointer position plus the fixed interaction radius. Mutated on
/// every pointer-move event, read once per frame.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub radius: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: POINTER_RADIUS,
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replace the whole population for a new surface size. No particle
    /// identity survives a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let count = target_count(width, height);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(sample_particle(&mut self.rng, width, height));
        }
        self.particles = particles;
    }

    /// Advance every particle by one frame: drift by velocity, apply pointer
    /// repulsion, then wrap. Wraparound runs last so positions are inside
    /// [0, width] x [0, height] when this returns.
    pub fn step(&mut self, pointer: &PointerState) {
        for p in &mut self.particles {
            p.pos += p.vel;

            let away = p.pos - pointer.pos;
            let distance = away.length();
            // Skip the force entirely when the pointer sits on the particle;
            // the unit vector is undefined there.
            if distance < pointer.radius && distance > REPEL_MIN_DISTANCE {
                p.pos += away / distance * repulsion_magnitude(distance, pointer.radius);
            }

            p.pos.x = wrap(p.pos.x, self.width);
            p.pos.y = wrap(p.pos.y, self.height);
        }
    }
}

fn sample_particle(rng: &mut StdRng, width: f32, height: f32) -> Particle {
    let speed = |rng: &mut StdRng| {
        rng.gen::<f32>() * 2.0 * PARTICLE_SPEED_HALF_RANGE - PARTICLE_SPEED_HALF_RANGE
    };
    let channel =
        |rng: &mut StdRng| PARTICLE_CHANNEL_BASE + rng.gen_range(0..PARTICLE_CHANNEL_SPAN);
    Particle {
        pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        vel: Vec2::new(speed(rng), speed(rng)),
        size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
        color: ParticleColor {
            red: channel(rng),
            green: channel(rng),
            alpha: PARTICLE_ALPHA_MIN + rng.gen::<f32>() * PARTICLE_ALPHA_SPAN,
        },
    }
}

/// Exiting one edge re-enters at the opposite edge (no mirroring).
#[inline]
pub fn wrap(coord: f32, extent: f32) -> f32 {
    if coord > extent {
        0.0
    } else if coord < 0.0 {
        extent
    } else {
        coord
    }
}

/// Population target for a surface: one particle per area quantum, capped.
#[inline]
pub fn target_count(width: f32, height: f32) -> usize {
    ((width * height / PARTICLE_AREA_PER) as usize).min(PARTICLE_MAX_COUNT)
}

/// Displacement along the unit vector away from the pointer: strongest at
/// zero distance, linearly falling to zero at the interaction radius.
#[inline]
pub fn repulsion_magnitude(distance: f32, radius: f32) -> f32 {
    if distance >= radius {
        0.0
    } else {
        (radius - distance) / radius * REPEL_STEP_MAX
    }
}

/// Line opacity for a particle pair; None when the pair is too far apart to
/// connect.
#[inline]
pub fn connection_alpha(distance: f32) -> Option<f32> {
    (distance < CONNECT_DISTANCE).then(|| (1.0 - distance / CONNECT_DISTANCE) * CONNECT_ALPHA_SCALE)
}

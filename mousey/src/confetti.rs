// mousey/src/confetti.rs
use glam::{Vec2, vec2};
use rand::Rng;

/// Tunables for one burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstOptions {
    pub count: usize,
    pub speed_min: f32,
    pub speed_max: f32,
    pub life_min: f32,
    pub life_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub gravity: f32,
}

impl Default for BurstOptions {
    fn default() -> Self {
        Self {
            count: 24,
            speed_min: 30.0,
            speed_max: 140.0,
            life_min: 0.3,
            life_max: 0.8,
            size_min: 0.5,
            size_max: 1.5,
            gravity: 500.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub age: f32,
    pub life: f32,
    pub size: f32,
}

impl Particle {
    /// 1 at birth, 0 at expiry; renderers use it as alpha.
    pub fn fade(&self) -> f32 {
        (1.0 - self.age / self.life).clamp(0.0, 1.0)
    }
}

/// Decorative burst particles. Pure state; a renderer reads the particle
/// list, nothing here draws.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    pub enabled: bool,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            enabled: true,
        }
    }

    /// Spray a burst from a point, biased upward.
    pub fn emit_burst(&mut self, origin: Vec2, opts: &BurstOptions, rng: &mut impl Rng) {
        if !self.enabled {
            return;
        }
        for _ in 0..opts.count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(opts.speed_min..=opts.speed_max);
            let life = rng.gen_range(opts.life_min..=opts.life_max);
            let size = rng.gen_range(opts.size_min..=opts.size_max);
            self.particles.push(Particle {
                position: origin,
                velocity: vec2(angle.cos() * speed, angle.sin() * speed * -0.5),
                acceleration: vec2(0.0, opts.gravity),
                age: 0.0,
                life,
                size,
            });
        }
    }

    /// Integrate and retire expired particles.
    pub fn update(&mut self, dt: f32) {
        if !self.enabled {
            return;
        }
        for particle in self.particles.iter_mut() {
            particle.age += dt;
            particle.velocity += particle.acceleration * dt;
            particle.position += particle.velocity * dt;
        }
        self.particles.retain(|particle| particle.age < particle.life);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn bursts_spawn_the_requested_count() {
        let mut system = ParticleSystem::new();
        let mut rng = StdRng::seed_from_u64(7);
        system.emit_burst(vec2(10.0, 10.0), &BurstOptions::default(), &mut rng);
        assert_eq!(system.particles().len(), 24);
        for particle in system.particles() {
            assert_eq!(particle.position, vec2(10.0, 10.0));
            assert!(particle.life >= 0.3 && particle.life <= 0.8);
        }
    }

    #[test]
    fn particles_fall_and_expire() {
        let mut system = ParticleSystem::new();
        let mut rng = StdRng::seed_from_u64(7);
        system.emit_burst(Vec2::ZERO, &BurstOptions::default(), &mut rng);

        system.update(0.1);
        assert!(!system.is_empty());
        let falling = system.particles()[0];
        assert!(falling.velocity.y > -140.0);
        assert!(falling.fade() < 1.0);

        // Longest life is 0.8s; everything is gone after a second.
        for _ in 0..10 {
            system.update(0.1);
        }
        assert!(system.is_empty());
    }

    #[test]
    fn disabled_system_ignores_bursts() {
        let mut system = ParticleSystem::new();
        system.enabled = false;
        let mut rng = StdRng::seed_from_u64(7);
        system.emit_burst(Vec2::ZERO, &BurstOptions::default(), &mut rng);
        assert!(system.is_empty());
    }
}

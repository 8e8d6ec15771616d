//! Ambient particle field behind the hero section
//!
//! The field owns a batch of particles sized to the canvas area. Each tick
//! pulls particles toward the pointer, integrates, damps, adds a slight upward
//! drift and wraps positions around the edges. Rendering is expressed as
//! [`Sprite`]s and [`Link`]s so the simulation stays free of any DOM type.

use std::f64::consts::TAU;

use rand::Rng;

/// Tuning constants for the particle field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Upper bound on the particle count
    pub max_particles: usize,
    /// Canvas area (px²) per particle
    pub density_divisor: f64,
    /// Pointer influence radius (px)
    pub interaction_radius: f64,
    /// Force scale at zero distance; negative values repel
    pub pointer_strength: f64,
    /// Per-tick velocity multiplier
    pub damping: f64,
    /// Per-tick upward velocity gain
    pub drift: f64,
    /// Maximum distance for a connecting line (px)
    pub link_distance: f64,
    /// Line opacity for two coincident particles
    pub link_opacity: f64,
    /// Glow radius as a multiple of the core radius
    pub glow_scale: f64,
    /// Hue of every sprite and line
    pub hue: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 80,
            density_divisor: 15_000.0,
            interaction_radius: 100.0,
            pointer_strength: 0.02,
            damping: 0.99,
            drift: 0.001,
            link_distance: 150.0,
            link_opacity: 0.15,
            glow_scale: 4.0,
            hue: 185.0,
        }
    }
}

impl FieldConfig {
    /// Particle count for a canvas of the given size
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        if !(width > 0.0 && height > 0.0) || self.density_divisor <= 0.0 {
            return 0;
        }
        let by_area = (width * height / self.density_divisor).floor();
        (by_area as usize).min(self.max_particles)
    }
}

/// Last known pointer position relative to the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
    /// Pulse phase in radians
    pub phase: f64,
    pub phase_step: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            size: rng.gen_range(1.0..4.0),
            speed_x: (rng.r#gen::<f64>() - 0.5) * 0.5,
            speed_y: (rng.r#gen::<f64>() - 0.5) * 0.5 - 0.2,
            opacity: rng.gen_range(0.2..0.7),
            phase: rng.gen_range(0.0..TAU),
            phase_step: rng.gen_range(0.01..0.03),
        }
    }

    /// Opacity modulated by the pulse, clamped to `[0, 1]`
    pub fn pulse_opacity(&self) -> f64 {
        (self.opacity + self.phase.sin() * 0.2).clamp(0.0, 1.0)
    }

    /// Core radius modulated by the pulse
    pub fn pulse_size(&self) -> f64 {
        (self.size + self.phase.sin() * 0.5).max(0.0)
    }
}

/// One glowing dot to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub core_radius: f64,
    pub glow_radius: f64,
    pub opacity: f64,
}

/// A faint line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

/// The particle set and the surface it lives on
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Populate a fresh field for a canvas of the given size
    pub fn new<R: Rng>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> Self {
        let mut field = Self {
            width: 0.0,
            height: 0.0,
            config,
            particles: Vec::new(),
        };
        field.resize(width, height, rng);
        field
    }

    /// Discard every particle and repopulate for the new size
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let (w, h) = (self.width, self.height);
        let count = self.config.particle_count(w, h);
        self.particles = (0..count).map(|_| Particle::random(rng, w, h)).collect();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
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

    /// Whether the field was populated for a different surface size
    pub fn needs_resize(&self, width: f64, height: f64) -> bool {
        (self.width - width).abs() >= 1.0 || (self.height - height).abs() >= 1.0
    }

    /// Advance every particle by one frame
    pub fn tick(&mut self, pointer: Option<Pointer>) {
        let cfg = self.config;
        let (width, height) = (self.width, self.height);
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        for p in &mut self.particles {
            if let Some(pointer) = pointer {
                let dx = pointer.x - p.x;
                let dy = pointer.y - p.y;
                let distance = dx.hypot(dy);
                if distance > f64::EPSILON && distance < cfg.interaction_radius {
                    let falloff = (cfg.interaction_radius - distance) / cfg.interaction_radius;
                    let force = falloff * cfg.pointer_strength;
                    p.speed_x += dx / distance * force;
                    p.speed_y += dy / distance * force;
                }
            }

            p.x += p.speed_x;
            p.y += p.speed_y;
            p.phase = (p.phase + p.phase_step) % TAU;

            p.speed_x *= cfg.damping;
            p.speed_y *= cfg.damping;
            p.speed_y -= cfg.drift;

            p.x = wrap(p.x, width);
            p.y = wrap(p.y, height);
        }
    }

    /// Sprites for the current frame
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        let glow_scale = self.config.glow_scale;
        self.particles.iter().map(move |p| {
            let core_radius = p.pulse_size();
            Sprite {
                x: p.x,
                y: p.y,
                core_radius,
                glow_radius: core_radius * glow_scale,
                opacity: p.pulse_opacity(),
            }
        })
    }

    /// Lines between every pair closer than the link distance, fading linearly
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let mut links = Vec::new();
        if max <= 0.0 {
            return links;
        }
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < max {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity: (1.0 - distance / max) * self.config.link_opacity,
                    });
                }
            }
        }
        links
    }
}

/// Toroidal wrap into `[0, extent)`
fn wrap(value: f64, extent: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn still_particle(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            size: 2.0,
            speed_x: 0.0,
            speed_y: 0.0,
            opacity: 0.5,
            phase: 0.0,
            phase_step: 0.01,
        }
    }

    fn field_with(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
        ParticleField {
            width,
            height,
            config: FieldConfig::default(),
            particles,
        }
    }

    #[test]
    fn test_count_is_proportional_and_capped() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.particle_count(0.0, 0.0), 0);
        assert_eq!(cfg.particle_count(100.0, 100.0), 0);
        assert_eq!(cfg.particle_count(300.0, 100.0), 2);
        assert_eq!(cfg.particle_count(600.0, 500.0), 20);
        assert_eq!(cfg.particle_count(1920.0, 1080.0), 80);
        assert_eq!(cfg.particle_count(-5.0, 1000.0), 0);
        assert_eq!(cfg.particle_count(f64::NAN, 1000.0), 0);
    }

    #[test]
    fn test_initialize_within_bounds() {
        let mut rng = rng();
        for (w, h) in [(1.0, 1.0), (320.0, 480.0), (1280.0, 720.0), (3840.0, 2160.0)] {
            let field = ParticleField::new(w, h, FieldConfig::default(), &mut rng);
            assert!(field.len() <= 80);
            assert_eq!(field.len(), FieldConfig::default().particle_count(w, h));
            for p in field.particles() {
                assert!(p.x >= 0.0 && p.x < w);
                assert!(p.y >= 0.0 && p.y < h);
            }
        }
    }

    #[test]
    fn test_resize_discards_old_set() {
        let mut rng = rng();
        let mut field = ParticleField::new(1920.0, 1080.0, FieldConfig::default(), &mut rng);
        assert_eq!(field.len(), 80);

        field.resize(300.0, 300.0, &mut rng);
        assert_eq!(field.len(), 6);
        assert!(field.particles().iter().all(|p| p.x < 300.0 && p.y < 300.0));
        assert!(!field.needs_resize(300.0, 300.0));
        assert!(field.needs_resize(301.0, 300.0));
    }

    #[test]
    fn test_positions_stay_inside_after_many_ticks() {
        let mut rng = rng();
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::default(), &mut rng);
        for i in 0..5_000 {
            let pointer = (i % 3 != 0).then(|| Pointer::new((i % 800) as f64, (i % 600) as f64));
            field.tick(pointer);
            for p in field.particles() {
                assert!(p.x >= 0.0 && p.x < 800.0, "x = {}", p.x);
                assert!(p.y >= 0.0 && p.y < 600.0, "y = {}", p.y);
            }
        }
    }

    #[test]
    fn test_wrap_is_toroidal() {
        let mut p = still_particle(799.5, 10.0);
        p.speed_x = 1.0;
        let mut field = field_with(vec![p], 800.0, 600.0);
        field.tick(None);
        let p = field.particles()[0];
        assert!((p.x - 0.5).abs() < 1e-9);

        let mut p = still_particle(10.0, 0.2);
        p.speed_y = -1.0;
        let mut field = field_with(vec![p], 800.0, 600.0);
        field.tick(None);
        assert!((field.particles()[0].y - 599.2).abs() < 1e-9);

        assert_eq!(wrap(-1e-18, 600.0), 0.0);
        assert_eq!(wrap(f64::INFINITY, 600.0), 0.0);
    }

    #[test]
    fn test_pointer_attracts_within_radius() {
        let mut field = field_with(vec![still_particle(100.0, 100.0)], 800.0, 600.0);
        field.tick(Some(Pointer::new(150.0, 100.0)));
        let p = field.particles()[0];
        assert!(p.speed_x > 0.0);
        assert!(p.x > 100.0);

        // Magnitude falls off with distance
        let mut near = field_with(vec![still_particle(100.0, 100.0)], 800.0, 600.0);
        near.tick(Some(Pointer::new(110.0, 100.0)));
        assert!(near.particles()[0].speed_x > p.speed_x);
    }

    #[test]
    fn test_pointer_ignored_outside_radius_and_at_zero_distance() {
        let mut field = field_with(vec![still_particle(100.0, 100.0)], 800.0, 600.0);
        field.tick(Some(Pointer::new(300.0, 100.0)));
        assert_eq!(field.particles()[0].speed_x, 0.0);

        let mut field = field_with(vec![still_particle(100.0, 100.0)], 800.0, 600.0);
        field.tick(Some(Pointer::new(100.0, 100.0)));
        let p = field.particles()[0];
        assert!(p.x.is_finite() && p.speed_x == 0.0);
    }

    #[test]
    fn test_negative_strength_repels() {
        let mut field = field_with(vec![still_particle(100.0, 100.0)], 800.0, 600.0);
        field.config.pointer_strength = -0.02;
        field.tick(Some(Pointer::new(150.0, 100.0)));
        assert!(field.particles()[0].speed_x < 0.0);
    }

    #[test]
    fn test_damping_and_drift() {
        let mut p = still_particle(100.0, 100.0);
        p.speed_x = 1.0;
        let mut field = field_with(vec![p], 800.0, 600.0);
        field.tick(None);
        let p = field.particles()[0];
        assert!((p.speed_x - 0.99).abs() < 1e-12);
        assert!((p.speed_y + 0.001).abs() < 1e-12);
        assert!((p.phase - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_zero_area_is_inert() {
        let mut field = ParticleField::new(0.0, 0.0, FieldConfig::default(), &mut rng());
        assert!(field.is_empty());
        field.tick(Some(Pointer::new(0.0, 0.0)));
        assert!(field.links().is_empty());
        assert_eq!(field.sprites().count(), 0);
    }

    #[test]
    fn test_links_fade_linearly() {
        let field = field_with(
            vec![
                still_particle(0.0, 0.0),
                still_particle(75.0, 0.0),
                still_particle(400.0, 0.0),
            ],
            800.0,
            600.0,
        );
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.075).abs() < 1e-12);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (75.0, 0.0));
    }

    #[test]
    fn test_sprites_pulse() {
        let mut p = still_particle(10.0, 10.0);
        p.phase = std::f64::consts::FRAC_PI_2;
        let field = field_with(vec![p], 800.0, 600.0);
        let sprite = field.sprites().next().unwrap();
        assert!((sprite.opacity - 0.7).abs() < 1e-12);
        assert!((sprite.core_radius - 2.5).abs() < 1e-12);
        assert!((sprite.glow_radius - 10.0).abs() < 1e-12);

        let mut bright = still_particle(0.0, 0.0);
        bright.opacity = 0.95;
        bright.phase = std::f64::consts::FRAC_PI_2;
        assert_eq!(bright.pulse_opacity(), 1.0);
    }
}

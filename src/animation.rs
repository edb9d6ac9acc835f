//! Per-sphere grow/shrink animation, driven strictly between render
//! passes. The intersection path never sees a half-updated sphere.

use log::trace;
use rand::Rng;

use crate::{
    error::RenderError,
    figures::FiguresContainer,
    scene::{random_sphere, BASE_SPHERE_RADIUS, SHELL_RADIUS_MIN},
};

/// Growth steps from spawn to full size (and back down)
const GROWTH_STEPS: f64 = 10.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimPhase {
    Growing,
    Shrinking,
    Dormant,
}

/// State machine for one sphere: grow to the target radius, shrink back,
/// then go dormant until a replacement takes its spot.
#[derive(Debug, Copy, Clone)]
pub struct SphereAnimation {
    phase: AnimPhase,
    target_radius: f64,
    rate: f64,
}

impl SphereAnimation {
    pub fn new(target_radius: f64) -> SphereAnimation {
        SphereAnimation {
            phase: AnimPhase::Growing,
            target_radius,
            rate: target_radius / GROWTH_STEPS,
        }
    }

    pub fn phase(&self) -> AnimPhase {
        self.phase
    }

    /// Advance one tick from `radius`. `None` means the sphere has shrunk
    /// away and its slot is free for a respawn.
    pub fn step(&mut self, radius: f64) -> Option<f64> {
        match self.phase {
            AnimPhase::Growing => {
                let next = radius + self.rate;
                if next >= self.target_radius {
                    self.phase = AnimPhase::Shrinking;
                    Some(self.target_radius)
                } else {
                    Some(next)
                }
            }
            AnimPhase::Shrinking => {
                let next = radius - self.rate;
                if next <= 0.0 {
                    self.phase = AnimPhase::Dormant;
                    None
                } else {
                    Some(next)
                }
            }
            AnimPhase::Dormant => None,
        }
    }
}

/// Drives every surface sphere's animation; the base sphere (index 0)
/// never animates.
pub struct SceneAnimator<R: Rng> {
    states: Vec<SphereAnimation>,
    rng: R,
}

impl<R: Rng> SceneAnimator<R> {
    pub fn new(objects: &FiguresContainer, rng: R) -> SceneAnimator<R> {
        let states = objects
            .spheres
            .iter()
            .skip(1)
            .map(|sphere| SphereAnimation::new(sphere.radius))
            .collect();
        SceneAnimator { states, rng }
    }

    /// One animation tick, to be called between render passes only.
    /// Spheres that shrink away are respawned small on a fresh shell spot,
    /// keeping the surface population constant.
    pub fn step(&mut self, objects: &mut FiguresContainer) -> Result<(), RenderError> {
        let spheres = objects.spheres.iter_mut().skip(1);
        for (state, sphere) in self.states.iter_mut().zip(spheres) {
            match state.step(sphere.radius) {
                Some(radius) => sphere.radius = radius,
                None => {
                    let shell_radius = self.rng.gen_range(SHELL_RADIUS_MIN..BASE_SPHERE_RADIUS);
                    let spawned = random_sphere(&mut self.rng, shell_radius, sphere.color)?;
                    let replacement = SphereAnimation::new(spawned.radius);
                    trace!(
                        "Respawning sphere at {:?} with target radius {}",
                        spawned.center,
                        spawned.radius
                    );
                    // Spawn one growth step in so the radius stays positive
                    sphere.center = spawned.center;
                    sphere.radius = replacement.rate;
                    *state = replacement;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        figures::Sphere,
        structs::{Color, Vector3},
    };
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_phase_cycle_growing_shrinking_dormant() {
        let mut state = SphereAnimation::new(1.0);
        assert_eq!(state.phase(), AnimPhase::Growing);

        let mut radius = 0.1;
        while state.phase() == AnimPhase::Growing {
            match state.step(radius) {
                Some(next) => radius = next,
                None => break,
            }
        }
        assert_eq!(state.phase(), AnimPhase::Shrinking);
        assert!((radius - 1.0).abs() < 1e-9);

        while let Some(next) = state.step(radius) {
            radius = next;
        }
        assert_eq!(state.phase(), AnimPhase::Dormant);
        assert_eq!(state.step(radius), None);
    }

    #[test]
    fn test_growing_clamps_at_target() {
        let mut state = SphereAnimation::new(0.05);
        assert_eq!(state.step(0.049), Some(0.05));
        assert_eq!(state.phase(), AnimPhase::Shrinking);
    }

    #[test]
    fn test_animator_keeps_population_and_positive_radii() {
        let mut objects = FiguresContainer {
            spheres: vec![
                Sphere::new(Vector3::ZERO, BASE_SPHERE_RADIUS, Color::BLACK).unwrap(),
                Sphere::new(Vector3::new(0.45, 0.0, 0.0), 0.045, Color::WHITE).unwrap(),
                Sphere::new(Vector3::new(0.0, 0.47, 0.0), 0.047, Color::WHITE).unwrap(),
            ],
        };
        let count = objects.len();

        let rng = StdRng::seed_from_u64(3);
        let mut animator = SceneAnimator::new(&objects, rng);

        // Enough ticks to push every sphere through a full cycle and respawn
        for _ in 0..100 {
            animator.step(&mut objects).unwrap();
            assert_eq!(objects.len(), count);
            for sphere in &objects.spheres {
                assert!(sphere.radius > 0.0);
            }
        }
    }

    #[test]
    fn test_base_sphere_never_animates() {
        let mut objects = FiguresContainer {
            spheres: vec![
                Sphere::new(Vector3::ZERO, BASE_SPHERE_RADIUS, Color::BLACK).unwrap(),
                Sphere::new(Vector3::new(0.45, 0.0, 0.0), 0.045, Color::WHITE).unwrap(),
            ],
        };
        let rng = StdRng::seed_from_u64(9);
        let mut animator = SceneAnimator::new(&objects, rng);
        for _ in 0..50 {
            animator.step(&mut objects).unwrap();
        }
        assert_eq!(objects.spheres[0].radius, BASE_SPHERE_RADIUS);
        assert_eq!(objects.spheres[0].center, Vector3::ZERO);
    }
}

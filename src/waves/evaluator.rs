//! Superposed wave displacement at a world-space sample position.

use glam::DVec2;

use super::component::{WaveComponent, WaveDisplacement};
use super::jitter::{JitterKey, JitterSource};
use crate::noise::ModulationNoise;

/// Aggregate displacement for one sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    /// Vertical offset (world y)
    pub height: f64,
    /// Offset along world x (zero unless horizontal squish is enabled)
    pub horizontal: f64,
}

/// Wave parameters after jitter and noise modulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWave {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl ResolvedWave {
    /// `amplitude * sin(dot(p, dir) * frequency + advance + phase)`
    pub fn height_at(&self, position: DVec2, direction: DVec2, advance: f64) -> f64 {
        self.amplitude * (position.dot(direction) * self.frequency + advance + self.phase).sin()
    }
}

/// Evaluates superposed wave components.
///
/// Pure with respect to its inputs: the noise and jitter sources are seeded at
/// construction and never advanced, so the evaluator can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct WaveEvaluator {
    noise: ModulationNoise,
    jitter: JitterSource,
    horizontal_squish: Option<f64>,
}

impl WaveEvaluator {
    pub fn new(noise_seed: u32, jitter_seed: u64) -> Self {
        Self {
            noise: ModulationNoise::new(noise_seed),
            jitter: JitterSource::new(jitter_seed),
            horizontal_squish: None,
        }
    }

    /// Enable (`Some(factor)`) or disable horizontal displacement
    pub fn with_horizontal_squish(mut self, factor: Option<f64>) -> Self {
        self.horizontal_squish = factor;
        self
    }

    pub fn horizontal_squish(&self) -> Option<f64> {
        self.horizontal_squish
    }

    /// Single noise sample shared by every displacement of `component` at `time`
    pub fn modulation(&self, time: f64, component: &WaveComponent) -> f64 {
        self.noise.sample(time * component.perlin_scale)
    }

    /// Apply jitter, then noise bias, to one displacement's parameters
    pub fn resolve(
        &self,
        key: JitterKey,
        component: &WaveComponent,
        displacement: &WaveDisplacement,
        offset: f64,
    ) -> ResolvedWave {
        let mut amplitude = displacement.amplitude;
        let mut frequency = displacement.frequency;
        let mut phase = displacement.phase;

        if has_jitter(component) {
            let draw = self.jitter.draw(key);
            amplitude *= 1.0 + draw.amplitude * component.amplitude_randomness;
            frequency *= 1.0 + draw.frequency * component.frequency_randomness;
            phase += draw.phase * component.phase_randomness;
        }

        amplitude *= 1.0 + offset * component.amplitude_perlin_factor;
        frequency *= 1.0 + offset * component.frequency_perlin_factor;
        phase += offset * component.phase_perlin_factor;

        ResolvedWave {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Displacement using the time-based convention (`advance = time * wave_speed`)
    pub fn evaluate(
        &self,
        x: f64,
        y: f64,
        time: f64,
        components: &[WaveComponent],
    ) -> Displacement {
        self.evaluate_with(x, y, time, components, |_, component| {
            time * component.wave_speed
        })
    }

    /// Displacement with a caller-supplied phase advance per component index
    pub fn evaluate_with<F>(
        &self,
        x: f64,
        y: f64,
        time: f64,
        components: &[WaveComponent],
        advance: F,
    ) -> Displacement
    where
        F: Fn(usize, &WaveComponent) -> f64,
    {
        let position = DVec2::new(x, y);
        let mut height = 0.0;

        for (ci, component) in components.iter().enumerate() {
            if component.displacements.is_empty() {
                continue;
            }
            let offset = self.modulation(time, component);
            let phase_advance = advance(ci, component);

            for (di, displacement) in component.displacements.iter().enumerate() {
                let key = JitterKey {
                    x,
                    y,
                    time,
                    component: ci,
                    displacement: di,
                };
                let wave = self.resolve(key, component, displacement, offset);
                height += wave.height_at(position, displacement.direction, phase_advance);
            }
        }

        Displacement {
            height,
            horizontal: self.horizontal_squish.map_or(0.0, |squish| height * squish),
        }
    }
}

fn has_jitter(component: &WaveComponent) -> bool {
    component.amplitude_randomness != 0.0
        || component.frequency_randomness != 0.0
        || component.phase_randomness != 0.0
}

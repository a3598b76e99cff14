//! Pluggable displacement strategies selected at configuration time.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::component::WaveComponent;
use super::evaluator::{Displacement, WaveEvaluator};
use super::jitter::JitterKey;
use crate::error::Result;
use crate::params::{StrategyKind, SurfaceParams};
use crate::spectral::{Complex, SpectralField};

/// Capability interface driving vertex displacement.
///
/// `begin_pass` runs once per mesh update before any `evaluate` call and is
/// the only place a strategy may mutate itself. `evaluate` must be pure so
/// chunks can be evaluated in parallel.
pub trait DisplacementStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn begin_pass(&mut self, _time: f64, _delta_time: f64, _components: &[WaveComponent]) {}

    fn evaluate(&self, x: f64, y: f64, time: f64, components: &[WaveComponent]) -> Displacement;
}

/// Build the strategy named by `params`
pub fn from_params(params: &SurfaceParams) -> Result<Box<dyn DisplacementStrategy>> {
    params.validate()?;
    let evaluator = WaveEvaluator::new(params.noise_seed, params.jitter_seed)
        .with_horizontal_squish(params.horizontal_squish());

    log::debug!(
        "Displacement strategy: {} (horizontal squish: {:?})",
        params.strategy.name(),
        params.horizontal_squish()
    );

    Ok(match params.strategy {
        StrategyKind::Trochoidal => Box::new(TrochoidalStrategy::new(evaluator)),
        StrategyKind::Gerstner => Box::new(GerstnerStrategy::new(evaluator)),
        StrategyKind::Spectral => {
            Box::new(SpectralStrategy::new(evaluator, params.spectral_size)?)
        }
    })
}

/// Time-based phase: `advance = time * wave_speed`
#[derive(Debug, Clone)]
pub struct GerstnerStrategy {
    evaluator: WaveEvaluator,
}

impl GerstnerStrategy {
    pub fn new(evaluator: WaveEvaluator) -> Self {
        Self { evaluator }
    }
}

impl DisplacementStrategy for GerstnerStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Gerstner
    }

    fn evaluate(&self, x: f64, y: f64, time: f64, components: &[WaveComponent]) -> Displacement {
        self.evaluator.evaluate(x, y, time, components)
    }
}

/// Running phase per component, advanced by `wave_speed * delta_time` each pass
#[derive(Debug, Clone)]
pub struct TrochoidalStrategy {
    evaluator: WaveEvaluator,
    phases: Vec<f64>,
}

impl TrochoidalStrategy {
    pub fn new(evaluator: WaveEvaluator) -> Self {
        Self {
            evaluator,
            phases: Vec::new(),
        }
    }

    /// Accumulated phase per component index
    pub fn phases(&self) -> &[f64] {
        &self.phases
    }
}

impl DisplacementStrategy for TrochoidalStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Trochoidal
    }

    fn begin_pass(&mut self, _time: f64, delta_time: f64, components: &[WaveComponent]) {
        self.phases.resize(components.len(), 0.0);
        for (phase, component) in self.phases.iter_mut().zip(components) {
            *phase = (*phase + component.wave_speed * delta_time).rem_euclid(TAU);
        }
    }

    fn evaluate(&self, x: f64, y: f64, time: f64, components: &[WaveComponent]) -> Displacement {
        self.evaluator.evaluate_with(x, y, time, components, |ci, _| {
            self.phases.get(ci).copied().unwrap_or(0.0)
        })
    }
}

/// Periodic height field re-synthesized by FFT once per pass.
///
/// Each displacement is snapped to its nearest frequency bin; jitter and
/// noise modulation are drawn once per displacement per pass (a single bin
/// cannot vary with position).
#[derive(Debug, Clone)]
pub struct SpectralStrategy {
    evaluator: WaveEvaluator,
    field: SpectralField,
}

impl SpectralStrategy {
    pub fn new(evaluator: WaveEvaluator, size: usize) -> Result<Self> {
        Ok(Self {
            evaluator,
            field: SpectralField::new(size)?,
        })
    }
}

/// Nearest bin for wavenumber `k` (radians per unit) on an `n`-sample tile
fn frequency_bin(k: f64, n: usize) -> usize {
    let bin = (k * n as f64 / TAU).round() as i64;
    bin.rem_euclid(n as i64) as usize
}

impl DisplacementStrategy for SpectralStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Spectral
    }

    fn begin_pass(&mut self, time: f64, _delta_time: f64, components: &[WaveComponent]) {
        let n = self.field.size();
        let spectrum = self.field.spectrum_mut();
        spectrum.fill(Complex::ZERO);

        for (ci, component) in components.iter().enumerate() {
            if component.displacements.is_empty() {
                continue;
            }
            let offset = self.evaluator.modulation(time, component);
            let advance = time * component.wave_speed;

            for (di, displacement) in component.displacements.iter().enumerate() {
                let key = JitterKey {
                    x: 0.0,
                    y: 0.0,
                    time,
                    component: ci,
                    displacement: di,
                };
                let wave = self.evaluator.resolve(key, component, displacement, offset);
                let k = displacement.direction * wave.frequency;
                let bin = frequency_bin(k.y, n) * n + frequency_bin(k.x, n);
                // cos(θ - π/2) = sin(θ)
                spectrum[bin] +=
                    Complex::from_polar(wave.amplitude, wave.phase + advance - FRAC_PI_2);
            }
        }

        self.field.rebuild();
    }

    fn evaluate(&self, x: f64, y: f64, _time: f64, _components: &[WaveComponent]) -> Displacement {
        let height = self.field.sample(x, y);
        Displacement {
            height,
            horizontal: self
                .evaluator
                .horizontal_squish()
                .map_or(0.0, |squish| height * squish),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waves::WaveDisplacement;
    use glam::DVec2;

    fn one_wave(frequency: f64, wave_speed: f64) -> Vec<WaveComponent> {
        vec![WaveComponent::new("w")
            .with_wave_speed(wave_speed)
            .with_displacement(WaveDisplacement::new(0.8, frequency, 0.25, DVec2::X))]
    }

    #[test]
    fn test_from_params_selects_kind() {
        for kind in [
            StrategyKind::Trochoidal,
            StrategyKind::Gerstner,
            StrategyKind::Spectral,
        ] {
            let params = SurfaceParams {
                strategy: kind,
                ..SurfaceParams::default()
            };
            assert_eq!(from_params(&params).unwrap().kind(), kind);
        }

        let bad = SurfaceParams {
            chunk_size: 5,
            ..SurfaceParams::default()
        };
        assert!(from_params(&bad).is_err());
    }

    #[test]
    fn test_trochoidal_accumulates_phase() {
        let mut strategy = TrochoidalStrategy::new(WaveEvaluator::new(0, 0));
        let components = one_wave(1.0, 2.0);

        strategy.begin_pass(0.0, 0.1, &components);
        strategy.begin_pass(0.1, 0.1, &components);
        assert!((strategy.phases()[0] - 0.4).abs() < 1e-12);

        // Phase replaces time * wave_speed; the `time` argument only feeds noise
        let expected = 0.8 * (0.0 + strategy.phases()[0] + 0.25).sin();
        let d = strategy.evaluate(0.0, 0.0, 123.0, &components);
        assert!((d.height - expected).abs() < 1e-12);
    }

    #[test]
    fn test_trochoidal_tracks_component_count() {
        let mut strategy = TrochoidalStrategy::new(WaveEvaluator::new(0, 0));
        let mut components = one_wave(1.0, 1.0);
        strategy.begin_pass(0.0, 1.0, &components);
        components.push(WaveComponent::new("extra").with_wave_speed(3.0));
        strategy.begin_pass(0.0, 1.0, &components);
        assert_eq!(strategy.phases().len(), 2);
        assert!((strategy.phases()[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_gerstner_matches_time_convention() {
        let strategy = GerstnerStrategy::new(WaveEvaluator::new(0, 0));
        let components = one_wave(0.5, 1.5);
        let d = strategy.evaluate(2.0, 7.0, 3.0, &components);
        let expected = 0.8 * (2.0 * 0.5 + 3.0 * 1.5 + 0.25_f64).sin();
        assert_eq!(d.height, expected);
        assert_eq!(d.horizontal, 0.0);
    }

    #[test]
    fn test_spectral_reproduces_bin_exact_wave() {
        let n = 32;
        let mut strategy = SpectralStrategy::new(WaveEvaluator::new(0, 0), n).unwrap();
        // Exactly 3 cycles across the tile
        let frequency = TAU * 3.0 / n as f64;
        let components = one_wave(frequency, 0.7);
        let time = 1.3;
        strategy.begin_pass(time, 0.016, &components);

        for y in 0..8 {
            for x in 0..40 {
                let (x, y) = (x as f64, y as f64);
                let expected = 0.8 * (x * frequency + time * 0.7 + 0.25).sin();
                let d = strategy.evaluate(x, y, time, &components);
                assert!((d.height - expected).abs() < 1e-9, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_spectral_negative_direction_wraps() {
        let n = 16;
        let mut strategy = SpectralStrategy::new(WaveEvaluator::new(0, 0), n).unwrap();
        let frequency = TAU * 2.0 / n as f64;
        let components = vec![WaveComponent::new("w").with_displacement(WaveDisplacement::new(
            1.0,
            frequency,
            0.0,
            DVec2::new(0.0, -1.0),
        ))];
        strategy.begin_pass(0.0, 0.0, &components);

        for y in 0..n {
            let expected = (-(y as f64) * frequency).sin();
            let d = strategy.evaluate(5.0, y as f64, 0.0, &components);
            assert!((d.height - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_frequency_bin_rounding() {
        assert_eq!(frequency_bin(0.0, 8), 0);
        assert_eq!(frequency_bin(TAU / 8.0, 8), 1);
        assert_eq!(frequency_bin(-TAU / 8.0, 8), 7);
        assert_eq!(frequency_bin(TAU, 8), 0);
    }
}

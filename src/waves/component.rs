//! Parametric wave trains and the named components that group them.

use glam::DVec2;

/// One directional sinusoidal wave train
#[derive(Debug, Clone, PartialEq)]
pub struct WaveDisplacement {
    /// Peak height (world units)
    pub amplitude: f64,

    /// Spatial frequency (radians per world unit along `direction`)
    pub frequency: f64,

    /// Phase offset (radians)
    pub phase: f64,

    /// Travel direction. Not normalized here; near-unit length gives
    /// physically meaningful results.
    pub direction: DVec2,
}

impl WaveDisplacement {
    pub fn new(amplitude: f64, frequency: f64, phase: f64, direction: DVec2) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
            direction,
        }
    }

    /// Wave travelling at `angle` radians from +x, unit direction
    pub fn heading(amplitude: f64, frequency: f64, phase: f64, angle: f64) -> Self {
        Self::new(amplitude, frequency, phase, DVec2::from_angle(angle))
    }
}

/// Named group of wave trains sharing speed, jitter and noise modulation
#[derive(Debug, Clone, PartialEq)]
pub struct WaveComponent {
    pub name: String,
    pub displacements: Vec<WaveDisplacement>,

    /// Phase advance per unit time (radians per second)
    pub wave_speed: f64,

    // === Random jitter (symmetric, per sample) ===
    /// Amplitude scaled by a draw in [1 - r, 1 + r]
    pub amplitude_randomness: f64,

    /// Frequency scaled by a draw in [1 - r, 1 + r]
    pub frequency_randomness: f64,

    /// Phase offset by a draw in [-r, r] (radians)
    pub phase_randomness: f64,

    // === Noise modulation (one time-varying sample per component) ===
    /// Time scale fed to the noise source
    pub perlin_scale: f64,

    /// amplitude *= 1 + offset * factor
    pub amplitude_perlin_factor: f64,

    /// frequency *= 1 + offset * factor
    pub frequency_perlin_factor: f64,

    /// phase += offset * factor
    pub phase_perlin_factor: f64,
}

impl WaveComponent {
    /// Empty component with no jitter or modulation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            displacements: Vec::new(),
            wave_speed: 0.0,
            amplitude_randomness: 0.0,
            frequency_randomness: 0.0,
            phase_randomness: 0.0,
            perlin_scale: 0.0,
            amplitude_perlin_factor: 0.0,
            frequency_perlin_factor: 0.0,
            phase_perlin_factor: 0.0,
        }
    }

    pub fn with_displacement(mut self, displacement: WaveDisplacement) -> Self {
        self.displacements.push(displacement);
        self
    }

    pub fn with_wave_speed(mut self, wave_speed: f64) -> Self {
        self.wave_speed = wave_speed;
        self
    }

    pub fn with_randomness(mut self, amplitude: f64, frequency: f64, phase: f64) -> Self {
        self.amplitude_randomness = amplitude;
        self.frequency_randomness = frequency;
        self.phase_randomness = phase;
        self
    }

    pub fn with_modulation(
        mut self,
        scale: f64,
        amplitude: f64,
        frequency: f64,
        phase: f64,
    ) -> Self {
        self.perlin_scale = scale;
        self.amplitude_perlin_factor = amplitude;
        self.frequency_perlin_factor = frequency;
        self.phase_perlin_factor = phase;
        self
    }

    /// Upper bound on |height| this component can produce
    pub fn max_height(&self) -> f64 {
        let jitter = 1.0 + self.amplitude_randomness.abs();
        let modulation = 1.0 + self.amplitude_perlin_factor.abs();
        self.displacements
            .iter()
            .map(|d| d.amplitude.abs())
            .sum::<f64>()
            * jitter
            * modulation
    }
}

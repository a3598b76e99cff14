//! Ready-made wave component sets.

use glam::DVec2;

use crate::waves::{WaveComponent, WaveDisplacement};

/// Single swell component with light jitter and no noise modulation
pub fn trochoidal_swell() -> Vec<WaveComponent> {
    vec![WaveComponent::new("swell")
        .with_wave_speed(1.0)
        .with_randomness(0.05, 0.02, 0.1)
        .with_displacement(WaveDisplacement::new(0.6, 0.35, 0.0, DVec2::X))
        .with_displacement(WaveDisplacement::new(
            0.3,
            0.6,
            1.0,
            DVec2::new(0.7, 0.7).normalize(),
        ))
        .with_displacement(WaveDisplacement::new(
            0.15,
            1.1,
            2.0,
            DVec2::new(-0.3, 0.95).normalize(),
        ))]
}

/// Layered swell, chop and ripples with noise-modulated parameters
pub fn open_ocean() -> Vec<WaveComponent> {
    vec![
        // Long, slow swell; breathes in amplitude over tens of seconds
        WaveComponent::new("swell")
            .with_wave_speed(0.8)
            .with_modulation(0.05, 0.4, 0.05, 0.5)
            .with_displacement(WaveDisplacement::heading(1.2, 0.12, 0.0, 0.2))
            .with_displacement(WaveDisplacement::heading(0.8, 0.17, 1.3, -0.35)),
        // Wind chop
        WaveComponent::new("chop")
            .with_wave_speed(1.6)
            .with_randomness(0.1, 0.03, 0.15)
            .with_modulation(0.2, 0.3, 0.1, 1.0)
            .with_displacement(WaveDisplacement::heading(0.3, 0.45, 0.4, 0.6))
            .with_displacement(WaveDisplacement::heading(0.25, 0.6, 2.1, 1.1))
            .with_displacement(WaveDisplacement::heading(0.2, 0.75, 4.0, -0.9)),
        // Surface ripples
        WaveComponent::new("ripples")
            .with_wave_speed(3.0)
            .with_randomness(0.2, 0.05, 0.3)
            .with_modulation(0.8, 0.5, 0.1, 2.0)
            .with_displacement(WaveDisplacement::heading(0.05, 1.8, 0.0, 2.4))
            .with_displacement(WaveDisplacement::heading(0.04, 2.3, 1.7, -2.0)),
    ]
}

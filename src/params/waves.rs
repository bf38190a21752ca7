//! Wave bank configuration.

use crate::error::ConfigError;
use crate::profile::WaveProfile;

/// Parameters of a single traveling wave. Immutable after initialization.
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Wavelength in world units (> 0).
    pub wavelength: f32,

    /// Crest amplitude in world units, before the global height multiplier
    /// (>= 0; zero silences the wave).
    pub amplitude: f32,

    /// Travel direction angle in radians within the lattice plane.
    pub direction: f32,

    /// Phase speed in world units per second of simulation time.
    pub speed: f32,

    /// World (x, y) the wave phase is measured from.
    pub origin: [f32; 2],

    /// Which of the two profile curves shapes this wave.
    pub profile: WaveProfile,
}

/// The fixed bank of superposed waves.
#[derive(Debug, Clone)]
pub struct WaveBank {
    pub waves: Vec<WaveParams>,
}

impl Default for WaveBank {
    /// The classic six-wave surface: two long swells on the rounder curve B,
    /// four short ripples on the flatter-crested curve A.
    fn default() -> Self {
        let wave = |wavelength, amplitude, direction, speed, profile| WaveParams {
            wavelength,
            amplitude,
            direction,
            speed,
            origin: [0.0, 0.0],
            profile,
        };
        Self {
            waves: vec![
                wave(1.6, 0.12, 0.9, 0.06, WaveProfile::B),
                wave(1.3, 0.1, 1.14, 0.09, WaveProfile::B),
                wave(0.2, 0.01, 0.8, 0.08, WaveProfile::A),
                wave(0.18, 0.008, 1.05, 0.1, WaveProfile::A),
                wave(0.23, 0.005, 1.15, 0.09, WaveProfile::A),
                wave(0.12, 0.003, 0.97, 0.14, WaveProfile::A),
            ],
        }
    }
}

impl WaveBank {
    /// Check the bank before the pipeline starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waves.is_empty() {
            return Err(ConfigError::EmptyWaveBank);
        }
        for (index, wave) in self.waves.iter().enumerate() {
            if !(wave.wavelength > 0.0) {
                return Err(ConfigError::NonPositiveWavelength {
                    index,
                    value: wave.wavelength,
                });
            }
            if !(wave.amplitude >= 0.0) {
                return Err(ConfigError::NegativeAmplitude {
                    index,
                    value: wave.amplitude,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bank_validates() {
        let bank = WaveBank::default();
        assert_eq!(bank.waves.len(), 6);
        assert!(bank.validate().is_ok());
    }

    #[test]
    fn test_default_bank_profile_assignment() {
        let bank = WaveBank::default();
        // The two long swells ride curve B, the four ripples curve A
        assert_eq!(bank.waves[0].profile, WaveProfile::B);
        assert_eq!(bank.waves[1].profile, WaveProfile::B);
        for wave in &bank.waves[2..] {
            assert_eq!(wave.profile, WaveProfile::A);
        }
    }

    #[test]
    fn test_empty_bank_rejected() {
        let bank = WaveBank { waves: vec![] };
        assert!(matches!(bank.validate(), Err(ConfigError::EmptyWaveBank)));
    }

    #[test]
    fn test_zero_wavelength_rejected() {
        let mut bank = WaveBank::default();
        bank.waves[3].wavelength = 0.0;
        assert!(matches!(
            bank.validate(),
            Err(ConfigError::NonPositiveWavelength { index: 3, .. })
        ));
    }

    #[test]
    fn test_negative_amplitude_rejected() {
        let mut bank = WaveBank::default();
        bank.waves[0].amplitude = -0.1;
        assert!(matches!(
            bank.validate(),
            Err(ConfigError::NegativeAmplitude { index: 0, .. })
        ));
    }
}

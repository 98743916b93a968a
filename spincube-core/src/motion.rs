//! Time-driven rotation angles
use crate::transform::RotationState;

/// Periodic function used by a wave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Cosine,
}

/// `amplitude * waveform(frequency * t + phase)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub waveform: Waveform,
    pub amplitude: f32,
    /// Angular frequency in radians per second
    pub frequency: f32,
    pub phase: f32,
}

impl Wave {
    pub fn new(waveform: Waveform, amplitude: f32, frequency: f32, phase: f32) -> Self {
        Self {
            waveform,
            amplitude,
            frequency,
            phase,
        }
    }

    pub fn sample(&self, t: f32) -> f32 {
        let argument = t * self.frequency + self.phase;
        let value = match self.waveform {
            Waveform::Sine => argument.sin(),
            Waveform::Cosine => argument.cos(),
        };
        self.amplitude * value
    }
}

/// One independent wave per rotation axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub x: Wave,
    pub y: Wave,
    pub z: Wave,
}

impl Motion {
    pub fn angles_at(&self, t: f32) -> RotationState {
        RotationState::new(self.x.sample(t), self.y.sample(t), self.z.sample(t))
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            x: Wave::new(Waveform::Sine, 3.0, 0.5, 1.0),
            y: Wave::new(Waveform::Cosine, 4.0, 0.4, 2.0),
            z: Wave::new(Waveform::Sine, 5.0, 0.3, 3.0),
        }
    }
}

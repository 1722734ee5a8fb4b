//! Audio system
//!
//! Procedurally generated sound effects - no external files needed!
//! Tone shapes are plain data so they can be checked off the web; the
//! Web Audio player is only built for wasm.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Drone moved one step
    Move,
    /// Gem collected
    Win,
    /// Round failed
    Lose,
}

impl SoundEffect {
    /// Sound for a game event, if it has one
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Move => Some(SoundEffect::Move),
            GameEvent::Win => Some(SoundEffect::Win),
            GameEvent::Lose(_) => Some(SoundEffect::Lose),
            GameEvent::TargetSpawned | GameEvent::RoundReset => None,
        }
    }

    /// Envelope for this effect
    pub fn tone(self) -> ToneSpec {
        match self {
            // Quick upward blip
            SoundEffect::Move => ToneSpec {
                wave: Waveform::Sine,
                freq_start: 400.0,
                freq_end: 600.0,
                freq_time: 0.1,
                gain_start: 0.1,
                gain_end: 0.01,
                duration: 0.1,
                ramp: Ramp::Exponential,
            },
            // Bright chime
            SoundEffect::Win => ToneSpec {
                wave: Waveform::Triangle,
                freq_start: 600.0,
                freq_end: 1200.0,
                freq_time: 0.1,
                gain_start: 0.2,
                gain_end: 0.01,
                duration: 0.3,
                ramp: Ramp::Linear,
            },
            // Low descending buzz
            SoundEffect::Lose => ToneSpec {
                wave: Waveform::Sawtooth,
                freq_start: 150.0,
                freq_end: 50.0,
                freq_time: 0.4,
                gain_start: 0.3,
                gain_end: 0.01,
                duration: 0.4,
                ramp: Ramp::Linear,
            },
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
}

/// How frequency and gain move between their start and end values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    Linear,
    Exponential,
}

/// One oscillator with a frequency sweep and gain envelope (times in seconds)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub wave: Waveform,
    pub freq_start: f32,
    pub freq_end: f32,
    pub freq_time: f64,
    pub gain_start: f32,
    pub gain_end: f32,
    pub duration: f64,
    pub ramp: Ramp,
}

impl ToneSpec {
    /// Peak gain after applying the output volume
    pub fn scaled_gain(&self, volume: f32) -> f32 {
        self.gain_start * volume.clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Ramp, SoundEffect, ToneSpec, Waveform};
    use crate::sim::GameEvent;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: AudioContext,
        volume: f32,
    }

    impl AudioManager {
        /// Create the audio context. Call from a user gesture; returns `None`
        /// where Web Audio is unavailable.
        pub fn new(volume: f32) -> Option<Self> {
            match AudioContext::new() {
                Ok(ctx) => Some(Self {
                    ctx,
                    volume: volume.clamp(0.0, 1.0),
                }),
                Err(_) => {
                    log::warn!("Failed to create AudioContext - audio disabled");
                    None
                }
            }
        }

        /// Play the sound for an event, if any
        pub fn play_event(&self, event: GameEvent) {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }

            // Resume context if suspended (browsers require user gesture)
            if self.ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = self.ctx.resume();
            }

            self.play_tone(&effect.tone());
        }

        /// Create an oscillator routed through a gain node
        fn create_osc(&self, freq: f32, osc_type: OscillatorType) -> Option<(OscillatorNode, GainNode)> {
            let osc = self.ctx.create_oscillator().ok()?;
            let gain = self.ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&self.ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tone(&self, tone: &ToneSpec) {
            let osc_type = match tone.wave {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Triangle => OscillatorType::Triangle,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
            };
            let Some((osc, gain)) = self.create_osc(tone.freq_start, osc_type) else {
                return;
            };
            let t = self.ctx.current_time();

            osc.frequency().set_value_at_time(tone.freq_start, t).ok();
            gain.gain()
                .set_value_at_time(tone.scaled_gain(self.volume), t)
                .ok();

            match tone.ramp {
                Ramp::Exponential => {
                    osc.frequency()
                        .exponential_ramp_to_value_at_time(tone.freq_end, t + tone.freq_time)
                        .ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(tone.gain_end, t + tone.duration)
                        .ok();
                }
                Ramp::Linear => {
                    osc.frequency()
                        .linear_ramp_to_value_at_time(tone.freq_end, t + tone.freq_time)
                        .ok();
                    gain.gain()
                        .linear_ramp_to_value_at_time(tone.gain_end, t + tone.duration)
                        .ok();
                }
            }

            osc.start().ok();
            osc.stop_with_when(t + tone.duration).ok();
        }
    }
}

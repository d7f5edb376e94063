//! Audio backend using the Web Audio API
//!
//! Procedurally generated cues - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use super::{AudioSink, Playback, SoundCue};
use crate::settings::Settings;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    /// Running background loop voices and their shared gain
    music: Option<(Vec<OscillatorNode>, GainNode)>,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            music: None,
        }
    }

    /// Resume audio context (mobile browsers start it suspended until a user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            let _ = self.stop_loop();
        }
    }

    fn sfx_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Create an oscillator routed through its own gain node
    fn create_osc(
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Flap - quick rising chirp
    fn play_flap(ctx: &AudioContext, vol: f32) -> Option<()> {
        let (osc, gain) = Self::create_osc(ctx, 300.0, OscillatorType::Triangle)?;
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok()?;
        osc.frequency().set_value_at_time(300.0, t).ok()?;
        osc.frequency()
            .exponential_ramp_to_value_at_time(700.0, t + 0.08)
            .ok()?;

        osc.start().ok()?;
        osc.stop_with_when(t + 0.15).ok()
    }

    /// Score - two-note ding
    fn play_score(ctx: &AudioContext, vol: f32) -> Option<()> {
        for (i, freq) in [880.0, 1320.0].iter().enumerate() {
            let delay = i as f64 * 0.07;
            let (osc, gain) = Self::create_osc(ctx, *freq, OscillatorType::Sine)?;
            let t = ctx.current_time() + delay;
            gain.gain().set_value_at_time(vol * 0.25, t).ok()?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.18)
                .ok()?;
            osc.start_with_when(t).ok()?;
            osc.stop_with_when(t + 0.2).ok()?;
        }
        Some(())
    }

    /// Crash - descending thud with a harsh crack on top
    fn play_crash(ctx: &AudioContext, vol: f32) -> Option<()> {
        let t = ctx.current_time();

        let (osc, gain) = Self::create_osc(ctx, 220.0, OscillatorType::Sawtooth)?;
        gain.gain().set_value_at_time(vol * 0.45, t).ok()?;
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.6)
            .ok()?;
        osc.frequency().set_value_at_time(220.0, t).ok()?;
        osc.frequency()
            .exponential_ramp_to_value_at_time(35.0, t + 0.6)
            .ok()?;
        osc.start().ok()?;
        osc.stop_with_when(t + 0.7).ok()?;

        // Crack is decoration; the thud alone counts as played
        if let Some((crack, crack_gain)) = Self::create_osc(ctx, 1800.0, OscillatorType::Square) {
            crack_gain.gain().set_value_at_time(vol * 0.15, t).ok();
            crack_gain
                .gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                .ok();
            crack.start().ok();
            crack.stop_with_when(t + 0.1).ok();
        }
        Some(())
    }

    /// Background loop - low two-voice drone held until stopped
    fn start_drone(ctx: &AudioContext, vol: f32) -> Option<(Vec<OscillatorNode>, GainNode)> {
        let bus = ctx.create_gain().ok()?;
        bus.gain().set_value(vol * 0.08);
        bus.connect_with_audio_node(&ctx.destination()).ok()?;

        let mut voices = Vec::with_capacity(2);
        for (freq, osc_type) in [(110.0, OscillatorType::Triangle), (165.0, OscillatorType::Sine)] {
            let osc = ctx.create_oscillator().ok()?;
            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&bus).ok()?;
            osc.start().ok()?;
            voices.push(osc);
        }
        Some((voices, bus))
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, cue: SoundCue) -> Playback {
        let vol = self.sfx_level();
        let Some(ctx) = self.ctx.as_ref().filter(|_| vol > 0.0) else {
            return Playback::Failed;
        };
        self.resume();

        let played = match cue {
            SoundCue::Flap => Self::play_flap(ctx, vol),
            SoundCue::Score => Self::play_score(ctx, vol),
            SoundCue::Crash => Self::play_crash(ctx, vol),
        };
        match played {
            Some(()) => Playback::Played,
            None => {
                log::debug!("Sound cue {:?} failed to play", cue);
                Playback::Failed
            }
        }
    }

    fn start_loop(&mut self) -> Playback {
        if self.music.is_some() {
            return Playback::Played;
        }
        let vol = self.music_level();
        let Some(ctx) = self.ctx.as_ref().filter(|_| vol > 0.0) else {
            return Playback::Failed;
        };
        self.resume();

        match Self::start_drone(ctx, vol) {
            Some(music) => {
                self.music = Some(music);
                Playback::Played
            }
            None => {
                log::debug!("Background loop failed to start");
                Playback::Failed
            }
        }
    }

    fn stop_loop(&mut self) -> Playback {
        let Some((voices, bus)) = self.music.take() else {
            return Playback::Failed;
        };
        for osc in &voices {
            let _ = osc.stop();
        }
        let _ = bus.disconnect();
        Playback::Played
    }
}

//! Audio collaborator using the Web Audio API
//!
//! Procedurally generated cues, no sample files. Everything here is
//! fire-and-forget: any Web Audio failure is swallowed and the game keeps
//! running silently.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump accepted
    Jump,
    /// Player hit an obstacle
    GameOver,
    /// New high score fanfare
    Celebrate,
}

/// Audio manager owning the context and the background track nodes
pub struct AudioManager {
    ctx: Option<AudioContext>,
    track: Option<(OscillatorNode, GainNode)>,
    master_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            track: None,
            master_volume: 0.8,
            muted: false,
        }
    }

    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Start the background drone; replaces any running track
    pub fn start_track(&mut self) {
        self.stop_track();
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        self.resume(ctx);

        let Some((osc, gain)) = create_osc(ctx, 110.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();
        gain.gain().set_value(vol * 0.06);
        // Slow two-note pulse
        osc.frequency().set_value_at_time(110.0, t).ok();
        osc.frequency().set_value_at_time(146.8, t + 0.5).ok();
        if osc.start().is_ok() {
            self.track = Some((osc, gain));
        }
    }

    /// Stop the background drone, if any
    pub fn stop_track(&mut self) {
        if let Some((osc, gain)) = self.track.take() {
            let _ = osc.stop();
            let _ = osc.disconnect();
            let _ = gain.disconnect();
        }
    }

    /// Play a one-shot cue
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        self.resume(ctx);

        match effect {
            SoundEffect::Jump => self.play_jump(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
            SoundEffect::Celebrate => self.play_celebrate(ctx, vol),
        }
    }

    /// Browsers suspend the context until a user gesture
    fn resume(&self, ctx: &AudioContext) {
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
    }

    /// Jump - quick upward chirp
    fn play_jump(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = create_osc(ctx, 300.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(700.0, t + 0.1)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
    }

    /// Game over - falling two-tone
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = create_osc(ctx, 220.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.35, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.5)
            .ok();
        osc.frequency().set_value_at_time(220.0, t).ok();
        osc.frequency().set_value_at_time(165.0, t + 0.15).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(55.0, t + 0.45)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.55).ok();
    }

    /// Celebration - ascending arpeggio
    fn play_celebrate(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();
        let notes = [523.25, 659.25, 783.99, 1046.5];

        for (i, freq) in notes.iter().enumerate() {
            let Some((osc, gain)) = create_osc(ctx, *freq, OscillatorType::Triangle) else {
                continue;
            };
            let start = t + i as f64 * 0.12;
            gain.gain().set_value_at_time(0.0001, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(vol * 0.3, start + 0.02)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + 0.3)
                .ok();
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.35).ok();
        }
    }
}

/// Create an oscillator with a gain envelope routed to the destination
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

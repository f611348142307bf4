use crate::constants::{
    MASTER_GAIN, SYNTH_ATTACK_SEC, SYNTH_DECAY_SEC, SYNTH_PEAK_LEVEL, SYNTH_RELEASE_SEC,
    SYNTH_START_DELAY_SEC, SYNTH_SUSTAIN_LEVEL,
};
use crate::core::{NoteId, NoteLength, NoteTrigger, DEFAULT_BPM};
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// One-shot triangle synth on a WebAudio context.
pub struct WebSynth {
    audio_ctx: web::AudioContext,
    master_gain: web::GainNode,
    bpm: f32,
}

impl WebSynth {
    pub fn new(audio_ctx: web::AudioContext) -> anyhow::Result<Self> {
        let master_gain = create_gain(&audio_ctx, MASTER_GAIN, "Master")
            .map_err(|_| anyhow::anyhow!("master gain"))?;
        master_gain
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            audio_ctx,
            master_gain,
            bpm: DEFAULT_BPM,
        })
    }

    /// Browsers start contexts suspended until a user gesture.
    pub fn resume(&self) {
        if self.audio_ctx.state() != web::AudioContextState::Running {
            _ = self.audio_ctx.resume();
        }
    }

    fn play(&self, frequency_hz: f32, hold_sec: f64) -> Result<(), ()> {
        let src = web::OscillatorNode::new(&self.audio_ctx).map_err(|e| {
            log::error!("OscillatorNode error: {:?}", e);
        })?;
        src.set_type(web::OscillatorType::Triangle);
        src.frequency().set_value(frequency_hz);
        let env = create_gain(&self.audio_ctx, 0.0, "Envelope")?;

        let t0 = self.audio_ctx.current_time() + SYNTH_START_DELAY_SEC;
        let decay_end = t0 + SYNTH_ATTACK_SEC + SYNTH_DECAY_SEC;
        let release_start = (t0 + hold_sec).max(decay_end);
        let release_end = release_start + SYNTH_RELEASE_SEC;
        let g = env.gain();
        _ = g.set_value_at_time(0.0, t0);
        _ = g.linear_ramp_to_value_at_time(SYNTH_PEAK_LEVEL, t0 + SYNTH_ATTACK_SEC);
        _ = g.linear_ramp_to_value_at_time(SYNTH_PEAK_LEVEL * SYNTH_SUSTAIN_LEVEL, decay_end);
        _ = g.set_value_at_time(SYNTH_PEAK_LEVEL * SYNTH_SUSTAIN_LEVEL, release_start);
        _ = g.linear_ramp_to_value_at_time(0.0, release_end);

        _ = src.connect_with_audio_node(&env);
        _ = env.connect_with_audio_node(&self.master_gain);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(release_end + 0.05);
        Ok(())
    }
}

impl NoteTrigger for WebSynth {
    fn trigger(&mut self, note: NoteId, length: NoteLength) {
        self.resume();
        let hold = length.seconds(self.bpm) as f64;
        if self.play(note.frequency_hz(), hold).is_err() {
            log::warn!("[audio] dropped {} ({})", note, length.token());
        }
    }
}

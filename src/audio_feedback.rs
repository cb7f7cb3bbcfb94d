/// Two descending tones, played when a step timer runs out.
const CHIME_TONES_HZ: [f32; 2] = [880.0, 660.0];
const TONE_SECS: f32 = 0.18;

/// Play the timer chime. Spawns a thread and returns immediately.
pub fn play_chime() {
    std::thread::spawn(|| {
        if let Err(e) = play_chime_blocking() {
            log::warn!("Chime failed: {e}");
        }
    });
}

/// Mono samples for the chime at `sample_rate`.
pub fn chime_samples(sample_rate: f32) -> Vec<f32> {
    use std::f32::consts::PI;

    let per_tone = (sample_rate * TONE_SECS) as usize;
    let mut samples = Vec::with_capacity(per_tone * CHIME_TONES_HZ.len());
    for freq in CHIME_TONES_HZ {
        for i in 0..per_tone {
            let t = i as f32 / sample_rate;
            // Fade-out envelope per tone
            let envelope = 1.0 - i as f32 / per_tone as f32;
            samples.push((2.0 * PI * freq * t).sin() * envelope * 0.3);
        }
    }
    samples
}

#[cfg(feature = "chime")]
fn play_chime_blocking() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or("No output device found")?;
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate() as f32;
    let channels = config.channels() as usize;

    let samples = Arc::new(chime_samples(sample_rate));
    let total = samples.len();
    let sample_idx = Arc::new(AtomicUsize::new(0));

    let cb_samples = samples.clone();
    let cb_idx = sample_idx.clone();
    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            let mut idx = cb_idx.load(Ordering::Relaxed);
            for frame in data.chunks_mut(channels) {
                let value = if idx < total { cb_samples[idx] } else { 0.0 };
                for sample in frame.iter_mut() {
                    *sample = value;
                }
                idx += 1;
            }
            cb_idx.store(idx, Ordering::Relaxed);
        },
        |err| log::error!("Audio output error: {err}"),
        None,
    )?;

    stream.play()?;

    // Let the buffer drain
    let playback_ms = (total as f32 / sample_rate * 1000.0) as u64 + 50;
    std::thread::sleep(std::time::Duration::from_millis(playback_ms));

    drop(stream);
    Ok(())
}

#[cfg(not(feature = "chime"))]
fn play_chime_blocking() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    log::info!("Timer chime (built without audio output)");
    Ok(())
}

use rand::Rng;

use crate::shared::frame::Frame;

/// Noise amplitude for the noisy filter: `min(255, intensity * 3)`.
pub fn noise_amplitude(intensity: u8) -> u16 {
    (intensity as u16 * 3).min(255)
}

/// Blends per-byte uniform random noise into the source at half weight:
/// `dst = clamp(src + 0.5 * noise)` with noise drawn from `[0, amplitude)`.
pub fn apply<R: Rng>(src: &Frame, dst: &mut Frame, intensity: u8, rng: &mut R) {
    let amplitude = noise_amplitude(intensity);
    if amplitude == 0 {
        dst.copy_from(src);
        return;
    }
    let out = dst.data_mut();
    for (&s, d) in src.data().iter().zip(out.iter_mut()) {
        let noise = rng.random_range(0..amplitude) as f32;
        *d = (s as f32 + 0.5 * noise).round().min(255.0) as u8;
    }
    dst.set_index(src.index());
}

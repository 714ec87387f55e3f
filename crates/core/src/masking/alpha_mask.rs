use crate::shared::constants::ELLIPSE_SCALE;
use crate::shared::face_rect::FaceRect;

/// Fills `mask` with a feathered elliptical alpha mask sized to `rect`.
///
/// The ellipse is centered on the rectangle with semi-axes scaled by
/// [`ELLIPSE_SCALE`] so the blur covers forehead/chin/ears beyond the
/// detector's tight box. For each pixel the normalized squared distance
/// `d = ((x-cx)/ax)^2 + ((y-cy)/ay)^2` maps to `alpha = 1 - d` inside the
/// ellipse and 0 outside, giving a linear feather from 1 at the center
/// to 0 at the boundary. 0 keeps the original pixel, 1 fully replaces it
/// with the blurred pixel.
pub fn fill_feathered_ellipse(mask: &mut Vec<f32>, rect: &FaceRect) {
    let w = rect.width as usize;
    let h = rect.height as usize;
    mask.resize(w * h, 0.0);

    let (cx, cy) = rect.center();
    let ax = (rect.width as f64 / 2.0) * ELLIPSE_SCALE;
    let ay = (rect.height as f64 / 2.0) * ELLIPSE_SCALE;
    if ax <= 0.0 || ay <= 0.0 {
        mask.fill(0.0);
        return;
    }

    for y in 0..h {
        let ny = (y as f64 - cy) / ay;
        for x in 0..w {
            let nx = (x as f64 - cx) / ax;
            let d = nx * nx + ny * ny;
            mask[y * w + x] = if d < 1.0 { (1.0 - d) as f32 } else { 0.0 };
        }
    }
}

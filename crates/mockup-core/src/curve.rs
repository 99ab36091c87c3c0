use std::fmt::Write;

/// Parameters for the decorative sine path behind the curved label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinePathParams {
    pub width: f64,
    pub height: f64,
    pub amplitude: f64,
    pub samples: u32,
}

impl Default for SinePathParams {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 200.0,
            amplitude: 40.0,
            samples: 100,
        }
    }
}

/// SVG path data for one full sine period across `width`, centred
/// vertically. SVG y grows downward, so crests point up.
pub fn sine_path(params: SinePathParams) -> String {
    let samples = params.samples.max(1);
    let center_y = params.height / 2.0;
    let mut d = String::new();
    for i in 0..=samples {
        let t = f64::from(i) / f64::from(samples);
        let x = t * params.width;
        let y = center_y - (t * std::f64::consts::TAU).sin() * params.amplitude;
        let cmd = if i == 0 { "M" } else { " L" };
        _ = write!(d, "{cmd} {x} {y}");
    }
    d
}

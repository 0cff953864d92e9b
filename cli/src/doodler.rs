use std::time::Duration;

use anyhow::bail;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rakugaki_core::sketch::{Sketchpad, CANVAS_HEIGHT, CANVAS_WIDTH};

const START_MARGIN: f32 = 20.0;
const STEP_MIN: f32 = 4.0;
const STEP_MAX: f32 = 14.0;

#[derive(Debug, Clone, Copy)]
pub(crate) struct DoodleConfig {
    pub(crate) think_min_ms: u64,
    pub(crate) think_max_ms: u64,
    pub(crate) points_min: u32,
    pub(crate) points_max: u32,
    pub(crate) wobble_deg: f32,
}

pub(crate) struct Doodler {
    rng: StdRng,
    config: DoodleConfig,
}

impl Doodler {
    pub(crate) fn new(seed: Option<u64>, config: DoodleConfig) -> anyhow::Result<Self> {
        validate_doodle_config(&config)?;
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    pub(crate) fn think_delay(&mut self) -> Duration {
        let millis = sample_low_biased_u64(
            &mut self.rng,
            self.config.think_min_ms,
            self.config.think_max_ms,
        );
        Duration::from_millis(millis)
    }

    pub(crate) fn doodle_stroke(&mut self, pad: &mut Sketchpad) {
        let points = self
            .rng
            .random_range(self.config.points_min..=self.config.points_max)
            .max(1);
        let mut x = self
            .rng
            .random_range(START_MARGIN..(CANVAS_WIDTH as f32 - START_MARGIN));
        let mut y = self
            .rng
            .random_range(START_MARGIN..(CANVAS_HEIGHT as f32 - START_MARGIN));
        let mut heading = self.rng.random_range(0.0..std::f32::consts::TAU);
        let wobble = self.config.wobble_deg.to_radians();
        pad.begin_stroke(x, y);
        for _ in 1..points {
            heading += self.rng.random_range(-wobble..=wobble);
            let step = self.rng.random_range(STEP_MIN..=STEP_MAX);
            x += step * heading.cos();
            y += step * heading.sin();
            pad.extend_stroke(x, y);
        }
        pad.finish_stroke();
    }
}

fn validate_doodle_config(config: &DoodleConfig) -> anyhow::Result<()> {
    if config.think_min_ms == 0 || config.think_max_ms < config.think_min_ms {
        bail!(
            "think time range {}..{}ms is invalid",
            config.think_min_ms,
            config.think_max_ms
        );
    }
    if config.points_min == 0 || config.points_max < config.points_min {
        bail!(
            "stroke point range {}..{} is invalid",
            config.points_min,
            config.points_max
        );
    }
    if config.wobble_deg <= 0.0 || config.wobble_deg > 180.0 {
        bail!("wobble must be within 0..180 degrees");
    }
    Ok(())
}

fn sample_low_biased_u64(rng: &mut StdRng, lo: u64, hi: u64) -> u64 {
    if hi <= lo {
        return lo;
    }
    let unit = rng.random::<f64>();
    lo + (unit * unit * (hi - lo) as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> DoodleConfig {
        DoodleConfig {
            think_min_ms: 30,
            think_max_ms: 90,
            points_min: 4,
            points_max: 9,
            wobble_deg: 35.0,
        }
    }

    #[test]
    fn same_seed_draws_the_same_strokes() {
        let mut first = Doodler::new(Some(42), quick_config()).expect("doodler");
        let mut second = Doodler::new(Some(42), quick_config()).expect("doodler");
        let mut pad_a = Sketchpad::new();
        let mut pad_b = Sketchpad::new();
        for _ in 0..5 {
            first.doodle_stroke(&mut pad_a);
            second.doodle_stroke(&mut pad_b);
        }
        assert_eq!(pad_a.strokes(), pad_b.strokes());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut first = Doodler::new(Some(1), quick_config()).expect("doodler");
        let mut second = Doodler::new(Some(2), quick_config()).expect("doodler");
        let mut pad_a = Sketchpad::new();
        let mut pad_b = Sketchpad::new();
        first.doodle_stroke(&mut pad_a);
        second.doodle_stroke(&mut pad_b);
        assert_ne!(pad_a.strokes(), pad_b.strokes());
    }

    #[test]
    fn think_delay_stays_in_range() {
        let config = quick_config();
        let mut doodler = Doodler::new(Some(9), config).expect("doodler");
        for _ in 0..200 {
            let delay = doodler.think_delay().as_millis() as u64;
            assert!(delay >= config.think_min_ms);
            assert!(delay <= config.think_max_ms);
        }
    }

    #[test]
    fn strokes_stay_on_canvas() {
        let mut doodler = Doodler::new(Some(3), quick_config()).expect("doodler");
        let mut pad = Sketchpad::new();
        for _ in 0..20 {
            doodler.doodle_stroke(&mut pad);
        }
        for stroke in pad.strokes() {
            for &(x, y) in &stroke.points {
                assert!(x >= 0.0 && x <= (CANVAS_WIDTH - 1) as f32);
                assert!(y >= 0.0 && y <= (CANVAS_HEIGHT - 1) as f32);
            }
        }
    }

    #[test]
    fn inverted_think_range_is_rejected() {
        let config = DoodleConfig {
            think_min_ms: 500,
            think_max_ms: 100,
            ..quick_config()
        };
        assert!(Doodler::new(None, config).is_err());
    }

    #[test]
    fn zero_points_are_rejected() {
        let config = DoodleConfig {
            points_min: 0,
            ..quick_config()
        };
        assert!(Doodler::new(None, config).is_err());
    }
}

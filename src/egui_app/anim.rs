//! Pure animation timing for the staged result reveal.
//!
//! Every animation is a function of elapsed time so the renderer samples it
//! once per frame and the math stays testable without a UI. The constants
//! mirror the service UI's presentation timings.

use std::time::Duration;

use crate::config::ConfidenceBands;

/// How long the confidence counter takes to reach its target.
pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);
/// Delay before the confidence bar starts filling, sequencing it after the
/// counter begins.
pub const BAR_DELAY: Duration = Duration::from_millis(300);
/// How long the bar fill takes once started.
pub const BAR_DURATION: Duration = Duration::from_millis(900);
/// Delay before the result container starts its reveal.
pub const REVEAL_DELAY: Duration = Duration::from_millis(50);
/// Fade/slide duration of the result container reveal.
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);
/// Fade-in duration of a freshly decoded preview.
pub const PREVIEW_FADE: Duration = Duration::from_millis(500);
/// Interval between progress-dot updates while loading.
pub const DOT_INTERVAL: Duration = Duration::from_millis(500);
/// Progress dots cycle through 0..=3.
pub const DOT_STATES: u32 = 4;
/// How long a notice stays before dismissing itself.
pub const NOTICE_DWELL: Duration = Duration::from_millis(4000);
/// Slide-in/slide-out duration of a notice.
pub const NOTICE_SLIDE: Duration = Duration::from_millis(300);

/// Ease-out quadratic: fast start, smooth finish.
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Linear progress through `duration`, clamped to `[0, 1]`.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Animated confidence counter value; lands exactly on `target` once the
/// duration has elapsed.
pub fn counter_value(elapsed: Duration, target: f64) -> f64 {
    let t = progress(elapsed, COUNTER_DURATION);
    if t >= 1.0 {
        return target;
    }
    f64::from(ease_out_quad(t)) * target
}

/// Bar fill as a fraction of full width, `0.0..=1.0`.
///
/// Holds at zero through [`BAR_DELAY`], then eases toward `confidence`%.
pub fn bar_fraction(elapsed: Duration, confidence: f64) -> f32 {
    let Some(since_start) = elapsed.checked_sub(BAR_DELAY) else {
        return 0.0;
    };
    let target = (confidence / 100.0).clamp(0.0, 1.0) as f32;
    ease_out_quad(progress(since_start, BAR_DURATION)) * target
}

/// Fade/slide values for the result container reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    /// Opacity, `0.0..=1.0`.
    pub alpha: f32,
    /// Downward offset in points; slides to zero.
    pub offset: f32,
}

/// Start offset of the container reveal slide.
pub const REVEAL_RISE: f32 = 20.0;

/// Container reveal at `elapsed` since the result was installed.
pub fn reveal(elapsed: Duration) -> Reveal {
    let Some(since_start) = elapsed.checked_sub(REVEAL_DELAY) else {
        return Reveal {
            alpha: 0.0,
            offset: REVEAL_RISE,
        };
    };
    let t = ease_out_quad(progress(since_start, REVEAL_DURATION));
    Reveal {
        alpha: t,
        offset: REVEAL_RISE * (1.0 - t),
    }
}

/// Preview fade-in opacity at `elapsed` since the preview was installed.
pub fn preview_alpha(elapsed: Duration) -> f32 {
    ease_out_quad(progress(elapsed, PREVIEW_FADE))
}

/// Number of progress dots to render at `elapsed` since loading began.
pub fn loading_dots(elapsed: Duration) -> usize {
    ((elapsed.as_millis() / DOT_INTERVAL.as_millis()) % u128::from(DOT_STATES)) as usize
}

/// The loading indicator text, dots included.
pub fn loading_text(elapsed: Duration) -> String {
    format!("Processing{}", ".".repeat(loading_dots(elapsed)))
}

/// Horizontal slide fraction for a notice entering view: `1.0` is fully
/// off-screen right, `0.0` is settled.
pub fn notice_slide_in(age: Duration) -> f32 {
    1.0 - ease_out_quad(progress(age, NOTICE_SLIDE))
}

/// Horizontal slide fraction for a notice leaving view.
pub fn notice_slide_out(since_evicted: Duration) -> f32 {
    ease_out_quad(progress(since_evicted, NOTICE_SLIDE))
}

/// Three-tier palette selector for the confidence readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

/// Pick the palette band for a confidence percentage.
pub fn confidence_band(confidence: f64, bands: &ConfidenceBands) -> ConfidenceBand {
    if confidence < bands.low_max {
        ConfidenceBand::Low
    } else if confidence < bands.high_min {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::High
    }
}

/// Whether any result-driven animation is still running.
pub fn result_animating(elapsed: Duration) -> bool {
    elapsed < COUNTER_DURATION.max(BAR_DELAY + BAR_DURATION).max(REVEAL_DELAY + REVEAL_DURATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn ease_out_quad_matches_curve() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-6);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(2.0), 1.0);
    }

    #[test]
    fn counter_lands_exactly_on_target() {
        assert_eq!(counter_value(COUNTER_DURATION, 87.5), 87.5);
        assert_eq!(counter_value(ms(10_000), 87.5), 87.5);
    }

    #[test]
    fn counter_starts_at_zero_and_grows() {
        assert_eq!(counter_value(Duration::ZERO, 87.5), 0.0);
        let early = counter_value(ms(300), 87.5);
        let later = counter_value(ms(900), 87.5);
        assert!(early > 0.0);
        assert!(later > early);
        assert!(later < 87.5);
    }

    #[test]
    fn bar_holds_until_its_delay() {
        assert_eq!(bar_fraction(Duration::ZERO, 87.5), 0.0);
        assert_eq!(bar_fraction(BAR_DELAY, 87.5), 0.0);
        assert!(bar_fraction(BAR_DELAY + ms(100), 87.5) > 0.0);
    }

    #[test]
    fn bar_reaches_confidence_fraction() {
        let full = bar_fraction(BAR_DELAY + BAR_DURATION, 87.5);
        assert!((full - 0.875).abs() < 1e-6);
    }

    #[test]
    fn reveal_waits_then_settles() {
        assert_eq!(
            reveal(Duration::ZERO),
            Reveal {
                alpha: 0.0,
                offset: REVEAL_RISE
            }
        );
        let settled = reveal(REVEAL_DELAY + REVEAL_DURATION);
        assert_eq!(settled.alpha, 1.0);
        assert_eq!(settled.offset, 0.0);
    }

    #[test]
    fn dots_cycle_through_four_states() {
        assert_eq!(loading_dots(Duration::ZERO), 0);
        assert_eq!(loading_dots(ms(500)), 1);
        assert_eq!(loading_dots(ms(1400)), 2);
        assert_eq!(loading_dots(ms(1500)), 3);
        assert_eq!(loading_dots(ms(2000)), 0);
        assert_eq!(loading_text(ms(1000)), "Processing..");
    }

    #[test]
    fn band_boundaries_are_inclusive_on_the_upper_tiers() {
        let bands = ConfidenceBands::default();
        assert_eq!(confidence_band(42.0, &bands), ConfidenceBand::Low);
        assert_eq!(confidence_band(49.99, &bands), ConfidenceBand::Low);
        assert_eq!(confidence_band(50.0, &bands), ConfidenceBand::Medium);
        assert_eq!(confidence_band(79.99, &bands), ConfidenceBand::Medium);
        assert_eq!(confidence_band(80.0, &bands), ConfidenceBand::High);
        assert_eq!(confidence_band(87.5, &bands), ConfidenceBand::High);
    }

    #[test]
    fn notice_slides_settle_after_their_duration() {
        assert_eq!(notice_slide_in(Duration::ZERO), 1.0);
        assert_eq!(notice_slide_in(NOTICE_SLIDE), 0.0);
        assert_eq!(notice_slide_out(Duration::ZERO), 0.0);
        assert_eq!(notice_slide_out(NOTICE_SLIDE), 1.0);
    }

    #[test]
    fn result_animation_window_covers_all_stages() {
        assert!(result_animating(Duration::ZERO));
        assert!(result_animating(ms(1400)));
        assert!(!result_animating(ms(1500)));
    }
}

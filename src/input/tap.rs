use glam::Vec2;

use super::touch::Touch;
use crate::options::GestureOptions;

/// Timer value that rules the current contact out as a tap.
const DISQUALIFIED: f32 = 99.0;

/// Tap-versus-drag state machine over single-finger contacts.
///
/// While exactly one finger is down the classifier accumulates the time the
/// finger has held still and the distance it has travelled. Once either a
/// single frame's movement or the total travel reaches the jitter
/// threshold, or the pointer is over UI, the contact is disqualified. On
/// release the contact counts as a tap if the accumulated time lies strictly
/// inside the configured window. A second finger resets everything.
#[derive(Debug, Clone)]
pub struct TapClassifier {
    timer: f32,
    travel: f32,
    hit_point: Vec2,
    options: GestureOptions,
}

impl TapClassifier {
    /// Create a classifier with the given thresholds.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        Self {
            timer: 0.0,
            travel: 0.0,
            hit_point: Vec2::ZERO,
            options,
        }
    }

    /// Accumulated still-time for the current contact.
    #[must_use]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Distance the current contact has moved since it began.
    #[must_use]
    pub fn travel(&self) -> f32 {
        self.travel
    }

    fn reset(&mut self) {
        self.timer = 0.0;
        self.travel = 0.0;
    }

    /// Feed one frame of touches. Returns the tap position on the release
    /// frame of a contact classified as a tap.
    pub fn observe(
        &mut self,
        touches: &[Touch],
        pointer_over_ui: bool,
        dt: f32,
    ) -> Option<Vec2> {
        match touches {
            [] => {
                let tap = (self.timer > self.options.tap_min_duration
                    && self.timer < self.options.tap_max_duration)
                    .then_some(self.hit_point);
                if tap.is_none() && self.timer > 0.0 {
                    log::debug!(
                        "Contact released after {:.3}s, not a tap",
                        self.timer
                    );
                }
                self.reset();
                tap
            }
            [touch] => {
                self.hit_point = touch.position;
                let moved = touch.delta.length();
                self.travel += moved;
                let jitter = self.options.jitter_threshold;
                self.timer = if moved < jitter
                    && self.travel < jitter
                    && !pointer_over_ui
                {
                    self.timer + dt
                } else {
                    DISQUALIFIED
                };
                None
            }
            _ => {
                self.reset();
                None
            }
        }
    }
}

impl Default for TapClassifier {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// Hold one finger for `frames` frames, spreading `total_movement`
    /// evenly over them, then release.
    fn gesture(frames: usize, total_movement: f32) -> Option<Vec2> {
        gesture_at_rate(frames, total_movement, DT)
    }

    fn gesture_at_rate(
        frames: usize,
        total_movement: f32,
        dt: f32,
    ) -> Option<Vec2> {
        let mut tap = TapClassifier::default();
        let step = Vec2::new(total_movement / frames as f32, 0.0);
        let mut pos = Vec2::new(200.0, 300.0);
        for _ in 0..frames {
            pos += step;
            let touch = Touch::moved(pos, step);
            assert!(tap.observe(&[touch], false, dt).is_none());
        }
        tap.observe(&[], false, dt)
    }

    #[test]
    fn short_still_contact_is_a_tap() {
        let hit = gesture(6, 0.02);
        assert!(hit.is_some());
        assert!((hit.unwrap().x - 200.02).abs() < 1e-3);
    }

    #[test]
    fn long_contact_is_not_a_tap() {
        assert!(gesture(18, 0.02).is_none());
    }

    #[test]
    fn moving_contact_is_not_a_tap() {
        let mut tap = TapClassifier::default();
        let pos = Vec2::new(10.0, 10.0);
        assert!(tap.observe(&[Touch::at(pos)], false, 0.05).is_none());
        let jump = Touch::moved(pos + Vec2::new(0.5, 0.0), Vec2::new(0.5, 0.0));
        assert!(tap.observe(&[jump], false, 0.05).is_none());
        assert!(tap.timer() >= DISQUALIFIED);
        assert!(tap.observe(&[], false, DT).is_none());
        assert_eq!(tap.timer(), 0.0);
    }

    #[test]
    fn slow_drift_is_not_a_tap_at_high_frame_rate() {
        // 0.1s at 240 fps, each frame under the jitter threshold
        assert!(gesture_at_rate(24, 0.5, 1.0 / 240.0).is_none());
        assert!(gesture_at_rate(24, 0.02, 1.0 / 240.0).is_some());
    }

    #[test]
    fn travel_resets_between_contacts() {
        let mut tap = TapClassifier::default();
        let step = Vec2::new(0.03, 0.0);
        let _ = tap.observe(&[Touch::moved(Vec2::ONE, step)], false, DT);
        assert!((tap.travel() - 0.03).abs() < 1e-6);
        let _ = tap.observe(&[], false, DT);
        assert_eq!(tap.travel(), 0.0);

        let _ = tap.observe(&[Touch::moved(Vec2::ONE, step)], false, DT);
        let two = [Touch::at(Vec2::ONE), Touch::at(Vec2::splat(9.0))];
        let _ = tap.observe(&two, false, DT);
        assert_eq!(tap.travel(), 0.0);
    }

    #[test]
    fn too_short_contact_is_noise() {
        assert!(gesture(2, 0.0).is_none());
    }

    #[test]
    fn pointer_over_ui_disqualifies() {
        let mut tap = TapClassifier::default();
        let touch = Touch::at(Vec2::new(5.0, 5.0));
        for _ in 0..6 {
            let _ = tap.observe(&[touch], true, DT);
        }
        assert!(tap.observe(&[], false, DT).is_none());
    }

    #[test]
    fn second_finger_resets_timer() {
        let mut tap = TapClassifier::default();
        let a = Touch::at(Vec2::new(5.0, 5.0));
        let b = Touch::at(Vec2::new(50.0, 5.0));
        for _ in 0..4 {
            let _ = tap.observe(&[a], false, DT);
        }
        assert!(tap.timer() > 0.0);
        let _ = tap.observe(&[a, b], false, DT);
        assert_eq!(tap.timer(), 0.0);
    }
}

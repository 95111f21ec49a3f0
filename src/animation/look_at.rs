//! Turn-to-face animation used after a tap selection.

use glam::Quat;

/// Eases a target rotation toward a fixed look rotation over a duration.
///
/// Each step blends the *current* target a growing fraction of the way to
/// the goal, so the motion starts gently and lands exactly on the goal when
/// the time runs out.
#[derive(Debug, Clone)]
pub struct LookAtAnimation {
    goal: Quat,
    duration: f32,
    elapsed: f32,
}

impl LookAtAnimation {
    /// Animate toward `goal` over `duration` seconds.
    #[must_use]
    pub fn new(goal: Quat, duration: f32) -> Self {
        Self {
            goal,
            duration,
            elapsed: 0.0,
        }
    }

    /// Whether the accumulated time has reached the duration.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Blend `current` toward the goal for this frame and accumulate `dt`.
    ///
    /// Once finished this returns the goal exactly.
    pub fn step(&mut self, current: Quat, dt: f32) -> Quat {
        if self.is_finished() {
            return self.goal;
        }
        let t = self.elapsed / self.duration;
        self.elapsed += dt.max(0.0);
        current.slerp(self.goal, t).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_goal_after_duration() {
        let goal = Quat::from_rotation_y(1.2);
        let mut anim = LookAtAnimation::new(goal, 0.5);
        let mut current = Quat::IDENTITY;
        for _ in 0..40 {
            current = anim.step(current, 1.0 / 60.0);
        }
        assert!(anim.is_finished());
        assert_eq!(anim.step(current, 1.0 / 60.0), goal);
    }

    #[test]
    fn first_step_does_not_move() {
        let mut anim = LookAtAnimation::new(Quat::from_rotation_y(1.0), 0.5);
        let out = anim.step(Quat::IDENTITY, 0.1);
        assert!(out.angle_between(Quat::IDENTITY) < 1e-6);
        let out = anim.step(out, 0.1);
        assert!(out.angle_between(Quat::IDENTITY) > 0.1);
    }

    #[test]
    fn zero_duration_snaps() {
        let goal = Quat::from_rotation_x(0.4);
        let mut anim = LookAtAnimation::new(goal, 0.0);
        assert_eq!(anim.step(Quat::IDENTITY, 0.016), goal);
    }
}

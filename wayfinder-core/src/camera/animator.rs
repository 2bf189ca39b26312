use std::time::Duration;

use log::debug;

use super::{CameraPath, CameraPose};

/// Identifies one started animation; a newer start invalidates older handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// What the host should do with the pose produced for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutput {
    /// Apply the pose and schedule another frame
    Pose(CameraPose),
    /// Apply the pose; the animation is over and nothing more is scheduled
    Finished(CameraPose),
}

impl FrameOutput {
    pub fn pose(&self) -> &CameraPose {
        match self {
            FrameOutput::Pose(pose) | FrameOutput::Finished(pose) => pose,
        }
    }
}

#[derive(Debug)]
struct ActiveAnimation {
    handle: AnimationHandle,
    path: CameraPath,
    duration: Duration,
    /// Host timestamp of the first tick
    started_at: Option<Duration>,
}

/// Frame-driven driver for at most one camera animation.
///
/// The host calls [`CameraAnimator::tick`] once per rendered frame with its
/// frame timestamp. Starting an animation cancels the running one, so a
/// continuation of the old flight can never fight the new one for the pose.
#[derive(Debug, Default)]
pub struct CameraAnimator {
    generation: u64,
    active: Option<ActiveAnimation>,
}

impl CameraAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any running animation. Time starts at the first tick.
    pub fn start(&mut self, path: CameraPath, duration: Duration) -> AnimationHandle {
        self.cancel();
        self.generation += 1;
        let handle = AnimationHandle(self.generation);
        debug!(
            "Camera animation {} started: {} samples over {:?}",
            self.generation,
            path.len(),
            duration
        );
        self.active = Some(ActiveAnimation {
            handle,
            path,
            duration,
            started_at: None,
        });
        handle
    }

    /// Drops the running animation; returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(animation) => {
                debug!("Camera animation {} cancelled", animation.handle.0);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Whether `handle` still names the running animation
    pub fn is_current(&self, handle: AnimationHandle) -> bool {
        self.active
            .as_ref()
            .is_some_and(|animation| animation.handle == handle)
    }

    /// Advances the running animation to host time `now`.
    ///
    /// Returns `None` when nothing is running.
    pub fn tick(&mut self, now: Duration) -> Option<FrameOutput> {
        let animation = self.active.as_mut()?;
        let started_at = *animation.started_at.get_or_insert(now);
        let elapsed = now.saturating_sub(started_at);

        let progress = if animation.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / animation.duration.as_secs_f64()).min(1.0)
        };
        let pose = animation.path.pose_at(progress);

        if elapsed >= animation.duration {
            debug!("Camera animation {} finished", animation.handle.0);
            self.active = None;
            Some(FrameOutput::Finished(pose))
        } else {
            Some(FrameOutput::Pose(pose))
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::camera::CameraConfig;
    use crate::model::Position;

    fn path(lon_end: f64) -> CameraPath {
        let positions = [Position::new(0.0, 0.0, 0.0), Position::new(lon_end, 0.0, 0.0)];
        CameraPath::new(&positions, &CameraConfig::default()).unwrap()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn idle_animator_emits_nothing() {
        let mut animator = CameraAnimator::new();
        assert!(animator.tick(ms(16)).is_none());
        assert!(!animator.cancel());
    }

    #[test]
    fn runs_until_duration_then_stops() {
        let mut animator = CameraAnimator::new();
        animator.start(path(0.001), ms(1000));

        // First tick latches the start time
        let first = animator.tick(ms(5000)).unwrap();
        assert!(matches!(first, FrameOutput::Pose(_)));
        assert_relative_eq!(first.pose().center.x, 0.0);

        let mid = animator.tick(ms(5500)).unwrap();
        assert!(matches!(mid, FrameOutput::Pose(_)));
        assert_relative_eq!(mid.pose().center.x, 0.0005, epsilon = 1e-12);

        let last = animator.tick(ms(6000)).unwrap();
        assert!(matches!(last, FrameOutput::Finished(_)));
        assert_relative_eq!(last.pose().center.x, 0.001, epsilon = 1e-12);

        assert!(!animator.is_active());
        assert!(animator.tick(ms(6016)).is_none());
    }

    #[test]
    fn starting_again_cancels_previous() {
        let mut animator = CameraAnimator::new();
        let first = animator.start(path(0.001), ms(1000));
        animator.tick(ms(0));
        let second = animator.start(path(-0.001), ms(1000));

        assert_ne!(first, second);
        assert!(!animator.is_current(first));
        assert!(animator.is_current(second));

        // Restarted clock: the new flight begins at its own origin heading west
        let pose = *animator.tick(ms(500)).unwrap().pose();
        assert_relative_eq!(pose.center.x, 0.0);
        assert_relative_eq!(pose.bearing, -90.0);
    }

    #[test]
    fn cancel_stops_further_frames() {
        let mut animator = CameraAnimator::new();
        let handle = animator.start(path(0.001), ms(1000));
        animator.tick(ms(0));
        assert!(animator.cancel());
        assert!(!animator.is_current(handle));
        assert!(animator.tick(ms(100)).is_none());
    }

    #[test]
    fn zero_duration_finishes_on_first_tick() {
        let mut animator = CameraAnimator::new();
        animator.start(path(0.001), Duration::ZERO);
        let frame = animator.tick(ms(42)).unwrap();
        assert!(matches!(frame, FrameOutput::Finished(_)));
        assert_relative_eq!(frame.pose().center.x, 0.001);
    }
}

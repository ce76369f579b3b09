//! CorePlugin wires frame timing and the per-frame system ordering.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

const DEFAULT_REFERENCE_HZ: f32 = 60.0;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
    frames_at_last_report: u64,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
            frames_at_last_report: 0,
        }
    }
}

/// Ordered phases of every rendered frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Press/release events write the input state.
    Input,
    /// The camera controller integrates one step.
    Motion,
    /// Consumers of the camera position (ground, sprites, HUD).
    Present,
}

/// How motion constants relate to wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MotionTiming {
    /// Speed and rotation step apply once per rendered frame.
    #[default]
    PerFrame,
    /// Steps are scaled by `delta * hz`, so `hz` frames per second match `PerFrame`.
    ReferenceRate { hz: f32 },
}

impl MotionTiming {
    pub fn reference_rate(hz: f32) -> Self {
        if hz.is_finite() && hz > 0.0 {
            Self::ReferenceRate { hz }
        } else {
            Self::ReferenceRate {
                hz: DEFAULT_REFERENCE_HZ,
            }
        }
    }
}

/// Counts rendered frames and converts the last frame delta into a motion scale.
#[derive(Resource, Debug)]
pub struct FrameClock {
    timing: MotionTiming,
    frames: u64,
    last_delta: Duration,
}

impl FrameClock {
    pub fn new(timing: MotionTiming) -> Self {
        Self {
            timing,
            frames: 0,
            last_delta: Duration::ZERO,
        }
    }

    pub fn timing(&self) -> MotionTiming {
        self.timing
    }

    /// Number of frames ticked so far.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Multiplier applied to the controller's per-step constants this frame.
    pub fn frame_scale(&self) -> f32 {
        match self.timing {
            MotionTiming::PerFrame => 1.0,
            MotionTiming::ReferenceRate { hz } => self.last_delta.as_secs_f32() * hz,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.frames = self.frames.saturating_add(1);
        self.last_delta = delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MotionTiming::default())
    }
}

/// Registers the frame clock and chains the frame sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePlugin {
    timing: MotionTiming,
}

impl CorePlugin {
    pub const fn with_timing(timing: MotionTiming) -> Self {
        Self { timing }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FrameClock::new(self.timing))
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Motion, FrameSet::Present).chain(),
            )
            .add_systems(Startup, log_startup_timing)
            .add_systems(Update, tick_frame_clock.before(FrameSet::Input));

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_frame_rate.after(tick_frame_clock));
        }
    }
}

fn tick_frame_clock(mut clock: ResMut<FrameClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_timing(clock: Res<FrameClock>) {
    match clock.timing() {
        MotionTiming::PerFrame => info!("CorePlugin initialised with per-frame motion steps"),
        MotionTiming::ReferenceRate { hz } => {
            info!("CorePlugin initialised with motion steps scaled to {:.1} Hz", hz)
        }
    }
}

#[cfg(feature = "core_debug")]
fn log_frame_rate(mut timer: ResMut<DebugTickTimer>, clock: Res<FrameClock>) {
    if timer.timer.tick(clock.last_delta()).just_finished() {
        let frames = clock.frames() - timer.frames_at_last_report;
        timer.frames_at_last_report = clock.frames();
        info!(
            target: "core_debug",
            "frames: {} | last second: {} | dt: {:.4}s | scale: {:.3}",
            clock.frames(),
            frames,
            clock.last_delta().as_secs_f32(),
            clock.frame_scale(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_timing_ignores_delta() {
        let mut clock = FrameClock::new(MotionTiming::PerFrame);
        clock.tick(Duration::from_millis(250));

        assert_eq!(clock.frames(), 1);
        assert_eq!(clock.frame_scale(), 1.0);
    }

    #[test]
    fn reference_rate_scales_with_delta() {
        let mut clock = FrameClock::new(MotionTiming::reference_rate(60.0));
        clock.tick(Duration::from_secs_f32(1.0 / 30.0));

        assert!((clock.frame_scale() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn reference_rate_rejects_non_positive_hz() {
        assert_eq!(
            MotionTiming::reference_rate(0.0),
            MotionTiming::ReferenceRate {
                hz: DEFAULT_REFERENCE_HZ
            }
        );
        assert_eq!(
            MotionTiming::reference_rate(f32::NAN),
            MotionTiming::ReferenceRate {
                hz: DEFAULT_REFERENCE_HZ
            }
        );
    }

    #[test]
    fn clock_system_counts_frames() {
        let mut app = App::new();
        app.insert_resource(FrameClock::default())
            .insert_resource(Time::<()>::default())
            .add_systems(Update, tick_frame_clock);

        app.update();
        app.update();

        assert_eq!(app.world().resource::<FrameClock>().frames(), 2);
    }
}

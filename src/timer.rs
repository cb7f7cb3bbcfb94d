use crate::catalog::RecipeStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    #[error("duration must not be negative (got {0}s)")]
    InvalidArgument(i64),
}

/// Format seconds as `MM:SS`. Minutes are not folded into hours, so
/// 3661 seconds reads "61:01".
pub fn format_duration(total_seconds: i64) -> Result<String, TimerError> {
    if total_seconds < 0 {
        return Err(TimerError::InvalidArgument(total_seconds));
    }
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    Ok(format!("{mins:02}:{secs:02}"))
}

/// Result of advancing a [`StepTimer`] by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Finished,
}

/// Countdown for a step that needs timing (e.g. boiling pasta).
/// Driven externally: call [`StepTimer::tick`] once per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTimer {
    total: u32,
    remaining: u32,
    running: bool,
}

impl StepTimer {
    pub fn new(seconds: u32) -> Self {
        Self {
            total: seconds,
            remaining: seconds,
            running: false,
        }
    }

    /// Timer for `step`, if the step uses one.
    pub fn for_step(step: &RecipeStep) -> Option<Self> {
        step.uses_timer().then(|| Self::new(step.timer_seconds()))
    }

    pub fn start(&mut self) {
        if self.remaining > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.remaining = self.total;
        self.running = false;
    }

    pub fn tick(&mut self) -> TimerState {
        if !self.running {
            return TimerState::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return TimerState::Finished;
        }
        TimerState::Running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Remaining time as `MM:SS`.
    pub fn label(&self) -> String {
        format_duration(i64::from(self.remaining)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(0).unwrap(), "00:00");
        assert_eq!(format_duration(59).unwrap(), "00:59");
        assert_eq!(format_duration(90).unwrap(), "01:30");
        assert_eq!(format_duration(3661).unwrap(), "61:01");
    }

    #[test]
    fn negative_duration_rejected() {
        assert_eq!(format_duration(-1), Err(TimerError::InvalidArgument(-1)));
    }

    #[test]
    fn only_timed_steps_get_a_timer() {
        let plain = RecipeStep::new("1. Chop", "board", "Chop");
        assert!(StepTimer::for_step(&plain).is_none());

        let timed = plain.with_timer(30);
        let timer = StepTimer::for_step(&timed).unwrap();
        assert_eq!(timer.remaining(), 30);
        assert!(!timer.is_running());
        assert_eq!(timer.label(), "00:30");
    }

    #[test]
    fn countdown_finishes_once() {
        let mut timer = StepTimer::new(2);
        assert_eq!(timer.tick(), TimerState::Idle);

        timer.start();
        assert_eq!(timer.tick(), TimerState::Running);
        assert_eq!(timer.label(), "00:01");
        assert_eq!(timer.tick(), TimerState::Finished);
        assert!(timer.is_finished());
        assert_eq!(timer.tick(), TimerState::Idle);

        timer.start();
        assert!(!timer.is_running());
    }

    #[test]
    fn pause_and_reset() {
        let mut timer = StepTimer::new(90);
        timer.start();
        timer.tick();
        timer.pause();
        assert_eq!(timer.tick(), TimerState::Idle);
        assert_eq!(timer.label(), "01:29");

        timer.reset();
        assert_eq!(timer.remaining(), 90);
        assert!(!timer.is_running());
    }
}

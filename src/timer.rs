/// 25 minutes
pub const DEFAULT_FOCUS_SECS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not counting; also the initial state
    Paused(u32),
    Running(u32),
    Expired,
}

/// Countdown with start/pause/reset, decremented once per tick while running
#[derive(Debug, Clone)]
pub struct SessionTimer {
    duration_secs: u32,
    phase: TimerPhase,
}

impl SessionTimer {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration_secs,
            phase: TimerPhase::Paused(duration_secs),
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining(&self) -> u32 {
        match self.phase {
            TimerPhase::Paused(secs) | TimerPhase::Running(secs) => secs,
            TimerPhase::Expired => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running(_))
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.phase, TimerPhase::Expired)
    }

    /// Returns true when the timer transitioned into running.
    pub fn start(&mut self) -> bool {
        match self.phase {
            TimerPhase::Paused(0) => {
                self.phase = TimerPhase::Expired;
                false
            }
            TimerPhase::Paused(secs) => {
                self.phase = TimerPhase::Running(secs);
                true
            }
            TimerPhase::Running(_) | TimerPhase::Expired => false,
        }
    }

    /// Returns true when the timer was running.
    pub fn pause(&mut self) -> bool {
        match self.phase {
            TimerPhase::Running(secs) => {
                self.phase = TimerPhase::Paused(secs);
                true
            }
            _ => false,
        }
    }

    /// Start/Pause button. Returns whether the timer is running afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
        self.is_running()
    }

    pub fn reset(&mut self) {
        self.phase = TimerPhase::Paused(self.duration_secs);
    }

    /// One second elapsed. Only a running timer moves.
    pub fn tick(&mut self) -> TimerPhase {
        if let TimerPhase::Running(secs) = self.phase {
            let left = secs.saturating_sub(1);
            self.phase = if left == 0 {
                TimerPhase::Expired
            } else {
                TimerPhase::Running(left)
            };
        }
        self.phase
    }

    pub fn display(&self) -> String {
        format_time(self.remaining())
    }

    /// 0.0 at the start of a session, 1.0 once expired
    pub fn progress(&self) -> f64 {
        if self.duration_secs == 0 {
            return 1.0;
        }
        1.0 - self.remaining() as f64 / self.duration_secs as f64
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_SECS)
    }
}

/// `MM:SS`, both zero padded
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_timer_is_paused_at_25_minutes() {
        let timer = SessionTimer::default();
        assert_eq!(timer.phase(), TimerPhase::Paused(1500));
        assert_eq!(timer.remaining(), 1500);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "25:00");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(125), "02:05");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_start_and_tick() {
        let mut timer = SessionTimer::default();
        assert!(timer.start());
        assert!(timer.is_running());

        timer.tick();
        timer.tick();
        assert_eq!(timer.phase(), TimerPhase::Running(1498));
        assert_eq!(timer.display(), "24:58");
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut timer = SessionTimer::new(10);
        assert!(timer.start());
        assert!(!timer.start());
        assert_eq!(timer.phase(), TimerPhase::Running(10));
    }

    #[test]
    fn test_tick_while_paused_does_not_move() {
        let mut timer = SessionTimer::new(10);
        for _ in 0..5 {
            timer.tick();
        }
        assert_eq!(timer.phase(), TimerPhase::Paused(10));
    }

    #[test]
    fn test_running_five_expires_after_five_ticks() {
        let mut timer = SessionTimer::new(5);
        timer.start();

        for expected in (1..5).rev() {
            assert_eq!(timer.tick(), TimerPhase::Running(expected));
        }
        assert_eq!(timer.tick(), TimerPhase::Expired);
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.is_running());

        // no further decrements
        assert_eq!(timer.tick(), TimerPhase::Expired);
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn test_start_after_expiry_is_noop() {
        let mut timer = SessionTimer::new(1);
        timer.start();
        timer.tick();
        assert!(timer.is_expired());

        assert!(!timer.start());
        assert!(!timer.toggle());
        assert!(timer.is_expired());
    }

    #[test]
    fn test_pause_then_resume_keeps_remaining() {
        let mut timer = SessionTimer::new(30);
        timer.start();
        timer.tick();
        timer.tick();

        assert!(timer.pause());
        assert_eq!(timer.phase(), TimerPhase::Paused(28));
        assert!(!timer.pause());

        timer.start();
        assert_eq!(timer.phase(), TimerPhase::Running(28));
        timer.tick();
        assert_eq!(timer.remaining(), 27);
    }

    #[test]
    fn test_toggle_flips_running() {
        let mut timer = SessionTimer::default();
        assert!(timer.toggle());
        assert!(!timer.toggle());
        assert!(timer.toggle());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut paused = SessionTimer::default();
        paused.reset();
        assert_eq!(paused.remaining(), 1500);
        assert!(!paused.is_running());

        let mut running = SessionTimer::default();
        running.start();
        running.tick();
        running.reset();
        assert_matches!(running.phase(), TimerPhase::Paused(1500));

        let mut expired = SessionTimer::new(1);
        expired.start();
        expired.tick();
        expired.reset();
        assert_matches!(expired.phase(), TimerPhase::Paused(1));
    }

    #[test]
    fn test_zero_duration_expires_on_start() {
        let mut timer = SessionTimer::new(0);
        assert!(!timer.start());
        assert!(timer.is_expired());
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_progress() {
        let mut timer = SessionTimer::new(4);
        assert_eq!(timer.progress(), 0.0);
        timer.start();
        timer.tick();
        assert_eq!(timer.progress(), 0.25);
    }
}

//! Staged reveal timing and the small state machines it drives.
//!
//! The page opens behind a fixed loading gate, then agent cards fade in one
//! after another and criterion cards start their animation with a stagger.
//! Everything here is pure so the UI layer only has to own the timers.

use std::time::Duration;

/// Length of the loading gate after the home page mounts
pub const LOADING_GATE: Duration = Duration::from_millis(2000);

/// Delay between consecutive agent card reveals
pub const CARD_STAGGER: Duration = Duration::from_millis(200);

/// Animation offset between consecutive criterion cards
pub const CRITERION_STAGGER: Duration = Duration::from_millis(100);

/// Timing knobs injected into the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub loading_gate: Duration,
    pub card_stagger: Duration,
    pub criterion_stagger: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading_gate: LOADING_GATE,
            card_stagger: CARD_STAGGER,
            criterion_stagger: CRITERION_STAGGER,
        }
    }
}

impl Timings {
    /// Default timings without the loading gate
    pub fn without_intro() -> Self {
        Self {
            loading_gate: Duration::ZERO,
            ..Self::default()
        }
    }

    /// How long the card at `index` waits before it becomes visible
    pub fn entrance_delay(&self, index: usize) -> Duration {
        stagger(self.card_stagger, index)
    }

    /// Inline style that offsets the criterion card's entrance animation
    pub fn criterion_style(&self, index: usize) -> String {
        format!(
            "animation-delay: {}ms;",
            stagger(self.criterion_stagger, index).as_millis()
        )
    }

    /// Phase the home page starts in
    pub fn initial_phase(&self) -> LoadPhase {
        if self.loading_gate.is_zero() {
            LoadPhase::Ready
        } else {
            LoadPhase::Loading
        }
    }

    /// Phase of the home page `elapsed` after mount
    pub fn phase_at(&self, elapsed: Duration) -> LoadPhase {
        if elapsed < self.loading_gate {
            LoadPhase::Loading
        } else {
            LoadPhase::Ready
        }
    }
}

fn stagger(step: Duration, index: usize) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Home page gate. `Loading` only ever moves to `Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// Gate timer fired. Idempotent.
    pub fn finish(&mut self) {
        *self = LoadPhase::Ready;
    }
}

/// Transient state of one agent card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CardState {
    pub flipped: bool,
    pub visible: bool,
}

impl CardState {
    /// Click handler: every click flips, no debounce
    pub fn toggle_flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Entrance timer fired. Visibility is never revoked.
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// CSS classes for the card root
    pub fn class(&self) -> String {
        let mut class = String::from("spy-card");
        if self.visible {
            class.push_str(" visible");
        }
        if self.flipped {
            class.push_str(" flipped");
        }
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_delay_is_index_times_stagger() {
        let t = Timings::default();
        assert_eq!(t.entrance_delay(0), Duration::ZERO);
        assert_eq!(t.entrance_delay(3), Duration::from_millis(600));
    }

    #[test]
    fn criterion_style_offsets_by_tenth_of_second() {
        let t = Timings::default();
        assert_eq!(t.criterion_style(0), "animation-delay: 0ms;");
        assert_eq!(t.criterion_style(3), "animation-delay: 300ms;");
    }

    #[test]
    fn gate_holds_for_two_seconds() {
        let t = Timings::default();
        assert_eq!(t.phase_at(Duration::ZERO), LoadPhase::Loading);
        assert_eq!(t.phase_at(Duration::from_millis(1999)), LoadPhase::Loading);
        assert_eq!(t.phase_at(Duration::from_millis(2000)), LoadPhase::Ready);
    }

    #[test]
    fn skipping_intro_starts_ready() {
        assert_eq!(Timings::default().initial_phase(), LoadPhase::Loading);
        assert_eq!(Timings::without_intro().initial_phase(), LoadPhase::Ready);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut phase = LoadPhase::default();
        assert!(phase.is_loading());
        phase.finish();
        phase.finish();
        assert_eq!(phase, LoadPhase::Ready);
    }

    #[test]
    fn card_class_reflects_state() {
        let mut state = CardState::default();
        assert_eq!(state.class(), "spy-card");
        state.reveal();
        assert_eq!(state.class(), "spy-card visible");
        state.toggle_flip();
        assert_eq!(state.class(), "spy-card visible flipped");
    }

    #[test]
    fn huge_index_saturates() {
        let t = Timings::default();
        assert!(t.entrance_delay(usize::MAX) > Duration::from_secs(3600));
    }
}

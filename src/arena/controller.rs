//! Match controller - owns all match state and runs it once per poll tick.

use crate::arena::clock::{ClockStatus, MatchClock};
use crate::arena::debounce::{Debouncer, Edge};
use crate::arena::score::Score;
use crate::arena::sequence::{PressOutcome, ReferenceSequence, SequenceTracker};
use crate::config::{
    Micros, DEBOUNCE_DELAY_US, FLASH_INTERVAL_US, MATCH_RUNTIME_US, NUM_BUTTONS,
};

/// Commands the controller issues to the outside world.
///
/// Implementations drive station LEDs and whatever display is attached.
/// The controller works identically against [`NullSink`], so a missing
/// display never touches match logic.
pub trait OutputSink {
    /// Light station `channel`'s LED.
    fn illuminate(&mut self, channel: u8);
    /// Dark station `channel`'s LED.
    fn extinguish(&mut self, channel: u8);
    /// The score changed, or the match just ended with this final score.
    fn show_score(&mut self, score: &Score);
    /// Elapsed match time, reported at whole-second granularity.
    fn show_elapsed(&mut self, elapsed: Micros);
}

/// Headless stand-in: accepts every command and does nothing.
pub struct NullSink;

impl OutputSink for NullSink {
    fn illuminate(&mut self, _channel: u8) {}
    fn extinguish(&mut self, _channel: u8) {}
    fn show_score(&mut self, _score: &Score) {}
    fn show_elapsed(&mut self, _elapsed: Micros) {}
}

/// Timing knobs, all in microseconds.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub debounce: Micros,
    pub match_runtime: Micros,
    pub flash: Micros,
}

impl Timings {
    /// Competition values from [`crate::config`].
    pub const fn competition() -> Self {
        Self {
            debounce: DEBOUNCE_DELAY_US,
            match_runtime: MATCH_RUNTIME_US,
            flash: FLASH_INTERVAL_US,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::competition()
    }
}

/// Match lifecycle. Terminal at `Expired`; a new match means a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    Running,
    Expired,
}

/// Wrong-press LED flash, expressed as a deadline rather than a sleep so
/// the poll loop never blocks.
#[derive(Debug, Clone, Copy)]
enum FlashState {
    Off,
    Pending { channel: u8, deadline: Micros },
}

/// Owns every piece of match state; single execution context, no sharing.
pub struct MatchController<'a> {
    channels: [Debouncer; NUM_BUTTONS],
    tracker: SequenceTracker<'a>,
    clock: MatchClock,
    score: Score,
    flash: FlashState,
    flash_interval: Micros,
    phase: Phase,
    last_shown_secs: Option<u64>,
}

impl<'a> MatchController<'a> {
    pub fn new(sequence: ReferenceSequence<'a>, timings: Timings) -> Self {
        Self {
            channels: [Debouncer::new(timings.debounce); NUM_BUTTONS],
            tracker: SequenceTracker::new(sequence),
            clock: MatchClock::new(timings.match_runtime),
            score: Score::new(),
            flash: FlashState::Off,
            flash_interval: timings.flash,
            phase: Phase::Idle,
            last_shown_secs: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn elapsed(&self, now: Micros) -> Micros {
        self.clock.elapsed(now)
    }

    /// External start control: open the match window without a press.
    /// Harmless once the match is already running.
    pub fn force_start(&mut self, now: Micros) {
        self.clock.start(now);
    }

    /// External stop control: the match ends on the next poll tick
    /// regardless of elapsed time.
    pub fn force_stop(&mut self) {
        self.clock.force_expire();
    }

    /// One scheduling tick: debounce the raw reads, gate on the clock,
    /// score this tick's presses, and service the flash/elapsed deadlines.
    pub fn poll<S: OutputSink>(&mut self, now: Micros, raw: &[bool; NUM_BUTTONS], sink: &mut S) {
        // Debounce every channel every tick, even after expiry - the
        // filters must keep tracking the electrical state.
        let mut pressed = [false; NUM_BUTTONS];
        let mut any_pressed = false;
        for (ch, debouncer) in self.channels.iter_mut().enumerate() {
            if debouncer.poll(raw[ch], now) == Some(Edge::Pressed) {
                pressed[ch] = true;
                any_pressed = true;
            }
        }

        // A press on an idle arena is the start signal. The press itself is
        // evaluated below like any other: the player's first digit counts.
        if !self.clock.is_started() && any_pressed {
            self.clock.start(now);
        }

        // The clock gates press handling: a press sampled on the tick the
        // window closes is already outside the match and is not scored.
        match self.clock.tick(now) {
            ClockStatus::NotStarted => {}
            ClockStatus::Running => {
                self.phase = Phase::Running;
                self.service_flash(now, sink);
                if any_pressed {
                    for ch in 0..NUM_BUTTONS {
                        if pressed[ch] {
                            self.press(ch as u8, now, sink);
                        }
                    }
                }
                self.report_elapsed(now, sink);
            }
            ClockStatus::JustExpired => {
                self.phase = Phase::Expired;
                if let FlashState::Pending { channel, .. } = self.flash {
                    sink.extinguish(channel);
                    self.flash = FlashState::Off;
                }
                sink.show_score(&self.score);
            }
            ClockStatus::Expired => {}
        }
    }

    /// Score one stable press. Station identity doubles as digit identity.
    fn press<S: OutputSink>(&mut self, channel: u8, now: Micros, sink: &mut S) {
        if channel as usize >= NUM_BUTTONS {
            // Not a wired station; drop the press rather than disturb the match.
            return;
        }

        let outcome = self.tracker.on_press(channel);
        self.score.record(outcome);

        if matches!(outcome, PressOutcome::OffSequence | PressOutcome::Exhausted) {
            if let FlashState::Pending { channel: prev, .. } = self.flash {
                if prev != channel {
                    sink.extinguish(prev);
                }
            }
            sink.illuminate(channel);
            self.flash = FlashState::Pending {
                channel,
                deadline: now + self.flash_interval,
            };
        }

        sink.show_score(&self.score);
    }

    /// Non-blocking flash timeout check, once per tick.
    fn service_flash<S: OutputSink>(&mut self, now: Micros, sink: &mut S) {
        if let FlashState::Pending { channel, deadline } = self.flash {
            if now >= deadline {
                sink.extinguish(channel);
                self.flash = FlashState::Off;
            }
        }
    }

    /// Push elapsed time outward only when the displayed second changes.
    fn report_elapsed<S: OutputSink>(&mut self, now: Micros, sink: &mut S) {
        let elapsed = self.clock.elapsed(now);
        let secs = elapsed / 1_000_000;
        if self.last_shown_secs != Some(secs) {
            self.last_shown_secs = Some(secs);
            sink.show_elapsed(elapsed);
        }
    }
}

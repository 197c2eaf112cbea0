//! Integration tests driving full matches through the public API.

use arenactl::arena::{
    MatchController, OutputSink, Phase, ReferenceSequence, Score, Timings,
};
use arenactl::config::{Micros, NUM_BUTTONS, PI_DIGITS};

/// Sink that keeps only what the scenarios assert on.
#[derive(Default)]
struct ScoreLog {
    updates: Vec<Score>,
    lit: Vec<u8>,
}

impl OutputSink for ScoreLog {
    fn illuminate(&mut self, channel: u8) {
        self.lit.push(channel);
    }
    fn extinguish(&mut self, _channel: u8) {}
    fn show_score(&mut self, score: &Score) {
        self.updates.push(*score);
    }
    fn show_elapsed(&mut self, _elapsed: Micros) {}
}

/// One debounced press and release of `channel` at competition timings.
fn press(ctl: &mut MatchController<'_>, sink: &mut ScoreLog, channel: usize, now: &mut Micros) {
    let timings = Timings::competition();
    let mut raw = [false; NUM_BUTTONS];
    raw[channel] = true;
    ctl.poll(*now, &raw, sink);
    *now += timings.debounce;
    ctl.poll(*now, &raw, sink);
    let raw = [false; NUM_BUTTONS];
    ctl.poll(*now, &raw, sink);
    *now += timings.debounce;
    ctl.poll(*now, &raw, sink);
    *now += 10_000;
}

#[test]
fn full_match_against_pi_with_mistakes() {
    let sequence = ReferenceSequence::from_ascii(PI_DIGITS).unwrap();
    let mut ctl = MatchController::new(sequence, Timings::competition());
    let mut sink = ScoreLog::default();
    let mut now = 0;

    // 3 1 4 1 5 9 2 6 5 3, with a stray 8 after the first five digits.
    for ch in [3, 1, 4, 1, 5, 8, 9, 2, 6, 5, 3] {
        press(&mut ctl, &mut sink, ch, &mut now);
    }

    assert_eq!(ctl.phase(), Phase::Running);
    assert_eq!(ctl.score().in_sequence, 10);
    assert_eq!(ctl.score().off_sequence, 1);
    assert!(!ctl.score().is_perfect());
    // Only the stray press lit an LED.
    assert_eq!(sink.lit, [8]);

    // Run the 3-minute window out.
    now += Timings::competition().match_runtime;
    ctl.poll(now, &[false; NUM_BUTTONS], &mut sink);
    assert_eq!(ctl.phase(), Phase::Expired);

    // The final push matches the frozen score, and nothing scores after.
    let last = *sink.updates.last().unwrap();
    assert_eq!(last, *ctl.score());
    press(&mut ctl, &mut sink, 5, &mut now);
    assert_eq!(*ctl.score(), last);
}

#[test]
fn perfect_run_ended_by_stop_control() {
    let sequence = ReferenceSequence::from_ascii(PI_DIGITS).unwrap();
    let mut ctl = MatchController::new(sequence, Timings::competition());
    let mut sink = ScoreLog::default();
    let mut now = 0;

    for ch in [3, 1, 4, 1, 5] {
        press(&mut ctl, &mut sink, ch, &mut now);
    }

    ctl.force_stop();
    ctl.poll(now, &[false; NUM_BUTTONS], &mut sink);

    assert_eq!(ctl.phase(), Phase::Expired);
    let final_score = sink.updates.last().unwrap();
    assert_eq!(final_score.in_sequence, 5);
    assert_eq!(final_score.off_sequence, 0);
    assert!(final_score.is_perfect());
}

#[test]
fn start_control_opens_the_window_before_any_press() {
    let sequence = ReferenceSequence::from_ascii("314").unwrap();
    let mut ctl = MatchController::new(sequence, Timings::competition());
    let mut sink = ScoreLog::default();

    ctl.force_start(0);
    ctl.poll(100, &[false; NUM_BUTTONS], &mut sink);
    assert_eq!(ctl.phase(), Phase::Running);

    let mut now = 1_000;
    press(&mut ctl, &mut sink, 3, &mut now);
    assert_eq!(ctl.score().in_sequence, 1);
}

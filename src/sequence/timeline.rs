//! Step-indexed timeline advanced by elapsed time.
use crate::easing::Curve;

/// One timed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Length of the step in seconds. Negative lengths are treated as zero.
    pub duration: f32,
    /// Curve applied to the step's progress fraction.
    pub curve: Curve,
}

impl Step {
    /// Creates a step.
    #[must_use]
    pub const fn new(duration: f32, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// A linear step, for holds where easing is irrelevant.
    #[must_use]
    pub const fn hold(duration: f32) -> Self {
        Self::new(duration, Curve::Linear)
    }
}

/// Notification emitted while a [`TimedSequence`] advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepEvent {
    /// The step at this index started.
    Entered(usize),
    /// Progress within a step after this advance.
    Progress {
        /// Step index.
        step: usize,
        /// Raw progress in `[0, 1]`; exactly `1.0` once the step completes.
        fraction: f32,
        /// `fraction` passed through the step's curve.
        eased: f32,
    },
    /// The step at this index finished.
    Completed(usize),
}

/// Ordered steps played back one after another.
///
/// Time is measured from the start of each step, so a step's timing does
/// not depend on when the sequence was started. Time left over when a step
/// completes flows into the next one within the same advance.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedSequence {
    steps: Vec<Step>,
    index: usize,
    elapsed: f32,
    entered: bool,
}

impl TimedSequence {
    /// Creates a sequence positioned before its first step.
    #[must_use]
    pub const fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            index: 0,
            elapsed: 0.0,
            entered: false,
        }
    }

    /// Index of the active step, or `None` once finished.
    #[must_use]
    pub fn current_step(&self) -> Option<usize> {
        (self.index < self.steps.len()).then_some(self.index)
    }

    /// Seconds spent in the active step.
    #[must_use]
    pub const fn step_elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns `true` once the last step has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.steps.len()
    }

    /// Advances by `dt` seconds, reporting what happened to `visit` in order.
    ///
    /// Entering a step always reports [`StepEvent::Entered`] followed by a
    /// [`StepEvent::Progress`]. A step reached this advance but not finished
    /// reports its progress once; a finished step reports progress `1.0` and
    /// then [`StepEvent::Completed`]. Advancing a finished sequence does
    /// nothing.
    pub fn advance(&mut self, dt: f32, mut visit: impl FnMut(StepEvent)) {
        let mut remaining = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        while let Some(step) = self.steps.get(self.index) {
            let duration = step.duration.max(0.0);
            if !self.entered {
                self.entered = true;
                self.elapsed = 0.0;
                visit(StepEvent::Entered(self.index));
            }

            let room = duration - self.elapsed;
            if remaining < room {
                self.elapsed += remaining;
                let fraction = (self.elapsed / duration).clamp(0.0, 1.0);
                visit(StepEvent::Progress {
                    step: self.index,
                    fraction,
                    eased: step.curve.evaluate(fraction),
                });
                return;
            }

            remaining -= room.max(0.0);
            visit(StepEvent::Progress {
                step: self.index,
                fraction: 1.0,
                eased: step.curve.evaluate(1.0),
            });
            visit(StepEvent::Completed(self.index));
            self.index += 1;
            self.elapsed = 0.0;
            self.entered = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(sequence: &mut TimedSequence, dt: f32) -> Vec<StepEvent> {
        let mut events = Vec::new();
        sequence.advance(dt, |event| events.push(event));
        events
    }

    #[rstest]
    fn entry_is_reported_with_zero_progress() {
        let mut sequence = TimedSequence::new(vec![Step::hold(1.0)]);
        assert_eq!(
            collect(&mut sequence, 0.0),
            vec![
                StepEvent::Entered(0),
                StepEvent::Progress {
                    step: 0,
                    fraction: 0.0,
                    eased: 0.0
                },
            ]
        );
        assert_eq!(sequence.current_step(), Some(0));
    }

    #[rstest]
    fn leftover_time_flows_into_next_step() {
        let mut sequence = TimedSequence::new(vec![Step::hold(1.0), Step::hold(2.0)]);
        let events = collect(&mut sequence, 1.5);
        assert_eq!(
            events,
            vec![
                StepEvent::Entered(0),
                StepEvent::Progress {
                    step: 0,
                    fraction: 1.0,
                    eased: 1.0
                },
                StepEvent::Completed(0),
                StepEvent::Entered(1),
                StepEvent::Progress {
                    step: 1,
                    fraction: 0.25,
                    eased: 0.25
                },
            ]
        );
        assert!((sequence.step_elapsed() - 0.5).abs() < f32::EPSILON);
    }

    #[rstest]
    fn exact_duration_completes_the_step() {
        let mut sequence = TimedSequence::new(vec![Step::new(0.5, Curve::EaseIn)]);
        let events = collect(&mut sequence, 0.5);
        assert!(events.contains(&StepEvent::Completed(0)));
        assert!(sequence.is_finished());
        assert!(collect(&mut sequence, 1.0).is_empty());
    }

    #[rstest]
    fn zero_length_steps_complete_on_entry() {
        let mut sequence = TimedSequence::new(vec![Step::hold(0.0), Step::hold(1.0)]);
        let events = collect(&mut sequence, 0.0);
        assert_eq!(events.first(), Some(&StepEvent::Entered(0)));
        assert!(events.contains(&StepEvent::Completed(0)));
        assert!(events.contains(&StepEvent::Entered(1)));
        assert_eq!(sequence.current_step(), Some(1));
    }

    #[rstest]
    fn each_step_is_entered_once() {
        let mut sequence = TimedSequence::new(vec![Step::hold(1.0), Step::hold(1.0)]);
        let mut entries = Vec::new();
        for _ in 0..12 {
            sequence.advance(0.25, |event| {
                if let StepEvent::Entered(step) = event {
                    entries.push(step);
                }
            });
        }
        assert_eq!(entries, vec![0, 1]);
        assert!(sequence.is_finished());
    }
}

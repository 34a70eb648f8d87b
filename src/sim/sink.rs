use std::collections::BTreeMap;

use crate::model::{BodyId, MotionOutcome, PickedObject};

/// Receiver for per-body resolution results, supplied by the surrounding
/// perception/feedback machinery.
///
/// Both reports are overwrite-per-tick: the last write for a body within a
/// tick wins.
pub trait OutcomeSink {
    fn report_motion(&mut self, body: BodyId, outcome: MotionOutcome);
    fn report_pick(&mut self, body: BodyId, picked: PickedObject);
}

/// Map-backed sink holding the latest outcome per body for one tick.
#[derive(Debug, Default)]
pub struct OutcomeBuffer {
    motions: BTreeMap<BodyId, MotionOutcome>,
    picks: BTreeMap<BodyId, PickedObject>,
}

impl OutcomeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motion_for(&self, body: BodyId) -> Option<&MotionOutcome> {
        self.motions.get(&body)
    }

    pub fn pick_for(&self, body: BodyId) -> Option<&PickedObject> {
        self.picks.get(&body)
    }

    pub fn motions(&self) -> impl Iterator<Item = (BodyId, &MotionOutcome)> {
        self.motions.iter().map(|(id, outcome)| (*id, outcome))
    }

    pub fn picks(&self) -> impl Iterator<Item = (BodyId, &PickedObject)> {
        self.picks.iter().map(|(id, picked)| (*id, picked))
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty() && self.picks.is_empty()
    }

    /// Reset for the next tick.
    pub fn clear(&mut self) {
        self.motions.clear();
        self.picks.clear();
    }
}

impl OutcomeSink for OutcomeBuffer {
    fn report_motion(&mut self, body: BodyId, outcome: MotionOutcome) {
        self.motions.insert(body, outcome);
    }

    fn report_pick(&mut self, body: BodyId, picked: PickedObject) {
        self.picks.insert(body, picked);
    }
}

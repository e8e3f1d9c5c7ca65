// Test doubles: virtual clock, scripted randomness, recording synth.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use crate::sound::{AudioCue, CueKind, SynthBackend};
use crate::spin::IndexPicker;
use crate::timeline::Scheduler;

struct Pending {
    id: u64,
    due: f64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now: f64,
    next_id: u64,
    tasks: Vec<Pending>,
}

/// Virtual-time scheduler; nothing runs until `advance` is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Moves the clock forward, running due tasks in (due, scheduling) order.
    pub fn advance(&self, ms: f64) {
        let target = self.queue.borrow().now + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let position = queue
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= target)
                    .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
                    .map(|(position, _)| position);
                position.map(|position| {
                    let pending = queue.tasks.remove(position);
                    queue.now = pending.due;
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn now_ms(&self) -> f64 {
        self.queue.borrow().now
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay_ms as f64;
        queue.tasks.push(Pending { id, due, task });
        id
    }

    fn cancel(&self, handle: u64) {
        self.queue.borrow_mut().tasks.retain(|pending| pending.id != handle);
    }
}

/// Replays a fixed index sequence (cycling) and always returns `turns`.
pub struct ScriptedPicker {
    indices: Vec<usize>,
    cursor: usize,
    turns: u32,
}

impl ScriptedPicker {
    pub fn new(indices: Vec<usize>, turns: u32) -> Self {
        Self { indices, cursor: 0, turns }
    }
}

impl IndexPicker for ScriptedPicker {
    fn pick_index(&mut self, segments: usize) -> usize {
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % segments
    }

    fn pick_turns(&mut self, _turns: Range<u32>) -> u32 {
        self.turns
    }
}

/// Synth backend that only remembers which cues it was asked to play.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    played: Rc<RefCell<Vec<CueKind>>>,
}

impl RecordingBackend {
    pub fn played(&self) -> Vec<CueKind> {
        self.played.borrow().clone()
    }

    pub fn count(&self, kind: CueKind) -> usize {
        self.played.borrow().iter().filter(|played| **played == kind).count()
    }
}

impl SynthBackend for RecordingBackend {
    fn play(&self, cue: &AudioCue) {
        self.played.borrow_mut().push(cue.kind);
    }
}

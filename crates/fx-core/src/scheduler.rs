//! Single-threaded frame scheduler.
//!
//! Every continuously animated effect is an [`Animation`] registered with one
//! [`Scheduler`]. The host calls [`Scheduler::step`] once per display frame;
//! tasks that report [`Tick::Done`] or whose [`CancelToken`] was cancelled are
//! dropped. Tests drive the scheduler directly, one frame at a time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Done,
}

pub trait Animation {
    fn name(&self) -> &'static str;

    fn frame(&mut self, dt: Duration) -> Tick;

    /// Called once when the task leaves the scheduler, finished or cancelled.
    fn teardown(&mut self) {}
}

/// Shared flag that stops a task at the next frame.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

struct Task {
    token: CancelToken,
    anim: Box<dyn Animation>,
}

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    frames: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, anim: impl Animation + 'static) -> CancelToken {
        self.spawn_boxed(Box::new(anim))
    }

    pub fn spawn_boxed(&mut self, anim: Box<dyn Animation>) -> CancelToken {
        let token = CancelToken::new();
        log::debug!("[scheduler] spawn {}", anim.name());
        self.tasks.push(Task {
            token: token.clone(),
            anim,
        });
        token
    }

    /// Run one frame for every live task. Returns the number still live.
    pub fn step(&mut self, dt: Duration) -> usize {
        self.frames += 1;
        self.tasks.retain_mut(|task| {
            let keep = !task.token.is_cancelled() && task.anim.frame(dt) == Tick::Continue;
            if !keep {
                log::debug!("[scheduler] drop {}", task.anim.name());
                task.anim.teardown();
            }
            keep
        });
        self.tasks.len()
    }

    /// Cancel and tear down every task immediately.
    pub fn cancel_all(&mut self) {
        for mut task in self.tasks.drain(..) {
            task.token.cancel();
            task.anim.teardown();
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|t| t.anim.name())
    }
}

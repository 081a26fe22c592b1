use crate::sink::ProgressSink;
use crate::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ManagerState {
    Running,
    Cancelled,
    Halted,
}

/// Hands out tasks to render threads one at a time and reports progress after
/// each completed task. Shared behind a mutex.
pub struct Manager<'a, I> {
    tasks: I,
    total: usize,
    done: usize,
    state: ManagerState,
    progress: &'a mut dyn ProgressSink,
}

impl<'a, I: Iterator> Manager<'a, I> {
    pub fn new(tasks: I, total: usize, progress: &'a mut dyn ProgressSink) -> Self {
        Manager {
            tasks,
            total,
            done: 0,
            state: ManagerState::Running,
            progress,
        }
    }

    pub fn next(&mut self) -> Option<I::Item> {
        match self.state {
            ManagerState::Running => self.tasks.next(),
            ManagerState::Cancelled | ManagerState::Halted => None,
        }
    }

    pub fn complete(&mut self) {
        self.done += 1;
        self.progress.notify(self.done, self.total);
        if self.state == ManagerState::Running && self.progress.cancelled() {
            self.state = ManagerState::Cancelled;
        }
    }

    /// Stop handing out tasks after a worker failed.
    pub fn halt(&mut self) {
        self.state = ManagerState::Halted;
    }

    pub fn finish(self) -> Result<()> {
        if self.state == ManagerState::Cancelled && self.done < self.total {
            Err(Error::Cancelled {
                rows_done: self.done,
                total_rows: self.total,
            })
        } else {
            Ok(())
        }
    }
}

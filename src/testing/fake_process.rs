use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::{ChildExit, ManagedChild, ProcessLauncher};

#[derive(Debug, Default)]
struct ChildState {
    exit: Option<ChildExit>,
    terminated: bool,
}

/// Test-side handle to a child spawned by [`FakeLauncher`].
#[derive(Debug, Clone)]
pub struct ChildControl {
    state: Rc<RefCell<ChildState>>,
}

impl ChildControl {
    /// Simulate the child exiting on its own.
    pub fn exit_with(&self, code: i32) {
        self.state.borrow_mut().exit = Some(ChildExit { code: Some(code) });
    }

    pub fn was_terminated(&self) -> bool {
        self.state.borrow().terminated
    }
}

pub struct FakeChild {
    pid: u32,
    state: Rc<RefCell<ChildState>>,
}

impl ManagedChild for FakeChild {
    fn id(&self) -> u32 {
        self.pid
    }

    fn try_exit(&mut self) -> Result<Option<ChildExit>, AppError> {
        Ok(self.state.borrow().exit)
    }

    fn terminate(&mut self) -> Result<(), AppError> {
        let mut state = self.state.borrow_mut();
        state.terminated = true;
        state.exit.get_or_insert(ChildExit { code: None });
        Ok(())
    }
}

#[derive(Default)]
struct LauncherState {
    children: Vec<ChildControl>,
    failures: VecDeque<bool>,
}

/// Launcher handing out fake children; spawn failures can be queued.
/// Clones share state, so a test can keep a handle while the launcher is
/// owned by a supervisor.
#[derive(Clone, Default)]
pub struct FakeLauncher {
    state: Rc<RefCell<LauncherState>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `n` spawn attempts fail.
    pub fn fail_next(&self, n: usize) {
        self.state.borrow_mut().failures.extend(std::iter::repeat_n(true, n));
    }

    pub fn spawn_count(&self) -> usize {
        self.state.borrow().children.len()
    }

    pub fn child(&self, index: usize) -> ChildControl {
        self.state.borrow().children[index].clone()
    }

    pub fn latest(&self) -> ChildControl {
        self.state.borrow().children.last().cloned().unwrap()
    }
}

impl ProcessLauncher for FakeLauncher {
    type Child = FakeChild;

    fn spawn(&self) -> Result<FakeChild, AppError> {
        let mut launcher = self.state.borrow_mut();
        if launcher.failures.pop_front().unwrap_or(false) {
            return Err(AppError::process("fake spawn refused"));
        }
        let state = Rc::new(RefCell::new(ChildState::default()));
        launcher.children.push(ChildControl { state: Rc::clone(&state) });
        Ok(FakeChild { pid: 1000 + launcher.children.len() as u32, state })
    }
}

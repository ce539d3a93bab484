use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use super::dom::now_seconds;

const FRAME_MS: u32 = 16;

/// A cancellable per-frame callback loop.
///
/// `start` is a no-op while a loop is already running; the running
/// callback reads shared state, so a new target simply takes over the
/// loop that is already going. `stop` ends the current loop at its next
/// tick.
#[derive(Clone, Default)]
pub struct FrameLoop {
    generation: Rc<Cell<u64>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Runs `tick(dt)` every frame until it returns `false`.
    pub fn start<F>(&self, mut tick: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        if self.running.get() {
            return;
        }
        self.running.set(true);

        let generation = self.generation.get();
        let current = self.generation.clone();
        let running = self.running.clone();
        spawn_local(async move {
            let mut last = now_seconds();
            loop {
                TimeoutFuture::new(FRAME_MS).await;
                if current.get() != generation {
                    return;
                }
                let now = now_seconds();
                let keep_going = tick(now - last);
                last = now;
                if !keep_going {
                    running.set(false);
                    return;
                }
            }
        });
    }

    pub fn stop(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.running.set(false);
    }
}

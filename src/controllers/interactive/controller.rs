use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_pass::cancellation::CancelToken;
use crate::core::actions::render_pass::render_pass_parallel_rayon::{
    RenderPassError, RenderedFrame, render_pass_parallel_rayon_cancelable,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation.load(Ordering::Acquire)
    }
}

/// Renders requests on a worker thread, newest request wins.
///
/// Submitting a request bumps the generation, which cancels whatever pass is
/// in flight. Results of superseded generations are dropped without an event.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `request` and returns its generation.
    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        log::trace!("submitted render request {}", generation);

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(&request, &cancel_token);
            let render_duration = start.elapsed();

            match result {
                Ok(frame) => {
                    if !shared.is_current(job_generation) {
                        log::trace!("dropping stale frame {}", job_generation);
                        continue;
                    }

                    log::debug!(
                        "frame {} ({}x{}) rendered in {:?}: {} evaluated, {} mirrored",
                        job_generation,
                        request.viewport.width(),
                        request.viewport.height(),
                        render_duration,
                        frame.stats.evaluated,
                        frame.stats.mirrored
                    );

                    shared.presenter_port.present(RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        view: request.view,
                        pixel_buffer: frame.pixel_buffer,
                        stats: frame.stats,
                        render_duration,
                    }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
                Err(RenderPassError::Cancelled(_)) => {
                    log::trace!("render {} cancelled", job_generation);
                    continue;
                }
                Err(RenderPassError::Surface(err)) => {
                    if !shared.is_current(job_generation) {
                        continue;
                    }

                    log::error!("render {} failed: {}", job_generation, err);

                    shared
                        .presenter_port
                        .present(RenderEvent::Error(RenderError {
                            generation: job_generation,
                            message: err.to_string(),
                        }));

                    shared
                        .last_completed_generation
                        .store(job_generation, Ordering::Release);
                }
            }
        }
    }

    fn render_request<C: CancelToken>(
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<RenderedFrame, RenderPassError> {
        render_pass_parallel_rayon_cancelable(
            request.viewport,
            &request.algorithm(),
            &request.colour_map(),
            cancel,
        )
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

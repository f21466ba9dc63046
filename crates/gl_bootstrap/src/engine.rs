//! Frame loop

use crate::application::AppContext;
use crate::core::config::RenderConfig;
use crate::input::{dispatch, EventHandler};
use crate::render::window::Surface;

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Clearing, presenting and draining events every iteration
    Running,
    /// An exit trigger was observed; no more iterations run
    Terminated,
}

/// Owns the surface and the application context for the lifetime of the loop
///
/// Dropping the loop destroys the window and releases the windowing
/// subsystem.
pub struct FrameLoop<S: Surface> {
    surface: S,
    context: AppContext<S::Graphics>,
    state: LoopState,
    frame_count: u64,
}

impl<S: Surface> FrameLoop<S> {
    /// Set up the clear color and the initial viewport
    pub fn new(surface: S, graphics: S::Graphics, render: &RenderConfig) -> Self {
        let mut context = AppContext::new(graphics, render);

        // The resize handler is called once by hand to establish the viewport
        let (width, height) = surface.framebuffer_size();
        context.on_framebuffer_resize(width, height);

        Self {
            surface,
            context,
            state: LoopState::Running,
            frame_count: 0,
        }
    }

    /// Run one iteration
    ///
    /// The termination flag is checked first; if it is set the loop moves to
    /// [`LoopState::Terminated`] without drawing. Otherwise the color buffer is
    /// cleared, the buffers are swapped and all pending events are dispatched.
    pub fn step(&mut self) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        if self.surface.should_close() && !self.context.should_terminate() {
            self.context.on_close_requested();
        }
        if self.context.should_terminate() {
            self.surface.set_should_close(true);
            self.state = LoopState::Terminated;
            log::info!("Frame loop terminated after {} frames", self.frame_count);
            return self.state;
        }

        self.context.draw();
        self.surface.swap_buffers();
        for event in self.surface.poll_events() {
            dispatch(&mut self.context, event);
        }

        self.frame_count += 1;
        self.state
    }

    /// Iterate until terminated, returning the number of frames presented
    pub fn run(&mut self) -> u64 {
        log::info!("Starting frame loop...");
        while self.step() == LoopState::Running {}
        self.frame_count
    }

    /// Current state
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames presented so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The application context
    pub fn context(&self) -> &AppContext<S::Graphics> {
        &self.context
    }

    /// The surface
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Action, InputEvent, KeyCode, Modifiers};
    use crate::render::api::Viewport;
    use crate::testing::{key_press, MockGraphics, MockSurface};

    fn frame_loop(script: Vec<Vec<InputEvent>>) -> FrameLoop<MockSurface> {
        let surface = MockSurface::new(800, 600).with_script(script);
        FrameLoop::new(surface, MockGraphics::version(4, 5), &RenderConfig::default())
    }

    #[test]
    fn test_initial_viewport_covers_framebuffer() {
        let lp = frame_loop(vec![]);
        assert_eq!(lp.context().viewport(), Viewport::full(800, 600));
        assert_eq!(lp.context().graphics().viewport_calls, 1);
        assert_eq!(lp.state(), LoopState::Running);
    }

    #[test]
    fn test_escape_terminates_on_next_iteration() {
        let mut lp = frame_loop(vec![vec![], vec![key_press(KeyCode::Escape)], vec![]]);

        let frames = lp.run();
        assert_eq!(frames, 2);
        assert_eq!(lp.state(), LoopState::Terminated);
        assert_eq!(lp.context().graphics().clears, 2);
        assert_eq!(lp.surface().swaps, 2);
        assert_eq!(lp.surface().polls, 2);
        assert!(lp.surface().should_close);
    }

    #[test]
    fn test_window_close_flag_terminates() {
        let mut lp = frame_loop(vec![vec![]]);
        assert_eq!(lp.step(), LoopState::Running);

        lp.surface.should_close = true;
        assert_eq!(lp.step(), LoopState::Terminated);
        assert_eq!(lp.frame_count(), 1);
    }

    #[test]
    fn test_close_request_event_terminates() {
        let mut lp = frame_loop(vec![vec![InputEvent::CloseRequested]]);
        assert_eq!(lp.run(), 1);
    }

    #[test]
    fn test_resize_events_update_viewport() {
        let mut lp = frame_loop(vec![
            vec![InputEvent::FramebufferResize { width: 1024, height: 768 }],
            vec![key_press(KeyCode::Escape)],
        ]);
        lp.run();
        assert_eq!(lp.context().viewport(), Viewport::full(1024, 768));
    }

    #[test]
    fn test_events_drained_in_one_iteration() {
        let mut lp = frame_loop(vec![vec![
            InputEvent::CursorPosition { x: 1.0, y: 2.0 },
            InputEvent::Scroll { x_offset: 0.0, y_offset: -1.0 },
            InputEvent::Key {
                key: KeyCode::F4,
                scancode: 70,
                action: Action::Press,
                modifiers: Modifiers::ALT,
            },
        ]]);
        assert_eq!(lp.run(), 1);
    }

    #[test]
    fn test_terminated_loop_does_not_draw() {
        let mut lp = frame_loop(vec![vec![key_press(KeyCode::Escape)]]);
        lp.run();
        let clears = lp.context().graphics().clears;

        assert_eq!(lp.step(), LoopState::Terminated);
        assert_eq!(lp.context().graphics().clears, clears);
    }
}

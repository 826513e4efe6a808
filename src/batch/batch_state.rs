use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::controller::BatchHandle;
use super::types::BatchProgress;

/// Where the UI believes the worker's batch run is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPhase {
    #[default]
    Idle,
    /// Request sent; `progress` is `None` until `Started` arrives
    Running,
    /// Cancel requested; waiting for the terminal event
    Cancelling,
}

fn create_prompt_textarea(default_count: u32) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![default_count.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

/// UI state for batch copy: the count prompt and the progress of the
/// current run as reported by the worker
pub struct BatchState {
    prompt_visible: bool,
    prompt: TextArea<'static>,
    default_count: u32,
    phase: BatchPhase,
    progress: Option<BatchProgress>,
    handle: Option<BatchHandle>,
    /// Cancel pressed before the worker began the run; sent on `Started`
    cancel_pending: bool,
}

impl BatchState {
    pub fn new(default_count: u32) -> Self {
        Self {
            prompt_visible: false,
            prompt: create_prompt_textarea(default_count),
            default_count,
            phase: BatchPhase::Idle,
            progress: None,
            handle: None,
            cancel_pending: false,
        }
    }

    /// Handle used to cancel the worker's run from the UI thread
    pub fn set_handle(&mut self, handle: BatchHandle) {
        self.handle = Some(handle);
    }

    /// Open the count prompt, pre-filled with the configured default
    pub fn open_prompt(&mut self) {
        self.prompt = create_prompt_textarea(self.default_count);
        self.prompt_visible = true;
    }

    pub fn close_prompt(&mut self) {
        self.prompt_visible = false;
    }

    pub fn is_prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn prompt_text(&self) -> &str {
        self.prompt.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn prompt_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.prompt
    }

    pub fn prompt(&self) -> &TextArea<'static> {
        &self.prompt
    }

    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    /// True from the moment a request is sent until its terminal event
    pub fn is_active(&self) -> bool {
        self.phase != BatchPhase::Idle
    }

    pub fn progress(&self) -> Option<BatchProgress> {
        self.progress
    }

    /// A request was handed to the worker
    pub fn mark_requested(&mut self) {
        self.phase = BatchPhase::Running;
        self.progress = None;
        self.prompt_visible = false;
        self.cancel_pending = false;
    }

    /// Record a snapshot; keeps `Cancelling` so the label does not flicker
    pub fn update_progress(&mut self, progress: BatchProgress) {
        if self.phase == BatchPhase::Idle {
            self.phase = BatchPhase::Running;
        }
        self.progress = Some(progress);
    }

    /// Ask the running batch to stop. Returns false when nothing was running.
    ///
    /// The worker may not have begun the run yet; the cancel is then held
    /// until `Started` arrives and sent from [`BatchState::send_pending_cancel`].
    pub fn request_cancel(&mut self) -> bool {
        if self.phase != BatchPhase::Running {
            return false;
        }
        let Some(handle) = &self.handle else {
            return false;
        };
        if !handle.cancel() {
            log::debug!("Batch not started yet, holding cancel until it starts");
            self.cancel_pending = true;
        }
        self.phase = BatchPhase::Cancelling;
        true
    }

    pub fn is_cancel_pending(&self) -> bool {
        self.cancel_pending
    }

    /// Deliver a held cancel once the run has begun
    pub fn send_pending_cancel(&mut self) {
        if !std::mem::take(&mut self.cancel_pending) {
            return;
        }
        let sent = self.handle.as_ref().is_some_and(BatchHandle::cancel);
        if !sent {
            log::debug!("Held cancel found no active run");
        }
    }

    pub fn reset(&mut self) {
        self.phase = BatchPhase::Idle;
        self.progress = None;
        self.cancel_pending = false;
    }

    #[cfg(test)]
    pub fn set_phase(&mut self, phase: BatchPhase) {
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_prefilled_with_default_count() {
        let mut state = BatchState::new(10);
        state.open_prompt();

        assert!(state.is_prompt_visible());
        assert_eq!(state.prompt_text(), "10");
    }

    #[test]
    fn test_reopening_prompt_discards_previous_input() {
        let mut state = BatchState::new(7);
        state.open_prompt();
        state.prompt_mut().insert_str("99");
        state.close_prompt();

        state.open_prompt();
        assert_eq!(state.prompt_text(), "7");
    }

    #[test]
    fn test_mark_requested_closes_prompt() {
        let mut state = BatchState::new(10);
        state.open_prompt();
        state.mark_requested();

        assert!(!state.is_prompt_visible());
        assert_eq!(state.phase(), BatchPhase::Running);
        assert!(state.progress().is_none());
    }

    #[test]
    fn test_cancel_without_handle_stays_running() {
        let mut state = BatchState::new(10);
        state.mark_requested();

        assert!(!state.request_cancel());
        assert_eq!(state.phase(), BatchPhase::Running);
    }

    #[test]
    fn test_cancel_before_run_begins_is_held() {
        let mut state = BatchState::new(10);
        state.set_handle(BatchHandle::default());
        state.mark_requested();

        assert!(state.request_cancel());
        assert_eq!(state.phase(), BatchPhase::Cancelling);
        assert!(state.is_cancel_pending());

        state.send_pending_cancel();
        assert!(!state.is_cancel_pending());
    }

    #[test]
    fn test_reset_drops_held_cancel() {
        let mut state = BatchState::new(10);
        state.set_handle(BatchHandle::default());
        state.mark_requested();
        state.request_cancel();

        state.reset();

        assert!(!state.is_cancel_pending());
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut state = BatchState::new(10);
        state.set_handle(BatchHandle::default());

        assert!(!state.request_cancel());
        assert_eq!(state.phase(), BatchPhase::Idle);
    }

    #[test]
    fn test_progress_keeps_cancelling_phase() {
        let mut state = BatchState::new(10);
        state.mark_requested();
        state.phase = BatchPhase::Cancelling;

        state.update_progress(BatchProgress::new(2, 5));

        assert_eq!(state.phase(), BatchPhase::Cancelling);
        assert_eq!(state.progress(), Some(BatchProgress::new(2, 5)));
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut state = BatchState::new(10);
        state.update_progress(BatchProgress::new(1, 2));
        state.reset();

        assert!(!state.is_active());
        assert!(state.progress().is_none());
    }
}

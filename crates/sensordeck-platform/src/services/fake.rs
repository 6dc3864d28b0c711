//! Recording PlatformServices fake for tests.
//!
//! Tracks live object counts, records every call, and can be told to fail
//! at a named step so setup unwind paths can be exercised. State lives
//! behind an `Arc<Mutex>` so tests keep an inspection handle after the
//! backend is boxed into a bridge.

use std::sync::{Arc, Mutex};

use sensordeck_common::PlatformError;

use super::{
    BufferHandle, ContextHandle, DialogHandle, DirtyRect, PlatformServices, Result, ToastPosition,
    WindowHandle, WindowUsage,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateContext,
    CreateWindow,
    CreateWindowGroup(String),
    SetWindowUsage(WindowUsage),
    SetBufferSize(u32, u32),
    CreateWindowBuffers(u32),
    FillBuffer,
    PostWindow(DirtyRect),
    DestroyWindow,
    DestroyContext,
    CreateAlert,
    CreateToast,
    SetAlertMessage(String),
    SetToastMessage(String),
    SetToastPosition(ToastPosition),
    SetGroupId(String),
    SetCancelRequired(bool),
    AddButton(String),
    ShowDialog(DialogHandle),
    UpdateDialog(DialogHandle),
    DestroyDialog(DialogHandle),
}

#[derive(Debug, Default)]
pub(crate) struct FakeState {
    next_handle: u64,
    pub live_contexts: usize,
    pub live_windows: usize,
    pub live_dialogs: usize,
    pub posted_frames: usize,
    pub calls: Vec<Call>,
    pub fail_on: Option<&'static str>,
}

impl FakeState {
    fn issue(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn step(&mut self, name: &'static str) -> Result<()> {
        if self.fail_on == Some(name) {
            return Err(PlatformError::ScreenError(format!("injected failure at {name}")));
        }
        Ok(())
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakeState>>,
}

impl FakePlatform {
    pub fn new() -> (Self, Arc<Mutex<FakeState>>) {
        let state = Arc::new(Mutex::new(FakeState::default()));
        (
            Self {
                state: Arc::clone(&state),
            },
            state,
        )
    }

    pub fn failing_at(step: &'static str) -> (Self, Arc<Mutex<FakeState>>) {
        let (platform, state) = Self::new();
        state.lock().unwrap().fail_on = Some(step);
        (platform, state)
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }
}

impl PlatformServices for FakePlatform {
    fn create_context(&mut self) -> Result<ContextHandle> {
        let mut state = self.state();
        state.step("create_context")?;
        state.calls.push(Call::CreateContext);
        state.live_contexts += 1;
        let handle = state.issue();
        Ok(ContextHandle(handle))
    }

    fn create_window(&mut self, _context: ContextHandle) -> Result<WindowHandle> {
        let mut state = self.state();
        state.step("create_window")?;
        state.calls.push(Call::CreateWindow);
        state.live_windows += 1;
        let handle = state.issue();
        Ok(WindowHandle(handle))
    }

    fn create_window_group(&mut self, _window: WindowHandle, group: &str) -> Result<()> {
        let mut state = self.state();
        state.step("create_window_group")?;
        state.calls.push(Call::CreateWindowGroup(group.to_owned()));
        Ok(())
    }

    fn set_window_usage(&mut self, _window: WindowHandle, usage: WindowUsage) -> Result<()> {
        let mut state = self.state();
        state.step("set_window_usage")?;
        state.calls.push(Call::SetWindowUsage(usage));
        Ok(())
    }

    fn set_buffer_size(&mut self, _window: WindowHandle, width: u32, height: u32) -> Result<()> {
        let mut state = self.state();
        state.step("set_buffer_size")?;
        state.calls.push(Call::SetBufferSize(width, height));
        Ok(())
    }

    fn create_window_buffers(&mut self, _window: WindowHandle, count: u32) -> Result<BufferHandle> {
        let mut state = self.state();
        state.step("create_window_buffers")?;
        state.calls.push(Call::CreateWindowBuffers(count));
        let handle = state.issue();
        Ok(BufferHandle(handle))
    }

    fn fill_buffer(&mut self, _context: ContextHandle, _buffer: BufferHandle) -> Result<()> {
        let mut state = self.state();
        state.step("fill_buffer")?;
        state.calls.push(Call::FillBuffer);
        Ok(())
    }

    fn post_window(
        &mut self,
        _window: WindowHandle,
        _buffer: BufferHandle,
        dirty: DirtyRect,
    ) -> Result<()> {
        let mut state = self.state();
        state.step("post_window")?;
        state.calls.push(Call::PostWindow(dirty));
        state.posted_frames += 1;
        Ok(())
    }

    fn destroy_window(&mut self, _window: WindowHandle) {
        let mut state = self.state();
        state.calls.push(Call::DestroyWindow);
        state.live_windows = state.live_windows.saturating_sub(1);
    }

    fn destroy_context(&mut self, _context: ContextHandle) {
        let mut state = self.state();
        state.calls.push(Call::DestroyContext);
        state.live_contexts = state.live_contexts.saturating_sub(1);
    }

    fn create_alert(&mut self) -> Result<DialogHandle> {
        let mut state = self.state();
        state.step("create_alert")?;
        state.calls.push(Call::CreateAlert);
        state.live_dialogs += 1;
        let handle = state.issue();
        Ok(DialogHandle(handle))
    }

    fn create_toast(&mut self) -> Result<DialogHandle> {
        let mut state = self.state();
        state.step("create_toast")?;
        state.calls.push(Call::CreateToast);
        state.live_dialogs += 1;
        let handle = state.issue();
        Ok(DialogHandle(handle))
    }

    fn set_alert_message(&mut self, _dialog: DialogHandle, message: &str) -> Result<()> {
        let mut state = self.state();
        state.step("set_alert_message")?;
        state.calls.push(Call::SetAlertMessage(message.to_owned()));
        Ok(())
    }

    fn set_toast_message(&mut self, _dialog: DialogHandle, message: &str) -> Result<()> {
        let mut state = self.state();
        state.step("set_toast_message")?;
        state.calls.push(Call::SetToastMessage(message.to_owned()));
        Ok(())
    }

    fn set_toast_position(&mut self, _dialog: DialogHandle, position: ToastPosition) -> Result<()> {
        let mut state = self.state();
        state.step("set_toast_position")?;
        state.calls.push(Call::SetToastPosition(position));
        Ok(())
    }

    fn set_group_id(&mut self, _dialog: DialogHandle, group: &str) -> Result<()> {
        let mut state = self.state();
        state.step("set_group_id")?;
        state.calls.push(Call::SetGroupId(group.to_owned()));
        Ok(())
    }

    fn set_cancel_required(&mut self, _dialog: DialogHandle, required: bool) -> Result<()> {
        let mut state = self.state();
        state.step("set_cancel_required")?;
        state.calls.push(Call::SetCancelRequired(required));
        Ok(())
    }

    fn add_button(&mut self, _dialog: DialogHandle, label: &str) -> Result<()> {
        let mut state = self.state();
        state.step("add_button")?;
        state.calls.push(Call::AddButton(label.to_owned()));
        Ok(())
    }

    fn show_dialog(&mut self, dialog: DialogHandle) -> Result<()> {
        let mut state = self.state();
        state.step("show_dialog")?;
        state.calls.push(Call::ShowDialog(dialog));
        Ok(())
    }

    fn update_dialog(&mut self, dialog: DialogHandle) -> Result<()> {
        let mut state = self.state();
        state.step("update_dialog")?;
        state.calls.push(Call::UpdateDialog(dialog));
        Ok(())
    }

    fn destroy_dialog(&mut self, dialog: DialogHandle) {
        let mut state = self.state();
        state.calls.push(Call::DestroyDialog(dialog));
        state.live_dialogs = state.live_dialogs.saturating_sub(1);
    }
}

//! No-op PlatformServices implementation.
//!
//! Used as a fallback on hosts without native windowing/dialog bindings.
//! Handles are issued sequentially and every call succeeds; activity is
//! visible at debug log level.

use tracing::debug;

use super::{
    BufferHandle, ContextHandle, DialogHandle, DirtyRect, PlatformServices, Result, ToastPosition,
    WindowHandle, WindowUsage,
};

pub struct NoopPlatform {
    next_handle: u64,
}

impl NoopPlatform {
    pub fn new() -> Self {
        Self { next_handle: 1 }
    }

    fn issue(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl Default for NoopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformServices for NoopPlatform {
    fn create_context(&mut self) -> Result<ContextHandle> {
        let handle = ContextHandle(self.issue());
        debug!("noop: created screen context {handle:?}");
        Ok(handle)
    }

    fn create_window(&mut self, context: ContextHandle) -> Result<WindowHandle> {
        let handle = WindowHandle(self.issue());
        debug!("noop: created window {handle:?} in {context:?}");
        Ok(handle)
    }

    fn create_window_group(&mut self, window: WindowHandle, group: &str) -> Result<()> {
        debug!("noop: window group '{group}' on {window:?}");
        Ok(())
    }

    fn set_window_usage(&mut self, window: WindowHandle, usage: WindowUsage) -> Result<()> {
        debug!("noop: usage {usage:?} on {window:?}");
        Ok(())
    }

    fn set_buffer_size(&mut self, window: WindowHandle, width: u32, height: u32) -> Result<()> {
        debug!("noop: buffer size {width}x{height} on {window:?}");
        Ok(())
    }

    fn create_window_buffers(&mut self, window: WindowHandle, count: u32) -> Result<BufferHandle> {
        let handle = BufferHandle(self.issue());
        debug!("noop: {count} buffer(s) for {window:?}, render buffer {handle:?}");
        Ok(handle)
    }

    fn fill_buffer(&mut self, context: ContextHandle, buffer: BufferHandle) -> Result<()> {
        debug!("noop: filled {buffer:?} via {context:?}");
        Ok(())
    }

    fn post_window(
        &mut self,
        window: WindowHandle,
        buffer: BufferHandle,
        dirty: DirtyRect,
    ) -> Result<()> {
        debug!("noop: posted {buffer:?} to {window:?} ({dirty:?})");
        Ok(())
    }

    fn destroy_window(&mut self, window: WindowHandle) {
        debug!("noop: destroyed {window:?}");
    }

    fn destroy_context(&mut self, context: ContextHandle) {
        debug!("noop: destroyed {context:?}");
    }

    fn create_alert(&mut self) -> Result<DialogHandle> {
        let handle = DialogHandle(self.issue());
        debug!("noop: created alert dialog {handle:?}");
        Ok(handle)
    }

    fn create_toast(&mut self) -> Result<DialogHandle> {
        let handle = DialogHandle(self.issue());
        debug!("noop: created toast dialog {handle:?}");
        Ok(handle)
    }

    fn set_alert_message(&mut self, dialog: DialogHandle, message: &str) -> Result<()> {
        debug!("noop: alert message on {dialog:?}: {message}");
        Ok(())
    }

    fn set_toast_message(&mut self, dialog: DialogHandle, message: &str) -> Result<()> {
        debug!("noop: toast message on {dialog:?}: {message}");
        Ok(())
    }

    fn set_toast_position(&mut self, dialog: DialogHandle, position: ToastPosition) -> Result<()> {
        debug!("noop: toast position {position:?} on {dialog:?}");
        Ok(())
    }

    fn set_group_id(&mut self, dialog: DialogHandle, group: &str) -> Result<()> {
        debug!("noop: group '{group}' on {dialog:?}");
        Ok(())
    }

    fn set_cancel_required(&mut self, dialog: DialogHandle, required: bool) -> Result<()> {
        debug!("noop: cancel required {required} on {dialog:?}");
        Ok(())
    }

    fn add_button(&mut self, dialog: DialogHandle, label: &str) -> Result<()> {
        debug!("noop: button '{label}' on {dialog:?}");
        Ok(())
    }

    fn show_dialog(&mut self, dialog: DialogHandle) -> Result<()> {
        debug!("noop: showed {dialog:?}");
        Ok(())
    }

    fn update_dialog(&mut self, dialog: DialogHandle) -> Result<()> {
        debug!("noop: updated {dialog:?}");
        Ok(())
    }

    fn destroy_dialog(&mut self, dialog: DialogHandle) {
        debug!("noop: destroyed {dialog:?}");
    }
}

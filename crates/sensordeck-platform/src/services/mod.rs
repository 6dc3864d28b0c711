use sensordeck_common::PlatformError;
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub(crate) mod fake;
pub mod noop;

pub type Result<T> = std::result::Result<T, PlatformError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogHandle(pub u64);

/// How the window's buffers will be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowUsage {
    /// CPU-rendered buffers, no GPU pipeline.
    Native,
}

/// Placement of a toast dialog on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastPosition {
    TopCenter,
    MiddleCenter,
    BottomCenter,
}

/// Region of a posted buffer the compositor should refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    /// Rect covering a full buffer of the given size.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Platform-agnostic seam over the OS windowing and dialog services.
///
/// Handles are opaque; the caller's contract is create-before-use and
/// exactly one destroy per create. Destroy calls are infallible and safe on
/// handles the backend no longer knows about.
pub trait PlatformServices: Send {
    // Screen primitives.
    fn create_context(&mut self) -> Result<ContextHandle>;
    fn create_window(&mut self, context: ContextHandle) -> Result<WindowHandle>;
    fn create_window_group(&mut self, window: WindowHandle, group: &str) -> Result<()>;
    fn set_window_usage(&mut self, window: WindowHandle, usage: WindowUsage) -> Result<()>;
    fn set_buffer_size(&mut self, window: WindowHandle, width: u32, height: u32) -> Result<()>;
    fn create_window_buffers(&mut self, window: WindowHandle, count: u32) -> Result<BufferHandle>;
    fn fill_buffer(&mut self, context: ContextHandle, buffer: BufferHandle) -> Result<()>;
    fn post_window(&mut self, window: WindowHandle, buffer: BufferHandle, dirty: DirtyRect)
        -> Result<()>;
    fn destroy_window(&mut self, window: WindowHandle);
    fn destroy_context(&mut self, context: ContextHandle);

    // Dialog primitives.
    fn create_alert(&mut self) -> Result<DialogHandle>;
    fn create_toast(&mut self) -> Result<DialogHandle>;
    fn set_alert_message(&mut self, dialog: DialogHandle, message: &str) -> Result<()>;
    fn set_toast_message(&mut self, dialog: DialogHandle, message: &str) -> Result<()>;
    fn set_toast_position(&mut self, dialog: DialogHandle, position: ToastPosition) -> Result<()>;
    fn set_group_id(&mut self, dialog: DialogHandle, group: &str) -> Result<()>;
    fn set_cancel_required(&mut self, dialog: DialogHandle, required: bool) -> Result<()>;
    fn add_button(&mut self, dialog: DialogHandle, label: &str) -> Result<()>;
    fn show_dialog(&mut self, dialog: DialogHandle) -> Result<()>;
    fn update_dialog(&mut self, dialog: DialogHandle) -> Result<()>;
    fn destroy_dialog(&mut self, dialog: DialogHandle);
}

/// Create the platform-appropriate service backend.
///
/// The native screen/dialog bindings have no portable counterpart, so every
/// host currently gets the no-op backend; an FFI-backed implementation
/// binds here.
pub fn create_platform() -> Box<dyn PlatformServices> {
    Box::new(noop::NoopPlatform::new())
}

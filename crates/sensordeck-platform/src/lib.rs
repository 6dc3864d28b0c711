//! Adaptation layer between the application and the OS windowing and
//! dialog-notification services.
//!
//! The [`UiBridge`] owns a fullscreen rendering surface plus two singleton
//! status dialogs (a cancellable geolocation alert and an accelerometer
//! toast), all tagged with the process's window group so the compositor
//! keeps them together. The actual OS calls go through the
//! [`PlatformServices`] seam; hosts without native bindings get a no-op
//! backend.

pub mod bridge;
pub mod config;
pub mod dialog;
pub mod screen;
pub mod services;

pub use bridge::UiBridge;
pub use config::ScreenConfig;
pub use screen::ScreenSurface;
pub use services::{
    create_platform, ContextHandle, DialogHandle, PlatformServices, ToastPosition, WindowHandle,
    WindowUsage,
};

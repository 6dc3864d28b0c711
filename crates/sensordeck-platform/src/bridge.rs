use sensordeck_common::{PlatformError, SensordeckError, WindowGroupId};
use tracing::{info, warn};

use crate::config::ScreenConfig;
use crate::dialog;
use crate::screen::ScreenSurface;
use crate::services::{DialogHandle, PlatformServices};

/// Explicit context for the platform UI: the fullscreen surface plus the
/// two singleton status dialogs, all tagged with one window group.
///
/// The bridge owns its backend; dropping it releases every handle that is
/// still live. Operations are synchronous and the bridge is not meant to be
/// shared across threads.
pub struct UiBridge {
    services: Box<dyn PlatformServices>,
    group: WindowGroupId,
    screen: Option<ScreenSurface>,
    geolocation: Option<DialogHandle>,
    accelerometer: Option<DialogHandle>,
}

impl UiBridge {
    /// Creates a bridge over the given backend, deriving the window group
    /// from the current process id.
    pub fn new(services: Box<dyn PlatformServices>) -> Self {
        Self {
            services,
            group: WindowGroupId::from_process(),
            screen: None,
            geolocation: None,
            accelerometer: None,
        }
    }

    /// The window-group tag shared by the window and both dialogs.
    pub fn window_group(&self) -> &WindowGroupId {
        &self.group
    }

    /// Builds the fullscreen surface, sizing the buffer from the `WIDTH`
    /// and `HEIGHT` environment variables. Missing or invalid variables
    /// fail before any platform call is made.
    pub fn setup_screen(&mut self) -> Result<(), SensordeckError> {
        let config = ScreenConfig::from_env()?;
        self.setup_screen_with(&config)?;
        Ok(())
    }

    /// Builds the fullscreen surface from an explicit configuration. An
    /// existing surface is torn down first.
    pub fn setup_screen_with(&mut self, config: &ScreenConfig) -> Result<(), PlatformError> {
        self.cleanup_screen();
        let surface = ScreenSurface::create(self.services.as_mut(), config, &self.group)
            .inspect_err(|e| warn!("screen setup failed: {e}"))?;
        self.screen = Some(surface);
        Ok(())
    }

    /// Destroys the window and context if present. Safe to call repeatedly.
    pub fn cleanup_screen(&mut self) {
        if let Some(surface) = self.screen.take() {
            surface.release(self.services.as_mut());
        }
    }

    pub fn has_screen(&self) -> bool {
        self.screen.is_some()
    }

    /// Shows the cancellable geolocation alert if it is not already up.
    /// A second call while the dialog exists is a no-op.
    pub fn create_geolocation_dialog(&mut self) {
        if self.geolocation.is_some() {
            return;
        }
        match dialog::spawn_alert(self.services.as_mut(), &self.group) {
            Ok(handle) => self.geolocation = Some(handle),
            Err(e) => warn!("geolocation dialog creation failed: {e}"),
        }
    }

    /// Destroys the geolocation alert if present; idempotent.
    pub fn destroy_geolocation_dialog(&mut self) {
        if let Some(handle) = self.geolocation.take() {
            self.services.destroy_dialog(handle);
        }
    }

    /// Updates the geolocation alert's message and forces a redraw. The
    /// message is also emitted to the diagnostic stream. Skipped with a
    /// warning when the dialog has not been created.
    pub fn show_geolocation_dialog_message(&mut self, msg: &str) {
        let Some(handle) = self.geolocation else {
            warn!("geolocation dialog not created, dropping message: {msg}");
            return;
        };
        if let Err(e) = self
            .services
            .set_alert_message(handle, msg)
            .and_then(|()| self.services.update_dialog(handle))
        {
            warn!("geolocation dialog update failed: {e}");
        }
        info!("{msg}");
    }

    /// Shows the accelerometer toast if it is not already up.
    pub fn create_accelerometer_dialog(&mut self) {
        if self.accelerometer.is_some() {
            return;
        }
        match dialog::spawn_toast(self.services.as_mut(), &self.group) {
            Ok(handle) => self.accelerometer = Some(handle),
            Err(e) => warn!("accelerometer dialog creation failed: {e}"),
        }
    }

    /// Destroys the accelerometer toast if present; idempotent.
    pub fn destroy_accelerometer_dialog(&mut self) {
        if let Some(handle) = self.accelerometer.take() {
            self.services.destroy_dialog(handle);
        }
    }

    /// Updates the accelerometer toast's message and forces a redraw, with
    /// the same diagnostic emission as the geolocation variant.
    pub fn show_accelerometer_dialog_message(&mut self, msg: &str) {
        let Some(handle) = self.accelerometer else {
            warn!("accelerometer dialog not created, dropping message: {msg}");
            return;
        };
        if let Err(e) = self
            .services
            .set_toast_message(handle, msg)
            .and_then(|()| self.services.update_dialog(handle))
        {
            warn!("accelerometer dialog update failed: {e}");
        }
        info!("{msg}");
    }

    pub fn has_geolocation_dialog(&self) -> bool {
        self.geolocation.is_some()
    }

    pub fn has_accelerometer_dialog(&self) -> bool {
        self.accelerometer.is_some()
    }
}

impl Drop for UiBridge {
    fn drop(&mut self) {
        self.destroy_geolocation_dialog();
        self.destroy_accelerometer_dialog();
        self.cleanup_screen();
    }
}

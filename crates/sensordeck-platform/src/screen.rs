use sensordeck_common::{PlatformError, WindowGroupId};
use tracing::debug;

use crate::config::ScreenConfig;
use crate::services::{
    ContextHandle, DirtyRect, PlatformServices, WindowHandle, WindowUsage,
};

/// A fully constructed fullscreen rendering surface: one screen context and
/// one window, with a filled first frame already posted.
///
/// A surface only exists fully built. If any step after context creation
/// fails, everything created so far is destroyed before the error is
/// returned, so the caller never sees a half-constructed pair.
#[derive(Debug)]
pub struct ScreenSurface {
    context: ContextHandle,
    window: WindowHandle,
    config: ScreenConfig,
}

impl ScreenSurface {
    /// Builds the surface: context, window, window-group tag, native usage,
    /// buffer sized from `config`, then fill and post the first frame.
    pub fn create(
        services: &mut dyn PlatformServices,
        config: &ScreenConfig,
        group: &WindowGroupId,
    ) -> Result<Self, PlatformError> {
        let context = services.create_context()?;
        match Self::attach_window(services, context, config, group) {
            Ok(window) => {
                debug!(
                    "screen surface ready ({}x{}, group {group})",
                    config.width, config.height
                );
                Ok(Self {
                    context,
                    window,
                    config: *config,
                })
            }
            Err(e) => {
                services.destroy_context(context);
                Err(e)
            }
        }
    }

    fn attach_window(
        services: &mut dyn PlatformServices,
        context: ContextHandle,
        config: &ScreenConfig,
        group: &WindowGroupId,
    ) -> Result<WindowHandle, PlatformError> {
        let window = services.create_window(context)?;
        if let Err(e) = Self::present_first_frame(services, context, window, config, group) {
            services.destroy_window(window);
            return Err(e);
        }
        Ok(window)
    }

    fn present_first_frame(
        services: &mut dyn PlatformServices,
        context: ContextHandle,
        window: WindowHandle,
        config: &ScreenConfig,
        group: &WindowGroupId,
    ) -> Result<(), PlatformError> {
        services.create_window_group(window, group.as_str())?;
        services.set_window_usage(window, WindowUsage::Native)?;
        services.set_buffer_size(window, config.width, config.height)?;
        let buffer = services.create_window_buffers(window, 1)?;
        services.fill_buffer(context, buffer)?;
        services.post_window(window, buffer, DirtyRect::full(config.width, config.height))?;
        Ok(())
    }

    pub fn context(&self) -> ContextHandle {
        self.context
    }

    pub fn window(&self) -> WindowHandle {
        self.window
    }

    pub fn config(&self) -> ScreenConfig {
        self.config
    }

    /// Destroys the window, then the context.
    pub fn release(self, services: &mut dyn PlatformServices) {
        services.destroy_window(self.window);
        services.destroy_context(self.context);
        debug!("screen surface released");
    }
}

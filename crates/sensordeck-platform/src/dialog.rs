use sensordeck_common::{PlatformError, WindowGroupId};

use crate::services::{DialogHandle, PlatformServices, ToastPosition};

/// Placeholder message shown until the first status update arrives.
pub(crate) const BLANK_MESSAGE: &str = "\n";

const DISMISS_LABEL: &str = "OK";

/// Creates, decorates, and shows a cancellable alert dialog tagged with the
/// process window group. On a mid-recipe failure the partially built dialog
/// is destroyed before the error is returned.
pub fn spawn_alert(
    services: &mut dyn PlatformServices,
    group: &WindowGroupId,
) -> Result<DialogHandle, PlatformError> {
    let dialog = services.create_alert()?;
    if let Err(e) = decorate_alert(services, dialog, group) {
        services.destroy_dialog(dialog);
        return Err(e);
    }
    Ok(dialog)
}

fn decorate_alert(
    services: &mut dyn PlatformServices,
    dialog: DialogHandle,
    group: &WindowGroupId,
) -> Result<(), PlatformError> {
    services.set_alert_message(dialog, BLANK_MESSAGE)?;
    services.set_group_id(dialog, group.as_str())?;
    services.set_cancel_required(dialog, true)?;
    services.show_dialog(dialog)
}

/// Creates, decorates, and shows a bottom-center toast with a single "OK"
/// dismiss button, tagged with the process window group.
pub fn spawn_toast(
    services: &mut dyn PlatformServices,
    group: &WindowGroupId,
) -> Result<DialogHandle, PlatformError> {
    let dialog = services.create_toast()?;
    if let Err(e) = decorate_toast(services, dialog, group) {
        services.destroy_dialog(dialog);
        return Err(e);
    }
    Ok(dialog)
}

fn decorate_toast(
    services: &mut dyn PlatformServices,
    dialog: DialogHandle,
    group: &WindowGroupId,
) -> Result<(), PlatformError> {
    services.set_toast_message(dialog, BLANK_MESSAGE)?;
    services.set_toast_position(dialog, ToastPosition::BottomCenter)?;
    services.set_group_id(dialog, group.as_str())?;
    services.add_button(dialog, DISMISS_LABEL)?;
    services.show_dialog(dialog)
}

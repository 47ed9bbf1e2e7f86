//! Platform side effects issued once when the edit screen is entered.

/// Appearance of a system bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemBarStyle {
    pub transparent: bool,
    /// Dark icons/text on the bar (for light backgrounds).
    pub dark_content: bool,
}

/// Window-system services the edit screen needs.
pub trait PlatformServices {
    /// Keep the screen in portrait orientation.
    fn lock_portrait(&self);
    fn set_status_bar(&self, style: SystemBarStyle);
    fn set_navigation_bar(&self, style: SystemBarStyle);
}

/// Desktop windows have neither orientation nor system bars; calls are only
/// logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopPlatform;

impl PlatformServices for DesktopPlatform {
    fn lock_portrait(&self) {
        tracing::debug!("Portrait lock requested (no-op on desktop)");
    }

    fn set_status_bar(&self, style: SystemBarStyle) {
        tracing::debug!("Status bar style {:?} (no-op on desktop)", style);
    }

    fn set_navigation_bar(&self, style: SystemBarStyle) {
        tracing::debug!("Navigation bar style {:?} (no-op on desktop)", style);
    }
}

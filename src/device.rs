//! Handheld device classification for the custom cursor.
//!
//! Touch-first phones get the system pointer. Laptops with touchscreens
//! report touch too, so a device that also has a fine, hovering pointer is
//! treated as a hybrid and never classified as mobile.

use serde::{Deserialize, Serialize};

const MOBILE_AGENT_MARKERS: [&str; 9] = [
    "mobi",
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "opera mini",
    "iemobile",
    "mobile",
];

const LOW_MEMORY_GIGABYTES: f64 = 4.0;

/// Capabilities reported by the host page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceProfile {
    pub touch: bool,
    pub coarse_pointer: bool,
    pub fine_pointer: bool,
    pub hover: bool,
    pub standalone: bool,
    pub vibration: bool,
    pub device_memory_gigabytes: Option<f64>,
    pub user_agent: String,
}

impl DeviceProfile {
    /// Mouse-driven desktop browser.
    pub fn desktop() -> Self {
        Self {
            fine_pointer: true,
            hover: true,
            device_memory_gigabytes: Some(8.0),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64)".into(),
            ..Self::default()
        }
    }

    pub fn is_hybrid(&self) -> bool {
        self.touch && self.fine_pointer && self.hover
    }

    pub fn has_mobile_user_agent(&self) -> bool {
        let agent = self.user_agent.to_lowercase();
        MOBILE_AGENT_MARKERS
            .iter()
            .any(|marker| agent.contains(marker))
    }

    pub fn has_low_memory(&self) -> bool {
        self.device_memory_gigabytes
            .is_some_and(|gigabytes| gigabytes <= LOW_MEMORY_GIGABYTES)
    }

    pub fn is_mobile(&self) -> bool {
        if !self.touch || self.is_hybrid() {
            return false;
        }
        if self.has_mobile_user_agent() {
            return true;
        }
        let handheld_pointer = self.coarse_pointer && !self.hover;
        let handheld_signal = self.standalone || self.vibration || self.has_low_memory();
        handheld_pointer && handheld_signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE_AGENT: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

    #[test]
    fn touchscreen_laptop_is_not_mobile() {
        let laptop = DeviceProfile {
            touch: true,
            fine_pointer: true,
            hover: true,
            ..DeviceProfile::desktop()
        };
        assert!(laptop.is_hybrid());
        assert!(!laptop.is_mobile());
    }

    #[test]
    fn hybrid_wins_over_mobile_user_agent() {
        let tablet_with_trackpad = DeviceProfile {
            touch: true,
            fine_pointer: true,
            hover: true,
            user_agent: PHONE_AGENT.into(),
            ..DeviceProfile::default()
        };
        assert!(!tablet_with_trackpad.is_mobile());
    }

    #[test]
    fn phone_is_mobile() {
        let phone = DeviceProfile {
            touch: true,
            coarse_pointer: true,
            hover: false,
            user_agent: PHONE_AGENT.into(),
            ..DeviceProfile::default()
        };
        assert!(phone.is_mobile());
    }

    #[test]
    fn coarse_pointer_needs_a_handheld_signal() {
        let bare = DeviceProfile {
            touch: true,
            coarse_pointer: true,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64)".into(),
            ..DeviceProfile::default()
        };
        assert!(!bare.is_mobile());

        let vibrating = DeviceProfile {
            vibration: true,
            ..bare.clone()
        };
        assert!(vibrating.is_mobile());

        let small = DeviceProfile {
            device_memory_gigabytes: Some(2.0),
            ..bare
        };
        assert!(small.is_mobile());
    }

    #[test]
    fn desktop_without_touch_is_never_mobile() {
        let desktop = DeviceProfile {
            user_agent: PHONE_AGENT.into(),
            ..DeviceProfile::desktop()
        };
        assert!(!desktop.is_mobile());
    }
}

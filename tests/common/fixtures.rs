//! Reusable Material Design filenames.

#![allow(dead_code)]

pub const BATTERY_LONG: &str = "battery_full_24dp_E3E3E3_FILL0_wght400_GRAD0_opsz24.svg";
pub const BATTERY_LONG_48: &str = "battery_full_48dp_E3E3E3_FILL0_wght400_GRAD0_opsz48.svg";
pub const WIFI_LONG: &str = "wifi_24dp_1F1F1F_FILL1_wght300_GRAD-25_opsz24.svg";
pub const VOLUME_LONG: &str = "volume_up_20dp_FFFFFF_FILL0_wght500_GRAD200_opsz20.svg";

pub const SVG_BODY: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

/// Default icon directory used by iconpack
pub const ICONS_DIR: &str = "material-1.0/ui/icons";

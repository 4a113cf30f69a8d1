//! Board configuration generated from `panel.toml` by the build script

use carmageddon_core::config::{
    DisplayConfig, PanelConfig, SegmentConfig, SensorConfig, TimingConfig,
};

include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));

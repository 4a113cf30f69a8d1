//! Build script for carmageddon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml and compiles it into a `PANEL` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use carmageddon_core::config::PanelConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    generate_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate panel.toml, then emit it as Rust
fn generate_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read panel.toml", &e.to_string()),
    };

    let config: PanelConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid panel.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("panel.toml rejected", &format!("{:?}", e));
    }

    let source = render_config(&config);
    fs::write(out_dir.join("panel_config.rs"), source).unwrap();

    println!("cargo:warning=panel.toml validated successfully");
}

/// Rust source for the `PANEL` constant
fn render_config(config: &PanelConfig) -> String {
    format!(
        "/// Panel configuration from panel.toml\n\
         pub const PANEL: PanelConfig = PanelConfig {{\n    \
             timing: TimingConfig {{\n        \
                 tick_interval_ms: {tick},\n        \
                 send_interval_ms: {send},\n        \
                 lamp_interval_ms: {lamp},\n    \
             }},\n    \
             sensor: SensorConfig {{ shift: {shift} }},\n    \
             display: DisplayConfig {{\n        \
                 i2c_address: {address:#04x},\n        \
                 rotated: {rotated},\n    \
             }},\n    \
             segment: SegmentConfig {{ brightness: {brightness} }},\n\
         }};\n",
        tick = config.timing.tick_interval_ms,
        send = config.timing.send_interval_ms,
        lamp = config.timing.lamp_interval_ms,
        shift = config.sensor.shift,
        address = config.display.i2c_address,
        rotated = config.display.rotated,
        brightness = config.segment.brightness,
    )
}

/// Abort the build with a framed error message
fn fail(title: &str, detail: &str) -> ! {
    let lines = detail
        .lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<58} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, lines
    );
}

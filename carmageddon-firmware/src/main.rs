//! Carmageddon - Toy Car Control Panel Firmware
//!
//! RP2040 firmware mirroring a racing simulation onto a physical control
//! panel: an SSD1306 OLED, a TM1638 LED&KEY module and a throttle
//! potentiometer, linked to the simulation over UART.
//!
//! Wiring (Raspberry Pi Pico):
//! - UART0 TX/RX: GPIO0/GPIO1 (115200 8N1)
//! - I2C0 SDA/SCL: GPIO4/GPIO5 (OLED)
//! - ADC0: GPIO26 (throttle)
//! - TM1638 STB/CLK/DIO: GPIO13/GPIO14/GPIO15

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Flex, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Delay, Duration, Instant, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use carmageddon_core::render::RenderOutcome;
use carmageddon_core::sync::{InboundOutcome, SendOutcome, SyncLoop, TickReport};
use carmageddon_display::BufferedSurface;
use carmageddon_drivers::{Ssd1306, Tm1638};
use carmageddon_hal::adc::Rescaled;
use carmageddon_hal::LINK_BAUDRATE;

use crate::board::{FlexDio, IoSerial, Potentiometer};
use crate::config::PANEL;

mod board;
mod config;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// How often the loop is offered a tick; its own gate sets the real cadence
const POLL_INTERVAL_MS: u64 = 10;

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Carmageddon panel firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Link to the simulation
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = LINK_BAUDRATE;
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let link = IoSerial(uart.into_buffered(Irqs, tx_buf, rx_buf));
    info!("UART initialized at {} baud", LINK_BAUDRATE);

    // OLED (a missing panel is not fatal)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let mut oled = Ssd1306::new(i2c, PANEL.display.i2c_address, PANEL.display.rotated);
    let surface = match oled.init() {
        Ok(()) => {
            info!("OLED initialized at {=u8:#x}", PANEL.display.i2c_address);
            Some(BufferedSurface::new(oled))
        }
        Err(_) => {
            error!("OLED init failed, continuing without it");
            None
        }
    };

    // TM1638 LED&KEY module
    let stb = Output::new(p.PIN_13, Level::High);
    let clk = Output::new(p.PIN_14, Level::High);
    let mut dio = Flex::new(p.PIN_15);
    dio.set_pull(Pull::Up);
    let mut module = Tm1638::new(stb, clk, FlexDio::new(dio), Delay);
    let panel = match module.init(PANEL.segment.brightness) {
        Ok(()) => {
            info!("TM1638 initialized, brightness {}", PANEL.segment.brightness);
            Some(module)
        }
        Err(e) => {
            error!("TM1638 init failed: {:?}", e);
            None
        }
    };

    // Throttle potentiometer
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let sensor = Rescaled::new(Potentiometer::new(adc, channel), PANEL.sensor.shift);

    let mut sync = SyncLoop::new(&PANEL.timing, surface, panel, sensor, link);
    let startup = sync.begin();
    info!(
        "Startup: oled={}, panel={}",
        startup.surface_ready(),
        startup.panel
    );

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        ticker.next().await;

        // Wraps after ~49 days; the loop only ever looks at differences
        let now_ms = Instant::now().as_millis() as u32;
        if let Some(report) = sync.tick(now_ms) {
            log_tick(&report);
        }
    }
}

/// Log the noteworthy parts of a tick
fn log_tick(report: &TickReport) {
    match report.inbound {
        InboundOutcome::Applied(msg) => {
            debug!("RX: speed={} count={}", msg.speed, msg.collectible_count)
        }
        InboundOutcome::Rejected(e) => warn!("Discarded line: {:?}", e),
        InboundOutcome::LinkError => warn!("UART read error"),
        InboundOutcome::Idle => {}
    }

    if let RenderOutcome::Failed(e) = report.render {
        warn!("OLED render failed: {:?}", e);
    }

    match report.send {
        SendOutcome::Sent(out) => trace!("TX: {}", out),
        SendOutcome::LinkError => warn!("UART write failed, will retry"),
        SendOutcome::EncodeFailed => error!("Report did not fit the line buffer"),
        SendOutcome::NotDue | SendOutcome::NoSample | SendOutcome::Unchanged => {}
    }

    trace!("Tick: {}", report);
}

//! arenactl firmware for the nRF52840 arena board.
//!
//! Ten button/LED stations, an optional SSD1306 scoreboard, and two
//! external control buttons. All match state lives in the single poll
//! loop below; the control buttons talk to it over a channel only.

#![no_std]
#![no_main]

mod station;
mod ui;

use arenactl::arena::{MatchController, OutputSink, Phase, ReferenceSequence, Score, Timings};
use arenactl::config::{Micros, NUM_BUTTONS, PI_DIGITS, POLL_PERIOD_MS};
use defmt::{info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin as _};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Instant, Ticker};
use panic_probe as _;

use station::Station;
use ui::ControlEvent;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Control events flow from the button tasks into the match loop.
static CONTROL: Channel<CriticalSectionRawMutex, ControlEvent, 4> = Channel::new();

/// Everything the match controller talks to: station LEDs plus the
/// optional scoreboard. Score and elapsed are cached so either update
/// can redraw the full screen.
struct ArenaOutputs<I2C> {
    stations: [Station; NUM_BUTTONS],
    display: Option<ui::display::Oled<I2C>>,
    score: Score,
    elapsed_secs: u64,
}

impl<I2C> ArenaOutputs<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn read_all(&self) -> [bool; NUM_BUTTONS] {
        let mut raw = [false; NUM_BUTTONS];
        for (level, station) in raw.iter_mut().zip(self.stations.iter()) {
            *level = station.is_pressed();
        }
        raw
    }

    fn show_final(&mut self, score: &Score) {
        if let Some(display) = &mut self.display {
            ui::display::draw_final(display, score);
        }
    }
}

impl<I2C> OutputSink for ArenaOutputs<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn illuminate(&mut self, channel: u8) {
        if let Some(station) = self.stations.get_mut(channel as usize) {
            station.illuminate();
        }
    }

    fn extinguish(&mut self, channel: u8) {
        if let Some(station) = self.stations.get_mut(channel as usize) {
            station.extinguish();
        }
    }

    fn show_score(&mut self, score: &Score) {
        info!(
            "score: ok={} miss={} perfect={}",
            score.in_sequence,
            score.off_sequence,
            score.is_perfect()
        );
        self.score = *score;
        if let Some(display) = &mut self.display {
            ui::display::draw_running(display, self.elapsed_secs, &self.score);
        }
    }

    fn show_elapsed(&mut self, elapsed: Micros) {
        self.elapsed_secs = elapsed / 1_000_000;
        if let Some(display) = &mut self.display {
            ui::display::draw_running(display, self.elapsed_secs, &self.score);
        }
    }
}

#[embassy_executor::task(pool_size = 2)]
async fn control_button(
    pin: AnyPin,
    event: ControlEvent,
    tx: Sender<'static, CriticalSectionRawMutex, ControlEvent, 4>,
) -> ! {
    ui::control::control_task(pin, event, tx).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    info!("arenactl v{} starting", env!("CARGO_PKG_VERSION"));

    // Station wiring per the table in `config.rs`.
    let stations = [
        Station::new(p.P0_02.degrade(), p.P0_13.degrade()),
        Station::new(p.P0_03.degrade(), p.P0_14.degrade()),
        Station::new(p.P0_04.degrade(), p.P0_15.degrade()),
        Station::new(p.P0_05.degrade(), p.P0_16.degrade()),
        Station::new(p.P0_28.degrade(), p.P0_17.degrade()),
        Station::new(p.P0_29.degrade(), p.P0_19.degrade()),
        Station::new(p.P0_30.degrade(), p.P0_20.degrade()),
        Station::new(p.P0_31.degrade(), p.P0_21.degrade()),
        Station::new(p.P1_10.degrade(), p.P0_22.degrade()),
        Station::new(p.P1_11.degrade(), p.P0_23.degrade()),
    ];

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = match ui::display::init(i2c) {
        Ok(display) => {
            info!("scoreboard online");
            Some(display)
        }
        Err(_) => {
            warn!("no scoreboard found, running headless");
            None
        }
    };

    spawner.must_spawn(control_button(
        p.P0_11.degrade(),
        ControlEvent::Start,
        CONTROL.sender(),
    ));
    spawner.must_spawn(control_button(
        p.P0_12.degrade(),
        ControlEvent::Stop,
        CONTROL.sender(),
    ));

    let sequence = match ReferenceSequence::from_ascii(PI_DIGITS) {
        Ok(sequence) => sequence,
        Err(e) => defmt::panic!("reference digits rejected: {}", e),
    };
    info!("reference sequence loaded: {} digits", sequence.len());

    let mut outputs = ArenaOutputs {
        stations,
        display,
        score: Score::new(),
        elapsed_secs: 0,
    };
    if let Some(display) = &mut outputs.display {
        ui::display::draw_idle(display);
    }

    let mut controller = MatchController::new(sequence, Timings::competition());
    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));
    let mut final_reported = false;

    loop {
        while let Ok(event) = CONTROL.try_receive() {
            let now = Instant::now().as_micros();
            match event {
                ControlEvent::Start => controller.force_start(now),
                ControlEvent::Stop => controller.force_stop(),
            }
        }

        let raw = outputs.read_all();
        controller.poll(Instant::now().as_micros(), &raw, &mut outputs);

        if controller.phase() == Phase::Expired && !final_reported {
            final_reported = true;
            let score = *controller.score();
            info!(
                "match over: {} in sequence, {} off, perfect={}",
                score.in_sequence,
                score.off_sequence,
                score.is_perfect()
            );
            outputs.show_final(&score);
        }

        ticker.next().await;
    }
}

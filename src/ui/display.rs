//! SSD1306 OLED scoreboard.

use core::fmt::Write as _;

use arenactl::arena::Score;
use arenactl::error::Error;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 and clear the screen.
///
/// `Err(DisplayUnavailable)` means nothing answered on the bus; the
/// caller degrades to headless operation.
pub fn init<I2C>(i2c: I2C) -> Result<Oled<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayUnavailable)?;
    display.clear_buffer();
    let _ = display.flush();
    Ok(display)
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the waiting-for-match screen.
pub fn draw_idle<I2C>(display: &mut Oled<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("pi arena", Point::new(0, 10), text_style()).draw(display);
    let _ = Text::new("Press any station", Point::new(0, 30), text_style()).draw(display);
    let _ = Text::new("to start the match", Point::new(0, 42), text_style()).draw(display);

    let _ = display.flush();
}

/// Render the in-match screen: elapsed time and the running score.
pub fn draw_running<I2C>(display: &mut Oled<I2C>, elapsed_secs: u64, score: &Score)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let mut line: heapless::String<20> = heapless::String::new();
    let _ = write!(line, "Time {:>3}s", elapsed_secs);
    let _ = Text::new(line.as_str(), Point::new(0, 10), text_style()).draw(display);

    let mut line: heapless::String<20> = heapless::String::new();
    let _ = write!(line, "OK   {}", score.in_sequence);
    let _ = Text::new(line.as_str(), Point::new(0, 30), text_style()).draw(display);

    let mut line: heapless::String<20> = heapless::String::new();
    let _ = write!(line, "MISS {}", score.off_sequence);
    let _ = Text::new(line.as_str(), Point::new(0, 42), text_style()).draw(display);

    let _ = display.flush();
}

/// Render the end-of-match screen with the final score.
pub fn draw_final<I2C>(display: &mut Oled<I2C>, score: &Score)
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();

    let _ = Text::new("MATCH OVER", Point::new(0, 10), text_style()).draw(display);

    let mut line: heapless::String<20> = heapless::String::new();
    let _ = write!(line, "OK {}  MISS {}", score.in_sequence, score.off_sequence);
    let _ = Text::new(line.as_str(), Point::new(0, 30), text_style()).draw(display);

    if score.is_perfect() {
        let _ = Text::new("PERFECT RUN", Point::new(0, 50), text_style()).draw(display);
    }

    let _ = display.flush();
}

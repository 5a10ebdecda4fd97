//! Robot face simulator.
//!
//! Runs the expression animation engine against an SDL2 window so the face
//! can be exercised without hardware. The idle blink scheduler runs whenever
//! no key is pressed; each expression is bound to a key.
//!
//! # Controls
//!
//! | Key | Expression |
//! |-----|------------|
//! | `N` | normal |
//! | `B` | close |
//! | `S` | sad |
//! | `A` | angry |
//! | `X` | suspicious |
//! | `H` | happy |
//! | `C` | cute |
//! | `U` | upset (suppressed while happy) |
//! | `W` | wonder |
//! | `↑` `↓` `←` `→` | directional looks |
//! | `I` | introduce-self caption |
//! | `T` | credit-team caption |
//!
//! Key repeat is ignored to prevent replay spam when holding keys.

use core::convert::Infallible;

use akno_face::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use akno_face::{AnimationEngine, Expression, Surface, SystemClock};
use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    BinaryColorTheme,
    OutputSettings,
    OutputSettingsBuilder,
    SimulatorDisplay,
    SimulatorEvent,
    Window,
};

/// Pause between scheduler checks; keeps the blink timing responsive
/// without spinning the CPU.
const IDLE_TICK_MS: u64 = 5;

/// Simulator window wrapped as an engine display surface.
///
/// Draws land in the off-screen [`SimulatorDisplay`]; `present` pushes the
/// buffer to the window, matching a double-buffered panel driver.
struct SimSurface {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl SimSurface {
    fn new(title: &str, output_settings: &OutputSettings) -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            window: Window::new(title, output_settings),
        }
    }
}

impl OriginDimensions for SimSurface {
    fn size(&self) -> Size {
        self.display.size()
    }
}

impl DrawTarget for SimSurface {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        self.display.draw_iter(pixels)
    }
}

impl Surface for SimSurface {
    fn present(&mut self) -> Result<(), Self::Error> {
        self.window.update(&self.display);
        Ok(())
    }
}

/// Map a pressed key to its expression, if any.
fn expression_for_key(keycode: Keycode) -> Option<Expression> {
    match keycode {
        Keycode::N => Some(Expression::Normal),
        Keycode::B => Some(Expression::Close),
        Keycode::S => Some(Expression::Sad),
        Keycode::A => Some(Expression::Angry),
        Keycode::X => Some(Expression::Suspicious),
        Keycode::H => Some(Expression::Happy),
        Keycode::C => Some(Expression::Cute),
        Keycode::U => Some(Expression::Upset),
        Keycode::W => Some(Expression::Wonder),
        Keycode::Up => Some(Expression::LookUp),
        Keycode::Down => Some(Expression::LookDown),
        Keycode::Left => Some(Expression::LookLeft),
        Keycode::Right => Some(Expression::LookRight),
        Keycode::I => Some(Expression::IntroduceSelf),
        Keycode::T => Some(Expression::CreditTeam),
        _ => None,
    }
}

fn main() {
    // OLED-style output: blue-on-black theme, 4x scale for visibility
    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::OledBlue)
        .scale(4)
        .build();
    let surface = SimSurface::new("Akno Face", &output_settings);
    let mut engine = AnimationEngine::new(surface, SystemClock::new());

    // Open with the resting face so the window isn't blank before the
    // first blink fires
    if engine.normal().is_err() {
        return;
    }

    // ==========================================================================
    // Main Loop: Pump Events, Render Requests, Tick the Blink Scheduler
    // ==========================================================================

    loop {
        let mut requested: Option<Expression> = None;

        for ev in engine.surface_mut().window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent replay spam when holding keys
                    if repeat {
                        continue;
                    }
                    if let Some(expression) = expression_for_key(keycode) {
                        requested = Some(expression);
                    }
                }
                _ => {}
            }
        }

        // An expression request plays to completion; otherwise one
        // scheduler check keeps the idle blink alive
        let result = match requested {
            Some(expression) => engine.render(expression),
            None => {
                let now = engine.clock().now_ms();
                engine.tick(now)
            }
        };
        if result.is_err() {
            return;
        }

        std::thread::sleep(std::time::Duration::from_millis(IDLE_TICK_MS));
    }
}

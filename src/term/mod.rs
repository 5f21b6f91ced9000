//! Terminal shell
//!
//! Owns the [`GameLoop`] and the [`Ticker`], forwards key presses as input
//! signals and redraws after anything changes. No game rules live here.

pub mod keys;
pub mod render;

use std::{
    io::{self, Stdout, Write, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{self, Clear, ClearType},
};

use crate::error::Error;
use crate::settings::Settings;
use crate::sim::{Control, GameLoop, Rules, handle_input, tick};
use crate::timer::Ticker;
use keys::KeyAction;

/// How long to block on input while the tick timer is disarmed
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Raw mode + alternate screen for as long as it lives
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run until the player exits from the game-over screen or presses Ctrl-C
pub fn run(settings: &Settings, rules: Rules) -> Result<(), Error> {
    let mut guard = TerminalGuard::enter()?;
    let mut game = GameLoop::new(rules);
    let mut ticker = Ticker::new(settings.tick_period());
    log::info!("Session started ({:?} per tick)", ticker.period());

    render::draw(&mut guard.out, &game.snapshot(), game.rules())?;
    loop {
        let mut dirty = false;
        ticker.sync(game.state(), Instant::now());

        let timeout = ticker.time_until(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match keys::map_key(key) {
                    Some(KeyAction::Quit) => {
                        log::info!("Interrupted");
                        break;
                    }
                    Some(KeyAction::Signal(input)) => {
                        if handle_input(&mut game, input) == Control::Exit {
                            log::info!("Exit requested");
                            break;
                        }
                        dirty = true;
                    }
                    None => {}
                },
                Event::Resize(..) => {
                    execute!(guard.out, Clear(ClearType::All))?;
                    dirty = true;
                }
                _ => {}
            }
        }

        // Input may have left Playing; the timer must not fire after that.
        let now = Instant::now();
        ticker.sync(game.state(), now);
        if ticker.poll(now) {
            for event in tick(&mut game) {
                log::debug!("{event:?}");
            }
            dirty = true;
        }

        if dirty {
            render::draw(&mut guard.out, &game.snapshot(), game.rules())?;
        }
    }

    ticker.cancel();
    guard.out.flush()?;
    Ok(())
}

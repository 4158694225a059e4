//! Console driver for the controller client.
//!
//! Stands in for the touch UI: each input line moves a synthetic
//! pointer on a square pad surface, and every direction change the
//! resolver accepts goes out as one command byte.

use dpad_controller::domain::settings::SettingsService;
use dpad_controller::domain::{DirectionResolver, PointerSample, WidgetBounds};
use dpad_controller::infrastructure::logging;
use dpad_controller::session::{spawn_connect, CommandCode, ConnectOutcome, Session};
use std::io::{self, BufRead};
use std::net::TcpStream;
use std::sync::mpsc;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let settings_service = SettingsService::new()?;
    let settings = settings_service.get().clone();
    let _logging = logging::init_logger(&settings.log_settings)?;
    info!("Starting D-Pad controller client");

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| settings.server_addr.clone());

    let (outcome_tx, outcome_rx) = mpsc::channel();
    spawn_connect(addr.clone(), outcome_tx);
    println!("Connecting to {}...", addr);

    let mut session = match outcome_rx.recv()? {
        ConnectOutcome::Connected(session) => session,
        ConnectOutcome::Rejected => {
            println!("The game is full. Try again later.");
            return Ok(());
        }
        ConnectOutcome::Failed(err) => {
            return Err(err.context(format!("unable to connect to {}", addr)));
        }
    };

    println!("You are player {}.", session.player());
    println!("Commands: u/d/l/r hold a direction, n lifts the finger, p pauses/resumes, q quits.");

    let pad = WidgetBounds::new(settings.pad_size_px, settings.pad_size_px);
    let mut resolver =
        DirectionResolver::with_density(settings.touch_precision_dip, settings.display_density);
    let mut engaged = false;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            cmd @ ("u" | "d" | "l" | "r") => {
                let sample = touch_point(cmd, pad);
                let emitted = if engaged {
                    resolver.move_to(sample, pad)
                } else {
                    engaged = true;
                    Some(resolver.engage(sample, pad))
                };
                if let Some(direction) = emitted {
                    deliver(&mut session, direction.into());
                }
            }
            "n" => {
                engaged = false;
                deliver(&mut session, resolver.release().into());
            }
            "p" => deliver(&mut session, CommandCode::PauseResume),
            "q" => break,
            "" => continue,
            other => println!("Unrecognized command: {}", other),
        }
    }

    if engaged {
        deliver(&mut session, resolver.release().into());
    }
    if session.close().is_err() {
        warn!("Command channel did not close cleanly");
    }
    info!("Session ended");
    Ok(())
}

/// Map a direction key to a pointer position on the pad edge.
fn touch_point(cmd: &str, pad: WidgetBounds) -> PointerSample {
    let cx = pad.width * 0.5;
    let cy = pad.height * 0.5;
    match cmd {
        "u" => PointerSample::new(cx, 0.0),
        "d" => PointerSample::new(cx, pad.height),
        "l" => PointerSample::new(0.0, cy),
        _ => PointerSample::new(pad.width, cy),
    }
}

/// Fire-and-forget delivery: a dropped command is superseded by the
/// next pointer sample, so failures are logged and swallowed.
fn deliver(session: &mut Session<TcpStream>, code: CommandCode) {
    if session.send(code).is_err() {
        warn!("Dropped command {:?}: channel disconnected", code);
    }
}

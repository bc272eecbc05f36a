use std::io::Write as _;

use clap::Args;
use notify_rust::Notification;
use tokio::time::{interval, Duration};
use tomato_core::{Event, TimerEngine, TICK_MS};

use crate::common::ConfigArgs;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Stop after this many completed shifts (runs until Ctrl+C by default)
    #[arg(long)]
    shifts: Option<u32>,

    /// Print engine events as JSON instead of a live countdown
    #[arg(long)]
    json: bool,
}

pub async fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config.to_config()?;
    let mut engine = TimerEngine::new(config)?;

    if !args.json {
        println!(
            "tomato: {} min work / {} min break / {} min long break, long break every {} pomodoros",
            config.work_min, config.break_min, config.long_break_min, config.cycles
        );
        println!("Press Enter to start each shift, Ctrl+C to quit.\n");
    }

    let mut completed_shifts = 0u32;
    loop {
        wait_for_enter(&engine, args.json)?;
        emit(args.json, engine.start())?;

        let mut ticker = interval(Duration::from_millis(TICK_MS));
        // The first interval tick completes immediately.
        ticker.tick().await;

        let boundary = loop {
            ticker.tick().await;
            match engine.tick() {
                Some(event) => break event,
                None => {
                    if !args.json {
                        print!("\r{} {}  ", engine.shift_label(), engine.display_text());
                        std::io::stdout().flush()?;
                    }
                }
            }
        };

        announce_completion(&engine, &boundary, args.json)?;

        completed_shifts += 1;
        if let Some(limit) = args.shifts {
            if completed_shifts >= limit {
                break;
            }
        }
    }

    Ok(())
}

/// The engine never restarts itself after a boundary; the user taps Enter.
fn wait_for_enter(engine: &TimerEngine, json: bool) -> std::io::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&engine.snapshot()).unwrap_or_default()
        );
    } else {
        print!(
            "{} {} -- press Enter to start",
            engine.shift_label(),
            engine.display_text()
        );
        std::io::stdout().flush()?;
    }
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(())
}

fn emit(json: bool, event: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        if let Some(event) = event {
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}

fn announce_completion(
    engine: &TimerEngine,
    event: &Event,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let message = match event {
        Event::ShiftCompleted { next_shift, .. } if next_shift.is_break() => format!(
            "Work shift complete! Time for a {}-minute break.",
            next_shift.duration_min(engine.config())
        ),
        Event::ShiftCompleted { next_shift, .. } => format!(
            "Break is over! Next up: a {}-minute work shift.",
            next_shift.duration_min(engine.config())
        ),
        other => format!("Shift boundary: {other:?}"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(event)?);
    } else {
        println!("\n{message}");
    }

    if let Err(e) = send_notification(&message) {
        eprintln!("Failed to send notification: {e}");
    }
    Ok(())
}

fn send_notification(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    Notification::new()
        .summary("Tomato - Pomodoro Alert")
        .body(message)
        .timeout(0) // No auto-dismiss
        .show()?;
    Ok(())
}

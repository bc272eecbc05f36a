use clap::Args;
use tomato_core::{format_ms, Shift};

use crate::common::ConfigArgs;

#[derive(Args, Debug)]
pub struct ShiftsArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// How many shifts to list
    #[arg(long, default_value = "16")]
    count: u32,

    /// Print the sequence as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ShiftsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config.to_config()?;

    if args.json {
        let sequence: Vec<serde_json::Value> = (1..=args.count)
            .map(|n| {
                let shift = Shift::for_pomodoro(n, &config);
                serde_json::json!({
                    "pomodoro": n,
                    "shift": shift,
                    "label": shift.label(),
                    "duration_min": shift.duration_min(&config),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&sequence)?);
        return Ok(());
    }

    println!("  # | shift      | label | length");
    println!("----+------------+-------+-------");
    for n in 1..=args.count {
        let shift = Shift::for_pomodoro(n, &config);
        println!(
            "{n:>3} | {:<10} | {:<5} | {}",
            format!("{shift:?}"),
            shift.label(),
            format_ms(shift.duration_ms(&config))
        );
    }
    Ok(())
}

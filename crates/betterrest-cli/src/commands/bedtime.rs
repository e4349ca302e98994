use std::path::PathBuf;

use betterrest_core::{
    BedtimeCalculator, ClockStyle, CoffeeAmount, Config, SleepAmount, SleepForm, TimeOfDay,
};
use betterrest_core::error::Result;
use clap::Args;

use super::predictor_for;

#[derive(Args)]
pub struct BedtimeArgs {
    /// Wake-up time (HH:MM). Defaults to the configured wake-up time
    #[arg(long)]
    wake: Option<String>,
    /// Desired hours of sleep, 4 to 12 in quarter hours
    #[arg(long)]
    sleep: Option<f64>,
    /// Cups of coffee per day, 1 to 20
    #[arg(long)]
    coffee: Option<u32>,
    /// Model file to load instead of the configured one
    #[arg(long)]
    model: Option<PathBuf>,
    /// Use a 24-hour clock
    #[arg(long = "24h")]
    twenty_four_hour: bool,
    /// Also print the inputs the bedtime was derived from
    #[arg(long)]
    details: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: BedtimeArgs) -> Result<()> {
    let config = Config::load_or_default();

    let mut inputs = config.defaults.inputs();
    if let Some(wake) = args.wake.as_deref() {
        inputs.wake_up = TimeOfDay::parse(wake)?;
    }
    if let Some(sleep) = args.sleep {
        inputs.sleep_amount = SleepAmount::new(sleep)?;
    }
    if let Some(coffee) = args.coffee {
        inputs.coffee_amount = CoffeeAmount::new(coffee)?;
    }

    let style = if args.twenty_four_hour {
        ClockStyle::TwentyFourHour
    } else {
        config.display.clock
    };

    let predictor = predictor_for(&config, args.model);
    let form = SleepForm::new(BedtimeCalculator::new(predictor), inputs).with_clock_style(style);
    let outcome = form.appear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if !outcome.is_alert() {
        if args.details {
            let inputs = form.inputs();
            println!("Wake up: {}", style.format(inputs.wake_up));
            println!("Desired sleep: {}", inputs.sleep_amount.label());
            println!("Coffee: {}", inputs.coffee_amount.label());
        }
        println!("{}", outcome.headline());
    }

    if outcome.is_alert() {
        if !args.json {
            eprintln!("{}", outcome.headline());
        }
        std::process::exit(1);
    }
    Ok(())
}

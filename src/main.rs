// Rust Scheduler demo
// Prints the layout for an events file as plain text

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use getopts::Options;

use rust_scheduler::models::event::Event;
use rust_scheduler::models::grid::Layout;
use rust_scheduler::services::settings::ConfigService;
use rust_scheduler::utils::date::parse_iso_date;
use rust_scheduler::{NoopListener, ViewMode, ViewModeCoordinator};

struct Args {
    config: Option<PathBuf>,
    mode: Option<ViewMode>,
    date: Option<NaiveDate>,
    locale: Option<String>,
    events: PathBuf,
}

fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {} [options] EVENTS.json", program);
    opts.usage(&brief)
}

fn parse_args() -> Result<Option<Args>> {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().cloned().unwrap_or_else(|| "rust-scheduler".into());

    let mut opts = Options::new();
    opts.optopt("c", "config", "scheduler config file (TOML)", "FILE");
    opts.optopt("m", "mode", "month, week, day or timeline", "MODE");
    opts.optopt("d", "date", "reference date", "YYYY-MM-DD");
    opts.optopt("l", "locale", "locale tag (en, fr, de, es, ko)", "TAG");
    opts.optflag("h", "help", "print this help");

    let matches = opts.parse(argv.iter().skip(1))?;
    if matches.opt_present("h") || matches.free.is_empty() {
        print!("{}", usage(&program, &opts));
        return Ok(None);
    }

    let mode = matches
        .opt_str("m")
        .map(|m| m.parse::<ViewMode>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let date = matches
        .opt_str("d")
        .map(|d| parse_iso_date(&d))
        .transpose()?;

    Ok(Some(Args {
        config: matches.opt_str("c").map(PathBuf::from),
        mode,
        date,
        locale: matches.opt_str("l"),
        events: PathBuf::from(&matches.free[0]),
    }))
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse events from {}", path.display()))?;
    for event in &events {
        if let Err(err) = event.validate() {
            log::warn!("Event '{}' will not be shown: {}", event.id, err);
        }
    }
    Ok(events)
}

fn render(coordinator: &ViewModeCoordinator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", coordinator.title(), coordinator.mode());

    match coordinator.layout() {
        Layout::Grid(grid) if grid.mode == ViewMode::Month => {
            let headers: Vec<String> = grid
                .columns
                .iter()
                .map(|c| format!("{:>4}", c.header.chars().take(3).collect::<String>()))
                .collect();
            let _ = writeln!(out, "{}", headers.concat());
            for row in &grid.rows {
                for bucket in &row.buckets {
                    let marker = match grid.visible(bucket).next() {
                        Some(_) => '*',
                        None => ' ',
                    };
                    let day = if bucket.in_current_month {
                        format!("{:>3}", bucket.day)
                    } else {
                        "  .".to_string()
                    };
                    let _ = write!(out, "{}{}", day, marker);
                }
                out.push('\n');
            }
            for bucket in grid.buckets() {
                for event in grid.visible(bucket) {
                    let _ = writeln!(out, "{}  {}", bucket.date, describe(event));
                }
            }
        }
        Layout::Grid(grid) => {
            for row in &grid.rows {
                let shown: Vec<_> = row
                    .buckets
                    .iter()
                    .flat_map(|bucket| grid.visible(bucket).map(move |event| (bucket, event)))
                    .collect();
                if shown.is_empty() {
                    continue;
                }
                let _ = writeln!(out, "{}", row.label.as_deref().unwrap_or(""));
                for (bucket, event) in shown {
                    let _ = writeln!(out, "  {}  {}", bucket.date, describe(event));
                }
            }
        }
        Layout::Timeline(events) => {
            for event in events {
                let _ = writeln!(out, "{}  {}", event.date, describe(event));
            }
        }
    }
    out
}

fn describe(event: &Event) -> String {
    let hours = match (&event.start_hour, &event.end_hour) {
        (Some(start), Some(end)) => format!("{} - {}  ", start, end),
        (Some(start), None) => format!("{}  ", start),
        _ => String::new(),
    };
    match &event.group_label {
        Some(group) => format!("{}{} ({})", hours, event.label, group),
        None => format!("{}{}", hours, event.label),
    }
}

fn run() -> Result<()> {
    let Some(args) = parse_args()? else {
        return Ok(());
    };

    let service = match args.config {
        Some(path) => Some(ConfigService::new(path)),
        None => ConfigService::with_default_path(),
    };
    let mut config = match service {
        Some(service) => service.load()?,
        None => Default::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    let events = load_events(&args.events)?;
    let reference = args.date.unwrap_or_else(|| Local::now().date_naive());
    log::info!(
        "Rendering {} events in {} mode around {}",
        events.len(),
        config.mode,
        reference
    );

    let coordinator = ViewModeCoordinator::new(config, events, reference, NoopListener);
    print!("{}", render(&coordinator));
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(err) = run() {
        log::error!("{:#}", err);
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

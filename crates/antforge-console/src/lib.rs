//! Colorful console output for colony runs.
//!
//! Provides a custom `tracing` layer that formats colony events with colors,
//! and [`print_report`] for the final answer.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end and periodic progress lines
//! - **DEBUG**: New best selections
//! - **TRACE**: Per-iteration summaries
//! - **WARN**: Suspicious configuration values

mod report;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use report::{format_report, print_report};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "antforge_solver=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the AntForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ColonyConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
    _          _   _____
   / \   _ __ | |_|  ___|__  _ __ __ _  ___
  / _ \ | '_ \| __| |_ / _ \| '__/ _` |/ _ \
 / ___ \| | | | |_|  _| (_) | | | (_| |  __/
/_/   \_\_| |_|\__|_|  \___/|_|  \__, |\___|
                                 |___/
"#;

    let version_line = format!("             v{} - Ant Colony Knapsack Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats colony events with colors.
pub struct ColonyConsoleLayer;

impl<S: Subscriber> Layer<S> for ColonyConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("antforge_solver") && !target.starts_with("antforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    item_count: Option<u64>,
    capacity: Option<f64>,
    ants: Option<u64>,
    iteration: Option<u64>,
    iterations: Option<u64>,
    best_value: Option<f64>,
    items: Option<u64>,
    candidates: Option<u64>,
    valid: Option<u64>,
    duration_ms: Option<u64>,
    feasible: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "ants" => self.ants = Some(value),
            "iteration" => self.iteration = Some(value),
            "iterations" => self.iterations = Some(value),
            "items" => self.items = Some(value),
            "candidates" => self.candidates = Some(value),
            "valid" => self.valid = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "capacity" => self.capacity = Some(value),
            "best_value" => self.best_value = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    if level == Level::WARN {
        return format_warning(v);
    }

    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "progress" => format_progress(v),
        "new_best" => format_new_best(v),
        "iteration" => format_iteration(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let items = v.item_count.unwrap_or(0);
    let capacity = v.capacity.unwrap_or(0.0);
    let ants = v.ants.unwrap_or(0);
    let iterations = v.iterations.unwrap_or(0);

    format!(
        "{} {} Solving │ {} items │ capacity {} │ {} ants × {} iterations │ {} subsets",
        format_elapsed(),
        "▶".bright_green().bold(),
        items.to_formatted_string(&Locale::en).bright_yellow(),
        format_value(capacity).bright_yellow(),
        ants.to_formatted_string(&Locale::en).bright_yellow(),
        iterations.to_formatted_string(&Locale::en).bright_yellow(),
        calculate_problem_scale(items as usize).bright_magenta()
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let iteration = v.iteration.unwrap_or(0);
    let iterations = v.iterations.unwrap_or(0);
    let best = v.best_value.unwrap_or(0.0);

    format!(
        "{} {} Iteration {}/{} │ best value = {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        iteration.to_formatted_string(&Locale::en).white(),
        iterations.to_formatted_string(&Locale::en).white(),
        format_value(best).bright_green().bold()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    let iteration = v.iteration.unwrap_or(0);
    let best = v.best_value.unwrap_or(0.0);
    let items = v.items.unwrap_or(0);

    format!(
        "{} {} New best {} │ {} items │ iteration {}",
        format_elapsed(),
        "★".bright_yellow(),
        format_value(best).bright_green(),
        items.to_formatted_string(&Locale::en).white(),
        iteration.to_formatted_string(&Locale::en).white()
    )
}

fn format_iteration(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let iteration = v.iteration.unwrap_or(0);
    let candidates = v.candidates.unwrap_or(0);
    let valid = v.valid.unwrap_or(0);
    let best = v.best_value.unwrap_or(0.0);

    format!(
        "{} {} Iteration {:>6} │ {}/{} valid │ best {}",
        format_elapsed(),
        "·".bright_black(),
        iteration.to_formatted_string(&Locale::en).bright_black(),
        valid,
        candidates,
        format_value(best).bright_black()
    )
}

fn format_warning(v: &EventVisitor) -> String {
    let message = v.message.as_deref().unwrap_or("");
    if message.is_empty() {
        return String::new();
    }

    format!(
        "{} {} {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        message.yellow()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let best = v.best_value.unwrap_or(0.0);
    let is_feasible = v.feasible.unwrap_or(best > 0.0);
    let iterations = v.iterations.unwrap_or(0);
    let candidates = v.candidates.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let status = if is_feasible {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "NO SOLUTION".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} iterations │ {} candidates │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        iterations.to_formatted_string(&Locale::en).white(),
        candidates.to_formatted_string(&Locale::en).white(),
        status
    );

    // Summary box
    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    let status_text = if is_feasible {
        "FEASIBLE SELECTION FOUND"
    } else {
        "NO VALID SELECTION FOUND"
    };
    let inner_width: usize = 58;
    let total_pad = inner_width.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let status_colored = if is_feasible {
        status_text.bright_green().bold().to_string()
    } else {
        status_text.bright_red().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(
        &"╠══════════════════════════════════════════════════════════╣"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Best Value:",
        format_value(best),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

/// Whole numbers print with thousands separators, others with two decimals.
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        (value as i64).to_formatted_string(&Locale::en)
    } else {
        format!("{:.2}", value)
    }
}

// Size of the search space, 2^n.
fn calculate_problem_scale(item_count: usize) -> String {
    if item_count == 0 {
        return "1".to_string();
    }
    if item_count < 64 {
        return (1u64 << item_count).to_formatted_string(&Locale::en);
    }

    let log_scale = item_count as f64 * 2f64.log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}

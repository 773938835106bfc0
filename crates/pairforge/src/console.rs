//! Colorful console output for engine events.
//!
//! Provides a custom `tracing` layer that formats build and regeneration
//! events with colors. Enabled with the `console` feature.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing visible if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::from_default_env();
        for directive in ["pairforge_solver=info", "pairforge=warn"] {
            if let Ok(directive) = directive.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PairForgeConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let version_line = format!(
        "PairForge v{} - doubles tournament scheduler",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", version_line.bright_cyan().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats engine events with colors.
pub struct PairForgeConsoleLayer;

impl<S: Subscriber> Layer<S> for PairForgeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("pairforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    population: Option<u64>,
    active: Option<u64>,
    courts: Option<u64>,
    byes: Option<u64>,
    rounds: Option<u64>,
    requested: Option<u64>,
    achieved: Option<u64>,
    round: Option<u64>,
    cut_round: Option<u64>,
    withdrawing: Option<u64>,
    relaxed_rounds: Option<u64>,
    duration_ms: Option<u64>,
    player: Option<u64>,
    players: Option<u64>,
    teams: Option<u64>,
    court: Option<u64>,
    team: Option<String>,
    acceptable: Option<bool>,
    relaxed: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "team" => &mut self.team,
            _ => return,
        };
        *slot = Some(format!("{:?}", value).trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "population" => &mut self.population,
            "active" => &mut self.active,
            "courts" => &mut self.courts,
            "byes" => &mut self.byes,
            "rounds" => &mut self.rounds,
            "requested" => &mut self.requested,
            "achieved" => &mut self.achieved,
            "round" => &mut self.round,
            "cut_round" => &mut self.cut_round,
            "withdrawing" => &mut self.withdrawing,
            "relaxed_rounds" => &mut self.relaxed_rounds,
            "duration_ms" => &mut self.duration_ms,
            "player" => &mut self.player,
            "players" => &mut self.players,
            "teams" => &mut self.teams,
            "court" => &mut self.court,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "acceptable" => self.acceptable = Some(value),
            "relaxed" => self.relaxed = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "team" => &mut self.team,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "build_start" => format_build_start(v),
        "build_end" => format_run_end("Build", v),
        "regenerate_start" => format_regenerate_start(v),
        "regenerate_end" => format_run_end("Regeneration", v),
        "round" => format_round(v),
        "relaxed_pairing" => format_warning(
            level,
            format!("round {} repeats a partnership", display_round(v.round)),
        ),
        "no_pairing" => format_warning(
            level,
            format!(
                "round {}: no pairing for {} players",
                display_round(v.round),
                count(v.players)
            ),
        ),
        "no_matching" => format_warning(
            level,
            format!(
                "round {}: no court assignment for {} teams",
                display_round(v.round),
                count(v.teams)
            ),
        ),
        "unpaired_team" => format_warning(
            level,
            format!(
                "team {} on court {} in round {} has no opponent",
                v.team.as_deref().unwrap_or("?"),
                count(v.court),
                display_round(v.round)
            ),
        ),
        "exhausted" => format_warning(
            level,
            format!(
                "stopped after {} of {} rounds",
                count(v.achieved),
                count(v.requested)
            ),
        ),
        "unresolved_player" => format_warning(
            level,
            format!(
                "player {} in round {} has no record",
                v.player.unwrap_or(0),
                display_round(v.round)
            ),
        ),
        _ => String::new(),
    }
}

fn format_build_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} population ({}), active ({}), courts ({}), rounds ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Build]".bright_cyan(),
        count(v.population).bright_yellow(),
        count(v.active).bright_yellow(),
        count(v.courts).bright_yellow(),
        count(v.rounds).bright_yellow()
    )
}

fn format_regenerate_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} from round {}: withdrawing ({}), active ({}), courts ({}), byes ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Regenerate]".bright_cyan(),
        display_round(v.cut_round).white().bold(),
        count(v.withdrawing).bright_yellow(),
        count(v.active).bright_yellow(),
        count(v.courts).bright_yellow(),
        count(v.byes).bright_yellow()
    )
}

fn format_run_end(label: &str, v: &EventVisitor) -> String {
    let verdict = match v.acceptable {
        Some(true) => "ACCEPTABLE".bright_green().bold().to_string(),
        Some(false) => "NOT ACCEPTABLE".bright_red().bold().to_string(),
        None => "N/A".white().to_string(),
    };
    format!(
        "{} {} {} {} ended: rounds ({}/{}), relaxed ({}), time spent ({}), {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", label).bright_cyan(),
        label.white().bold(),
        count(v.rounds).bright_yellow(),
        count(v.requested).yellow(),
        count(v.relaxed_rounds).bright_magenta(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        verdict
    )
}

fn format_round(v: &EventVisitor) -> String {
    let marker = if v.relaxed == Some(true) {
        "relaxed".yellow().to_string()
    } else {
        "ok".bright_green().to_string()
    };
    format!(
        "    {} Round {:>4} | courts {} | byes {} | {}",
        "->".bright_blue(),
        display_round(v.round).white(),
        count(v.courts),
        count(v.byes),
        marker
    )
}

fn format_warning(level: Level, text: String) -> String {
    let tag = if level == Level::WARN {
        "WARN".yellow().bold().to_string()
    } else {
        level.to_string()
    };
    format!("{} {} {}", timestamp().bright_black(), tag, text)
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

/// Round indices are zero-based in events and one-based on screen.
fn display_round(index: Option<u64>) -> String {
    index.map_or_else(|| "?".to_string(), |i| (i + 1).to_string())
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_rounds_are_shown_one_based() {
        assert_eq!(display_round(Some(0)), "1");
        assert_eq!(display_round(None), "?");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(Level::INFO, &visitor).is_empty());
    }

    #[test]
    fn test_generation_failures_are_reported() {
        let no_pairing = EventVisitor {
            event: Some("no_pairing".to_string()),
            round: Some(2),
            players: Some(8),
            ..EventVisitor::default()
        };
        let line = format_event(Level::WARN, &no_pairing);
        assert!(line.contains("round 3: no pairing for 8 players"));

        let no_matching = EventVisitor {
            event: Some("no_matching".to_string()),
            round: Some(0),
            teams: Some(3),
            ..EventVisitor::default()
        };
        let line = format_event(Level::WARN, &no_matching);
        assert!(line.contains("round 1: no court assignment for 3 teams"));
    }

    #[test]
    fn test_unpaired_team_is_reported() {
        let visitor = EventVisitor {
            event: Some("unpaired_team".to_string()),
            round: Some(4),
            court: Some(3),
            team: Some("4-7".to_string()),
            ..EventVisitor::default()
        };
        let line = format_event(Level::WARN, &visitor);
        assert!(line.contains("team 4-7 on court 3 in round 5 has no opponent"));
    }

    #[test]
    fn test_count_uses_separators() {
        assert_eq!(count(Some(12_345)), "12,345");
        assert_eq!(count(None), "0");
    }
}

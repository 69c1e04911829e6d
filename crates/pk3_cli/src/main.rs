use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use pk3_core::container::SaveContainer;
use pk3_core::slot::GameSaveSlot;
use pk3_core::summary::{ContainerSummary, SlotSummary};
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotChoice {
    A,
    B,
    Active,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SAVE.SAV")]
    path: PathBuf,
    /// Print the section table of the selected slot.
    #[arg(long)]
    sections: bool,
    /// Print both slots' save counters.
    #[arg(long)]
    counters: bool,
    /// Print the active slot index.
    #[arg(long)]
    active: bool,
    /// Print a flag bit from the selected slot; repeatable.
    #[arg(long = "flag", value_name = "INDEX")]
    flags: Vec<u32>,
    /// Which slot field queries read from.
    #[arg(
        long,
        value_name = "0|1|a|b|active",
        default_value = "active",
        value_parser = parse_slot_choice
    )]
    slot: SlotChoice,
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn is_field_mode(&self) -> bool {
        self.sections || self.counters || self.active || !self.flags.is_empty()
    }
}

fn main() {
    let cli = Cli::parse();

    let bytes = fs::read(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });

    let container = SaveContainer::from_bytes(&bytes).unwrap_or_else(|e| {
        eprintln!("Error parsing save file: {}", cli.path.display());
        eprintln!("  {}", e);
        process::exit(1);
    });

    let slot_index = match cli.slot {
        SlotChoice::A => 0,
        SlotChoice::B => 1,
        SlotChoice::Active => container.active_index(),
    };

    if cli.json {
        let json = if cli.is_field_mode() {
            JsonValue::Object(selected_json(&cli, &container, slot_index))
        } else {
            full_json(&container)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if cli.is_field_mode() {
        for (key, value) in selected_pairs(&cli, &container, slot_index) {
            println!("{key}={value}");
        }
        return;
    }

    print_save_report(&container);
}

// ---------------------------------------------------------------------------
// Field output
// ---------------------------------------------------------------------------

fn selected_pairs(
    cli: &Cli,
    container: &SaveContainer,
    slot_index: usize,
) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();

    if cli.active {
        out.push(("active", container.active_index().to_string()));
    }
    if cli.counters {
        for index in 0..2 {
            let slot = fetch_slot(container, index);
            out.push(("counter", format!("{}={}", slot_letter(index), slot.save_counter())));
        }
    }
    if cli.sections {
        let summary = capture_slot(container, slot_index);
        for section in &summary.sections {
            out.push((
                "section",
                format!("{}={} ({})", section.index, section.id, section.kind),
            ));
        }
    }
    for &flag_index in &cli.flags {
        let slot = fetch_slot(container, slot_index);
        let value = slot.flag(flag_index).unwrap_or_else(|e| {
            eprintln!("Error reading flag {flag_index}: {e}");
            process::exit(1);
        });
        out.push(("flag", format!("{flag_index}={value}")));
    }

    out
}

fn selected_json(
    cli: &Cli,
    container: &SaveContainer,
    slot_index: usize,
) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    if cli.active {
        out.insert(
            "active".to_string(),
            JsonValue::from(container.active_index()),
        );
    }
    if cli.counters {
        let mut counters = JsonMap::new();
        for index in 0..2 {
            let slot = fetch_slot(container, index);
            counters.insert(
                slot_letter(index).to_string(),
                JsonValue::from(slot.save_counter()),
            );
        }
        out.insert("counters".to_string(), JsonValue::Object(counters));
    }
    if cli.sections {
        let summary = capture_slot(container, slot_index);
        let sections = serde_json::to_value(&summary.sections).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        out.insert("sections".to_string(), sections);
    }
    if !cli.flags.is_empty() {
        let slot = fetch_slot(container, slot_index);
        let flags: Vec<JsonValue> = cli
            .flags
            .iter()
            .map(|&flag_index| {
                let value = slot.flag(flag_index).unwrap_or_else(|e| {
                    eprintln!("Error reading flag {flag_index}: {e}");
                    process::exit(1);
                });
                let mut m = JsonMap::new();
                m.insert("index".to_string(), JsonValue::from(flag_index));
                m.insert("value".to_string(), JsonValue::Bool(value));
                JsonValue::Object(m)
            })
            .collect();
        out.insert("flags".to_string(), JsonValue::Array(flags));
    }

    out
}

fn full_json(container: &SaveContainer) -> JsonValue {
    let summary = ContainerSummary::capture(container).unwrap_or_else(|e| {
        eprintln!("Error summarizing save container: {e}");
        process::exit(1);
    });
    serde_json::to_value(&summary).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    })
}

// ---------------------------------------------------------------------------
// Report output
// ---------------------------------------------------------------------------

fn print_save_report(container: &SaveContainer) {
    for index in 0..2 {
        let summary = capture_slot(container, index);
        let marker = if index == container.active_index() {
            " (active)"
        } else {
            ""
        };
        println!(
            "Slot {}{marker}  save counter {}",
            slot_letter(index),
            summary.save_counter
        );
        for section in &summary.sections {
            println!("  [{:2}] id {:2}  {}", section.index, section.id, section.kind);
        }
        println!();
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn parse_slot_choice(value: &str) -> Result<SlotChoice, String> {
    match value.to_ascii_lowercase().as_str() {
        "0" | "a" => Ok(SlotChoice::A),
        "1" | "b" => Ok(SlotChoice::B),
        "active" => Ok(SlotChoice::Active),
        _ => Err(format!(
            "invalid slot value '{value}', expected one of: 0, 1, a, b, active"
        )),
    }
}

fn slot_letter(index: usize) -> &'static str {
    if index == 0 { "A" } else { "B" }
}

fn fetch_slot(container: &SaveContainer, index: usize) -> &GameSaveSlot {
    container.slot(index).unwrap_or_else(|e| {
        eprintln!("Error fetching slot {index}: {e}");
        process::exit(1);
    })
}

fn capture_slot(container: &SaveContainer, index: usize) -> SlotSummary {
    let slot = fetch_slot(container, index);
    SlotSummary::capture(slot).unwrap_or_else(|e| {
        eprintln!("Error summarizing slot {index}: {e}");
        process::exit(1);
    })
}

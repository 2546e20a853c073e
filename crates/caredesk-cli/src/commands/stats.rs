use caredesk::persist::{RestoreReport, RestoreStop};
use caredesk::{Desk, OpenReport, Role};
use clap::Parser;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::error::CliResult;
use crate::output::{OutputFormat, print_json};

#[derive(Parser)]
pub struct StatsCommand {}

impl StatsCommand {
    pub fn execute(
        &self,
        desk: &Desk,
        report: &OpenReport,
        format: OutputFormat,
    ) -> CliResult<()> {
        match format {
            OutputFormat::Json => {
                let mut roles = serde_json::Map::new();
                for role in Role::ALL {
                    let (count, capacity) = desk.usage(role);
                    let restore = report.for_role(role);
                    roles.insert(
                        role.as_str().to_string(),
                        serde_json::json!({
                            "count": count,
                            "capacity": capacity,
                            "file": desk.path(role).display().to_string(),
                            "loaded": restore.restored,
                            "load_status": format_restore(&restore),
                        }),
                    );
                }
                print_json(&roles)?;
            }
            OutputFormat::Table => {
                println!("Caredesk Statistics");
                println!("===================\n");

                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL_CONDENSED)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(["Role", "Count", "Capacity", "Usage", "Loaded", "File"]);

                for role in Role::ALL {
                    let (count, capacity) = desk.usage(role);
                    table.add_row([
                        role.as_str().to_string(),
                        count.to_string(),
                        capacity.to_string(),
                        format_usage(count, capacity),
                        format_restore(&report.for_role(role)),
                        desk.path(role).display().to_string(),
                    ]);
                }

                println!("{table}");
            }
        }

        Ok(())
    }
}

fn format_usage(count: usize, capacity: usize) -> String {
    if capacity == 0 {
        return "-".to_string();
    }
    format!("{:.0}%", count as f64 * 100.0 / capacity as f64)
}

/// Restored count plus the reason the restore stopped, if it was cut short
fn format_restore(report: &RestoreReport) -> String {
    match report.stop {
        RestoreStop::EndOfInput => report.restored.to_string(),
        RestoreStop::Missing => "0 (no file)".to_string(),
        RestoreStop::Unreadable => format!("{} (read failed)", report.restored),
        RestoreStop::Malformed { line } => {
            format!("{} (malformed at line {line})", report.restored)
        }
        RestoreStop::CapacityReached => format!("{} (capacity reached)", report.restored),
    }
}

use caredesk::record::TriageRecord;
use caredesk::render::TRIAGE_ORDER_NOTE;
use caredesk::{Desk, Render};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use crate::error::CliResult;
use crate::output::{OutputFormat, print_json, settle};

pub const MIN_PRIORITY: i32 = 0;
pub const MAX_PRIORITY: i32 = 100;

#[derive(Parser)]
pub struct TriageCommand {
    #[clap(subcommand)]
    pub command: TriageSubcommand,
}

#[derive(Subcommand)]
pub enum TriageSubcommand {
    #[clap(about = "Log an emergency case")]
    Log(LogArgs),

    #[clap(about = "Process the most critical case")]
    Process,

    #[clap(about = "List pending cases in heap order")]
    List,
}

#[derive(Parser)]
pub struct LogArgs {
    #[clap(
        value_parser = NonEmptyStringValueParser::new(),
        help = "Patient name"
    )]
    pub subject: String,

    #[clap(help = "Emergency category (e.g. Cardiac)")]
    pub category: String,

    #[clap(
        allow_negative_numbers = true,
        help = "Priority, 0 to 100; higher is more urgent"
    )]
    pub priority: i32,
}

/// Bring a priority into the accepted range
pub fn clamp_priority(priority: i32) -> i32 {
    priority.clamp(MIN_PRIORITY, MAX_PRIORITY)
}

impl TriageCommand {
    pub fn execute(&self, desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        match &self.command {
            TriageSubcommand::Log(args) => Self::log(desk, args, format),
            TriageSubcommand::Process => Self::process(desk, format),
            TriageSubcommand::List => Self::list(desk, format),
        }
    }

    fn log(desk: &mut Desk, args: &LogArgs, format: OutputFormat) -> CliResult<()> {
        let priority = clamp_priority(args.priority);
        if priority != args.priority {
            tracing::warn!("Priority {} clamped to {}", args.priority, priority);
        }

        let record = TriageRecord::new(&args.subject, &args.category, priority);
        settle(
            desk.log_emergency(record.clone())
                .map_err(|e| format!("Cannot log emergency: {e}"))?,
        );

        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "logged": record }))?,
            OutputFormat::Table => println!(
                "Logged {} emergency for {} at priority {}.",
                record.category, record.subject, record.priority
            ),
        }
        Ok(())
    }

    fn process(desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        if let (Some(next), OutputFormat::Table) = (desk.triage().peek_max(), format) {
            println!("Most critical: {} (priority {})", next.subject, next.priority);
        }

        let record = settle(
            desk.process_most_critical()
                .map_err(|e| format!("Cannot process emergency: {e}"))?,
        );

        match format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "processed": record,
                "remaining": desk.triage().len(),
            }))?,
            OutputFormat::Table => println!(
                "Processed {} ({}). {} case(s) remaining.",
                record.subject,
                record.category,
                desk.triage().len()
            ),
        }
        Ok(())
    }

    fn list(desk: &Desk, format: OutputFormat) -> CliResult<()> {
        let heap = desk.triage();
        match format {
            OutputFormat::Json => {
                let cases: Vec<_> = heap.iter().collect();
                print_json(&serde_json::json!({
                    "cases": cases,
                    "order": "heap",
                    "note": TRIAGE_ORDER_NOTE,
                }))?;
            }
            OutputFormat::Table => println!("{}", heap.render()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_priority() {
        assert_eq!(clamp_priority(-5), 0);
        assert_eq!(clamp_priority(42), 42);
        assert_eq!(clamp_priority(250), 100);
    }
}

use caredesk::record::IntakeRecord;
use caredesk::{Desk, Render};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use crate::error::CliResult;
use crate::output::{OutputFormat, print_json, settle};

#[derive(Parser)]
pub struct IntakeCommand {
    #[clap(subcommand)]
    pub command: IntakeSubcommand,
}

#[derive(Subcommand)]
pub enum IntakeSubcommand {
    #[clap(about = "Admit a patient at the back of the queue")]
    Admit(AdmitArgs),

    #[clap(about = "Discharge the earliest admitted patient")]
    Discharge,

    #[clap(about = "List waiting patients, earliest first")]
    List,
}

#[derive(Parser)]
pub struct AdmitArgs {
    #[clap(
        value_parser = NonEmptyStringValueParser::new(),
        help = "Patient ID (e.g. P0028)"
    )]
    pub id: String,

    #[clap(help = "Patient name")]
    pub name: String,

    #[clap(help = "Condition (e.g. Flu, Checkup)")]
    pub condition: String,
}

impl IntakeCommand {
    pub fn execute(&self, desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        match &self.command {
            IntakeSubcommand::Admit(args) => Self::admit(desk, args, format),
            IntakeSubcommand::Discharge => Self::discharge(desk, format),
            IntakeSubcommand::List => Self::list(desk, format),
        }
    }

    fn admit(desk: &mut Desk, args: &AdmitArgs, format: OutputFormat) -> CliResult<()> {
        let record = IntakeRecord::new(&args.id, &args.name, &args.condition);
        settle(
            desk.admit_patient(record.clone())
                .map_err(|e| format!("Cannot admit patient: {e}"))?,
        );

        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "admitted": record }))?,
            OutputFormat::Table => println!("Patient {} ({}) admitted.", record.id, record.name),
        }
        Ok(())
    }

    fn discharge(desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        let record = settle(
            desk.discharge_patient()
                .map_err(|e| format!("Cannot discharge: {e}"))?,
        );

        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "discharged": record }))?,
            OutputFormat::Table => println!(
                "Discharged {} ({}, {}).",
                record.id, record.name, record.condition
            ),
        }
        Ok(())
    }

    fn list(desk: &Desk, format: OutputFormat) -> CliResult<()> {
        let queue = desk.intake();
        match format {
            OutputFormat::Json => {
                let patients: Vec<_> = queue.iter().collect();
                print_json(&patients)?;
            }
            OutputFormat::Table => {
                println!("{}", queue.render());
                if !queue.is_empty() {
                    println!("\nWaiting: {} of {}", queue.len(), queue.capacity());
                }
            }
        }
        Ok(())
    }
}

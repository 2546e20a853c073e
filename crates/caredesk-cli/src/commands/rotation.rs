use caredesk::record::RotationRecord;
use caredesk::render::EMPTY_ROTATION;
use caredesk::{Desk, Render};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use crate::error::CliResult;
use crate::output::{OutputFormat, print_json, settle};

#[derive(Parser)]
pub struct RotationCommand {
    #[clap(subcommand)]
    pub command: RotationSubcommand,
}

#[derive(Subcommand)]
pub enum RotationSubcommand {
    #[clap(about = "Register an ambulance at the end of the rotation")]
    Register(RegisterArgs),

    #[clap(about = "End the current shift; the unit on duty moves to the back")]
    Rotate,

    #[clap(about = "Show the unit that is up next")]
    Next,

    #[clap(about = "List the rotation in duty order")]
    List,
}

#[derive(Parser)]
pub struct RegisterArgs {
    #[clap(
        value_parser = NonEmptyStringValueParser::new(),
        help = "Ambulance plate or tag"
    )]
    pub tag: String,
}

impl RotationCommand {
    pub fn execute(&self, desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        match &self.command {
            RotationSubcommand::Register(args) => Self::register(desk, args, format),
            RotationSubcommand::Rotate => Self::rotate(desk, format),
            RotationSubcommand::Next => Self::next(desk, format),
            RotationSubcommand::List => Self::list(desk, format),
        }
    }

    fn register(desk: &mut Desk, args: &RegisterArgs, format: OutputFormat) -> CliResult<()> {
        let record = RotationRecord::new(&args.tag);
        settle(
            desk.register_ambulance(record.clone())
                .map_err(|e| format!("Cannot register ambulance: {e}"))?,
        );

        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "registered": record }))?,
            OutputFormat::Table => println!("Ambulance {} registered.", record.tag),
        }
        Ok(())
    }

    fn rotate(desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        let next = settle(
            desk.rotate_shift()
                .map_err(|e| format!("Cannot rotate: {e}"))?,
        );

        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "next": next }))?,
            OutputFormat::Table => println!("Shift rotated. Next up: {}", next.tag),
        }
        Ok(())
    }

    fn next(desk: &Desk, format: OutputFormat) -> CliResult<()> {
        let next = desk.rotation().front();
        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "next": next }))?,
            OutputFormat::Table => match next {
                Some(record) => println!("Next up: {}", record.tag),
                None => println!("{EMPTY_ROTATION}"),
            },
        }
        Ok(())
    }

    fn list(desk: &Desk, format: OutputFormat) -> CliResult<()> {
        let queue = desk.rotation();
        match format {
            OutputFormat::Json => {
                let units: Vec<_> = queue.iter().collect();
                print_json(&units)?;
            }
            OutputFormat::Table => println!("{}", queue.render()),
        }
        Ok(())
    }
}

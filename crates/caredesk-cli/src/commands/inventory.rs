use caredesk::record::InventoryRecord;
use caredesk::render::EMPTY_INVENTORY;
use caredesk::{Desk, Render};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use crate::error::CliResult;
use crate::output::{OutputFormat, print_json, settle};

#[derive(Parser)]
pub struct InventoryCommand {
    #[clap(subcommand)]
    pub command: InventorySubcommand,
}

#[derive(Subcommand)]
pub enum InventorySubcommand {
    #[clap(about = "Add a supply batch on top of the stack")]
    Add(AddArgs),

    #[clap(about = "Use the most recent batch of a supply type")]
    Use(UseArgs),

    #[clap(about = "Use the most recently added batch of any type")]
    Pop,

    #[clap(about = "List supplies, most recent first")]
    List,
}

#[derive(Parser)]
pub struct AddArgs {
    #[clap(
        value_parser = NonEmptyStringValueParser::new(),
        help = "Supply type (e.g. Gauze)"
    )]
    pub r#type: String,

    #[clap(
        value_parser = clap::value_parser!(i32).range(1..),
        help = "Units in the batch (at least 1)"
    )]
    pub quantity: i32,

    #[clap(help = "Batch label")]
    pub batch: String,
}

#[derive(Parser)]
pub struct UseArgs {
    #[clap(help = "Supply type to use; omit to list the types in stock")]
    pub r#type: Option<String>,
}

impl InventoryCommand {
    pub fn execute(&self, desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        match &self.command {
            InventorySubcommand::Add(args) => Self::add(desk, args, format),
            InventorySubcommand::Use(args) => Self::use_supply(desk, args, format),
            InventorySubcommand::Pop => Self::pop(desk, format),
            InventorySubcommand::List => Self::list(desk, format),
        }
    }

    fn add(desk: &mut Desk, args: &AddArgs, format: OutputFormat) -> CliResult<()> {
        let record = InventoryRecord::new(&args.r#type, args.quantity, &args.batch);
        settle(
            desk.add_supply(record.clone())
                .map_err(|e| format!("Cannot add supply: {e}"))?,
        );

        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "added": record }))?,
            OutputFormat::Table => println!(
                "Added {} x {} (batch {}).",
                record.quantity, record.kind, record.batch
            ),
        }
        Ok(())
    }

    fn use_supply(desk: &mut Desk, args: &UseArgs, format: OutputFormat) -> CliResult<()> {
        let Some(kind) = args.r#type.as_deref() else {
            return Self::list_types(desk, format);
        };

        let record = settle(
            desk.use_supply(kind)
                .map_err(|e| format!("Cannot use supply: {e}"))?,
        );
        Self::print_used(&record, format)
    }

    fn pop(desk: &mut Desk, format: OutputFormat) -> CliResult<()> {
        let record = settle(
            desk.use_last_supply()
                .map_err(|e| format!("Cannot use supply: {e}"))?,
        );
        Self::print_used(&record, format)
    }

    fn print_used(record: &InventoryRecord, format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Json => print_json(&serde_json::json!({ "used": record }))?,
            OutputFormat::Table => println!(
                "Used {} x {} (batch {}).",
                record.quantity, record.kind, record.batch
            ),
        }
        Ok(())
    }

    fn list_types(desk: &Desk, format: OutputFormat) -> CliResult<()> {
        let kinds = desk.inventory().distinct_keys();

        match format {
            OutputFormat::Json => print_json(&kinds)?,
            OutputFormat::Table => {
                if kinds.is_empty() {
                    println!("{EMPTY_INVENTORY}");
                } else {
                    println!("Types in stock: {}", kinds.join(", "));
                    println!("Run `caredesk inventory use <TYPE>` to use one.");
                }
            }
        }
        Ok(())
    }

    fn list(desk: &Desk, format: OutputFormat) -> CliResult<()> {
        let stack = desk.inventory();
        match format {
            OutputFormat::Json => {
                let supplies: Vec<_> = stack.iter().rev().collect();
                print_json(&supplies)?;
            }
            OutputFormat::Table => {
                println!("{}", stack.render());
                if !stack.is_empty() {
                    println!("\nBatches: {} of {}", stack.len(), stack.capacity());
                }
            }
        }
        Ok(())
    }
}

use std::path::Path;

use caredesk::{Config, Role};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use crate::error::CliResult;
use crate::output::{OutputFormat, print_json};

#[derive(Parser)]
pub struct ConfigCommand {
    #[clap(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    #[clap(about = "Show the effective configuration")]
    Show,
}

impl ConfigCommand {
    pub fn execute(
        &self,
        config: &Config,
        config_path: Option<&Path>,
        format: OutputFormat,
    ) -> CliResult<()> {
        match &self.command {
            ConfigSubcommand::Show => Self::show(config, config_path, format),
        }
    }

    fn show(config: &Config, config_path: Option<&Path>, format: OutputFormat) -> CliResult<()> {
        match format {
            OutputFormat::Json => print_json(config)?,
            OutputFormat::Table => {
                match config_path {
                    Some(path) => println!("Configuration from: {}", path.display()),
                    None => println!("Configuration: (defaults or first config file found)"),
                }
                println!("==============================\n");

                println!("[Storage]");
                let mut storage_table = settings_table();
                storage_table.add_row([
                    "data_dir".to_string(),
                    config.storage.data_dir.display().to_string(),
                ]);
                for role in Role::ALL {
                    storage_table.add_row([
                        format!("{}_file", role.as_str()),
                        config.storage.path_for(role).display().to_string(),
                    ]);
                }
                println!("{storage_table}\n");

                println!("[Capacity]");
                let mut capacity_table = settings_table();
                for role in Role::ALL {
                    capacity_table.add_row([
                        role.as_str().to_string(),
                        config.capacity.for_role(role).to_string(),
                    ]);
                }
                println!("{capacity_table}");
            }
        }

        Ok(())
    }
}

fn settings_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Setting", "Value"]);
    table
}

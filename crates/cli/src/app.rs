use crate::cli::{Cli, Commands};
use crate::json::ErrorJson;
use anyhow::Result;
use console::style;

pub fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    let result = match cli.command {
        Commands::Package {
            input,
            signature,
            aggregate_key,
            output_dir,
            digest_algorithm,
        } => crate::package::package_file(
            input,
            signature,
            aggregate_key,
            output_dir,
            digest_algorithm,
            json,
        ),

        Commands::Inspect { input } => crate::commands::inspect_descriptor(input, json),
    };

    if let Err(e) = &result {
        if json {
            let causes: Vec<String> = e.chain().skip(1).map(|c| c.to_string()).collect();
            let payload = ErrorJson {
                status: "error",
                error: e.to_string(),
                causes,
            };
            println!("{}", serde_json::to_string(&payload)?);
        } else {
            eprintln!("\n{} {}", style("[ERROR]").red().bold(), style(&e).red());

            for (i, cause) in e.chain().skip(1).enumerate() {
                if i == 0 {
                    eprintln!("\n    Caused by:");
                }
                eprintln!("      - {}", style(cause).red());
            }
            eprintln!();
        }
    }

    result
}

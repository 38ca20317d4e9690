use clap::Parser;
use omata_validate::application::ValidateService;
use omata_validate::cli::{format_failure, format_success, Cli};
use omata_validate::domain::{OutputFormat, UnknownKeys};
use omata_validate::error::ValidateError;
use omata_validate::infrastructure::{init_logging, Config};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<i32, ValidateError> {
    let config = Config::load(cli.config.as_deref())?;

    // Command-line options win over config
    let unknown_keys = if cli.strict {
        UnknownKeys::Reject
    } else {
        config.unknown_keys
    };
    let format = cli.format.unwrap_or(config.format);

    let service = ValidateService::new(unknown_keys)?;

    if cli.print_schema {
        println!("{:#}", service.schema().to_json());
        return Ok(0);
    }

    let file = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&config.default_file));
    tracing::debug!(
        file = %file.display(),
        unknown_keys = ?service.schema().unknown_keys(),
        ?format,
        "validating"
    );

    match service.validate_file(&file) {
        Ok(_) => {
            println!("{}", format_success(format, &file));
            Ok(0)
        }
        Err(e) => match e.as_validation() {
            Some(issues) => {
                let report = format_failure(format, &file, issues);
                match format {
                    OutputFormat::Text => eprintln!("{}", report),
                    OutputFormat::Json => println!("{}", report),
                }
                Ok(e.exit_code())
            }
            None => Err(e),
        },
    }
}

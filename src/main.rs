use clap::Parser;
use mdcal::application::GenerateCalendarService;
use mdcal::cli::Cli;
use mdcal::error::CalendarError;
use mdcal::infrastructure::GeneratorConfig;
use mdcal::logging;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CalendarError> {
    // Validate arguments before touching the file system
    let config = GeneratorConfig::from_cli(&cli)?;
    logging::init(config.debug);

    GenerateCalendarService::new(config).execute()?;
    Ok(())
}

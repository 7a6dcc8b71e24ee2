use clap::Parser;
use ipv4_subnet_calc::cli::{resolve_config, run, Cli, Outcome};
use ipv4_subnet_calc::output::print_error;
use ipv4_subnet_calc::CalcConfig;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::io::IsTerminal;
use std::process::ExitCode;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if std::path::Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    // no config file, warnings to stderr
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let cli = Cli::parse();
    let config = resolve_config(&cli, CalcConfig::from_env()?);

    match run(&cli.cidr, &config, std::io::stdout().is_terminal())? {
        Outcome::Rendered(out) => {
            print!("{out}");
            if !out.ends_with('\n') {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Invalid(message) => {
            print_error(&message);
            Ok(ExitCode::from(2))
        }
    }
}

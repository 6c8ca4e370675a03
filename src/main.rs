use std::process::ExitCode;

use clap::Parser;
use furnace_opt::{AppConfig, FurnaceOptimizer, LoggingConfig, SolverFactory};

mod cli;

use cli::{Cli, Command, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Command::Solve {
            config,
            backend,
            format,
        } => {
            let config = AppConfig::load(&config)?;
            config.logging.init();

            let furnaces = config.furnace_set()?;
            let mut solver_config = config.solver_config();
            if let Some(backend) = backend {
                solver_config.backend = backend;
            }

            let optimizer = FurnaceOptimizer::from_config(solver_config)?;
            let outcome = optimizer.optimize(&furnaces)?;

            match format {
                OutputFormat::Table => print!("{}", cli::TableReport(&outcome)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
            }

            if outcome.is_optimal() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(2))
            }
        }
        Command::Validate { config } => {
            let config = AppConfig::load(&config)?;
            config.logging.init();

            let furnaces = config.furnace_set()?;
            let optimizer = FurnaceOptimizer::from_config(config.solver_config())?;
            let problem = optimizer.build(&furnaces)?;

            print!(
                "{}",
                cli::ModelSummary {
                    problem: &problem,
                    solver: optimizer.solver_name(),
                }
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Solvers => {
            LoggingConfig::default().init();

            let available = SolverFactory::available_backends();
            if available.is_empty() {
                println!("No solver backends compiled in");
            }
            for backend in available {
                println!("{}", backend);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

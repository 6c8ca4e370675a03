// Command line interface: argument parsing and report rendering

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use furnace_opt::{OptimizationOutcome, OptimizationProblem, SolverBackend};

#[derive(Debug, Parser)]
#[command(
    name = "furnace-opt",
    version,
    about = "Optimal natural gas allocation across parallel blast furnaces"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve the gas allocation for a plant configuration
    Solve {
        /// Plant configuration file
        #[arg(short, long, default_value = "furnaces.toml")]
        config: PathBuf,

        /// Override the solver backend from the configuration
        #[arg(short, long)]
        backend: Option<SolverBackend>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Check a plant configuration and print the model size
    Validate {
        /// Plant configuration file
        #[arg(short, long, default_value = "furnaces.toml")]
        config: PathBuf,
    },

    /// List the solver backends compiled into this build
    Solvers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Human-readable solve report
pub struct TableReport<'a>(pub &'a OptimizationOutcome);

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = self.0;
        writeln!(f, "Solver status: {} ({})", outcome.status, outcome.solver)?;

        let Some(report) = &outcome.report else {
            writeln!(f, "\nNo optimal solution found. Possible causes:")?;
            writeln!(f, "- Inconsistent constraints")?;
            writeln!(f, "- Not enough resources to reach the required production")?;
            return writeln!(f, "- Errors in the input data");
        };

        writeln!(f, "\nOptimal solution found!\n")?;
        writeln!(f, "| Furnace | Gas (m³/h) | Coke (t/h) | Production (t/h) | Si (%) |")?;
        writeln!(f, "|---------|------------|------------|------------------|--------|")?;
        for furnace in &report.furnaces {
            writeln!(
                f,
                "| {:>7} | {:>10.2} | {:>10.2} | {:>16.2} | {:>6.4} |",
                furnace.furnace, furnace.gas, furnace.coke, furnace.production, furnace.quality
            )?;
        }

        writeln!(f, "\nTotal gas: {:.2} m³/h", report.total_gas)?;
        writeln!(f, "Total coke: {:.2} t/h", report.total_coke)?;
        writeln!(f, "Total production: {:.2} t/h", report.total_production)?;
        writeln!(f, "Mean Si: {:.4}%", report.mean_quality)?;
        writeln!(f, "\nObjective Z: {:.4}", report.objective)
    }
}

/// Model size printed by `validate`
pub struct ModelSummary<'a> {
    pub problem: &'a OptimizationProblem,
    pub solver: &'a str,
}

impl fmt::Display for ModelSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration is valid")?;
        writeln!(f, "Solver: {}", self.solver)?;
        writeln!(f, "Variables: {}", self.problem.num_variables())?;
        writeln!(f, "Constraints: {}", self.problem.num_constraints())?;
        for var in &self.problem.variables {
            writeln!(f, "  {} in [{}, {}]", var.name, var.lower_bound, var.upper_bound)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furnace_opt::{FurnaceOutcome, FurnaceReport, SolutionStatus};

    fn outcome(report: Option<FurnaceReport>, status: SolutionStatus) -> OptimizationOutcome {
        OptimizationOutcome {
            status,
            solver: "microlp".into(),
            message: String::new(),
            statistics: Default::default(),
            report,
        }
    }

    #[test]
    fn parses_solve_with_backend_override() {
        let cli = Cli::try_parse_from([
            "furnace-opt",
            "solve",
            "--config",
            "plant.toml",
            "--backend",
            "highs",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Solve {
                config,
                backend,
                format,
            } => {
                assert_eq!(config, PathBuf::from("plant.toml"));
                assert_eq!(backend, Some(SolverBackend::Highs));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["furnace-opt", "solve", "--backend", "glop"]).is_err());
    }

    #[test]
    fn table_lists_each_furnace_and_totals() {
        let report = FurnaceReport {
            furnaces: vec![FurnaceOutcome {
                furnace: "1".into(),
                gas: 20000.0,
                coke: 61.3,
                production: 151.514,
                quality: 0.68537,
            }],
            total_gas: 20000.0,
            total_coke: 61.3,
            total_production: 151.514,
            mean_quality: 0.68537,
            objective: 20.456,
        };
        let text = TableReport(&outcome(Some(report), SolutionStatus::Optimal)).to_string();

        assert!(text.starts_with("Solver status: OPTIMAL (microlp)"));
        assert!(text.contains("|       1 |   20000.00 |      61.30 |           151.51 | 0.6854 |"));
        assert!(text.contains("Total production: 151.51 t/h"));
        assert!(text.contains("Objective Z: 20.4560"));
    }

    #[test]
    fn table_explains_missing_solution() {
        let text = TableReport(&outcome(None, SolutionStatus::Infeasible)).to_string();
        assert!(text.contains("INFEASIBLE"));
        assert!(text.contains("No optimal solution found"));
        assert!(text.ends_with("- Errors in the input data\n"));
    }

    #[test]
    fn summary_lists_variable_bounds() {
        let problem = OptimizationProblem::new(furnace_opt::ObjectiveFunction::maximize(vec![1.0]))
            .with_variables(vec![furnace_opt::Variable::continuous("gas_0").with_bounds(10.0, 20.0)]);
        let text = ModelSummary {
            problem: &problem,
            solver: "microlp",
        }
        .to_string();

        assert!(text.contains("Solver: microlp"));
        assert!(text.contains("Variables: 1"));
        assert!(text.contains("Constraints: 0"));
        assert!(text.contains("  gas_0 in [10, 20]"));
    }
}

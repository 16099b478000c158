// Mathagent - step-by-step math solutions from a hosted model
// Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use mathagent::classifier::{ClassifierTables, RelevanceClassifier};
use mathagent::config::load_config;
use mathagent::pipeline::{process_problem, Outcome};
use mathagent::providers::create_provider;
use mathagent::server::{self, AppState, EXAMPLE_PROBLEMS};
use mathagent::solver::ProblemSolver;

/// Solve math problems with step-by-step explanations
#[derive(Parser, Debug)]
#[command(name = "mathagent", version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.mathagent/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the web tool
    Serve {
        /// Bind address, overrides the config file
        #[arg(long)]
        bind: Option<String>,
    },
    /// Solve one problem and print the result
    Solve {
        /// The problem text
        #[arg(required = true)]
        problem: Vec<String>,

        /// Ask the model whether the problem is complete before solving
        #[arg(long)]
        check_clarity: bool,
    },
    /// Report whether text looks like a math question
    Check {
        #[arg(required = true)]
        text: Vec<String>,

        /// JSON classifier tables replacing the built-ins
        #[arg(long)]
        tables: Option<PathBuf>,
    },
    /// List the example problems
    Examples,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    mathagent::logging::init(cli.verbose);

    match cli.command {
        Commands::Serve { bind } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            let addr = config.bind_address()?;

            let solver = ProblemSolver::new(create_provider(&config)?);
            let classifier = RelevanceClassifier::from_config(&config.classifier)?;

            server::serve(AppState::new(solver, classifier), addr).await?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Solve {
            problem,
            check_clarity,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let solver = ProblemSolver::new(create_provider(&config)?);
            let classifier = RelevanceClassifier::from_config(&config.classifier)?;
            let problem = problem.join(" ");

            if check_clarity && classifier.is_math_related(&problem) {
                let verdict = solver.validate_clarity(&problem).await;
                if !verdict.is_clear {
                    println!("Note: the problem may need clarification.\n{}\n", verdict.note);
                }
            }

            let outcome = process_problem(&solver, &classifier, &problem).await;
            Ok(print_outcome(&outcome))
        }

        Commands::Check { text, tables } => {
            let tables = match tables {
                Some(path) => ClassifierTables::load_from_file(&path)?,
                None => ClassifierTables::default(),
            };
            let classifier = RelevanceClassifier::new(tables)?;
            let relevance = classifier.classify(&text.join(" "));

            if relevance.is_match() {
                println!("math-related (matched by {})", relevance.as_str());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("not math-related");
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Examples => {
            for (i, example) in EXAMPLE_PROBLEMS.iter().enumerate() {
                println!("{}. {}", i + 1, example);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_outcome(outcome: &Outcome) -> ExitCode {
    let (_, message) = outcome.banner();

    match outcome {
        Outcome::Solved { problem, solution } => {
            println!("{message}\n");
            println!("## Problem Statement\n\n{problem}\n");
            println!("## Solution\n\n{solution}");
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("{message}");
            if let Some(hint) = outcome.hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

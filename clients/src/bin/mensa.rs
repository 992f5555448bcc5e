//! `mensa`: Generates and solves Mensa puzzle questions.
//!
//! Every question is a pure function of `(test_id, question_idx)`; nothing is
//! stored between invocations.
//!
//! **Usage:**
//! ```text
//! mensa question <TEST_ID> <QUESTION_IDX> [--json]
//! mensa solve <TEST_ID> <QUESTION_IDX> [--json]
//! mensa test <TEST_ID>
//! mensa sample [--test-id <N>] [--count <K>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mensa::{generate_question, generate_test, solve_question, QUESTIONS_PER_TEST};
use mensa_clients::init_tracing;
use serde_json::json;
use tracing::debug;

/// Generate and solve deterministic puzzle questions.
#[derive(Parser)]
#[command(name = "mensa", about = "Generate and solve deterministic puzzle questions")]
struct Args {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the prompt of one question.
    Question {
        /// Test id, 1..=1000.
        test_id: u32,
        /// Question index, 1..=100.
        question_idx: u32,
        /// Print the full question (with rule parameters) as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the answer to one question.
    Solve {
        /// Test id, 1..=1000.
        test_id: u32,
        /// Question index, 1..=100.
        question_idx: u32,
        /// Print the answer as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print all 100 questions of a test as JSON.
    Test {
        /// Test id, 1..=1000.
        test_id: u32,
    },
    /// Print the first questions of a test with their answers.
    Sample {
        /// Test id, 1..=1000.
        #[arg(long, default_value_t = 1)]
        test_id: u32,
        /// Number of questions to print.
        #[arg(long, default_value_t = 15)]
        count: u32,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Question {
            test_id,
            question_idx,
            json,
        } => {
            let question = generate_question(test_id, question_idx)
                .with_context(|| format!("Failed to generate T{test_id}/Q{question_idx}"))?;
            debug!(domain = %question.domain, local_idx = question.local_idx, "generated");
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&question)
                        .context("Failed to serialize question")?
                );
            } else {
                println!("{}", question.prompt);
            }
        }
        Command::Solve {
            test_id,
            question_idx,
            json,
        } => {
            let answer = solve_question(test_id, question_idx)
                .with_context(|| format!("Failed to solve T{test_id}/Q{question_idx}"))?;
            if json {
                let value = json!({
                    "test_id": test_id,
                    "question_idx": question_idx,
                    "answer": answer,
                    "display": answer.to_string(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&value).context("Failed to serialize answer")?
                );
            } else {
                println!("{answer}");
            }
        }
        Command::Test { test_id } => {
            let questions = generate_test(test_id)
                .with_context(|| format!("Failed to generate test {test_id}"))?;
            debug!(test_id, questions = questions.len(), "generated test");
            println!(
                "{}",
                serde_json::to_string_pretty(&questions).context("Failed to serialize test")?
            );
        }
        Command::Sample { test_id, count } => {
            let count = count.min(QUESTIONS_PER_TEST);
            for question_idx in 1..=count {
                let question = generate_question(test_id, question_idx)
                    .with_context(|| format!("Failed to generate T{test_id}/Q{question_idx}"))?;
                let answer = solve_question(test_id, question_idx)
                    .with_context(|| format!("Failed to solve T{test_id}/Q{question_idx}"))?;
                println!("{}", "=".repeat(60));
                println!("{}", question.prompt);
                println!();
                println!("Answer: {answer}");
            }
        }
    }

    Ok(())
}

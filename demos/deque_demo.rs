//! Command-line driver for `CenteredDeque`.
//!
//! ```text
//! deque_demo scenario
//! deque_demo run --stats +b:two +f:one -b +b:three
//! ```

use anyhow::{bail, Context, Result};
use centered_deque::CenteredDeque;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deque_demo")]
#[command(about = "Exercise a centered array deque", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Push four words at alternating ends and print the result
    Scenario,
    /// Apply operations in order: `+f:VALUE`, `+b:VALUE`, `-f`, `-b`
    Run {
        /// Operations to apply
        #[arg(required = true, allow_hyphen_values = true)]
        ops: Vec<String>,

        /// Print the resize statistics after the contents
        #[arg(long, default_value_t = false)]
        stats: bool,
    },
}

enum Op {
    PushFront(String),
    PushBack(String),
    PopFront,
    PopBack,
}

fn parse_op(raw: &str) -> Result<Op> {
    let op = match raw {
        "-f" => Op::PopFront,
        "-b" => Op::PopBack,
        _ => match raw.split_once(':') {
            Some(("+f", value)) => Op::PushFront(value.to_owned()),
            Some(("+b", value)) => Op::PushBack(value.to_owned()),
            _ => bail!("unrecognized operation `{raw}`"),
        },
    };
    Ok(op)
}

fn apply(deque: &mut CenteredDeque<String>, raw: &str) -> Result<()> {
    match parse_op(raw)? {
        Op::PushFront(value) => deque.push_front(value),
        Op::PushBack(value) => deque.push_back(value),
        Op::PopFront => {
            let value = deque.try_pop_front().with_context(|| format!("applying `{raw}`"))?;
            println!("removed {value}");
        }
        Op::PopBack => {
            let value = deque.try_pop_back().with_context(|| format!("applying `{raw}`"))?;
            println!("removed {value}");
        }
    }
    Ok(())
}

fn run_scenario() -> Result<()> {
    let mut deque = CenteredDeque::new();
    deque.push_front("one");
    deque.push_back("two");
    deque.push_back("three");
    deque.push_front("four");

    let mut iter = deque.iter();
    while iter.has_next() {
        let word = iter.try_next()?;
        println!("{word}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scenario => run_scenario()?,
        Commands::Run { ops, stats } => {
            let mut deque = CenteredDeque::new();
            for raw in &ops {
                apply(&mut deque, raw)?;
            }
            println!("{}", serde_json::to_string(&deque)?);
            if stats {
                println!("{}", serde_json::to_string_pretty(&deque.stats())?);
            }
        }
    }

    Ok(())
}

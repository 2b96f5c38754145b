mod cli;

use std::{process, time::Instant};

use clap::Parser;
use cli::{Cli, Command};
use tally::{Environment, ErrorKind};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(why) = run(cli.command) {
        eprintln!("error: {why}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), ErrorKind> {
    match command {
        Command::Parse { expr } => {
            let expr = tally::parse(&expr)?;
            println!("{expr}");
        }
        Command::Eval { expr, vars, time } => {
            let env: Environment = vars.into_iter().collect();

            let now = Instant::now();
            let value = tally::eval_str(&expr, &env)?;
            let duration = now.elapsed();

            println!("{value}");
            if time {
                println!("\n> Duration: {duration:.2?}");
            }
        }
        Command::Bench {
            expr,
            vars,
            iterations,
        } => {
            let env: Environment = vars.into_iter().collect();

            let now = Instant::now();
            let parsed = tally::parse(&expr)?;
            let parse_duration = now.elapsed();

            let now = Instant::now();
            let mut value = 0;
            for _ in 0..iterations {
                value = tally::evaluate(&parsed, &env)?;
            }
            let duration = now.elapsed();

            println!("{value}");
            println!("\n> Parse: {parse_duration:.2?}");
            println!("> Eval:  {duration:.2?} for {iterations} iterations");
            if iterations > 0 {
                println!("> Per iteration: {:.2?}", duration / iterations);
            }
        }
    }

    Ok(())
}

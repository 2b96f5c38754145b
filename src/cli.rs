#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the parsed expression with only the parentheses it needs
    Parse { expr: String },

    /// Evaluate an expression
    Eval {
        expr: String,

        /// Bind a variable, e.g. `-v A=3`
        #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
        vars: Vec<(String, i64)>,

        /// Print how long parsing and evaluation took
        #[arg(short, long)]
        time: bool,
    },

    /// Parse once, then evaluate the same tree repeatedly
    Bench {
        expr: String,

        /// Bind a variable, e.g. `-v A=3`
        #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
        vars: Vec<(String, i64)>,

        /// Number of evaluations
        #[arg(short = 'n', long, default_value_t = 100_000)]
        iterations: u32,
    },
}

fn parse_binding(s: &str) -> Result<(String, i64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found `{s}`"))?;
    let name = name.trim();

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(format!("`{name}` is not a valid variable name"));
    }

    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|why| format!("invalid value for `{name}`: {why}"))?;

    Ok((name.to_string(), value))
}

#[cfg(test)]
mod test {
    use super::{parse_binding, Cli, Command};
    use clap::Parser;

    #[test]
    fn binding() {
        assert_eq!(parse_binding("A=3"), Ok(("A".to_string(), 3)));
        assert_eq!(parse_binding(" Ab = -12 "), Ok(("Ab".to_string(), -12)));
        assert!(parse_binding("A").is_err());
        assert!(parse_binding("A1=3").is_err());
        assert!(parse_binding("=3").is_err());
        assert!(parse_binding("A=x").is_err());
    }

    #[test]
    fn eval_command() {
        let args = ["tally", "eval", "A+B", "-v", "A=1", "--var", "B=2"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Command::Eval { expr, vars, time } => {
                assert_eq!(expr, "A+B");
                assert_eq!(vars, vec![("A".to_string(), 1), ("B".to_string(), 2)]);
                assert!(!time);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bench_defaults() {
        let cli = Cli::try_parse_from(["tally", "bench", "1+1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Bench {
                iterations: 100_000,
                ..
            }
        ));
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "intcalc", about = "Integer calculator: + - * / % ^ ( ) sqrt()")]
struct Cli {
    /// Expression to evaluate once, skips the interactive prompt
    expr: Vec<String>,
    /// Prompt shown before each line
    #[arg(long, default_value = "Expression: ")]
    prompt: String,
    /// History file, defaults to ~/.intcalc_history
    #[arg(long, conflicts_with = "no_history")]
    history: Option<PathBuf>,
    /// Don't load or save line history
    #[arg(long)]
    no_history: bool,
    /// Print the parsed tree before the result
    #[arg(long)]
    tree: bool,
}

mod repl {
    use intcalc::{interpreter, Ast, Calculator, EvalError, Integer};

    // parse once, hand back the tree along with its value
    pub fn evalexpr(calc: &Calculator, input: &str) -> Result<(Ast, Integer), EvalError> {
        let ast = calc.parse(input)?;
        let value = interpreter::eval(&ast)?;
        Ok((ast, value))
    }

    pub fn print_outcome(outcome: &Result<(Ast, Integer), EvalError>, tree: bool) {
        match outcome {
            Ok((ast, value)) => {
                if tree {
                    println!("{}", ast);
                }
                println!("{}", value);
            }
            Err(e) => println!("{}", e),
        }
    }

    pub fn parse_statement(calc: &mut Calculator, input: &str, tree: bool) {
        let outcome = evalexpr(calc, input);
        print_outcome(&outcome, tree);
        if outcome.is_err() {
            calc.reset();
        }
    }

    #[cfg(test)]
    mod tests {
        use super::evalexpr;
        use intcalc::{Calculator, EvalError, RuntimeError};

        #[test]
        fn tree_and_value_together() {
            let calc = Calculator::new();
            let (ast, value) = evalexpr(&calc, "9-5-2").unwrap();
            assert_eq!(ast.to_string(), "(9 - (5 - 2))");
            assert_eq!(value, 6);
            assert_eq!(calc.calculate("9-5-2"), Ok(value));
        }

        #[test]
        fn errors_from_either_stage() {
            let calc = Calculator::new();
            assert!(matches!(evalexpr(&calc, "1+"), Err(EvalError::Parse(_))));
            assert_eq!(evalexpr(&calc, "sqrt(2-3)"),
                       Err(EvalError::Runtime(RuntimeError::NegativeSqrtOperand(-1))));
        }
    }
}

fn history_path(cli: &Cli) -> Option<PathBuf> {
    if cli.no_history {
        return None;
    }
    cli.history.clone()
        .or_else(|| dirs::home_dir().map(|h| h.join(".intcalc_history")))
}

fn interactive(cli: &Cli) -> anyhow::Result<()> {
    use rustyline::error::ReadlineError;

    let mut calc = intcalc::Calculator::new();
    let histpath = history_path(cli);
    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline(&cli.prompt) {
            Ok(input) => {
                if !input.trim().is_empty() {
                    rl.add_history_entry(input.as_str())?;
                }
                repl::parse_statement(&mut calc, &input, cli.tree);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            log::warn!("failed saving history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if !cli.expr.is_empty() {
        let input = cli.expr.join(" ");
        let calc = intcalc::Calculator::new();
        return match repl::evalexpr(&calc, &input) {
            Ok((ast, result)) => {
                if cli.tree {
                    println!("{}", ast);
                }
                println!("{}", result);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    match interactive(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("intcalc: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

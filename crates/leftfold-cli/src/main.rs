use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use leftfold::context::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
use leftfold::{diagnostic, EvalContext, Interpreter, Node, TreeShape};
use serde::Serialize;

/// Evaluate a whitespace-separated integer expression strictly left to right.
///
/// `1 + 2 - 3` is evaluated as `(1 + 2) - 3`; there is no operator
/// precedence and no parentheses.
#[derive(Parser, Debug)]
#[command(name = "leftfold", version, about, long_about = None)]
struct Args {
    /// Trace each pipeline stage to stderr.
    #[arg(long)]
    trace: bool,

    /// Maximum number of operators in one expression.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH as u64,
        value_parser = clap::value_parser!(u64).range(..=MAX_DEPTH_CEILING as u64)
    )]
    max_depth: u64,

    /// Print the parenthesized tree before the result.
    #[arg(long)]
    tree: bool,

    /// Print a JSON report with the tree, its shape and the result.
    #[arg(long, conflicts_with = "tree")]
    json: bool,

    /// The expression. Read from stdin when omitted. Options must come
    /// before it.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    expression: &'a str,
    tree: &'a Node,
    shape: TreeShape,
    result: i64,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = read_source(args)?;
    let max_depth = usize::try_from(args.max_depth).unwrap_or(MAX_DEPTH_CEILING);
    let ctx = EvalContext::with_max_depth(max_depth).traced(args.trace);
    let interpreter = Interpreter::with_context(ctx);

    let tree = interpreter
        .parse(&source)
        .map_err(|e| anyhow!(diagnostic::render(&e, &source)))?;
    let result = interpreter.evaluate(&tree);

    if args.json {
        let report = Report {
            expression: &source,
            tree: &tree,
            shape: tree.shape(),
            result,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{}", json);
        return Ok(());
    }

    if args.tree {
        println!("{}", tree);
    }
    println!("{}", result);
    Ok(())
}

fn read_source(args: &Args) -> anyhow::Result<String> {
    if let Some(flag) = args.expression.iter().find(|arg| arg.starts_with("--")) {
        bail!(
            "error: option `{}` found after the expression; options must come first",
            flag
        );
    }
    if !args.expression.is_empty() {
        return Ok(args.expression.join(" "));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Reading expression from stdin; finish with Ctrl-D");
    }
    let source = io::read_to_string(stdin).context("failed to read expression from stdin")?;
    Ok(source.trim_end().to_string())
}

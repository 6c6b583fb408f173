use clap::Parser as ClapParser;
use exprtree::interpreter::{
    evaluator::render::format_number,
    parser::{core::Parser, trace::TRACE_TARGET},
};
use log::LevelFilter;

const DEFAULT_EXPRESSION: &str = "12 * (5 - 6)";

/// exprtree parses an arithmetic expression and prints its value or its
/// parsed tree.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the parsed tree in postfix notation instead of its value.
    #[arg(short, long)]
    parse: bool,

    /// Trace every grammar rule and token the parser goes through.
    #[arg(short, long)]
    debug: bool,

    /// The expression. Multiple arguments are joined with spaces.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn)
           .parse_default_env()
           .format_timestamp(None);
    if debug {
        builder.filter_module(TRACE_TARGET, LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let expression = if args.expression.is_empty() {
        DEFAULT_EXPRESSION.to_string()
    } else {
        args.expression.join(" ")
    };
    log::info!("expression: {expression}");

    let parser = Parser::new(&expression).debug(args.debug);
    let output = if args.parse {
        parser.parsed()
    } else {
        parser.evaluate().map(format_number)
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

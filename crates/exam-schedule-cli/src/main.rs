mod cli;
mod convert_cmd;
mod title_cmd;

use clap::Parser;
use cli::Cli;
use env_logger::Env;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match cli.command {
        cli::Commands::Convert {
            ref input,
            ref output,
            ref strategy,
            snap_tolerance,
            join_tolerance,
            text_tolerance,
            ref rows,
            ref columns,
            ref layout,
            ref password,
        } => convert_cmd::run(
            input,
            output,
            &convert_cmd::Tuning {
                strategy: strategy.clone(),
                snap_tolerance,
                join_tolerance,
                text_tolerance,
                rows: rows.clone(),
                columns: columns.clone(),
            },
            layout.as_deref(),
            password.as_deref(),
        ),
        cli::Commands::SetTitle {
            ref exam_name,
            ref semester,
            ref file,
        } => title_cmd::run(file, exam_name, semester),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

/// Log to stderr at `info` unless `RUST_LOG` or `-v`/`-q` say otherwise.
fn init_logging(cli: &Cli) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

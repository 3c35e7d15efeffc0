mod cli;
mod decode_cmd;
mod encode_cmd;
mod shared;
mod tables_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Decode {
            ref file,
            ref output,
            strict,
            ref format,
            ref table_dir,
        } => decode_cmd::run(
            file,
            output.as_deref(),
            strict,
            format,
            table_dir.as_deref(),
        ),
        cli::Commands::Encode {
            ref file,
            ref output,
            strict,
            ref table_dir,
        } => encode_cmd::run(file, output.as_deref(), strict, table_dir.as_deref()),
        cli::Commands::Tables {
            ref table_dir,
            ref format,
        } => tables_cmd::run(table_dir.as_deref(), format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

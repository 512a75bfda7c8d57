//! The `folio` binary.

use clap::Parser;
use folio_cli::{CliArgs, FolioCli};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let cli = match FolioCli::from_args("folio", &args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = cli.run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

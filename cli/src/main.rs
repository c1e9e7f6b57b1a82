#![deny(missing_docs)]

//! # Apiplay CLI
//!
//! Terminal front end for the API playground.
//!
//! Supported Commands:
//! - `endpoints`: List endpoints grouped by tag.
//! - `sample`: Print the generated request body of an endpoint.
//! - `snippet`: Print equivalent curl / fetch / requests code.
//! - `send`: Execute the request and print the response (feature `client`).

use clap::{Parser, Subcommand};

use crate::context::{Playground, SourceArgs};
use crate::error::CliResult;

mod context;
mod endpoints;
mod error;
mod logging;
mod request_args;
mod sample;
#[cfg(feature = "client")]
mod send;
mod snippet;
#[cfg(feature = "client")]
mod transport;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Interactive OpenAPI playground")]
struct Cli {
    #[clap(flatten)]
    source: SourceArgs,

    /// Log at debug level.
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List endpoints grouped by tag.
    Endpoints(endpoints::EndpointsArgs),
    /// Print the sample request body.
    Sample(sample::SampleArgs),
    /// Print code snippets for a request.
    Snippet(snippet::SnippetArgs),
    /// Send a request and print the response.
    #[cfg(feature = "client")]
    Send(send::SendArgs),
}

fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let playground = Playground::load(&cli.source)?;

    match &cli.command {
        Commands::Endpoints(args) => endpoints::execute(args, &playground.spec),
        Commands::Sample(args) => {
            sample::execute(playground.endpoint(&args.operation_id)?)?;
        }
        Commands::Snippet(args) => {
            let endpoint = playground.endpoint(&args.operation_id)?;
            snippet::execute(args, endpoint, &playground.config)?;
        }
        #[cfg(feature = "client")]
        Commands::Send(args) => {
            let endpoint = playground.endpoint(&args.operation_id)?;
            let transport = transport::UreqTransport::new(args.timeout());
            send::execute(args, endpoint, &playground.config, &transport)?;
        }
    }

    Ok(())
}

#[macro_use]
extern crate tracing;

use clap::Parser;
use eyre::Result;
use std::io;
use webget::Webget;
use webget_cli::{handler, utils};

mod args;

use args::WebgetArgs;

fn main() -> Result<()> {
    handler::install();
    utils::load_dotenv();
    utils::subscriber();
    let args = WebgetArgs::parse();
    run(args)
}

fn run(args: WebgetArgs) -> Result<()> {
    let url = args.url;
    debug!(%url, "fetching");

    let mut client = Webget::new(webget::connect(&url)?);
    client.get(&url)?;

    let stdout = io::stdout();
    let total = client.stream_response(&mut stdout.lock())?;
    debug!(total, "connection closed by server");
    Ok(())
}

use clap::Parser;
use webget_common::Url;

/// Perform a raw HTTP/1.1 GET from the comfort of your command line.
#[derive(Parser)]
#[command(name = "webget", version, about)]
pub struct WebgetArgs {
    /// The URL to fetch, as `[http[s]://]hostname[:port]/path`.
    ///
    /// The port defaults to 80 (443 for `https://`). Note that `https://`
    /// only selects the default port: the exchange itself is always
    /// plaintext HTTP.
    #[arg(value_name = "URL")]
    pub url: Url,
}

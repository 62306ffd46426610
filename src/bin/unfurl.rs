//! Fetch a page and print its summary as JSON.
//!
//! Usage:
//!   unfurl <url>      fetch over HTTP
//!   unfurl - [url]    read HTML from stdin; `url` defaults to http://localhost/
//!
//! Logs go to stderr; set `RUST_LOG=page_unfurl=debug` for details.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use page_unfurl::{FetchResult, Fetcher, StaticLoader};
use tracing_subscriber::EnvFilter;

const STDIN_BASE_URL: &str = "http://localhost/";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(target: &str, stdin_url: Option<String>) -> Result<FetchResult, Box<dyn std::error::Error>> {
    if target == "-" {
        let mut html = String::new();
        io::stdin().read_to_string(&mut html)?;
        let url = stdin_url.unwrap_or_else(|| STDIN_BASE_URL.to_string());
        return Ok(Fetcher::new(StaticLoader::new(html)).fetch(&url)?);
    }

    fetch_remote(target)
}

#[cfg(feature = "http")]
fn fetch_remote(url: &str) -> Result<FetchResult, Box<dyn std::error::Error>> {
    Ok(page_unfurl::fetch(url)?)
}

#[cfg(not(feature = "http"))]
fn fetch_remote(url: &str) -> Result<FetchResult, Box<dyn std::error::Error>> {
    Err(format!("built without the `http` feature; cannot fetch {url}").into())
}

fn main() -> ExitCode {
    init_logging();

    let mut args = env::args().skip(1);
    let Some(target) = args.next() else {
        eprintln!("usage: unfurl <url> | unfurl - [url]");
        return ExitCode::from(2);
    };

    match run(&target, args.next()) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

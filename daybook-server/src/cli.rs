use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;

use chrono::FixedOffset;
use getopts::Options;

const ADDRESS_VAR: &str = "DAYBOOK_ADDR";

pub struct Args {
    pub address: SocketAddr,
    pub events: Option<PathBuf>,
    pub utc_offset: FixedOffset,
}

enum Command {
    Help(String),
    Run(Args),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: $DAYBOOK_ADDR or 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "e",
        "events",
        "JSON file of events keyed by YYYY-MM-DD [Default: built-in sample]",
        "PATH",
    );
    opts.optopt(
        "o",
        "utc-offset",
        "Offset of the local timezone picked days are interpreted in [Default: 0]",
        "MINUTES",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let default_address = match env::var(ADDRESS_VAR) {
        Ok(value) => match value.parse() {
            Ok(address) => address,
            Err(err) => {
                eprintln!("Failed to parse `{ADDRESS_VAR}` environment variable: {err}");
                process::exit(1);
            }
        },
        Err(_) => SocketAddr::from(([127, 0, 0, 1], 8080)),
    };

    match try_parse(args, default_address) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help(usage)) => {
            println!("{usage}");
            process::exit(0);
        }
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    }
}

fn try_parse(args: Vec<String>, default_address: SocketAddr) -> Result<Command, String> {
    let opts = opts();

    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(Command::Help(
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))),
        ));
    }

    let address = matches
        .opt_get_default("address", default_address)
        .map_err(|err| format!("Provided value for option 'address' is invalid: {err}"))?;

    let events = matches.opt_str("events").map(PathBuf::from);

    let minutes = matches
        .opt_get_default("utc-offset", 0i32)
        .map_err(|err| format!("Provided value for option 'utc-offset' is invalid: {err}"))?;

    let utc_offset = minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            format!("Provided value for option 'utc-offset' is out of range: {minutes}")
        })?;

    Ok(Command::Run(Args {
        address,
        events,
        utc_offset,
    }))
}

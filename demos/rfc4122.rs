//! Simple command that prints one or '-n count' UUID strings
//!
//! Prints UUIDv4 by default. `-v 3` or `-v 5` switches to name-based UUIDs, which hash the name
//! given by '-s namespace name' (namespace: dns, url, oid, x500, or nil).

use rfc4122::Uuid;
use std::{env, io, io::Write, process::ExitCode};

#[derive(Debug, Default)]
struct Options {
    count: Option<usize>,
    version: Option<u8>,
    name: Option<(Uuid, String)>,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-v 3|4|5] [-s dns|url|oid|x500|nil name]",
                    program.as_deref().unwrap_or("rfc4122")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let uuid = match (opts.version.unwrap_or(4), &opts.name) {
            (3, Some((ns, name))) => rfc4122::uuid3(ns, name.as_bytes()),
            (5, Some((ns, name))) => rfc4122::uuid5(ns, name.as_bytes()),
            _ => rfc4122::uuid4(),
        };
        writeln!(buf, "{}", uuid)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            "-v" => {
                if opts.version.is_some() {
                    return Err("option 'v' given more than once".to_owned());
                }
                match args.next().as_deref() {
                    Some("3") => opts.version.replace(3),
                    Some("4") => opts.version.replace(4),
                    Some("5") => opts.version.replace(5),
                    Some(v_arg) => {
                        return Err(format!("invalid argument to option 'v': '{}'", v_arg))
                    }
                    None => return Err("argument to option 'v' missing".to_owned()),
                };
            }
            "-s" => {
                if opts.name.is_some() {
                    return Err("option 's' given more than once".to_owned());
                }
                let ns = match args.next().as_deref() {
                    Some("dns") => Uuid::NAMESPACE_DNS,
                    Some("url") => Uuid::NAMESPACE_URL,
                    Some("oid") => Uuid::NAMESPACE_OID,
                    Some("x500") => Uuid::NAMESPACE_X500,
                    Some("nil") => Uuid::NIL,
                    Some(s_arg) => {
                        return Err(format!("unknown namespace to option 's': '{}'", s_arg))
                    }
                    None => return Err("arguments to option 's' missing".to_owned()),
                };
                let Some(name) = args.next() else {
                    return Err("name argument to option 's' missing".to_owned());
                };
                opts.name.replace((ns, name));
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    match (opts.version, &opts.name) {
        (Some(3 | 5), None) => Err("option 'v' with 3 or 5 requires option 's'".to_owned()),
        (None | Some(4), Some(_)) => Err("option 's' requires option 'v' with 3 or 5".to_owned()),
        _ => Ok(opts),
    }
}

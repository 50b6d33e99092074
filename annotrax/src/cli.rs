// src/cli.rs
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan (defaults to current directory)
    #[arg(long = "dir", value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Show diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Everything from the first positional argument on; accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, num_args = 0..)]
    pub ignored: Vec<OsString>,
}

/// Rewrites the single-dash `-dir` spelling into `--dir` so both forms parse.
///
/// Option parsing stops at the first positional argument or a literal `--`;
/// everything from there on is passed through untouched. The first item is
/// the program name.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expects_value = false;

    while let Some(arg) = args.next() {
        if expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let is_flag = arg.len() > 1 && arg.as_encoded_bytes().first() == Some(&b'-');
        if !is_flag || arg == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }

        let rewritten = match arg.to_str() {
            Some("-dir") => {
                expects_value = true;
                Some(OsString::from("--dir"))
            }
            Some("--dir") => {
                expects_value = true;
                None
            }
            Some(s) if s.starts_with("-dir=") => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

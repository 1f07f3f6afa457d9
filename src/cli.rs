// src/cli.rs
use std::{env, io, sync::Arc};

use crate::config::{ consts::MAX_WORKERS, options::{AppOptions, WordSource}, DelimiterSpec };
use crate::fetch::{ HttpFetcher, PageFetcher, WebFetcher };
use crate::progress::StderrProgress;
use crate::{ file, lookup, report, words };

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_args(env::args().skip(1))?;
    let fetcher: Arc<dyn PageFetcher> = if opts.lookup.plain_http {
        Arc::new(HttpFetcher)
    } else {
        Arc::new(WebFetcher::new()?)
    };
    run_with(&opts, fetcher)
}

/// Resolve words, look them up, write the report.
pub fn run_with(
    opts: &AppOptions,
    fetcher: Arc<dyn PageFetcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = match &opts.lookup.words {
        WordSource::Args(list) => list.clone(),
        WordSource::Stdin => {
            eprintln!("Enter words, then \"end\":");
            words::from_reader(io::stdin().lock())?
        }
    };

    let delims = DelimiterSpec::default();
    let mut progress = StderrProgress::default();
    let entries = lookup::lookup_all(&words, fetcher, &opts.lookup, &delims, Some(&mut progress));

    let path = file::write_report(&opts.report, &entries)?;
    if opts.report.print {
        print!("{}", report::render_report(&entries));
    }
    eprintln!("Wrote {}", path.display());
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<AppOptions, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut terms: Vec<String> = Vec::new();
    let mut force_stdin = false;
    let mut documents = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                opts.report.set_path(&v);}
            "--documents" => documents = true,
            "--stdin" => force_stdin = true,
            "-j" | "--workers" => {
                let v: usize = args.next().ok_or("Missing value for --workers")?.parse()?;
                if v == 0 || v > MAX_WORKERS {
                    return Err(format!("Workers out of range (1..={MAX_WORKERS})").into());
                }
                opts.lookup.workers = v;}
            "--no-pause" => opts.lookup.pause_ms = 0,
            "--plain-http" => opts.lookup.plain_http = true,
            "--base-url" => opts.lookup.base_url = args.next().ok_or("Missing value for --base-url")?,
            "--print" => opts.report.print = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            "--" => terms.extend(args.by_ref()),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown arg: {}", a).into());
            }
            _ => terms.push(a),
        }
    }

    if documents {
        opts.report.use_documents_dir()?;
    }

    let terms = words::from_args(terms);
    opts.lookup.words = if force_stdin || terms.is_empty() {
        WordSource::Stdin
    } else {
        WordSource::Args(terms)
    };
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{DEFAULT_FILE, DOCUMENTS_DIR};
    use std::path::PathBuf;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn words_and_flags() {
        let o = parse_args(args(&["chat", "-j", "2", "chien", "--print", "-o", "out/x.txt"])).unwrap();
        assert_eq!(o.lookup.words, WordSource::Args(args(&["chat", "chien"])));
        assert_eq!(o.lookup.workers, 2);
        assert!(o.report.print);
        assert_eq!(o.report.out_path(), PathBuf::from("out").join("x.txt"));
    }

    #[test]
    fn no_words_means_stdin() {
        let o = parse_args(args(&[])).unwrap();
        assert_eq!(o.lookup.words, WordSource::Stdin);
        let o = parse_args(args(&["chat", "--stdin"])).unwrap();
        assert_eq!(o.lookup.words, WordSource::Stdin);
    }

    #[test]
    fn bad_flags_are_errors() {
        assert!(parse_args(args(&["--nope"])).is_err());
        assert!(parse_args(args(&["-j", "0"])).is_err());
        assert!(parse_args(args(&["-j", "x"])).is_err());
        assert!(parse_args(args(&["-o"])).is_err());
    }

    #[test]
    fn workers_range_message_is_inclusive() {
        let err = parse_args(args(&["-j", "17"])).unwrap_err().to_string();
        assert!(err.contains(&format!("1..={MAX_WORKERS}")), "{err}");
        let o = parse_args(args(&["-j", &MAX_WORKERS.to_string(), "chat"])).unwrap();
        assert_eq!(o.lookup.workers, MAX_WORKERS);
    }

    #[test]
    fn tls_client_is_default_and_plain_http_opts_out() {
        assert!(!parse_args(args(&["chat"])).unwrap().lookup.plain_http);
        assert!(parse_args(args(&["--plain-http", "chat"])).unwrap().lookup.plain_http);
    }

    #[test]
    fn output_defaults_to_cwd_and_documents_is_opt_in() {
        let o = parse_args(args(&["chat"])).unwrap();
        assert_eq!(o.report.out_path(), PathBuf::from(DEFAULT_FILE));

        if let Some(home) = std::env::var_os("HOME") {
            let o = parse_args(args(&["--documents", "chat"])).unwrap();
            assert_eq!(o.report.out_path(), PathBuf::from(home).join(DOCUMENTS_DIR).join(DEFAULT_FILE));
        }
    }

    #[test]
    fn double_dash_passes_dash_words() {
        let o = parse_args(args(&["--", "-ment", "chat"])).unwrap();
        assert_eq!(o.lookup.words, WordSource::Args(args(&["-ment", "chat"])));
    }
}

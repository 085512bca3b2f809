use std::io::Write;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::fetcher::{self, FetchOptions};
use crate::router::{Command, Flow, OpenTarget, Router};
use crate::surface::{Surface, TermSurface};
use crate::utils;

fn print_banner(no_color: bool) {
    let _ = no_color;
    const BANNER: &str = r#"
         __        ______  ____     _ _
   _____/ /_____ _/ __/ /_/ __ \___| (_)____
  / ___/ __/ __ `/ /_/ __/ / / /  _/ / / __/
 (__  ) /_/ /_/ / __/ /_/ /_/ / /_/ / / /
/____/\__/\__,_/_/  \__/\____/\__/_/_/_/
       v0.2.1 - employee directory browser
    "#;
    print!("{}", BANNER);
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

#[derive(Clone, Debug)]
struct RunConfig {
    endpoint: String,
    results: u32,
    nationalities: Vec<String>,
    timeout: usize,
    proxy: Option<String>,
    no_color: bool,
    query: Option<String>,
    open: Option<usize>,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let endpoint = args
        .url
        .or(cfg.url)
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| fetcher::DEFAULT_ENDPOINT.to_string());

    let results = args.results.or(cfg.results).unwrap_or(fetcher::DEFAULT_RESULTS);
    // the API caps a single page at 5000 results
    if results == 0 || results > 5000 {
        return Err("invalid results, expected 1-5000".to_string());
    }

    let nat_raw = args
        .nat
        .or(cfg.nat)
        .unwrap_or_else(|| utils::DEFAULT_NATIONALITIES.join(","));
    let nationalities = utils::parse_nat_csv(&nat_raw)
        .map_err(|e| format!("invalid nationality list '{nat_raw}': {e}"))?;

    let timeout = args.timeout.or(cfg.timeout).unwrap_or(10);
    if timeout == 0 {
        return Err("invalid timeout, expected positive integer".to_string());
    }

    let proxy = args
        .proxy
        .or(cfg.proxy)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    Ok(RunConfig {
        endpoint,
        results,
        nationalities,
        timeout,
        proxy,
        no_color,
        query: args.query,
        open: args.open,
    })
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    print_banner(run.no_color);

    format_kv_line("endpoint", &run.endpoint);
    format_kv_line("results", &run.results.to_string());
    format_kv_line("nat", &run.nationalities.join(","));
    println!();

    let options = FetchOptions {
        endpoint: run.endpoint.clone(),
        results: run.results,
        nationalities: run.nationalities.clone(),
        timeout_seconds: run.timeout,
        proxy: run.proxy.clone(),
    };

    let client = match fetcher::build_client(&options) {
        Ok(client) => client,
        Err(e) => {
            report_fetch_failure(&e);
            return Ok(());
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("fetching directory...");
    pb.enable_steady_tick(std::time::Duration::from_millis(80));

    let started = Instant::now();
    let directory = match fetcher::fetch_directory(&client, &options).await {
        Ok(directory) => {
            pb.finish_and_clear();
            directory
        }
        Err(e) => {
            // failure policy: diagnostic plus an empty gallery, no retry
            pb.finish_and_clear();
            report_fetch_failure(&e);
            return Ok(());
        }
    };
    println!(
        ":: fetched {} people in {}ms ::",
        directory.len(),
        started.elapsed().as_millis()
    );

    let mut surface = TermSurface::new();
    let mut router = Router::new(directory);
    router.render_initial(&mut surface);

    // batch mode: apply the requested search/open, then exit
    if run.query.is_some() || run.open.is_some() {
        if let Some(query) = run.query.as_deref() {
            router.dispatch(Command::Search(query.to_string()), &mut surface);
        }
        if let Some(position) = run.open {
            router.dispatch(Command::Open(OpenTarget::Position(position)), &mut surface);
        }
        return Ok(());
    }

    surface.note("type 'help' for commands");
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        print!("{} ", ">".bold().cyan());
        std::io::stdout()
            .flush()
            .map_err(|e| format!("failed to flush stdout: {e}"))?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(format!("failed to read input: {e}")),
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => {
                if router.dispatch(command, &mut surface) == Flow::Quit {
                    break;
                }
            }
            Err(message) => surface.report(&message),
        }
    }

    Ok(())
}

fn report_fetch_failure(error: &fetcher::FetchError) {
    eprintln!(
        "{}{}{} {}",
        "[".bold().white(),
        "ERR".bold().red(),
        "]".bold().white(),
        error
    );
    eprintln!(
        "{}{}{} {}",
        "[".bold().white(),
        "ERR".bold().red(),
        "]".bold().white(),
        "nothing to display"
    );
}

pub fn run_cli() -> Result<(), String> {
    let args = CliArgs::parse();

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => {
                config::ensure_default_config_file(&path)?;
                config::load_config(&path, true)?
            }
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))?;
    Ok(())
}

// Main CLI entry point for paramx
// Uses clap for argument parsing

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use paramx::error::ParamxError;
use paramx::input::{read_urls_from_file, read_urls_from_reader};
use paramx::logging::init_logger;
use paramx::output::{save_to_file, write_lines};
use paramx::runner::{run, RunOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

const BANNER: &str = r#"

   ___  ___ ________ ___ _  __ __
  / _ \/ _ `/ __/ _ `/  ' \ \ \ /
 / .__/\_,_/_/  \_,_/_/_/_//_\_\
/_/
"#;

fn cli() -> Command {
    Command::new("paramx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract URLs with interesting parameters or subdomains using tag-based rules")
        .after_help("EXAMPLES:\n  cat urls.txt | paramx --tag sqli\n  paramx -l urls.txt --tag xss --rw '\"><svg/onload=alert(1)>'\n  paramx -l urls.txt --all-tags -o interesting.txt\n  paramx -l subs.txt --tag isubs --tp ./templates")
        .arg(Arg::new("list")
            .short('l')
            .long("list")
            .num_args(1)
            .help("Path to a file containing URLs (one per line); stdin is read when omitted"))
        .arg(Arg::new("tag")
            .long("tag")
            .num_args(1)
            .default_value("xss")
            .help("Bug type to extract URLs for: xss, sqli, lfi, rce, idor, ssrf, ssti, redirect, or isubs for interesting subdomains"))
        .arg(Arg::new("replace_with")
            .long("rw")
            .visible_alias("replace-with")
            .num_args(1)
            .allow_hyphen_values(true)
            .help("Replace every parameter value of matched URLs with this value"))
        .arg(Arg::new("template")
            .short('t')
            .long("template")
            .num_args(1)
            .help("Path to a custom rule template, appended after the loaded rules"))
        .arg(Arg::new("templates_path")
            .long("tp")
            .visible_alias("templates-path")
            .env("PARAMX_TEMPLATES")
            .num_args(1)
            .help("Directory containing YAML rule templates (built-in rules are used when omitted)"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .num_args(1)
            .help("Path to a file where the results should be saved"))
        .arg(Arg::new("all_tags")
            .long("all-tags")
            .action(ArgAction::SetTrue)
            .help("Match parameters against every known tag"))
        .arg(Arg::new("all_params")
            .long("all-params")
            .action(ArgAction::SetTrue)
            .help("Return every parameterized URL regardless of rules"))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Enable debug logging"))
        .arg(Arg::new("silent")
            .long("silent")
            .action(ArgAction::SetTrue)
            .conflicts_with("verbose")
            .help("Print results only, no banner or progress logs"))
}

fn options_from_matches(matches: &clap::ArgMatches) -> RunOptions {
    let path = |id: &str| matches.get_one::<String>(id).map(PathBuf::from);
    RunOptions {
        templates_path: path("templates_path"),
        custom_template: path("template"),
        tag: matches
            .get_one::<String>("tag")
            .cloned()
            .unwrap_or_else(|| "xss".to_string()),
        replace_with: matches.get_one::<String>("replace_with").cloned(),
        all_tags: matches.get_flag("all_tags"),
        all_params: matches.get_flag("all_params"),
        output_file: path("output"),
    }
}

fn read_input(list: Option<&String>) -> Result<Vec<String>> {
    match list {
        Some(file) => Ok(read_urls_from_file(Path::new(file))?),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(ParamxError::NoInput.into());
            }
            read_urls_from_reader(stdin.lock()).context("Failed to read URLs from stdin")
        }
    }
}

fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let opts = options_from_matches(matches);
    let urls = read_input(matches.get_one::<String>("list"))?;

    let classification = run(&opts, &urls)?;

    write_lines(std::io::stdout().lock(), &classification.urls)
        .context("Failed to write results to stdout")?;

    if let Some(path) = &opts.output_file {
        save_to_file(path, &classification.urls)?;
        info!("Results saved to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    let silent = matches.get_flag("silent");
    init_logger(matches.get_flag("verbose"), silent);

    if !silent {
        eprintln!("{}", BANNER);
    }

    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn replace_with_distinguishes_empty_from_absent() {
        let m = cli().get_matches_from(["paramx", "--rw", ""]);
        assert_eq!(options_from_matches(&m).replace_with, Some(String::new()));

        let m = cli().get_matches_from(["paramx"]);
        assert_eq!(options_from_matches(&m).replace_with, None);
    }

    #[test]
    fn flags_map_to_options() {
        let m = cli().get_matches_from([
            "paramx", "-l", "urls.txt", "--tag", "sqli", "--all-tags", "-o", "out.txt", "-t", "custom.yaml",
        ]);
        let opts = options_from_matches(&m);
        assert_eq!(opts.tag, "sqli");
        assert!(opts.all_tags);
        assert!(!opts.all_params);
        assert_eq!(opts.output_file, Some(PathBuf::from("out.txt")));
        assert_eq!(opts.custom_template, Some(PathBuf::from("custom.yaml")));
    }
}

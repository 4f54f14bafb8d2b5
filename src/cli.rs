// Command line interface for rendering templates and route tables

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgMatches, Command};

use crate::{
    config::{RouteTable, RoutesFile},
    path::{PathInstance, PathValue},
};

pub fn command() -> Command {
    Command::new("path-def")
        .about("Build route paths from templates with named parameters")
        .subcommand_required(true)
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .value_name("PREFIX")
                .global(true)
                .help("Marker shown before each parameter name (default ':')"),
        )
        .arg(
            Arg::new("routes")
                .short('r')
                .long("routes")
                .value_name("ROUTES")
                .global(true)
                .help("Path to a YAML file containing named routes"),
        )
        .subcommand(
            Command::new("render")
                .about("Print a template's canonical form, or build it when values are given")
                .arg(Arg::new("template").required(true).value_name("TEMPLATE"))
                .arg(params_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print a template's canonical form and parameter keys as JSON")
                .arg(Arg::new("template").required(true).value_name("TEMPLATE")),
        )
        .subcommand(Command::new("list").about("Print every route in the routes file"))
        .subcommand(
            Command::new("build")
                .about("Build a named route from the routes file")
                .arg(Arg::new("name").required(true).value_name("NAME"))
                .arg(params_arg()),
        )
}

fn params_arg() -> Arg {
    Arg::new("params")
        .num_args(0..)
        .value_name("KEY=VALUE")
        .help("Parameter values to substitute")
}

/// Run a parsed command line and return what should be printed
pub fn run(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("render", sub)) => {
            let path = parse_template(sub)?;
            let params = parse_params(sub)?;
            if params.is_empty() {
                Ok(path.stringified().to_string())
            } else {
                Ok(path.build(&params))
            }
        }
        Some(("inspect", sub)) => {
            let path = parse_template(sub)?;
            serde_json::to_string_pretty(&path.metadata()).context("Failed to serialize metadata")
        }
        Some(("list", sub)) => {
            let table = load_table(sub)?;
            Ok(table
                .iter()
                .map(|route| format!("{}\t{}", route.name, route.path))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Some(("build", sub)) => {
            let table = load_table(sub)?;
            let name = required(sub, "name")?;
            let path = table
                .get(name)
                .with_context(|| format!("Unknown route: {}", name))?;
            Ok(path.build(&parse_params(sub)?))
        }
        Some((other, _)) => bail!("Unknown command: {}", other),
        None => bail!("No command given"),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("Missing argument: {}", id))
}

fn prefix(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("prefix").map(String::as_str)
}

fn parse_template(matches: &ArgMatches) -> Result<PathValue> {
    let template = required(matches, "template")?;
    let instance = prefix(matches)
        .map(PathInstance::with_prefix)
        .unwrap_or_default();
    instance
        .parse(template)
        .with_context(|| format!("Invalid template: {}", template))
}

fn load_table(matches: &ArgMatches) -> Result<RouteTable> {
    let routes_path = matches
        .get_one::<String>("routes")
        .context("--routes is required for this command")?;
    let file = RoutesFile::load(routes_path)
        .with_context(|| format!("Failed to read routes file: {}", routes_path))?;

    // --prefix wins over the file's own prefix
    let instance = prefix(matches)
        .map(PathInstance::with_prefix)
        .unwrap_or_else(|| file.instance());

    RouteTable::new(instance, file.routes)
        .with_context(|| format!("Invalid routes file: {}", routes_path))
}

/// Parse `KEY=VALUE` arguments, keeping their order
pub fn parse_params(matches: &ArgMatches) -> Result<Vec<(String, String)>> {
    matches
        .get_many::<String>("params")
        .into_iter()
        .flatten()
        .map(|raw| parse_assignment(raw))
        .collect()
}

fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("Expected KEY=VALUE but got '{}'", raw),
    }
}

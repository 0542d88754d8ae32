use std::fs;
use std::path::PathBuf;

use linechart::api::{LineChartConfig, render_with_config};
use linechart::core::{ColumnMeta, Table, column_meta_map};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RenderRequest {
    table: Table,
    #[serde(default)]
    params: serde_json::Value,
    columns: Vec<ColumnMeta>,
    #[serde(default)]
    config: Option<LineChartConfig>,
}

#[derive(Debug)]
struct Args {
    request_path: PathBuf,
    output_path: Option<PathBuf>,
}

fn main() {
    let _ = linechart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.request_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.request_path.display()))?;
    let request: RenderRequest =
        serde_json::from_str(&raw).map_err(|err| format!("invalid request json: {err}"))?;

    let columns = column_meta_map(request.columns);
    let config = request.config.unwrap_or_default();
    let output = render_with_config(request.table, &request.params, &columns, &config);

    let serialized = serde_json::to_string_pretty(&output)
        .map_err(|err| format!("failed to serialize output: {err}"))?;
    match args.output_path {
        Some(path) => fs::write(&path, format!("{serialized}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => println!("{serialized}"),
    }
    Ok(())
}

fn parse_args() -> Result<Args, String> {
    let mut request_path = None;
    let mut output_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--output" | "-o" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                return Err("usage: render_line_chart <request.json> [--output <path>]".to_owned());
            }
            other if request_path.is_none() => request_path = Some(PathBuf::from(other)),
            other => return Err(format!("unexpected argument `{other}`")),
        }
    }

    Ok(Args {
        request_path: request_path
            .ok_or_else(|| "usage: render_line_chart <request.json> [--output <path>]".to_owned())?,
        output_path,
    })
}

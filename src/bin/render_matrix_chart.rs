use matrix_trend_chart::api::{ChartMount, ChartOptionsConfig};
use matrix_trend_chart::core::{MatrixSourceOptions, Viewport, payload_from_csv_path_or_fallback};
use matrix_trend_chart::render::{ChartJsScriptRenderer, SurfaceRegistry};
use matrix_trend_chart::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: render_matrix_chart --input <csv> [--output <path>] [--options <json>] [--element-id <id>] [--skip-header]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    options: Option<PathBuf>,
    element_id: Option<String>,
    skip_header: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut options = match &args.options {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartOptionsConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartOptionsConfig::new(),
    };
    if let Some(element_id) = args.element_id {
        options = options.with_element_id(element_id);
    }

    let source = MatrixSourceOptions::default().with_headers(args.skip_header);
    let payload = payload_from_csv_path_or_fallback(&args.input, &source);

    // The emitted script looks the canvas up itself; the registry stands in for
    // the page so the mount can resolve its surface.
    let surfaces = SurfaceRegistry::new()
        .with_surface(options.element_id.clone(), Viewport::default())
        .map_err(|err| err.to_string())?;

    let mut mount = ChartMount::new(surfaces, ChartJsScriptRenderer::new(), options)
        .map_err(|err| err.to_string())?;
    mount.on_load(Some(&payload)).map_err(|err| err.to_string())?;
    let script = mount.into_renderer().into_output();

    match args.output {
        Some(path) => fs::write(&path, script)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            print!("{script}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut options = None::<PathBuf>;
    let mut element_id = None::<String>;
    let mut skip_header = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--options" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --options".to_owned())?;
                options = Some(PathBuf::from(value));
            }
            "--element-id" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --element-id".to_owned())?;
                element_id = Some(value);
            }
            "--skip-header" => skip_header = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
        options,
        element_id,
        skip_header,
    })
}

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use framerect::{
    ElementId, RawRect, ReferenceFrame, ResolveOptions, Scene, Subject, VirtualRect, WindowId,
    get_bounding_client_rect,
};

#[derive(Parser, Debug)]
#[command(name = "framerect", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve an element's rectangle and print it as JSON.
    Resolve(ResolveArgs),
    /// Validate a scene file and print its windows with their frame depth.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Element to measure (or the context element of `--virtual`).
    #[arg(long)]
    element: String,

    /// Measure a virtual rect `left,top,width,height` anchored to `--element`.
    #[arg(long = "virtual", value_parser = parse_raw_rect)]
    virtual_rect: Option<RawRect>,

    #[command(flatten)]
    reference: ReferenceArgs,

    /// Divide out transform scale.
    #[arg(long)]
    include_scale: bool,

    /// Measure for fixed (viewport-anchored) positioning.
    #[arg(long)]
    fixed: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct ReferenceArgs {
    /// Express the result in the coordinate space of this element.
    #[arg(long)]
    reference_element: Option<String>,

    /// Express the result in the coordinate space of this window.
    #[arg(long)]
    reference_window: Option<String>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let scene = Scene::from_reader(BufReader::new(f))
        .with_context(|| format!("load scene '{}'", path.display()))?;
    Ok(scene)
}

fn parse_raw_rect(s: &str) -> Result<RawRect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    match parts.as_slice() {
        &[left, top, width, height] => Ok(RawRect::new(left, top, width, height)),
        _ => Err(format!("expected left,top,width,height, got '{s}'")),
    }
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;

    let element = ElementId::new(args.element);
    scene.element(&element)?;

    let reference_element = args.reference.reference_element.map(ElementId::new);
    let reference_window = args.reference.reference_window.map(WindowId::new);
    let reference = match (&reference_element, &reference_window) {
        (Some(el), _) => {
            scene.element(el)?;
            Some(ReferenceFrame::Element(el))
        }
        (None, Some(win)) => {
            scene.window(win)?;
            Some(ReferenceFrame::Window(win))
        }
        (None, None) => None,
    };

    let options = ResolveOptions {
        include_scale: args.include_scale,
        is_fixed_strategy: args.fixed,
    };

    let virtual_el = args
        .virtual_rect
        .map(|rect| VirtualRect::new(rect).with_context(element.clone()));
    let subject: Subject<'_, ElementId> = match &virtual_el {
        Some(v) => Subject::Virtual(v),
        None => Subject::Element(&element),
    };

    let rect = get_bounding_client_rect(&scene, subject, options, reference);

    let out = if args.pretty {
        serde_json::to_string_pretty(&rect)
    } else {
        serde_json::to_string(&rect)
    }
    .context("serialize client rect")?;
    println!("{out}");
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    for id in scene.windows.keys() {
        let depth = scene.frame_depth(id)?;
        println!("{id}\tdepth={depth}");
    }
    eprintln!(
        "ok: {} windows, {} elements",
        scene.windows.len(),
        scene.elements.len()
    );
    Ok(())
}

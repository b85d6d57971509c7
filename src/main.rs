//! Replay a recorded input script against a Web Mercator viewport and print
//! every drag zoom event as a JSON line.
//!
//! ```text
//! dragzoom <script.json>
//! dragzoom -            # read the script from stdin
//! ```

use anyhow::{Context, Result, bail};
use dragzoom::layout::ElementSnapshot;
use dragzoom::mercator::MercatorViewport;
use dragzoom::perf::{OperationStats, measure};
use dragzoom::{DragZoom, DragZoomEvent, DragZoomOptions, EventKind, GeoPoint, InputEvent, Size};
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Script {
    #[serde(default)]
    options: DragZoomOptions,
    viewport: ViewportSpec,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewportSpec {
    width: f64,
    height: f64,
    center: GeoPoint,
    zoom: u32,
    container: Option<ElementSnapshot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    /// Milliseconds since the start of the script
    #[serde(default)]
    at_ms: u64,
    input: InputEvent,
}

fn print_help() {
    println!("Usage: dragzoom <script.json | ->");
    println!();
    println!("Script: {{\"options\": {{..}}, \"viewport\": {{\"width\", \"height\", \"center\", \"zoom\"}},");
    println!("         \"steps\": [{{\"atMs\": 0, \"input\": {{\"type\": \"keydown\", ..}}}}]}}");
    println!();
    println!("Logging: RUST_LOG=dragzoom=debug");
}

fn read_script(path: &str) -> Result<Script> {
    let text = if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read script from stdin")?;
        text
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("invalid replay script {path}"))
}

fn input_name(input: &InputEvent) -> &'static str {
    match input {
        InputEvent::KeyDown(_) => "keydown",
        InputEvent::KeyUp(_) => "keyup",
        InputEvent::PointerDown(_) => "pointerdown",
        InputEvent::PointerMove(_) => "pointermove",
        InputEvent::PointerUp(_) => "pointerup",
        InputEvent::Scroll { .. } => "scroll",
        InputEvent::ToggleClick(_) => "toggleclick",
        InputEvent::ToggleOver => "toggleover",
        InputEvent::ToggleOut => "toggleout",
    }
}

fn replay(script: Script) -> Result<()> {
    let spec = script.viewport;
    let mut viewport = MercatorViewport::new(Size::new(spec.width, spec.height), spec.center, spec.zoom);
    if let Some(container) = spec.container {
        viewport = viewport.with_container(container);
    }

    let mut zoom = DragZoom::new(viewport, script.options);
    let emitted: Rc<RefCell<Vec<DragZoomEvent>>> = Rc::default();
    for kind in EventKind::ALL {
        let emitted = Rc::clone(&emitted);
        zoom.on(kind, move |event| emitted.borrow_mut().push(*event));
    }

    let start = Instant::now();
    let mut stats: BTreeMap<&'static str, OperationStats> = BTreeMap::new();
    let mut stdout = std::io::stdout().lock();

    for step in &script.steps {
        let now = start + Duration::from_millis(step.at_ms);
        zoom.tick(now);
        let ((), elapsed_ms) = measure(|| zoom.dispatch_at(&step.input, now));
        stats.entry(input_name(&step.input)).or_default().record(elapsed_ms);

        for event in emitted.borrow_mut().drain(..) {
            writeln!(stdout, "{}", serde_json::to_string(&event)?)?;
        }
    }

    for (name, stat) in &stats {
        debug!(
            input = name,
            count = stat.count(),
            avg_ms = format!("{:.3}", stat.average()),
            p95_ms = format!("{:.3}", stat.p95()),
            max_ms = format!("{:.3}", stat.max()),
            "replay timing"
        );
    }

    let viewport = zoom.disable();
    for event in emitted.borrow_mut().drain(..) {
        writeln!(stdout, "{}", serde_json::to_string(&event)?)?;
    }
    info!(
        lat = viewport.center().lat,
        lng = viewport.center().lng,
        zoom = viewport.zoom(),
        "replay finished"
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dragzoom=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(|s| s.as_str()) {
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(path) => replay(read_script(path)?),
        None => {
            print_help();
            bail!("missing replay script");
        }
    }
}

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flowframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a single frame and print it as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range and print one JSON document per line.
    Range(RangeArgs),
    /// Validate a diagram without evaluating it.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input diagram JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct RangeArgs {
    /// Input diagram JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the diagram duration.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate on this many worker threads.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input diagram JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Range(args) => cmd_range(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn read_diagram_json(path: &Path) -> anyhow::Result<flowframe::Diagram> {
    let f = File::open(path).with_context(|| format!("open diagram '{}'", path.display()))?;
    let r = BufReader::new(f);
    let diagram: flowframe::Diagram =
        serde_json::from_reader(r).with_context(|| "parse diagram JSON")?;
    Ok(diagram)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let diagram = read_diagram_json(&args.in_path)?;
    let frame = flowframe::Evaluator::eval_frame(&diagram, flowframe::FrameIndex(args.frame))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)
    } else {
        serde_json::to_string(&frame)
    }
    .with_context(|| "serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_range(args: RangeArgs) -> anyhow::Result<()> {
    let diagram = read_diagram_json(&args.in_path)?;
    let end = args.end.unwrap_or(diagram.duration.0);
    let range =
        flowframe::FrameRange::new(flowframe::FrameIndex(args.start), flowframe::FrameIndex(end))?;
    let threading = flowframe::FrameThreading {
        parallel: args.threads.is_some(),
        threads: args.threads,
    };

    let frames = flowframe::eval_frames(&diagram, range, &threading)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in &frames {
        serde_json::to_writer(&mut out, frame).with_context(|| "serialize frame")?;
        out.write_all(b"\n").with_context(|| "write stdout")?;
    }
    out.flush().with_context(|| "flush stdout")?;

    eprintln!("evaluated {} frames", frames.len());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let diagram = read_diagram_json(&args.in_path)?;
    diagram
        .validate()
        .with_context(|| format!("invalid diagram '{}'", args.in_path.display()))?;
    eprintln!("ok: {}", args.in_path.display());
    Ok(())
}

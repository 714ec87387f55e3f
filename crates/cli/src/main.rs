use std::path::PathBuf;
use std::process;

use clap::Parser;

use framefx_core::detection::infrastructure::replay_detector::ReplayDetector;
use framefx_core::filters::engine::FilterEngine;
use framefx_core::filters::kind::FilterKind;
use framefx_core::pipeline::controls::Controls;
use framefx_core::pipeline::domain::frame_source::FrameSource;
use framefx_core::pipeline::frame_loop::FrameLoop;
use framefx_core::pipeline::infrastructure::image_file_sink::ImageFileSink;
use framefx_core::pipeline::infrastructure::image_file_source::ImageFileSource;
use framefx_core::shared::constants::DETECT_INTERVAL;

/// Real-time style video filters for images and frame sequences.
#[derive(Parser)]
#[command(name = "framefx")]
struct Cli {
    /// Input image file or directory of numbered frames.
    input: PathBuf,

    /// Output image file (single input) or directory (frame sequence).
    #[arg(short, long)]
    output: PathBuf,

    /// Effect to apply: none, gray, noisy, colorize, cartoon, posterize, faceblur.
    #[arg(long, default_value = "none")]
    filter: String,

    /// Effect intensity (0-100).
    #[arg(long, default_value = "50")]
    intensity: u8,

    /// Run face detection every Nth frame (faceblur only).
    #[arg(long, default_value_t = DETECT_INTERVAL)]
    detect_interval: usize,

    /// JSON face annotations replayed as the detection backend (faceblur only).
    #[arg(long)]
    faces: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter: FilterKind = cli.filter.parse()?;
    if cli.intensity > 100 {
        return Err("intensity must be between 0 and 100".into());
    }

    let mut source = ImageFileSource::open(&cli.input)?;
    let (width, height) = source.resolution();
    let mut engine = FilterEngine::new(width, height);

    if filter == FilterKind::FaceBlur {
        let faces_path = cli
            .faces
            .as_ref()
            .ok_or("faceblur requires --faces <json> with per-frame face annotations")?;
        let detector = ReplayDetector::from_json_file(faces_path)?;
        engine.attach_face_pipeline(Box::new(detector), cli.detect_interval)?;
    } else if cli.faces.is_some() {
        log::warn!("--faces is only used by the faceblur filter; ignoring");
    }

    let mut sink = if cli.input.is_dir() {
        ImageFileSink::to_directory(&cli.output)
    } else {
        ImageFileSink::to_file(&cli.output)
    };

    let controls = Controls::new(filter, cli.intensity);
    let mut frame_loop = FrameLoop::new(engine);
    let stats = frame_loop.run(&mut source, &mut sink, &controls)?;

    log::info!(
        "applied '{filter}' at intensity {} to {} frame(s) ({} failed), output at {}",
        cli.intensity,
        stats.processed + stats.failed,
        stats.failed,
        cli.output.display()
    );
    Ok(())
}

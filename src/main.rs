mod app_arguments;

use std::path::{Path, PathBuf};

use eyre::WrapErr;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use structopt::StructOpt;

use spherikal::{
    animation::SceneAnimator,
    render::render,
    scene::{build_scene, Camera, Scene},
    structs::Vector3,
};

use crate::app_arguments::AppArguments;

fn setup_logging(arguments: &AppArguments) {
    let level = match arguments.verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        4 => log::LevelFilter::Trace,
        _ => {
            panic!("Verbose level must be in [0, 4] range");
        }
    };
    env_logger::builder().filter_level(level).init();
}

/// Between-frame camera hook; a slow drift along the space diagonal makes
/// the sphere appear to move without touching the figures
fn scale_camera(camera: &mut Camera) {
    camera.point = camera.point + Vector3::new(0.1, 0.1, 0.1);
}

fn frame_path(base: &Path, frame: u32) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("frame");
    let extension = base
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("png");
    base.with_file_name(format!("{}_{:03}.{}", stem, frame, extension))
}

fn main() -> Result<(), eyre::Error> {
    let arguments = AppArguments::from_args();
    setup_logging(&arguments);
    debug!("App arguments: {:?}", arguments);

    let mut rng = match arguments.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scene: Scene = build_scene(&mut rng).wrap_err("Scene population")?;

    let side = 512_u32 << arguments.resolution_factor;
    info!(
        "Rendering {} frame(s) at {}x{}",
        arguments.frames, side, side
    );

    if arguments.frames <= 1 {
        let image = render(&scene, side, side).wrap_err("Render")?;
        image
            .save(&arguments.output)
            .wrap_err_with(|| format!("Save image {:?}", arguments.output))?;
        info!("Saved {:?}", arguments.output);
        return Ok(());
    }

    let mut animator = SceneAnimator::new(&scene.objects, rng);
    for frame in 0..arguments.frames {
        let image = render(&scene, side, side).wrap_err_with(|| format!("Render frame {}", frame))?;

        let path = frame_path(&arguments.output, frame);
        image
            .save(&path)
            .wrap_err_with(|| format!("Save image {:?}", path))?;
        info!("Saved {:?}", path);

        // Scene mutation happens strictly between render passes
        animator
            .step(&mut scene.objects)
            .wrap_err("Animation step")?;
        scale_camera(&mut scene.camera);
    }

    Ok(())
}

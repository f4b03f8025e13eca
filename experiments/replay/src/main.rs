mod config;
mod stats;

use airshape_base::log;
use airshape_gesture::{render, GestureConfig, GesturePipeline, ReplaySource};
use airshape_render::Canvas;
use config::ReplayConfig;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use stats::ReplayStats;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReplayConfig::from_env()?;
    match &config.log_dir {
        Some(dir) => airshape_base::init_file_logger(dir)?,
        None => airshape_base::init_stdout_logger(),
    }

    log::info!("Airshape Replay");
    log::info!("Landmarks: {}", config.landmarks.display());
    log::info!("Canvas: {}x{}", config.width, config.height);
    if config.window {
        log::info!("Controls: ESC to exit, C to clear the trail");
    }

    let mut source = ReplaySource::open(&config.landmarks).await?;

    if let Some(dir) = &config.frames_dir {
        tokio::fs::create_dir_all(dir).await?;
        log::info!("Writing frames to {}", dir.display());
    }

    let pipeline = GesturePipeline::new(
        GestureConfig::default().with_canvas_size(config.width as u32, config.height as u32),
    );
    let mut state = pipeline.initial_state();
    let mut canvas = Canvas::new(config.width, config.height);
    let mut stats = ReplayStats::default();

    let mut window = if config.window {
        let mut window = Window::new(
            "Airshape Replay - ESC to exit",
            config.width,
            config.height,
            WindowOptions::default(),
        )?;
        window.set_target_fps(30);
        Some(window)
    } else {
        None
    };

    while let Some(frame) = source.recv_valid().await? {
        if let Some(window) = &window {
            if !window.is_open() || window.is_key_down(Key::Escape) {
                log::info!("Window closed, stopping replay");
                break;
            }
            if window.is_key_pressed(Key::C, KeyRepeat::No) {
                log::info!("Clearing trail");
                state = state.clear_trail();
            }
        }

        let (next, output) = pipeline.step(state, frame.hand.as_ref());
        state = next;
        stats.record(&output.status);

        render(&mut canvas, frame.hand.as_ref(), &output);

        if let Some(dir) = &config.frames_dir {
            canvas.save_png(dir.join(format!("frame_{:05}.png", stats.frames)))?;
        }
        if let Some(window) = &mut window {
            window.update_with_buffer(&canvas.to_argb(), config.width, config.height)?;
        }

        if stats.frames % 100 == 0 {
            log::info!("Frame {}: {}", stats.frames, output.status);
        }
    }

    if source.skipped() > 0 {
        log::warn!("Skipped {} malformed lines", source.skipped());
    }
    log::info!("Replay finished: {}", stats);
    Ok(())
}

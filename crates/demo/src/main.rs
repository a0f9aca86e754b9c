//! Demo entry point: drives a guard's behavior tree from a fixed-step loop.
mod config;
mod guard;

use anyhow::Result;
use behavior_tree::TreeConfig;
use config::DemoConfig;
use guard::Guard;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    let tree_config = TreeConfig::from_env();
    tracing::info!(
        "simulating {} frames of {:?}, min interval {:?}",
        config.frames,
        config.frame,
        tree_config.min_interval
    );

    let mut tree = guard::build(Guard::new([0, 6]), &tree_config)?;
    let noise_frame = config.frames / 3;

    for frame in 0..config.frames {
        if frame == noise_frame {
            tracing::info!("frame {}: something clatters at -3", frame);
            tree.context_mut().hear(-3);
        }

        if let Some(status) = tree.tick(config.frame) {
            let guard = tree.context();
            tracing::info!(
                "frame {}: {:?} at position {} (heading to post {})",
                frame,
                status,
                guard.position,
                guard.posts[guard.next_post]
            );
        }
    }

    tracing::info!(
        "done: {} investigation(s), guard at {}",
        tree.context().investigations,
        tree.context().position
    );
    Ok(())
}

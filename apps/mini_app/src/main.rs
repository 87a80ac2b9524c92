use std::{path::PathBuf, rc::Rc};

use anyhow::{Context, Result};
use app_core::AppShell;
use clap::Parser;
use host_bridge::{HostApi, HostBridge, RecordingHost};
use shared::domain::HostUser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod script;

use config::load_settings;
use render::TextRenderer;
use script::Step;

/// Runs the mini-app shell against a simulated messenger host.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "mini_app.toml")]
    config: PathBuf,
    /// Start as if opened outside the messenger.
    #[arg(long)]
    no_host: bool,
    #[arg(long)]
    user_id: Option<i64>,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    username: Option<String>,
    /// Simulate a host version without haptic feedback.
    #[arg(long)]
    no_haptics: bool,
    /// Comma-separated steps: home, setup, history, info, back, assistant, support.
    #[arg(long, value_delimiter = ',')]
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.config)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let shell_config = settings
        .shell_config()
        .context("invalid mini-app settings")?;

    let host = (!args.no_host).then(|| Rc::new(simulated_host(&args)));
    let bridge = HostBridge::detect(host.clone().map(|host| host as Rc<dyn HostApi>));
    let mut shell = AppShell::mount(bridge, shell_config);

    let mut renderer = TextRenderer::default();
    shell.render(&mut renderer);
    for step in &args.steps {
        script::apply(&mut shell, host.as_deref(), *step);
        shell.render(&mut renderer);
    }

    for (index, frame) in renderer.frames().iter().enumerate() {
        println!("--- frame {index} ---");
        print!("{frame}");
    }
    if let Some(host) = &host {
        println!("--- host calls ---");
        for call in host.calls() {
            println!("{call:?}");
        }
    }
    Ok(())
}

fn simulated_host(args: &Args) -> RecordingHost {
    let mut host = RecordingHost::new();
    match (args.user_id, &args.first_name) {
        (Some(id), Some(first_name)) => {
            host = host.with_user(HostUser {
                id,
                first_name: first_name.clone(),
                last_name: args.last_name.clone(),
                username: args.username.clone(),
            });
        }
        (None, None) => {}
        _ => warn!("both --user-id and --first-name are needed for a host user; running as guest"),
    }
    if args.no_haptics {
        host = host.without_haptics();
    }
    host
}

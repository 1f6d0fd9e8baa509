// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;
use toastkit::config::{self, Config};
use toastkit::diagnostics::{generate_default_filename, BufferCapacity, DiagnosticsCollector};
use toastkit::error::{Error, Result};
use toastkit::notifications::{Notification, Settings, Snapshot, Toast, ToastService, Variant};

const HELP: &str = "\
toastkit - toast notification lifecycle demo

USAGE:
  toastkit [OPTIONS]

OPTIONS:
  --count N            Number of notifications to show [default: 3]
  --duration MS        Auto-dismiss delay in milliseconds [default: from config]
  --title TEXT         Title prefix [default: Notification]
  --config PATH        Read settings from PATH instead of the user config
  --diagnostics DIR    Write a diagnostics report into DIR on exit
  -h, --help           Print this help
";

struct Flags {
    count: usize,
    duration: Option<u64>,
    title: String,
    config: Option<PathBuf>,
    diagnostics: Option<PathBuf>,
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        count: args.opt_value_from_str("--count")?.unwrap_or(3),
        duration: args.opt_value_from_str("--duration")?,
        title: args
            .opt_value_from_str("--title")?
            .unwrap_or_else(|| "Notification".to_string()),
        config: args.opt_value_from_str("--config")?,
        diagnostics: args.opt_value_from_str("--diagnostics")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Args(format!("unexpected arguments: {rest:?}")));
    }
    Ok(Some(flags))
}

fn load_config(flags: &Flags) -> Result<Config> {
    match &flags.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("-- {} notification(s)", snapshot.len());
    for toast in &snapshot.toasts {
        println!(
            "   {:<10} {:<11} {:>5.1}%  {}  {}",
            toast.id().to_string(),
            toast.variant().as_str(),
            toast.progress(),
            if toast.is_visible() { "shown " } else { "hidden" },
            toast.title().unwrap_or(""),
        );
    }
}

fn variant_for(index: usize) -> Variant {
    match index % 4 {
        0 => Variant::Default,
        1 => Variant::Success,
        2 => Variant::Warning,
        _ => Variant::Destructive,
    }
}

async fn run(flags: Flags) -> Result<()> {
    let config = load_config(&flags)?;
    let settings = Settings::from_config(&config);
    let service = ToastService::spawn(settings);

    let mut collector = flags.diagnostics.as_ref().map(|_| {
        DiagnosticsCollector::new(BufferCapacity::new(
            config
                .diagnostics_buffer_capacity
                .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        ))
    });
    if let Some(collector) = &collector {
        let handle = collector.handle();
        service.with_manager(|manager| manager.set_diagnostics(handle));
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let subscription = service.subscribe(move |snapshot| {
        print_snapshot(snapshot);
        tx.send(snapshot.len()).ok();
    });

    for index in 0..flags.count {
        let mut toast = Toast::titled(format!("{} {}", flags.title, index + 1))
            .variant(variant_for(index));
        if let Some(ms) = flags.duration {
            toast = toast.duration(Duration::from_millis(ms));
        }
        service.notify(toast);
    }

    let snapshot = service.snapshot();
    let drains = !snapshot.is_empty() && snapshot.toasts.iter().all(Notification::auto_dismisses);
    if drains {
        while let Some(len) = rx.recv().await {
            if let Some(collector) = collector.as_mut() {
                collector.process_pending();
            }
            if len == 0 {
                break;
            }
        }
    }
    subscription.unsubscribe();

    if let (Some(collector), Some(dir)) = (collector.as_mut(), &flags.diagnostics) {
        collector.process_pending();
        let path = collector.export_to_file(dir.join(generate_default_filename()))?;
        println!("diagnostics written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let Some(flags) = parse_flags()? else {
        print!("{HELP}");
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(run(flags))
}

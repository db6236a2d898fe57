use std::io;
use std::sync::Arc;

use anyhow::Context;
use tabular_report::report::{run, LogObserver, ReportOptions};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = ReportOptions {
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, &options).context("failed to produce the employee report")?;
    Ok(())
}

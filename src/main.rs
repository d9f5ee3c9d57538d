use anyhow::Result;

use icongen_lib::commands::{generate_icons, Progress};
use icongen_lib::models::IconConfig;
use icongen_lib::render::{installation_help, RenderError};

fn main() -> Result<()> {
    env_logger::init();

    // 固定读取当前目录下的 icon.svg
    let config = IconConfig::default();

    let report = match generate_icons(&config, |event| match event {
        Progress::BackendSelected { banner, .. } => println!("{}", banner),
        Progress::Created(icon) => println!("{}", icon),
        Progress::Failed { file, error } => eprintln!("Error creating {}: {}", file, error),
    }) {
        Ok(report) => report,
        Err(RenderError::NoBackend) => {
            eprintln!("{}", installation_help());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    log::debug!("Generation report: {}", serde_json::to_string(&report)?);
    println!("All icons generated successfully!");
    Ok(())
}

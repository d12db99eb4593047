//! Save, drop and reload a mapping and a computer

use std::path::Path;

use anyhow::Result;
use magic_core::{
    persist::{self, Record},
    Computer, Value,
};

use super::DemoRunner;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(super) fn run(runner: &DemoRunner) -> Result<()> {
    runner.section("pickle");
    let config = runner.config();
    let format = config.format;

    let mut record = Record::new();
    record.insert("name".to_string(), Value::from("blaine"));
    record.insert("city".to_string(), Value::from("cincinnati"));
    record.insert("favorite food".to_string(), Value::from("pizza"));

    let record_path = config.record_path();
    persist::dump(&record, &record_path, format)?;
    let loaded: Record = persist::load(&record_path, format)?;
    runner.say(format!("loaded {}: {}", file_name(&record_path), Value::Map(loaded)));

    let comp = Computer::with_peripherals(
        "Gameboy",
        16,
        ["buttons", "screen", "speakers", "battery", "plastic case"],
    );
    runner.say(comp.to_string());

    let computer_path = config.computer_path();
    runner.say(format!("saving to {}", file_name(&computer_path)));
    persist::dump(&comp, &computer_path, format)?;

    runner.say("deleting computer instance");
    drop(comp);

    let comp: Computer = persist::load(&computer_path, format)?;
    runner.say(comp.to_string());

    Ok(())
}

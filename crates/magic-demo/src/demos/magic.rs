//! Walkthrough of the `Computer` type: text, comparison, indexing,
//! iteration, containment and call syntax

use anyhow::Result;
use magic_core::{Computer, Value};

use super::DemoRunner;

fn truth(b: bool) -> Value {
    Value::Bool(b)
}

/// `computer[index] = value`, reporting the new length when the list grew
fn store(runner: &DemoRunner, computer: &mut Computer, index: usize, value: &str) {
    if computer.set(index, value) {
        runner.say(computer.len().to_string());
    }
}

pub(super) fn run(runner: &DemoRunner) -> Result<()> {
    runner.section("magic methods");

    let mac = Computer::new("mac", 512);
    let pc = Computer::new("x86", 1024);
    runner.say(mac.to_string());
    runner.say(pc.to_string());
    runner.say(format!("mac == pc:  {}", truth(mac == pc)));
    runner.say(format!("mac > pc:   {}", truth(mac > pc)));
    runner.say(format!("mac < pc:   {}", truth(mac < pc)));
    runner.say(format!("repr(pc):   {pc:?}"));

    let mut newpc = Computer::with_peripherals(
        "x86",
        1024,
        ["mouse", "keyboard", "monitor", "bluetooth dongle", "usb flash drive"],
    );
    runner.say(&newpc[2]);
    runner.say(&newpc[3]);
    runner.say(truth(newpc[10].is_empty()).to_string());

    store(runner, &mut newpc, 0, "headphones");
    runner.say(&newpc[0]);
    store(runner, &mut newpc, 10, "zip drive");
    runner.say(format!("{} {}", &newpc[9], &newpc[10]));

    for (i, item) in newpc.iter().enumerate() {
        runner.say(format!("{i} {item}"));
    }

    runner.say(format!("cd-rom in pc:  {}", truth(newpc.contains("cd-rom"))));
    store(runner, &mut newpc, 6, "cd-rom");
    runner.say(format!(
        "just added it... now is cd-rom in newpc:  {}",
        truth(newpc.contains("cd-rom"))
    ));

    runner.say(newpc.call(&Value::Int(50))?.to_string());
    let over_numbers: Vec<Value> = [100i64, 1000, 5555]
        .into_iter()
        .map(|n| newpc.call(&Value::Int(n)))
        .collect::<Result<_, _>>()?;
    runner.say(Value::List(over_numbers).to_string());
    let over_itself: Vec<Value> = newpc
        .iter()
        .map(|p| newpc.call(&Value::from(p.as_str())))
        .collect::<Result<_, _>>()?;
    runner.say(Value::List(over_itself).to_string());

    Ok(())
}

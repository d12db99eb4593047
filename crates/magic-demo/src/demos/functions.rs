//! Walkthrough of the function gallery: one section per parameter shape

use anyhow::Result;
use magic_core::{Args, Value};

use super::DemoRunner;

pub(super) fn run(runner: &DemoRunner) -> Result<()> {
    runner.section("person1");
    runner.call("person1", Args::new().arg("blaine"))?;
    runner.say("");

    runner.section("person2");
    runner.call("person2", Args::new())?;
    runner.call("person2", Args::new().arg("ken"))?;
    runner.say("");

    runner.section("person3");
    runner.call("person3", Args::new().arg("blaine"))?;
    runner.call("person3", Args::new().args(["blaine", "dayton", "airport"]))?;
    runner.call("person3", Args::new().arg("blaine").kwarg("work", "coffee shop"))?;
    runner.call(
        "person3",
        Args::new()
            .arg("blaine")
            .kwarg("work", "donut shop")
            .kwarg("city", "san francisco"),
    )?;
    runner.say("");

    runner.section("person4");
    runner.call(
        "person4",
        Args::new()
            .args(["blaine", "random", "parameters", "for"])
            .args([5i64, 19])
            .arg(Value::function("person4")),
    )?;
    // splatted: ten separate parameters
    runner.call("person4", Args::new().arg("blaine").args(Value::range_items(10)))?;
    // not splatted: one list parameter
    runner.call("person4", Args::new().arg("blaine").arg(Value::range(10)))?;
    runner.say("");

    runner.section("person5");
    runner.call(
        "person5",
        Args::new()
            .arg("blaine")
            .kwarg("keyword", "mykeyword")
            .kwarg("city", "columbus, ohio"),
    )?;
    runner.call(
        "person5",
        Args::new().kwarg("city", "cleveland").kwarg("name", "blaine"),
    )?;
    runner.say("");

    runner.section("person6");
    runner.call(
        "person6",
        Args::new()
            .args([1i64, 2, 3, 4, 5])
            .kwarg("name", "blaine")
            .kwarg("city", "cincinnati")
            .kwarg("work", "clifton labs"),
    )?;
    runner.call(
        "person6",
        Args::new()
            .args([1i64, 2, 3, 4])
            .kwarg("name", "blaine")
            .kwarg("city", "cincinnati")
            .kwarg("work", "cliftonlabs")
            .kwarg("func", Value::function("person5")),
    )?;

    Ok(())
}

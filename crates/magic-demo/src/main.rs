use anyhow::{anyhow, Result};
use clap::{Arg, Command};
use magic_core::{init_tracing, Format, MagicConfig, Notifier};
use magic_demo::demos::{parse_demo, DemoRunner};

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("magic-demo")
        .version(magic_core::VERSION)
        .about("Walkthroughs of variadic calls, operator overloads and persistence")
        .arg(
            Arg::new("demo")
                .value_name("DEMO")
                .help("Demo to run: functions, magic, pickle or all")
                .default_value("all")
                .index(1),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .value_name("PATH")
                .help("Directory for persisted files")
                .default_value("."),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Encoding for persisted files: binary or json")
                .default_value("binary"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Extract command line options
    let demo_name = matches
        .get_one::<String>("demo")
        .map(String::as_str)
        .unwrap_or("all");
    let out_dir = matches
        .get_one::<String>("out-dir")
        .cloned()
        .unwrap_or_else(|| ".".to_string());
    let format: Format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("binary")
        .parse()
        .map_err(|e: String| anyhow!(e))?;

    let config = MagicConfig {
        output_dir: out_dir.into(),
        format,
        debug: matches.get_flag("debug"),
    };
    init_tracing(&config);

    let demo = parse_demo(demo_name)?;
    config.prepare_output_dir()?;

    let runner = DemoRunner::new(config);
    if let Err(e) = runner.run(demo) {
        runner.notifier().on_error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }

    Ok(())
}

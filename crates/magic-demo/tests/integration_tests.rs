use std::sync::Arc;

use magic_core::{persist, CaptureNotifier, Computer, Format, MagicConfig, Record, Value};
use magic_demo::demos::{parse_demo, Demo, DemoRunner};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn capture_runner(config: MagicConfig) -> (DemoRunner, Arc<CaptureNotifier>) {
    let capture = Arc::new(CaptureNotifier::new());
    let mut runner = DemoRunner::new(config);
    runner.set_notifier(Box::new(capture.clone()));
    (runner, capture)
}

fn run_demo(demo: Demo, dir: &TempDir) -> Vec<String> {
    let (runner, capture) = capture_runner(MagicConfig {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    });
    runner.run(demo).unwrap();
    assert!(capture.errors().is_empty());
    capture.lines()
}

#[test]
fn test_functions_demo_output() {
    let dir = TempDir::new().unwrap();
    let lines = run_demo(Demo::Functions, &dir);

    let mut expected = vec![
        "person1",
        "My name is blaine",
        "",
        "person2",
        "My name is ken",
        "My name is ken",
        "",
        "person3",
        "My name is blaine from cincinnati, I work at library",
        "My name is blaine from dayton, I work at airport",
        "My name is blaine from cincinnati, I work at coffee shop",
        "My name is blaine from san francisco, I work at donut shop",
        "",
        "person4",
        "My name is blaine, my parameter list is:",
        "random",
        "parameters",
        "for",
        "5",
        "19",
        "<function person4>",
        "My name is blaine, my parameter list is:",
        "0",
        "1",
        "2",
        "3",
        "4",
        "5",
        "6",
        "7",
        "8",
        "9",
        "My name is blaine, my parameter list is:",
        "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]",
        "",
        "person5",
        "My name is blaine",
        "I am from columbus, ohio",
        "keyword: mykeyword",
        "city: columbus, ohio",
        "My name is blaine",
        "I am from cleveland",
        "city: cleveland",
        "",
        "person6",
        "My name is blaine",
        "My params are:",
        "0. 1",
        "1. 2",
        "2. 3",
        "3. 4",
        "4. 5",
        "My keywords are:",
        "0. name:blaine",
        "1. city:cincinnati",
        "2. work:clifton labs",
        "Now I'm going to call the function contained in the keyword 'func':",
        "no function found",
    ];
    expected.extend([
        "My name is blaine",
        "My params are:",
        "0. 1",
        "1. 2",
        "2. 3",
        "3. 4",
        "My keywords are:",
        "0. name:blaine",
        "1. city:cincinnati",
        "2. work:cliftonlabs",
        "3. func:<function person5>",
        "Now I'm going to call the function contained in the keyword 'func':",
        "==== result from calling: <function person5> =====",
        "My name is blaine",
        "I am from cincinnati",
        "city: cincinnati",
        "work: cliftonlabs",
        "func: <function person5>",
    ]);

    assert_eq!(lines, expected);
}

#[test]
fn test_magic_demo_output() {
    let dir = TempDir::new().unwrap();
    let lines = run_demo(Demo::Magic, &dir);

    let expected = vec![
        "magic methods",
        "computer object; platform: mac; memory: 512",
        "computer object; platform: x86; memory: 1024",
        "mac == pc:  False",
        "mac > pc:   False",
        "mac < pc:   True",
        "repr(pc):   computer(platform='x86', memory=1024)",
        "monitor",
        "bluetooth dongle",
        "True",
        "headphones",
        "11",
        "empty slot zip drive",
        "0 headphones",
        "1 keyboard",
        "2 monitor",
        "3 bluetooth dongle",
        "4 usb flash drive",
        "5 empty slot",
        "6 empty slot",
        "7 empty slot",
        "8 empty slot",
        "9 empty slot",
        "10 zip drive",
        "cd-rom in pc:  False",
        "just added it... now is cd-rom in newpc:  True",
        "1074",
        "[1124, 2024, 6579]",
        "['1024_headphones', '1024_keyboard', '1024_monitor', '1024_bluetooth dongle', \
         '1024_usb flash drive', '1024_empty slot', '1024_cd-rom', '1024_empty slot', \
         '1024_empty slot', '1024_empty slot', '1024_zip drive']",
    ];

    assert_eq!(lines, expected);
}

#[test]
fn test_pickle_demo_writes_and_restores() {
    let dir = TempDir::new().unwrap();
    let lines = run_demo(Demo::Pickle, &dir);

    assert_eq!(
        lines,
        vec![
            "pickle",
            "loaded blaine.pickle: {'name': 'blaine', 'city': 'cincinnati', 'favorite food': 'pizza'}",
            "computer object; platform: Gameboy; memory: 16",
            "saving to computer.pickle",
            "deleting computer instance",
            "computer object; platform: Gameboy; memory: 16",
        ]
    );

    let comp: Computer = persist::load(dir.path().join("computer.pickle"), Format::Binary).unwrap();
    assert_eq!(comp.platform(), "Gameboy");
    assert_eq!(comp.memory(), 16);
    assert_eq!(comp.len(), 5);
    assert_eq!(&comp[4], "plastic case");

    let record: Record = persist::load(dir.path().join("blaine.pickle"), Format::Binary).unwrap();
    assert_eq!(record.get("favorite food"), Some(&Value::from("pizza")));
}

#[test]
fn test_pickle_demo_json_format() {
    let dir = TempDir::new().unwrap();
    let (runner, capture) = capture_runner(MagicConfig {
        output_dir: dir.path().to_path_buf(),
        format: Format::Json,
        ..Default::default()
    });
    runner.run(Demo::Pickle).unwrap();

    assert!(capture.text().contains("saving to computer.json"));
    let raw = std::fs::read_to_string(dir.path().join("computer.json")).unwrap();
    assert!(raw.contains("\"kind\": \"computer\""));
    assert!(raw.contains("Gameboy"));
}

#[test]
fn test_pickle_demo_overwrites_previous_run() {
    let dir = TempDir::new().unwrap();
    persist::dump(
        &Computer::new("mac", 512),
        dir.path().join("computer.pickle"),
        Format::Binary,
    )
    .unwrap();

    run_demo(Demo::Pickle, &dir);

    let comp: Computer = persist::load(dir.path().join("computer.pickle"), Format::Binary).unwrap();
    assert_eq!(comp.platform(), "Gameboy");
}

#[test]
fn test_all_runs_every_demo_in_order() {
    let dir = TempDir::new().unwrap();
    let lines = run_demo(Demo::All, &dir);

    let functions = lines.iter().position(|l| l == "person1").unwrap();
    let magic = lines.iter().position(|l| l == "magic methods").unwrap();
    let pickle = lines.iter().position(|l| l == "pickle").unwrap();
    assert!(functions < magic && magic < pickle);
    assert!(dir.path().join("computer.pickle").exists());
}

#[test]
fn test_pickle_demo_missing_output_dir_fails() {
    let dir = TempDir::new().unwrap();
    let runner = DemoRunner::with_output_dir(dir.path().join("does/not/exist"));
    assert!(runner.run(Demo::Pickle).is_err());
}

#[test]
fn test_parse_demo_from_cli_names() {
    assert_eq!(parse_demo("all").unwrap(), Demo::All);
    assert_eq!(parse_demo("persist").unwrap(), Demo::Pickle);
    assert!(parse_demo("bogus").is_err());
}

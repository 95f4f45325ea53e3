use assert_cmd::Command;
use bashir_core::builder::ModuleBuilder;
use bashir_core::persist::save_module;
use bashir_core::types::Type;
use bashir_core::values::Value;
use predicates::prelude::*;
use std::path::Path;

fn write_sample_module(path: &Path) {
    let mut builder = ModuleBuilder::new();

    let mut func = builder.function("main");
    let mut entry = func.entry_block();
    let slot = entry.alloca(Type::Int(32));
    entry.store(slot.clone(), Value::int(41));
    let loaded = entry.load(slot);
    let sum = entry.add(loaded, Value::int(1));
    entry.ret(sum);
    func.build().unwrap();

    save_module(&builder.build(), path).unwrap();
}

fn write_helper_module(path: &Path) {
    let mut builder = ModuleBuilder::new();

    let mut func = builder.function("helper");
    func.entry_block().ret(Value::int(0));
    func.build().unwrap();

    save_module(&builder.build(), path).unwrap();
}

#[test]
fn compile_writes_the_program_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.json");
    write_sample_module(&input);

    Command::cargo_bin("bashir")
        .unwrap()
        .arg("compile")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("main() {"))
        .stdout(predicate::str::contains("_brmainentry() {"))
        .stdout(predicate::str::ends_with(
            "declare -A local\nmain local[@]\nexit ${local[ret]}\n",
        ));
}

#[test]
fn compile_merges_multiple_inputs_before_the_trailer() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("main.json");
    let second = dir.path().join("helper.json");
    write_sample_module(&first);
    write_helper_module(&second);

    let output = Command::cargo_bin("bashir")
        .unwrap()
        .arg("compile")
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let main_at = stdout.find("main() {").unwrap();
    let helper_at = stdout.find("helper() {").unwrap();
    let trailer_at = stdout.find("declare -A local").unwrap();
    assert!(main_at < helper_at && helper_at < trailer_at);
    assert_eq!(stdout.matches("declare -A local").count(), 1);
}

#[test]
fn compile_writes_to_a_file_with_output_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.json");
    let output = dir.path().join("program.sh");
    write_sample_module(&input);

    Command::cargo_bin("bashir")
        .unwrap()
        .arg("compile")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let script = std::fs::read_to_string(&output).unwrap();
    assert!(script.contains("local[s0]=0"));
    assert!(script.ends_with("exit ${local[ret]}\n"));
}

#[test]
fn compile_fails_on_a_malformed_module_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    std::fs::write(&input, "not json").unwrap();

    Command::cargo_bin("bashir")
        .unwrap()
        .arg("compile")
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn inspect_summarizes_functions_and_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.json");
    write_sample_module(&input);

    Command::cargo_bin("bashir")
        .unwrap()
        .arg("inspect")
        .arg(&input)
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 function(s)"))
        .stdout(predicate::str::contains("Function: main"))
        .stdout(predicate::str::contains("Block entry: 4 instructions"));
}

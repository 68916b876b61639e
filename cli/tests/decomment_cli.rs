use std::error::Error;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn strips_directory_in_place() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let app = temp.child("app.py");
    app.write_str("x = \"a # b\"  # real comment\n# gone\ny = 2\n")?;
    temp.child("web").create_dir_all()?;
    let script = temp.child("web/main.js");
    script.write_str("// pure comment\nlet y = 1;\n")?;
    let notes = temp.child("notes.txt");
    notes.write_str("# untouched\n")?;

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.current_dir(&temp)
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"))
        .stdout(predicate::str::contains("2 files processed successfully"));

    app.assert("x = \"a # b\"\ny = 2\n");
    script.assert("let y = 1;\n");
    notes.assert("# untouched\n");

    Ok(())
}

#[test]
fn output_dir_mirrors_layout() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let src = temp.child("src");
    src.child("pages").create_dir_all()?;
    src.child("pages/index.html")
        .write_str("<!-- note -->\n<div>x</div>\n")?;
    let out = temp.child("out");

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg(src.path())
        .arg("--output-dir")
        .arg(out.path())
        .arg("--no-confirm")
        .assert()
        .success();

    out.child("pages/index.html").assert("\n<div>x</div>\n");
    src.child("pages/index.html")
        .assert("<!-- note -->\n<div>x</div>\n");

    Ok(())
}

#[test]
fn keep_header_preserves_python_header() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let header = "#!/usr/bin/env python3\n# -*- coding: utf-8 -*-\n'''\nAuthor: X\nCode function: Y\n'''";
    let file = temp.child("tool.py");
    file.write_str(&format!("{header}\nCODE#comment\n"))?;

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg(file.path())
        .arg("--keep-header")
        .arg("--no-confirm")
        .assert()
        .success();

    file.assert(format!("{header}\n\nCODE\n"));

    Ok(())
}

#[test]
fn drop_blank_lines_flag_removes_empty_lines() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let file = temp.child("site.css");
    file.write_str("/* a */\n\na {}\n\n\nb {}\n")?;

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg(file.path())
        .arg("--drop-blank-lines")
        .arg("--no-confirm")
        .assert()
        .success();

    file.assert("a {}\nb {}\n");

    Ok(())
}

#[test]
fn no_recursive_skips_subdirectories() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let top = temp.child("top.js");
    top.write_str("a(); // x\n")?;
    temp.child("lib").create_dir_all()?;
    let nested = temp.child("lib/nested.js");
    nested.write_str("b(); // y\n")?;

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.current_dir(&temp)
        .arg("--no-recursive")
        .arg("--no-confirm")
        .assert()
        .success();

    top.assert("a();\n");
    nested.assert("b(); // y\n");

    Ok(())
}

#[test]
fn unsupported_single_file_is_reported_as_failure() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let file = temp.child("README.md");
    file.write_str("# title\n")?;

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg(file.path())
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"))
        .stderr(predicate::str::contains("Skipping"))
        .stdout(predicate::str::contains("1 file failed"));

    file.assert("# title\n");

    Ok(())
}

#[test]
fn lang_filter_limits_processing() -> TestResult {
    let temp = assert_fs::TempDir::new()?;
    let py = temp.child("a.py");
    py.write_str("x = 1 # c\n")?;
    let js = temp.child("b.js");
    js.write_str("y(); // c\n")?;

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.current_dir(&temp)
        .arg("--lang")
        .arg("js")
        .arg("--no-confirm")
        .assert()
        .success();

    py.assert("x = 1 # c\n");
    js.assert("y();\n");

    Ok(())
}

#[test]
fn missing_path_fails() -> TestResult {
    let temp = assert_fs::TempDir::new()?;

    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg(temp.child("nope").path())
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));

    Ok(())
}

#[test]
fn completion_subcommand_prints_script() -> TestResult {
    let mut cmd = cargo_bin_cmd!("decomment");
    cmd.arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("decomment"));

    Ok(())
}

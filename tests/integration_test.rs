use assert_cmd::Command;
use assert_cmd::cargo;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn wadfilter() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("wadfilter"));
    cmd.env_remove("WADFILTER_BLACKLIST")
        .env_remove("WADFILTER_LOAD_FIRST")
        .env_remove("RUST_LOG");
    cmd
}

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

#[test]
fn test_end_to_end_filter() {
    let root = tempdir().unwrap();
    let wads = root.path().join("addons");
    fs::create_dir(&wads).unwrap();
    touch(&wads, &["a.wad", "b.pk3", "c.txt", "d.kart"]);

    let blacklist = root.path().join("blacklist.txt");
    let load_first = root.path().join("load_first.txt");
    fs::write(&blacklist, "b.pk3\n").unwrap();
    fs::write(&load_first, "d.kart\n").unwrap();

    let expected = format!(
        "{} {}\n",
        wads.join("d.kart").display(),
        wads.join("a.wad").display()
    );

    wadfilter()
        .arg("--wads-dir")
        .arg(&wads)
        .arg("--blacklist")
        .arg(&blacklist)
        .arg("--load-first")
        .arg(&load_first)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_list_files_from_env() {
    let root = tempdir().unwrap();
    touch(root.path(), &["a.wad", "b.pk3"]);
    let blacklist = root.path().join("blacklist.txt");
    fs::write(&blacklist, "a.wad").unwrap();

    wadfilter()
        .arg("--wads-dir")
        .arg(root.path())
        .env("WADFILTER_BLACKLIST", &blacklist)
        .assert()
        .success()
        .stdout(format!("{}\n", root.path().join("b.pk3").display()));
}

#[test]
fn test_empty_dir_prints_empty_line() {
    let root = tempdir().unwrap();

    wadfilter()
        .arg("--wads-dir")
        .arg(root.path())
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_missing_dir_and_list_files_are_not_errors() {
    let root = tempdir().unwrap();

    wadfilter()
        .arg("--wads-dir")
        .arg(root.path().join("nope"))
        .arg("--blacklist")
        .arg(root.path().join("missing-blacklist.txt"))
        .arg("--load-first")
        .arg(root.path().join("missing-first.txt"))
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_priority_names_missing_package() {
    let root = tempdir().unwrap();
    let wads = root.path().join("addons");
    fs::create_dir(&wads).unwrap();
    touch(&wads, &["a.wad"]);
    let load_first = root.path().join("load_first.txt");
    fs::write(&load_first, "phantom.kart a.wad").unwrap();

    wadfilter()
        .arg("--wads-dir")
        .arg(&wads)
        .arg("--load-first")
        .arg(&load_first)
        .assert()
        .success()
        .stdout(format!("{}\n", wads.join("a.wad").display()));
}

#[test]
fn test_debug_log_goes_to_stderr() {
    let root = tempdir().unwrap();
    touch(root.path(), &["a.wad"]);
    let blacklist = root.path().join("blacklist.txt");
    fs::write(&blacklist, "ghost.pk3").unwrap();

    wadfilter()
        .env("RUST_LOG", "debug")
        .arg("--wads-dir")
        .arg(root.path())
        .arg("--blacklist")
        .arg(&blacklist)
        .assert()
        .success()
        .stdout(format!("{}\n", root.path().join("a.wad").display()))
        .stderr(predicates::str::contains("ghost.pk3"));
}

#[test]
fn test_missing_wads_dir_argument_fails() {
    wadfilter()
        .assert()
        .failure()
        .stderr(predicates::str::contains("--wads-dir"));
}

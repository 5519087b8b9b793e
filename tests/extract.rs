#![cfg(unix)]

use std::{
    env,
    ffi::OsString,
    fs,
    os::unix::fs::PermissionsExt,
    path::Path,
};
use tempfile::TempDir;
use cpath::{Options, Error, IncludePathList, SearchPathConfig, extract_include_paths};

/// Writes an executable shell script standing in for a compiler
fn fake_compiler(dir: &TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_str().unwrap().into()
}

const GCC_LIKE: &str = r#"
[ "$1 $2 $3" = "-v -E --language=c" ] || exit 3
[ "$4" = "/dev/null" ] || exit 4
echo '# 0 "/dev/null"'
cat >&2 <<'EOF'
Using built-in specs.
#include "..." search starts here:
#include <...> search starts here:
 /usr/lib/gcc/x86_64-linux-gnu/12/include
 /usr/local/include
   /usr/include
End of search list.
EOF
"#;

const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

fn locale_snapshot() -> Vec<Option<OsString>> {
    LOCALE_VARS.iter().map(|name| env::var_os(name)).collect()
}

fn prior_config() -> SearchPathConfig {
    let mut config = SearchPathConfig::new();
    config.set_include_paths(IncludePathList::new(vec!["/previous".into()]));
    config
}

#[test]
fn extracts_from_gcc_like_output() {
    let dir = TempDir::new().unwrap();
    let program = fake_compiler(&dir, "gcc", GCC_LIKE);

    let mut config = SearchPathConfig::new();
    let mut messages: Vec<String> = Vec::new();

    let paths = extract_include_paths(&Options::with_program(program), &mut config, &mut messages)
        .unwrap()
        .unwrap();

    assert_eq!(paths.as_slice(), [
        "/usr/lib/gcc/x86_64-linux-gnu/12/include",
        "/usr/local/include",
        "/usr/include",
    ]);
    assert_eq!(config.include_paths(), Some(&paths));
    assert!(messages.is_empty());
}

#[test]
fn repeated_extraction_is_stable() {
    let dir = TempDir::new().unwrap();
    let options = Options::with_program(fake_compiler(&dir, "gcc", GCC_LIKE));
    let mut config = SearchPathConfig::new();
    let mut messages: Vec<String> = Vec::new();

    let first = extract_include_paths(&options, &mut config, &mut messages).unwrap();
    let second = extract_include_paths(&options, &mut config, &mut messages).unwrap();

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(config.include_paths(), second.as_ref());
}

#[test]
fn missing_compiler_is_advisory() {
    let dir = TempDir::new().unwrap();
    let program = dir.path().join("no-such-cc");

    let mut config = prior_config();
    let mut messages: Vec<String> = Vec::new();
    let before = locale_snapshot();

    let result = extract_include_paths(
        &Options::with_program(program.to_str().unwrap()), &mut config, &mut messages);

    assert_eq!(locale_snapshot(), before);
    assert!(matches!(result, Ok(None)));
    assert_eq!(config, prior_config());
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("no-such-cc"));
}

#[test]
fn failing_compiler_is_advisory() {
    let dir = TempDir::new().unwrap();
    let program = fake_compiler(&dir, "cc", "echo 'cc: fatal error' >&2\nexit 1");

    let mut config = prior_config();
    let mut messages: Vec<String> = Vec::new();
    let before = locale_snapshot();

    let result = extract_include_paths(&Options::with_program(program), &mut config, &mut messages);

    assert_eq!(locale_snapshot(), before);
    assert!(matches!(result, Ok(None)));
    assert_eq!(config, prior_config());
    assert_eq!(messages, ["Compiler exited with status 1"]);
}

#[test]
fn unrecognized_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let program = fake_compiler(&dir, "cc", "echo 'tcc version 0.9.27'");

    let mut config = prior_config();
    let mut messages: Vec<String> = Vec::new();

    let result = extract_include_paths(&Options::with_program(program), &mut config, &mut messages);

    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(config, prior_config());
    assert!(messages.is_empty());
}

#[test]
fn locale_is_forced_on_child_only() {
    let dir = TempDir::new().unwrap();
    let program = fake_compiler(&dir, "cc", r#"
[ "$LC_ALL" = "C" ] || exit 5
[ "$LANG" = "C" ] || exit 6
cat >&2 <<'EOF'
#include <...> search starts here:
 /usr/include
End of search list.
EOF
"#);

    let before = locale_snapshot();

    let mut config = SearchPathConfig::new();
    let mut messages: Vec<String> = Vec::new();
    let paths = extract_include_paths(&Options::with_program(program), &mut config, &mut messages)
        .unwrap();

    assert_eq!(paths.map(|paths| paths.len()), Some(1));
    assert_eq!(locale_snapshot(), before);
}

#[test]
fn custom_overrides_reach_the_compiler() {
    let dir = TempDir::new().unwrap();
    let program = fake_compiler(&dir, "cc", r#"
cat >&2 <<EOF
#include <...> search starts here:
 $CPATH_TEST_ROOT/include
End of search list.
EOF
"#);

    let mut options = Options::with_program(program);
    options.env_overrides.push(("CPATH_TEST_ROOT".into(), "/sysroot".into()));

    let mut config = SearchPathConfig::new();
    let mut messages: Vec<String> = Vec::new();
    extract_include_paths(&options, &mut config, &mut messages).unwrap();

    assert!(env::var_os("CPATH_TEST_ROOT").is_none());
    assert_eq!(config.include_paths().map(|paths| paths.to_paths()),
               Some(vec![Path::new("/sysroot/include").to_path_buf()]));
}

#[test]
fn stdout_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let program = fake_compiler(&dir, "cc", r#"
printf 'junk'
cat >&2 <<'EOF'
#include <...> search starts here:
 /usr/include
End of search list.
EOF
"#);

    let mut config = SearchPathConfig::new();
    let mut messages: Vec<String> = Vec::new();
    let paths = extract_include_paths(&Options::with_program(program), &mut config, &mut messages)
        .unwrap()
        .unwrap();

    assert_eq!(paths.as_slice(), ["/usr/include"]);
}

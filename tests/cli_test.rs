use clap::Parser;
use codegen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("codegen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.root.is_none());
    assert_eq!(parsed.config, PathBuf::from("codegen.json"));
    assert_eq!(parsed.output_dir, PathBuf::from("output"));
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--config",
        "gen/codegen.yaml",
        "--output-dir",
        "src/generated",
        "--verbose",
        "./project",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.root, Some(PathBuf::from("./project")));
    assert_eq!(parsed.config, PathBuf::from("gen/codegen.yaml"));
    assert_eq!(parsed.output_dir, PathBuf::from("src/generated"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-c", "other.json", "-o", "out", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config, PathBuf::from("other.json"));
    assert_eq!(parsed.output_dir, PathBuf::from("out"));
    assert!(parsed.verbose);
}

#[test]
fn test_context_uses_explicit_root() {
    let parsed = Args::try_parse_from(make_args(&["-o", "gen", "/work"])).unwrap();
    let ctx = parsed.into_context();

    assert_eq!(ctx.config_path(), Some(PathBuf::from("/work/codegen.json")));
    assert_eq!(ctx.output_root(), Some(PathBuf::from("/work/gen")));
}

#[test]
fn test_context_defaults_to_current_dir() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    let ctx = parsed.into_context();

    assert_eq!(ctx.root(), std::env::current_dir().ok().as_deref());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./project", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

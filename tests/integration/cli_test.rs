use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use dts_walker::{
    cli::{args::Args, commands::analyze, Command},
    config::{load_config_with_env_prefix, CliConfig},
    models::config::OutputFormat,
    Settings,
};

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["dts-walker"]);
    assert_eq!(args.path, None);
    assert!(args.entry.is_empty());
    assert!(args.output.is_none());
    assert!(!args.quiet);
    assert!(!args.init);

    let args = Args::parse_from([
        "dts-walker",
        "--path",
        "types/jquery",
        "--name",
        "jquery",
        "--entry",
        "index.d.ts",
        "--entry",
        "legacy.d.ts",
        "--test",
        "jquery-tests.ts",
        "--output",
        "json",
        "--output-file",
        "report.json",
        "--verbose",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("types/jquery")));
    assert_eq!(args.name.as_deref(), Some("jquery"));
    assert_eq!(args.entry, vec!["index.d.ts", "legacy.d.ts"]);
    assert_eq!(args.test, vec!["jquery-tests.ts"]);
    assert_eq!(args.output_file, Some(PathBuf::from("report.json")));
    assert!(args.verbose);
}

#[test]
fn test_quiet_and_verbose_conflict() {
    assert!(Args::try_parse_from(["dts-walker", "--quiet", "--verbose"]).is_err());
}

#[test]
fn test_json_report_written_to_file() {
    let dir = tempdir().unwrap();
    let package = dir.path().join("jquery");
    fs::create_dir_all(&package).unwrap();
    fs::write(
        package.join("index.d.ts"),
        "declare const jQuery: (selector: string) => unknown;\ndeclare const $: typeof jQuery;\n",
    )
    .unwrap();
    fs::write(package.join("jquery-tests.ts"), "import * as sizzle from \"sizzle\";\n").unwrap();

    let output = dir.path().join("report.json");
    let settings = Settings {
        package_path: package,
        output_format: OutputFormat::Json,
        output_file: Some(output.clone()),
        ..Default::default()
    };
    analyze(&settings).unwrap();

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["packageName"], "jquery");
    assert_eq!(report["moduleInfo"]["declFiles"][0], "index.d.ts");
    assert_eq!(report["moduleInfo"]["globals"], serde_json::json!(["$", "jQuery"]));
    assert_eq!(report["testDependencies"], serde_json::json!(["sizzle"]));
}

#[test]
fn test_cli_layer_overrides_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("walker.toml");
    fs::write(
        &config_path,
        format!(
            "package_path = {:?}\npackage_name = \"from-file\"\noutput_format = \"json\"\n",
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let args = Args::parse_from([
        "dts-walker",
        "--config",
        config_path.to_str().unwrap(),
        "--name",
        "from-cli",
    ]);
    let cli_args = CliConfig::from_args(&args).into_args();
    let settings = load_config_with_env_prefix(cli_args, "DTS_WALKER_CLI_TEST").unwrap();

    assert_eq!(settings.package_name.as_deref(), Some("from-cli"));
    assert_eq!(settings.output_format, OutputFormat::Json);
    assert_eq!(settings.package_path, dir.path());
}

#[test]
fn test_command_reports_structural_exit_code() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.d.ts"), "export * from \"../elsewhere\";\n").unwrap();

    let args = Args::parse_from(["dts-walker", "--path", dir.path().to_str().unwrap(), "--quiet"]);
    assert_eq!(Command::from_args(args).run(), 3);
}

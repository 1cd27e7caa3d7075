//! Configuration: iconpack.toml, --config, --dir and ICONPACK_* overrides.

mod common;

use common::*;

#[test]
fn config_file_sets_dir_global_and_header() {
    let env = TestEnv::with_icons(&[]);
    std::fs::create_dir_all(env.project_path("assets")).unwrap();
    std::fs::write(env.project_path("assets").join(WIFI_LONG), SVG_BODY).unwrap();
    std::fs::write(
        env.project_path("iconpack.toml"),
        "[icons]\ndir = \"assets\"\n\n[manifest]\nglobal = \"AppIcons\"\nheader = [\"// generated\"]\n",
    )
    .unwrap();

    let result = env.run(&["sync"]);

    assert!(result.success, "{}", result.combined_output());
    let manifest = std::fs::read_to_string(env.project_path("assets/icons.slint")).unwrap();
    assert_eq!(
        manifest,
        "// generated\n\nexport global AppIcons {\n    out property <image> wifi: @image-url(\"wifi.svg\");\n}\n"
    );
}

#[test]
fn dir_flag_overrides_config_and_env() {
    let env = TestEnv::with_icons(&[]);
    std::fs::create_dir_all(env.project_path("flag")).unwrap();
    std::fs::write(env.project_path("flag/home.svg"), SVG_BODY).unwrap();
    std::fs::write(env.project_path("iconpack.toml"), "[icons]\ndir = \"nowhere\"\n").unwrap();

    let result = env.run_with_env(&["generate", "--dir", "flag"], &[("ICONPACK_DIR", "elsewhere")]);

    assert!(result.success, "{}", result.combined_output());
    assert!(env.project_path("flag/icons.slint").exists());
}

#[test]
fn env_overrides_config_file() {
    let env = TestEnv::with_icons(&["home.svg"]);
    std::fs::write(env.project_path("iconpack.toml"), "[manifest]\nglobal = \"FromFile\"\n").unwrap();

    let result = env.run_with_env(&["generate"], &[("ICONPACK_GLOBAL", "FromEnv")]);

    assert!(result.success);
    assert!(env.manifest().contains("export global FromEnv {"));
}

#[test]
fn unknown_config_key_warns_on_stderr() {
    let env = TestEnv::with_icons(&["home.svg"]);
    std::fs::write(env.project_path("iconpack.toml"), "[manifest]\nglobel = \"X\"\n").unwrap();

    let result = env.run(&["generate"]);

    assert!(result.success);
    assert!(
        result.stderr.contains("unknown config key 'globel'"),
        "{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'global'"));
}

#[test]
fn explicit_missing_config_fails() {
    let env = TestEnv::with_icons(&["home.svg"]);

    let result = env.run(&["--config", "missing.toml", "generate"]);

    assert!(!result.success);
    assert!(result.stderr.contains("failed to load configuration"));
}

#[test]
fn invalid_global_name_fails() {
    let env = TestEnv::with_icons(&["home.svg"]);

    let result = env.run_with_env(&["generate"], &[("ICONPACK_GLOBAL", "1nvalid")]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid global name"), "{}", result.stderr);
}

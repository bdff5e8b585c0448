//! End-to-end runs of the `glgen` binary against the trimmed registry fixture.

use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../glgen-registry/tests/fixtures/mini_gl.xml")
}

fn glgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glgen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run glgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_generate_cpp_from_flags() {
    let temp = tempfile::tempdir().unwrap();
    let registry = fixture();
    let output = glgen(
        temp.path(),
        &[
            "generate",
            "--registry",
            registry.to_str().unwrap(),
            "--api",
            "gl",
            "--version",
            "3.3",
            "--profile",
            "core",
            "--language",
            "cpp",
            "--prefix",
            "oglhpp",
            "--output",
            "out",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let out = temp.path().join("out");
    let header = std::fs::read_to_string(out.join("include/oglhpp/gl.h")).unwrap();
    assert!(!header.contains("glBegin"));
    assert!(out.join("src/gl.c").exists());
    let hpp = std::fs::read_to_string(out.join("include/oglhpp/gl.hpp")).unwrap();
    assert!(hpp.contains("inline void bindTexture(TextureTarget target, GLuint texture) {"));
    assert!(stdout(&output).contains("Include: <oglhpp/gl.hpp>"));
}

#[test]
fn test_generate_from_config_file() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join("glgen.toml"),
        format!(
            "[registry]\npath = {:?}\n\n[target]\napi = \"gles2\"\nversion = \"2.0\"\n",
            fixture().display().to_string()
        ),
    )
    .unwrap();

    let output = glgen(temp.path(), &["generate", "--dry-run"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("── include/glgen/gl.h ──"));
    assert!(text.contains("── src/gl.c ──"));
    assert!(text.contains("#define GL_TRIANGLES 0x0004"));
    assert!(text.contains("2 files would be generated"));
    assert!(!temp.path().join("generated").exists());
}

#[test]
fn test_check_counts() {
    let temp = tempfile::tempdir().unwrap();
    let registry = fixture();
    let output = glgen(
        temp.path(),
        &["check", "-r", registry.to_str().unwrap(), "--version", "1.0"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("✓ gl 1.0 consolidates cleanly"));
    assert!(text.contains("Commands: 5"));
    assert!(text.contains("Constants: 8"));
}

#[test]
fn test_info_lists_apis_and_classes() {
    let temp = tempfile::tempdir().unwrap();
    let registry = fixture();
    let output = glgen(temp.path(), &["info", "-r", registry.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("  - gl (1.0, 1.1, 1.5, 3.2)"));
    assert!(text.contains("  - gles2 (2.0)"));
    assert!(text.contains("  - Buffer (1 command)"));
}

#[test]
fn test_unknown_api_is_reported() {
    let temp = tempfile::tempdir().unwrap();
    let registry = fixture();
    let output = glgen(
        temp.path(),
        &[
            "check",
            "-r",
            registry.to_str().unwrap(),
            "--api",
            "vulkan",
            "--version",
            "1.0",
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown api 'vulkan'"));
}

#[test]
fn test_missing_registry_is_reported() {
    let temp = tempfile::tempdir().unwrap();
    let output = glgen(temp.path(), &["check", "-r", "missing.xml", "--version", "1.0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read 'missing.xml'"));
}

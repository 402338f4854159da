//! Tests that run the built CLI binaries.

use std::process::Command;

use flowerdesk_core::password::verify_password;
use flowerdesk_tools::icons::PWA_ICON_NAMES;

fn generate_hash() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-hash"))
}

#[test]
fn generate_hash_without_password_prints_usage() {
    let output = generate_hash().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
}

#[test]
fn generate_hash_prints_verifiable_hash() {
    let output = generate_hash()
        .args(["s3cret-pass", "--login-id", "hanbit"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let hash = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Hash:"))
        .map(str::trim)
        .expect("output should contain a Hash line");
    assert!(hash.starts_with("$2b$10$"));
    assert!(verify_password("s3cret-pass", hash).unwrap());
    assert!(stdout.contains(&format!(
        "UPDATE funeral_homes SET password_hash = '{hash}' WHERE login_id = 'hanbit';"
    )));
}

#[test]
fn copy_pwa_icons_is_repeatable() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("icon.png");
    image::RgbaImage::from_pixel(16, 16, image::Rgba([0, 120, 60, 255]))
        .save(&source)
        .unwrap();
    let out = tmp.path().join("icons");

    let run = || {
        let status = Command::new(env!("CARGO_BIN_EXE_copy-pwa-icons"))
            .arg("--source")
            .arg(&source)
            .arg("--out-dir")
            .arg(&out)
            .status()
            .unwrap();
        assert!(status.success());
        PWA_ICON_NAMES
            .iter()
            .map(|n| std::fs::read(out.join(n)).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn copy_pwa_icons_fails_on_missing_source() {
    let tmp = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_copy-pwa-icons"))
        .arg("--source")
        .arg(tmp.path().join("nope.png"))
        .arg("--out-dir")
        .arg(tmp.path().join("icons"))
        .status()
        .unwrap();
    assert!(!status.success());
}

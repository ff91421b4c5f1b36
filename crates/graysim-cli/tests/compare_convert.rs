// crates/graysim-cli/tests/compare_convert.rs

use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graysim-cli"))
        .args(args)
        .output()
        .expect("spawn command")
}

fn run_ok(args: &[&str]) -> String {
    let out = run(args);
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn write_pgm(path: &Path, width: u32, height: u32, samples: &[u8]) {
    let mut buf = format!("P5\n{width} {height}\n255\n").into_bytes();
    buf.extend_from_slice(samples);
    std::fs::write(path, buf).unwrap();
}

fn write_raw16(path: &Path, width: i32, height: i32, samples: &[u16]) {
    let mut buf = Vec::new();
    buf.extend_from_slice(&width.to_ne_bytes());
    buf.extend_from_slice(&height.to_ne_bytes());
    for s in samples {
        buf.extend_from_slice(&s.to_ne_bytes());
    }
    std::fs::write(path, buf).unwrap();
}

#[test]
fn compare_identical_pgm_reports_full_similarity() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.pgm");
    let b = dir.path().join("b.pgm");
    let samples: Vec<u8> = (0u32..12).map(|i| (i * 20) as u8).collect();
    write_pgm(&a, 4, 3, &samples);
    write_pgm(&b, 4, 3, &samples);

    let stdout = run_ok(&[
        "compare",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--format",
        "pgm",
    ]);
    assert!(stdout.contains("Bit depth of image 1: 8"), "{stdout}");
    assert!(stdout.contains("Bit depth of image 2: 8"), "{stdout}");
    assert!(stdout.contains("SSIM: 1"), "{stdout}");
    assert!(stdout.contains("The images are very similar!"), "{stdout}");
}

#[test]
fn compare_rejects_dimension_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.pgm");
    let b = dir.path().join("b.pgm");
    write_pgm(&a, 2, 2, &[1, 2, 3, 4]);
    write_pgm(&b, 4, 1, &[1, 2, 3, 4]);

    let out = run(&[
        "compare",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--format",
        "pgm",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("same dimensions"), "{stderr}");
}

#[test]
fn compare_raw16_reports_16bit_depth() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    let samples: Vec<u16> = (0u16..6).map(|i| i * 9000).collect();
    write_raw16(&a, 3, 2, &samples);
    write_raw16(&b, 3, 2, &samples);

    let stdout = run_ok(&[
        "compare",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--format",
        "raw16",
    ]);
    assert!(stdout.contains("Bit depth of image 1: 16"), "{stdout}");
    assert!(stdout.contains("SSIM: 1"), "{stdout}");
}

#[test]
fn compare_missing_file_fails_with_path_in_message() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.pgm");
    write_pgm(&a, 2, 2, &[1, 2, 3, 4]);
    let missing = dir.path().join("nope.pgm");

    let out = run(&[
        "compare",
        a.to_str().unwrap(),
        missing.to_str().unwrap(),
        "--format",
        "pgm",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("nope.pgm"), "{stderr}");
}

#[test]
fn convert_writes_8bit_png_from_raw16() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("frame.bin");
    let output = dir.path().join("frame.png");
    // High bytes 0, 1, 100, 255 after the /256 collapse.
    write_raw16(&input, 2, 2, &[0, 256, 25_600, 65_535]);

    run_ok(&[
        "convert",
        "--in",
        input.to_str().unwrap(),
        "--out",
        output.to_str().unwrap(),
    ]);

    let png = image::open(&output).unwrap().to_luma8();
    assert_eq!(png.dimensions(), (2, 2));
    assert_eq!(png.into_raw(), vec![0u8, 1, 100, 255]);
}

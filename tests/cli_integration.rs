//! Black-box tests of the `mans` binary via `std::process::Command`.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn mans_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_mans") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("mans");
    p
}

fn write_u16_elements(path: &std::path::Path, elements: &[u16]) {
    let mut bytes = Vec::with_capacity(elements.len() * 2);
    for &v in elements {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

#[test]
fn compress_decompress_roundtrip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.u16");
    let elements: Vec<u16> = (0..5000).map(|i| (10_000 + (i % 100) as i64) as u16).collect();
    write_u16_elements(&input, &elements);

    let compressed = dir.path().join("output.mans");
    let status = Command::new(mans_bin())
        .args(["compress", "--dtype", "u2", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .expect("failed to run mans compress");
    assert!(status.success());
    assert!(compressed.exists());

    let roundtrip = dir.path().join("roundtrip.u16");
    let status = Command::new(mans_bin())
        .args(["decompress", "--dtype", "u2", compressed.to_str().unwrap(), roundtrip.to_str().unwrap()])
        .status()
        .expect("failed to run mans decompress");
    assert!(status.success());

    let original = fs::read(&input).unwrap();
    let recovered = fs::read(&roundtrip).unwrap();
    assert_eq!(original, recovered);
}

#[test]
fn save_adm_writes_intermediate_container_when_adm_selected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.u16");
    let elements: Vec<u16> = vec![500u16; 2048];
    write_u16_elements(&input, &elements);

    let compressed = dir.path().join("output.mans");
    let status = Command::new(mans_bin())
        .args(["compress", "--dtype", "u2", "--save-adm", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .expect("failed to run mans compress");
    assert!(status.success());
    assert!(dir.path().join("output.adm").exists());
}

#[test]
fn missing_input_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let status = Command::new(mans_bin())
        .args([
            "compress",
            "--dtype",
            "u2",
            dir.path().join("does-not-exist").to_str().unwrap(),
            dir.path().join("out.mans").to_str().unwrap(),
        ])
        .status()
        .expect("failed to run mans compress");
    assert!(!status.success());
}

#[test]
fn malformed_container_decompress_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("bogus.mans");
    fs::write(&bogus, [99u8, 1, 2, 3]).unwrap();

    let status = Command::new(mans_bin())
        .args([
            "decompress",
            "--dtype",
            "u2",
            bogus.to_str().unwrap(),
            dir.path().join("out.u16").to_str().unwrap(),
        ])
        .status()
        .expect("failed to run mans decompress");
    assert!(!status.success());
}

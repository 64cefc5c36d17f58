//! Runs the built binary end to end.

use std::path::PathBuf;
use std::process::Command;

fn gridforge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gridforge"))
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gridforge-cli-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn dims_prints_export_size() {
    let out = gridforge().args(["dims", "--grid-type", "square"]).output().unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("export:  621 x 621"), "{text}");
}

#[test]
fn render_json_is_seeded() {
    let dir = scratch("json");
    let run = |sub: &str| {
        let out = gridforge()
            .args(["render", "--grid-type", "hex-pointy-even", "--seed", "42", "--format", "json", "--out"])
            .arg(dir.join(sub))
            .output()
            .unwrap();
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        let path = String::from_utf8(out.stdout).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(path.trim()).unwrap()).unwrap();
        doc["biomeGrid"].clone()
    };
    assert_eq!(run("a"), run("b"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn preset_persists_every_family() {
    let dir = scratch("preset");
    std::fs::create_dir_all(&dir).unwrap();
    let store = dir.join("gridConfigs.json");
    let out = gridforge()
        .args(["preset", "--diagonal", "24", "--resolution", "1080p", "--tile", "inch", "--config-file"])
        .arg(&store)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(&store).unwrap()).unwrap();
    for family in ["square", "hex-flat", "hex-pointy"] {
        assert!(doc[family]["ppi"].is_u64(), "{family}");
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn uvtt_on_hex_fails() {
    let dir = scratch("uvtt");
    let out = gridforge()
        .args(["render", "--grid-type", "hex-flat-odd", "--seed", "1", "--format", "uvtt", "--out"])
        .arg(&dir)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("UVTT does not support hex grids"));
    assert!(!dir.exists());
}

#[test]
fn oversized_import_needs_accelerated_limits() {
    let dir = scratch("import");
    std::fs::create_dir_all(&dir).unwrap();
    let mut row = vec![serde_json::Value::Null; 150];
    row[140] = "#228B22".into();
    let mut grid = vec![vec![serde_json::Value::Null; 150]; 150];
    grid[140] = row;
    let snapshot = dir.join("wide.json");
    let doc = serde_json::json!({
        "version": "1.0",
        "timestamp": "2025-01-02T03:04:05.000Z",
        "gridType": "square",
        "dimensions": {"cols": 150, "rows": 150},
        "tileSize": 30,
        "ppi": 80,
        "border": {"width": 1, "color": "#000000"},
        "biomeGrid": grid,
    });
    std::fs::write(&snapshot, doc.to_string()).unwrap();

    let render = |accelerated: bool| {
        let mut cmd = gridforge();
        cmd.args(["render", "--format", "json", "--from"]).arg(&snapshot).arg("--out").arg(dir.join("out"));
        if accelerated {
            cmd.arg("--accelerated");
        }
        cmd.output().unwrap()
    };

    let refused = render(false);
    assert!(!refused.status.success());
    assert!(String::from_utf8_lossy(&refused.stderr).contains("--accelerated"));

    let out = render(true);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let path = String::from_utf8(out.stdout).unwrap();
    let back: serde_json::Value = serde_json::from_slice(&std::fs::read(path.trim()).unwrap()).unwrap();
    assert_eq!(back["dimensions"]["cols"], 150);
    assert_eq!(back["biomeGrid"][140][140], "#228B22");
    let _ = std::fs::remove_dir_all(&dir);
}

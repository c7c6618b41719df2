//! End-to-end pipeline tests against stub bundlers.

#![cfg(unix)]

mod common;

use std::path::{Path, PathBuf};

use pdfcsv_packager::packager::{
    pipeline::calculate_sha256, BuildSettings, Error, PackageSettings, Packager, Settings,
    SettingsBuilder,
};
use tempfile::TempDir;

/// Project scaffold: project dir with an entry script, a publish dir and a
/// stub bundler, wired into pipeline settings.
struct Scaffold {
    _tmp: TempDir,
    project: PathBuf,
    publish: PathBuf,
    settings: Settings,
}

fn scaffold(bundler: fn(&Path) -> PathBuf) -> Scaffold {
    let tmp = TempDir::new().expect("tempdir");
    let project = tmp.path().join("project");
    let publish = tmp.path().join("publish");
    std::fs::create_dir_all(&project).expect("create project dir");
    std::fs::create_dir_all(&publish).expect("create publish dir");
    std::fs::write(project.join("app.py"), b"print('v1')\n").expect("write entry");

    let bundler = bundler(tmp.path());
    let settings = SettingsBuilder::new()
        .project_dir(&project)
        .publish_dir(&publish)
        .package_settings(PackageSettings {
            product_name: "PDFCSVTool".into(),
            ..Default::default()
        })
        .build_settings(BuildSettings {
            entry_script: "app.py".into(),
            bundler: Some(bundler),
            ..Default::default()
        })
        .build()
        .expect("settings should build");

    Scaffold {
        _tmp: tmp,
        project,
        publish,
        settings,
    }
}

fn publish_dir_entries(publish: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<_> = std::fs::read_dir(publish)
        .expect("read publish dir")
        .map(|e| e.expect("dir entry").path())
        .collect();
    entries.sort();
    entries
}

#[tokio::test]
async fn pipeline_publishes_executable_artifact() {
    let s = scaffold(common::fake_bundler);

    let artifact = Packager::new(s.settings.clone()).run().await.expect("run");

    let published = s.publish.join("PDFCSVTool");
    assert_eq!(artifact.published, published);
    assert!(published.is_file());
    assert!(common::is_executable(&published));
    assert!(artifact.size > 0);
}

#[tokio::test]
async fn running_twice_leaves_one_fresh_artifact() {
    let s = scaffold(common::fake_bundler);
    let packager = Packager::new(s.settings.clone());

    packager.run().await.expect("first run");

    // Second build packages different entry content
    std::fs::write(s.project.join("app.py"), b"print('v2')\n").expect("rewrite entry");
    packager.run().await.expect("second run");

    let entries = publish_dir_entries(&s.publish);
    assert_eq!(entries, vec![s.publish.join("PDFCSVTool")]);

    let content = std::fs::read(&entries[0]).expect("read published");
    assert_eq!(content, b"print('v2')\n");

    // The second run's clean wiped the first run's intermediates; only the
    // latest build remains under dist/
    let artifact = std::fs::read(s.settings.artifact_path()).expect("read dist artifact");
    assert_eq!(artifact, b"print('v2')\n");
}

#[tokio::test]
async fn missing_entry_script_halts_before_publish() {
    let s = scaffold(common::fake_bundler);
    std::fs::remove_file(s.project.join("app.py")).expect("remove entry");

    let err = Packager::new(s.settings.clone()).run().await.unwrap_err();

    assert!(matches!(err, Error::EntryScriptMissing(_)));
    assert!(publish_dir_entries(&s.publish).is_empty());
}

#[tokio::test]
async fn missing_publish_dir_fails_after_build() {
    let s = scaffold(common::fake_bundler);
    std::fs::remove_dir(&s.publish).expect("remove publish dir");

    let err = Packager::new(s.settings.clone()).run().await.unwrap_err();

    assert!(matches!(err, Error::PublishDirMissing(_)));
    // The build step still completed: the artifact exists under dist/
    assert!(s.settings.artifact_path().is_file());
}

#[tokio::test]
async fn bundler_failure_surfaces_stderr() {
    let s = scaffold(common::failing_bundler);

    let err = Packager::new(s.settings.clone()).run().await.unwrap_err();

    match err {
        Error::BundlerFailed { stderr, .. } => assert!(stderr.contains("boom")),
        other => panic!("expected BundlerFailed, got {other:?}"),
    }
    assert!(publish_dir_entries(&s.publish).is_empty());
}

#[tokio::test]
async fn receipt_describes_the_published_artifact() {
    let s = scaffold(common::fake_bundler);

    let artifact = Packager::new(s.settings.clone()).run().await.expect("run");

    let receipt_path = s.settings.receipt_path();
    assert!(receipt_path.is_file());

    let receipt: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&receipt_path).expect("read receipt"))
            .expect("receipt parses");

    assert_eq!(receipt["product_name"], "PDFCSVTool");
    assert_eq!(receipt["size"], artifact.size);

    let published_checksum = calculate_sha256(&artifact.published)
        .await
        .expect("hash published copy");
    assert_eq!(receipt["checksum"], published_checksum.as_str());
}

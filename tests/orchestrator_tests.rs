//! Orchestration against fake bundler scripts
#![cfg(unix)]

mod common;

use common::{Fixture, recorded_args};
use gatorshare_bundler::bundler::{Bundler, Error, TargetKind, ToolSettings};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

#[tokio::test]
async fn test_bundle_all_runs_server_then_client_then_copies_host() {
    let fx = Fixture::new();
    let dll = fx.touch("server/lib/a.dll");
    let client_dll = fx.touch("client/bin/Client.Core.dll");
    let bundler_path = fx.recording_bundler();
    let bundler = Bundler::new(fx.settings(bundler_path.to_str().unwrap()));

    let artifacts = bundler.bundle_all(false).await.unwrap();

    let targets: Vec<TargetKind> = artifacts.iter().map(|a| a.target).collect();
    assert_eq!(targets, vec![TargetKind::Server, TargetKind::Client]);

    let server_args = recorded_args(&fx.server_bundle());
    assert!(server_args.contains(&dll.to_string_lossy().into_owned()));
    assert!(server_args.contains(&"System.Xml.Linq.dll".to_string()));

    let client_args = recorded_args(&fx.client_bundle());
    assert_eq!(
        client_args.last().unwrap(),
        &client_dll.to_string_lossy().into_owned()
    );
    assert!(!client_args.contains(&"System.Xml.Linq.dll".to_string()));

    assert_eq!(fs::read_to_string(fx.server_bin()).unwrap(), "xsp host");
}

#[tokio::test]
async fn test_artifact_reports_size_and_checksum() {
    let fx = Fixture::new();
    let bundler_path = fx.recording_bundler();
    let bundler = Bundler::new(fx.settings(bundler_path.to_str().unwrap()));

    let artifact = bundler.bundle(TargetKind::Client).await.unwrap();

    assert_eq!(artifact.path, fx.client_bundle());
    // The fake writes "bundled\n"
    assert_eq!(artifact.size, Some(8));
    let expected = format!("{:x}", Sha256::digest(b"bundled\n"));
    assert_eq!(artifact.checksum.as_deref(), Some(expected.as_str()));
}

#[tokio::test]
async fn test_runtime_env_reaches_the_bundler() {
    let fx = Fixture::new();
    let bundler_path = fx.recording_bundler();
    let bundler = Bundler::new(fx.settings(bundler_path.to_str().unwrap()));

    bundler.bundle(TargetKind::Client).await.unwrap();

    let env = fs::read_to_string(format!("{}.env", fx.client_bundle().display())).unwrap();
    assert_eq!(env.trim(), "--runtime=v2.0.50215");
}

#[tokio::test]
async fn test_failing_bundler_stops_before_copy() {
    let fx = Fixture::new();
    fx.touch("server/lib/a.dll");
    let bundler_path = fx.failing_bundler();
    let bundler = Bundler::new(fx.settings(bundler_path.to_str().unwrap()));

    let err = bundler.bundle_all(false).await.unwrap_err();

    match err {
        Error::ToolFailed { status, stderr, .. } => {
            assert_eq!(status.code(), Some(3));
            assert!(stderr.contains("boom: assembly not found"));
        }
        other => panic!("expected ToolFailed, got {other:?}"),
    }
    assert!(!fx.server_bin().exists());
    assert!(!fx.client_bundle().exists());
}

#[tokio::test]
async fn test_host_is_copied_into_existing_bin_directory() {
    let fx = Fixture::new();
    let bin_dir = fx.root.join("dist/bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let bundler_path = fx.recording_bundler();
    let settings = fx
        .builder()
        .server_bin(bin_dir.clone())
        .tools(ToolSettings {
            bundler: bundler_path.to_str().unwrap().to_string(),
            ..Default::default()
        })
        .build()
        .unwrap();
    let bundler = Bundler::new(settings);

    bundler.bundle_all(false).await.unwrap();

    assert!(bin_dir.is_dir());
    assert_eq!(
        fs::read_to_string(bin_dir.join("xsp2.exe")).unwrap(),
        "xsp host"
    );
}

#[tokio::test]
async fn test_non_utf8_and_bulk_output_does_not_fail_the_run() {
    let fx = Fixture::new();
    let bundler_path = fx.noisy_bundler();
    let bundler = Bundler::new(fx.settings(bundler_path.to_str().unwrap()));

    let artifact = bundler.bundle(TargetKind::Client).await.unwrap();

    assert_eq!(artifact.path, fx.client_bundle());
    assert_eq!(artifact.size, Some(8));
}

#[tokio::test]
async fn test_missing_bundle_after_success_is_an_error() {
    let fx = Fixture::new();
    let bundler_path = fx.silent_bundler();
    let bundler = Bundler::new(fx.settings(bundler_path.to_str().unwrap()));

    let err = bundler.bundle(TargetKind::Client).await.unwrap_err();

    assert!(matches!(err, Error::Fs { .. }));
}

#[tokio::test]
async fn test_missing_tool_is_reported() {
    let fx = Fixture::new();
    let bundler = Bundler::new(fx.settings("gatorshare-no-such-mkbundle"));

    let err = bundler.bundle(TargetKind::Client).await.unwrap_err();

    assert!(matches!(err, Error::ToolNotFound { ref tool } if tool == "gatorshare-no-such-mkbundle"));
}

#[tokio::test]
async fn test_missing_library_dir_aborts_run() {
    let fx = Fixture::new();
    fs::remove_dir_all(fx.client_bin()).unwrap();
    let bundler_path = fx.recording_bundler();
    let bundler = Bundler::new(fx.settings(bundler_path.to_str().unwrap()));

    let err = bundler.bundle_all(false).await.unwrap_err();

    assert!(matches!(err, Error::Fs { ref path, .. } if *path == fx.client_bin()));
    // Server was bundled before the client scan failed, but the copy never ran
    assert!(fx.server_bundle().exists());
    assert!(!fx.server_bin().exists());
}

#[tokio::test]
async fn test_dry_run_spawns_nothing_and_copies_nothing() {
    let fx = Fixture::new();
    fx.touch("server/lib/a.dll");
    let bundler = Bundler::new(fx.settings("gatorshare-no-such-mkbundle")).dry_run(true);

    let artifacts = bundler.bundle_all(false).await.unwrap();

    assert_eq!(artifacts.len(), 2);
    assert!(artifacts.iter().all(|a| a.size.is_none() && a.checksum.is_none()));
    assert!(artifacts[0].command.contains("System.Xml.Linq.dll"));
    assert!(artifacts[0].command.contains("gatorshare-no-such-mkbundle -o "));
    assert!(!fx.server_bin().exists());
}

#[tokio::test]
async fn test_compiler_bundle_is_opt_in() {
    let fx = Fixture::new();
    fx.touch("server/lib/a.dll");
    let bundler_path = fx.recording_bundler();
    let settings = fx
        .builder()
        .tools(ToolSettings {
            bundler: bundler_path.to_str().unwrap().to_string(),
            compiler_exe: Some(PathBuf::from("/usr/lib/mono/2.0/gmcs.exe")),
            ..Default::default()
        })
        .build()
        .unwrap();
    let bundler = Bundler::new(settings);

    let without = bundler.bundle_all(false).await.unwrap();
    assert!(without.iter().all(|a| a.target != TargetKind::Compiler));
    assert!(!fx.server_lib().join("gmcs").exists());

    let with = bundler.bundle_all(true).await.unwrap();
    let targets: Vec<TargetKind> = with.iter().map(|a| a.target).collect();
    assert_eq!(
        targets,
        vec![TargetKind::Server, TargetKind::Compiler, TargetKind::Client]
    );
    let compiler_args = recorded_args(&fx.server_lib().join("gmcs"));
    assert_eq!(compiler_args.last().unwrap(), "/usr/lib/mono/2.0/gmcs.exe");
}

//! Pruebas del adaptador de métricas y del cableado completo con SHA-256.

use std::sync::Arc;

use keyprint_adapters::{CanvasSampler, HeadlessSurfaceFactory, HostMetricsSource, HostProfile, Sha256Digest};
use keyprint_core::{ColorScheme, FingerprintGenerator, MetricsSource};
use serde_json::json;

fn profile() -> HostProfile {
    HostProfile { screen_width: 1920,
                  screen_height: 1080,
                  color_depth: 24,
                  language: "en-US".into(),
                  timezone_offset: -180,
                  user_agent: "Mozilla/5.0".into(),
                  platform: "Linux x86_64".into(),
                  vendor: "Google Inc.".into(),
                  color_scheme: ColorScheme::Dark,
                  hardware_concurrency: Some(8),
                  plugins: vec!["Test Plugin 1".into(), "Test Plugin 2".into()] }
}

#[test]
fn profile_maps_to_metrics() {
    let m = HostMetricsSource::new(profile()).basic_metrics();

    assert_eq!(m.screen_resolution, "1920x1080");
    assert_eq!(m.language, "en-US");
    assert_eq!(m.timezone_offset, -180);
    assert_eq!(m.color_depth, 24);
    assert_eq!(m.hardware_concurrency, Some(8));
    assert_eq!(m.plugins().map(|p| p.len()), Some(2));
    assert_eq!(m.plugins().unwrap()[0], "Test Plugin 1");
    assert_eq!(m.color_scheme, ColorScheme::Dark);
}

#[test]
fn missing_optional_metrics_are_omitted() {
    let mut p = profile();
    p.hardware_concurrency = None;
    p.plugins.clear();

    let v = HostMetricsSource::new(p).basic_metrics().to_value();

    assert!(v.get("hardwareConcurrency").is_none());
    assert!(v.get("plugins").is_none());
    assert_eq!(v["colorScheme"], json!("dark"));
}

#[test]
fn detected_profile_is_stable() {
    let source = HostMetricsSource::detect();
    assert_eq!(source.basic_metrics(), source.basic_metrics());
    assert!(!source.profile().platform.is_empty());
}

#[tokio::test]
async fn host_wiring_produces_sha256_fingerprints() {
    let generator = FingerprintGenerator::builder(Arc::new(HostMetricsSource::new(profile())))
        .visual(Arc::new(CanvasSampler::new(HeadlessSurfaceFactory)))
        .digest(Arc::new(Sha256Digest))
        .build();

    let with_canvas = generator.generate(None).await;
    let without_canvas = generator.generate(Some(&json!({"useCanvas": false}))).await;

    assert_eq!(with_canvas.len(), 64);
    assert_eq!(without_canvas.len(), 64);
    assert_ne!(with_canvas, without_canvas);
    assert_eq!(with_canvas, generator.generate(Some(&json!({}))).await);
}

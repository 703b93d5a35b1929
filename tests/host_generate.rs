//! Pruebas del cableado de host desde el crate raíz.

use keyprint::config::{AppConfig, DigestMode};
use keyprint::{host_generator, FingerprintOptions, OptionOverrides};
use serde_json::json;

#[tokio::test]
async fn generate_is_stable_within_a_process() {
    let first = keyprint::generate(None).await;
    let second = keyprint::generate(None).await;
    let empty = keyprint::generate(Some(&json!({}))).await;

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first, empty);
}

#[tokio::test]
async fn sha256_wiring_gives_64_hex_chars() {
    let config = AppConfig { digest: DigestMode::Sha256, ..AppConfig::default() };
    let fp = host_generator(&config).generate(None).await;
    assert_eq!(fp.len(), 64);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[tokio::test]
async fn configured_defaults_drive_the_canvas_flag() {
    let on = host_generator(&AppConfig::default());
    let off = host_generator(&AppConfig { options: FingerprintOptions { use_canvas: false },
                                          ..AppConfig::default() });

    assert_eq!(off.generate(None).await, on.generate_with(&OptionOverrides::use_canvas(false)).await);
    assert_eq!(off.generate(Some(&json!({"useCanvas": true}))).await, on.generate(None).await);
}

#[test]
fn headless_canvas_is_part_of_the_components() {
    let generator = host_generator(&AppConfig::default());
    let components = generator.components(&FingerprintOptions::default());
    assert!(components.canvas().starts_with("data:image/png;"));
    assert!(components.to_canonical_json().starts_with(r#"{"basic":{"screenResolution":"#));
}

#[test]
fn configured_host_profile_reaches_the_metrics() {
    let config = AppConfig::from_lookup(|key: &str| match key {
                     "KEYPRINT_SCREEN" => Some("1280x720".to_string()),
                     "KEYPRINT_COLOR_SCHEME" => Some("light".to_string()),
                     _ => None,
                 }).unwrap();
    let basic = host_generator(&config).components(&FingerprintOptions::default()).basic().to_value();

    assert_eq!(basic["screenResolution"], json!("1280x720"));
    assert_eq!(basic["colorScheme"], json!("light"));
}

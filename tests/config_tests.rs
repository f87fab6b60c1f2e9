use std::fs;
use std::time::Duration;

use brick_carousel::config::Configuration;
use tempfile::tempdir;

#[test]
fn parse_kebab_case_config_with_defaults() {
    let yaml = r#"
carousels:
  - id: hero
    widths: [100, 150, 200]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.bump_duration, Duration::from_millis(500));
    let hero = cfg.carousel("hero").expect("hero carousel");
    assert_eq!(hero.items_per_slide, 1);
    assert_eq!(hero.start_index, 0);
    assert_eq!(hero.slide_widths().unwrap(), vec![100.0, 150.0, 200.0]);
}

#[test]
fn parse_humantime_bump_duration() {
    let yaml = r#"
bump-duration: 1s 250ms
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.bump_duration, Duration::from_millis(1250));
    assert_eq!(
        humantime::format_duration(cfg.bump_duration).to_string(),
        "1s 250ms"
    );
    assert!(cfg.carousels.is_empty());
}

#[test]
fn container_width_divides_by_items_per_slide() {
    let yaml = r#"
carousels:
  - id: grid
    items-per-slide: 3
    start-index: 2
    container-width: 900
    slide-count: 6
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let grid = &cfg.validated().unwrap().carousels[0];
    assert_eq!(grid.slide_widths().unwrap(), vec![300.0; 6]);
    let engine = grid.engine().unwrap();
    assert_eq!(engine.current_index(), 2);
    assert_eq!(engine.offset(), -600.0);
    assert_eq!(engine.dot_count(), 4);
}

#[test]
fn rejects_zero_bump_duration() {
    let yaml = r#"
bump-duration: 0s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(format!("{err:#}").contains("bump-duration"));
}

#[test]
fn rejects_duplicate_ids() {
    let yaml = r#"
carousels:
  - id: a
    widths: [1]
  - id: a
    widths: [2]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(format!("{err:#}").contains("duplicate carousel id"));
}

#[test]
fn rejects_items_per_slide_above_slide_count() {
    let yaml = r#"
carousels:
  - id: narrow
    items-per-slide: 4
    widths: [10, 10, 10]
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("narrow"), "{msg}");
    assert!(msg.contains("exceeds slide count"), "{msg}");
}

#[test]
fn rejects_empty_widths() {
    let yaml = r#"
carousels:
  - id: empty
    widths: []
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn rejects_mixed_or_missing_layout() {
    let mixed = r#"
carousels:
  - id: mixed
    widths: [10]
    container-width: 100
    slide-count: 1
"#;
    let missing = r#"
carousels:
  - id: missing
"#;
    let half = r#"
carousels:
  - id: half
    container-width: 100
"#;
    for yaml in [mixed, missing, half] {
        let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.validated().is_err(), "{yaml}");
    }
}

#[test]
fn loads_from_yaml_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("carousel.yaml");
    fs::write(
        &path,
        "bump-duration: 200ms\ncarousels:\n  - id: hero\n    widths: [50, 60]\n",
    )
    .unwrap();

    let cfg = Configuration::from_yaml_file(&path)
        .unwrap()
        .validated()
        .unwrap();
    assert_eq!(cfg.bump_duration, Duration::from_millis(200));
    assert_eq!(cfg.carousels.len(), 1);
}

#[test]
fn missing_file_is_an_error() {
    let tmp = tempdir().unwrap();
    assert!(Configuration::from_yaml_file(tmp.path().join("nope.yaml")).is_err());
}

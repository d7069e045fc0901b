use std::fs;
use std::path::PathBuf;

use daily_gallery::config::Configuration;
use tempfile::tempdir;

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
photo-library-path: "/photos"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.photo_library_path, PathBuf::from("/photos"));
    assert_eq!(cfg.public_photo_base, "/photography");
    assert_eq!(cfg.gallery_count, 6);
}

#[test]
fn parse_with_overrides() {
    let yaml = r#"
photo-library-path: "/photos"
public-photo-base: "/img/gallery"
gallery-count: 5
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.public_photo_base, "/img/gallery");
    assert_eq!(cfg.gallery_count, 5);
}

#[test]
fn parse_site_and_social_sections() {
    let yaml = r#"
photo-library-path: "/photos"
site:
  title: "Developer & Photographer"
  url: "https://example.dev"
  author: "Sam"
social:
  github: "https://github.com/example"
  linkedin: "https://linkedin.com/in/example"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.site.title, "Developer & Photographer");
    assert_eq!(cfg.site.author, "Sam");

    // Only filled links are surfaced, in display order.
    let filled = cfg.social.filled();
    assert_eq!(
        filled,
        vec![
            ("github", "https://github.com/example"),
            ("linkedin", "https://linkedin.com/in/example"),
        ]
    );
}

#[test]
fn zero_gallery_count_fails_validation() {
    let yaml = r#"
photo-library-path: "/photos"
gallery-count: 0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn empty_public_base_fails_validation() {
    let yaml = r#"
photo-library-path: "/photos"
public-photo-base: ""
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn load_from_yaml_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("config.yaml");
    fs::write(&path, "photo-library-path: \"/photos\"\ngallery-count: 4\n").unwrap();

    let cfg = Configuration::from_yaml_file(&path).unwrap();
    assert_eq!(cfg.gallery_count, 4);

    assert!(Configuration::from_yaml_file(tmp.path().join("missing.yaml")).is_err());
}

use extstat::engine::should_fan_out;
use extstat::filter::FilterSet;
use extstat::utils::{format_size, parse_size};
use extstat::{FilterConfig, SizeThreshold, TallyError, classify};
use std::path::Path;

// --- classify ---

#[test]
fn test_classify_case_insensitive() {
    assert_eq!(classify(Path::new("A.TXT")), classify(Path::new("a.txt")));
    assert_eq!(classify(Path::new("Photo.JpG")), ".jpg");
}

#[test]
fn test_classify_dotfile_rules() {
    assert_eq!(classify(Path::new(".bashrc")), "[dotfile]");
    assert_eq!(classify(Path::new(".config.json")), ".json");
}

#[test]
fn test_classify_no_extension() {
    assert_eq!(classify(Path::new("LICENSE")), "[no extension]");
}

#[test]
fn test_classify_invalid() {
    assert_eq!(classify(Path::new("")), "[invalid]");
}

// --- size parsing / formatting ---

#[test]
fn test_parse_size_units() {
    assert_eq!(parse_size("1K").unwrap(), 1024);
    assert_eq!(parse_size("1mb").unwrap(), 1 << 20);
    assert_eq!(parse_size("1.5G").unwrap(), 3 << 29);
    assert_eq!(parse_size("7").unwrap(), 7);
}

#[test]
fn test_parse_size_error_is_descriptive() {
    let err = parse_size("12 parsecs").unwrap_err();
    assert!(matches!(err, TallyError::InvalidSize { .. }));
    assert!(err.to_string().contains("12 parsecs"));
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(35), "35.00 B");
    assert_eq!(format_size(10 * 1024 * 1024), "10.00 MB");
}

// --- thresholds ---

#[test]
fn test_invalid_threshold_rejected() {
    assert!(SizeThreshold::new(100, 10).is_err());
    assert!(SizeThreshold::new(10, 10).is_ok());
}

#[test]
fn test_threshold_boundaries() {
    let mut cfg = FilterConfig::new();
    cfg.set_size_threshold(SizeThreshold::new(100, 200).unwrap());
    let f = FilterSet::new(&cfg);
    assert!(!f.in_size_range(99));
    assert!(f.in_size_range(100));
    assert!(f.in_size_range(200));
    assert!(!f.in_size_range(201));
}

// --- exclusion ---

#[test]
fn test_exclusion_idempotent() {
    let mut once = FilterConfig::new();
    once.add_excluded_path("/srv/data/cache");
    let mut twice = once.clone();
    twice.add_excluded_path("/srv/data/cache");
    let (a, b) = (FilterSet::new(&once), FilterSet::new(&twice));
    for p in ["/srv/data/cache", "/srv/data/cache/x", "/srv/data/cached", "/srv/data"] {
        assert_eq!(a.is_excluded(Path::new(p)), b.is_excluded(Path::new(p)), "{p}");
    }
}

#[test]
fn test_exclusion_descendants_only() {
    let mut cfg = FilterConfig::new();
    cfg.add_excluded_path("/srv/data/cache");
    let f = FilterSet::new(&cfg);
    assert!(f.is_excluded(Path::new("/srv/data/cache/deep/er/file.bin")));
    assert!(!f.is_excluded(Path::new("/srv/data/cache2")));
}

// --- fan-out ---

#[test]
fn test_fan_out_needs_threads_and_children() {
    assert!(should_fan_out(4, 3));
    assert!(!should_fan_out(4, 1));
    assert!(!should_fan_out(1, 3));
}

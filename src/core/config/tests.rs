use super::*;
use tempfile::tempdir;

#[test]
fn default_config_validates_successfully() {
    let config = SimHashConfig::default();
    config.validate().expect("default config");
    assert_eq!(config.num_hash_bits, 128);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert!(config.output.color);
}

#[test]
fn num_hash_bits_bounds() {
    let err = SimHashConfig::default()
        .with_num_hash_bits(0)
        .validate()
        .unwrap_err();
    assert!(
        format!("{err}").contains("num_hash_bits"),
        "unexpected error message: {err}"
    );

    assert!(SimHashConfig::default()
        .with_num_hash_bits(MAX_HASH_BITS + 1)
        .validate()
        .is_err());
    assert!(SimHashConfig::default()
        .with_num_hash_bits(256)
        .validate()
        .is_ok());
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let config: SimHashConfig = serde_yaml::from_str("num_hash_bits: 64\n").unwrap();
    assert_eq!(config.num_hash_bits, 64);
    assert_eq!(config.output, OutputConfig::default());

    let config: SimHashConfig = serde_yaml::from_str("output:\n  format: json\n").unwrap();
    assert_eq!(config.num_hash_bits, 128);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.color);
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".simhash.yml");

    let config = SimHashConfig::default().with_num_hash_bits(32);
    config.to_yaml_file(&path).unwrap();

    let loaded = SimHashConfig::from_yaml_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = SimHashConfig::from_yaml_file(dir.path().join("absent.yml")).unwrap_err();
    match err {
        SimHashError::Io { message, .. } => {
            assert!(message.starts_with("Failed to read config file:"));
            assert!(message.contains("absent.yml"));
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn output_format_parsing() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    assert_eq!(OutputFormat::Text.to_string(), "text");
    assert!("xml".parse::<OutputFormat>().is_err());
}

use std::fs;
use tbcclient::{TbcError, TbcSoapCaller};

// The global configuration is loaded once per process, so this file holds a
// single test.
#[test]
fn test_unusable_config_dir_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, "x").unwrap();
    std::env::set_var("TBC_CONFIG", &file);

    match TbcSoapCaller::from_config() {
        Err(TbcError::Config(e)) => assert!(e.to_string().contains("configuration")),
        other => panic!("expected config error, got {:?}", other.map(|_| ())),
    }
    assert!(matches!(
        TbcSoapCaller::from_config(),
        Err(TbcError::Config(_))
    ));
}

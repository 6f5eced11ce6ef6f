use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use filenest::config::{default_config_path, load_config_from_xml};

#[test]
#[serial]
fn env_override_selects_the_config_file() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("custom_config.xml");
    let root = base.join("browse-root");
    fs::create_dir_all(&root).unwrap();

    let xml = format!(
        r#"<config>
  <root>{}</root>
  <search_limit>250</search_limit>
  <log_level>debug</log_level>
</config>"#,
        root.display()
    );
    fs::write(&cfg, xml).unwrap();

    // Set env for this process; serialize to avoid cross-test interference
    unsafe {
        std::env::set_var("FILENEST_CONFIG", &cfg);
    }

    let resolved = default_config_path().expect("default_config_path");
    assert_eq!(
        resolved, cfg,
        "config path should equal FILENEST_CONFIG value"
    );

    let (loaded_root, favorites, limit, level, log_file) =
        load_config_from_xml().expect("config should load");
    assert_eq!(loaded_root, Some(root));
    assert_eq!(favorites, None);
    assert_eq!(limit, Some(250));
    assert_eq!(level, Some(filenest::LogLevel::Debug));
    assert_eq!(log_file, None);

    unsafe {
        std::env::remove_var("FILENEST_CONFIG");
    }
}

#[test]
#[serial]
fn missing_env_config_loads_nothing_and_creates_no_template() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("absent.xml");
    unsafe {
        std::env::set_var("FILENEST_CONFIG", &cfg);
    }

    assert!(load_config_from_xml().is_none());
    // Template creation is reserved for the default location.
    assert!(!cfg.exists());

    unsafe {
        std::env::remove_var("FILENEST_CONFIG");
    }
}

#[test]
#[serial]
fn whitespace_in_values_is_trimmed() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("ws.xml");
    fs::write(
        &cfg,
        "<config>\n  <root>  /tmp  </root>\n  <search_limit> 42 </search_limit>\n</config>\n",
    )
    .unwrap();
    unsafe {
        std::env::set_var("FILENEST_CONFIG", &cfg);
    }

    let (root, _, limit, _, _) = load_config_from_xml().expect("config should load");
    assert_eq!(root, Some(std::path::PathBuf::from("/tmp")));
    assert_eq!(limit, Some(42));

    unsafe {
        std::env::remove_var("FILENEST_CONFIG");
    }
}

use std::fs;
use std::path::PathBuf;

use nukr_common::config::Config;
use nukr_common::target::Target;
use nukr_core::targets::{self, SingleHost, TargetSource};

/// Without a credential the run targets exactly the bare domain.
#[tokio::test]
async fn single_host_yields_bare_domain() {
    let target = Target::new("example.com");

    let hosts = SingleHost.collect(&target).await.expect("collect failed");
    assert_eq!(hosts, vec!["example.com".to_string()]);
}

#[tokio::test]
async fn single_host_end_to_end_materialization() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = Target::new("example.com");

    let hosts = SingleHost.collect(&target).await.expect("collect failed");
    let path = targets::write_target_list(dir.path(), &target, &hosts).expect("write failed");

    assert_eq!(path, dir.path().join("example_com.txt"));
    assert_eq!(
        fs::read_to_string(&path).expect("read failed"),
        "example.com\n"
    );
}

/// Enumeration order and duplicates must survive into the file untouched.
#[test]
fn target_list_preserves_order_and_duplicates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = Target::new("example.com");
    let hosts: Vec<String> = ["www", "mail", "www", "api"]
        .iter()
        .map(|label| target.qualify(label))
        .collect();

    let path = targets::write_target_list(dir.path(), &target, &hosts).expect("write failed");

    assert_eq!(
        fs::read_to_string(&path).expect("read failed"),
        "www.example.com\nmail.example.com\nwww.example.com\napi.example.com\n"
    );
}

/// A rerun replaces the previous list, it never appends.
#[test]
fn target_list_is_overwritten_on_rerun() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = Target::new("example.com");

    let first = vec![
        "www.example.com".to_string(),
        "mail.example.com".to_string(),
    ];
    targets::write_target_list(dir.path(), &target, &first).expect("first write failed");

    let second = vec!["example.com".to_string()];
    let path = targets::write_target_list(dir.path(), &target, &second).expect("rewrite failed");

    assert_eq!(
        fs::read_to_string(&path).expect("read failed"),
        "example.com\n",
        "stale entries from the first run leaked into the rewritten list"
    );
}

#[test]
fn ip_targets_name_their_list_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = Target::new("10.0.0.1");

    let path = targets::write_target_list(dir.path(), &target, &["10.0.0.1".to_string()])
        .expect("write failed");

    assert_eq!(path, dir.path().join("10_0_0_1.txt"));
}

/// Flags sit on top of the environment, which sits on top of defaults.
#[test]
fn flag_overrides_beat_environment_defaults() {
    std::env::set_var("NUKR_TEMPLATES_DIR", "/srv/templates");

    let mut cfg = Config::from_env();
    assert_eq!(cfg.templates_dir, PathBuf::from("/srv/templates"));

    // What the CLI layer does with a --templates-dir flag.
    cfg.templates_dir = PathBuf::from("/opt/templates");
    assert_eq!(cfg.templates_dir, PathBuf::from("/opt/templates"));

    std::env::remove_var("NUKR_TEMPLATES_DIR");
}

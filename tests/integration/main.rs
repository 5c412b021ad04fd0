//! Integration tests for dagcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn dagcache(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("dagcache");
        cmd.env("DAGCACHE_CONFIG", temp.path().join("config.toml"));
        cmd
    }

    fn seed(byte: &str) -> String {
        byte.repeat(32)
    }

    fn check(temp: &TempDir, dir: &Path, seed: &str) -> assert_cmd::assert::Assert {
        dagcache(temp)
            .arg("check")
            .arg("--seed")
            .arg(seed)
            .arg("--dir")
            .arg(dir)
            .assert()
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("DAG cache preparation"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("dagcache"));
    }

    #[test]
    fn config_path_uses_env() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cache]"))
            .stdout(predicate::str::contains("memo_name = \"full.info\""));
    }

    #[test]
    fn config_init_writes_file() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["config", "init"])
            .assert()
            .success();
        assert!(temp.path().join("config.toml").exists());
    }

    #[test]
    fn epoch_lifecycle() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache");
        let memo = dir.join("full.info");

        check(&temp, &dir, &seed("00"))
            .success()
            .stdout(predicate::str::contains("mismatch"));
        assert!(dir.is_dir());

        dagcache(&temp)
            .args(["write", "--seed", seed("00").as_str(), "--dir"])
            .arg(&dir)
            .assert()
            .success();
        let mut expected = vec![23u8, 0, 0, 0];
        expected.extend_from_slice(&[0u8; 32]);
        assert_eq!(fs::read(&memo).unwrap(), expected);

        check(&temp, &dir, &seed("00"))
            .success()
            .stdout(predicate::str::contains("match"))
            .stdout(predicate::str::contains("mismatch").not());

        check(&temp, &dir, &seed("ff"))
            .success()
            .stdout(predicate::str::contains("mismatch"));
        assert!(!memo.exists());
    }

    #[test]
    fn check_json_output() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache");

        dagcache(&temp)
            .args(["check", "--format", "json", "--seed", seed("ab").as_str(), "--dir"])
            .arg(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"outcome\": \"mismatch\""))
            .stdout(predicate::str::contains("\"revision\": 23"));
    }

    #[test]
    fn truncated_memo_fails() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("full.info"), b"short").unwrap();

        check(&temp, &dir, &seed("00"))
            .failure()
            .stdout(predicate::str::contains("fail"))
            .stderr(predicate::str::contains("truncated"));
        assert!(dir.join("full.info").exists());
    }

    #[test]
    fn revision_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache");

        dagcache(&temp)
            .args(["write", "--revision", "7", "--seed", seed("01").as_str(), "--dir"])
            .arg(&dir)
            .assert()
            .success();

        dagcache(&temp)
            .args(["inspect", "--dir"])
            .arg(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("7 (outdated)"))
            .stdout(predicate::str::contains(seed("01")));
    }

    #[test]
    fn configured_dir_is_used() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("configured");
        fs::write(
            temp.path().join("config.toml"),
            format!("[cache]\ndir = {:?}\n", dir.display().to_string()),
        )
        .unwrap();

        check(&temp, &dir, &seed("00")).success();
        dagcache(&temp)
            .args(["check", "--seed", seed("00").as_str()])
            .assert()
            .success()
            .stdout(predicate::str::contains("configured"));
    }

    #[test]
    fn bad_seed_rejected() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["check", "--seed", "1234"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid seed hash"));
    }

    #[test]
    fn missing_parent_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("missing").join("cache");

        check(&temp, &dir, &seed("00"))
            .failure()
            .stderr(predicate::str::contains("Failed to create cache directory"))
            .stderr(predicate::str::contains("Hint:"));
    }
}

mod protocol_tests {
    use dagcache::cache::{CacheOutcome, CacheValidator, MemoSettings, Revision, SeedHash};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn synthetic_revisions_do_not_share_memos() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache");
        let seed = SeedHash::new([3; 32]);

        let rev_a = CacheValidator::new(MemoSettings {
            revision: Revision(1),
            ..MemoSettings::default()
        });
        let rev_b = CacheValidator::new(MemoSettings {
            revision: Revision(2),
            ..MemoSettings::default()
        });

        assert_eq!(rev_a.validate(&dir, &seed), CacheOutcome::Mismatch);
        rev_a.write_memo(&dir, &seed).unwrap();
        assert_eq!(rev_a.validate(&dir, &seed), CacheOutcome::Match);

        assert_eq!(rev_b.validate(&dir, &seed), CacheOutcome::Mismatch);
        assert_eq!(rev_a.validate(&dir, &seed), CacheOutcome::Mismatch);
    }

    #[cfg(unix)]
    #[test]
    fn undeletable_memo_fails() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("cache");
        let validator = CacheValidator::default();
        let memo = validator.write_memo(&dir, &SeedHash::new([0; 32])).unwrap();

        fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();
        let writable = fs::File::create(dir.join("probe")).is_ok();

        let outcome = validator.validate(&dir, &SeedHash::new([1; 32]));
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o775)).unwrap();

        // Permission bits do not bind root.
        if !writable {
            assert_eq!(outcome, CacheOutcome::Fail);
            assert!(memo.exists());
        }
    }
}

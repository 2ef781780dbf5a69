#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::config::environment::{env_bool, env_string, env_u64};
    use crate::config::test_support::{EnvGuard, env_lock, write_config};
    use crate::toolchain::Language;

    #[test]
    fn defaults_without_file_or_env() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

        let config = Config::load().unwrap();
        assert_eq!(config.compilers.compiler_for(Language::C), "gcc");
        assert_eq!(config.compilers.compiler_for(Language::Cpp), "g++");
        assert_eq!(config.compilers.flags_for(Language::C), "");
        assert_eq!(config.run.args, "");
        assert!(!config.run.external_terminal);
        assert_eq!(config.probe.timeout_secs, 5);
    }

    #[test]
    fn load_from_env_only() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let _env = EnvGuard::isolated(
            temp_home.path().to_str().unwrap(),
            &[
                ("CCRUN_C_COMPILER", Some("clang")),
                ("CCRUN_CPP_FLAGS", Some("-std=c++20 -Wall")),
                ("CCRUN_RUN_ARGS", Some("--fast")),
                ("CCRUN_EXTERNAL_TERMINAL", Some("yes")),
                ("CCRUN_PROBE_TIMEOUT_SECS", Some("0")),
            ],
        );

        let config = Config::load().unwrap();
        assert_eq!(config.compilers.compiler_for(Language::C), "clang");
        assert_eq!(config.compilers.compiler_for(Language::Cpp), "g++");
        assert_eq!(config.compilers.flags_for(Language::Cpp), "-std=c++20 -Wall");
        assert_eq!(config.run.args, "--fast");
        assert!(config.run.external_terminal);
        assert_eq!(config.probe.timeout_secs, 0);
    }

    #[test]
    fn load_prefers_env_over_file() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        write_config(
            &temp_home,
            r#"{
                "compilers": { "c": "/usr/bin/gcc-12", "cpp": "clang++", "cpp_flags": "-O2" },
                "run": { "args": "file-args", "external_terminal": true },
                "probe": { "timeout_secs": 9 }
            }"#,
        );

        let _env = EnvGuard::isolated(
            temp_home.path().to_str().unwrap(),
            &[
                ("CCRUN_CPP_COMPILER", Some("g++-13")),
                ("CCRUN_EXTERNAL_TERMINAL", Some("false")),
            ],
        );

        let config = Config::load().unwrap();
        assert_eq!(config.compilers.c_compiler, "/usr/bin/gcc-12");
        assert_eq!(config.compilers.cpp_compiler, "g++-13");
        assert_eq!(config.compilers.cpp_flags, "-O2");
        assert_eq!(config.run.args, "file-args");
        assert!(!config.run.external_terminal);
        assert_eq!(config.probe.timeout_secs, 9);
    }

    #[test]
    fn load_accepts_editor_style_flat_keys() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        write_config(
            &temp_home,
            r#"{
                "c-compiler": "tcc",
                "c-flags": "-g",
                "cpp-compiler": "",
                "run-args": "a b",
                "run-in-external-terminal": true
            }"#,
        );
        let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

        let config = Config::load().unwrap();
        assert_eq!(config.compilers.compiler_for(Language::C), "tcc");
        assert_eq!(config.compilers.flags_for(Language::C), "-g");
        assert_eq!(config.compilers.compiler_for(Language::Cpp), "g++");
        assert_eq!(config.run.args, "a b");
        assert!(config.run.external_terminal);
    }

    #[test]
    fn empty_file_is_ignored() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        write_config(&temp_home, "   \n");
        let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

        let config = Config::load().unwrap();
        assert_eq!(config, Config::builder().build().unwrap());
    }

    #[test]
    fn malformed_file_reports_path() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        write_config(&temp_home, "{ not json");
        let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("Failed parsing JSON config"));
    }

    #[test]
    fn mistyped_nested_file_is_not_read_as_flat_layout() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        write_config(
            &temp_home,
            r#"{ "compilers": { "c": "clang" }, "run": { "args": 5 } }"#,
        );
        let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

        assert!(Config::load().is_err());
    }

    #[test]
    fn partial_nested_file_keeps_other_defaults() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        write_config(&temp_home, r#"{ "probe": { "timeout_secs": 10 } }"#);
        let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

        let config = Config::load().unwrap();
        assert_eq!(config.probe.timeout_secs, 10);
        assert_eq!(config.compilers.compiler_for(Language::C), "gcc");
        assert_eq!(config.run.args, "");

        write_config(&temp_home, r#"{ "run": { "args": "in.txt" } }"#);
        let config = Config::load().unwrap();
        assert_eq!(config.run.args, "in.txt");
        assert_eq!(config.probe.timeout_secs, 5);
    }

    #[test]
    fn file_only_load_skips_env_and_validation() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        write_config(
            &temp_home,
            r#"{ "compilers": { "c": "tcc" }, "probe": { "timeout_secs": 3600 } }"#,
        );
        let _env = EnvGuard::isolated(
            temp_home.path().to_str().unwrap(),
            &[("CCRUN_C_COMPILER", Some("clang-from-env"))],
        );

        assert!(Config::load().is_err());

        let config = Config::load_file_only().unwrap();
        assert_eq!(config.compilers.c_compiler, "tcc");
        assert_eq!(config.probe.timeout_secs, 3600);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let home = temp_home.path().to_str().unwrap().to_string();

        {
            let _env = EnvGuard::isolated(&home, &[("CCRUN_PROBE_TIMEOUT_SECS", Some("301"))]);
            let err = Config::load().unwrap_err();
            assert!(err.to_string().contains("exceeds the maximum"));
        }

        {
            let _env = EnvGuard::isolated(&home, &[("CCRUN_C_COMPILER", Some("   "))]);
            let err = Config::load().unwrap_err();
            assert!(err.to_string().contains("'c-compiler' is blank"));
        }

        {
            let _env = EnvGuard::isolated(&home, &[("CCRUN_EXTERNAL_TERMINAL", Some("maybe"))]);
            assert!(Config::load().is_err());
        }
    }

    #[test]
    fn save_persists_nested_structure() {
        let _lock = env_lock();
        let temp_home = TempDir::new().unwrap();
        let _env = EnvGuard::isolated(temp_home.path().to_str().unwrap(), &[]);

        let mut config = Config::builder().build().unwrap();
        config.compilers.c_compiler = "clang".to_string();
        config.compilers.cpp_flags = "-std=c++17".to_string();
        config.run.args = "input.txt".to_string();
        config.run.external_terminal = true;
        config.probe.timeout_secs = 12;
        config.save().unwrap();

        let persisted = std::fs::read_to_string(Config::config_path().unwrap()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
        assert_eq!(json["compilers"]["c"], "clang");
        assert_eq!(json["compilers"]["cpp"], "");
        assert_eq!(json["compilers"]["cpp_flags"], "-std=c++17");
        assert_eq!(json["run"]["args"], "input.txt");
        assert_eq!(json["run"]["external_terminal"], true);
        assert_eq!(json["probe"]["timeout_secs"], 12);

        assert_eq!(Config::load().unwrap(), config);
    }

    #[test]
    fn test_env_string() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("CCRUN_TEST_VAR", Some("test_value"))]);

        assert_eq!(env_string("CCRUN_TEST_VAR").unwrap(), Some("test_value".to_string()));
        assert_eq!(env_string("CCRUN_NONEXISTENT_VAR").unwrap(), None);
    }

    #[test]
    fn test_env_u64() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[("CCRUN_TEST_U64", Some("123")), ("CCRUN_TEST_BAD", Some("x"))]);

        assert_eq!(env_u64("CCRUN_TEST_U64").unwrap(), Some(123));
        assert_eq!(env_u64("CCRUN_NONEXISTENT_VAR").unwrap(), None);
        assert!(env_u64("CCRUN_TEST_BAD").is_err());
    }

    #[test]
    fn test_env_bool() {
        let _lock = env_lock();
        let _env = EnvGuard::new(&[
            ("CCRUN_TEST_ON", Some("1")),
            ("CCRUN_TEST_OFF", Some("No")),
        ]);

        assert_eq!(env_bool("CCRUN_TEST_ON").unwrap(), Some(true));
        assert_eq!(env_bool("CCRUN_TEST_OFF").unwrap(), Some(false));
        assert_eq!(env_bool("CCRUN_NONEXISTENT_VAR").unwrap(), None);
    }
}

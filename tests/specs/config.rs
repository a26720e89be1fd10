//! Specs for config resolution and validation.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::prelude::*;

#[test]
fn explicit_missing_config_is_a_config_error() {
    let project = Project::empty();

    docsweep_cmd()
        .args(["-C", "absent.toml", "check"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

#[test]
fn unsupported_version_is_a_config_error() {
    let project = Project::empty();
    project.file("docsweep.toml", "version = 9\n");

    docsweep_cmd()
        .arg("check")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}

#[test]
fn malformed_config_is_a_config_error() {
    let project = Project::empty();
    project.file("docsweep.toml", "version = \n");

    docsweep_cmd()
        .arg("check")
        .current_dir(project.path())
        .assert()
        .code(2);
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn unknown_config_key_warns_but_runs() {
        let project = Project::with_defaults();
        project.file("docsweep.toml", "version = 1\nunknown_key = true\n");
        let stub = StubChecker::new(&project, 0);

        check_with_stub(&project, &stub)
            .success()
            .stderr(predicates::str::contains("unrecognized"));
    }

    #[test]
    fn env_config_sets_path() {
        let project = Project::empty();
        project.file("custom.toml", "version = 1\n");
        let stub = StubChecker::new(&project, 0);

        docsweep_cmd()
            .arg("check")
            .current_dir(project.path())
            .env("DOCSWEEP_CONFIG", project.path().join("custom.toml"))
            .env("DOCSWEEP_PYTHON", &stub.script)
            .assert()
            .success();

        assert_eq!(stub.invocations().len(), 2);
    }

    #[test]
    fn missing_config_runs_with_defaults() {
        let project = Project::empty();
        let stub = StubChecker::new(&project, 0);

        check_with_stub(&project, &stub).success();

        // root + docs, no labs
        assert_eq!(stub.invocations().len(), 2);
    }

    #[test]
    fn config_in_parent_directory_is_discovered() {
        let project = Project::with_defaults();
        project.config(r#"[project]
labs = ["lab1"]
"#);
        project.rst("lab1/notes.rst");
        let stub = StubChecker::new(&project, 0);

        docsweep_cmd()
            .arg("check")
            .current_dir(project.path().join("lab1"))
            .env("DOCSWEEP_PYTHON", &stub.script)
            .assert()
            .success();

        // Root resolves to the config directory, not the invocation directory
        assert_eq!(stub.invocations().len(), 3);
    }
}

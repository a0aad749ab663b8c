use assert_cmd::Command;
use assert_fs::prelude::*;
use login_flow_toml::PREFERENCES_ENV;
use predicates::prelude::*;

fn login_flow(dir: &assert_fs::TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("login-flow");
    cmd.current_dir(dir.path())
        .env_remove(PREFERENCES_ENV)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn lang_get_defaults_to_english() {
    let temp = assert_fs::TempDir::new().unwrap();

    login_flow(&temp)
        .args(["lang", "get"])
        .assert()
        .success()
        .stdout("en\tEnglish\n");
}

#[test]
fn lang_set_persists_between_runs() {
    let temp = assert_fs::TempDir::new().unwrap();

    login_flow(&temp)
        .args(["lang", "set", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("हिंदी (hi)"));

    login_flow(&temp)
        .args(["lang", "get"])
        .assert()
        .success()
        .stdout("hi\tहिंदी\n");

    temp.child(".login-flow/preferences.toml")
        .assert(predicate::str::contains("LANG = \"hi\""));
}

#[test]
fn lang_set_accepts_a_label() {
    let temp = assert_fs::TempDir::new().unwrap();

    login_flow(&temp)
        .args(["lang", "set", "ਪੰਜਾਬੀ"])
        .assert()
        .success();

    login_flow(&temp)
        .args(["lang", "get"])
        .assert()
        .success()
        .stdout("pa\tਪੰਜਾਬੀ\n");
}

#[test]
fn lang_set_rejects_unknown_language() {
    let temp = assert_fs::TempDir::new().unwrap();

    login_flow(&temp)
        .args(["lang", "set", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown language 'fr'"));

    temp.child(".login-flow/preferences.toml")
        .assert(predicate::path::missing());
}

#[test]
fn lang_list_marks_current_language() {
    let temp = assert_fs::TempDir::new().unwrap();
    login_flow(&temp).args(["lang", "set", "ta"]).assert().success();

    login_flow(&temp)
        .args(["lang", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("  en\tEnglish")
                .and(predicate::str::contains("  hi\tहिंदी"))
                .and(predicate::str::contains("  pa\tਪੰਜਾਬੀ"))
                .and(predicate::str::contains("* ta\tதமிழ்")),
        );
}

#[test]
fn validate_accepts_good_credentials() {
    let temp = assert_fs::TempDir::new().unwrap();

    login_flow(&temp)
        .args(["validate", "--email", "a@b.co", "--password", "abcdef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"));
}

#[test]
fn validate_reports_every_failing_field() {
    let temp = assert_fs::TempDir::new().unwrap();

    login_flow(&temp)
        .args(["validate", "--email", "nope", "--password", "abc"])
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("Email: Please enter a valid email address").and(
                predicate::str::contains("Password: Password must be at least 6 characters"),
            ),
        )
        .stderr(predicate::str::contains("2 field(s) failed validation"));
}

#[test]
fn validate_uses_stored_language() {
    let temp = assert_fs::TempDir::new().unwrap();
    login_flow(&temp).args(["lang", "set", "ta"]).assert().success();

    login_flow(&temp)
        .args(["validate", "--password", "abcdef"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("மின்னஞ்சல் தேவை"));
}

#[test]
fn validate_lang_flag_overrides_stored_language() {
    let temp = assert_fs::TempDir::new().unwrap();
    login_flow(&temp).args(["lang", "set", "ta"]).assert().success();

    login_flow(&temp)
        .args(["validate", "--password", "abcdef", "--lang", "hi"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ईमेल आवश्यक है"));
}

#[test]
fn config_file_moves_preferences() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("login-flow.toml")
        .write_str("preferences_path = \"custom/prefs.toml\"\n")
        .unwrap();

    login_flow(&temp).args(["lang", "set", "pa"]).assert().success();

    temp.child("custom/prefs.toml")
        .assert(predicate::str::contains("LANG = \"pa\""));
}

#[test]
fn preferences_flag_beats_environment() {
    let temp = assert_fs::TempDir::new().unwrap();
    let from_env = temp.child("env.toml");
    let from_flag = temp.child("flag.toml");

    login_flow(&temp)
        .env(PREFERENCES_ENV, from_env.path())
        .args(["--preferences"])
        .arg(from_flag.path())
        .args(["lang", "set", "hi"])
        .assert()
        .success();

    from_flag.assert(predicate::str::contains("LANG = \"hi\""));
    from_env.assert(predicate::path::missing());
}

#[test]
fn invalid_fallback_language_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("login-flow.toml")
        .write_str("fallback_language = \"de\"\n")
        .unwrap();

    login_flow(&temp)
        .args(["lang", "get"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid fallback language 'de'"));
}

#[test]
fn fallback_language_is_used_when_nothing_is_stored() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("login-flow.toml")
        .write_str("fallback_language = \"ta\"\n")
        .unwrap();

    login_flow(&temp)
        .args(["lang", "get"])
        .assert()
        .success()
        .stdout("ta\tதமிழ்\n");
}

//! Integration tests for both binaries.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ARCH_OS_RELEASE: &str = "NAME=\"Arch Linux\"\nID=arch\nBUILD_ID=rolling\n";
const UBUNTU_OS_RELEASE: &str = "NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=debian\n";

fn create_fake_binary(path: &Path, script: &str) {
    fs::write(path, script).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// A sandbox with its own PATH, os-release, and config dir.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new(os_release: &str) -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("bin")).unwrap();
        fs::create_dir_all(temp.path().join("config")).unwrap();
        fs::write(temp.path().join("os-release"), os_release).unwrap();
        Self { temp }
    }

    fn install(&self, name: &str) {
        create_fake_binary(&self.temp.path().join("bin").join(name), "#!/bin/sh\n");
    }

    fn install_script(&self, name: &str, script: &str) {
        create_fake_binary(&self.temp.path().join("bin").join(name), script);
    }

    fn write_config(&self, yaml: &str) {
        let dir = self.temp.path().join("config").join("dotscripts");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), yaml).unwrap();
    }

    fn health(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("health"));
        cmd.env("PATH", self.temp.path().join("bin"))
            .env("XDG_CONFIG_HOME", self.temp.path().join("config"))
            .env("DOTSCRIPTS_OS_RELEASE", self.temp.path().join("os-release"))
            .env_remove("DOTSCRIPTS_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }
}

#[test]
fn health_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("health"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("commands and fonts"));
    Ok(())
}

#[test]
fn health_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("health"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn health_unknown_flag_still_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("health"));
    cmd.arg("--bogus");
    cmd.assert()
        .code(0)
        .stderr(predicate::str::contains("--bogus"));
    Ok(())
}

#[test]
fn mpris_help_uses_its_own_description() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("polybar-mpris"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("now-playing line"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_DESCRIPTION")).not());
    Ok(())
}

#[test]
fn health_reports_present_commands_ok() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new(ARCH_OS_RELEASE);
    sandbox.install("feh");
    sandbox.install("polybar");

    sandbox
        .health()
        .assert()
        .success()
        .stdout(predicate::str::contains("feh OK\n"))
        .stdout(predicate::str::contains("polybar OK\n"))
        .stderr(predicate::str::contains("feh can be installed").not());
    Ok(())
}

#[test]
fn health_missing_everything_still_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new(ARCH_OS_RELEASE);

    sandbox
        .health()
        .assert()
        .code(0)
        .stdout(predicate::str::contains("rofi not in `PATH`"))
        .stdout(predicate::str::contains("font 'SauceCodePro Nerd Font' skipped"))
        .stderr(predicate::str::contains(
            "rofi can be installed with `sudo pacman -S rofi`",
        ))
        .stderr(predicate::str::contains(
            "i3lockr can be installed with `yay -S i3lockr-bin`",
        ))
        .stderr(predicate::str::contains(
            "pactl can be installed with `sudo pacman -S libpulse`",
        ));
    Ok(())
}

#[test]
fn health_gives_no_hints_off_arch() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new(UBUNTU_OS_RELEASE);

    sandbox
        .health()
        .assert()
        .success()
        .stdout(predicate::str::contains("rofi not in `PATH`"))
        .stderr(predicate::str::contains("can be installed").not());
    Ok(())
}

#[test]
fn health_gives_no_hints_without_os_release() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new("");
    let mut cmd = sandbox.health();
    cmd.env("DOTSCRIPTS_OS_RELEASE", "/nonexistent/os-release");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dunst not in `PATH`"))
        .stderr(predicate::str::contains("can be installed").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn health_checks_font_through_fc_list() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new(ARCH_OS_RELEASE);
    sandbox.install_script(
        "fc-list",
        "#!/bin/sh\necho '/usr/share/fonts/TTF/SauceCodeProNerdFont-Regular.ttf: SauceCodePro Nerd Font,SauceCodePro NF:style=Regular'\n",
    );

    sandbox
        .health()
        .assert()
        .success()
        .stdout(predicate::str::contains("fc-list OK"))
        .stdout(predicate::str::contains("font 'SauceCodePro Nerd Font' OK"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn health_rejects_near_miss_font() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new(ARCH_OS_RELEASE);
    sandbox.install_script(
        "fc-list",
        "#!/bin/sh\necho '/usr/share/fonts/TTF/SauceCodeProNerdFontMono-Regular.ttf: SauceCodePro Nerd Font Mono:style=Regular'\n",
    );

    sandbox
        .health()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "font 'SauceCodePro Nerd Font' not found",
        ))
        .stderr(predicate::str::contains(
            "font 'SauceCodePro Nerd Font' can be installed with `sudo pacman -S ttf-sourcecodepro-nerd`",
        ));
    Ok(())
}

#[test]
fn health_reads_extra_requirements_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new(ARCH_OS_RELEASE);
    sandbox.write_config("health:\n  commands:\n    - name: alacritty\n      pacman: alacritty\n");
    sandbox.install("alacritty");

    sandbox
        .health()
        .assert()
        .success()
        .stdout(predicate::str::contains("alacritty OK"));
    Ok(())
}

#[test]
fn health_survives_broken_config() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new(ARCH_OS_RELEASE);
    sandbox.write_config("health: [unclosed");

    sandbox
        .health()
        .assert()
        .success()
        .stdout(predicate::str::contains("dunst not in `PATH`"));
    Ok(())
}

#[test]
fn mpris_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("polybar-mpris"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--max-title-len"))
        .stdout(predicate::str::contains("--player"));
    Ok(())
}

#[test]
fn mpris_rejects_tiny_title_length() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("polybar-mpris"));
    cmd.env("XDG_CONFIG_HOME", temp.path())
        .env_remove("DOTSCRIPTS_CONFIG")
        .env_remove("RUST_LOG")
        .args(["--max-title-len", "2"]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("max_title_len"));
    Ok(())
}

#[test]
fn mpris_without_session_bus_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("polybar-mpris"));
    cmd.env("XDG_CONFIG_HOME", temp.path())
        .env(
            "DBUS_SESSION_BUS_ADDRESS",
            format!("unix:path={}", temp.path().join("no-bus").display()),
        )
        .env_remove("DOTSCRIPTS_CONFIG")
        .env_remove("RUST_LOG");
    cmd.assert().code(1).stdout(predicate::str::is_empty());
    Ok(())
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const OFFICERS_CSV: &str = "\
Officers
Term,2025
Name,Position,Phone,Email
Ann Officer,President,555-0100,0012345@slu.edu
Bob Officer,Treasurer,555-0101,treasurer@slu.edu
";

pub const MEMBERS_CSV: &str = "\
Members
Fall 2025
Timestamp,Name,SLU ID
2025-09-01,Jane Doe,123456
2025-09-01,\"Roe, Rick\",222222
2025-09-02,Bad Row,12ab
";

pub fn rc() -> Command {
    cargo_bin_cmd!("rollcall")
}

/// Fresh scratch directory inside the system temp dir
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("rollcall_it_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Test fixture: store path plus a config file pointing at sample rosters.
pub struct Kiosk {
    pub dir: PathBuf,
    pub db: String,
    pub config: String,
}

impl Kiosk {
    pub fn new(name: &str) -> Self {
        Self::with_rosters(name, true)
    }

    /// `with_files = false` leaves the roster directory empty.
    pub fn with_rosters(name: &str, with_files: bool) -> Self {
        let dir = scratch_dir(name);
        let res = dir.join("res");
        fs::create_dir_all(&res).expect("create res dir");

        if with_files {
            fs::write(res.join("OfficersList.csv"), OFFICERS_CSV).expect("write officers");
            fs::write(res.join("MembersList.csv"), MEMBERS_CSV).expect("write members");
        }

        let db = dir.join("rollcall.sqlite").to_string_lossy().to_string();
        let config = dir.join("rollcall.conf").to_string_lossy().to_string();
        let yaml = format!(
            "database: '{}'\nroster_dir: '{}'\n",
            db,
            dir.to_string_lossy()
        );
        fs::write(&config, yaml).expect("write config");

        Self { dir, db, config }
    }

    /// `rollcall --config-file <conf> --test <args..>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut c = rc();
        c.env("NO_COLOR", "1")
            .args(["--config-file", &self.config, "--test"])
            .args(args);
        c
    }

    pub fn stdout_of(&self, args: &[&str]) -> String {
        let out = self.cmd(args).assert().success().get_output().stdout.clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn temp_out(&self, file: &str) -> String {
        self.dir.join(file).to_string_lossy().to_string()
    }
}

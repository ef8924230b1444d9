use assert_cmd::Command;

pub fn memorize_cmd() -> Command {
    let mut cmd = Command::cargo_bin("memorize").unwrap();
    cmd.env_remove("MEMORIZE_ROOT");
    cmd
}

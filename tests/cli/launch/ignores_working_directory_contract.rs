use crate::harness::{TestContext, editor_stub};
use serial_test::serial;

#[test]
#[serial]
fn launch_uses_launcher_directory_not_cwd() {
    let ctx = TestContext::new();
    ctx.install_editor();

    // A decoy in the cwd's build/ must never be picked up.
    let decoy_started = ctx.root().join("decoy.started");
    editor_stub::write_recording_editor(
        &ctx.work_dir().join("build").join("WolfEdit"),
        &decoy_started,
        &ctx.root().join("decoy.finished"),
    );

    ctx.cli().assert().success();

    ctx.wait_for_editor_start();
    assert!(!decoy_started.exists(), "editor was resolved against the working directory");
}

#[test]
#[serial]
fn launch_succeeds_from_launcher_directory_itself() {
    let ctx = TestContext::new();
    ctx.install_editor();

    ctx.cli_in(ctx.app_dir()).assert().success();

    let (_, argc) = ctx.wait_for_editor_start();
    assert_eq!(argc, 0);
}

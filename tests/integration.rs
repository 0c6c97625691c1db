use std::path::Path;
use std::process::Command;

fn docsite_cmd(fixture: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docsite"));
    cmd.current_dir(Path::new("tests/fixtures").join(fixture));
    cmd
}

#[test]
fn build_then_check_passes() {
    let out = tempfile::tempdir().unwrap();
    let out_arg = out.path().to_str().unwrap();

    let build = docsite_cmd("basic").args(["build", "--out", out_arg]).output().unwrap();
    assert!(
        build.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&build.stderr)
    );
    assert!(out.path().join("docs/classes/index.md").is_file());
    assert!(out.path().join("docs/classes/Player/index.md").is_file());
    assert!(out.path().join("docs/types/Track/index.md").is_file());
    // Authored pages are copied alongside the generated ones.
    assert!(out.path().join("docs/guide/getting-started.md").is_file());
    assert!(out.path().join("docs/changelog.md").is_file());
    // The skipped variable produces no page anywhere.
    assert!(!out.path().join("docs/classes/VERSION").exists());

    let check = docsite_cmd("basic").args(["check", "--out", out_arg]).output().unwrap();
    assert!(
        check.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&check.stdout)
    );
    assert!(String::from_utf8_lossy(&check.stdout).contains("fresh"));
}

#[test]
fn check_distinguishes_stale_from_missing() {
    let out = tempfile::tempdir().unwrap();
    let out_arg = out.path().to_str().unwrap();

    let build = docsite_cmd("basic").args(["build", "--out", out_arg]).output().unwrap();
    assert!(build.status.success());

    let player_page = out.path().join("docs/classes/Player/index.md");
    std::fs::write(&player_page, "tampered\n").unwrap();
    let stale = docsite_cmd("basic").args(["check", "--out", out_arg]).output().unwrap();
    assert_eq!(stale.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&stale.stdout).contains("STALE"));

    std::fs::remove_file(&player_page).unwrap();
    let missing = docsite_cmd("basic").args(["check", "--out", out_arg]).output().unwrap();
    assert_eq!(missing.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&missing.stdout).contains("MISSING"));
}

#[test]
fn generated_page_contains_rendered_detail() {
    let out = tempfile::tempdir().unwrap();
    let out_arg = out.path().to_str().unwrap();

    let build = docsite_cmd("basic").args(["build", "--out", out_arg]).output().unwrap();
    assert!(build.status.success());

    let page = std::fs::read_to_string(out.path().join("docs/classes/Player/index.md")).unwrap();
    assert!(page.starts_with("# Class: Player\n"), "{page}");
    assert!(page.contains("Controls audio playback"));
    assert!(page.contains("https://github.com/acme/musickit/blob/main/src/player.ts#L14"));
    assert!(page.contains("play(track: Track): void"));

    let enums = std::fs::read_to_string(out.path().join("docs/enums/PlaybackState/index.md")).unwrap();
    assert!(enums.contains("- `Paused` = `2`"));
}

#[test]
fn resolve_hits_and_misses() {
    let hit = docsite_cmd("basic").args(["resolve", "classes/Player"]).output().unwrap();
    assert!(hit.status.success());
    let stdout = String::from_utf8_lossy(&hit.stdout);
    assert!(stdout.contains("Class: Player"), "{stdout}");
    assert!(stdout.contains("play"));

    // The category prefix is transparent: the bare name resolves identically.
    let bare = docsite_cmd("basic").args(["resolve", "Player"]).output().unwrap();
    assert!(bare.status.success());

    let miss = docsite_cmd("basic").args(["resolve", "classes/Ghost"]).output().unwrap();
    assert!(!miss.status.success());
    assert!(String::from_utf8_lossy(&miss.stderr).contains("Entity Not Found"));
}

#[test]
fn search_interleaves_class_members() {
    let search = docsite_cmd("basic").arg("search").output().unwrap();
    assert!(search.status.success());
    let stdout = String::from_utf8_lossy(&search.stdout);
    assert!(stdout.contains("/docs/classes/Player#play"));
    assert!(stdout.contains("Player.volume"));
    // Enums and variables are not indexed.
    assert!(!stdout.contains("PlaybackState"));
    assert!(!stdout.contains("VERSION"));

    let filtered = docsite_cmd("basic").args(["search", "track"]).output().unwrap();
    let filtered_out = String::from_utf8_lossy(&filtered.stdout);
    assert!(filtered_out.contains("Track"));
    assert!(!filtered_out.contains("createPlayer"));
}

#[test]
fn sidebar_lists_groups_in_fixed_order() {
    let sidebar = docsite_cmd("basic").arg("sidebar").output().unwrap();
    assert!(sidebar.status.success());
    let stdout = String::from_utf8_lossy(&sidebar.stdout);

    let positions: Vec<usize> = ["General", "Classes", "Interfaces", "Enums", "Functions", "Types"]
        .iter()
        .map(|title| stdout.find(title).unwrap_or_else(|| panic!("missing group {title}")))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "groups out of order: {stdout}");

    assert!(stdout.contains("/docs/guide/getting-started"));
    assert!(stdout.contains("/docs/classes/Player"));
}

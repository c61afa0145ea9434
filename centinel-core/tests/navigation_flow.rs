//! End-to-end navigation scenarios over an in-memory artifact tree.
//!
//! The tree mirrors the game's root layout: a locked archive, a text
//! artifact, and an image artifact.

use std::rc::Rc;

use centinel_core::{ArtifactTree, Command, Entry, NavigationEngine, Outcome, PathNode, View};

fn game_tree() -> ArtifactTree {
    let secret = Entry::text("secret.txt", "classified");
    let message = Entry::directory("message", 3, vec![Entry::text("final.txt", "the end")]);
    let archive = Entry::directory("archive", 2, vec![secret, message]);
    let notes = Entry::text("notes.txt", "field report");
    let photo = Entry::image("photo.png", vec![0u8; 32], 8, 4);
    ArtifactTree::from_root(Entry::directory(
        "documents",
        1,
        vec![archive, notes, photo],
    ))
}

fn tail(engine: &NavigationEngine) -> Rc<Entry> {
    engine.current_entry().cloned().expect("tail is an entry")
}

#[test]
fn locked_archive_opens_only_with_the_right_password() {
    // Scenario A: wrong password leaves everything untouched, the right
    // one raises the level and completes the deferred push.
    let mut engine = NavigationEngine::new(game_tree());

    assert_eq!(engine.apply(Command::Select(1)), Outcome::PasswordRequired);
    assert_eq!(engine.path().len(), 1);

    assert_eq!(
        engine.apply(Command::SubmitPassword("wrong".into())),
        Outcome::PasswordRejected
    );
    assert_eq!(engine.unlock_level(), 1);
    assert_eq!(engine.path().len(), 1);

    assert_eq!(engine.apply(Command::Select(1)), Outcome::PasswordRequired);
    assert_eq!(
        engine.apply(Command::SubmitPassword("vires_in_silentio".into())),
        Outcome::Unlocked
    );
    assert_eq!(engine.unlock_level(), 2);
    assert_eq!(engine.path().len(), 2);
    assert_eq!(tail(&engine).name(), "archive");
}

#[test]
fn bookmark_flow_lists_exactly_the_toggled_file() {
    // Scenario B.
    let mut engine = NavigationEngine::new(game_tree());

    assert_eq!(engine.apply(Command::Select(2)), Outcome::Entered);
    assert_eq!(tail(&engine).name(), "notes.txt");

    assert_eq!(engine.apply(Command::ToggleBookmark), Outcome::Bookmarked);
    assert_eq!(engine.apply(Command::ViewBookmarks), Outcome::BookmarksOpened);

    let View::Listing { header, rows } = engine.current_view() else {
        panic!("expected the bookmark listing");
    };
    assert_eq!(header, "Bookmarks");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "notes.txt");
    assert!(!rows[0].is_directory);

    // Back pops the marker, then the file, restoring the root listing.
    assert_eq!(engine.apply(Command::Back), Outcome::BackedUp);
    assert_eq!(engine.apply(Command::Back), Outcome::BackedUp);
    let View::Listing { rows, .. } = engine.current_view() else {
        panic!("expected the root listing");
    };
    assert_eq!(rows.len(), 3);
}

#[test]
fn out_of_range_selection_is_rejected_and_harmless() {
    // Scenario C.
    let mut engine = NavigationEngine::new(game_tree());
    let before = engine.path_string();

    assert_eq!(engine.apply(Command::Select(99)), Outcome::InvalidSelection);
    assert_eq!(engine.path_string(), before);
    assert_eq!(engine.path().len(), 1);
}

#[test]
fn unlock_at_max_level_reports_no_further_levels() {
    // Scenario D, driven through the engine: once both passwords are spent
    // a further prompt can only report that nothing is left to unlock.
    let mut engine = NavigationEngine::new(game_tree());

    engine.apply(Command::Select(1));
    engine.apply(Command::SubmitPassword("vires_in_silentio".into()));
    engine.apply(Command::Select(2));
    engine.apply(Command::SubmitPassword("CENTINEL-1".into()));
    assert_eq!(engine.unlock_level(), 3);

    // Force another prompt against an already-maxed table.
    let vault = Entry::directory("vault", 9, vec![]);
    let root = Entry::directory("documents", 1, vec![vault]);
    let mut engine = NavigationEngine::new(ArtifactTree::from_root(root));
    engine.apply(Command::Select(1));
    // required_level 9 can never be satisfied by a 2-entry table; walking
    // the table up runs out after level 3.
    assert_eq!(
        engine.apply(Command::SubmitPassword("vires_in_silentio".into())),
        Outcome::PasswordRequired
    );
    assert_eq!(
        engine.apply(Command::SubmitPassword("CENTINEL-1".into())),
        Outcome::PasswordRequired
    );
    assert_eq!(
        engine.apply(Command::SubmitPassword("anything".into())),
        Outcome::NoFurtherLevels
    );
    assert_eq!(engine.unlock_level(), 3);
}

#[test]
fn path_length_never_drops_below_one() {
    let mut engine = NavigationEngine::new(game_tree());
    let commands = [
        Command::Back,
        Command::Select(1),
        Command::Back,
        Command::Select(2),
        Command::Back,
        Command::Back,
        Command::Back,
        Command::Select(99),
        Command::ViewBookmarks,
        Command::Back,
        Command::Back,
    ];
    for command in commands {
        engine.apply(command);
        assert!(!engine.path().is_empty());
    }
    assert_eq!(engine.path().len(), 1);
}

#[test]
fn select_then_back_restores_the_identical_entry() {
    let mut engine = NavigationEngine::new(game_tree());
    let root_before = tail(&engine);

    engine.apply(Command::Select(2));
    engine.apply(Command::Back);

    // Reference equality, not just name equality.
    assert!(Rc::ptr_eq(&root_before, &tail(&engine)));
}

#[test]
fn unlock_level_is_monotonic_over_any_command_sequence() {
    let mut engine = NavigationEngine::new(game_tree());
    let commands = [
        Command::Select(1),
        Command::SubmitPassword("wrong".into()),
        Command::Select(1),
        Command::SubmitPassword("vires_in_silentio".into()),
        Command::Back,
        Command::Select(1),
        Command::Select(2),
        Command::SubmitPassword("CENTINEL-1".into()),
        Command::Back,
        Command::Back,
    ];

    let mut last_level = engine.unlock_level();
    for command in commands {
        engine.apply(command);
        let level = engine.unlock_level();
        assert!(level >= last_level);
        assert!(level - last_level <= 1);
        last_level = level;
    }
    assert_eq!(last_level, 3);
}

#[test]
fn locked_directory_never_advances_without_a_correct_password() {
    let mut engine = NavigationEngine::new(game_tree());

    for attempt in ["", "wrong", "VIRES_IN_SILENTIO", "vires in silentio"] {
        engine.apply(Command::Select(1));
        engine.apply(Command::SubmitPassword(attempt.into()));
        assert_eq!(engine.path().len(), 1);
        assert_eq!(engine.unlock_level(), 1);
    }
}

#[test]
fn bookmarked_entries_alias_the_tree_nodes() {
    let mut engine = NavigationEngine::new(game_tree());

    engine.apply(Command::Select(3));
    let photo = tail(&engine);
    engine.apply(Command::ToggleBookmark);
    engine.apply(Command::ToggleBookmark);

    assert_eq!(engine.bookmarks().len(), 2);
    for bookmark in engine.bookmarks().entries() {
        assert!(Rc::ptr_eq(bookmark, &photo));
    }
}

#[test]
fn bookmarks_marker_round_trips_through_back() {
    let mut engine = NavigationEngine::new(game_tree());

    engine.apply(Command::Select(1));
    // Pending prompt; opening bookmarks abandons it.
    engine.apply(Command::ViewBookmarks);
    assert!(engine.pending_target().is_none());
    assert!(matches!(engine.path().last(), Some(PathNode::Bookmarks)));

    engine.apply(Command::Back);
    assert_eq!(tail(&engine).name(), "documents");
}

//! Save/load behaviour of sessions against file-backed repositories

use std::path::Path;

use guess_animal::{
    Animal, DecisionTree, Error, GameSession, LoadOutcome, Node, QuestionText, SaveOutcome,
    adapters::{Answer, InMemoryRepository, JsonRepository, MsgPackRepository, ScriptedOracle},
    app::{App, SaveFormat, SessionConfig},
    knowledge::{SavedNode, SavedTree, serialization::NodeKind},
    ports::TreeRepository,
};
use tempfile::TempDir;

fn leaf(name: &str) -> Node {
    Node::leaf(Animal::new(name).unwrap())
}

fn question(text: &str, yes: Node, no: Node) -> Node {
    Node::question(QuestionText::new(text).unwrap(), yes, no)
}

fn zoo() -> DecisionTree {
    DecisionTree::from_root(Some(question(
        "Does it fly?",
        question("Is it a bird?", leaf("eagle"), leaf("bat")),
        question(
            "Does it live in water?",
            question("Is it a mammal?", leaf("dolphin"), leaf("trout")),
            leaf("horse"),
        ),
    )))
}

#[test]
fn test_roundtrip_in_both_formats() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repos: [(&str, Box<dyn TreeRepository>); 2] = [
        ("zoo.bin", Box::new(MsgPackRepository::new())),
        ("zoo.json", Box::new(JsonRepository::new())),
    ];

    for (name, repo) in repos {
        let path = temp_dir.path().join(name);
        for tree in [DecisionTree::new(), DecisionTree::from_root(Some(leaf("cat"))), zoo()] {
            repo.save(&tree, &path).unwrap();
            assert_eq!(repo.load(&path).unwrap(), tree, "{name}");
        }
    }
}

#[test]
fn test_session_save_then_load_in_new_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = SessionConfig::new()
        .with_save_file(temp_dir.path().join("animals.json"))
        .with_format(SaveFormat::Json);
    let app = App::new(config);

    let mut first = app.create_session();
    first.new_game();
    first
        .play_round(&mut ScriptedOracle::new([Answer::text("cat")]))
        .unwrap();
    first
        .play_round(&mut ScriptedOracle::new([
            Answer::No,
            Answer::text("dog"),
            Answer::text("Does it bark?"),
            Answer::Yes,
        ]))
        .unwrap();
    assert!(matches!(first.request_save().unwrap(), SaveOutcome::Saved { .. }));

    let mut second = app.create_session();
    assert!(matches!(
        second.request_load().unwrap(),
        LoadOutcome::Loaded { animals: 2, .. }
    ));
    assert_eq!(second.tree(), first.tree());
}

#[test]
fn test_clean_session_never_calls_repository_save() {
    let repo = InMemoryRepository::new();
    let mut session = GameSession::new(repo.clone(), "animals");
    session.new_game();

    assert_eq!(session.request_save().unwrap(), SaveOutcome::Unchanged);
    session
        .play_round(&mut ScriptedOracle::new([Answer::text("cat")]))
        .unwrap();
    session.request_save().unwrap();
    assert_eq!(session.request_save().unwrap(), SaveOutcome::Unchanged);

    assert_eq!(repo.save_count(), 1);
}

#[test]
fn test_load_without_save_file_keeps_current_tree() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut session = GameSession::new(
        MsgPackRepository::new(),
        temp_dir.path().join("never_written.bin"),
    );
    session
        .play_round(&mut ScriptedOracle::new([Answer::text("cat")]))
        .unwrap();

    let outcome = session.request_load().unwrap();

    assert!(matches!(outcome, LoadOutcome::NotFound { .. }));
    assert_eq!(session.tree().root(), Some(&leaf("cat")));
}

#[test]
fn test_failed_save_keeps_dirty_flag() {
    let mut session = GameSession::new(
        MsgPackRepository::new(),
        Path::new("/invalid_dir_12345/animals.bin"),
    );
    session
        .play_round(&mut ScriptedOracle::new([Answer::text("cat")]))
        .unwrap();

    assert!(matches!(session.request_save(), Err(Error::Io { .. })));
    assert!(session.is_dirty());
}

#[test]
fn test_question_missing_branch_is_rejected_on_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.bin");
    let broken = SavedTree {
        version: SavedTree::VERSION,
        root: Some(SavedNode {
            kind: NodeKind::Question,
            text: "Does it bark?".to_string(),
            yes: None,
            no: Some(Box::new(SavedNode {
                kind: NodeKind::Leaf,
                text: "cat".to_string(),
                yes: None,
                no: None,
            })),
        }),
    };
    std::fs::write(&path, rmp_serde::to_vec_named(&broken).unwrap()).unwrap();

    let mut session = GameSession::new(MsgPackRepository::new(), &path);
    session
        .play_round(&mut ScriptedOracle::new([Answer::text("horse")]))
        .unwrap();

    assert!(matches!(
        session.request_load(),
        Err(Error::CorruptSave { .. })
    ));
    assert_eq!(session.tree().root(), Some(&leaf("horse")));
    assert!(session.is_dirty());
}

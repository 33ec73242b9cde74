//! Workflow + file-backed persistence, end to end.
//!
//! Uses tempfile::TempDir so every test gets an isolated storage directory.

use chrono::Utc;
use std::sync::Arc;
use wellboard_core::{
    find_goal, Difficulty, Gender, GoalCategory, Profile, SessionStore, StorageKey, Tip,
    Workflow, WorkflowStep,
};
use wellboard_memory::{FileStore, KeyValueStore, Persistence};

fn open(dir: &tempfile::TempDir) -> Arc<Persistence<FileStore>> {
    Arc::new(Persistence::new(FileStore::open(dir.path()).unwrap()))
}

fn profile() -> Profile {
    let goals = ["weight-management", "better-sleep"]
        .iter()
        .map(|id| find_goal(id).unwrap())
        .collect();
    Profile::new(30, Gender::Female, goals).unwrap()
}

fn tip(id: &str, p: &Profile) -> Tip {
    Tip {
        id: id.into(),
        title: "Optimal Sleep Routine".into(),
        short_description: "Create a consistent bedtime routine for better rest.".into(),
        full_description: None,
        category: GoalCategory::Sleep,
        icon: "😴".into(),
        difficulty: Difficulty::Medium,
        estimated_time: "30 minutes prep".into(),
        steps: None,
        benefits: vec!["Better sleep quality".into()],
        tags: vec!["sleep".into()],
        is_favorite: false,
        created_at: Utc::now(),
        generated_for: Some(p.clone()),
    }
}

#[test]
fn test_session_survives_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let p = profile();

    {
        let mut wf = Workflow::new(open(&dir));
        let ticket = wf.submit_profile(p.clone()).unwrap().unwrap();
        wf.tips_generated(ticket.id, vec![tip("t1", &p), tip("t2", &p)]);
        let first = wf.state().current_tips[0].clone();
        wf.toggle_favorite(&first);
    }

    let mut wf = Workflow::new(open(&dir));
    let ticket = wf.hydrate().expect("restored profile triggers generation");
    assert_eq!(ticket.profile, p);
    assert_eq!(wf.state().current_step, WorkflowStep::TipsGeneration);
    assert_eq!(wf.state().favorite_tips.len(), 1);
    let favorite = &wf.state().favorite_tips[0];
    assert_eq!(favorite.id, "t1");
    assert!(favorite.is_favorite);
    assert_eq!(favorite.generated_for.as_ref().unwrap().created_at, p.created_at);
}

#[test]
fn test_snapshot_written_on_profile_submit() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = open(&dir);
    let mut wf = Workflow::new(store.clone());
    let p = profile();
    wf.submit_profile(p.clone()).unwrap();

    let snapshot = store.load_snapshot().expect("snapshot");
    assert_eq!(snapshot.user_profile, Some(p));
    assert!(snapshot.favorite_tips.is_empty());
}

#[test]
fn test_reset_all_clears_every_key() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = open(&dir);
    store.store().set("wellness-legacy-board", "{}").unwrap();

    let mut wf = Workflow::new(store.clone());
    let p = profile();
    let ticket = wf.submit_profile(p.clone()).unwrap().unwrap();
    wf.tips_generated(ticket.id, vec![tip("t1", &p)]);
    let first = wf.state().current_tips[0].clone();
    wf.toggle_favorite(&first);

    wf.reset_all();

    for key in StorageKey::ALL {
        assert!(store.load::<serde_json::Value>(key).is_none(), "{} survived", key.as_str());
    }
    assert!(store.store().keys().unwrap().is_empty());

    let mut fresh = Workflow::new(store);
    assert!(fresh.hydrate().is_none());
    assert_eq!(fresh.state().current_step, WorkflowStep::ProfileSetup);
}

#[test]
fn test_reset_profile_keeps_favorites_on_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = open(&dir);
    let mut wf = Workflow::new(store.clone());
    let p = profile();
    let ticket = wf.submit_profile(p.clone()).unwrap().unwrap();
    wf.tips_generated(ticket.id, vec![tip("t1", &p)]);
    let first = wf.state().current_tips[0].clone();
    wf.toggle_favorite(&first);

    wf.reset_profile();

    assert!(store.load_profile().is_none());
    assert!(store.load_snapshot().is_none());
    assert_eq!(store.load_favorites().len(), 1);
}

#[test]
fn test_reset_all_sweeps_legacy_file_names() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("wellness:cache.json"), "{}").unwrap();
    std::fs::write(dir.path().join("other.json"), "{}").unwrap();
    let store = open(&dir);

    let mut wf = Workflow::new(store.clone());
    wf.submit_profile(profile()).unwrap();
    wf.reset_all();

    assert!(!dir.path().join("wellness:cache.json").exists());
    assert_eq!(store.store().keys().unwrap(), vec!["other".to_string()]);
}

#[test]
fn test_snapshot_restores_profile_when_profile_key_is_lost() {
    let dir = tempfile::TempDir::new().unwrap();
    let p = profile();
    {
        let mut wf = Workflow::new(open(&dir));
        wf.submit_profile(p.clone()).unwrap();
    }
    std::fs::write(dir.path().join("wellness-user-profile.json"), "{corrupt").unwrap();

    let mut wf = Workflow::new(open(&dir));
    let ticket = wf.hydrate().expect("snapshot still holds the profile");
    assert_eq!(ticket.profile, p);
}

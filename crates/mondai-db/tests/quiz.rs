use mondai_db::{quiz, setup_schema};
use sea_orm::{Database, EntityTrait};
use test_log::test;

const QUIZ_XML: &str = "<questions><question><type>No Choice</type><text>Capital of Peru?</text>\
    <answers><answer>Lima</answer></answers></question></questions>";

#[test(tokio::test)]
async fn test_add_and_get_quiz() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();

    let stored = quiz::Mutation::add_quiz(&db, "Geography", QUIZ_XML).await.unwrap();
    assert!(!stored.key.is_empty());

    let loaded = quiz::Query::get_quiz_by_key(&db, &stored.key).await.unwrap().unwrap();
    assert_eq!(loaded.name, "Geography");
    assert_eq!(loaded.quiz_xml, QUIZ_XML);
    assert_eq!(loaded, stored);
}

#[test(tokio::test)]
async fn test_unknown_key() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();

    let loaded = quiz::Query::get_quiz_by_key(&db, "does-not-exist").await.unwrap();
    assert!(loaded.is_none());
}

#[test(tokio::test)]
async fn test_keys_are_unique() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();

    let mut keys = Vec::new();
    for i in 0..20 {
        let stored = quiz::Mutation::add_quiz(&db, &format!("Quiz {i}"), QUIZ_XML).await.unwrap();
        keys.push(stored.key);
    }
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 20);

    let all = mondai_entity::quiz::Entity::find().all(&db).await.unwrap();
    assert_eq!(all.len(), 20);
}

#[test(tokio::test)]
async fn test_setup_schema_is_idempotent() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(&db).await.unwrap();
    quiz::Mutation::add_quiz(&db, "Kept", QUIZ_XML).await.unwrap();

    setup_schema(&db).await.unwrap();
    let all = mondai_entity::quiz::Entity::find().all(&db).await.unwrap();
    assert_eq!(all.len(), 1);
}

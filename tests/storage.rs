use fruitapp::entities::fruit;
use fruitapp::storage::LocalStore;
use tokio_stream::StreamExt;

fn record(id: &str, title: &str, category: &str, completed: bool) -> fruit::Model {
    fruit::Model {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        category: category.to_string(),
        is_completed: completed,
    }
}

#[tokio::test]
async fn upsert_then_get_by_id_returns_the_record() {
    let store = LocalStore::in_memory().await.unwrap();

    let fruit = record("1", "Title1", "grocery", false);
    store.upsert(fruit.clone()).await.unwrap();

    assert_eq!(store.get_by_id("1").await.unwrap(), Some(fruit));
    assert_eq!(store.get_by_id("missing").await.unwrap(), None);
}

#[tokio::test]
async fn upsert_replaces_an_existing_record() {
    let store = LocalStore::in_memory().await.unwrap();

    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();
    store.upsert(record("1", "Renamed", "bakery", true)).await.unwrap();

    let stored = store.get_by_id("1").await.unwrap().unwrap();
    assert_eq!(stored.title, "Renamed");
    assert_eq!(stored.category, "bakery");
    assert!(stored.is_completed);
    assert_eq!(store.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_store_reads_as_empty_not_as_an_error() {
    let store = LocalStore::in_memory().await.unwrap();
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn upsert_all_inserts_and_replaces_by_id() {
    let store = LocalStore::in_memory().await.unwrap();
    store.upsert(record("1", "Old", "grocery", false)).await.unwrap();

    store
        .upsert_all(vec![
            record("1", "New", "grocery", false),
            record("2", "Title2", "bakery", false),
        ])
        .await
        .unwrap();

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "New");
}

#[tokio::test]
async fn update_completed_flips_the_flag_and_nothing_else() {
    let store = LocalStore::in_memory().await.unwrap();
    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();

    store.update_completed("1", true).await.unwrap();

    let stored = store.get_by_id("1").await.unwrap().unwrap();
    assert!(stored.is_completed);
    assert_eq!(stored.title, "Title1");
}

#[tokio::test]
async fn update_completed_on_absent_id_is_a_noop() {
    let store = LocalStore::in_memory().await.unwrap();
    store.update_completed("missing", true).await.unwrap();
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_by_id_reports_how_many_records_went_away() {
    let store = LocalStore::in_memory().await.unwrap();
    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();

    assert_eq!(store.delete_by_id("1").await.unwrap(), 1);
    assert_eq!(store.delete_by_id("1").await.unwrap(), 0);
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_completed_removes_exactly_the_completed_records() {
    let store = LocalStore::in_memory().await.unwrap();
    store.upsert(record("a", "A", "grocery", false)).await.unwrap();
    store.upsert(record("b", "B", "grocery", true)).await.unwrap();
    store.upsert(record("c", "C", "grocery", true)).await.unwrap();

    assert_eq!(store.delete_completed().await.unwrap(), 2);

    let remaining = store.get_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "a");
}

#[tokio::test]
async fn delete_all_empties_the_store() {
    let store = LocalStore::in_memory().await.unwrap();
    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();
    store.upsert(record("2", "Title2", "bakery", false)).await.unwrap();

    store.delete_all().await.unwrap();

    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_by_category_filters_records() {
    let store = LocalStore::in_memory().await.unwrap();
    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();
    store.upsert(record("2", "Title2", "bakery", false)).await.unwrap();
    store.upsert(record("3", "Title3", "grocery", false)).await.unwrap();

    let grocery = store.get_by_category("grocery").await.unwrap();
    assert_eq!(grocery.len(), 2);
    assert!(grocery.iter().all(|r| r.category == "grocery"));
}

#[tokio::test]
async fn observe_all_yields_the_current_snapshot_then_every_change() {
    let store = LocalStore::in_memory().await.unwrap();

    let mut stream = store.observe_all();
    assert_eq!(stream.next().await.unwrap(), vec![]);

    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();
    let snapshot = stream.next().await.unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, "1");

    store.delete_all().await.unwrap();
    assert_eq!(stream.next().await.unwrap(), vec![]);
}

#[tokio::test]
async fn observe_by_id_tracks_one_record() {
    let store = LocalStore::in_memory().await.unwrap();

    let mut stream = store.observe_by_id("1");
    assert_eq!(stream.next().await.unwrap(), None);

    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();
    let seen = stream.next().await.unwrap().unwrap();
    assert_eq!(seen.title, "Title1");

    store.delete_by_id("1").await.unwrap();
    assert_eq!(stream.next().await.unwrap(), None);
}

#[tokio::test]
async fn one_subscriber_detaching_does_not_affect_others() {
    let store = LocalStore::in_memory().await.unwrap();

    let mut first = store.observe_all();
    let mut second = store.observe_all();
    assert_eq!(first.next().await.unwrap(), vec![]);
    assert_eq!(second.next().await.unwrap(), vec![]);

    drop(first);

    store.upsert(record("1", "Title1", "grocery", false)).await.unwrap();
    assert_eq!(second.next().await.unwrap().len(), 1);
}

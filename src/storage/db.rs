use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryOrder, Schema,
};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use crate::entities::fruit;
use crate::error::StoreError;

/// Durable keyed store for fruit records, observable as a stream.
///
/// Mutations go through [`fruits`](crate::storage::fruits) and republish the
/// full row snapshot on a watch channel, so every subscriber sees the
/// current contents immediately and each change afterwards.
pub struct LocalStore {
    pub(crate) conn: DatabaseConnection,
    pub(crate) changes: watch::Sender<Vec<fruit::Model>>,
}

impl LocalStore {
    /// Open the store at the given database URL and create the schema.
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let mut options = ConnectOptions::new(database_url);
        // A shared-cache in-memory database disappears when its last
        // connection closes, so keep at least one connection alive.
        options.min_connections(1).max_connections(4).sqlx_logging(false);

        let conn = Database::connect(options).await?;

        let builder = conn.get_database_backend();
        let schema = Schema::new(builder);
        let mut create_table = schema.create_table_from_entity(fruit::Entity);
        create_table.if_not_exists();
        conn.execute(builder.build(&create_table)).await?;

        let (changes, _) = watch::channel(Vec::new());

        Ok(LocalStore { conn, changes })
    }

    /// Open a private in-memory store. Each call gets an isolated database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let url = format!(
            "sqlite:file:fruitapp_{}?mode=memory&cache=shared",
            Uuid::new_v4().simple()
        );
        Self::new(&url).await
    }

    /// Observe the full contents of the store.
    ///
    /// The stream is infinite: it yields the current snapshot first, then a
    /// new snapshot after every mutation. Dropping one subscriber does not
    /// affect the others.
    pub fn observe_all(&self) -> WatchStream<Vec<fruit::Model>> {
        WatchStream::new(self.changes.subscribe())
    }

    /// Observe a single record by id; yields `None` while the id is absent.
    pub fn observe_by_id(&self, fruit_id: &str) -> impl Stream<Item = Option<fruit::Model>> {
        let fruit_id = fruit_id.to_string();
        WatchStream::new(self.changes.subscribe())
            .map(move |records| records.into_iter().find(|record| record.id == fruit_id))
    }

    /// Re-read the table and push the snapshot to all observers.
    pub(crate) async fn publish(&self) -> Result<(), StoreError> {
        let records = fruit::Entity::find()
            .order_by_asc(fruit::Column::Id)
            .all(&self.conn)
            .await?;
        self.changes.send_replace(records);
        Ok(())
    }
}

//! Declared entity tables and the idempotent "create all" step.

use migration::SchemaManager;
use sea_orm::{
    DatabaseConnection, DbBackend, DbErr, EntityTrait, Schema,
    sea_query::TableCreateStatement,
};

/// Table definitions registered on the application, in registration order.
#[derive(Clone, Debug)]
pub struct SchemaRegistry {
    backend: DbBackend,
    tables: Vec<(String, TableCreateStatement)>,
}

impl SchemaRegistry {
    pub fn new(backend: DbBackend) -> Self {
        Self {
            backend,
            tables: Vec::new(),
        }
    }

    pub fn register<E>(&mut self, entity: E)
    where
        E: EntityTrait,
    {
        let name = entity.table_name().to_string();
        let mut statement = Schema::new(self.backend).create_table_from_entity(entity);
        statement.if_not_exists();

        self.tables.push((name, statement));
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }
}

/// Create every registered table that does not exist yet.
pub async fn ensure_schema(db: &DatabaseConnection, registry: &SchemaRegistry) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);

    for (table, statement) in &registry.tables {
        manager.create_table(statement.clone()).await?;
        tracing::debug!(table = %table, "table ensured");
    }

    Ok(())
}

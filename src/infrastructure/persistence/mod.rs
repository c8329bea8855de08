mod sqlite_neo_store;

pub use sqlite_neo_store::SqliteNeoStore;

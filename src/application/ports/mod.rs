mod neo_store;

pub use neo_store::{NeoStore, OverviewCounts, StoreError};

#[cfg(test)]
pub use neo_store::MockNeoStore;

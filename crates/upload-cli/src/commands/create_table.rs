use anyhow::Result;
use tracing::debug;
use upload_store::repo::USERS_TABLE;
use upload_store::Store;

pub fn create_table(store: &mut Store) -> Result<()> {
    store.users().create_table()?;
    debug!(table = USERS_TABLE, "table created");
    println!("Table created.");
    Ok(())
}

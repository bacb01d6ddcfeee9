pub mod quiz;

pub use sea_orm;

use sea_orm::{ConnectionTrait, DbConn, DbErr};

/// Creates the tables if they do not exist yet.
pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    db.execute_unprepared(include_str!("sqlite.sql")).await?;
    Ok(())
}

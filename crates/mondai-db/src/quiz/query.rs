use mondai_entity::quiz;
use mondai_entity::quiz::{Entity as Quiz, Model as QuizModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_quiz_by_key<C: ConnectionTrait>(db: &C, key: &str) -> Result<Option<QuizModel>, DbErr> {
        let query = Quiz::find().filter(quiz::Column::Key.eq(key));
        query.one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load quiz by key");
        })
    }
}

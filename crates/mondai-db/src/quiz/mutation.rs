use chrono::Utc;
use mondai_entity::quiz;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, NotSet, Set};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Stores a generated quiz under a fresh unique key.
    pub async fn add_quiz<C: ConnectionTrait + TransactionTrait>(
        db: &C,
        name: &str,
        quiz_xml: &str,
    ) -> Result<quiz::Model, DbErr> {
        let txn = db.begin().await?;

        let key = loop {
            let key = Uuid::new_v4().to_string();
            let taken = quiz::Entity::find()
                .filter(quiz::Column::Key.eq(key.as_str()))
                .count(&txn)
                .await?
                > 0;
            if !taken {
                break key;
            }
            tracing::debug!(%key, "quiz key already taken");
        };

        let quiz = quiz::ActiveModel {
            id: NotSet,
            key: Set(key),
            name: Set(name.to_owned()),
            quiz_xml: Set(quiz_xml.to_owned()),
            created_at: Set(Utc::now().naive_utc()),
        };

        let quiz = quiz.insert(&txn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to insert quiz");
        })?;

        txn.commit().await?;

        tracing::info!(key = %quiz.key, "quiz stored");
        Ok(quiz)
    }
}

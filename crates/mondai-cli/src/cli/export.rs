use crate::opt::Export;
use anyhow::{Error, anyhow};
use mondai_db::quiz::Query;
use mondai_db::sea_orm::DatabaseConnection;

pub(crate) async fn export(opt: Export, db: &DatabaseConnection) -> Result<(), Error> {
    let quiz = Query::get_quiz_by_key(db, &opt.key)
        .await?
        .ok_or_else(|| anyhow!("Quiz {} does not exist", opt.key))?;

    println!("{}", quiz.quiz_xml);
    Ok(())
}

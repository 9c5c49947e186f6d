use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                return DomainError::Persistence(format!(
                    "database error {code}: {}",
                    db_err.message()
                ));
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::Persistence("expected row was missing".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

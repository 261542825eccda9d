use crate::db::models::user::{NewUser, User};
use crate::db::DbPool;

/// The `users` table. Constructed once at startup and handed to the API state.
#[derive(Clone)]
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert(&self, user: &NewUser) -> Result<User, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!("Inserted user {} ({})", id, user.name);

        Ok(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
        })
    }

    /// Returns `None` when no row has this id.
    pub async fn update(&self, id: i64, user: &NewUser) -> Result<Option<User>, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        tracing::debug!("Updated user {}", id);

        Ok(Some(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
        }))
    }

    /// Returns `false` when no row has this id.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!("Deleted user {}", id);
        }
        Ok(deleted)
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

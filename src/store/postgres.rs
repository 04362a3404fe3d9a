use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::brand::{Brand, BrandUpdate, CreateBrand};
use crate::models::car::{Car, CarUpdate, CreateCar};
use crate::models::category::{Category, CategoryUpdate, CreateCategory};
use crate::models::colour::{Colour, ColourUpdate, CreateColour};
use crate::models::token::AccessToken;
use crate::models::user::User;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run pending migrations from the migrations/ directory.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    // -- User Operations --

    pub async fn get_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn insert_user(&self, email: &str, password_hash: &str) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    // -- Car Operations --

    pub async fn insert_car(&self, car: &CreateCar) -> anyhow::Result<Car> {
        let row = sqlx::query_as::<_, Car>(
            r#"INSERT INTO cars (name, model, description, image, brand_id, category_id)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, name, model, description, image, brand_id, category_id, created_at, updated_at"#,
        )
        .bind(&car.name)
        .bind(&car.model)
        .bind(&car.description)
        .bind(&car.image)
        .bind(car.brand_id)
        .bind(car.category_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_cars(&self) -> anyhow::Result<Vec<Car>> {
        let rows = sqlx::query_as::<_, Car>(
            "SELECT id, name, model, description, image, brand_id, category_id, created_at, updated_at FROM cars ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_car(&self, id: i64) -> anyhow::Result<Option<Car>> {
        let row = sqlx::query_as::<_, Car>(
            "SELECT id, name, model, description, image, brand_id, category_id, created_at, updated_at FROM cars WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a partial update. Returns the updated row, or `None` when the
    /// id does not exist.
    pub async fn update_car(&self, id: i64, update: &CarUpdate) -> anyhow::Result<Option<Car>> {
        let row = sqlx::query_as::<_, Car>(
            r#"UPDATE cars
               SET name = COALESCE($1, name),
                   model = COALESCE($2, model),
                   description = COALESCE($3, description),
                   image = COALESCE($4, image),
                   brand_id = COALESCE($5, brand_id),
                   category_id = COALESCE($6, category_id),
                   updated_at = NOW()
               WHERE id = $7
               RETURNING id, name, model, description, image, brand_id, category_id, created_at, updated_at"#,
        )
        .bind(&update.name)
        .bind(&update.model)
        .bind(&update.description)
        .bind(&update.image)
        .bind(update.brand_id)
        .bind(update.category_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_car(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Car Colour Operations --

    pub async fn list_car_colours(&self, car_id: i64) -> anyhow::Result<Vec<Colour>> {
        let rows = sqlx::query_as::<_, Colour>(
            r#"SELECT c.id, c.name, c.hex, c.created_at, c.updated_at
               FROM colours c
               JOIN car_colours cc ON cc.colour_id = c.id
               WHERE cc.car_id = $1
               ORDER BY c.id ASC"#,
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn colours_exist(&self, colour_ids: &[i64]) -> anyhow::Result<bool> {
        if colour_ids.is_empty() {
            return Ok(true);
        }
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT id) FROM colours WHERE id = ANY($1)",
        )
        .bind(colour_ids)
        .fetch_one(&self.pool)
        .await?;
        Ok(count as usize == colour_ids.len())
    }

    /// Replace a car's colour set atomically.
    pub async fn set_car_colours(&self, car_id: i64, colour_ids: &[i64]) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM car_colours WHERE car_id = $1")
            .bind(car_id)
            .execute(&mut *tx)
            .await?;
        for colour_id in colour_ids {
            sqlx::query("INSERT INTO car_colours (car_id, colour_id) VALUES ($1, $2)")
                .bind(car_id)
                .bind(colour_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    // -- Brand Operations --

    pub async fn insert_brand(&self, brand: &CreateBrand) -> anyhow::Result<Brand> {
        let row = sqlx::query_as::<_, Brand>(
            r#"INSERT INTO brands (name, image) VALUES ($1, $2)
               RETURNING id, name, image, created_at, updated_at"#,
        )
        .bind(&brand.name)
        .bind(&brand.image)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_brands(&self) -> anyhow::Result<Vec<Brand>> {
        let rows = sqlx::query_as::<_, Brand>(
            "SELECT id, name, image, created_at, updated_at FROM brands ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_brand(&self, id: i64) -> anyhow::Result<Option<Brand>> {
        let row = sqlx::query_as::<_, Brand>(
            "SELECT id, name, image, created_at, updated_at FROM brands WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_brand(
        &self,
        id: i64,
        update: &BrandUpdate,
    ) -> anyhow::Result<Option<Brand>> {
        let row = sqlx::query_as::<_, Brand>(
            r#"UPDATE brands
               SET name = COALESCE($1, name),
                   image = COALESCE($2, image),
                   updated_at = NOW()
               WHERE id = $3
               RETURNING id, name, image, created_at, updated_at"#,
        )
        .bind(&update.name)
        .bind(&update.image)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_brand(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Category Operations --

    pub async fn insert_category(&self, category: &CreateCategory) -> anyhow::Result<Category> {
        let row = sqlx::query_as::<_, Category>(
            r#"INSERT INTO categories (name) VALUES ($1)
               RETURNING id, name, created_at, updated_at"#,
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_categories(&self) -> anyhow::Result<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at, updated_at FROM categories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_category(&self, id: i64) -> anyhow::Result<Option<Category>> {
        let row = sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_category(
        &self,
        id: i64,
        update: &CategoryUpdate,
    ) -> anyhow::Result<Option<Category>> {
        let row = sqlx::query_as::<_, Category>(
            r#"UPDATE categories
               SET name = COALESCE($1, name),
                   updated_at = NOW()
               WHERE id = $2
               RETURNING id, name, created_at, updated_at"#,
        )
        .bind(&update.name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_category(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Colour Operations --

    pub async fn insert_colour(&self, colour: &CreateColour) -> anyhow::Result<Colour> {
        let row = sqlx::query_as::<_, Colour>(
            r#"INSERT INTO colours (name, hex) VALUES ($1, $2)
               RETURNING id, name, hex, created_at, updated_at"#,
        )
        .bind(&colour.name)
        .bind(&colour.hex)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_colours(&self) -> anyhow::Result<Vec<Colour>> {
        let rows = sqlx::query_as::<_, Colour>(
            "SELECT id, name, hex, created_at, updated_at FROM colours ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_colour(&self, id: i64) -> anyhow::Result<Option<Colour>> {
        let row = sqlx::query_as::<_, Colour>(
            "SELECT id, name, hex, created_at, updated_at FROM colours WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_colour(
        &self,
        id: i64,
        update: &ColourUpdate,
    ) -> anyhow::Result<Option<Colour>> {
        let row = sqlx::query_as::<_, Colour>(
            r#"UPDATE colours
               SET name = COALESCE($1, name),
                   hex = COALESCE($2, hex),
                   updated_at = NOW()
               WHERE id = $3
               RETURNING id, name, hex, created_at, updated_at"#,
        )
        .bind(&update.name)
        .bind(&update.hex)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete_colour(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM colours WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -- Access Token Operations --

    pub async fn get_access_token(&self, token: &str) -> anyhow::Result<Option<AccessToken>> {
        let row = sqlx::query_as::<_, AccessToken>(
            "SELECT jti, token, email, created_at, updated_at, expires_at FROM access_tokens WHERE token = $1"
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Archive any live token for the email, then persist the new one.
    /// Single transaction, no row lock: concurrent logins for the same
    /// email remain a documented race.
    pub async fn replace_access_token_for_email(
        &self,
        email: &str,
        jti: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"INSERT INTO expired_access_tokens (jti, token, email, created_at, updated_at, expires_at)
               SELECT jti, token, email, created_at, updated_at, expires_at
               FROM access_tokens WHERE email = $1"#,
        )
        .bind(email)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM access_tokens WHERE email = $1")
            .bind(email)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO access_tokens (jti, token, email, expires_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(jti)
        .bind(token)
        .bind(email)
        .bind(expires_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Move one token to the archive (logout). Returns false when the row
    /// was already gone.
    pub async fn archive_access_token(&self, jti: Uuid) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"INSERT INTO expired_access_tokens (jti, token, email, created_at, updated_at, expires_at)
               SELECT jti, token, email, created_at, updated_at, expires_at
               FROM access_tokens WHERE jti = $1"#,
        )
        .bind(jti)
        .execute(&mut *tx)
        .await?;
        let result = sqlx::query("DELETE FROM access_tokens WHERE jti = $1")
            .bind(jti)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Batch-archive tokens past their expiry. Used by the background job.
    pub async fn archive_expired_tokens(&self) -> anyhow::Result<u64> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            r#"INSERT INTO expired_access_tokens (jti, token, email, created_at, updated_at, expires_at)
               SELECT jti, token, email, created_at, updated_at, expires_at
               FROM access_tokens WHERE expires_at < NOW()"#,
        )
        .execute(&mut *tx)
        .await?;
        let result = sqlx::query("DELETE FROM access_tokens WHERE expires_at < NOW()")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected())
    }
}

use sea_orm_migration::prelude::*;

/// Columns every table starts with.
#[derive(DeriveIden)]
pub enum Base {
    Id,
    CreatedAt,
    UpdatedAt,
}

pub trait BaseColumns {
    /// Adds `id` (uuid primary key, v4 by default), `created_at` and a nullable `updated_at`.
    fn base_columns(&mut self) -> &mut Self;
}

impl BaseColumns for TableCreateStatement {
    fn base_columns(&mut self) -> &mut Self {
        self.col(
            ColumnDef::new(Base::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(
            ColumnDef::new(Base::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        // Stamped by the application on update
        .col(
            ColumnDef::new(Base::UpdatedAt)
                .timestamp_with_time_zone()
                .null(),
        )
    }
}

use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use super::sea_operation;
use crate::table::{Restaurant, Review, User};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Review::Table)
        .col(
            ColumnDef::new(Review::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Review::RestaurantId).integer().not_null())
        .col(ColumnDef::new(Review::UserId).integer().not_null())
        .col(ColumnDef::new(Review::Score).integer().not_null())
        .col(ColumnDef::new(Review::Content).text().not_null())
        .col(ColumnDef::new(Review::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Review::UpdatedAt).big_integer().null())
        .foreign_key(
            ForeignKey::create()
                .from(Review::Table, Review::RestaurantId)
                .to(Restaurant::Table, Restaurant::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Review::Table, Review::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Review::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_review_restaurant_created_at")
        .table(Review::Table)
        .col(Review::RestaurantId)
        .col(Review::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_review_restaurant_created_at")
        .table(Review::Table)
        .to_owned()
}

sea_operation!(CreateIdx1, create_idx_1, drop_idx_1);

use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use super::sea_operation;
use crate::table::{Favorite, Restaurant, User};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Favorite::Table)
        .col(ColumnDef::new(Favorite::RestaurantId).integer().not_null())
        .col(ColumnDef::new(Favorite::UserId).integer().not_null())
        .col(ColumnDef::new(Favorite::CreatedAt).big_integer().not_null())
        .primary_key(
            Index::create()
                .col(Favorite::UserId)
                .col(Favorite::RestaurantId),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Favorite::Table, Favorite::RestaurantId)
                .to(Restaurant::Table, Restaurant::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Favorite::Table, Favorite::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Favorite::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_favorite_user_created_at")
        .table(Favorite::Table)
        .col(Favorite::UserId)
        .col(Favorite::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_favorite_user_created_at")
        .table(Favorite::Table)
        .to_owned()
}

sea_operation!(CreateIdx1, create_idx_1, drop_idx_1);

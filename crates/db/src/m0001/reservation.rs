use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use super::sea_operation;
use crate::table::{Reservation, Restaurant, User};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Reservation::Table)
        .col(
            ColumnDef::new(Reservation::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Reservation::RestaurantId)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(Reservation::UserId).integer().not_null())
        .col(
            ColumnDef::new(Reservation::ReservedDatetime)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(Reservation::NumberOfPeople)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(Reservation::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Reservation::Table, Reservation::RestaurantId)
                .to(Restaurant::Table, Restaurant::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Reservation::Table, Reservation::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Reservation::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_reservation_user_reserved_datetime")
        .table(Reservation::Table)
        .col(Reservation::UserId)
        .col(Reservation::ReservedDatetime)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_reservation_user_reserved_datetime")
        .table(Reservation::Table)
        .to_owned()
}

sea_operation!(CreateIdx1, create_idx_1, drop_idx_1);

use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::sea_operation;
use crate::table::Restaurant;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Restaurant::Table)
        .col(
            ColumnDef::new(Restaurant::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Restaurant::Name)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(Restaurant::Image)
                .string()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Restaurant::Description)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Restaurant::LowestPrice)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(Restaurant::HighestPrice)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(Restaurant::PostalCode)
                .string()
                .not_null()
                .string_len(7),
        )
        .col(
            ColumnDef::new(Restaurant::Address)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(Restaurant::OpeningTime)
                .string()
                .not_null()
                .string_len(5),
        )
        .col(
            ColumnDef::new(Restaurant::ClosingTime)
                .string()
                .not_null()
                .string_len(5),
        )
        .col(
            ColumnDef::new(Restaurant::SeatingCapacity)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Restaurant::Rating)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(
            ColumnDef::new(Restaurant::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Restaurant::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_restaurant_created_at")
        .table(Restaurant::Table)
        .col(Restaurant::CreatedAt)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_restaurant_created_at")
        .table(Restaurant::Table)
        .to_owned()
}

sea_operation!(CreateIdx1, create_idx_1, drop_idx_1);

fn create_idx_2() -> IndexCreateStatement {
    Index::create()
        .name("idx_restaurant_lowest_price")
        .table(Restaurant::Table)
        .col(Restaurant::LowestPrice)
        .to_owned()
}

fn drop_idx_2() -> IndexDropStatement {
    Index::drop()
        .name("idx_restaurant_lowest_price")
        .table(Restaurant::Table)
        .to_owned()
}

sea_operation!(CreateIdx2, create_idx_2, drop_idx_2);

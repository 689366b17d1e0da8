use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::sea_operation;
use crate::table::User;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(User::Table)
        .col(
            ColumnDef::new(User::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(User::Name).string().not_null().string_len(255))
        .col(ColumnDef::new(User::Kana).string().not_null().string_len(255))
        .col(
            ColumnDef::new(User::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(ColumnDef::new(User::Password).string().not_null())
        .col(
            ColumnDef::new(User::PostalCode)
                .string()
                .not_null()
                .string_len(7),
        )
        .col(
            ColumnDef::new(User::Address)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(User::PhoneNumber)
                .string()
                .not_null()
                .string_len(11),
        )
        .col(ColumnDef::new(User::Birthday).string().string_len(8).null())
        .col(
            ColumnDef::new(User::Occupation)
                .string()
                .string_len(255)
                .null(),
        )
        .col(ColumnDef::new(User::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(User::UpdatedAt).big_integer().null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(User::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_user_email")
        .table(User::Table)
        .unique()
        .col(User::Email)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_user_email")
        .table(User::Table)
        .to_owned()
}

sea_operation!(CreateUk1, create_uk_1, drop_uk_1);

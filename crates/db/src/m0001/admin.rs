use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use super::sea_operation;
use crate::table::Admin;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Admin::Table)
        .col(
            ColumnDef::new(Admin::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Admin::Email)
                .string()
                .not_null()
                .string_len(320),
        )
        .col(ColumnDef::new(Admin::Password).string().not_null())
        .col(ColumnDef::new(Admin::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Admin::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_admin_email")
        .table(Admin::Table)
        .unique()
        .col(Admin::Email)
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_admin_email")
        .table(Admin::Table)
        .to_owned()
}

sea_operation!(CreateUk1, create_uk_1, drop_uk_1);

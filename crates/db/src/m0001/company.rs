use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use super::sea_operation;
use crate::table::Company;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Company::Table)
        .col(
            ColumnDef::new(Company::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Company::Name).string().not_null())
        .col(ColumnDef::new(Company::PostalCode).string().not_null())
        .col(ColumnDef::new(Company::Address).string().not_null())
        .col(ColumnDef::new(Company::Representative).string().not_null())
        .col(
            ColumnDef::new(Company::EstablishmentDate)
                .string()
                .not_null(),
        )
        .col(ColumnDef::new(Company::Capital).string().not_null())
        .col(ColumnDef::new(Company::Business).string().not_null())
        .col(
            ColumnDef::new(Company::NumberOfEmployees)
                .string()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Company::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

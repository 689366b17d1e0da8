use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use super::sea_operation;
use crate::table::Term;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Term::Table)
        .col(
            ColumnDef::new(Term::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Term::Content).text().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Term::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

use sea_query::{
    ColumnDef, ConditionalStatement, Expr, ExprTrait, ForeignKey, ForeignKeyAction, Index,
    IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement, TableDropStatement,
};

use super::sea_operation;
use crate::table::{Subscription, User};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Subscription::Table)
        .col(
            ColumnDef::new(Subscription::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Subscription::UserId).integer().not_null())
        .col(
            ColumnDef::new(Subscription::Name)
                .string()
                .not_null()
                .string_len(50),
        )
        .col(
            ColumnDef::new(Subscription::Status)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(Subscription::PaymentMethod)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(Subscription::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(Subscription::EndsAt).big_integer().null())
        .foreign_key(
            ForeignKey::create()
                .from(Subscription::Table, Subscription::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Subscription::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

/// At most one active subscription per member and plan.
fn create_uk_1() -> IndexCreateStatement {
    Index::create()
        .name("uk_subscription_user_name_active")
        .table(Subscription::Table)
        .col(Subscription::UserId)
        .col(Subscription::Name)
        .unique()
        .and_where(Expr::col(Subscription::Status).eq("active"))
        .to_owned()
}

fn drop_uk_1() -> IndexDropStatement {
    Index::drop()
        .name("uk_subscription_user_name_active")
        .table(Subscription::Table)
        .to_owned()
}

sea_operation!(CreateUk1, create_uk_1, drop_uk_1);

use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use super::sea_operation;
use crate::table::{Category, CategoryRestaurant, Restaurant};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Category::Table)
        .col(
            ColumnDef::new(Category::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Category::Name)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(ColumnDef::new(Category::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Category::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_join_table() -> TableCreateStatement {
    Table::create()
        .table(CategoryRestaurant::Table)
        .col(
            ColumnDef::new(CategoryRestaurant::CategoryId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CategoryRestaurant::RestaurantId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(CategoryRestaurant::CategoryId)
                .col(CategoryRestaurant::RestaurantId),
        )
        .foreign_key(
            ForeignKey::create()
                .from(CategoryRestaurant::Table, CategoryRestaurant::CategoryId)
                .to(Category::Table, Category::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(CategoryRestaurant::Table, CategoryRestaurant::RestaurantId)
                .to(Restaurant::Table, Restaurant::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_join_table() -> TableDropStatement {
    Table::drop().table(CategoryRestaurant::Table).to_owned()
}

sea_operation!(CreateJoinTable, create_join_table, drop_join_table);

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_category_restaurant_restaurant_id")
        .table(CategoryRestaurant::Table)
        .col(CategoryRestaurant::RestaurantId)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_category_restaurant_restaurant_id")
        .table(CategoryRestaurant::Table)
        .to_owned()
}

sea_operation!(CreateIdx1, create_idx_1, drop_idx_1);

use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use super::sea_operation;
use crate::table::{RegularHoliday, RegularHolidayRestaurant, Restaurant};

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RegularHoliday::Table)
        .col(
            ColumnDef::new(RegularHoliday::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(RegularHoliday::Day)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(ColumnDef::new(RegularHoliday::DayIndex).integer().null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(RegularHoliday::Table).to_owned()
}

sea_operation!(CreateTable, create_table, drop_table);

fn create_join_table() -> TableCreateStatement {
    Table::create()
        .table(RegularHolidayRestaurant::Table)
        .col(
            ColumnDef::new(RegularHolidayRestaurant::RegularHolidayId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RegularHolidayRestaurant::RestaurantId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(RegularHolidayRestaurant::RegularHolidayId)
                .col(RegularHolidayRestaurant::RestaurantId),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    RegularHolidayRestaurant::Table,
                    RegularHolidayRestaurant::RegularHolidayId,
                )
                .to(RegularHoliday::Table, RegularHoliday::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(
                    RegularHolidayRestaurant::Table,
                    RegularHolidayRestaurant::RestaurantId,
                )
                .to(Restaurant::Table, Restaurant::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_join_table() -> TableDropStatement {
    Table::drop()
        .table(RegularHolidayRestaurant::Table)
        .to_owned()
}

sea_operation!(CreateJoinTable, create_join_table, drop_join_table);

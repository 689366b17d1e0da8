use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum User {
    Table,
    Id,
    Name,
    Kana,
    Email,
    Password,
    PostalCode,
    Address,
    PhoneNumber,
    Birthday,
    Occupation,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Admin {
    Table,
    Id,
    Email,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Restaurant {
    Table,
    Id,
    Name,
    Image,
    Description,
    LowestPrice,
    HighestPrice,
    PostalCode,
    Address,
    OpeningTime,
    ClosingTime,
    SeatingCapacity,
    Rating,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Category {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum CategoryRestaurant {
    Table,
    CategoryId,
    RestaurantId,
}

#[derive(Iden, Clone, Copy)]
pub enum RegularHoliday {
    Table,
    Id,
    Day,
    DayIndex,
}

#[derive(Iden, Clone, Copy)]
pub enum RegularHolidayRestaurant {
    Table,
    RegularHolidayId,
    RestaurantId,
}

#[derive(Iden, Clone, Copy)]
pub enum Review {
    Table,
    Id,
    RestaurantId,
    UserId,
    Score,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Reservation {
    Table,
    Id,
    RestaurantId,
    UserId,
    ReservedDatetime,
    NumberOfPeople,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Favorite {
    Table,
    RestaurantId,
    UserId,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Subscription {
    Table,
    Id,
    UserId,
    Name,
    Status,
    PaymentMethod,
    CreatedAt,
    EndsAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Company {
    Table,
    Id,
    Name,
    PostalCode,
    Address,
    Representative,
    EstablishmentDate,
    Capital,
    Business,
    NumberOfEmployees,
}

#[derive(Iden, Clone, Copy)]
pub enum Term {
    Table,
    Id,
    Content,
}

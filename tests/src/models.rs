use chrono::NaiveDate;
use recast::Record;
use rust_decimal::Decimal;

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct MembershipType {
    pub id: i32,
    pub name: String,
    pub name2: String,
    pub price: Decimal,
    pub discount_rate: u8,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct MembershipTypeDto {
    pub id: u8,

    #[map_from("id")]
    pub id2: i32,

    #[map_from("id")]
    pub id3: u8,

    pub name: String,

    #[map_from("cost")]
    pub price: Decimal,

    pub discount_rate: u8,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct User {
    pub id: i32,

    #[map_from("full_name")]
    pub name: String,

    #[map_from("birth_date")]
    pub birth_date: NaiveDate,

    pub user_name: String,

    #[map_from("workplace_email")]
    pub email: String,

    #[map_from("membership_type_dto")]
    pub membership_type: MembershipType,

    #[map_ignore]
    pub secret: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct UserDto {
    pub id: i32,

    pub name: String,

    #[map_from("name")]
    pub full_name: String,

    #[map_from("birth_date")]
    pub date_of_birth: NaiveDate,

    // Differs from the source's `user_name`, so nothing is paired.
    #[map_from("username")]
    pub user_name: String,

    #[map_from("email")]
    pub workplace_email: String,

    pub email: String,

    #[map_from("membership_type")]
    pub membership_type_dto: MembershipTypeDto,

    #[map_ignore]
    pub secret: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Dog {
    #[map_access(write_only)]
    pub id: i32,

    pub name: String,

    #[map_access(read_only)]
    pub variety: String,

    pub tags: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct DogDto {
    pub id: i32,
    pub name: String,
    pub variety: String,
    pub tags: Vec<String>,
}

pub fn membership_type() -> MembershipType {
    MembershipType {
        id: 1,
        name: "Gold".to_string(),
        discount_rate: 20,
        ..Default::default()
    }
}

pub fn membership_type_dto() -> MembershipTypeDto {
    MembershipTypeDto {
        id: 2,
        name: "Silver".to_string(),
        discount_rate: 15,
        ..Default::default()
    }
}

pub fn user() -> User {
    User {
        name: "Jane Smith".to_string(),
        birth_date: date(1990, 5, 7),
        user_name: "janesmith89".to_string(),
        email: "janesmith89@gmail.com".to_string(),
        membership_type: membership_type(),
        secret: "secret".to_string(),
        ..Default::default()
    }
}

pub fn user_dto() -> UserDto {
    UserDto {
        name: "Jane Smith".to_string(),
        full_name: "Jane Smith".to_string(),
        date_of_birth: date(1990, 5, 7),
        user_name: "janesmith89".to_string(),
        email: "janesmith89@gmail.com".to_string(),
        workplace_email: "jane.smith6@myworkspace.com".to_string(),
        membership_type_dto: membership_type_dto(),
        secret: "secret".to_string(),
        ..Default::default()
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

//! Test Helpers

use jiff::Timestamp;

use crate::domain::{
    products::{
        data::ProductDetails,
        records::{Category, ProductRecord, ProductUuid, Size},
    },
    users::{
        data::NewUser,
        records::{UserRecord, UserUuid},
    },
};

/// Password used for every test account.
pub(crate) const TEST_PASSWORD: &str = "correct horse battery";

pub(crate) fn product_details(name: &str, price: u64) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        brand: "Acme".to_string(),
        color: Some("indigo".to_string()),
        category: Category::Outerwear,
        size: Size::M,
        price,
        available: true,
        image: None,
        description: None,
        rating: Some(4.5),
    }
}

/// A product as the ledger sees it, without touching storage.
pub(crate) fn product_record(price: u64, available: bool) -> ProductRecord {
    let details = product_details("Test Product", price);
    let now = Timestamp::now();

    ProductRecord {
        uuid: ProductUuid::new(),
        name: details.name,
        brand: details.brand,
        color: details.color,
        category: details.category,
        size: details.size,
        price: details.price,
        available,
        image: details.image,
        description: details.description,
        rating: details.rating,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn user_record(email: &str, is_admin: bool) -> UserRecord {
    let now = Timestamp::now();

    UserRecord {
        uuid: UserUuid::new(),
        email: email.to_string(),
        username: "tester".to_string(),
        is_admin,
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        username: "tester".to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

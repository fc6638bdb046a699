//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use shopfront_app::{
    auth::{Claims, MockTokenService},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, CartRecord, CartUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
        },
        products::{
            MockProductsService,
            records::{Category, ProductRecord, ProductUuid, Size},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};
use uuid::Uuid;

use crate::{auth::Authentication, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));
pub(crate) const TEST_ADMIN_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(2));
pub(crate) const OTHER_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(3));

/// One mock per service. Any call without a matching expectation panics.
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) users: MockUsersService,
    pub(crate) tokens: MockTokenService,
}

impl Mocks {
    pub(crate) fn new() -> Self {
        Self {
            products: MockProductsService::new(),
            carts: MockCartsService::new(),
            orders: MockOrdersService::new(),
            users: MockUsersService::new(),
            tokens: MockTokenService::new(),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            users: Arc::new(self.users),
            tokens: Arc::new(self.tokens),
        })
    }

    /// Serve `route` with these mocks as state and `authentication` already resolved.
    pub(crate) fn service(self, authentication: Authentication, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject(authentication))
                .push(route),
        )
    }
}

fn claims(user: UserUuid, is_admin: bool) -> Claims {
    Claims {
        sub: user.into_uuid(),
        is_admin,
        iat: 0,
        exp: i64::MAX,
        iss: "shopfront".to_string(),
    }
}

pub(crate) fn user_claims() -> Claims {
    claims(TEST_USER_UUID, false)
}

pub(crate) fn user() -> Authentication {
    Authentication::Authenticated(user_claims())
}

pub(crate) fn admin() -> Authentication {
    Authentication::Authenticated(claims(TEST_ADMIN_UUID, true))
}

pub(crate) fn make_user(uuid: UserUuid, is_admin: bool) -> UserRecord {
    UserRecord {
        uuid,
        email: "ada@example.com".to_string(),
        username: "ada".to_string(),
        is_admin,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Rain Jacket".to_string(),
        brand: "Acme".to_string(),
        color: Some("navy".to_string()),
        category: Category::Outerwear,
        size: Size::M,
        price: 1000,
        available: true,
        image: None,
        description: None,
        rating: Some(4.0),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(uuid: CartUuid, owner: UserUuid) -> CartRecord {
    CartRecord {
        uuid,
        user_uuid: owner,
        items: Vec::new(),
        subtotal: 0,
        version: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(product: ProductUuid, quantity: u64, price: u64) -> CartItemRecord {
    CartItemRecord {
        product_uuid: product,
        quantity,
        price,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, owner: UserUuid) -> OrderRecord {
    OrderRecord {
        uuid,
        user_uuid: owner,
        items: vec![OrderItemRecord {
            product_uuid: ProductUuid::from_uuid(Uuid::from_u128(10)),
            quantity: 2,
            unit_price: 1000,
        }],
        subtotal: 2000,
        total: 2200,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

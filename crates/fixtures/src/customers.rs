//! Canned customer profile and product list payloads

use chrono::{Duration, Utc};
use shopmock_types::customers::{
	AuthType, Customer, CustomerAddress, CustomerProductList, CustomerProductListItem,
	ProductListType,
};

use crate::{baskets, FixtureIds};

/// The registered fixture shopper
pub fn registered_customer() -> Customer {
	Customer {
		customer_id: FixtureIds::CUSTOMER_ID.to_string(),
		customer_no: FixtureIds::CUSTOMER_NO.to_string(),
		login: FixtureIds::CUSTOMER_EMAIL.to_string(),
		email: FixtureIds::CUSTOMER_EMAIL.to_string(),
		first_name: "Jane".to_string(),
		last_name: "Doe".to_string(),
		auth_type: AuthType::Registered,
		enabled: true,
		creation_date: Utc::now() - Duration::days(400),
		last_login_time: Some(Utc::now() - Duration::hours(3)),
		last_modified: Some(Utc::now() - Duration::days(12)),
		phone_home: Some("(617) 555-0143".to_string()),
		addresses: vec![CustomerAddress {
			address_id: "home".to_string(),
			preferred: true,
			address: baskets::shipping_address(),
		}],
		payment_instruments: vec![],
	}
}

/// The shopper's wish list: the tee master and the hoodie
pub fn wish_list() -> CustomerProductList {
	CustomerProductList {
		id: FixtureIds::WISH_LIST_ID.to_string(),
		list_type: ProductListType::WishList,
		public: false,
		creation_date: Utc::now() - Duration::days(30),
		last_modified: Utc::now() - Duration::days(1),
		customer_product_list_items: vec![
			CustomerProductListItem {
				id: "f9ab2c5e10a1cf0c0c2a0d0e11".to_string(),
				product_id: FixtureIds::TEE_MASTER_ID.to_string(),
				priority: 1,
				public: false,
				quantity: 1,
				purchased_quantity: 0,
				item_type: "product".to_string(),
			},
			CustomerProductListItem {
				id: "a31e7c9b445d1f0c0c2a0d0e72".to_string(),
				product_id: FixtureIds::HOODIE_ID.to_string(),
				priority: 2,
				public: false,
				quantity: 1,
				purchased_quantity: 0,
				item_type: "product".to_string(),
			},
		],
	}
}

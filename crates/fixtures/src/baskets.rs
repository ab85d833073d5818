//! Canned basket payloads

use shopmock_types::{
	baskets::{
		round_cents, Basket, PaymentCard, PaymentInstrument, ProductItem, Shipment,
		ShippingMethod, Taxation,
	},
	models::{Address, CustomerInfo},
};
use uuid::Uuid;

use crate::FixtureIds;

/// Tax rate baked into all canned line items
pub const TAX_RATE: f64 = 0.05;

/// Freshly created basket with no items and the default shipment
pub fn empty_basket() -> Basket {
	let mut basket = Basket::new(
		FixtureIds::CURRENCY,
		CustomerInfo::guest(FixtureIds::GUEST_CUSTOMER_ID),
	);
	basket.taxation = Taxation::Gross;
	basket
}

/// Basket holding one unit of the navy tee variant
pub fn basket_with_item() -> Basket {
	let mut basket = empty_basket();
	basket.add_product_item(product_item(
		FixtureIds::TEE_VARIANT_ID,
		"Classic Crew Tee",
		24.0,
		1,
	));
	basket
}

/// Basket ready for checkout: item, shipping method, address, and card
pub fn basket_with_payment() -> Basket {
	let mut basket = basket_with_item();

	basket.shipping_total = 5.99;
	basket.order_total = round_cents(basket.product_total + basket.shipping_total);
	basket.shipments = vec![Shipment {
		shipment_id: "me".to_string(),
		gift: false,
		shipping_address: Some(shipping_address()),
		shipping_method: Some(standard_shipping()),
	}];
	basket.payment_instruments = vec![PaymentInstrument {
		payment_instrument_id: Uuid::new_v4().to_string(),
		payment_method_id: "CREDIT_CARD".to_string(),
		amount: basket.order_total,
		payment_card: Some(PaymentCard {
			card_type: "Visa".to_string(),
			masked_number: "************1111".to_string(),
			expiration_month: 1,
			expiration_year: 2030,
			holder: "Jane Doe".to_string(),
		}),
	}];
	basket
}

/// Canned line item for the given product; tax derives from the gross rate
pub fn product_item(product_id: &str, product_name: &str, base_price: f64, quantity: u32) -> ProductItem {
	let price = round_cents(base_price * quantity as f64);
	ProductItem {
		item_id: Uuid::new_v4().to_string(),
		product_id: product_id.to_string(),
		product_name: product_name.to_string(),
		quantity,
		base_price,
		price,
		price_after_item_discount: price,
		tax: round_cents(price * TAX_RATE),
		tax_rate: TAX_RATE,
		gift: false,
		bonus_product_line_item: false,
		shipment_id: "me".to_string(),
	}
}

/// Flat-rate ground shipping method used by checkout fixtures
pub fn standard_shipping() -> ShippingMethod {
	ShippingMethod {
		id: "standard".to_string(),
		name: "Ground".to_string(),
		description: Some("Order received within 7-10 business days".to_string()),
		price: 5.99,
	}
}

/// Shipping address of the registered fixture shopper
pub fn shipping_address() -> Address {
	Address {
		first_name: "Jane".to_string(),
		last_name: "Doe".to_string(),
		full_name: Some("Jane Doe".to_string()),
		address1: "5 Wall St".to_string(),
		address2: None,
		city: "Burlington".to_string(),
		state_code: Some("MA".to_string()),
		postal_code: "01803".to_string(),
		country_code: "US".to_string(),
		phone: Some("(617) 555-0143".to_string()),
	}
}

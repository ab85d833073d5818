//! Canned product detail payloads
//!
//! A small apparel catalog: one master product with color/size variants,
//! two simple products. Ids are shared with the basket, order, search,
//! and wish list fixtures.

use std::collections::HashMap;

use shopmock_types::{
	models::Image,
	products::{
		ImageGroup, Inventory, MasterInfo, Product, ProductType, Variant, VariationAttribute,
		VariationAttributeValue,
	},
};

use crate::FixtureIds;

const IMAGE_BASE: &str = "https://static.shopmock.example/images";

/// Every product in the default catalog
pub fn all() -> Vec<Product> {
	vec![
		classic_crew_tee(),
		tee_variant(),
		canvas_tote(),
		trail_zip_hoodie(),
	]
}

/// Master apparel product with color and size variation axes
pub fn classic_crew_tee() -> Product {
	let colors = [("Navy", "NAVY"), ("Heather Grey", "HEATHER")];
	let sizes = [("Small", "S"), ("Medium", "M"), ("Large", "L"), ("X-Large", "XL")];

	let variants = colors
		.iter()
		.flat_map(|(_, color)| {
			sizes.iter().map(move |(_, size)| {
				let mut values = HashMap::new();
				values.insert("color".to_string(), color.to_string());
				values.insert("size".to_string(), size.to_string());
				Variant {
					product_id: format!(
						"classic-crew-tee-{}-{}",
						color.to_lowercase(),
						size.to_lowercase()
					),
					// XL carries a surcharge; everything else sells at base
					price: if *size == "XL" { 26.0 } else { 24.0 },
					orderable: true,
					variation_values: values,
				}
			})
		})
		.collect();

	Product {
		id: FixtureIds::TEE_MASTER_ID.to_string(),
		name: "Classic Crew Tee".to_string(),
		page_title: Some("Classic Crew Tee | Shopmark".to_string()),
		short_description: "A year-round crew-neck tee in combed cotton.".to_string(),
		long_description: Some(
			"Mid-weight combed cotton jersey with a ribbed collar and \
			 a relaxed fit. Pre-shrunk and garment washed."
				.to_string(),
		),
		brand: Some("Shopmark".to_string()),
		currency: FixtureIds::CURRENCY.to_string(),
		price: 24.0,
		price_max: Some(26.0),
		primary_category_id: Some("mens-tops".to_string()),
		product_type: ProductType::master(),
		image_groups: vec![
			image_group("large", FixtureIds::TEE_MASTER_ID, "Classic Crew Tee", 2),
			image_group("small", FixtureIds::TEE_MASTER_ID, "Classic Crew Tee", 1),
		],
		variation_attributes: vec![
			VariationAttribute {
				id: "color".to_string(),
				name: "Color".to_string(),
				values: colors
					.iter()
					.map(|(name, value)| VariationAttributeValue {
						name: name.to_string(),
						value: value.to_string(),
						orderable: true,
					})
					.collect(),
			},
			VariationAttribute {
				id: "size".to_string(),
				name: "Size".to_string(),
				values: sizes
					.iter()
					.map(|(name, value)| VariationAttributeValue {
						name: name.to_string(),
						value: value.to_string(),
						orderable: true,
					})
					.collect(),
			},
		],
		variants,
		inventory: Some(inventory(120, 150)),
		master: None,
		min_order_quantity: 1,
		step_quantity: 1,
	}
}

/// The navy/medium tee variant referenced by basket and order fixtures
pub fn tee_variant() -> Product {
	let mut values = HashMap::new();
	values.insert("color".to_string(), "NAVY".to_string());
	values.insert("size".to_string(), "M".to_string());

	Product {
		id: FixtureIds::TEE_VARIANT_ID.to_string(),
		name: "Classic Crew Tee".to_string(),
		page_title: Some("Classic Crew Tee | Shopmark".to_string()),
		short_description: "A year-round crew-neck tee in combed cotton.".to_string(),
		long_description: None,
		brand: Some("Shopmark".to_string()),
		currency: FixtureIds::CURRENCY.to_string(),
		price: 24.0,
		price_max: None,
		primary_category_id: Some("mens-tops".to_string()),
		product_type: ProductType::variant(),
		image_groups: vec![image_group(
			"large",
			FixtureIds::TEE_VARIANT_ID,
			"Classic Crew Tee, Navy",
			1,
		)],
		variation_attributes: vec![
			VariationAttribute {
				id: "color".to_string(),
				name: "Color".to_string(),
				values: vec![VariationAttributeValue {
					name: "Navy".to_string(),
					value: "NAVY".to_string(),
					orderable: true,
				}],
			},
			VariationAttribute {
				id: "size".to_string(),
				name: "Size".to_string(),
				values: vec![VariationAttributeValue {
					name: "Medium".to_string(),
					value: "M".to_string(),
					orderable: true,
				}],
			},
		],
		variants: vec![Variant {
			product_id: FixtureIds::TEE_VARIANT_ID.to_string(),
			price: 24.0,
			orderable: true,
			variation_values: values,
		}],
		inventory: Some(inventory(34, 40)),
		master: Some(MasterInfo {
			master_id: FixtureIds::TEE_MASTER_ID.to_string(),
			orderable: true,
			price: 24.0,
		}),
		min_order_quantity: 1,
		step_quantity: 1,
	}
}

/// Simple accessory product with no variations
pub fn canvas_tote() -> Product {
	Product {
		id: FixtureIds::TOTE_ID.to_string(),
		name: "Everyday Canvas Tote".to_string(),
		page_title: Some("Everyday Canvas Tote | Shopmark".to_string()),
		short_description: "Heavy canvas tote with interior pocket.".to_string(),
		long_description: None,
		brand: Some("Shopmark".to_string()),
		currency: FixtureIds::CURRENCY.to_string(),
		price: 18.0,
		price_max: None,
		primary_category_id: Some("womens-accessories".to_string()),
		product_type: ProductType::item(),
		image_groups: vec![image_group(
			"large",
			FixtureIds::TOTE_ID,
			"Everyday Canvas Tote",
			1,
		)],
		variation_attributes: vec![],
		variants: vec![],
		inventory: Some(inventory(210, 210)),
		master: None,
		min_order_quantity: 1,
		step_quantity: 1,
	}
}

/// Simple outerwear product, the priciest item in the catalog
pub fn trail_zip_hoodie() -> Product {
	Product {
		id: FixtureIds::HOODIE_ID.to_string(),
		name: "Trail Zip Hoodie".to_string(),
		page_title: Some("Trail Zip Hoodie | Shopmark".to_string()),
		short_description: "Brushed fleece full-zip with thumbhole cuffs.".to_string(),
		long_description: None,
		brand: Some("Shopmark".to_string()),
		currency: FixtureIds::CURRENCY.to_string(),
		price: 68.0,
		price_max: None,
		primary_category_id: Some("mens-tops".to_string()),
		product_type: ProductType::item(),
		image_groups: vec![image_group(
			"large",
			FixtureIds::HOODIE_ID,
			"Trail Zip Hoodie",
			2,
		)],
		variation_attributes: vec![],
		variants: vec![],
		inventory: Some(inventory(8, 12)),
		master: None,
		min_order_quantity: 1,
		step_quantity: 1,
	}
}

fn image_group(view_type: &str, product_id: &str, alt: &str, count: u32) -> ImageGroup {
	ImageGroup {
		view_type: view_type.to_string(),
		images: (1..=count)
			.map(|n| {
				Image::new(
					alt,
					format!("{}/{}/{}-{}.jpg", IMAGE_BASE, product_id, view_type, n),
				)
			})
			.collect(),
		variation_attributes: vec![],
	}
}

fn inventory(ats: u32, stock_level: u32) -> Inventory {
	Inventory {
		id: FixtureIds::INVENTORY_LIST_ID.to_string(),
		ats,
		stock_level,
		orderable: ats > 0,
		backorderable: false,
		preorderable: false,
	}
}

//! Canned product search payloads

use std::collections::HashMap;

use shopmock_types::{
	models::Image,
	search::{
		ProductRef, ProductSearchHit, ProductSearchResult, Refinement, RefinementValue,
		SortingOption,
	},
};

use crate::FixtureIds;

/// The canned search result template: three apparel hits with color,
/// size, and price refinements. Served for every query with the inbound
/// query text echoed back.
pub fn apparel_search_result() -> ProductSearchResult {
	let hits = vec![
		ProductSearchHit {
			product_id: FixtureIds::TEE_MASTER_ID.to_string(),
			product_name: "Classic Crew Tee".to_string(),
			currency: FixtureIds::CURRENCY.to_string(),
			price: 24.0,
			price_max: Some(26.0),
			orderable: true,
			image: Some(Image::new(
				"Classic Crew Tee",
				"https://static.shopmock.example/images/classic-crew-tee/large-1.jpg",
			)),
			represented_product: Some(ProductRef {
				id: FixtureIds::TEE_VARIANT_ID.to_string(),
			}),
		},
		ProductSearchHit {
			product_id: FixtureIds::HOODIE_ID.to_string(),
			product_name: "Trail Zip Hoodie".to_string(),
			currency: FixtureIds::CURRENCY.to_string(),
			price: 68.0,
			price_max: None,
			orderable: true,
			image: Some(Image::new(
				"Trail Zip Hoodie",
				"https://static.shopmock.example/images/trail-zip-hoodie/large-1.jpg",
			)),
			represented_product: None,
		},
		ProductSearchHit {
			product_id: FixtureIds::TOTE_ID.to_string(),
			product_name: "Everyday Canvas Tote".to_string(),
			currency: FixtureIds::CURRENCY.to_string(),
			price: 18.0,
			price_max: None,
			orderable: true,
			image: Some(Image::new(
				"Everyday Canvas Tote",
				"https://static.shopmock.example/images/canvas-tote/large-1.jpg",
			)),
			represented_product: None,
		},
	];
	let total = hits.len() as u32;

	ProductSearchResult {
		limit: total,
		hits,
		query: String::new(),
		refinements: vec![
			Refinement {
				attribute_id: "c_refinementColor".to_string(),
				label: "Color".to_string(),
				values: vec![
					RefinementValue {
						label: "Navy".to_string(),
						value: "NAVY".to_string(),
						hit_count: 2,
					},
					RefinementValue {
						label: "Heather Grey".to_string(),
						value: "HEATHER".to_string(),
						hit_count: 1,
					},
				],
			},
			Refinement {
				attribute_id: "size".to_string(),
				label: "Size".to_string(),
				values: ["S", "M", "L", "XL"]
					.iter()
					.map(|size| RefinementValue {
						label: size.to_string(),
						value: size.to_string(),
						hit_count: 2,
					})
					.collect(),
			},
			Refinement {
				attribute_id: "price".to_string(),
				label: "Price".to_string(),
				values: vec![
					RefinementValue {
						label: "$0 - $25".to_string(),
						value: "(0..25)".to_string(),
						hit_count: 2,
					},
					RefinementValue {
						label: "$50 - $100".to_string(),
						value: "(50..100)".to_string(),
						hit_count: 1,
					},
				],
			},
		],
		sorting_options: vec![
			SortingOption {
				id: "best-matches".to_string(),
				label: "Best Matches".to_string(),
			},
			SortingOption {
				id: "price-low-to-high".to_string(),
				label: "Price Low To High".to_string(),
			},
			SortingOption {
				id: "price-high-to-low".to_string(),
				label: "Price High To Low".to_string(),
			},
		],
		selected_sorting_option: Some("best-matches".to_string()),
		selected_refinements: HashMap::new(),
		offset: 0,
		total,
	}
}

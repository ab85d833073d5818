//! Canned category tree payloads

use shopmock_types::categories::Category;

/// Full storefront catalog tree: root -> departments -> sections
pub fn storefront_catalog() -> Category {
	Category {
		id: "root".to_string(),
		name: "Storefront Catalog".to_string(),
		page_title: Some("Shopmark".to_string()),
		page_description: None,
		parent_category_id: None,
		categories: vec![
			Category {
				id: "mens".to_string(),
				name: "Mens".to_string(),
				page_title: Some("Mens | Shopmark".to_string()),
				page_description: Some("Menswear, from basics to outerwear.".to_string()),
				parent_category_id: Some("root".to_string()),
				categories: vec![
					leaf("mens-tops", "Tops", "mens"),
					leaf("mens-bottoms", "Bottoms", "mens"),
				],
			},
			Category {
				id: "womens".to_string(),
				name: "Womens".to_string(),
				page_title: Some("Womens | Shopmark".to_string()),
				page_description: Some("Womenswear and accessories.".to_string()),
				parent_category_id: Some("root".to_string()),
				categories: vec![
					leaf("womens-dresses", "Dresses", "womens"),
					leaf("womens-accessories", "Accessories", "womens"),
				],
			},
		],
	}
}

fn leaf(id: &str, name: &str, parent: &str) -> Category {
	Category {
		id: id.to_string(),
		name: name.to_string(),
		page_title: Some(format!("{} | Shopmark", name)),
		page_description: None,
		parent_category_id: Some(parent.to_string()),
		categories: vec![],
	}
}

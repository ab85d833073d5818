use serde::Deserialize;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 200;

/// limit/offset query parameters shared by the paged endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
	pub limit: Option<u32>,
	pub offset: Option<u32>,
}

impl PageQuery {
	/// Effective (limit, offset) with defaults applied and the limit clamped
	pub fn bounds(&self) -> (u32, u32) {
		let limit = self
			.limit
			.unwrap_or(DEFAULT_PAGE_SIZE)
			.clamp(1, MAX_PAGE_SIZE);
		let offset = self.offset.unwrap_or(0);
		(limit, offset)
	}
}

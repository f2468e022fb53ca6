// src/application/dto/pagination.rs
use crate::domain::pagination::PageNumber;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub number: u32,
    pub num_pages: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, position: PageNumber) -> Self {
        Self {
            items,
            total,
            number: position.number,
            num_pages: position.num_pages,
            per_page: position.per_page,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }
}

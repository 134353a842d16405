use crate::catalog;
use crate::state::Category;
use anyhow::Result;
use std::path::Path;

pub fn run(state_path: &Path) -> Result<()> {
    super::category::run(state_path, Category::Databases, catalog::DATABASES)
}

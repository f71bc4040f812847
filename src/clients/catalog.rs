use tokio::sync::mpsc;

use crate::catalog::CatalogError;
use crate::client_method;
use crate::domain::CatalogProduct;
use crate::messages::CatalogRequest;

/// Client for the product catalog service.
///
/// Read-only: sends a batch of product ids and receives authoritative
/// price/name/id data for each of them.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub(crate) fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }
}

client_method!(CatalogClient => fn validate_products(product_ids: Vec<u32>) -> Vec<CatalogProduct> as CatalogRequest::ValidateProducts, Error = CatalogError);
